use std::time::Duration;

const IP_CHECK_URL: &str = "https://httpbin.org/ip";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Logs the current egress IP as seen without the proxy. Best effort: every
/// failure path is logged and swallowed, the caller's outcome is unaffected.
pub async fn log_public_ip() {
    let probe = reqwest::Client::new()
        .get(IP_CHECK_URL)
        .timeout(PROBE_TIMEOUT)
        .send()
        .await;

    match probe {
        Ok(resp) => match resp.text().await {
            Ok(body) => tracing::info!(ip = %body.trim(), "current egress IP (no proxy)"),
            Err(e) => tracing::warn!(error = %e, "failed to read IP probe response"),
        },
        Err(e) => tracing::warn!(error = %e, "failed to check current IP"),
    }
}
