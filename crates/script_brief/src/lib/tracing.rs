use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const SERVICE_NAME: &str = "script-brief";
const LOG_FILE: &str = "app.log";

/// Installs the global subscriber: bunyan-formatted lines to stdout and to
/// a non-blocking `app.log` appender. The returned guard must be held for
/// the lifetime of the process so buffered log lines are flushed.
pub fn init_tracing_subscriber() -> anyhow::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(SERVICE_NAME.into(), std::io::stdout))
        .with(BunyanFormattingLayer::new(SERVICE_NAME.into(), file_writer))
        .with(sentry_tracing::layer())
        .try_init()?;

    Ok(guard)
}
