use std::net::SocketAddr;

use clap::Parser;
use script_brief::{
    config::{self, AppConfig, ProxyCredentials},
    openai::OpenAIClient,
    server,
    tracing::init_tracing_subscriber,
    yt::innertube::InnerTubeClient,
    BriefProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "script-brief", about = "Keyword-focused YouTube script briefing API")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Chat completion model used for both generation calls
    #[arg(long, env = "OPENAI_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature, 0 to 1
    #[arg(long, env = "OPENAI_TEMPERATURE", default_value_t = config::DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Summary character limit (declared, not enforced)
    #[arg(long, env = "LIMIT_TEXT_NUM", default_value_t = config::DEFAULT_LIMIT_TEXT_NUM)]
    limit_text_num: usize,

    /// Minimum hashtag count (declared, not enforced)
    #[arg(long, env = "HASHTAG_MIN_CNT", default_value_t = config::DEFAULT_HASHTAG_MIN_CNT)]
    hashtag_min_cnt: usize,

    /// Number of hashtags requested from the model
    #[arg(long, env = "HASHTAG_MAX_CNT", default_value_t = config::DEFAULT_HASHTAG_MAX_CNT)]
    hashtag_max_cnt: usize,

    /// Webshare proxy username for transcript retrieval
    #[arg(long, env = "PROXY_USERNAME")]
    proxy_username: Option<String>,

    /// Webshare proxy password for transcript retrieval
    #[arg(long, env = "PROXY_PASSWORD")]
    proxy_password: Option<String>,

    /// Address the server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _sentry_guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    let _log_guard = init_tracing_subscriber()?;

    let mut config = AppConfig::new(cli.openai_key);
    config.model = cli.model;
    config.temperature = cli.temperature;
    config.limit_text_num = cli.limit_text_num;
    config.hashtag_min_cnt = cli.hashtag_min_cnt;
    config.hashtag_max_cnt = cli.hashtag_max_cnt;
    config.proxy = match (cli.proxy_username, cli.proxy_password) {
        (Some(username), Some(password)) => Some(ProxyCredentials { username, password }),
        _ => None,
    };

    let transcript_fetcher = match &config.proxy {
        Some(proxy) => InnerTubeClient::with_webshare_proxy(&proxy.username, &proxy.password)?,
        None => InnerTubeClient::new(),
    };
    let summarizer = OpenAIClient::new(&config);

    let processor = BriefProcessorBuilder::new()
        .transcript_fetcher(transcript_fetcher)
        .summarizer(summarizer)
        .build();

    let app = server::router(processor);

    let listener = tokio::net::TcpListener::bind(cli.bind_addr).await?;
    tracing::info!(addr = %cli.bind_addr, model = %config.model, "script-brief listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
