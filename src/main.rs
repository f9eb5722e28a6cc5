use std::sync::Arc;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error};

// 从 lib.rs 导入模块
use trackademy_admin::cli;
use trackademy_admin::client::{
    ApiClient, FileSessionStore, LogRedirect, MemorySessionStore, SessionStore,
};
use trackademy_admin::config::AppConfig;
use trackademy_admin::errors::TrackademyError;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("{}", TrackademyError::from(e).format_simple());
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 初始化日志
    let stderr_log = std::io::stderr();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stderr_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    debug!(
        "{} {} ({}), API: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.system_name,
        config.api.base_url
    );

    let code = match run(config).await {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            error!("Command failed: {}", e);
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            1
        }
    };

    debug!(
        "Finished in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 退出前刷新日志
    drop(guard);
    std::process::exit(code);
}

async fn run(config: &'static AppConfig) -> trackademy_admin::errors::Result<String> {
    let command = cli::parse(std::env::args().skip(1))?;

    let session: Arc<dyn SessionStore> = match config.session_path() {
        Some(path) => Arc::new(FileSessionStore::open(path)?),
        None => Arc::new(MemorySessionStore::new()),
    };
    let client = ApiClient::from_config(&config.api, session, Arc::new(LogRedirect))?;

    cli::execute(command, &client, config).await
}
