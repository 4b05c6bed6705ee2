mod command;
mod config;
mod console;
mod logger;
mod render;

use insight_client::RosterSession;

use crate::config::ConsoleConfig;
use crate::console::{Console, report_health};
use crate::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境 (.env, 日志)
    dotenv::dotenv().ok();
    let config = ConsoleConfig::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!(base_url = %config.base_url, "Customer insight console starting");

    // 2. 网关
    let client_config = config.client_config();
    let gateway = client_config.build_gateway()?;
    report_health(&gateway).await;

    // 3. 会话 + 交互循环
    let session = RosterSession::new(gateway, &client_config);
    Console::new(session).run().await
}
