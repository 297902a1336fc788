use reserve_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志); guard 需存活到进程结束
    let (config, _log_guard) = setup_environment();

    print_banner();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Reserve server starting..."
    );

    // 2. 启动 HTTP 服务器
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
