use anyhow::Context;
use whub::domain::config::ApiConfig;
use whub::kernel::config::load_config;
use whub_logger::Logger;
use whub_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME"))
        .level_name(&cfg.logging.level)?
        .json(cfg.logging.json);
    if let Some(path) = &cfg.logging.path {
        logger = logger.path(path);
    }
    let _log = logger.init()?;

    Server::builder().config(cfg).build().await?.run().await
}
