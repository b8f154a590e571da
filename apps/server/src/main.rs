use anyhow::Context;
use enlist::kernel::config::load_config;
use enlist_logger::Logger;
use enlist_server::Server;

#[enlist_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let path = std::env::args().nth(1);
    let cfg = load_config(path).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build().await?.run().await
}
