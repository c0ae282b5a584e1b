//! redbench CLI
//!
//! Set/get latency comparison across Redis client stacks.

use clap::Parser;

use redbench::config::Config;
use redbench::driver::BenchmarkDriver;
use redbench::suite;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    let driver = BenchmarkDriver::new(config.iterations, config.concurrency);

    suite::run_all(&config, &driver).await?;

    Ok(())
}
