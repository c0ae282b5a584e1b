//! Drives the six client-backend benchmark combinations.

use tracing::info;

use crate::client::{KvClient, ManagedClient, MiniRedisClient, MultiplexedClient};
use crate::config::Config;
use crate::driver::BenchmarkDriver;
use crate::error::Result;

/// Timing pair for one client-backend combination, in milliseconds.
pub struct Timings {
    pub set_ms: u64,
    pub get_ms: u64,
}

/// Time a SET run then a GET run on a shared client handle.
///
/// The handle is released on every exit path; a timed-run error takes
/// precedence over a close error when both occur.
pub async fn bench_client<C: KvClient + 'static>(
    client: C,
    driver: &BenchmarkDriver,
) -> Result<Timings> {
    let timed = time_set_get(&client, driver).await;
    let closed = client.close().await;

    let timings = timed?;
    closed?;
    Ok(timings)
}

async fn time_set_get<C: KvClient + 'static>(
    client: &C,
    driver: &BenchmarkDriver,
) -> Result<Timings> {
    let set_client = client.clone();
    let set_ms = driver
        .run(move |i| {
            let client = set_client.clone();
            async move {
                client
                    .set(&format!("key{i}"), format!("value{i}").as_bytes())
                    .await?;
                Ok(())
            }
        })
        .await?;

    let get_client = client.clone();
    let get_ms = driver
        .run(move |i| {
            let client = get_client.clone();
            async move {
                client.get(&format!("key{i}")).await?;
                Ok(())
            }
        })
        .await?;

    Ok(Timings { set_ms, get_ms })
}

/// Run every client stack against every backend and print one timing line
/// per combination.
pub async fn run_all(config: &Config, driver: &BenchmarkDriver) -> Result<()> {
    println!("Starting Parallel Benchmarks...");

    for (backend, url) in config.backends() {
        info!(backend, url, "connecting redis-multiplexed");
        let client = MultiplexedClient::connect(url).await?;
        report("redis-multiplexed", backend, bench_client(client, driver).await?);
    }

    for (backend, url) in config.backends() {
        info!(backend, url, "connecting redis-managed");
        let client = ManagedClient::connect(url).await?;
        report("redis-managed", backend, bench_client(client, driver).await?);
    }

    for (backend, url) in config.backends() {
        info!(backend, url, "connecting mini-redis");
        let client = MiniRedisClient::connect(url).await?;
        report("mini-redis", backend, bench_client(client, driver).await?);
    }

    Ok(())
}

fn report(client: &str, backend: &str, timings: Timings) {
    println!(
        "{client} ({backend}) Set Time: {} ms, Get Time: {} ms",
        timings.set_ms, timings.get_ms
    );
}
