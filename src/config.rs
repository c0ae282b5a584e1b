//! Process-wide benchmark configuration.

use clap::Parser;

/// Fixed for the lifetime of the process; parsed once before any benchmark
/// executes and never altered during the run.
#[derive(Parser, Debug)]
#[command(name = "redbench")]
#[command(about = "Set/get latency comparison across Redis client stacks")]
pub struct Config {
    /// Redis server URL
    #[arg(long, default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// Dragonfly server URL
    #[arg(long, default_value = "redis://127.0.0.1:7380")]
    pub dragonfly_url: String,

    /// Total operations per timed run
    #[arg(short, long, default_value = "100000")]
    pub iterations: usize,

    /// Number of concurrent workers
    #[arg(short, long, default_value = "10")]
    pub concurrency: usize,
}

impl Config {
    /// The two backends in benchmark order.
    pub fn backends(&self) -> [(&'static str, &str); 2] {
        [
            ("Redis", self.redis_url.as_str()),
            ("Dragonfly", self.dragonfly_url.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_constants() {
        let config = Config::parse_from(["redbench"]);

        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.dragonfly_url, "redis://127.0.0.1:7380");
        assert_eq!(config.iterations, 100_000);
        assert_eq!(config.concurrency, 10);
    }
}
