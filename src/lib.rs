//! Set/get latency comparison across Redis client stacks.
//!
//! Measures round-trip SET and GET latency of three Redis-protocol client
//! stacks against two protocol-compatible backends (Redis and Dragonfly)
//! under concurrent load. The driver fans a fixed iteration count out over
//! a pool of workers and reports wall-clock elapsed time per run.

pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod suite;

pub use client::{KvClient, ManagedClient, MiniRedisClient, MultiplexedClient};
pub use config::Config;
pub use driver::BenchmarkDriver;
pub use error::{BenchError, ClientError};
