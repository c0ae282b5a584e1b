//! Fan-out/fan-in benchmark execution.

use std::future::Future;
use std::time::Instant;

use tokio::task::JoinHandle;

use crate::error::Result;

/// Executes a unit of work across a fixed pool of concurrent workers.
///
/// The unit of work receives a global iteration index; worker `w` owns the
/// disjoint slice `[w * chunk, (w + 1) * chunk)` where
/// `chunk = iterations / concurrency`, and runs its slice strictly
/// sequentially. The remainder of an uneven division is dropped.
pub struct BenchmarkDriver {
    iterations: usize,
    concurrency: usize,
}

impl BenchmarkDriver {
    pub fn new(iterations: usize, concurrency: usize) -> Self {
        assert!(concurrency > 0, "concurrency must be positive");
        BenchmarkDriver {
            iterations,
            concurrency,
        }
    }

    /// Run the full configuration and return wall-clock elapsed milliseconds.
    ///
    /// The clock spans task spawning through completion of the slowest
    /// worker; the timing is only produced after every worker has joined.
    /// The first worker error aborts the run with no timing value.
    pub async fn run<F, Fut>(&self, work: F) -> Result<u64>
    where
        F: Fn(usize) -> Fut + Clone + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let chunk = self.iterations / self.concurrency;
        let start = Instant::now();

        let workers: Vec<JoinHandle<Result<()>>> = (0..self.concurrency)
            .map(|worker| {
                let work = work.clone();
                tokio::spawn(async move {
                    for i in worker * chunk..(worker + 1) * chunk {
                        work(i).await?;
                    }
                    Ok(())
                })
            })
            .collect();

        for handle in workers {
            handle.await??;
        }

        Ok(start.elapsed().as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[tokio::test]
    async fn even_split_runs_every_iteration_once() {
        let driver = BenchmarkDriver::new(100, 10);
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let (c, s) = (counter.clone(), seen.clone());
        driver
            .run(move |i| {
                let (c, s) = (c.clone(), s.clone());
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    s.lock().unwrap().push(i);
                    Ok(())
                }
            })
            .await
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 100);
        let unique: HashSet<usize> = seen.lock().unwrap().iter().copied().collect();
        assert_eq!(unique, (0..100).collect::<HashSet<_>>());
    }

    #[tokio::test]
    async fn measures_after_all_workers_join() {
        // Two workers, two sequential 25ms delays each: the run can never
        // finish faster than one worker's sequential share.
        let driver = BenchmarkDriver::new(4, 2);
        let elapsed = driver
            .run(|_| async {
                tokio::time::sleep(Duration::from_millis(25)).await;
                Ok(())
            })
            .await
            .unwrap();

        assert!(elapsed >= 50, "elapsed {elapsed}ms beat one worker's share");
    }

    #[tokio::test]
    async fn worker_error_aborts_the_run() {
        let driver = BenchmarkDriver::new(10, 2);
        let result = driver
            .run(|i| async move {
                if i == 3 {
                    Err(ClientError::Operation("boom".into()).into())
                } else {
                    Ok(())
                }
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn concurrency_one_is_a_sequential_loop() {
        let driver = BenchmarkDriver::new(16, 1);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        driver
            .run(move |i| {
                let s = s.clone();
                async move {
                    s.lock().unwrap().push(i);
                    Ok(())
                }
            })
            .await
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), (0..16).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn uneven_split_drops_the_remainder() {
        let driver = BenchmarkDriver::new(10, 3);
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        driver
            .run(move |_| {
                let c = c.clone();
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .await
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 9);
    }
}
