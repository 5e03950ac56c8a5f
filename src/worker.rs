use crate::error::Result;
use std::thread;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// How often a poll-once unit is repeated.
///
/// `iterations: None` repeats until the unit fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub interval: Duration,
    pub iterations: Option<u64>,
}

impl Default for Schedule {
    fn default() -> Schedule {
        Schedule {
            interval: DEFAULT_INTERVAL,
            iterations: None,
        }
    }
}

impl Schedule {
    pub fn bounded(interval: Duration, iterations: u64) -> Schedule {
        Schedule {
            interval,
            iterations: Some(iterations),
        }
    }

    /// Runs `tick` once per iteration, sleeping `interval` in between.
    /// The first error stops the loop and is returned.
    pub fn drive<F>(&self, mut tick: F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        let mut iteration = 0;
        loop {
            if let Some(limit) = self.iterations {
                if iteration >= limit {
                    return Ok(());
                }
            }
            log::debug!("iteration {}", iteration);
            tick(iteration)?;
            iteration += 1;

            if self.iterations.map_or(true, |limit| iteration < limit) {
                thread::sleep(self.interval);
            }
        }
    }
}

/// Runs `attempt` `n` times concurrently, one thread per attempt id, and
/// returns once every attempt has finished. Outcomes are in attempt order.
///
/// ```
/// let ids = storeclient::worker::burst(4, |id| id * 10);
/// assert_eq!(ids, vec![0, 10, 20, 30]);
/// ```
pub fn burst<T, F>(n: usize, attempt: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let attempt = &attempt;
    thread::scope(|scope| {
        let handles: Vec<_> = (0..n)
            .map(|id| scope.spawn(move || attempt(id)))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(outcome) => outcome,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
