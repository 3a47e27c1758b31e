// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-06"
// driver = "Isaac Clayton"

//! Deadline-bounded execution of background work.
//!
//! [`run_with_timeout`] races a unit of work against a timer and reports
//! whichever resolves first as an [`Outcome`]. The race never cancels
//! the work: when the timer wins, the work keeps running on its own task
//! and its eventual result is dropped. Callers that need the work to
//! actually stop must thread a cooperative stop signal into it; nothing
//! here does that for them.
//!
//! A zero deadline is not special-cased. The select polls its branches
//! in random order, so the timer and the work genuinely race even when
//! the timer is already due.

use std::future::Future;
use std::time::Duration;

use tokio::task;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

/// The result of racing work against a deadline. Exactly one variant,
/// decided by whichever event resolved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The work finished first. Carries whatever the work produced,
    /// including its own failure value if it produced one.
    Completed(T),
    /// The deadline fired first. The work is still running somewhere.
    TimedOut,
}

impl<T> Outcome<T> {
    /// True if the work finished before the deadline.
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    /// True if the deadline fired first.
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Outcome::TimedOut)
    }

    /// The carried result, if the work finished in time.
    pub fn into_completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::TimedOut => None,
        }
    }
}

/// Run `work` on a blocking task, waiting at most `deadline` for it.
///
/// The caller suspends until the first of {work completion, timer
/// expiry} and never polls. If `work` fails, the failure comes back as a
/// value inside [`Outcome::Completed`]; the race itself has no error
/// kind. If `work` panics, the panic is resumed on the caller.
pub async fn run_with_timeout<F, T>(work: F, deadline: Duration) -> Outcome<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let handle = task::spawn_blocking(work);
    race(handle, deadline).await
}

/// Race an already-constructed future against `deadline`.
///
/// The future is spawned as its own task, so like the blocking form it
/// keeps running if the timer wins.
pub async fn spawn_with_timeout<Fut>(work: Fut, deadline: Duration) -> Outcome<Fut::Output>
where
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    let handle = task::spawn(work);
    race(handle, deadline).await
}

/// The race itself. Dropping the handle on the timer branch detaches
/// the task rather than aborting it.
async fn race<T>(handle: JoinHandle<T>, deadline: Duration) -> Outcome<T> {
    tokio::select! {
        finished = handle => match finished {
            Ok(value) => {
                debug!("work completed before deadline");
                Outcome::Completed(value)
            }
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => panic!("worker task failed to join: {err}"),
        },
        _ = time::sleep(deadline) => {
            debug!(?deadline, "deadline fired before work completed");
            Outcome::TimedOut
        }
    }
}
