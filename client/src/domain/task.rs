//! Cancellable fetch tasks owned by their consumer.
//!
//! A front end issues each request as a [`FetchTask`] and keeps the handle for
//! as long as it cares about the answer. Dropping the handle cancels the
//! request; an outcome is never delivered to a consumer that went away.

use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

/// A spawned request whose lifetime is tied to this handle.
pub struct FetchTask<T> {
    handle: JoinHandle<Option<T>>,
    cancel: CancellationToken,
    _guard: DropGuard,
}

impl<T: Send + 'static> FetchTask<T> {
    /// Spawn `future` on the current tokio runtime.
    ///
    /// # Examples
    /// ```
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// use holidaze::domain::FetchTask;
    ///
    /// let task = FetchTask::spawn(async { 40 + 2 });
    /// assert_eq!(task.outcome().await, Some(42));
    /// # }
    /// ```
    #[must_use]
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::spawn_with_token(&CancellationToken::new(), future)
    }

    /// Spawn `future`, cancelled when `token` (or this handle) is cancelled.
    #[must_use]
    pub fn spawn_with_token<F>(token: &CancellationToken, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let child = token.child_token();
        let watched = child.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                () = watched.cancelled() => {
                    debug!("fetch task cancelled");
                    None
                }
                value = future => Some(value),
            }
        });
        Self {
            handle,
            _guard: child.clone().drop_guard(),
            cancel: child,
        }
    }

    /// Token that cancels this task; clone it into signal handlers.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Cancel the task. Its outcome becomes `None`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the task. `None` when it was cancelled.
    ///
    /// # Panics
    ///
    /// Resumes the panic of a future that panicked, so a crash is never
    /// reported as a cancellation.
    pub async fn outcome(mut self) -> Option<T> {
        // Waiting on the handle keeps the guard alive until completion.
        match (&mut self.handle).await {
            Ok(value) => value,
            Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Completion and cancellation of fetch tasks.

    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn completed_task_yields_its_value() {
        let task = FetchTask::spawn(async { "venues" });
        assert_eq!(task.outcome().await, Some("venues"));
    }

    #[tokio::test]
    async fn cancelled_task_yields_nothing() {
        let task = FetchTask::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            1
        });
        task.cancel();
        assert_eq!(task.outcome().await, None);
    }

    #[tokio::test]
    async fn parent_token_cancels_the_task() {
        let parent = CancellationToken::new();
        let task = FetchTask::spawn_with_token(&parent, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            1
        });
        parent.cancel();
        assert_eq!(task.outcome().await, None);
    }

    #[tokio::test]
    #[should_panic(expected = "venue decoder exploded")]
    async fn a_panicking_future_is_not_reported_as_cancelled() {
        let task = FetchTask::spawn(async {
            "not a price"
                .parse::<u32>()
                .expect("venue decoder exploded")
        });
        assert_eq!(task.outcome().await, Some(0));
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels_the_work() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let task = FetchTask::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        let token = task.cancellation_token();
        drop(task);

        assert!(token.is_cancelled());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }
}
