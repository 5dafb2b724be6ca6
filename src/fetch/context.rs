//! Per-call execution context.
//!
//! Every public operation takes a `RequestContext`. It carries a cancellation
//! token and an optional deadline; the transport races each round trip against
//! both so that a cancelled or expired call aborts the in-flight request.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error_handling::TrendsError;

/// Cancellation and deadline for a single client call.
///
/// Cloning shares the cancellation token, so cancelling any clone cancels all
/// of them.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use gtrends::RequestContext;
///
/// let ctx = RequestContext::new().with_timeout(Duration::from_secs(5));
/// let token = ctx.cancellation_token().clone();
/// // token.cancel() from another task aborts the call
/// # drop(token);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context with no deadline and a fresh cancellation token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deadline to `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Replaces the cancellation token, e.g. with a child of an application-wide token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Returns the token that cancels calls made with this context.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancels every call using this context (or a clone of it).
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drives `fut` to completion unless the context is cancelled or its deadline passes first.
    pub(crate) async fn run<F, T>(&self, fut: F) -> Result<T, TrendsError>
    where
        F: Future<Output = Result<T, TrendsError>>,
    {
        if self.cancel.is_cancelled() {
            return Err(TrendsError::Cancelled);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(TrendsError::Cancelled),
            _ = deadline => Err(TrendsError::DeadlineExceeded),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_passes_through_result() {
        let ctx = RequestContext::new();
        let result = ctx.run(async { Ok::<_, TrendsError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_run_already_cancelled() {
        let ctx = RequestContext::new();
        ctx.cancel();
        let result = ctx.run(async { Ok::<_, TrendsError>(()) }).await;
        assert!(matches!(result, Err(TrendsError::Cancelled)));
    }

    #[tokio::test]
    async fn test_run_cancelled_while_pending() {
        let ctx = RequestContext::new();
        let token = ctx.cancellation_token().clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });
        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok::<_, TrendsError>(())
            })
            .await;
        assert!(matches!(result, Err(TrendsError::Cancelled)));
    }

    #[tokio::test]
    async fn test_run_deadline_exceeded() {
        let ctx = RequestContext::new().with_timeout(Duration::from_millis(20));
        let result = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok::<_, TrendsError>(())
            })
            .await;
        assert!(matches!(result, Err(TrendsError::DeadlineExceeded)));
    }

    #[test]
    fn test_clones_share_cancellation() {
        let ctx = RequestContext::new();
        let clone = ctx.clone();
        clone.cancel();
        assert!(ctx.cancellation_token().is_cancelled());
    }
}
