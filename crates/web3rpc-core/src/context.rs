//! Ambient call context: cancellation and deadline.
//!
//! Every namespace method takes a [`CallContext`]. The library never
//! interprets it beyond propagating it to the single transport round trip:
//! a cancelled or expired context fails the call, nothing else.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::TransportError;

/// Cancellation and deadline for one or more calls.
///
/// Cloning shares the cancellation signal; [`child`](Self::child) derives a
/// context that is cancelled with its parent but can also be cancelled alone.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derive a child context, cancelled along with this one and sharing its deadline.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derive a child context with an additional timeout. The earlier deadline wins.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        Self {
            cancel: self.cancel.child_token(),
            deadline: Some(match self.deadline {
                Some(parent) => parent.min(deadline),
                None => deadline,
            }),
        }
    }

    /// Cancel this context and every child derived from it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The token backing this context, for wiring into other tasks.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The reason this context is done, or `None` while it is still live.
    pub fn err(&self) -> Option<TransportError> {
        if self.cancel.is_cancelled() {
            return Some(TransportError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(TransportError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drive `fut` until it completes or the context is done, whichever is first.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => Err(TransportError::Cancelled),
                    res = tokio::time::timeout_at(deadline, fut) => {
                        res.map_err(|_| TransportError::DeadlineExceeded)?
                    }
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => Err(TransportError::Cancelled),
                    res = fut => res,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn background_runs_to_completion() {
        let ctx = CallContext::background();
        let out = ctx.run(async { Ok::<_, TransportError>(5u8) }).await.unwrap();
        assert_eq!(out, 5);
        assert!(ctx.err().is_none());
    }

    #[tokio::test]
    async fn cancelled_before_start() {
        let ctx = CallContext::background();
        ctx.cancel();
        let err = ctx
            .run(async { Ok::<_, TransportError>(()) })
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Cancelled));
    }

    #[tokio::test]
    async fn cancel_interrupts_pending_future() {
        let ctx = CallContext::background();
        let trigger = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });
        let err = ctx
            .run(std::future::pending::<Result<(), TransportError>>())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Cancelled));
    }

    #[tokio::test]
    async fn deadline_interrupts_pending_future() {
        let ctx = CallContext::with_timeout(Duration::from_millis(20));
        let err = ctx
            .run(std::future::pending::<Result<(), TransportError>>())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::DeadlineExceeded));
        assert!(matches!(ctx.err(), Some(TransportError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn child_follows_parent_but_not_reverse() {
        let parent = CallContext::background();
        let child = parent.child();
        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());

        let other = parent.child();
        parent.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn child_keeps_earlier_deadline() {
        let parent = CallContext::with_timeout(Duration::from_millis(10));
        let child = parent.child_with_timeout(Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());
    }
}
