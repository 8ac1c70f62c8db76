use std::future::Future;

use tokio_util::sync::CancellationToken as InternalCancellationToken;

use crate::error::Error;

/// CancellationToken wrapper for tokio_util::sync::CancellationToken for avoiding Dependency Hell
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    inner: InternalCancellationToken,
}

impl CancellationToken {
    /// Creates a new CancellationToken in the non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: InternalCancellationToken::new(),
        }
    }

    /// Creates a CancellationToken which will get cancelled whenever the current token gets cancelled.
    pub fn child_token(&self) -> CancellationToken {
        Self {
            inner: self.inner.child_token(),
        }
    }

    /// Cancel the [`CancellationToken`] and all child tokens which had been derived from it.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Returns `true` if the `CancellationToken` had been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    /// Returns a `Future` that gets fulfilled when cancellation is requested.
    pub async fn cancelled(&self) {
        self.inner.cancelled().await
    }
}

/// Runs the action until it completes or the token is cancelled, whichever comes first.
pub(crate) async fn invoke<S>(
    cancel: Option<&CancellationToken>,
    action: impl Future<Output = Result<S, Error>>,
) -> Result<S, Error> {
    match cancel {
        Some(cancel) => {
            tokio::select! {
                _ = cancel.cancelled() => Err(Error::Cancelled),
                v = action => v
            }
        }
        None => action.await,
    }
}
