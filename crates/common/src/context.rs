//! Request context: one deadline and one cancellation signal per operation
//!
//! A [`RequestContext`] is created by the top-level caller and threaded
//! through every network call an operation makes, including an implicit
//! token refresh. Whichever fires first (cancellation, deadline, or the
//! wrapped future) decides the outcome.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Why a context stopped an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The cancellation token fired
    Cancelled,

    /// The deadline elapsed; carries the budget the context was created with
    DeadlineExceeded(Duration),
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Operation cancelled"),
            Self::DeadlineExceeded(budget) => {
                write!(f, "Operation exceeded its deadline of {}ms", budget.as_millis())
            }
        }
    }
}

impl std::error::Error for ContextError {}

/// Deadline and cancellation scope for a single caller-level operation
#[derive(Debug, Clone)]
pub struct RequestContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
    budget: Duration,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestContext {
    /// Context with no deadline and a fresh cancellation token
    #[must_use]
    pub fn new() -> Self {
        Self { cancellation: CancellationToken::new(), deadline: None, budget: Duration::ZERO }
    }

    /// Context that expires `timeout` from now
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().deadline_after(timeout)
    }

    /// Replace the deadline with one `timeout` from now
    #[must_use]
    pub fn deadline_after(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self.budget = timeout;
        self
    }

    /// Bind this context to an externally owned cancellation token
    #[must_use]
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` when the context is unbounded
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Drive `future` to completion unless the context stops it first
    ///
    /// # Errors
    /// Returns [`ContextError::Cancelled`] if the token fires (or already
    /// fired), and [`ContextError::DeadlineExceeded`] once the deadline
    /// passes. The wrapped future is dropped in both cases.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, ContextError>
    where
        F: Future,
    {
        if self.cancellation.is_cancelled() {
            return Err(ContextError::Cancelled);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancellation.cancelled() => Err(ContextError::Cancelled),
            () = deadline => Err(ContextError::DeadlineExceeded(self.budget)),
            output = future => Ok(output),
        }
    }
}
