use std::future::Future;
use std::panic::{AssertUnwindSafe, UnwindSafe, catch_unwind};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use pin_project::pin_project;

use crate::error::{Panic, PanicPredicate};
use crate::snare::Snare;

/// Adapts panicking futures into futures that resolve to `Result`.
///
/// "Rejection" here is a panic raised while the wrapped future is polled.
/// The inner [`Snare`] is shared behind an `Arc`, so one `AsyncSnare` can
/// cover any number of in-flight calls.
pub struct AsyncSnare<P> {
    inner: Arc<Snare<P>>,
}

impl<P> AsyncSnare<P>
where
    P: PanicPredicate,
{
    pub fn from(snare: Snare<P>) -> Self {
        AsyncSnare {
            inner: Arc::new(snare),
        }
    }

    /// Wraps `future` so that it resolves to `Ok` on completion and to
    /// `Err` when a poll panics with a payload the predicate keeps.
    ///
    /// An unmatched payload resumes unwinding out of the returned future's
    /// `poll`, so the adapted computation fails exactly as the bare one
    /// would have. The predicate is evaluated synchronously after the inner
    /// future settles; it is never awaited. As with
    /// [`catch_unwind`](std::panic::catch_unwind), wrap the future in
    /// [`AssertUnwindSafe`] to vouch for its captured state.
    pub fn call<F>(&self, future: F) -> SnareFuture<F, P>
    where
        F: Future,
    {
        let snare = AsyncSnare {
            inner: self.inner.clone(),
        };

        SnareFuture { snare, future }
    }
}

#[pin_project]
pub struct SnareFuture<F, P> {
    snare: AsyncSnare<P>,
    #[pin]
    future: F,
}

impl<F, P> Future for SnareFuture<F, P>
where
    F: Future + UnwindSafe,
    P: PanicPredicate,
{
    type Output = Result<F::Output, Panic>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match catch_unwind(AssertUnwindSafe(|| this.future.poll(cx))) {
            Ok(Poll::Ready(ok)) => Poll::Ready(Ok(ok)),
            Ok(Poll::Pending) => Poll::Pending,
            Err(payload) => Poll::Ready(Err(this.snare.inner.snag(Panic::new(payload)))),
        }
    }
}
