use std::panic::{UnwindSafe, catch_unwind};

use crate::error::{AnyPanic, Panic, PanicPredicate};

/// Adapts panicking calls into `Result` values.
///
/// A `Snare` closes over a single [`PanicPredicate`]; the callable, with its
/// arguments already captured, is handed to [`call`](Snare::call) per
/// invocation. It holds no other state, so a shared `Snare` can serve any
/// number of overlapping calls independently.
#[derive(Debug)]
pub struct Snare<P = AnyPanic> {
    predicate: P,
}

impl Snare {
    /// A snare that captures every panic.
    pub fn new() -> Self {
        Snare { predicate: AnyPanic }
    }
}

impl Default for Snare {
    fn default() -> Self {
        Snare::new()
    }
}

impl<P> Snare<P>
where
    P: PanicPredicate,
{
    /// A snare that only captures panics matching `predicate`; anything
    /// else keeps unwinding.
    pub fn of(predicate: P) -> Self {
        Snare { predicate }
    }

    /// Invokes `f` once, mapping a normal return to `Ok` and a captured
    /// panic to `Err`.
    ///
    /// When the predicate rejects the payload, this call panics with the
    /// original payload unchanged, exactly as a direct call to `f` would
    /// have. A value returned by `f` is always the `Ok` payload as-is, even
    /// when it is itself a `Result`.
    ///
    /// The predicate runs on the caller's thread, once per captured panic.
    /// A predicate that itself panics propagates that panic immediately.
    pub fn call<F, T>(&self, f: F) -> Result<T, Panic>
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match catch_unwind(f) {
            Ok(ok) => Ok(ok),
            Err(payload) => Err(self.snag(Panic::new(payload))),
        }
    }

    /// Capture-or-release step shared with the async adapter. Returns the
    /// panic only when the predicate keeps it.
    pub(crate) fn snag(&self, panic: Panic) -> Panic {
        if self.predicate.matches(&panic) {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = ?panic.message(), "panic captured");
            panic
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = ?panic.message(), "panic released");
            panic.resume()
        }
    }
}
