use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::panic::resume_unwind;

/// An unwind payload captured from a panicking call.
///
/// Panics carry an arbitrary `Box<dyn Any + Send>` value: `panic!("literal")`
/// produces a `&'static str`, `panic!("{}", x)` a `String`, and
/// [`std::panic::panic_any`] whatever it was given. `Panic` owns that box
/// unchanged, so downcasting recovers the exact value that was thrown.
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Panic { payload }
    }

    /// Borrows the raw payload.
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    /// Takes the raw payload back out.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Returns `true` if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Attempts to take the payload as a `T`, handing `self` back on
    /// mismatch.
    pub fn downcast<T: Any>(self) -> Result<Box<T>, Panic> {
        match self.payload.downcast::<T>() {
            Ok(t) => Ok(t),
            Err(payload) => Err(Panic { payload }),
        }
    }

    /// The panic message, when the payload is one of the two string shapes
    /// `panic!` itself produces. `panic_any` payloads yield `None`.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            Some(*s)
        } else if let Some(s) = self.payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Continues unwinding with the original payload, exactly as if the
    /// panic had never been caught.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => write!(f, "Panic({msg:?})"),
            None => f.write_str("Panic(..)"),
        }
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(msg) => f.write_str(msg),
            None => f.write_str("panic with non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

/// Decides whether a captured [`Panic`] is kept as an `Err` or released to
/// keep unwinding.
pub trait PanicPredicate {
    fn matches(&self, panic: &Panic) -> bool;
}

impl<F> PanicPredicate for F
where
    F: Fn(&Panic) -> bool,
{
    fn matches(&self, panic: &Panic) -> bool {
        self(panic)
    }
}

/// Matches every panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnyPanic;

impl PanicPredicate for AnyPanic {
    fn matches(&self, _panic: &Panic) -> bool {
        true
    }
}

/// Matches panics whose payload is a `T`.
///
/// Narrowing stays a two-step affair: the predicate answers yes or no, and
/// the caller extracts the typed value with [`Panic::downcast`] afterwards.
pub struct PayloadIs<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T: Any> PayloadIs<T> {
    pub fn new() -> Self {
        PayloadIs {
            marker: PhantomData,
        }
    }
}

impl<T: Any> Default for PayloadIs<T> {
    fn default() -> Self {
        PayloadIs::new()
    }
}

impl<T: Any> PanicPredicate for PayloadIs<T> {
    fn matches(&self, panic: &Panic) -> bool {
        panic.is::<T>()
    }
}
