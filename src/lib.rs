//! Convert panicking calls into `Result` values, with selective
//! re-panicking.
//!
//! A [`Snare`] wraps a call in [`std::panic::catch_unwind`]: a normal
//! return becomes `Ok`, a panic becomes an `Err` carrying the original
//! unwind payload as a [`Panic`]. An optional [`PanicPredicate`] narrows
//! what gets caught; payloads the predicate rejects resume unwinding
//! untouched, so they reach the adapter's caller exactly as a direct call
//! would have delivered them.
//!
//! ```rust
//! use resnare::Snare;
//!
//! let snare = Snare::new();
//! let xs = vec![1, 2, 3];
//!
//! let i = 7;
//! match snare.call(|| xs[i]) {
//!     Ok(x) => println!("got {x}"),
//!     Err(panic) => println!("index blew up: {panic}"),
//! }
//! ```
//!
//! Selective capture keeps one payload type and releases everything else:
//!
//! ```rust
//! use std::panic::panic_any;
//!
//! use resnare::{PayloadIs, Snare};
//!
//! #[derive(Debug)]
//! struct Timeout;
//!
//! let snare = Snare::of(PayloadIs::<Timeout>::new());
//! let res = snare.call(|| -> u32 { panic_any(Timeout) });
//! assert!(res.unwrap_err().is::<Timeout>());
//! ```
//!
//! The async twin lives in [`r#async`]: an [`r#async::AsyncSnare`] wraps a
//! future and applies the same capture-or-release logic to panics raised
//! while it is polled.

pub mod r#async;
mod error;
mod snare;

pub use crate::error::{AnyPanic, Panic, PanicPredicate, PayloadIs};
pub use crate::snare::Snare;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
