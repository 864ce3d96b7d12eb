//! Key event disambiguation for raw, inconsistent host key streams.
//!
//! Hosts push raw key-down/key-press events and timer expirations into a
//! [`Controller`], which suppresses naked modifier presses, repairs
//! modifier flags the host failed to set, de-duplicates the overlap
//! between the key-down and key-press phases, supports a double-escape
//! enable/disable gesture, and hands each surviving event — normalized,
//! with its canonical token — to a single registered receiver.
//!
//! An Emacs-like sequence can span both phases: for `C-x b`, the `C-x`
//! arrives as a key-down and the `b` as a key-press.

pub use controller::{Controller, DEFAULT_WINDOW, Quirks};
pub use event::{EventPhase, NormalizedEvent, RawKeyEvent};
#[cfg(any(test, feature = "test-support"))]
pub use scheduler::manual::ManualScheduler;
pub use scheduler::{Scheduler, TimerId};

pub mod keycodes;

mod controller;
mod event;
mod hysteresis;
mod scheduler;
