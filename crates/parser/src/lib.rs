//! Canonical key token grammar.
//!
//! Parses user-supplied key descriptors such as `"C-x"`, `"S-M-C-a"` or
//! `"UP"` into the canonical token form `[C-][M-][S-]<symbol>`:
//! - modifier letters appear in fixed alphabetical order (Ctrl, Meta/Alt,
//!   Shift)
//! - `<symbol>` is a lowercase letter/digit, a named special key (`UP`,
//!   `F1`, `SPC`, ...) or the literal hyphen
//!
//! Tokens are produced two ways — [`KeyToken::normalize`] from descriptor
//! text and [`KeyToken::compose`] from live modifier flags — and both agree
//! on the canonical form.

pub use modifiers::Modifiers;
pub use token::{GrammarError, KeyToken};

mod modifiers;
mod token;
