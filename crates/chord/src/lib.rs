//! Chorded key binding engine.
//!
//! Emacs/Vim-style multi-key bindings over raw, unreliable host key
//! events, in three layers re-exported here:
//!
//! - [`parser`]: the canonical key token grammar (`"C-x"`, `"S-M-C-a"`,
//!   `"UP"`)
//! - core: the conflict-checked binding [`Registry`] and the
//!   per-consumer [`Matcher`]
//! - [`controller`]: disambiguation of raw key-down/key-press streams
//!   into normalized, token-carrying events
//!
//! Declared bindings flow through the grammar into the registry once, at
//! startup, where duplicate and prefix conflicts fail loudly. At runtime
//! the controller repairs the raw event stream and each listening scope
//! feeds the resulting tokens to its own matcher, which reports no-match,
//! partial, or the completed binding's action.

pub use chord_controller as controller;
pub use chord_core::{Binding, BuildError, ConflictError, Declarations, MatchResult, Matcher, Registry};
pub use chord_parser as parser;
pub use chord_parser::{GrammarError, KeyToken, Modifiers};
