//! Conflict-checked binding registry and key sequence matching.
//!
//! Declared key sequences are normalized through the grammar in
//! [`chord_parser`] and inserted into a prefix tree that rejects, at build
//! time, any pair of sequences where one duplicates or prefixes the other.
//! A [`Matcher`] is a cheap per-consumer cursor over the built [`Registry`]
//! that consumes one token at a time and reports no-match, partial, or the
//! completed binding's action.
//!
//! Configuration-time problems fail loudly ([`BuildError`]); at match time
//! there are no error conditions — unmatched input resets the cursor and
//! moves on.

pub use binding::{Binding, Declarations};
pub use matcher::{MatchResult, Matcher};
pub use registry::{BuildError, ConflictError, Registry};

mod binding;
mod matcher;
mod registry;
mod trie;
