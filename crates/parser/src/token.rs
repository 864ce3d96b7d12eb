//! Key token type and the descriptor grammar.
//!
//! A descriptor is split on `-` into a run of modifier markers (`C`, `M`,
//! `S`) followed by exactly one key symbol. Because the delimiter and the
//! hyphen key collide on the same character, empty segments after the
//! markers are preserved positionally: an all-empty suffix denotes a
//! literal hyphen key, so `"C-M-S--"` round-trips unchanged.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use thiserror::Error;

use crate::Modifiers;

const MARKERS: [&str; 3] = ["C", "M", "S"];

/// Error raised for a malformed key descriptor.
///
/// Raised synchronously at declaration time; a registry build that hits one
/// must abort rather than skip the entry, since a partially built registry
/// can hide conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
	/// A modifier marker appeared after the first non-marker segment.
	#[error("modifier key in wrong position in {0:?}")]
	ModifierPosition(String),
	/// More than one key symbol in a single binding slot (`C-a-b`).
	/// Sequential slots must be declared as separate descriptors.
	#[error("only one key per binding slot in {0:?}")]
	MultipleKeys(String),
	/// A multi-character key symbol containing lowercase letters.
	#[error("alphabetic keys must be lower case in {0:?}")]
	UpperCase(String),
}

/// Canonical textual form of one physical key combination.
///
/// Shape is `[C-][M-][S-]<symbol>` with the modifier letters in fixed
/// alphabetical order. Equality is structural string equality, so tokens
/// built from descriptor text and tokens built from live events compare
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyToken(String);

impl KeyToken {
	/// Normalizes a key descriptor into its canonical token.
	///
	/// Modifier markers are sorted into canonical order (`C` < `M` < `S`
	/// lexically, so a plain sort canonicalizes); repeated markers are
	/// tolerated since only set membership matters downstream.
	///
	/// # Errors
	///
	/// Returns a [`GrammarError`] for markers in the suffix position, more
	/// than one key symbol per slot, or multi-character symbols containing
	/// lowercase letters.
	///
	/// # Examples
	///
	/// ```
	/// use chord_parser::KeyToken;
	///
	/// let token = KeyToken::normalize("S-M-C-a").unwrap();
	/// assert_eq!(token.as_str(), "C-M-S-a");
	/// ```
	pub fn normalize(text: &str) -> Result<Self, GrammarError> {
		let segments: Vec<&str> = text.split('-').collect();
		let split = segments.iter().position(|s| !MARKERS.contains(s)).unwrap_or(segments.len());
		let (prefix, suffix) = segments.split_at(split);

		check_suffix(text, suffix)?;

		let mut prefix = prefix.to_vec();
		prefix.sort_unstable();

		let prefix = rejoin(&prefix);
		let suffix = rejoin(suffix);
		if prefix.is_empty() {
			Ok(Self(suffix))
		} else {
			Ok(Self(format!("{prefix}-{suffix}")))
		}
	}

	/// Assembles a canonical token from modifier flags and a key symbol.
	///
	/// This is the constructor the event textualizer uses; it emits the
	/// same form [`normalize`](Self::normalize) would for the equivalent
	/// descriptor.
	pub fn compose(modifiers: Modifiers, symbol: &str) -> Self {
		let mut text = String::with_capacity(symbol.len() + 6);
		if modifiers.ctrl {
			text.push_str("C-");
		}
		if modifiers.alt {
			text.push_str("M-");
		}
		if modifiers.shift {
			text.push_str("S-");
		}
		text.push_str(symbol);
		Self(text)
	}

	/// The canonical token text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// Validates the suffix segments of a descriptor.
///
/// Empty segments are legal (they encode the hyphen key) and contribute no
/// content. The case check fires only for segments longer than one
/// character that contain a lowercase letter — a lone letter always passes,
/// as do all-uppercase special names.
fn check_suffix(text: &str, suffix: &[&str]) -> Result<(), GrammarError> {
	let mut count = 0;
	for segment in suffix {
		if MARKERS.contains(segment) {
			return Err(GrammarError::ModifierPosition(text.to_string()));
		}
		if segment.is_empty() {
			continue;
		}
		if segment.len() > 1 && segment.chars().any(|c| c.is_ascii_lowercase()) {
			return Err(GrammarError::UpperCase(text.to_string()));
		}
		count += 1;
		if count > 1 {
			return Err(GrammarError::MultipleKeys(text.to_string()));
		}
	}
	Ok(())
}

/// Rejoins split segments, keeping one separator per gap so that empty
/// segments reconstruct the literal hyphens that produced them.
fn rejoin(segments: &[&str]) -> String {
	let mut out = String::new();
	for (i, segment) in segments.iter().enumerate() {
		out.push_str(segment);
		if i != segments.len() - 1 {
			out.push('-');
		}
	}
	out
}

impl fmt::Display for KeyToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Deref for KeyToken {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for KeyToken {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl FromStr for KeyToken {
	type Err = GrammarError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::normalize(s)
	}
}
