//! Per-consumer cursor over a binding registry.

use chord_parser::KeyToken;

use crate::registry::Registry;
use crate::trie::{Child, Node};

/// Result of feeding one token to a [`Matcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a, A> {
	/// No declared sequence continues with the token; the cursor was
	/// reset to the root.
	None,
	/// The token extends at least one declared sequence; feed more
	/// tokens. The engine imposes no timeout of its own — callers that
	/// want one keep it themselves.
	Partial,
	/// A sequence completed; the cursor was reset to the root.
	Complete(&'a A),
}

/// Cursor over one [`Registry`], fed one token per call.
///
/// Cheap to create — use one per independent listening context. Matchers
/// over the same registry share nothing and never interfere.
#[derive(Debug)]
pub struct Matcher<'a, A> {
	registry: &'a Registry<A>,
	current: &'a Node<A>,
}

impl<'a, A> Matcher<'a, A> {
	pub(crate) fn new(registry: &'a Registry<A>) -> Self {
		Self {
			registry,
			current: registry.root(),
		}
	}

	/// Consumes one token and reports the match state.
	pub fn receive(&mut self, token: &KeyToken) -> MatchResult<'a, A> {
		match self.current.child(token) {
			Child::None => {
				self.current = self.registry.root();
				MatchResult::None
			}
			Child::Internal(node) => {
				self.current = node;
				MatchResult::Partial
			}
			Child::Leaf(action) => {
				self.current = self.registry.root();
				MatchResult::Complete(action)
			}
		}
	}

	/// Returns the cursor to the root, abandoning any partial sequence
	/// (used when the caller detects an unrelated interruption, e.g.
	/// focus loss).
	pub fn reset(&mut self) {
		self.current = self.registry.root();
	}
}
