//! Prefix tree storage for declared key sequences.

use std::collections::{HashMap, HashSet};

use chord_parser::KeyToken;

/// One position in the binding prefix tree.
///
/// Invariant: a token position is either interior or the exact end of a
/// declared sequence, never both. Insertion enforces this before any node
/// is created, so a child recorded in `terminal` is always a [`Node::Leaf`]
/// and a child absent from it is always a [`Node::Internal`].
#[derive(Debug)]
pub(crate) enum Node<A> {
	/// Interior position: child tokens, plus the set of child tokens known
	/// to end a complete sequence.
	Internal {
		children: HashMap<KeyToken, Node<A>>,
		terminal: HashSet<KeyToken>,
	},
	/// Exact end of a declared sequence, holding its action.
	Leaf(A),
}

/// Three-way child lookup result.
#[derive(Debug)]
pub(crate) enum Child<'a, A> {
	/// No declared sequence continues with the token.
	None,
	/// The token extends at least one longer sequence.
	Internal(&'a Node<A>),
	/// The token completes a sequence.
	Leaf(&'a A),
}

/// Which conflict rule an insertion violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Conflict {
	/// Same sequence declared twice.
	Duplicate,
	/// The new sequence continues past an existing complete binding.
	Shadows,
	/// The new sequence ends on an existing interior position.
	Prefix,
}

impl<A> Node<A> {
	/// Creates an empty interior node.
	pub(crate) fn internal() -> Self {
		Self::Internal {
			children: HashMap::new(),
			terminal: HashSet::new(),
		}
	}

	/// Inserts `token` followed by `rest`, checking the prefix-freedom
	/// invariant at every step before any node is created.
	pub(crate) fn insert(&mut self, token: &KeyToken, rest: &[KeyToken], action: A) -> Result<(), Conflict> {
		// A non-terminal child is always interior and descent stops at
		// terminal children, so this never lands on a leaf.
		let Self::Internal { children, terminal } = self else {
			return Err(Conflict::Shadows);
		};

		if terminal.contains(token) {
			return Err(if rest.is_empty() { Conflict::Duplicate } else { Conflict::Shadows });
		}

		match rest.split_first() {
			None => {
				if children.contains_key(token) {
					return Err(Conflict::Prefix);
				}
				terminal.insert(token.clone());
				children.insert(token.clone(), Node::Leaf(action));
				Ok(())
			}
			Some((next, rest)) => children
				.entry(token.clone())
				.or_insert_with(Node::internal)
				.insert(next, rest, action),
		}
	}

	/// Looks up a child by token.
	pub(crate) fn child(&self, token: &KeyToken) -> Child<'_, A> {
		match self {
			Self::Leaf(_) => Child::None,
			Self::Internal { children, .. } => match children.get(token) {
				None => Child::None,
				Some(Node::Leaf(action)) => Child::Leaf(action),
				Some(node) => Child::Internal(node),
			},
		}
	}
}
