//! Binding registry construction with conflict detection.

use chord_parser::{GrammarError, KeyToken};
use thiserror::Error;
use tracing::debug;

use crate::binding::Binding;
use crate::matcher::Matcher;
use crate::trie::{Conflict, Node};

/// Conflict between declared key sequences, detected at insert time.
///
/// Each subkind is distinct so callers and tests can assert which rule
/// fired; the payload is the offending sequence with tokens joined by
/// spaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
	/// The same sequence was declared twice.
	#[error("key sequence duplicates another: {0}")]
	Duplicate(String),
	/// The new sequence continues past an existing complete binding,
	/// making that binding a prefix of the new one.
	#[error("key sequence makes an existing one a prefix: {0}")]
	ShadowsExisting(String),
	/// The new sequence ends inside an existing longer binding's path.
	#[error("key sequence is a prefix of an existing one: {0}")]
	PrefixOfExisting(String),
	/// A binding declared an empty key sequence.
	#[error("empty key sequence")]
	EmptySequence,
}

/// Error aborting a whole registry build.
///
/// Both taxonomies are fatal to the batch: skipping a malformed or
/// conflicting entry would leave a partially built registry that can hide
/// conflicts behind the dropped entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	/// A key descriptor failed to normalize.
	#[error(transparent)]
	Grammar(#[from] GrammarError),
	/// Two declared sequences conflict.
	#[error(transparent)]
	Conflict(#[from] ConflictError),
}

/// Prefix tree of declared bindings, mapping key sequences to actions.
///
/// Built once from a declaration batch; more bindings may be inserted
/// afterward through the same conflict-checked primitive. Matching never
/// mutates the registry, so any number of [`Matcher`]s can cursor over it
/// independently.
#[derive(Debug)]
pub struct Registry<A> {
	root: Node<A>,
}

impl<A> Default for Registry<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A> Registry<A> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self { root: Node::internal() }
	}

	/// Builds a registry from a batch of binding declarations.
	///
	/// # Errors
	///
	/// Returns the first [`GrammarError`] or [`ConflictError`] hit; the
	/// whole build aborts rather than skipping the entry.
	pub fn build<I>(bindings: I) -> Result<Self, BuildError>
	where
		A: Clone,
		I: IntoIterator<Item = Binding<A>>,
	{
		let mut registry = Self::new();
		let mut count = 0usize;
		for binding in bindings {
			registry.add(&binding)?;
			count += 1;
		}
		debug!(bindings = count, "binding registry built");
		Ok(registry)
	}

	/// Adds one declared binding, normalizing and inserting every alias.
	///
	/// Aliases get no special treatment: each goes through the identical
	/// duplicate/prefix checks, including against the binding's own other
	/// aliases.
	pub fn add(&mut self, binding: &Binding<A>) -> Result<(), BuildError>
	where
		A: Clone,
	{
		for keyset in &binding.keys {
			let sequence = keyset
				.iter()
				.map(|descriptor| KeyToken::normalize(descriptor))
				.collect::<Result<Vec<_>, _>>()?;
			self.insert(sequence, binding.action.clone())?;
		}
		Ok(())
	}

	/// Inserts one normalized sequence mapped to an action.
	///
	/// This is the conflict-checking primitive everything else goes
	/// through; it enforces that no sequence duplicates or prefixes
	/// another, independent of insertion order.
	pub fn insert(&mut self, sequence: Vec<KeyToken>, action: A) -> Result<(), ConflictError> {
		let Some((first, rest)) = sequence.split_first() else {
			return Err(ConflictError::EmptySequence);
		};
		self.root
			.insert(first, rest, action)
			.map_err(|conflict| conflict_error(conflict, &sequence))
	}

	/// Creates a fresh cursor positioned at the root.
	pub fn matcher(&self) -> Matcher<'_, A> {
		Matcher::new(self)
	}

	pub(crate) fn root(&self) -> &Node<A> {
		&self.root
	}
}

fn conflict_error(conflict: Conflict, sequence: &[KeyToken]) -> ConflictError {
	let printed = sequence.iter().map(KeyToken::as_str).collect::<Vec<_>>().join(" ");
	match conflict {
		Conflict::Duplicate => ConflictError::Duplicate(printed),
		Conflict::Shadows => ConflictError::ShadowsExisting(printed),
		Conflict::Prefix => ConflictError::PrefixOfExisting(printed),
	}
}

#[cfg(test)]
mod tests;
