//! Declarative binding batches.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One declared binding: equivalent key-sequence aliases and an action.
///
/// Every alias resolves to the same action. Aliases are not special-cased
/// during registry construction — each is inserted through the same
/// conflict checks as any other sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Binding<A> {
	/// Alias sequences, each an ordered list of key descriptors.
	pub keys: Vec<Vec<String>>,
	/// Opaque payload handed back when a sequence completes.
	pub action: A,
}

impl<A> Binding<A> {
	/// Creates a binding with a single key sequence.
	pub fn new<S: Into<String>>(sequence: impl IntoIterator<Item = S>, action: A) -> Self {
		Self {
			keys: vec![sequence.into_iter().map(Into::into).collect()],
			action,
		}
	}

	/// Adds an alias sequence for the same action.
	pub fn alias<S: Into<String>>(mut self, sequence: impl IntoIterator<Item = S>) -> Self {
		self.keys.push(sequence.into_iter().map(Into::into).collect());
		self
	}
}

/// Bindings grouped two levels deep under organizational labels.
///
/// Labels exist for the declaring side's organization only and carry no
/// runtime meaning; building a registry flattens the groups in label
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Declarations<A>(pub BTreeMap<String, BTreeMap<String, Binding<A>>>);

impl<A> Declarations<A> {
	/// Iterates all declared bindings in label order.
	pub fn bindings(&self) -> impl Iterator<Item = &Binding<A>> {
		self.0.values().flat_map(|group| group.values())
	}

	/// Consumes the declarations, yielding bindings in label order.
	pub fn into_bindings(self) -> impl Iterator<Item = Binding<A>> {
		self.0.into_values().flat_map(|group| group.into_values())
	}
}
