use chord_parser::GrammarError;

use super::*;
use crate::MatchResult;

fn seq(descriptors: &[&str]) -> Vec<KeyToken> {
	descriptors.iter().map(|d| KeyToken::normalize(d).unwrap()).collect()
}

#[test]
fn shared_prefix_is_valid() {
	let mut registry = Registry::new();
	registry.insert(seq(&["C-1", "a"]), 1).unwrap();
	registry.insert(seq(&["C-1", "b"]), 2).unwrap();

	let mut matcher = registry.matcher();
	assert_eq!(matcher.receive(&seq(&["C-1"])[0]), MatchResult::Partial);
	assert_eq!(matcher.receive(&seq(&["a"])[0]), MatchResult::Complete(&1));
}

#[test]
fn shared_deep_prefix_is_valid() {
	let mut registry = Registry::new();
	registry.insert(seq(&["C-1", "C-2", "a"]), 1).unwrap();
	registry.insert(seq(&["C-1", "C-2", "b"]), 2).unwrap();

	let mut matcher = registry.matcher();
	for token in &seq(&["C-1", "C-2"]) {
		assert_eq!(matcher.receive(token), MatchResult::Partial);
	}
	assert_eq!(matcher.receive(&seq(&["b"])[0]), MatchResult::Complete(&2));
}

#[test]
fn duplicate_sequence_rejected() {
	let mut registry = Registry::new();
	registry.insert(seq(&["C-1", "a"]), 1).unwrap();
	assert_eq!(
		registry.insert(seq(&["C-1", "a"]), 2),
		Err(ConflictError::Duplicate("C-1 a".into()))
	);
}

#[test]
fn longer_after_shorter_rejected() {
	let mut registry = Registry::new();
	registry.insert(seq(&["C-1", "a"]), 1).unwrap();
	assert_eq!(
		registry.insert(seq(&["C-1", "a", "b"]), 2),
		Err(ConflictError::ShadowsExisting("C-1 a b".into()))
	);
}

#[test]
fn shorter_after_longer_rejected() {
	let mut registry = Registry::new();
	registry.insert(seq(&["C-1", "a", "b"]), 1).unwrap();
	assert_eq!(
		registry.insert(seq(&["C-1", "a"]), 2),
		Err(ConflictError::PrefixOfExisting("C-1 a".into()))
	);
}

#[test]
fn empty_sequence_rejected() {
	let mut registry: Registry<u32> = Registry::new();
	assert_eq!(registry.insert(Vec::new(), 1), Err(ConflictError::EmptySequence));
}

#[test]
fn build_flattens_batch() {
	let registry = Registry::build(vec![
		Binding::new(["C-1", "a"], 1),
		Binding::new(["C-2", "b"], 2),
	])
	.unwrap();

	let mut matcher = registry.matcher();
	matcher.receive(&seq(&["C-2"])[0]);
	assert_eq!(matcher.receive(&seq(&["b"])[0]), MatchResult::Complete(&2));
}

#[test]
fn build_aborts_on_conflict_across_bindings() {
	let result = Registry::build(vec![
		Binding::new(["C-1", "a"], 1),
		Binding::new(["C-1", "a", "b"], 2),
	]);
	assert!(matches!(result, Err(BuildError::Conflict(ConflictError::ShadowsExisting(_)))));

	// Declaration order does not change the outcome, only which rule fires.
	let result = Registry::build(vec![
		Binding::new(["C-1", "a", "b"], 2),
		Binding::new(["C-1", "a"], 1),
	]);
	assert!(matches!(result, Err(BuildError::Conflict(ConflictError::PrefixOfExisting(_)))));
}

#[test]
fn build_aborts_on_grammar_error() {
	let result = Registry::build(vec![Binding::new(["C-a-b"], 1)]);
	assert!(matches!(
		result,
		Err(BuildError::Grammar(GrammarError::MultipleKeys(_)))
	));
}

#[test]
fn alias_sequences_share_the_action() {
	let registry = Registry::build(vec![
		Binding::new(["C-x", "C-s"], "save").alias(["C-x", "s"]),
	])
	.unwrap();

	let mut matcher = registry.matcher();
	matcher.receive(&seq(&["C-x"])[0]);
	assert_eq!(matcher.receive(&seq(&["s"])[0]), MatchResult::Complete(&"save"));
}

#[test]
fn alias_conflicts_are_checked_like_any_other() {
	let result = Registry::build(vec![
		Binding::new(["C-x"], "save").alias(["C-x", "s"]),
	]);
	assert!(matches!(result, Err(BuildError::Conflict(ConflictError::ShadowsExisting(_)))));
}

#[test]
fn descriptors_are_normalized_on_add() {
	let mut registry = Registry::new();
	registry.add(&Binding::new(["S-M-C-a"], 1)).unwrap();

	let mut matcher = registry.matcher();
	let token = KeyToken::normalize("C-M-S-a").unwrap();
	assert_eq!(matcher.receive(&token), MatchResult::Complete(&1));
}

#[test]
fn insert_after_build_is_conflict_checked() {
	let mut registry = Registry::build(vec![Binding::new(["C-1", "a"], 1)]).unwrap();
	assert!(matches!(
		registry.insert(seq(&["C-1", "a", "b"]), 2),
		Err(ConflictError::ShadowsExisting(_))
	));
	registry.insert(seq(&["C-1", "b"]), 3).unwrap();
}
