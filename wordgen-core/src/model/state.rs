use std::collections::HashMap;

use rand::Rng;

use serde::{Deserialize, Serialize};


/// Represents a state in the transition model.
///
/// A `State` corresponds to a fixed `look_back`-character prefix (`key`) and
/// stores all observed transitions from this prefix to the next character.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations. The space character is a
/// valid transition value and marks the end of a word.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during learning
/// - Predict the next character using weighted random sampling
/// - Merge with another state having the same key
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct State {
	/// Identifier of the state (`look_back`-character prefix).
	key: String,
	/// Outgoing transitions indexed by the next character.
	/// The value represents how many times this transition was observed.
	/// Example: { 'e' => 42, ' ' => 3 }
	transitions: HashMap<char, usize>
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: HashMap::new(),
		}
	}

	/// Returns the prefix this state belongs to.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records an occurrence of a transition toward `next_char`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is created with an initial count of 1.
	pub fn add_transition(&mut self, next_char: char) {
		*self.transitions.entry(next_char).or_insert(0) += 1;
	}

	/// Returns how many times `next_char` was observed after this prefix.
	pub fn occurrences(&self, next_char: char) -> usize {
		self.transitions.get(&next_char).copied().unwrap_or(0)
	}

	/// Returns the total number of observations recorded for this prefix.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Returns true if no transition was ever recorded.
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Iterates over all recorded transitions as `(next_char, occurrences)`.
	pub fn transitions(&self) -> impl Iterator<Item = (char, usize)> + '_ {
		self.transitions.iter().map(|(c, occurrence)| (*c, *occurrence))
	}

	/// Predicts the next character using weighted random sampling.
	///
	/// The probability of selecting a character is proportional to its
	/// occurrence count. Counts are used raw, never normalized.
	///
	/// This method performs:
	/// - an O(n) scan over the transitions
	/// - a cumulative subtraction to select a bucket
	///
	/// The randomness source is provided by the caller, so tests can pass
	/// a seeded generator for reproducible draws.
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
		if self.transitions.is_empty() {
			return None;
		}

		let total = self.total();
		if total == 0 {
			// Should not happen due to invariants, but kept for safety
			return None;
		}

		// Randomly select a character
		let mut r = rng.random_range(0..total);

		let mut fallback: Option<char> = None;
		for (next_char, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(*next_char);
			}
			r -= occurrence;
			fallback = Some(*next_char);
		}

		// Fallback: should not happen, but kept for safety.
		fallback
	}

	/// Merges another state into this one.
	///
	/// Both states must represent the same prefix (`key`).
	/// Transition occurrence counts are summed.
	///
	/// # Errors
	/// Returns an error if the state keys do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		if self.key != other.key {
			return Err("Key mismatch".to_owned());
		}

		for (next_char, occurrence) in &other.transitions {
			*self.transitions.entry(*next_char).or_insert(0) += *occurrence;
		}

		Ok(())
	}
}
