use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::state::State;

/// Word boundary marker.
///
/// Used both as the start-of-word sentinel (the initial prefix window is
/// `look_back` spaces) and as the explicit end-of-word transition recorded
/// after the last character of every training word.
pub const WORD_BOUNDARY: char = ' ';

/// Default prefix length (order of the chain).
pub const DEFAULT_LOOK_BACK: usize = 2;

/// The learned transition model for sequences of characters.
///
/// The `TransitionTable` stores states for prefixes of length `look_back`
/// and allows probabilistic prediction of the next character based on
/// learned words.
///
/// # Responsibilities
/// - Build the model from whitespace-delimited words
/// - Accumulate transition counts for each prefix
/// - Expose per-prefix states for sampling
/// - Merge with another table of the same `look_back`
///
/// # Invariants
/// - `look_back` is always >= 1
/// - Each state in `states` corresponds to a unique prefix of exactly
///   `look_back` characters
/// - Every stored state has at least one recorded transition
///
/// # Notes
/// - No case folding is performed here; the caller is expected to fold
///   the corpus before building.
/// - The table is never mutated once building is done.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitionTable {
	/// The prefix length (number of characters in the lookup window)
	look_back: usize, // must be >= 1

	/// Mapping from a prefix (length `look_back`) to its corresponding state
	states: HashMap<String, State>,
}

impl TransitionTable {
	/// Creates a new empty table of order `look_back`.
	///
	/// # Errors
	/// Returns an error if `look_back < 1`.
	pub fn new(look_back: usize) -> Result<Self, String> {
		if look_back < 1 {
			return Err("look_back must be >= 1".to_owned());
		}
		Ok(Self { look_back, states: HashMap::new() })
	}

	/// Builds a complete table from a corpus.
	///
	/// Splits the text on whitespace and feeds every word to `add_word`.
	/// Runs of whitespace produce no empty words, and an empty corpus
	/// yields an empty table.
	///
	/// # Errors
	/// Returns an error if `look_back < 1`.
	pub fn from_text(text: &str, look_back: usize) -> Result<Self, String> {
		let mut table = Self::new(look_back)?;
		for word in text.split_whitespace() {
			table.add_word(word);
		}
		Ok(table)
	}

	/// Adds a single word to the model.
	///
	/// The word is padded with one trailing space (the end-of-word marker),
	/// the prefix window starts as `look_back` spaces, and for each
	/// character the count under the current window is bumped before the
	/// window slides by one.
	///
	/// # Notes
	/// - Empty words are ignored.
	/// - The word itself must not contain whitespace; `from_text` guarantees
	///   this through its splitting rule.
	pub fn add_word(&mut self, word: &str) {
		if word.is_empty() {
			return;
		}

		let mut window = WORD_BOUNDARY.to_string().repeat(self.look_back);
		for c in word.chars().chain(std::iter::once(WORD_BOUNDARY)) {
			// Get or create the state for this prefix
			let state = self
				.states
				.entry(window.clone())
				.or_insert_with(|| State::new(&window));
			state.add_transition(c);

			// Slide the window: drop first char, append c
			window.remove(0);
			window.push(c);
		}
	}

	/// Returns the prefix length of this table.
	pub fn look_back(&self) -> usize {
		self.look_back
	}

	/// Looks up the state recorded for a prefix, if any.
	pub fn state(&self, prefix: &str) -> Option<&State> {
		self.states.get(prefix)
	}

	/// Iterates over all recorded prefixes.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.states.keys().map(|k| k.as_str())
	}

	/// Returns the number of recorded prefixes.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Returns true if nothing was learned (empty corpus).
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Merges another table into this one.
	///
	/// Occurrence counts for matching prefixes are summed; unseen prefixes
	/// are cloned over. Useful for combining tables built from separate
	/// corpora.
	///
	/// # Errors
	/// Returns an error if the table orders do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		if self.look_back != other.look_back {
			return Err("look_back mismatch".to_owned());
		}

		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}

		Ok(())
	}
}
