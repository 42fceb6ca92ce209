use rand::Rng;

use super::transition_table::{TransitionTable, WORD_BOUNDARY};

/// Generates words from a read-only `TransitionTable`.
///
/// Each call to `sample` is independent: the prefix window is local to the
/// call and the table is never mutated, so one sampler (or several) can be
/// used for any number of draws.
///
/// # Notes
/// - The loop has no inherent length bound; it stops when the window has no
///   recorded continuation or when the end-of-word marker is drawn. With
///   counts learned from real text the marker mass makes runaway words
///   practically impossible, but `with_max_len` offers a hard cutoff for
///   callers that want one.
#[derive(Clone, Copy, Debug)]
pub struct WordSampler<'a> {
	table: &'a TransitionTable,
	/// Optional hard bound on generated word length, in characters.
	max_len: Option<usize>,
}

impl<'a> WordSampler<'a> {
	/// Creates a sampler with the original unbounded behavior.
	pub fn new(table: &'a TransitionTable) -> Self {
		Self { table, max_len: None }
	}

	/// Creates a sampler that stops after emitting `max_len` characters.
	///
	/// The cutoff does not change the statistics of shorter words; it only
	/// truncates runs that would exceed the bound.
	pub fn with_max_len(table: &'a TransitionTable, max_len: usize) -> Self {
		Self { table, max_len: Some(max_len) }
	}

	/// Generates one word.
	///
	/// Starts from the sentinel window (`look_back` spaces) and repeatedly
	/// draws the next character, weighted by observation counts, from the
	/// state keyed by the current window:
	/// - an unknown window ends the word (no recorded continuation),
	/// - a drawn space ends the word (explicit end-of-word marker),
	/// - anything else is appended and the window slides by one.
	///
	/// An empty table immediately yields the empty string.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		let mut word = String::new();
		let mut window = WORD_BOUNDARY.to_string().repeat(self.table.look_back());

		loop {
			let Some(state) = self.table.state(&window) else {
				break;
			};
			// Non-empty by table invariant, None kept for safety
			let Some(next_char) = state.predict(rng) else {
				break;
			};
			if next_char == WORD_BOUNDARY {
				break;
			}

			word.push(next_char);
			window.remove(0);
			window.push(next_char);

			if let Some(max_len) = self.max_len {
				if word.chars().count() >= max_len {
					break;
				}
			}
		}

		word
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_xorshift::XorShiftRng;
	use std::collections::HashSet;

	#[test]
	fn empty_table_yields_empty_word() {
		let table = TransitionTable::from_text("", 2).unwrap();
		let sampler = WordSampler::new(&table);
		let mut rng = XorShiftRng::seed_from_u64(1);
		assert_eq!(sampler.sample(&mut rng), "");
	}

	#[test]
	fn unknown_window_has_no_continuation() {
		let table = TransitionTable::from_text("ab", 2).unwrap();
		assert!(table.state("zz").is_none());

		// A table lacking the sentinel key stops before emitting anything
		let untrained = TransitionTable::new(2).unwrap();
		let sampler = WordSampler::new(&untrained);
		let mut rng = XorShiftRng::seed_from_u64(1);
		assert_eq!(sampler.sample(&mut rng), "");
	}

	#[test]
	fn aa_corpus_always_yields_aa() {
		// Only possible path: "  " -> 'a', " a" -> 'a', "aa" -> ' '
		let table = TransitionTable::from_text("aa aa", 2).unwrap();
		let sampler = WordSampler::new(&table);
		let mut rng = XorShiftRng::seed_from_u64(99);

		for _ in 0..50 {
			assert_eq!(sampler.sample(&mut rng), "aa");
		}
	}

	#[test]
	fn sampling_respects_support() {
		let corpus = "banana bandana cabana havana";
		let table = TransitionTable::from_text(corpus, 2).unwrap();

		// Every character recorded anywhere in the table
		let mut support = HashSet::new();
		for key in table.keys() {
			for (c, _) in table.state(key).unwrap().transitions() {
				support.insert(c);
			}
		}

		let sampler = WordSampler::new(&table);
		let mut rng = XorShiftRng::seed_from_u64(7);
		for _ in 0..500 {
			for c in sampler.sample(&mut rng).chars() {
				assert!(support.contains(&c), "unrecorded char {c:?}");
			}
		}
	}

	#[test]
	fn same_seed_same_words() {
		let corpus = "the quick brown fox jumps over the lazy dog";
		let table = TransitionTable::from_text(corpus, 2).unwrap();
		let sampler = WordSampler::new(&table);

		let mut first_rng = XorShiftRng::seed_from_u64(1234);
		let mut second_rng = XorShiftRng::seed_from_u64(1234);

		for _ in 0..20 {
			assert_eq!(sampler.sample(&mut first_rng), sampler.sample(&mut second_rng));
		}
	}

	#[test]
	fn max_len_bounds_word_length() {
		// "aaaa" keeps looping through 'a'-heavy states, cutoff at 3
		let table = TransitionTable::from_text("aaaa aaaa aaaa", 2).unwrap();
		let sampler = WordSampler::with_max_len(&table, 3);
		let mut rng = XorShiftRng::seed_from_u64(5);

		for _ in 0..200 {
			assert!(sampler.sample(&mut rng).chars().count() <= 3);
		}
	}

	#[test]
	fn look_back_one_generates_from_single_char_windows() {
		let table = TransitionTable::from_text("ab ab", 1).unwrap();
		let sampler = WordSampler::new(&table);
		let mut rng = XorShiftRng::seed_from_u64(3);

		for _ in 0..50 {
			let word = sampler.sample(&mut rng);
			// Support is {'a', 'b'}; every word starts with 'a'
			assert!(word.chars().all(|c| c == 'a' || c == 'b'));
		}
	}
}
