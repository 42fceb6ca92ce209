//! Top-level module for the character-transition generation system.
//!
//! This module provides an order-k Markov word generator, including:
//! - The learned prefix-to-distribution mapping (`TransitionTable`)
//! - Per-prefix transition counts (`State`)
//! - A word-generation interface (`WordSampler`)

/// The learned transition model.
///
/// Maps every observed prefix of length `look_back` to the frequency
/// distribution of the character that follows it. Built in one pass
/// over a corpus, immutable afterward.
pub mod transition_table;

/// A single prefix state (Character Frequency Map).
///
/// Tracks outgoing transitions and supports weighted random sampling.
pub mod state;

/// Word generation over a read-only `TransitionTable`.
///
/// Repeatedly samples the next character from the distribution keyed
/// by the trailing window of previously emitted characters.
pub mod sampler;
