//! Markov-chain word generation library.
//!
//! This crate provides a fixed-order character-transition system including:
//! - A prefix-count transition table learned from a corpus
//! - Weighted next-character sampling from raw observation counts
//! - A word sampler with caller-controlled randomness source
//!
//! The model is built once from text and is read-only afterward;
//! sampling never mutates it.

/// Transition model and word generation logic.
///
/// This module exposes the transition table, its per-prefix states
/// and the word sampler built on top of them.
pub mod model;
