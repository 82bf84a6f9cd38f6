use rand::Rng;
use rand::seq::SliceRandom;

use super::error::GenerateError;
use super::source::WordSource;

/// A randomized permutation of a [`WordSource`].
///
/// The pool contains every word from the source exactly once, in an order
/// randomized at construction, and is read-only afterwards. Sampling is
/// uniform with replacement: each draw picks an independent random index,
/// so the one-time shuffle does not affect the distribution of drawn
/// words, only the pool's incidental ordering.
#[derive(Clone, Debug)]
pub struct ShuffledPool {
	words: Vec<String>,
}

impl ShuffledPool {
	/// Builds a pool by shuffling the source words once with `rng`.
	///
	/// # Errors
	/// Returns [`GenerateError::EmptySource`] if the source has no words.
	pub fn new<R: Rng>(source: WordSource, rng: &mut R) -> Result<Self, GenerateError> {
		if source.is_empty() {
			return Err(GenerateError::EmptySource);
		}

		let mut words = source.into_words();
		words.shuffle(rng);
		Ok(Self { words })
	}

	/// Draws one word uniformly at random, with replacement.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
		// Non-empty by construction
		let index = rng.random_range(0..self.words.len());
		&self.words[index]
	}

	/// Number of words in the pool.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always false: construction rejects empty sources.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Read-only view of the shuffled words.
	pub fn words(&self) -> &[String] {
		&self.words
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn source_of(words: &[&str]) -> WordSource {
		WordSource::new(words.iter().map(|s| s.to_string()))
	}

	#[test]
	fn test_empty_source_rejected() {
		let mut rng = StdRng::seed_from_u64(0);
		let result = ShuffledPool::new(source_of(&[]), &mut rng);
		assert!(matches!(result, Err(GenerateError::EmptySource)));
	}

	#[test]
	fn test_pool_is_permutation_of_source() {
		let mut rng = StdRng::seed_from_u64(7);
		let input = ["kiwi", "lime", "mango", "pear", "plum"];
		let pool = ShuffledPool::new(source_of(&input), &mut rng).unwrap();

		let mut shuffled: Vec<&str> = pool.words().iter().map(String::as_str).collect();
		shuffled.sort_unstable();
		let mut expected = input.to_vec();
		expected.sort_unstable();
		assert_eq!(shuffled, expected);
	}

	#[test]
	fn test_seeded_shuffle_is_deterministic() {
		let input = ["a", "b", "c", "d", "e", "f", "g", "h"];
		let mut rng1 = StdRng::seed_from_u64(42);
		let mut rng2 = StdRng::seed_from_u64(42);
		let pool1 = ShuffledPool::new(source_of(&input), &mut rng1).unwrap();
		let pool2 = ShuffledPool::new(source_of(&input), &mut rng2).unwrap();
		assert_eq!(pool1.words(), pool2.words());
	}

	#[test]
	fn test_pick_returns_pool_words() {
		let mut rng = StdRng::seed_from_u64(1);
		let pool = ShuffledPool::new(source_of(&["red", "green", "blue"]), &mut rng).unwrap();
		for _ in 0..100 {
			let word = pool.pick(&mut rng);
			assert!(pool.words().iter().any(|w| w == word));
		}
	}

	#[test]
	fn test_singleton_pool_always_picks_same_word() {
		let mut rng = StdRng::seed_from_u64(1);
		let pool = ShuffledPool::new(source_of(&["only"]), &mut rng).unwrap();
		for _ in 0..50 {
			assert_eq!(pool.pick(&mut rng), "only");
		}
	}
}
