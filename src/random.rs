//! Uniform random permutations.
//!
//! [`Permutation::random`] draws from the thread-local generator of the `rand` crate, so no
//! generator state is shared between threads. Use [`Permutation::random_with`] or the
//! [`Shuffles`] distribution to supply a generator, e.g. a seeded one for reproducible results.
use rand::distributions::Distribution;
use rand::Rng;

use crate::error::PermError;
use crate::perm::Permutation;
use crate::El;

/// A distribution producing uniformly random permutations of a given order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shuffles(usize);

impl Shuffles {
    /// Distribution over all permutations of order `n`.
    pub fn new(n: usize) -> Result<Shuffles, PermError> {
        if n == 0 || n > El::max_value() as usize {
            return Err(PermError::InvalidPermutation);
        }
        Ok(Shuffles(n))
    }

    /// The order of the produced permutations.
    pub fn order(&self) -> usize {
        self.0
    }
}

impl Distribution<Permutation> for Shuffles {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Permutation {
        let n = self.0;
        let mut pool: Vec<El> = (1..=n as El).collect();
        let mut values = Vec::with_capacity(n);
        // Draw without replacement; swap_remove keeps every draw O(1).
        for remaining in (2..=n).rev() {
            values.push(pool.swap_remove(rng.gen_range(0..remaining)));
        }
        values.append(&mut pool);
        Permutation::from_vec_unchecked(values)
    }
}

impl Permutation {
    /// A uniformly random permutation of order `n`.
    pub fn random(n: usize) -> Result<Permutation, PermError> {
        Self::random_with(n, &mut rand::thread_rng())
    }

    /// A uniformly random permutation of order `n`, drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Permutation, PermError> {
        Ok(Shuffles::new(n)?.sample(rng))
    }
}
