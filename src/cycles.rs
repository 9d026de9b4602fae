//! Disjoint-cycle factorization.
use crate::error::PermError;
use crate::perm::Permutation;
use crate::El;

impl Permutation {
    /// The cycle through the first point that isn't fixed.
    ///
    /// The returned permutation agrees with `self` on that point's orbit and fixes everything else.
    /// Returns the identity when `self` is the identity.
    fn get_cycle(&self) -> Permutation {
        let n = self.count();
        let mut cycle: Vec<El> = (1..=n as El).collect();

        let start = match self
            .iter()
            .enumerate()
            .position(|(index, value)| value as usize != index + 1)
        {
            Some(start) => start,
            None => return Permutation::from_vec_unchecked(cycle),
        };

        // An orbit has at most n points.
        let mut pos = start;
        for _ in 0..n {
            let image = self[pos];
            cycle[pos] = image;
            pos = image as usize - 1;
            if pos == start {
                break;
            }
        }

        Permutation::from_vec_unchecked(cycle)
    }

    /// A copy of `self` with every point moved by `cycle` made a fixed point.
    fn reduce_cycle(&self, cycle: &Permutation) -> Result<Permutation, PermError> {
        self.check_count(cycle)?;
        Ok(self.fix_support_of(cycle))
    }

    /// Same as [`Permutation::reduce_cycle`] for a `cycle` of the same order as `self`.
    fn fix_support_of(&self, cycle: &Permutation) -> Permutation {
        debug_assert_eq!(self.count(), cycle.count());
        let mut reduced = self.as_slice().to_vec();
        for (index, value) in cycle.iter().enumerate() {
            if value as usize != index + 1 {
                reduced[index] = index as El + 1;
            }
        }
        Permutation::from_vec_unchecked(reduced)
    }

    /// The number of points moved by this permutation.
    ///
    /// For a cycle this is its length. Zero exactly for the identity.
    pub fn cycle_length(&self) -> usize {
        self.iter()
            .enumerate()
            .filter(|&(index, value)| value as usize != index + 1)
            .count()
    }

    /// Returns an iterator over the proper cycles of this permutation.
    ///
    /// Each cycle is returned as a permutation of the same order that moves only the points of one
    /// orbit. Cycles are produced in order of their smallest moved point.
    pub fn factors(&self) -> Factors {
        Factors {
            residual: self.clone(),
        }
    }

    /// Decompose this permutation into disjoint cycles.
    ///
    /// Composing the cycles in any order gives back `self`. The identity has no cycles.
    pub fn factorization(&self) -> Vec<Permutation> {
        self.factors().collect()
    }
}

/// Iterator over the cycles of a permutation.
#[derive(Clone)]
pub struct Factors {
    residual: Permutation,
}

impl Iterator for Factors {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        let cycle = self.residual.get_cycle();
        if cycle.cycle_length() == 0 {
            return None;
        }
        // get_cycle keeps the residual's order
        self.residual = self.residual.fix_support_of(&cycle);
        Some(cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::perm::tests::random_perm;

    fn perm(values: &[El]) -> Permutation {
        Permutation::from_slice(values).unwrap()
    }

    #[test]
    fn identity_has_no_cycles() {
        for n in 1..10 {
            let identity = Permutation::identity(n).unwrap();
            assert!(identity.factorization().is_empty());
            assert_eq!(identity.cycle_length(), 0);
            assert_eq!(identity.get_cycle(), identity);
        }
    }

    #[test]
    fn cycles_in_scan_order() {
        let p = perm(&[2, 3, 1, 5, 4, 6]);
        assert_eq!(
            p.factorization(),
            vec![perm(&[2, 3, 1, 4, 5, 6]), perm(&[1, 2, 3, 5, 4, 6])]
        );
        let lengths: Vec<_> = p.factors().map(|cycle| cycle.cycle_length()).collect();
        assert_eq!(lengths, vec![3, 2]);
    }

    #[test]
    fn cycle_starting_past_fixed_points() {
        let p = perm(&[1, 2, 5, 4, 3]);
        assert_eq!(p.get_cycle(), p);
        assert_eq!(p.factorization(), vec![p.clone()]);
        assert!(p.is_transposition());
    }

    #[test]
    fn reduce_cycle_keeps_other_cycles() {
        let p = perm(&[4, 3, 2, 1, 5]);
        let cycle = p.get_cycle();
        assert_eq!(cycle, perm(&[4, 2, 3, 1, 5]));
        assert_eq!(p.reduce_cycle(&cycle).unwrap(), perm(&[1, 3, 2, 4, 5]));
    }

    #[test]
    fn factors_drain_residual() {
        let p = perm(&[3, 4, 1, 2, 6, 5]);
        let mut factors = p.factors();
        assert_eq!(factors.next(), Some(perm(&[3, 2, 1, 4, 5, 6])));
        assert_eq!(factors.residual, perm(&[1, 4, 3, 2, 6, 5]));
        assert_eq!(factors.next(), Some(perm(&[1, 4, 3, 2, 5, 6])));
        assert_eq!(factors.next(), Some(perm(&[1, 2, 3, 4, 6, 5])));
        assert!(factors.residual.is_identity());
        assert_eq!(factors.next(), None);
        assert_eq!(factors.next(), None);
    }

    #[test]
    fn reduce_cycle_count_mismatch() {
        let p = perm(&[2, 1, 3]);
        assert_eq!(
            p.reduce_cycle(&perm(&[2, 1])),
            Err(PermError::CountMismatch { left: 3, right: 2 })
        );
    }

    proptest! {
        #[test]
        fn product_of_cycles(p in random_perm(1..300u32)) {
            let identity = Permutation::identity(p.count()).unwrap();
            let cycles = p.factorization();

            let forward = cycles.iter().fold(identity.clone(), |acc, cycle| &acc * cycle);
            let backward = cycles.iter().rev().fold(identity, |acc, cycle| &acc * cycle);

            prop_assert_eq!(&forward, &p);
            prop_assert_eq!(&backward, &p);
        }

        #[test]
        fn cycles_are_disjoint(p in random_perm(1..300u32)) {
            let mut moved = vec![false; p.count()];
            let mut total = 0;
            for cycle in p.factors() {
                prop_assert!(cycle.cycle_length() >= 2);
                total += cycle.cycle_length();
                for (index, value) in cycle.iter().enumerate() {
                    if value as usize != index + 1 {
                        prop_assert!(!moved[index]);
                        moved[index] = true;
                        prop_assert_eq!(p[index], value);
                    }
                }
            }
            prop_assert_eq!(total, p.cycle_length());
        }

        #[test]
        fn parity_from_cycles(p in random_perm(1..100u32)) {
            let transpositions: usize = p
                .factors()
                .map(|cycle| cycle.cycle_length() - 1)
                .sum();
            prop_assert_eq!(transpositions % 2 == 1, p.is_odd());
            prop_assert_eq!(transpositions % 2, p.disorders() % 2);
        }
    }
}
