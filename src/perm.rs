//! Permutations of finite sets.
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::iter::Copied;
use std::mem::replace;
use std::ops::{Index, Mul};
use std::slice;

use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::action::{LeftAction, RightAction};
use crate::error::PermError;
use crate::El;

/// A permutation of a finite set.
///
/// A permutation rearranges the elements of a finite set. It is a bijection from a set to the same
/// set.
///
/// Here these sets are always {1, ..., n} for some n >= 1, called the order (or degree) of the
/// permutation. A permutation σ is stored as the sequence of its images (σ(1), ..., σ(n)), so
/// `perm[i]` (0-based) is σ(i + 1).
///
/// Permutations are immutable values. Every operation producing a different permutation returns a
/// new instance, and the backing storage is owned by the permutation alone.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    values: Box<[El]>,
}

/// Iterator over the images of a permutation, in position order.
pub type Iter<'a> = Copied<slice::Iter<'a, El>>;

impl Permutation {
    /// Checks whether `values` contains each of 1, ..., n exactly once, where n = `values.len()`.
    ///
    /// The empty sequence is not a permutation.
    pub fn is_perm(values: &[El]) -> bool {
        if values.is_empty() || values.len() > El::max_value() as usize {
            return false;
        }
        let mut seen = vec![false; values.len()];
        for &value in values {
            let slot = (value as usize)
                .checked_sub(1)
                .and_then(|index| seen.get_mut(index));
            match slot {
                Some(seen_value) => {
                    if replace(seen_value, true) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }

    /// Create a permutation from a vector containing the images of 1..=n.
    pub fn new(values: Vec<El>) -> Result<Permutation, PermError> {
        if !Self::is_perm(&values) {
            return Err(PermError::InvalidPermutation);
        }
        Ok(Self::from_vec_unchecked(values))
    }

    /// Create a permutation from a slice containing the images of 1..=n.
    ///
    /// The slice is copied.
    pub fn from_slice(values: &[El]) -> Result<Permutation, PermError> {
        Self::new(values.to_vec())
    }

    /// Create a permutation from arbitrary integer values.
    ///
    /// Values that are negative or don't fit into an [`El`] make the input invalid.
    pub fn try_from_values<I, V>(values: I) -> Result<Permutation, PermError>
    where
        I: IntoIterator<Item = V>,
        V: ToPrimitive,
    {
        let values = values
            .into_iter()
            .map(|value| value.to_u32().ok_or(PermError::InvalidPermutation))
            .collect::<Result<Vec<El>, _>>()?;
        Self::new(values)
    }

    pub(crate) fn from_vec_unchecked(values: Vec<El>) -> Permutation {
        debug_assert!(Self::is_perm(&values));
        Permutation {
            values: values.into_boxed_slice(),
        }
    }

    fn identity_unchecked(n: usize) -> Permutation {
        Self::from_vec_unchecked((1..=n as El).collect())
    }

    /// The identity permutation (1, 2, ..., n).
    pub fn identity(n: usize) -> Result<Permutation, PermError> {
        if n == 0 || n > El::max_value() as usize {
            return Err(PermError::InvalidPermutation);
        }
        Ok(Self::identity_unchecked(n))
    }

    /// The order of this permutation, i.e. the size of the permuted set.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Same as [`Permutation::count`].
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Always false, permutations have order at least 1.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The value stored at a 0-based position.
    pub fn get(&self, index: usize) -> Option<El> {
        self.values.get(index).copied()
    }

    /// The image of a 1-based point.
    pub fn image(&self, point: El) -> Option<El> {
        point
            .checked_sub(1)
            .and_then(|index| self.get(index as usize))
    }

    /// The images of 1..=n as a slice.
    pub fn as_slice(&self) -> &[El] {
        &self.values
    }

    /// Iterate over the images of 1..=n.
    pub fn iter(&self) -> Iter<'_> {
        self.values.iter().copied()
    }

    /// Whether every point is a fixed point.
    pub fn is_identity(&self) -> bool {
        self.iter()
            .enumerate()
            .all(|(index, value)| value as usize == index + 1)
    }

    pub(crate) fn check_count(&self, other: &Permutation) -> Result<(), PermError> {
        if self.count() != other.count() {
            return Err(PermError::CountMismatch {
                left: self.count(),
                right: other.count(),
            });
        }
        Ok(())
    }

    /// Moves the element at position i to position σ(i + 1) - 1.
    ///
    /// The length of `items` must equal the order.
    fn scatter<T>(&self, mut items: Vec<T>) -> Vec<T> {
        debug_assert_eq!(items.len(), self.count());
        let mut targets: Vec<usize> = self.iter().map(|value| value as usize - 1).collect();
        for index in 0..targets.len() {
            // Each swap puts one element at its final position.
            while targets[index] != index {
                let target = targets[index];
                items.swap(index, target);
                targets.swap(index, target);
            }
        }
        items
    }

    /// Apply this permutation to a sequence.
    ///
    /// The element at position i of `items` ends up at position σ(i + 1) - 1 of the result.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, PermError> {
        self.left_apply(items)
    }

    /// Apply this permutation to a vector, moving its elements.
    pub fn apply_vec<T>(&self, items: Vec<T>) -> Result<Vec<T>, PermError> {
        self.left_apply(items)
    }

    /// Compose with another permutation of the same order.
    ///
    /// The result applies `self` first and `other` second: it maps i to other(self(i)).
    pub fn multiply(&self, other: &Permutation) -> Result<Permutation, PermError> {
        self.check_count(other)?;
        other.right_apply(self)
    }

    /// The inverse of this permutation.
    ///
    /// This scatters the identity sequence through `self`.
    pub fn inverse(&self) -> Permutation {
        Self::from_vec_unchecked(self.scatter((1..=self.count() as El).collect()))
    }

    /// The lexicographically next permutation of the same order.
    ///
    /// The last permutation (n, ..., 2, 1) wraps around to the identity.
    pub fn successor(&self) -> Permutation {
        let values = &self.values;
        let n = values.len();

        let k = match (0..n - 1).rev().find(|&k| values[k] < values[k + 1]) {
            Some(k) => k,
            None => return Self::identity_unchecked(n),
        };

        // Everything past k is descending, values[k + 1] > values[k] by choice of k
        let t = k + values[k + 1..]
            .iter()
            .take_while(|&&value| value > values[k])
            .count();

        let mut next = values.to_vec();
        next.swap(k, t);
        next[k + 1..].reverse();
        Self::from_vec_unchecked(next)
    }

    /// All permutations of order n in lexicographic order, starting with the identity.
    pub fn lexicographic(n: usize) -> Result<Lexicographic, PermError> {
        Ok(Lexicographic {
            next: Some(Self::identity(n)?),
        })
    }

    /// The number of pairs of positions i < j with `self[i] > self[j]`.
    pub fn disorders(&self) -> usize {
        let values = &self.values;
        let mut disorders = 0;
        for i in 0..values.len() {
            for j in i + 1..values.len() {
                if values[i] > values[j] {
                    disorders += 1;
                }
            }
        }
        disorders
    }

    /// Whether this is an odd permutation.
    pub fn is_odd(&self) -> bool {
        self.disorders().is_odd()
    }

    /// The sign of this permutation, -1 when odd and 1 when even.
    pub fn sign(&self) -> i8 {
        if self.is_odd() {
            -1
        } else {
            1
        }
    }

    /// Whether this permutation differs from the identity at exactly two positions.
    ///
    /// Such a permutation always swaps those two positions.
    pub fn is_transposition(&self) -> bool {
        self.iter()
            .enumerate()
            .filter(|&(index, value)| value as usize != index + 1)
            .count()
            == 2
    }
}

impl Index<usize> for Permutation {
    type Output = El;

    fn index(&self, index: usize) -> &El {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = El;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl From<Permutation> for Vec<El> {
    fn from(perm: Permutation) -> Vec<El> {
        perm.values.into_vec()
    }
}

impl TryFrom<Vec<El>> for Permutation {
    type Error = PermError;

    fn try_from(values: Vec<El>) -> Result<Permutation, PermError> {
        Permutation::new(values)
    }
}

impl<'a> TryFrom<&'a [El]> for Permutation {
    type Error = PermError;

    fn try_from(values: &'a [El]) -> Result<Permutation, PermError> {
        Permutation::from_slice(values)
    }
}

/// Application of a permutation to a slice.
///
/// For a permutation σ, the element at 0-based position i is moved to position σ(i + 1) - 1 of a
/// new vector.
impl<'a, T: Clone> LeftAction<&'a [T]> for Permutation {
    type Output = Vec<T>;

    fn left_apply(&self, items: &'a [T]) -> Result<Vec<T>, PermError> {
        self.left_apply(items.to_vec())
    }
}

/// Application of a permutation to a vector, reusing its allocation.
impl<T> LeftAction<Vec<T>> for Permutation {
    type Output = Vec<T>;

    fn left_apply(&self, items: Vec<T>) -> Result<Vec<T>, PermError> {
        if items.len() != self.count() {
            return Err(PermError::LengthMismatch {
                expected: self.count(),
                found: items.len(),
            });
        }
        Ok(self.scatter(items))
    }
}

/// Composition of a permutation on the right.
///
/// `p.right_apply(q)` maps i to p(q(i)), i.e. `q` is applied first.
impl<'a> RightAction<&'a Permutation> for Permutation {
    type Output = Permutation;

    fn right_apply(&self, perm: &'a Permutation) -> Result<Permutation, PermError> {
        self.check_count(perm)?;
        Ok(Permutation::from_vec_unchecked(
            perm.iter()
                .map(|value| self.values[value as usize - 1])
                .collect(),
        ))
    }
}

/// Composition, see [`Permutation::multiply`].
///
/// Panics when the orders differ.
impl<'a, 'b> Mul<&'b Permutation> for &'a Permutation {
    type Output = Permutation;

    fn mul(self, rhs: &'b Permutation) -> Permutation {
        match self.multiply(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Mul for Permutation {
    type Output = Permutation;

    fn mul(self, rhs: Permutation) -> Permutation {
        &self * &rhs
    }
}

/// Permutations are ordered by their order first, then lexicographically by their images.
impl Ord for Permutation {
    fn cmp(&self, other: &Permutation) -> Ordering {
        self.count()
            .cmp(&other.count())
            .then_with(|| self.values.cmp(&other.values))
    }
}

impl PartialOrd for Permutation {
    fn partial_cmp(&self, other: &Permutation) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Iterator over all permutations of a given order in lexicographic order.
#[derive(Clone)]
pub struct Lexicographic {
    next: Option<Permutation>,
}

impl Iterator for Lexicographic {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        let current = self.next.take()?;
        let successor = current.successor();
        if !successor.is_identity() {
            self.next = Some(successor);
        }
        Some(current)
    }
}
