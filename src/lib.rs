//! Finite permutations as immutable values
//!
//! This crate provides [`Permutation`], a bijection on {1, ..., n}, together with the usual
//! operations on permutations: composition, inversion, parity, lexicographic successors,
//! disjoint-cycle factorization, random sampling and application to arbitrary sequences.
//!
//! ```
//! use permutor::Permutation;
//!
//! let p = Permutation::new(vec![3, 1, 2]).unwrap();
//! assert_eq!(p.apply(&["a", "b", "c"]).unwrap(), vec!["b", "c", "a"]);
//! assert_eq!(p.inverse().to_string(), "(2, 3, 1)");
//! assert_eq!(&p * &p.inverse(), Permutation::identity(3).unwrap());
//! ```
pub mod action;
pub mod cycles;
pub mod error;
pub mod format;
pub mod perm;
pub mod random;

pub use crate::error::PermError;
pub use crate::format::Format;
pub use crate::perm::Permutation;
pub use crate::random::Shuffles;

/// Set element.
///
/// Points and images are represented by positive integers (`u32`), starting at 1.
pub type El = u32;
