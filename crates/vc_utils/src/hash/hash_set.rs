//! Re-export [`HashSet`] from [hashbrown] crate, with [`FixedHashState`] as the default hasher.

use crate::hash::FixedHashState;

pub use hashbrown::hash_set::{Iter, IntoIter};

/// A [`hashbrown::HashSet`] whose hash results only depend on the input.
///
/// # Examples
///
/// ```
/// use vc_utils::hash::HashSet;
///
/// let mut set: HashSet<&str> = HashSet::default();
/// set.insert("actors");
/// assert!(set.contains("actors"));
/// ```
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;
