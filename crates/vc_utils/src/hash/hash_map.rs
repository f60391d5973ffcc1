//! Re-export [`HashMap`] from [hashbrown] crate, with [`FixedHashState`] as the default hasher.

use crate::hash::FixedHashState;

pub use hashbrown::hash_map::{Entry, Iter, IterMut, Keys, Values};

/// A [`hashbrown::HashMap`] whose hash results only depend on the input.
///
/// Use [`HashMap::default`] to create an empty map.
///
/// # Examples
///
/// ```
/// use vc_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, u32> = HashMap::default();
/// map.insert("ridge", 1);
/// assert_eq!(map.get("ridge"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;
