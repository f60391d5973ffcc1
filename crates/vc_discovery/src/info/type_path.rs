use core::any::{Any, TypeId};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a concrete type: its [`TypeId`] and its full type path.
///
/// Equality, ordering and hashing only look at the [`TypeId`].
///
/// # Example
///
/// ```
/// use vc_discovery::info::Type;
///
/// let ty = Type::of::<Vec<String>>();
/// assert!(ty.is::<Vec<String>>());
/// assert!(ty.path().ends_with("Vec<alloc::string::String>"));
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    type_id: TypeId,
    type_path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// Returns the full type path, e.g. `alloc::string::String`.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type path without the leading module path.
    ///
    /// Generic arguments are kept as they are.
    pub fn name(&self) -> &'static str {
        let path = self.type_path;
        let head = path.find('<').unwrap_or(path.len());
        match path[..head].rfind("::") {
            Some(index) => &path[index + 2..],
            None => path,
        }
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl PartialOrd for Type {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Type {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_id.cmp(&other.type_id)
    }
}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_path)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Type;

    #[test]
    fn name_strips_module_path() {
        assert_eq!(Type::of::<String>().name(), "String");
        assert_eq!(Type::of::<u8>().name(), "u8");
        assert_eq!(Type::of::<Vec<u8>>().name(), "Vec<u8>");
    }

    #[test]
    fn equality_uses_type_id() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
    }
}
