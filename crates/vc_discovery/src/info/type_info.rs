use core::fmt;

use crate::info::Type;

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected value.
///
/// A graph is built from these three kinds only, so traversal never has to
/// ask anything else about a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReflectKind {
    /// A terminal value, e.g. `i32` or `String`.
    Scalar,
    /// A component whose properties are described by the type registry.
    Composite,
    /// An indexable run of values, e.g. `Vec<T>`.
    Sequence,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Composite => f.write_str("composite"),
            Self::Sequence => f.write_str("sequence"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static information about a declared type.
///
/// For a [`Sequence`](ReflectKind::Sequence) the item type is kept as well,
/// which gives the *base type* and the *multiple* flag of a property.
///
/// # Examples
///
/// ```
/// use vc_discovery::info::{ReflectKind, Typed};
///
/// let info = <Vec<u32> as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Sequence);
/// assert!(info.is_multiple());
/// assert!(info.base().ty().is::<u32>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeInfo {
    ty: Type,
    kind: ReflectKind,
    // Resolved lazily; recursive item types would not terminate otherwise.
    item: Option<fn() -> TypeInfo>,
}

impl TypeInfo {
    /// Creates the info of a scalar type.
    #[inline]
    pub fn scalar<T: ?Sized + 'static>() -> Self {
        Self {
            ty: Type::of::<T>(),
            kind: ReflectKind::Scalar,
            item: None,
        }
    }

    /// Creates the info of a composite type.
    #[inline]
    pub fn composite<T: ?Sized + 'static>() -> Self {
        Self {
            ty: Type::of::<T>(),
            kind: ReflectKind::Composite,
            item: None,
        }
    }

    /// Creates the info of a sequence type `T` holding `I` items.
    #[inline]
    pub fn sequence<T: ?Sized + 'static, I: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            kind: ReflectKind::Sequence,
            item: Some(I::type_info),
        }
    }

    /// Returns the [`Type`].
    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Returns the [`ReflectKind`].
    #[inline(always)]
    pub const fn kind(&self) -> ReflectKind {
        self.kind
    }

    /// Returns the item info of a sequence type.
    #[inline]
    pub fn item(&self) -> Option<TypeInfo> {
        self.item.map(|item| item())
    }

    /// Returns `true` for sequence types.
    #[inline]
    pub const fn is_multiple(&self) -> bool {
        matches!(self.kind, ReflectKind::Sequence)
    }

    /// Returns the item info for sequences and `self` otherwise.
    #[inline]
    pub fn base(&self) -> TypeInfo {
        self.item().unwrap_or(*self)
    }
}

impl PartialEq for TypeInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .field("item", &self.item().map(|item| item.ty))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Typed

/// A type with static [`TypeInfo`].
///
/// Property descriptors use it to describe their declared value type.
pub trait Typed: 'static {
    /// Returns the static [`TypeInfo`] of this type.
    fn type_info() -> TypeInfo;
}
