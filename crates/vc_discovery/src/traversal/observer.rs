use crate::Reflect;
use crate::access::Path;
use crate::info::{PropertyInfo, ReflectKind, TypeInfo};

// -----------------------------------------------------------------------------
// Observer

/// Receives every node visited by a [`Traverser`](crate::traversal::Traverser).
///
/// `property` and `parent` are `None` for the root, which is visited under
/// the current object address. Closures with the same signature implement
/// this trait.
pub trait Observer<'a> {
    fn visit(
        &mut self,
        path: &Path,
        property: Option<&PropertyInfo>,
        parent: Option<&'a dyn Reflect>,
        child: &'a dyn Reflect,
    );
}

impl<'a, F> Observer<'a> for F
where
    F: FnMut(&Path, Option<&PropertyInfo>, Option<&'a dyn Reflect>, &'a dyn Reflect),
{
    #[inline]
    fn visit(
        &mut self,
        path: &Path,
        property: Option<&PropertyInfo>,
        parent: Option<&'a dyn Reflect>,
        child: &'a dyn Reflect,
    ) {
        self(path, property, parent, child);
    }
}

// -----------------------------------------------------------------------------
// Primitivity

/// Decides whether a declared property type is terminal.
///
/// Traversal neither visits nor descends into properties of a primitive
/// type. Closures taking a [`TypeInfo`] implement this trait.
pub trait Primitivity {
    fn is_primitive(&self, info: TypeInfo) -> bool;
}

impl<F: Fn(TypeInfo) -> bool> Primitivity for F {
    #[inline]
    fn is_primitive(&self, info: TypeInfo) -> bool {
        self(info)
    }
}

/// The default [`Primitivity`]: a type is primitive if its base type is a
/// scalar, so `u8` and `Vec<String>` are primitive while components and
/// sequences of components are not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarPrimitives;

impl Primitivity for ScalarPrimitives {
    #[inline]
    fn is_primitive(&self, info: TypeInfo) -> bool {
        info.base().kind() == ReflectKind::Scalar
    }
}
