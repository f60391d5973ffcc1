use alloc::sync::Arc;
use alloc::vec::Vec;
use core::slice;

use crate::info::{PropertyInfo, Type};

// -----------------------------------------------------------------------------
// Introspection

/// The ordered properties of one value or type.
///
/// Cloning is cheap; the property list is shared.
#[derive(Clone, Debug)]
pub struct Introspection {
    ty: Type,
    option_driven: bool,
    properties: Arc<[PropertyInfo]>,
}

impl Introspection {
    #[inline]
    pub(crate) fn new(ty: Type, option_driven: bool, properties: Vec<PropertyInfo>) -> Self {
        Self {
            ty,
            option_driven,
            properties: properties.into(),
        }
    }

    /// Returns an introspection without properties.
    #[inline]
    pub(crate) fn empty(ty: Type) -> Self {
        Self::new(ty, false, Vec::new())
    }

    /// Returns the introspected type.
    #[inline(always)]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Returns `true` if the properties came from an explicit option list.
    #[inline(always)]
    pub const fn is_option_driven(&self) -> bool {
        self.option_driven
    }

    /// Returns the properties in order.
    #[inline]
    pub fn properties(&self) -> &[PropertyInfo] {
        &self.properties
    }

    /// Returns the property with the given name.
    pub fn get(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over the properties in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, PropertyInfo> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a Introspection {
    type Item = &'a PropertyInfo;
    type IntoIter = slice::Iter<'a, PropertyInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
