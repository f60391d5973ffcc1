use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::access::{Path, PathElement, PathElementKind, ResolveError, ResolveErrorKind};
use crate::info::PropertyInfo;

// -----------------------------------------------------------------------------
// Accessor

/// How the terminal element of a resolved address reaches its value.
#[derive(Clone, Copy, Debug)]
pub enum Accessor {
    /// A registered property of the owner. For `name[i]` addresses the
    /// property holds the sequence.
    Property(PropertyInfo),
    /// The indexed get/set pair of the owner, itself a sequence.
    List(usize),
}

impl Accessor {
    /// Returns the property, if this is a property accessor.
    #[inline]
    pub fn property(&self) -> Option<&PropertyInfo> {
        match self {
            Self::Property(property) => Some(property),
            Self::List(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Shared helpers

// The index to apply after reading a property, for `name[i]` elements.
#[inline]
fn element_index(path: &Path) -> Option<usize> {
    path.last().and_then(array_index)
}

// The index of a `name[i]` element.
#[inline]
pub(crate) fn array_index(element: &PathElement) -> Option<usize> {
    match element.kind() {
        PathElementKind::ArrayIndex => element.index(),
        _ => None,
    }
}

pub(crate) fn index_into(value: &dyn Reflect, index: usize) -> Result<&dyn Reflect, ResolveErrorKind> {
    let Some(sequence) = value.as_sequence() else {
        return Err(ResolveErrorKind::NotASequence { ty: value.ty() });
    };
    sequence.get(index).ok_or(ResolveErrorKind::IndexOutOfRange {
        index,
        len: sequence.len(),
    })
}

pub(crate) fn index_into_mut(
    value: &mut dyn Reflect,
    index: usize,
) -> Result<&mut dyn Reflect, ResolveErrorKind> {
    let ty = value.ty();
    let Some(sequence) = value.as_sequence_mut() else {
        return Err(ResolveErrorKind::NotASequence { ty });
    };
    let len = sequence.len();
    sequence
        .get_mut(index)
        .ok_or(ResolveErrorKind::IndexOutOfRange { index, len })
}

pub(crate) fn read<'a>(
    object: &'a dyn Reflect,
    accessor: Accessor,
    index: Option<usize>,
) -> Result<&'a dyn Reflect, ResolveErrorKind> {
    match accessor {
        Accessor::List(index) => index_into(object, index),
        Accessor::Property(property) => {
            let value = property
                .read(object)
                .ok_or(ResolveErrorKind::InvocationFailure {
                    name: property.name(),
                })?;
            match index {
                Some(index) => index_into(value, index),
                None => Ok(value),
            }
        }
    }
}

pub(crate) fn read_mut<'a>(
    object: &'a mut dyn Reflect,
    accessor: Accessor,
    index: Option<usize>,
) -> Result<&'a mut dyn Reflect, ResolveErrorKind> {
    match accessor {
        Accessor::List(index) => index_into_mut(object, index),
        Accessor::Property(property) => {
            let value = property
                .read_mut(object)
                .ok_or(ResolveErrorKind::InvocationFailure {
                    name: property.name(),
                })?;
            match index {
                Some(index) => index_into_mut(value, index),
                None => Ok(value),
            }
        }
    }
}

fn write(
    object: &mut dyn Reflect,
    accessor: Accessor,
    index: Option<usize>,
    value: Box<dyn Reflect>,
) -> Result<(), ResolveErrorKind> {
    let rejected = |value: Box<dyn Reflect>| ResolveErrorKind::TypeMismatch { found: value.ty() };

    let property = match accessor {
        Accessor::List(index) => {
            let ty = object.ty();
            let Some(sequence) = object.as_sequence_mut() else {
                return Err(ResolveErrorKind::NotASequence { ty });
            };
            if index >= sequence.len() {
                let len = sequence.len();
                return Err(ResolveErrorKind::IndexOutOfRange { index, len });
            }
            return sequence.set(index, value).map_err(rejected);
        }
        Accessor::Property(property) => property,
    };

    if !property.is_writable() {
        return Err(ResolveErrorKind::ReadOnly {
            name: property.name(),
        });
    }

    let Some(index) = index else {
        return property.write(object, value).map_err(rejected);
    };

    // Replace the element in a copy, then write the whole sequence back so
    // the owner sees a regular property write.
    let current = property
        .read(object)
        .ok_or(ResolveErrorKind::InvocationFailure {
            name: property.name(),
        })?;
    let mut sequence = current.reflect_clone();
    let ty = sequence.ty();
    let Some(items) = sequence.as_sequence_mut() else {
        return Err(ResolveErrorKind::NotASequence { ty });
    };
    let len = items.len();
    if index >= len {
        return Err(ResolveErrorKind::IndexOutOfRange { index, len });
    }
    items.set(index, value).map_err(rejected)?;
    property.write(object, sequence).map_err(rejected)
}

// -----------------------------------------------------------------------------
// PropertyContainer

/// A resolved address: the owner object together with the accessor that
/// reaches the addressed value.
///
/// For the current object address there is no accessor and the object is
/// the value itself.
///
/// A container borrows the graph, so it cannot outlive a structural change.
#[derive(Clone)]
pub struct PropertyContainer<'a> {
    path: Path,
    accessor: Option<Accessor>,
    object: &'a dyn Reflect,
}

impl<'a> PropertyContainer<'a> {
    #[inline]
    pub(crate) fn new(path: Path, accessor: Option<Accessor>, object: &'a dyn Reflect) -> Self {
        Self {
            path,
            accessor,
            object,
        }
    }

    /// Returns the address.
    #[inline(always)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the accessor, `None` for the current object.
    #[inline(always)]
    pub fn accessor(&self) -> Option<Accessor> {
        self.accessor
    }

    /// Returns the property descriptor of the terminal element, if any.
    #[inline]
    pub fn property(&self) -> Option<&PropertyInfo> {
        self.accessor.as_ref().and_then(Accessor::property)
    }

    /// Returns the owner object.
    #[inline(always)]
    pub fn object(&self) -> &'a dyn Reflect {
        self.object
    }

    /// Reads the addressed value.
    pub fn value(&self) -> Result<&'a dyn Reflect, ResolveError> {
        let Some(accessor) = self.accessor else {
            return Ok(self.object);
        };
        read(self.object, accessor, element_index(&self.path))
            .map_err(|kind| ResolveError::at_last(&self.path, kind))
    }
}

impl fmt::Debug for PropertyContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyContainer")
            .field("path", &self.path)
            .field("accessor", &self.accessor)
            .field("object", &self.object.ty())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// PropertyContainerMut

/// The mutable counterpart of [`PropertyContainer`].
pub struct PropertyContainerMut<'a> {
    path: Path,
    accessor: Option<Accessor>,
    object: &'a mut dyn Reflect,
}

impl<'a> PropertyContainerMut<'a> {
    #[inline]
    pub(crate) fn new(path: Path, accessor: Option<Accessor>, object: &'a mut dyn Reflect) -> Self {
        Self {
            path,
            accessor,
            object,
        }
    }

    #[inline(always)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline(always)]
    pub fn accessor(&self) -> Option<Accessor> {
        self.accessor
    }

    #[inline]
    pub fn property(&self) -> Option<&PropertyInfo> {
        self.accessor.as_ref().and_then(Accessor::property)
    }

    /// Returns the owner object.
    #[inline]
    pub fn object(&self) -> &dyn Reflect {
        &*self.object
    }

    /// Returns the owner object mutably.
    #[inline]
    pub fn object_mut(&mut self) -> &mut dyn Reflect {
        &mut *self.object
    }

    /// Reads the addressed value.
    pub fn value(&self) -> Result<&dyn Reflect, ResolveError> {
        let Some(accessor) = self.accessor else {
            return Ok(&*self.object);
        };
        read(&*self.object, accessor, element_index(&self.path))
            .map_err(|kind| ResolveError::at_last(&self.path, kind))
    }

    /// Reads the addressed value mutably.
    ///
    /// This bypasses write accessors; use [`set`](Self::set) to go
    /// through them.
    pub fn value_mut(&mut self) -> Result<&mut dyn Reflect, ResolveError> {
        let Some(accessor) = self.accessor else {
            return Ok(&mut *self.object);
        };
        let index = element_index(&self.path);
        match read_mut(&mut *self.object, accessor, index) {
            Ok(value) => Ok(value),
            Err(kind) => Err(ResolveError::at_last(&self.path, kind)),
        }
    }

    /// Writes the addressed value through the terminal element's accessor.
    ///
    /// - `name`: the property's write accessor.
    /// - `name[i]`: the sequence is read, element `i` replaced and the whole
    ///   sequence written back through the property's write accessor.
    /// - `get(i)`: the owner's indexed set.
    ///
    /// Nothing is written if any step fails.
    pub fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), ResolveError> {
        let Some(accessor) = self.accessor else {
            return Err(ResolveError::at_last(
                &self.path,
                ResolveErrorKind::CurrentObject,
            ));
        };
        write(&mut *self.object, accessor, element_index(&self.path), value)
            .map_err(|kind| ResolveError::at_last(&self.path, kind))
    }

    /// Converts into a shared [`PropertyContainer`].
    #[inline]
    pub fn into_ref(self) -> PropertyContainer<'a> {
        PropertyContainer::new(self.path, self.accessor, self.object)
    }
}

impl fmt::Debug for PropertyContainerMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyContainerMut")
            .field("path", &self.path)
            .field("accessor", &self.accessor)
            .field("object", &self.object.ty())
            .finish()
    }
}
