use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::Sequence;

// -----------------------------------------------------------------------------
// ReflectRef

/// A shared view of a reflected value, tagged by its [`ReflectKind`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Scalar(&'a dyn Reflect),
    Composite(&'a dyn Reflect),
    Sequence(&'a dyn Sequence),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of the view.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Composite(_) => ReflectKind::Composite,
            Self::Sequence(_) => ReflectKind::Sequence,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, tagged by its [`ReflectKind`].
pub enum ReflectMut<'a> {
    Scalar(&'a mut dyn Reflect),
    Composite(&'a mut dyn Reflect),
    Sequence(&'a mut dyn Sequence),
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of the view.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Composite(_) => ReflectKind::Composite,
            Self::Sequence(_) => ReflectKind::Sequence,
        }
    }
}
