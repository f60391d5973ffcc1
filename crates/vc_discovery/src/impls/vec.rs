use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef, Sequence};

impl<T: Reflect + Typed + Clone> Reflect for Vec<T> {
    crate::__impl_reflect_cast_fn!();

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let Some(other) = other.as_sequence() else {
            return Some(false);
        };
        if Sequence::len(self) != other.len() {
            return Some(false);
        }
        for (a, b) in self.iter().zip(other.iter()) {
            match a.reflect_partial_eq(b) {
                Some(true) => {}
                result => return result,
            }
        }
        Some(true)
    }

    fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}

impl<T: Reflect + Typed + Clone> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(Reflect::as_reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(Reflect::as_reflect_mut)
    }

    fn set(&mut self, index: usize, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let Some(slot) = <[T]>::get_mut(self, index) else {
            return Err(value);
        };
        *slot = T::from_boxed_reflect(value)?;
        Ok(())
    }
}

impl<T: Reflect + Typed + Clone> Typed for Vec<T> {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::sequence::<Self, T>()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use crate::ops::Sequence;

    #[test]
    fn vec_is_a_sequence() {
        let list = vec![String::from("a"), String::from("b")];
        let reflected: &dyn Reflect = &list;
        let sequence = reflected.as_sequence().unwrap();
        assert_eq!(sequence.len(), 2);
        let items: Vec<_> = sequence
            .iter()
            .filter_map(|item| item.downcast_ref::<String>())
            .collect();
        assert_eq!(items, ["a", "b"]);

        let info = <Vec<String> as Typed>::type_info();
        assert_eq!(info.kind(), ReflectKind::Sequence);
        assert!(info.base().ty().is::<String>());
    }

    #[test]
    fn set_checks_range_and_type() {
        let mut list = vec![1_i32, 2];
        assert!(list.set(2, Box::new(3_i32)).is_err());
        assert!(list.set(0, Box::new(3_u8)).is_err());
        assert!(list.set(0, Box::new(9_i32)).is_ok());
        assert_eq!(list, [9, 2]);
    }

    #[test]
    fn debug_lists_items() {
        let list = vec![1_u8, 2];
        let reflected: &dyn Reflect = &list;
        assert_eq!(alloc::format!("{reflected:?}"), "[1, 2]");
        assert_eq!(reflected.reflect_partial_eq(&vec![1_u8, 2]), Some(true));
        assert_eq!(reflected.reflect_partial_eq(&vec![1_u8]), Some(false));
    }
}
