//! Uniform calling convention over optional containers.

use crate::error::{OptError, Result};
use crate::opt::Opt;

/// The operation set shared by every optional container, so code can be
/// written once against "some optional of `Value`".
pub trait Optional {
    type Value;

    fn has_value(&self) -> bool;

    /// Trusting retrieval. Implementations panic when empty.
    fn get(&self) -> Self::Value;

    fn get_or(&self, fallback: Self::Value) -> Self::Value;

    fn set(&mut self, value: Self::Value);

    fn clear(&mut self);

    #[inline]
    fn try_get(&self) -> Result<Self::Value> {
        if self.has_value() { Ok(self.get()) } else { Err(OptError::Empty) }
    }
}

impl<T: Clone> Optional for Opt<T> {
    type Value = T;

    #[inline]
    fn has_value(&self) -> bool {
        Opt::has_value(self)
    }

    #[inline]
    #[track_caller]
    fn get(&self) -> T {
        Opt::get(self)
    }

    #[inline]
    fn get_or(&self, fallback: T) -> T {
        Opt::get_or(self, fallback)
    }

    #[inline]
    fn set(&mut self, value: T) {
        Opt::set(self, value)
    }

    #[inline]
    fn clear(&mut self) {
        Opt::clear(self)
    }

    #[inline]
    fn try_get(&self) -> Result<T> {
        Opt::try_get(self)
    }
}

impl<T: Clone> Optional for Option<T> {
    type Value = T;

    #[inline]
    fn has_value(&self) -> bool {
        self.is_some()
    }

    #[inline]
    #[track_caller]
    fn get(&self) -> T {
        match self {
            Some(v) => v.clone(),
            None => panic!("Optional::get() called on None"),
        }
    }

    #[inline]
    fn get_or(&self, fallback: T) -> T {
        self.as_ref().cloned().unwrap_or(fallback)
    }

    #[inline]
    fn set(&mut self, value: T) {
        *self = Some(value);
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump<O: Optional<Value = u32>>(o: &mut O) -> u32 {
        let next = o.get_or(0) + 1;
        o.set(next);
        next
    }

    #[test]
    fn same_code_drives_both_containers() {
        let mut a = Opt::<u32>::none();
        let mut b: Option<u32> = None;
        assert_eq!(bump(&mut a), 1);
        assert_eq!(bump(&mut b), 1);
        assert_eq!(bump(&mut a), 2);
        assert_eq!(bump(&mut b), 2);

        Optional::clear(&mut a);
        Optional::clear(&mut b);
        assert_eq!(Optional::try_get(&a), Err(OptError::Empty));
        assert_eq!(Optional::try_get(&b), Err(OptError::Empty));
    }
}
