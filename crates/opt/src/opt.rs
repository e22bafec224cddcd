//! The optional container and its operation set.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::{ManuallyDrop, MaybeUninit};

use crate::error::{OptError, Result};

/// A value of `T` or nothing, stored inline next to a presence flag.
///
/// `value` is initialized exactly when `has_value` is set. While the flag is
/// down the storage content is unspecified: [`Opt::none`] leaves it
/// uninitialized and [`Opt::clear`] drops the value in place without touching
/// its bytes. Any `T` can start out empty; no `Default` bound is needed.
///
/// Cloning an `Opt` copies flag and value together.
#[repr(C)]
pub struct Opt<T> {
    has_value: bool,
    value: MaybeUninit<T>,
}

impl<T> Opt<T> {
    /// Empty container.
    #[inline]
    pub const fn none() -> Self {
        Self { has_value: false, value: MaybeUninit::uninit() }
    }

    /// Container holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { has_value: true, value: MaybeUninit::new(value) }
    }

    /// Same as [`Opt::some`].
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::some(value)
    }

    /// Lifts a `core::option::Option` into an `Opt`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::some(v),
            None => Self::none(),
        }
    }

    #[inline]
    pub const fn has_value(&self) -> bool {
        self.has_value
    }

    /// Trusting retrieval. Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        if !self.has_value {
            empty_access("get");
        }
        // SAFETY: the flag is set, so `value` is initialized.
        unsafe { self.value.assume_init_ref() }.clone()
    }

    /// Trusting retrieval with no release-mode check.
    ///
    /// # Safety
    ///
    /// The container must hold a value. Debug builds trap when it does not.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> T
    where
        T: Clone,
    {
        debug_assert!(self.has_value, "Opt::get_unchecked() called on an empty container");
        self.value.assume_init_ref().clone()
    }

    /// Shared reference to the stored value. Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn get_ref(&self) -> &T {
        if !self.has_value {
            empty_access("get_ref");
        }
        // SAFETY: the flag is set, so `value` is initialized.
        unsafe { self.value.assume_init_ref() }
    }

    /// Reference to the container's own storage, not a copy.
    /// Panics if the container is empty.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        if !self.has_value {
            empty_access("get_mut");
        }
        // SAFETY: the flag is set, so `value` is initialized.
        unsafe { self.value.assume_init_mut() }
    }

    /// Reference to the container's storage without checking presence.
    ///
    /// # Safety
    ///
    /// The container must hold a value. Debug builds trap when it does not.
    #[inline]
    pub unsafe fn get_mut_unchecked(&mut self) -> &mut T {
        debug_assert!(self.has_value, "Opt::get_mut_unchecked() called on an empty container");
        self.value.assume_init_mut()
    }

    /// The stored value, or `fallback` when empty. Never fails.
    #[inline]
    pub fn get_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self.as_option() {
            Some(v) => v.clone(),
            None => fallback,
        }
    }

    /// Checked retrieval for callers that want to recover from absence.
    pub fn try_get(&self) -> Result<T>
    where
        T: Clone,
    {
        self.as_option().cloned().ok_or(OptError::Empty)
    }

    /// Stores `value` and raises the presence flag. The previous value is dropped.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.clear();
        self.value.write(value);
        self.has_value = true;
    }

    /// Lowers the presence flag and drops the value in place. The storage
    /// bytes are not reset.
    #[inline]
    pub fn clear(&mut self) {
        if self.has_value {
            // Flag first: a panicking `Drop` must not lead to a second drop.
            self.has_value = false;
            // SAFETY: the flag was set, so `value` was initialized.
            unsafe { self.value.assume_init_drop() };
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        if self.has_value {
            // SAFETY: the flag is set, so `value` is initialized.
            Some(unsafe { self.value.assume_init_ref() })
        } else {
            None
        }
    }

    pub fn into_option(self) -> Option<T> {
        let this = ManuallyDrop::new(self);
        if this.has_value {
            // SAFETY: initialized, and `this` is never dropped, so the value moves out once.
            Some(unsafe { this.value.assume_init_read() })
        } else {
            None
        }
    }

    /// Consumes the container. Panics if it is empty.
    #[track_caller]
    pub fn into_inner(self) -> T {
        if !self.has_value {
            empty_access("into_inner");
        }
        let this = ManuallyDrop::new(self);
        // SAFETY: initialized, and `this` is never dropped, so the value moves out once.
        unsafe { this.value.assume_init_read() }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_access(op: &str) -> ! {
    panic!("Opt::{op}() called on an empty container")
}

impl<T> Drop for Opt<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for Opt<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(v) => Self::some(v.clone()),
            None => Self::none(),
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for Opt<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(opt: Opt<T>) -> Self {
        opt.into_option()
    }
}

// Only a live value takes part in comparison, hashing or formatting.

impl<T: PartialEq> PartialEq for Opt<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for Opt<T> {}

impl<T: Hash> Hash for Opt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(v) => f.debug_tuple("Some").field(v).finish(),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::rc::Rc;

    fn hash_of<T: Hash>(t: &T) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn get_mut_points_at_storage() {
        let mut opt = Opt::some(69i32);
        let storage: *const i32 = opt.value.as_ptr();
        assert!(core::ptr::eq(opt.get_mut(), storage));
        assert!(core::ptr::eq(opt.get_ref(), storage));
        assert!(core::ptr::eq(unsafe { opt.get_mut_unchecked() }, storage));
    }

    #[test]
    fn clear_keeps_storage_bytes() {
        let mut opt = Opt::some(5u8);
        opt.clear();
        assert!(!opt.has_value());
        // u8 has no drop glue, so the byte is still there.
        assert_eq!(unsafe { opt.value.assume_init_read() }, 5);
    }

    #[test]
    fn layout_is_flag_then_value() {
        assert_eq!(core::mem::size_of::<Opt<u8>>(), 2);
        assert_eq!(core::mem::size_of::<Opt<u64>>(), 16);
    }

    #[test]
    fn values_are_dropped_exactly_once() {
        let tracked = Rc::new(());
        {
            let mut opt = Opt::some(Rc::clone(&tracked));
            assert_eq!(Rc::strong_count(&tracked), 2);

            opt.set(Rc::clone(&tracked));
            assert_eq!(Rc::strong_count(&tracked), 2);

            opt.clear();
            opt.clear();
            assert_eq!(Rc::strong_count(&tracked), 1);

            opt.set(Rc::clone(&tracked));
            let copy = opt.clone();
            assert_eq!(Rc::strong_count(&tracked), 3);
            drop(copy);
        }
        assert_eq!(Rc::strong_count(&tracked), 1);

        let moved = Opt::some(Rc::clone(&tracked)).into_inner();
        assert_eq!(Rc::strong_count(&tracked), 2);
        drop(moved);
        assert_eq!(Opt::some(Rc::clone(&tracked)).into_option().map(|_| ()), Some(()));
        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    #[test]
    fn equality_ignores_cleared_storage() {
        let mut a = Opt::some(1i32);
        a.clear();
        let b = Opt::<i32>::none();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(Opt::some(1i32), Opt::some(2i32));
        assert_ne!(Opt::some(0i32), Opt::none());
    }

    #[test]
    fn debug_hides_cleared_storage() {
        let mut opt = Opt::some(7i32);
        assert_eq!(format!("{opt:?}"), "Some(7)");
        opt.clear();
        assert_eq!(format!("{opt:?}"), "None");
    }

    #[test]
    #[should_panic(expected = "Opt::get_mut() called on an empty container")]
    fn get_mut_on_empty_traps() {
        let mut opt = Opt::<u32>::none();
        let _ = opt.get_mut();
    }

    #[test]
    #[should_panic(expected = "Opt::get_ref() called on an empty container")]
    fn get_ref_on_empty_traps() {
        let opt = Opt::<u32>::none();
        let _ = opt.get_ref();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Opt::get_unchecked() called on an empty container")]
    fn get_unchecked_traps_in_debug() {
        let opt = Opt::<u32>::none();
        let _ = unsafe { opt.get_unchecked() };
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Opt::get_mut_unchecked() called on an empty container")]
    fn get_mut_unchecked_traps_in_debug() {
        let mut opt = Opt::<u32>::none();
        let _ = unsafe { opt.get_mut_unchecked() };
    }
}
