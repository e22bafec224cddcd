//! Naming concrete container types.
//!
//! `Opt<T>` is already one type per `T`; these macros give an instantiation a
//! name derived from `T` itself, `Opt` followed by the type name in
//! CamelCase: `define_opt!(i32)` declares `OptI32`, `define_opt!(Sample)`
//! declares `OptSample`. The name is a function of `T`, so generating the same
//! `T` twice in one module does not compile:
//!
//! ```compile_fail
//! opt::define_opt!(u32);
//! opt::define_opt!(u32);
//! ```
//!
//! The primitive batch counts as generation too:
//!
//! ```compile_fail
//! opt::define_opt_primitives!();
//! opt::define_opt!(i32);
//! ```
//!
//! Containers over different types never convert into each other:
//!
//! ```compile_fail
//! let a: opt::Opt<i32> = opt::Opt::some(1);
//! let b: opt::Opt<i64> = a;
//! ```
//!
//! Types that are not a single identifier (`Vec<u8>`, `[u8; 4]`) are used as
//! `Opt<Vec<u8>>` directly.

/// Declares `pub type Opt<T in CamelCase> = Opt<T>;`.
///
/// ```
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// pub struct Slot { pub i: i32, pub c: u8 }
///
/// opt::define_opt!(Slot);
///
/// let slot = OptSlot::some(Slot { i: 1024, c: 64 });
/// assert_eq!(slot.get().i, 1024);
/// assert!(!OptSlot::none().has_value());
/// ```
#[macro_export]
macro_rules! define_opt {
    ($(#[$meta:meta])* $ty:ident $(,)?) => {
        $crate::paste::paste! {
            $(#[$meta])*
            pub type [<Opt $ty:camel>] = $crate::Opt<$ty>;
        }
    };
}

/// Declares one alias per primitive scalar type, from `OptI8` to `OptBool`.
///
/// ```
/// opt::define_opt_primitives!();
///
/// let mut n = OptI32::none();
/// n.set(42);
/// assert_eq!(n.get(), 42);
/// assert!(!OptBool::none().has_value());
/// ```
#[macro_export]
macro_rules! define_opt_primitives {
    () => {
        $crate::define_opt!(i8);
        $crate::define_opt!(i16);
        $crate::define_opt!(i32);
        $crate::define_opt!(i64);
        $crate::define_opt!(i128);
        $crate::define_opt!(isize);
        $crate::define_opt!(u8);
        $crate::define_opt!(u16);
        $crate::define_opt!(u32);
        $crate::define_opt!(u64);
        $crate::define_opt!(u128);
        $crate::define_opt!(usize);
        $crate::define_opt!(f32);
        $crate::define_opt!(f64);
        $crate::define_opt!(char);
        $crate::define_opt!(bool);
    };
}

#[cfg(test)]
mod tests {
    use crate::Opt;

    #[derive(Clone, Copy, PartialEq, Debug)]
    pub struct Sample {
        i: i32,
        c: u8,
    }

    define_opt!(
        /// Container over a user record.
        Sample
    );

    mod batch {
        define_opt_primitives!();
    }

    #[test]
    fn alias_is_the_generic_type() {
        let a: OptSample = Opt::some(Sample { i: 1, c: 2 });
        let b: Opt<Sample> = a;
        assert_eq!(b.get(), Sample { i: 1, c: 2 });
    }

    #[test]
    fn batch_covers_primitives() {
        use batch::*;
        assert!(!OptU8::none().has_value());
        assert_eq!(OptI64::some(-3).get(), -3);
        assert_eq!(OptF32::none().get_or(0.5), 0.5);
        assert_eq!(OptChar::some('x').get(), 'x');
        assert!(OptBool::some(true).get());
        assert_eq!(OptUsize::some(9).get(), 9);
        assert_eq!(OptI128::some(i128::MAX).get(), i128::MAX);
        assert!(!OptIsize::none().has_value());
    }
}
