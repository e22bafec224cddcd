//! Contract scenarios for `Opt<T>`.

use std::panic::{self, UnwindSafe};
use std::sync::Mutex;

use opt::{define_opt, OptBool, OptChar, OptError, OptF64, OptI32, OptU8};

use crate::runner::{Case, CaseError, Scenario};
use crate::{check, ensure};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sample {
    pub i: i32,
    pub c: u8,
}

define_opt!(Sample);

pub const ALL: &[(&str, Scenario)] = &[
    ("opt_initial_state", opt_initial_state),
    ("opt_set_value", opt_set_value),
    ("opt_get_value", opt_get_value),
    ("opt_get_ptr", opt_get_ptr),
    ("opt_get_or", opt_get_or),
    ("opt_clear", opt_clear),
    ("opt_user_record", opt_user_record),
    ("opt_try_get", opt_try_get),
    ("opt_empty_access_traps", opt_empty_access_traps),
    ("opt_primitives", opt_primitives),
];

fn opt_initial_state(c: &mut Case) -> Result<(), CaseError> {
    let opt = OptI32::none();
    ensure!(c, !opt.has_value());
    Ok(())
}

fn opt_set_value(c: &mut Case) -> Result<(), CaseError> {
    let mut opt = OptI32::none();
    ensure!(c, !opt.has_value());

    opt.set(42);
    check!(c, opt.has_value());
    check!(c, opt.get_or(0) == 42);
    Ok(())
}

fn opt_get_value(c: &mut Case) -> Result<(), CaseError> {
    let mut opt = OptI32::none();
    ensure!(c, !opt.has_value());

    opt.set(69);
    ensure!(c, opt.has_value());
    check!(c, opt.get() == 69);
    // SAFETY: presence was ensured above.
    check!(c, unsafe { opt.get_unchecked() } == 69);
    Ok(())
}

fn opt_get_ptr(c: &mut Case) -> Result<(), CaseError> {
    let mut opt = OptI32::none();
    ensure!(c, !opt.has_value());

    opt.set(69);
    ensure!(c, opt.has_value());

    let shared: *const i32 = opt.get_ref();
    check!(c, std::ptr::eq(opt.get_mut(), shared));

    *opt.get_mut() = 70;
    check!(c, opt.get() == 70);
    Ok(())
}

fn opt_get_or(c: &mut Case) -> Result<(), CaseError> {
    {
        let mut opt = OptI32::none();
        ensure!(c, !opt.has_value());
        opt.set(69);
        check!(c, opt.get_or(42) == 69);
    }
    {
        let opt = OptI32::none();
        ensure!(c, !opt.has_value());
        check!(c, opt.get_or(42) == 42);
    }
    Ok(())
}

fn opt_clear(c: &mut Case) -> Result<(), CaseError> {
    let mut opt = OptI32::none();
    ensure!(c, !opt.has_value());

    opt.clear();
    check!(c, !opt.has_value());

    opt.set(69);
    ensure!(c, opt.has_value());

    opt.clear();
    check!(c, !opt.has_value());
    check!(c, opt.get_or(7) == 7);
    Ok(())
}

fn opt_user_record(c: &mut Case) -> Result<(), CaseError> {
    let opt = OptSample::some(Sample { i: 1024, c: 64 });
    ensure!(c, opt.has_value());

    let s = opt.get();
    check!(c, s.i == 1024);
    check!(c, s.c == 64);
    Ok(())
}

fn opt_try_get(c: &mut Case) -> Result<(), CaseError> {
    let mut opt = OptU8::none();
    check!(c, opt.try_get() == Err(OptError::Empty));

    opt.set(3);
    check!(c, opt.try_get() == Ok(3));
    Ok(())
}

fn opt_empty_access_traps(c: &mut Case) -> Result<(), CaseError> {
    check!(c, traps(|| OptI32::none().get()));
    check!(c, traps(|| OptSample::none().into_inner()));
    check!(c, traps(|| {
        let mut opt = OptI32::some(1);
        opt.clear();
        *opt.get_mut() += 1;
    }));
    check!(c, !traps(|| OptI32::none().get_or(0)));
    Ok(())
}

fn opt_primitives(c: &mut Case) -> Result<(), CaseError> {
    check!(c, !OptBool::none().has_value());
    check!(c, OptBool::some(true).get());
    check!(c, OptChar::some('@').get() == '@');
    check!(c, OptF64::none().get_or(0.5) == 0.5);
    check!(c, OptU8::some(u8::MAX).get() == u8::MAX);
    Ok(())
}

// The panic hook is process-global; swaps must not interleave.
static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with the panic hook silenced and reports whether it panicked.
pub fn traps<R>(f: impl FnOnce() -> R + UnwindSafe) -> bool {
    let _guard = HOOK_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let trapped = panic::catch_unwind(f).is_err();
    panic::set_hook(hook);
    trapped
}
