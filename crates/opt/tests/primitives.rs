use opt::{OptBool, OptChar, OptF64, OptI128, OptI32, OptU16};

#[test]
fn primitive_aliases_are_exported() {
    let mut n = OptI32::none();
    assert!(!n.has_value());
    n.set(42);
    assert_eq!(n.get(), 42);

    assert_eq!(OptU16::some(u16::MAX).get(), u16::MAX);
    assert_eq!(OptI128::some(i128::MIN).get(), i128::MIN);
    assert_eq!(OptF64::none().get_or(2.5), 2.5);
    assert_eq!(OptChar::some('@').get(), '@');
    assert!(!OptBool::some(false).get());
}
