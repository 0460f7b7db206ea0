use super::*;

#[test]
fn mulberry32_seed_one_golden_vector() {
    let mut rng = Mulberry32::new(1);
    let expected = [
        0.6270739405881613,
        0.002735721180215478,
        0.5274470399599522,
        0.9810509674716741,
        0.9683778982143849,
    ];
    for want in expected {
        assert_eq!(rng.next_f64(), want);
    }
}

#[test]
fn zero_seed_is_a_valid_stream() {
    let mut rng = Mulberry32::new(0);
    assert_eq!(rng.next_f64(), 0.26642920868471265);
    assert_eq!(rng.next_f64(), 0.0003297457005828619);
    assert_eq!(rng.next_f64(), 0.2232720274478197);
}

#[test]
fn default_seed_first_draws() {
    let mut next = create_prng(380_098_792);
    assert_eq!(next(), 0.4544260723050684);
    assert_eq!(next(), 0.899847828084603);
}

#[test]
fn closure_and_struct_agree() {
    let mut next = create_prng(987_654_321);
    let mut rng = Mulberry32::new(987_654_321);
    for _ in 0..64 {
        assert_eq!(next(), rng.next_f64());
    }
}

#[test]
fn same_seed_same_stream_and_unit_range() {
    let mut a = Mulberry32::new(u32::MAX);
    let mut b = Mulberry32::new(u32::MAX);
    for _ in 0..10_000 {
        let v = a.next_f64();
        assert_eq!(v, b.next_f64());
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn seed_from_string_text_is_hashed() {
    assert_eq!(seed_from_string("abc"), 50_696_745);
    assert_eq!(seed_from_string("abc"), seed_from_string("abc"));
    assert_eq!(seed_from_string("hello world"), 879_195_369);
    assert_eq!(seed_from_string("blob"), 498_231_401);
    assert_eq!(seed_from_string("Infinity"), 2_121_705_990);
}

#[test]
fn seed_from_string_hashes_utf16_units() {
    assert_eq!(seed_from_string("héllo"), 153_954_304);
    // Surrogate pair: two code units.
    assert_eq!(seed_from_string("😀"), 2_342_049_946);
}

#[test]
fn seed_from_string_numeric_input() {
    assert_eq!(seed_from_string("42"), 42);
    assert_eq!(seed_from_string("  42 "), 42);
    assert_eq!(seed_from_string("0"), 1);
    assert_eq!(seed_from_string(""), 1);
    assert_eq!(seed_from_string("-5"), 1);
    assert_eq!(seed_from_string("3.9"), 3);
    assert_eq!(seed_from_string("1e3"), 1000);
    assert_eq!(seed_from_string("0x1F"), 31);
    assert_eq!(seed_from_string("0b101"), 5);
    assert_eq!(seed_from_string("380098792"), 380_098_792);
}

#[test]
fn seed_from_number_wraps_and_never_returns_zero() {
    assert_eq!(seed_from_number(4_294_967_297.0), 1);
    assert_eq!(seed_from_number(4_294_967_296.0), 1);
    assert_eq!(seed_from_number(4_294_967_295.0), u32::MAX);
}
