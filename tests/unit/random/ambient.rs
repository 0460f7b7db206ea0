use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn rand_int_is_inclusive() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; 3];
    for _ in 0..500 {
        let v = rng.rand_int(1, 3);
        assert!((1..=3).contains(&v));
        seen[(v - 1) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn rand_int_swaps_reversed_bounds() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let v = rng.rand_int(10, -10);
        assert!((-10..=10).contains(&v));
    }
    assert_eq!(rng.rand_int(4, 4), 4);
}

#[test]
fn rand_float_is_half_open() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1_000 {
        let v = rng.rand_float(0.5, 2.0);
        assert!(v >= 0.5 && v < 2.0);
    }
}

#[test]
fn rand_float_degenerate_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(rng.rand_float(1.5, 1.5), 1.5);
    assert_eq!(rng.rand_float(0.0, f64::INFINITY), 0.0);
    assert_eq!(rng.rand_float(f64::NAN, 1.0), 1.0);
}

#[test]
fn thread_ambient_draws_in_range() {
    let mut rng = thread_ambient();
    let v = rng.rand_int(1, 1 << 31);
    assert!((1..=(1 << 31)).contains(&v));
}
