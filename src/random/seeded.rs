//! Seeded, reproducible randomness.
//!
//! Everything that influences the shape of a blob draws from this module. The
//! stream for a given seed is fixed forever: golden tests pin it.

/// A reproducible stream of floats in `[0, 1)`.
pub trait SeededRandomSource {
    /// Advance the state and return the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Mulberry32 generator over a 32-bit state.
///
/// Any seed is valid, including 0: the additive step moves the state off zero
/// before the first output is mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const STEP: u32 = 0x6D2B_79F5;

    /// Create a generator whose first output is derived from `seed + STEP`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::STEP);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl SeededRandomSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Closure form of [`Mulberry32`]: each call yields the next value in `[0, 1)`.
pub fn create_prng(seed: u32) -> impl FnMut() -> f64 {
    let mut rng = Mulberry32::new(seed);
    move || rng.next_f64()
}

/// Turn user text into a non-zero seed.
///
/// Text that reads as a finite number (after trimming; empty text counts as 0)
/// yields `max(1, floor(n))` reduced modulo 2^32. Anything else is hashed over
/// its UTF-16 code units.
pub fn seed_from_string(s: &str) -> u32 {
    match parse_numeric(s) {
        Some(n) if n.is_finite() => seed_from_number(n),
        _ => hash_seed(s),
    }
}

pub(crate) fn seed_from_number(n: f64) -> u32 {
    let wrapped = n.floor().max(1.0).rem_euclid(4_294_967_296.0) as u32;
    wrapped.max(1)
}

fn hash_seed(s: &str) -> u32 {
    let units: Vec<u16> = s.encode_utf16().collect();
    let mut h = 1_779_033_703u32 ^ (units.len() as u32);
    for c in units {
        h = (h ^ u32::from(c)).wrapping_mul(3_432_918_353);
        h = h.rotate_left(13);
    }
    h.max(1)
}

// Numeric coercion in the manner of JavaScript `Number(text)`.
fn parse_numeric(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }
    t.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/random/seeded.rs"]
mod tests;
