/// Thin wrappers over `Math.random` for the mock record generators.
///
/// Randomness stays behind the `RecordSource` capability boundary: nothing in
/// the feed core calls these, so core behavior stays deterministic in tests.

/// Uniform pick from a non-empty slice.
pub fn pick<T>(pool: &[T]) -> &T {
    let index = (js_sys::Math::random() * pool.len() as f64) as usize;
    // Math.random() < 1.0, but clamp anyway.
    &pool[index.min(pool.len() - 1)]
}

/// Random whole number of seconds in [0, max).
pub fn seconds_up_to(max: i64) -> i64 {
    (js_sys::Math::random() * max as f64) as i64
}
