/// Seed material from JavaScript's `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256.0 * random()) as u8))
}
