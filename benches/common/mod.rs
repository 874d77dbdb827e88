// Deterministic key material shared by the benches.

/// Linear congruential sequence; distinct seeds give disjoint-looking keys.
pub fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

pub fn key(n: u64) -> String {
    format!("k{:016x}", n)
}
