//! Biased-randomized selection over a position-ordered list.

use vrp_core::SearchRng;

/// Draw an index from a quasi-geometric distribution over `0..len`:
///
///   i = ⌊ln U / ln(1 − β)⌋ mod len,  U ∼ Uniform(0, 1)
///
/// β near 1 concentrates the mass at index 0 (greedy, see
/// [`vrp_core::BETA_DETERMINISTIC`]); β near 0 approaches uniform.
///
/// # Panics
/// Debug-asserts `len > 0` and `β ∈ (0, 1)`.
pub fn biased_index(beta: f64, len: usize, rng: &mut SearchRng) -> usize {
    debug_assert!(len > 0, "cannot sample from an empty list");
    debug_assert!(0.0 < beta && beta < 1.0, "beta must lie in (0, 1), got {beta}");

    // U must be strictly positive: ln(0) is undefined.
    let mut u: f64 = rng.random();
    while u <= 0.0 {
        u = rng.random();
    }
    (u.ln() / (1.0 - beta).ln()) as usize % len
}
