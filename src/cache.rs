use crate::color::Color;
use crate::swatch::{build_swatch, Swatch};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Starting accumulator for the fingerprint fold. Fixed so fingerprints
/// are reproducible across runs and machines.
pub const FINGERPRINT_SEED: u64 = 17;

/// Order-sensitive fingerprint of a matched color sequence.
///
/// The `acc * 31 + bits` recurrence is part of the contract: test fixtures
/// and host-side texture keys rely on it staying bit-for-bit stable.
/// Distinct sequences that collide share a swatch; with the handful of
/// user-authored rules in practice this is accepted and not defended
/// against.
pub fn fingerprint(colors: &[Color]) -> u64 {
    let mut acc = FINGERPRINT_SEED;
    for color in colors {
        acc = acc.wrapping_mul(31).wrapping_add(color.bits() as u64);
    }
    acc
}

/// Process-wide store of generated swatches, keyed by fingerprint.
///
/// Entries are never individually evicted; the host calls [`clear`] when
/// the rule set or the gradient mode changes, since either changes what a
/// fingerprint should render as. Until then a stale entry is served as-is.
/// Unbounded growth is accepted: the distinct-fingerprint space is bounded
/// by the small user-edited rule set.
///
/// [`clear`]: SwatchCache::clear
#[derive(Debug, Default)]
pub struct SwatchCache {
    entries: Mutex<HashMap<u64, Arc<Swatch>>>,
}

impl SwatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached swatch for `fingerprint`, building and inserting
    /// it on a miss. Concurrent misses on the same fingerprint may build
    /// twice; the buffers are identical and only one is kept, so every
    /// caller still ends up holding the stored instance.
    pub fn get_or_create(
        &self,
        fingerprint: u64,
        colors: &[Color],
        use_gradient: bool,
    ) -> Arc<Swatch> {
        if let Ok(entries) = self.entries.lock() {
            if let Some(swatch) = entries.get(&fingerprint) {
                return Arc::clone(swatch);
            }
        }

        let built = Arc::new(build_swatch(colors, use_gradient));
        if let Ok(mut entries) = self.entries.lock() {
            return Arc::clone(entries.entry(fingerprint).or_insert(built));
        }
        built
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
