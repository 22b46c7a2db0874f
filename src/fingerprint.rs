//! Content fingerprints for scenario results
//!
//! A `ScenarioResult` is a pure function of `(parameters, bit roster,
//! sequence)`, so the natural memoization key is a digest of those inputs.
//! The digest doubles as the derived result id when the caller has not
//! assigned one.

use serde::Serialize;
use std::collections::HashMap;

use crate::types::{BitType, DrillingParameters, ScenarioResult};

/// Canonical serialization shape for the digest. Field order is fixed here,
/// so the fingerprint is stable across callers.
#[derive(Serialize)]
struct FingerprintInput<'a> {
    params: &'a DrillingParameters,
    bit_types: &'a [BitType],
    sequence: &'a [String],
}

/// Digest of a full simulation input, hex-encoded.
///
/// Identical inputs always produce identical fingerprints; any change to a
/// parameter, a roster entry, or the sequence order changes it.
pub fn scenario_fingerprint(
    params: &DrillingParameters,
    bit_types: &[BitType],
    sequence: &[String],
) -> String {
    let payload = serde_json::to_vec(&FingerprintInput {
        params,
        bit_types,
        sequence,
    })
    .unwrap_or_default();
    format!("{:x}", md5::compute(payload))
}

// ============================================================================
// Result Cache
// ============================================================================

/// Fingerprint-keyed memo for scenario results.
///
/// Optional caller-side optimization: the engine is cheap enough to rerun on
/// every edit, but interactive callers recomputing many scenarios per
/// keystroke can route through this instead.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, ScenarioResult>,
}

impl ResultCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for these inputs, simulating on a miss.
    pub fn get_or_simulate(
        &mut self,
        params: &DrillingParameters,
        bit_types: &[BitType],
        sequence: &[String],
    ) -> ScenarioResult {
        let key = scenario_fingerprint(params, bit_types, sequence);
        if let Some(hit) = self.entries.get(&key) {
            return hit.clone();
        }
        let result = crate::simulator::simulate(params, bit_types, sequence);
        self.entries.insert(key, result.clone());
        result
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached result. Call after any bulk roster edit.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
