//! Weighted multi-layer chunk scoring.

mod angle;
mod cross_angle;
mod ring;

use std::collections::HashMap;

use stronghold_types::{Chunk, LayerSet, Throw};
use tracing::trace;

use crate::error::EngineError;
use crate::scan::chunks_in_throw;

/// Score every chunk reachable by any throw's ray-scan.
///
/// A chunk is scored against the union of all throws (not just the one
/// that put it in the scan), since the angle, ring and cross-angle layers
/// all consider every throw already. A chunk is dropped from the result
/// entirely — not scored 0 — the moment any one layer rejects it, per
/// `spec.md` §4.4: "if any layer returns 0, the chunk does not appear in
/// the map at all."
pub fn score_chunks(
    layer_set: &LayerSet,
    throws: &[Throw],
) -> Result<HashMap<Chunk, i64>, EngineError> {
    let mut candidates: std::collections::HashSet<Chunk> = std::collections::HashSet::new();
    for t in throws {
        for c in chunks_in_throw(t)? {
            candidates.insert(c);
        }
    }

    let mut scores = HashMap::with_capacity(candidates.len());
    for chunk in candidates {
        let a = angle::score(layer_set, throws, chunk);
        if a == 0 {
            continue;
        }
        let r = ring::score(layer_set, throws, chunk);
        if r == 0 {
            continue;
        }
        let x = cross_angle::score(layer_set, throws, chunk);
        if x == 0 {
            continue;
        }

        let [wa, wr, wx] = layer_set.weights;
        let total = a * wa + r * wr + x * wx;
        if total < 0 {
            return Err(EngineError::NegativeScore(chunk));
        }
        scores.insert(chunk, total);
    }

    trace!(candidates = scores.len(), "scored chunks for layer set {}", layer_set.code);
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stronghold_types::ThrowType;

    #[test]
    fn scores_nonempty_for_a_plausible_throw_pair() {
        let a = Throw { x: -214.79, z: 386.16, a: 76.50_f64.to_radians(), kind: ThrowType::Overworld };
        let b = Throw { x: -214.79, z: 386.16, a: 70.0_f64.to_radians(), kind: ThrowType::Overworld };
        let scores = score_chunks(&stronghold_types::TWO_EYE_SET, &[a, b]).unwrap();
        assert!(!scores.is_empty());
        for v in scores.values() {
            assert!(*v > 0);
        }
    }
}
