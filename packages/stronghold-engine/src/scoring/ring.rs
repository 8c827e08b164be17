use std::f64::consts::TAU;

use stronghold_types::{ring_id, rings, Chunk, LayerSet, Throw};

/// Blocks added to/subtracted from a ring's outer bound when sampling the
/// three buffer distances a neighbouring spoke is checked at.
const SPOKE_BUFFERS: [f64; 3] = [-120.0, 0.0, 120.0];

/// Ring layer: ring membership, neighbour-spoke selectability, and distance
/// preference within the ring.
///
/// Returns 0 if `chunk` isn't in any ring. Otherwise starts at 1 and, per
/// throw, adds that throw's selectability score — or, if the chunk loses
/// to the farthest-buffer alternative on a neighbouring spoke, discards the
/// whole layer (returns 0) immediately. Finally adds 1 per distance
/// threshold (`ring_mod`, `2*ring_mod`, `3*ring_mod`) the chunk's distance
/// from the ring's preferred radius meets.
pub fn score(ls: &LayerSet, throws: &[Throw], chunk: Chunk) -> i64 {
    let rid = ring_id(chunk);
    if rid == -1 {
        return 0;
    }
    let ring = rings()[rid as usize];

    let (cx, cz) = chunk.center();
    let bearing = (cx as f64).atan2(cz as f64);
    let step = TAU / ring.spoke_count as f64;

    let mut total: i64 = 1;
    for t in throws {
        let to_candidate = chunk.dist(t.x, t.z);
        let mut throw_score: i64 = 10;
        let mut discard = false;

        for side in [-1.0, 1.0] {
            let alt_bearing = bearing + side * step;
            for &buffer in &SPOKE_BUFFERS {
                let alt_r = ring.max_dist + buffer;
                let alt_x = alt_r * alt_bearing.sin();
                let alt_z = alt_r * alt_bearing.cos();
                let to_alt = ((t.x - alt_x).powi(2) + (t.z - alt_z).powi(2)).sqrt();
                if to_alt < to_candidate {
                    throw_score -= 1;
                    if buffer == 120.0 {
                        discard = true;
                    }
                }
            }
        }

        if discard {
            return 0;
        }
        total += throw_score;
    }

    let preferred = ring.min_dist + (ring.max_dist - ring.min_dist) * ls.average_distance;
    let delta = (chunk.dist_from_origin() - preferred).abs();
    for mult in [1.0, 2.0, 3.0] {
        if delta < ls.ring_mod * mult {
            total += 1;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use stronghold_types::ThrowType;

    #[test]
    fn rejects_chunk_outside_every_ring() {
        let ls = stronghold_types::TWO_EYE_SET;
        let throw = Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        assert_eq!(score(&ls, &[throw], Chunk::new(0, 0)), 0);
    }

    #[test]
    fn scores_chunk_comfortably_within_a_ring() {
        let ls = stronghold_types::TWO_EYE_SET;
        // well inside ring 0 (1408-2688), far from any spoke alternative
        let throw = Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        let chunk = Chunk::new(0, 2000 / 16);
        assert!(score(&ls, &[throw], chunk) > 0);
    }
}
