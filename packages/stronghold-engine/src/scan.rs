//! Chunk ray-scan: enumerate every chunk a throw's forward ray passes
//! through, restricted to the stronghold rings.

use std::collections::HashSet;

use stronghold_types::{ring_id, ring_id_for_dist, rings, Chunk, Throw, RING_TOLERANCE_FINE};

use crate::error::EngineError;
use crate::geometry::chunk_from_position;

/// Hard cap on DDA steps before a scan is declared pathological.
const MAX_SCAN_ITERS: u32 = 10_000;

/// Enumerate every chunk the throw's forward ray passes through, from its
/// origin outward until the ray has both moved away from a previous step
/// and cleared the outermost ring's outer bound (+ the coarse tolerance).
pub fn chunks_in_throw(throw: &Throw) -> Result<Vec<Chunk>, EngineError> {
    let (dx, dz) = (-throw.a.sin(), throw.a.cos());
    let mut cx = throw.x;
    let mut cz = throw.z;
    let mut last_dist = (cx * cx + cz * cz).sqrt();

    let outer_bound = rings()[7].max_dist + stronghold_types::RING_TOLERANCE_COARSE;

    let mut found = HashSet::new();
    let mut chunks = Vec::new();
    let mut last_ring: Option<i32> = None;
    let mut iters = 0u32;

    loop {
        let here = chunk_from_position(cx, cz);
        let chunk_x = here.cx;
        let chunk_z = here.cz;

        let cur_dist = (cx * cx + cz * cz).sqrt();
        let cur_ring = ring_id_for_dist(cur_dist, RING_TOLERANCE_FINE);
        if cur_ring != -1 {
            last_ring = Some(cur_ring);
        }

        for xo in -1..=1 {
            for zo in -1..=1 {
                let chunk = Chunk::new(chunk_x + xo, chunk_z + zo);
                if !found.insert(chunk) {
                    continue;
                }
                let rid = ring_id(chunk);
                if rid == -1 {
                    continue;
                }
                if let Some(current) = last_ring {
                    if (rid - current).abs() > 1 {
                        continue;
                    }
                }
                chunks.push(chunk);
            }
        }

        let next_x = if dx > 0.0 {
            (chunk_x + 1) * 16
        } else {
            chunk_x * 16
        };
        let next_z = if dz > 0.0 {
            (chunk_z + 1) * 16
        } else {
            chunk_z * 16
        };

        let dist_x = if dx != 0.0 { (next_x as f64 - cx) / dx } else { f64::INFINITY };
        let dist_z = if dz != 0.0 { (next_z as f64 - cz) / dz } else { f64::INFINITY };

        let mut use_x = dist_x.abs() < dist_z.abs();
        if dist_x == 0.0 {
            use_x = false;
        }
        if dist_z == 0.0 {
            use_x = true;
        }

        if use_x {
            cx += dx * dist_x;
            cz += dz * dist_x;
        } else {
            cx += dx * dist_z;
            cz += dz * dist_z;
        }

        let new_dist = (cx * cx + cz * cz).sqrt();
        if new_dist > last_dist && new_dist > outer_bound {
            break;
        }
        last_dist = new_dist;

        iters += 1;
        if iters > MAX_SCAN_ITERS {
            return Err(EngineError::Overscan);
        }
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stronghold_types::ThrowType;

    #[test]
    fn scan_admits_only_ringed_chunks() {
        let throw = Throw { x: -214.79, z: 386.16, a: 76.50_f64.to_radians(), kind: ThrowType::Overworld };
        let chunks = chunks_in_throw(&throw).expect("scan should not overscan");
        assert!(!chunks.is_empty());
        for c in &chunks {
            assert_ne!(ring_id(*c), -1);
        }
    }

    #[test]
    fn scan_terminates_within_iteration_cap() {
        let throw = Throw { x: 0.0, z: 0.0, a: 0.3, kind: ThrowType::Overworld };
        assert!(chunks_in_throw(&throw).is_ok());
    }
}
