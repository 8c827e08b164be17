use stronghold_types::{Chunk, LayerSet, Throw};

/// Throws whose yaw points further than this from a chunk reject it
/// outright, regardless of anything else.
const MAX_EYE_ANGLE: f64 = 0.85;

/// Angle layer: how well each throw's yaw points at `chunk`'s bearing.
///
/// Returns 0 (reject) if any throw's angular delta exceeds
/// [`MAX_EYE_ANGLE`]. Otherwise a positive baseline plus, per throw, one
/// point for each of 5 increasingly loose thresholds met
/// (`angle_pref * {1,2,4,6,9}`), averaged (integer division) over throws
/// so ordinary chunks never score 0 solely for mediocre angle fit.
pub fn score(ls: &LayerSet, throws: &[Throw], chunk: Chunk) -> i64 {
    let mut total: i64 = 1;
    for t in throws {
        let delta = chunk.angle(t.a, t.x, t.z).abs();
        if delta > MAX_EYE_ANGLE {
            return 0;
        }
        for mult in [1.0, 2.0, 4.0, 6.0, 9.0] {
            if delta < ls.angle_pref * mult {
                total += 1;
            }
        }
    }
    total / throws.len() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use stronghold_types::ThrowType;

    #[test]
    fn rejects_chunks_past_max_eye_angle() {
        let ls = stronghold_types::TWO_EYE_SET;
        let throw = Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        // chunk directly behind the throw: angle delta ~ pi, well past 0.85
        let chunk = Chunk::new(0, -100);
        assert_eq!(score(&ls, &[throw], chunk), 0);
    }

    #[test]
    fn rewards_well_aligned_chunk() {
        let ls = stronghold_types::TWO_EYE_SET;
        let throw = Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        // yaw 0 points toward +z
        let chunk = Chunk::new(0, 100);
        assert!(score(&ls, &[throw], chunk) > 0);
    }
}
