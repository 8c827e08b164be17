use stronghold_types::{Chunk, LayerSet, Throw};

/// Below this, a throw pair's yaws are treated as parallel and skipped
/// rather than divided by a near-zero denominator.
const DEGENERATE_EPSILON: f64 = 1e-6;

/// Cross-angle layer: distance from `chunk` to the centroid of every
/// pairwise ray intersection among `throws`.
///
/// With fewer than 2 throws there's nothing to intersect, so this layer is
/// a no-op (returns 1). With 2+, every pair whose yaws aren't
/// near-parallel contributes one intersection point; the chunk is scored
/// by its distance from the centroid of those points against
/// `math_factor`-scaled bands. If every pair is degenerate (no usable
/// intersections at all) the layer rejects (returns 0) rather than score
/// against an undefined centroid.
pub fn score(ls: &LayerSet, throws: &[Throw], chunk: Chunk) -> i64 {
    if throws.len() < 2 {
        return 1;
    }

    let mut sum_x = 0.0;
    let mut sum_z = 0.0;
    let mut count = 0u32;

    for i in 0..throws.len() - 1 {
        for j in i + 1..throws.len() {
            let t = throws[i];
            let o = throws[j];
            let denom = (o.a - t.a).sin();
            if denom.abs() < DEGENERATE_EPSILON {
                continue;
            }
            let k = ((o.z - t.z) * o.a.sin() + (o.x - t.x) * o.a.cos()) / denom;
            let nz = t.z + k * t.a.cos();
            let nx = t.x - k * t.a.sin();
            sum_x += nx;
            sum_z += nz;
            count += 1;
        }
    }

    if count == 0 {
        return 0;
    }

    let centroid_x = sum_x / count as f64;
    let centroid_z = sum_z / count as f64;
    let d = chunk.dist(centroid_x, centroid_z);
    let mf = ls.math_factor;

    if d < mf {
        7
    } else if d < 2.0 * mf {
        6
    } else if d < 4.0 * mf {
        5
    } else if d < 8.0 * mf {
        4
    } else if d < 16.0 * mf {
        3
    } else if d < 32.0 * mf {
        2
    } else if d < 64.0 * mf {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stronghold_types::ThrowType;

    #[test]
    fn single_throw_is_a_no_op() {
        let ls = stronghold_types::TWO_EYE_SET;
        let throw = Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        assert_eq!(score(&ls, &[throw], Chunk::new(0, 100)), 1);
    }

    #[test]
    fn rewards_chunk_near_intersection_of_two_rays() {
        let ls = stronghold_types::TWO_EYE_SET;
        // two throws converging roughly on (0, 2000)
        let a = Throw { x: -500.0, z: 0.0, a: 20.0_f64.to_radians(), kind: ThrowType::Overworld };
        let b = Throw { x: 500.0, z: 0.0, a: -20.0_f64.to_radians(), kind: ThrowType::Overworld };
        let near = Chunk::new(0, 2000 / 16);
        let far = Chunk::new(2000 / 16, 0);
        assert!(score(&ls, &[a, b], near) > score(&ls, &[a, b], far));
    }

    #[test]
    fn parallel_throws_are_degenerate() {
        let ls = stronghold_types::TWO_EYE_SET;
        let a = Throw { x: 0.0, z: 0.0, a: 0.3, kind: ThrowType::Overworld };
        let b = Throw { x: 100.0, z: 0.0, a: 0.3, kind: ThrowType::Overworld };
        assert_eq!(score(&ls, &[a, b], Chunk::new(0, 100)), 0);
    }
}
