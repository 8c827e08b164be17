//! DBSCAN clustering over scored chunks and final guess selection.
//!
//! `minPts = 1` reduces DBSCAN to connected components of the
//! ε-neighbourhood graph: every point is its own core point, so a cluster
//! is just the set of points reachable from one another within `ε`. The
//! distance metric deliberately mixes chunk-index units with raw score
//! units (see `spec.md` §4.5) — this crate does not attempt to normalise
//! that, since it's the exact metric the scoring constants were tuned
//! against.

use std::collections::HashMap;

use stronghold_types::{Chunk, Guess, LayerSet, Throw};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScoredChunk {
    chunk: Chunk,
    score: i64,
}

fn dbscan_distance(a: ScoredChunk, b: ScoredChunk) -> f64 {
    let dx = (a.chunk.cx - b.chunk.cx) as f64;
    let dz = (a.chunk.cz - b.chunk.cz) as f64;
    let ds = (a.score - b.score) as f64;
    (dx * dx + dz * dz + ds * ds).sqrt()
}

/// Connected components of the `ε`-radius graph over `points`. Naive
/// O(n²) — fine at the filtered, above-average candidate counts this runs
/// over; a spatial index would only be worth it at far larger scale.
fn dbscan(points: &[ScoredChunk], eps: f64) -> Vec<Vec<ScoredChunk>> {
    let n = points.len();
    let mut visited = vec![false; n];
    let mut clusters = Vec::new();

    for i in 0..n {
        if visited[i] {
            continue;
        }
        let mut stack = vec![i];
        visited[i] = true;
        let mut members = Vec::new();
        while let Some(cur) = stack.pop() {
            members.push(points[cur]);
            for j in 0..n {
                if !visited[j] && dbscan_distance(points[cur], points[j]) <= eps {
                    visited[j] = true;
                    stack.push(j);
                }
            }
        }
        clusters.push(members);
    }
    clusters
}

struct Cluster {
    members: Vec<ScoredChunk>,
    centroid: (f64, f64),
}

fn score_weighted_centroid(members: &[ScoredChunk]) -> (f64, f64) {
    let total: i64 = members.iter().map(|m| m.score).sum();
    let mut x = 0.0;
    let mut z = 0.0;
    for m in members {
        let (cx, cz) = m.chunk.center();
        x += cx as f64 * m.score as f64;
        z += cz as f64 * m.score as f64;
    }
    (x / total as f64, z / total as f64)
}

fn planar_dist(ax: f64, az: f64, bx: f64, bz: f64) -> f64 {
    let dx = ax - bx;
    let dz = az - bz;
    (dx * dx + dz * dz).sqrt()
}

/// Cluster `scores`, pick the cluster nearest the last throw, and emit the
/// best chunk within it as a [`Guess`]. Returns [`Guess::reset`] if
/// `scores` is empty.
pub fn best_guess(layer_set: &LayerSet, throws: &[Throw], scores: &HashMap<Chunk, i64>) -> Guess {
    if scores.is_empty() {
        return Guess::reset();
    }

    let total: i64 = scores.values().sum();
    let average = total / scores.len() as i64;

    let candidates: Vec<ScoredChunk> = scores
        .iter()
        .filter(|(_, &s)| s >= average)
        .map(|(&chunk, &score)| ScoredChunk { chunk, score })
        .collect();

    let raw_clusters = dbscan(&candidates, layer_set.cluster_weight);
    let allow_outliers = raw_clusters.iter().all(|c| c.len() == 1);

    let clusters: Vec<Cluster> = raw_clusters
        .into_iter()
        .filter(|c| c.len() > 1 || allow_outliers)
        .map(|members| {
            let centroid = score_weighted_centroid(&members);
            Cluster { members, centroid }
        })
        .collect();

    debug!(
        candidates = candidates.len(),
        clusters = clusters.len(),
        allow_outliers,
        "clustered scored chunks for layer set {}",
        layer_set.code
    );

    // `allow_outliers` is set whenever every cluster would otherwise be
    // dropped, so `clusters` can't be empty here.
    let last = throws.last().expect("scores non-empty implies at least one throw");
    let chosen = clusters
        .iter()
        .min_by(|a, b| {
            let da = planar_dist(a.centroid.0, a.centroid.1, last.x, last.z);
            let db = planar_dist(b.centroid.0, b.centroid.1, last.x, last.z);
            da.partial_cmp(&db).expect("distances are finite")
        })
        .expect("clusters non-empty");

    let (sx, sz) = chosen.centroid;
    let best = chosen
        .members
        .iter()
        .min_by(|a, b| {
            let da = a.chunk.dist(sx, sz) / a.score as f64;
            let db = b.chunk.dist(sx, sz) / b.score as f64;
            da.partial_cmp(&db).expect("distances are finite")
        })
        .expect("chosen cluster is non-empty");

    let confidence = ((best.score * 1000) / (total + 2)).max(1) as i32;

    Guess {
        chunk: best.chunk,
        method: layer_set.code,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stronghold_types::ThrowType;

    #[test]
    fn empty_scores_reset() {
        let throws = [Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld }];
        let guess = best_guess(&stronghold_types::TWO_EYE_SET, &throws, &HashMap::new());
        assert!(guess.is_reset());
    }

    #[test]
    fn single_chunk_scores_is_its_own_guess() {
        let throws = [Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld }];
        let chunk = Chunk::new(100, 0);
        let mut scores = HashMap::new();
        scores.insert(chunk, 500i64);
        let guess = best_guess(&stronghold_types::ONE_EYE_SET, &throws, &scores);
        assert_eq!(guess.chunk, chunk);
        assert_eq!(guess.method, "educated");
        assert!(guess.confidence >= 1 && guess.confidence <= 1000);
    }

    #[test]
    fn picks_cluster_nearest_last_throw() {
        let throws = [Throw { x: 1600.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld }];
        let near = Chunk::new(100, 0);
        let far = Chunk::new(-100, 0);
        let mut scores = HashMap::new();
        scores.insert(near, 400i64);
        scores.insert(far, 400i64);
        let guess = best_guess(&stronghold_types::ONE_EYE_SET, &throws, &scores);
        assert_eq!(guess.chunk, near);
    }
}
