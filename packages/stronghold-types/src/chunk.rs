use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 8 concentric annuli of valid stronghold chunk distances from
/// the world origin, measured in blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub min_dist: f64,
    pub max_dist: f64,
    /// Number of evenly-spaced spokes strongholds are placed on in this ring.
    pub spoke_count: u32,
}

/// The 8 stronghold rings, innermost first. Bounds and spoke counts are
/// fixed by the world generator being modelled — not tunable.
const RING_BOUNDS: [(f64, f64); 8] = [
    (1408.0, 2688.0),
    (4480.0, 5760.0),
    (7552.0, 8832.0),
    (10624.0, 11904.0),
    (13696.0, 14976.0),
    (16768.0, 18048.0),
    (19840.0, 21120.0),
    (22912.0, 24192.0),
];

const RING_SPOKES: [u32; 8] = [3, 6, 10, 15, 21, 28, 36, 9];

/// Ring-membership tolerance used by the scoring path. Standardised on
/// this single value everywhere a chunk's ring id is computed for scoring
/// or classification purposes.
pub const RING_TOLERANCE_FINE: f64 = 110.0;

/// Outer bound used only by the ray-scan to decide when to stop walking
/// further from the origin. Not a second ring-membership tolerance.
pub const RING_TOLERANCE_COARSE: f64 = 240.0;

/// The fixed ring table, innermost-bound-first.
pub fn rings() -> [Ring; 8] {
    let mut out = [Ring { min_dist: 0.0, max_dist: 0.0, spoke_count: 0 }; 8];
    let mut i = 0;
    while i < 8 {
        out[i] = Ring {
            min_dist: RING_BOUNDS[i].0,
            max_dist: RING_BOUNDS[i].1,
            spoke_count: RING_SPOKES[i],
        };
        i += 1;
    }
    out
}

/// Lowest ring index whose bounds (widened by `±tolerance`) contain `dist`,
/// or `-1` if none match. `dist` is the chunk's planar distance from the
/// world origin.
pub fn ring_id_for_dist(dist: f64, tolerance: f64) -> i32 {
    for (i, ring) in rings().iter().enumerate() {
        if dist < ring.min_dist - tolerance {
            continue;
        }
        if dist > ring.max_dist + tolerance {
            continue;
        }
        return i as i32;
    }
    -1
}

/// Ring id of a chunk, using the production (fine-grained) tolerance.
pub fn ring_id(chunk: Chunk) -> i32 {
    ring_id_for_dist(chunk.dist_from_origin(), RING_TOLERANCE_FINE)
}

/// Shift `rads` by multiples of 2π until it lies in `(-π, π]`.
pub fn wrap(mut rads: f64) -> f64 {
    use std::f64::consts::PI;
    while rads < -PI {
        rads += TAU;
    }
    while rads > PI {
        rads -= TAU;
    }
    rads
}

/// A 16×16 block chunk, addressed by integer chunk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chunk {
    pub cx: i32,
    pub cz: i32,
}

impl Chunk {
    pub fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// The chunk's canonical block center, `(cx*16+8, cz*16+8)`.
    pub fn center(&self) -> (i32, i32) {
        (self.cx * 16 + 8, self.cz * 16 + 8)
    }

    /// The standard stronghold-corner offset, `center - 4` on each axis.
    pub fn staircase(&self) -> (i32, i32) {
        let (x, z) = self.center();
        (x - 4, z - 4)
    }

    /// Euclidean distance from this chunk's center to an arbitrary block
    /// position.
    pub fn dist(&self, x: f64, z: f64) -> f64 {
        let (cx, cz) = self.center();
        let dx = cx as f64 - x;
        let dz = cz as f64 - z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Euclidean distance between this chunk's center and another's.
    pub fn chunk_dist(&self, other: Chunk) -> f64 {
        let (x, z) = other.center();
        self.dist(x as f64, z as f64)
    }

    /// Distance from this chunk's center to the world origin.
    pub fn dist_from_origin(&self) -> f64 {
        self.dist(0.0, 0.0)
    }

    /// Signed angular delta between yaw `a` and the bearing from `(sx, sz)`
    /// to this chunk's center, wrapped to `(-π, π]`.
    pub fn angle(&self, a: f64, sx: f64, sz: f64) -> f64 {
        let (cx, cz) = self.center();
        let mut bearing = (sx - cx as f64).atan2(cz as f64 - sz) + TAU;
        bearing %= TAU;
        wrap(a - bearing)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, z) = self.center();
        write!(
            f,
            "chunk {},{} (center {}, {}, ring {})",
            self.cx,
            self.cz,
            x,
            z,
            ring_id(*self)
        )
    }
}
