//! Chunk ↔ block coordinate conversion and the other planar geometry
//! primitives the rest of the engine is built on.

use stronghold_types::Chunk;

/// Python-style floor modulus: the remainder takes the sign of `m`.
fn floor_mod(d: i32, m: i32) -> i32 {
    let r = d % m;
    if (r < 0 && m > 0) || (r > 0 && m < 0) {
        r + m
    } else {
        r
    }
}

/// The chunk containing block `(x, z)`.
pub fn chunk_from_center(x: i32, z: i32) -> Chunk {
    Chunk::new((x - floor_mod(x, 16)) / 16, (z - floor_mod(z, 16)) / 16)
}

/// The chunk containing the (possibly fractional) position `(x, z)`,
/// floored to integer blocks first.
pub fn chunk_from_position(x: f64, z: f64) -> Chunk {
    chunk_from_center(x.floor() as i32, z.floor() as i32)
}
