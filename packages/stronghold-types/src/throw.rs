use serde::{Deserialize, Serialize};

/// Which observation kind produced a [`Throw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrowType {
    /// Normal eye-of-ender throw in the overworld, looking near the eye's
    /// own zenith.
    Overworld,
    /// A throw whose pitch puts the player's gaze away from the eye
    /// (or a synthetic throw with no recorded yaw at all).
    Blind,
    /// Recorded from the nether; only ever contributes a remembered
    /// portal location, never an overworld throw.
    Nether,
}

impl std::fmt::Display for ThrowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ThrowType::Overworld => "overworld",
            ThrowType::Blind => "blind",
            ThrowType::Nether => "nether",
        };
        write!(f, "{s}")
    }
}

/// One eye-of-ender observation: a planar origin and a yaw, tagged with
/// the kind of throw it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Throw {
    pub x: f64,
    pub z: f64,
    /// Yaw, in radians, already normalised/converted per throw kind.
    pub a: f64,
    #[serde(rename = "type")]
    pub kind: ThrowType,
}

impl Throw {
    /// Planar distance between this throw's origin and another's.
    fn planar_dist(&self, other: &Throw) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Two throws are similar when their planar origins are within 6
    /// blocks of each other.
    pub fn similar(&self, other: &Throw) -> bool {
        self.planar_dist(other) < 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similar_throws_within_six_blocks() {
        let a = Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        let b = Throw { x: 3.0, z: 3.0, a: 1.0, kind: ThrowType::Overworld };
        assert!(a.similar(&b));
    }

    #[test]
    fn dissimilar_throws_past_six_blocks() {
        let a = Throw { x: 0.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        let b = Throw { x: 100.0, z: 0.0, a: 0.0, kind: ThrowType::Overworld };
        assert!(!a.similar(&b));
    }
}
