use serde::{Deserialize, Serialize};

use crate::Chunk;

/// The engine's output: a predicted chunk, how it was produced, and how
/// confident the engine is in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub chunk: Chunk,
    pub method: &'static str,
    /// `[0, 1000]`; 1000 ≈ single-candidate certainty.
    pub confidence: i32,
}

impl Guess {
    /// Sentinel returned when the session could not score any chunk.
    /// `spec.md` §4.6/§7: this is not an error, it is the `"reset"`
    /// signal telling the caller to retry with only the latest throw.
    pub fn reset() -> Self {
        Self { chunk: Chunk::new(0, 0), method: "reset", confidence: 0 }
    }

    pub fn is_reset(&self) -> bool {
        self.method == "reset"
    }
}
