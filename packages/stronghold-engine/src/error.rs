use stronghold_types::Chunk;

/// Request-fatal or per-clip engine failures.
///
/// `Degenerate` (cross-angle denominator near zero) and `EmptyResult`
/// (no chunk scored) are deliberately *not* variants here — `spec.md` §7
/// treats the first as an expected skip-and-continue outcome and the
/// second as the `"reset"` method string on an ordinary [`Guess`], not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid throw format: {0}")]
    InvalidFormat(String),

    #[error("ray-scan exceeded iteration cap")]
    Overscan,

    #[error("assertion failed: negative score for {0}")]
    NegativeScore(Chunk),
}
