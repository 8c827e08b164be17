//! Stateful throw accumulator and layer-set selector.

use std::collections::HashMap;
use std::sync::Mutex;

use stronghold_types::{Chunk, Guess, LayerSet, Throw, ThrowType, HYPER_SET, ONE_EYE_SET, TWO_EYE_SET, ZERO_EYE_SET};
use tracing::debug;

use crate::cluster;
use crate::error::EngineError;
use crate::scoring;

/// Accumulates throws for one stronghold prediction and picks the active
/// [`LayerSet`] from the throw-count/type state machine.
#[derive(Debug, Clone, Default)]
pub struct Session {
    throws: Vec<Throw>,
    custom_layer: Option<LayerSet>,
    portal: Option<(i32, i32)>,
    last_scores: HashMap<Chunk, i64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session pinned to a caller-supplied layer set, bypassing the
    /// throw-count selector entirely.
    pub fn with_custom_layer(layer: LayerSet) -> Self {
        Self { custom_layer: Some(layer), ..Self::default() }
    }

    pub fn throws(&self) -> &[Throw] {
        &self.throws
    }

    pub fn portal(&self) -> Option<(i32, i32)> {
        self.portal
    }

    /// Ingest one throw: records portal memory for Nether throws, drops
    /// throws too similar to one already held, zeroes a Blind throw's
    /// stored position, and otherwise appends it.
    ///
    /// A Nether throw only ever enters the throw list itself when it's
    /// the first throw the session has seen — matching the original
    /// clipboard-router's `len(sess.Throws) > 0` guard, so a portal seen
    /// after a real throw contributes only its remembered location, never
    /// a pseudo-throw competing with it.
    pub fn new_throw(&mut self, mut throw: Throw) {
        if throw.kind == ThrowType::Nether {
            if self.portal.is_none() {
                self.portal = Some(((throw.x / 8.0) as i32, (throw.z / 8.0) as i32));
            }
            if !self.throws.is_empty() {
                return;
            }
        }

        if self.throws.iter().any(|t| t.similar(&throw)) {
            return;
        }

        if throw.kind == ThrowType::Blind {
            throw.x = 0.0;
            throw.z = 0.0;
        }

        self.throws.push(throw);
    }

    /// Drop every throw but the most recent — used after a `reset` guess
    /// to retry with only the latest observation.
    pub fn reset_to_last(&mut self) {
        if let Some(last) = self.throws.last().copied() {
            self.throws = vec![last];
        }
    }

    /// The layer set active for the session's current throws, per
    /// `spec.md` §4.6: an explicit custom override wins outright, then a
    /// caller-requested hyper flag, then the throw-count/type table.
    pub fn active_layer_set(&self, hyper: bool) -> LayerSet {
        if let Some(custom) = self.custom_layer {
            return custom;
        }
        if hyper {
            return HYPER_SET;
        }
        if self.throws.len() >= 2 {
            return TWO_EYE_SET;
        }
        match self.throws.first().map(|t| t.kind) {
            Some(ThrowType::Overworld) => ONE_EYE_SET,
            Some(ThrowType::Blind) | Some(ThrowType::Nether) | None => ZERO_EYE_SET,
        }
    }

    /// Score the session's throws and pick the best chunk. An empty throw
    /// list or an empty scores map both yield [`Guess::reset`] rather
    /// than an error — only [`EngineError::Overscan`] and
    /// [`EngineError::NegativeScore`] are request-fatal here.
    pub fn guess(&mut self, hyper: bool) -> Result<Guess, EngineError> {
        if self.throws.is_empty() {
            self.last_scores.clear();
            return Ok(Guess::reset());
        }
        let layer_set = self.active_layer_set(hyper);
        let scores = scoring::score_chunks(&layer_set, &self.throws)?;
        let guess = cluster::best_guess(&layer_set, &self.throws, &scores);
        debug!(method = guess.method, confidence = guess.confidence, "session guess");
        self.last_scores = scores;
        Ok(guess)
    }

    /// All chunks scored by the most recent [`Session::guess`] call,
    /// ordered by chunk coordinate for deterministic diagnostics.
    pub fn sorted_chunks(&self) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = self.last_scores.keys().copied().collect();
        chunks.sort();
        chunks
    }

    /// The same chunks, ordered by descending score.
    pub fn by_score(&self) -> Vec<Chunk> {
        let mut chunks = self.sorted_chunks();
        chunks.sort_by(|a, b| self.last_scores[b].cmp(&self.last_scores[a]));
        chunks
    }

    pub fn scores(&self) -> &HashMap<Chunk, i64> {
        &self.last_scores
    }
}

/// Mutex-guarded [`Session`] for a caller (e.g. a UI shell streaming
/// clipboard events) that shares one session across threads. `new_throw`,
/// `reset`, and `guess` each lock for their duration and never hold the
/// lock across anything that could block, mirroring the teacher's
/// `Arc<RwLock<SharedState>>` sharing pattern — but with a blocking
/// `Mutex`, since this engine has no async boundary to justify an async
/// lock.
#[derive(Debug, Default)]
pub struct SessionHandle(Mutex<Session>);

impl SessionHandle {
    pub fn new() -> Self {
        Self(Mutex::new(Session::new()))
    }

    pub fn new_throw(&self, throw: Throw) {
        self.0.lock().expect("session mutex poisoned").new_throw(throw);
    }

    pub fn reset_to_last(&self) {
        self.0.lock().expect("session mutex poisoned").reset_to_last();
    }

    pub fn guess(&self, hyper: bool) -> Result<Guess, EngineError> {
        self.0.lock().expect("session mutex poisoned").guess(hyper)
    }

    pub fn portal(&self) -> Option<(i32, i32)> {
        self.0.lock().expect("session mutex poisoned").portal()
    }
}
