//! Batch request handler: ingest a clip list, produce a response record.
//!
//! This is the stateless, one-request-at-a-time flow (`spec.md` §4.7) —
//! a fresh [`crate::session::Session`] per call. A caller that instead
//! wants to stream throws in over a session's lifetime (e.g. a UI shell
//! watching the clipboard) should drive [`crate::session::SessionHandle`]
//! directly instead of going through this module.

use serde::{Deserialize, Serialize};
use stronghold_types::Guess;
use tracing::{debug, warn};

use crate::session::Session;
use crate::throw_parser;

fn default_max_clips() -> usize {
    5
}

/// `STRONGHOLD_MAX_CLIPS` overrides the per-request clip ceiling; defaults
/// to 5 per `spec.md` §5/§6.
fn max_clips() -> usize {
    std::env::var("STRONGHOLD_MAX_CLIPS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(default_max_clips)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestOptions {
    #[serde(default)]
    pub hyper: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub clips: Vec<String>,
    #[serde(default)]
    pub options: RequestOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub chunk: Option<(i32, i32)>,
    pub coords: Option<(i32, i32)>,
    pub player: Option<(i32, i32)>,
    pub portal: Option<(i32, i32)>,
    pub method: String,
    pub confidence: i32,
    pub reset: bool,
}

impl Response {
    /// The 400-equivalent response for a malformed clip list: too many
    /// clips, none at all, or none that parsed.
    fn rejected() -> Self {
        Self {
            chunk: None,
            coords: None,
            player: None,
            portal: None,
            method: "reset".to_string(),
            confidence: 0,
            reset: true,
        }
    }
}

/// Ingest `request.clips` into a fresh session, compute the best guess,
/// and retry once with only the latest throw if the first attempt can't
/// score anything.
pub fn handle_request(request: &Request) -> Response {
    let limit = max_clips();
    if request.clips.is_empty() || request.clips.len() > limit {
        warn!(clips = request.clips.len(), limit, "rejecting out-of-bounds clip list");
        return Response::rejected();
    }

    let mut session = Session::new();
    for clip in &request.clips {
        match throw_parser::parse(clip) {
            Ok(throw) => session.new_throw(throw),
            Err(e) => debug!(clip, error = %e, "dropping unparsable clip"),
        }
    }

    let Some(last_throw) = session.throws().last().copied() else {
        warn!("no clip in the request parsed into a usable throw");
        return Response::rejected();
    };

    let mut reset_flag = false;
    let mut guess = session.guess(request.options.hyper).unwrap_or_else(|e| {
        warn!(error = %e, "engine error computing initial guess");
        Guess::reset()
    });

    if guess.is_reset() {
        session.reset_to_last();
        reset_flag = true;
        guess = session.guess(request.options.hyper).unwrap_or_else(|e| {
            warn!(error = %e, "engine error computing retry guess");
            Guess::reset()
        });
    }

    let (cx, cz) = guess.chunk.staircase();
    Response {
        chunk: Some((guess.chunk.cx, guess.chunk.cz)),
        coords: Some((cx, cz)),
        player: Some((last_throw.x as i32, last_throw.z as i32)),
        portal: session.portal(),
        method: guess.method.to_string(),
        confidence: guess.confidence,
        reset: reset_flag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_clips_is_rejected() {
        let req = Request {
            clips: vec!["/tp @s 0 0 0 0 0".to_string(); 6],
            options: RequestOptions::default(),
        };
        let res = handle_request(&req);
        assert_eq!(res.method, "reset");
        assert!(res.reset);
        assert!(res.chunk.is_none());
    }

    #[test]
    fn empty_clip_list_is_rejected() {
        let req = Request { clips: vec![], options: RequestOptions::default() };
        let res = handle_request(&req);
        assert_eq!(res.method, "reset");
    }

    #[test]
    fn two_real_overworld_throws_triangulate() {
        let req = Request {
            clips: vec![
                "/execute in minecraft:overworld run tp @s 294.96 64.0 -486.85 -499.05 -32.0".to_string(),
                "/execute in minecraft:overworld run tp @s 362.90 64.0 -669.03 -493.95 -32.0".to_string(),
            ],
            options: RequestOptions::default(),
        };
        let res = handle_request(&req);
        assert_eq!(res.method, "triangulation");
        assert!(res.chunk.is_some());
    }

    #[test]
    fn blind_throw_reports_zeroed_player_position() {
        let req = Request {
            clips: vec!["/execute in minecraft:overworld run tp @s 100.0 64.0 200.0 76.50 -10.35".to_string()],
            options: RequestOptions::default(),
        };
        let res = handle_request(&req);
        assert_eq!(res.player, Some((0, 0)));
    }

    #[test]
    fn three_overworld_throws_select_triangulation() {
        let req = Request {
            clips: vec![
                "/execute in minecraft:overworld run tp @s -456.90 64.0 120.37 -752.41 -32.0".to_string(),
                "/execute in minecraft:overworld run tp @s -237.07 64.0 508.18 -753.61 -32.0".to_string(),
                "/execute in minecraft:overworld run tp @s -109.32 64.0 640.59 -751.96 -32.0".to_string(),
            ],
            options: RequestOptions::default(),
        };
        let res = handle_request(&req);
        assert_eq!(res.method, "triangulation");
        assert!(res.chunk.is_some());
        assert!(res.confidence >= 1 && res.confidence <= 1000);
    }

    #[test]
    fn single_overworld_throw_selects_educated() {
        let req = Request {
            clips: vec!["/execute in minecraft:overworld run tp @s -241.27 64.0 283.87 -125.85 -32.0".to_string()],
            options: RequestOptions::default(),
        };
        let res = handle_request(&req);
        assert_eq!(res.method, "educated");
        assert!(res.chunk.is_some());
    }

    #[test]
    fn nether_clip_alone_is_remembered_as_a_portal() {
        let req = Request {
            clips: vec!["/execute in minecraft:the_nether run tp @s 100.0 64.0 200.0 0.0 0.0".to_string()],
            options: RequestOptions::default(),
        };
        let res = handle_request(&req);
        assert_eq!(res.portal, Some((100, 200)));
        assert!(res.method == "reset" || res.method == "blind");
        if res.method == "reset" {
            assert!(res.reset);
        }
    }
}
