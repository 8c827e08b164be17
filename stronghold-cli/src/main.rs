//! Offline demo binary: reads teleport-command clips from stdin, one per
//! line, and prints the engine's response record as JSON. No network
//! transport is wired up (out of scope) — this binary exists to exercise
//! the engine end to end and for manual debugging via `--explain`.

use std::io::{self, Read};

use stronghold_engine::handler::{handle_request, Request, RequestOptions};
use stronghold_engine::{throw_parser, Session};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stronghold_engine=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let hyper = args.iter().any(|a| a == "--hyper");
    let explain = args.iter().any(|a| a == "--explain");

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let clips: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!(clips = clips.len(), hyper, "handling stronghold request");

    let request = Request { clips: clips.clone(), options: RequestOptions { hyper } };
    let response = handle_request(&request);

    if explain {
        explain_guess(&clips, hyper);
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Re-runs ingestion against a bare [`Session`] to print the diagnostics
/// the response record doesn't carry: every throw actually kept, the
/// remembered portal, and the top scored chunks.
fn explain_guess(clips: &[String], hyper: bool) {
    let mut session = Session::new();
    for clip in clips {
        if let Ok(throw) = throw_parser::parse(clip) {
            session.new_throw(throw);
        }
    }
    let _ = session.guess(hyper);

    eprintln!("--- explain ---");
    eprintln!("throws considered: {:?}", session.throws());
    if let Some(portal) = session.portal() {
        eprintln!("portal: {portal:?}");
    }
    for chunk in session.by_score().into_iter().take(10) {
        eprintln!("{chunk}  score={}", session.scores()[&chunk]);
    }
    eprintln!("---------------");
}
