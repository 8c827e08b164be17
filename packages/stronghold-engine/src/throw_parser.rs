//! Parses a single teleport-command clipboard line into a [`Throw`].

use std::f64::consts::TAU;

use stronghold_types::{Throw, ThrowType};

use crate::error::EngineError;

/// Overworld throws outside this pitch band (degrees) are looking away
/// from the eye's zenith and get reclassified as Blind.
const EYE_PITCH_MIN: f64 = -48.0;
const EYE_PITCH_MAX: f64 = -12.0;

/// Parse `/execute in <dimension> run tp @s <x> <y> <z> <yaw> <pitch>` or
/// the bare `/tp @s <x> <y> <z> <yaw> <pitch>` form.
///
/// The dimension token is found by scanning for a `minecraft:`-prefixed
/// word rather than reading a fixed token index — the original command
/// router indexed the 3rd space-separated word directly, which only works
/// for the `/execute in ...` grammar; `spec.md` describes both grammars
/// as valid input, so this crate detects the dimension token by its
/// `minecraft:` prefix wherever it falls (see DESIGN.md).
pub fn parse(line: &str) -> Result<Throw, EngineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let floats: Vec<f64> = tokens.iter().filter_map(|t| t.parse::<f64>().ok()).collect();

    if floats.len() != 5 {
        return Err(EngineError::InvalidFormat(format!(
            "expected 5 numeric tokens, found {} in {line:?}",
            floats.len()
        )));
    }

    let x = floats[0];
    let z = floats[2];
    let yaw_deg = floats[3];
    let pitch_deg = floats[4];

    if let Some(dimension) = tokens.iter().find(|t| t.starts_with("minecraft:")) {
        if *dimension != "minecraft:overworld" {
            return Ok(blind_throw(x * 8.0, z * 8.0, ThrowType::Nether));
        }
    }

    if !(EYE_PITCH_MIN..=EYE_PITCH_MAX).contains(&pitch_deg) {
        return Ok(blind_throw(x, z, ThrowType::Blind));
    }

    Ok(Throw { x, z, a: yaw_deg.to_radians(), kind: ThrowType::Overworld })
}

fn blind_throw(x: f64, z: f64, kind: ThrowType) -> Throw {
    // spec.md §3: normalised to [0, 2π), not wrapped to (-π, π] — `Throw` is
    // wire-facing and the stored `a` must stay in the documented range.
    let a = (-x).atan2(z).rem_euclid(TAU);
    Throw { x, z, a, kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overworld_throw() {
        let t = parse("/execute in minecraft:overworld run tp @s -214.79 104.61 386.16 76.50 -32.40").unwrap();
        assert_eq!(t.kind, ThrowType::Overworld);
        assert_eq!(t.x, -214.79);
        assert_eq!(t.z, 386.16);
        assert!((t.a - 76.50_f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn bare_tp_without_dimension_token_is_overworld() {
        let t = parse("/tp @s -214.79 104.61 386.16 76.50 -32.40").unwrap();
        assert_eq!(t.kind, ThrowType::Overworld);
    }

    #[test]
    fn pitch_boundary_is_inclusive_overworld() {
        let lo = parse("/execute in minecraft:overworld run tp @s 0 0 0 0 -48").unwrap();
        let hi = parse("/execute in minecraft:overworld run tp @s 0 0 0 0 -12").unwrap();
        assert_eq!(lo.kind, ThrowType::Overworld);
        assert_eq!(hi.kind, ThrowType::Overworld);
    }

    #[test]
    fn pitch_outside_band_is_blind_at_origin_angle() {
        let t = parse("/execute in minecraft:overworld run tp @s 100 64 200 76.50 -10.35").unwrap();
        assert_eq!(t.kind, ThrowType::Blind);
        assert_eq!(t.x, 100.0);
        assert_eq!(t.z, 200.0);
    }

    #[test]
    fn nether_dimension_scales_position_by_eight() {
        let t = parse("/execute in minecraft:the_nether run tp @s 100 64 200 0 0").unwrap();
        assert_eq!(t.kind, ThrowType::Nether);
        assert_eq!(t.x, 800.0);
        assert_eq!(t.z, 1600.0);
    }

    #[test]
    fn wrong_float_count_is_invalid_format() {
        assert!(parse("/tp @s 1 2 3").is_err());
    }
}
