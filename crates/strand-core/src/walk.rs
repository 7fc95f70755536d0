//! The character-driven walk that lays out chain nodes.
//!
//! Each letter turns the heading and then steps forward. Letters `a`-`m` coil (a small, always
//! positive turn); letters `n`-`z` zigzag (a larger turn whose sign alternates between successive
//! zigzag letters). The heading accumulates over the whole sequence and is never reset.

use crate::geom::{Point, vector};

/// Nominal distance between consecutive nodes.
pub const BASE_STEP: f64 = 50.0;
/// Step length varies by `±STEP_SPREAD` across the alphabet.
pub const STEP_SPREAD: f64 = 30.0;

pub const COILED_TURN_MIN: f64 = 0.5;
pub const COILED_TURN_MAX: f64 = 1.5;
pub const ZIGZAG_TURN_MIN: f64 = 0.4;
pub const ZIGZAG_TURN_MAX: f64 = std::f64::consts::PI * 2.0 / 3.0;

/// First value in the zigzag regime (`'n'`).
pub const ZIGZAG_FROM: u8 = 13;
/// Largest letter value (`'z'`).
pub const MAX_VALUE: u8 = 25;

/// Re-maps `n` from `[start1, stop1]` onto `[start2, stop2]`.
///
/// Not clamped: every caller passes values inside the source range by construction. The
/// arithmetic order is fixed so results stay bit-identical to the classic `map()` helper.
pub fn map_range(n: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    (n - start1) / (stop1 - start1) * (stop2 - start2) + start2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Values 0..=12.
    Coiled,
    /// Values 13..=25.
    Zigzag,
}

impl Regime {
    pub fn of(value: u8) -> Self {
        if value < ZIGZAG_FROM {
            Self::Coiled
        } else {
            Self::Zigzag
        }
    }
}

pub fn step_length(value: u8) -> f64 {
    BASE_STEP + map_range(f64::from(value), 0.0, f64::from(MAX_VALUE), -STEP_SPREAD, STEP_SPREAD)
}

/// Fold state carried from one letter to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walk {
    pub position: Point,
    /// Cumulative heading in radians.
    pub angle: f64,
    /// Sign applied to the next zigzag turn (`1.0` or `-1.0`).
    pub zigzag_sign: f64,
}

impl Walk {
    pub fn start(origin: Point) -> Self {
        Self {
            position: origin,
            angle: 0.0,
            zigzag_sign: 1.0,
        }
    }

    /// Turn applied for `value`, together with the zigzag sign for the following letter.
    ///
    /// Coiled letters leave the sign untouched.
    pub fn turn(&self, value: u8) -> (f64, f64) {
        let v = f64::from(value);
        match Regime::of(value) {
            Regime::Coiled => (
                map_range(v, 0.0, 12.0, COILED_TURN_MIN, COILED_TURN_MAX),
                self.zigzag_sign,
            ),
            Regime::Zigzag => (
                self.zigzag_sign
                    * map_range(
                        v,
                        f64::from(ZIGZAG_FROM),
                        f64::from(MAX_VALUE),
                        ZIGZAG_TURN_MIN,
                        ZIGZAG_TURN_MAX,
                    ),
                -self.zigzag_sign,
            ),
        }
    }

    /// Applies one letter: turn, then step forward along the new heading.
    pub fn step(self, value: u8) -> Self {
        let (offset, zigzag_sign) = self.turn(value);
        let angle = self.angle + offset;
        let len = step_length(value);
        Self {
            position: self.position + vector(angle.cos() * len, angle.sin() * len),
            angle,
            zigzag_sign,
        }
    }
}
