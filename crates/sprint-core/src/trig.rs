//! Exact trigonometric values for the standard angles.
//!
//! The table is static and read-only; every trigonometry question and every
//! trigonometry distractor comes from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the eleven exact symbolic values a standard-angle ratio can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrigValue {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "√2/2")]
    Root2Over2,
    #[serde(rename = "√3/2")]
    Root3Over2,
    #[serde(rename = "√3")]
    Root3,
    #[serde(rename = "1/√3")]
    OneOverRoot3,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "2/√3")]
    TwoOverRoot3,
    #[serde(rename = "√2")]
    Root2,
    #[serde(rename = "undefined")]
    Undefined,
}

impl TrigValue {
    /// Every allowed value, in canonical order.
    pub const ALL: [TrigValue; 11] = [
        TrigValue::Zero,
        TrigValue::One,
        TrigValue::Half,
        TrigValue::Root2Over2,
        TrigValue::Root3Over2,
        TrigValue::Root3,
        TrigValue::OneOverRoot3,
        TrigValue::Two,
        TrigValue::TwoOverRoot3,
        TrigValue::Root2,
        TrigValue::Undefined,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TrigValue::Zero => "0",
            TrigValue::One => "1",
            TrigValue::Half => "1/2",
            TrigValue::Root2Over2 => "√2/2",
            TrigValue::Root3Over2 => "√3/2",
            TrigValue::Root3 => "√3",
            TrigValue::OneOverRoot3 => "1/√3",
            TrigValue::Two => "2",
            TrigValue::TwoOverRoot3 => "2/√3",
            TrigValue::Root2 => "√2",
            TrigValue::Undefined => "undefined",
        }
    }

    pub fn is_finite(self) -> bool {
        self != TrigValue::Undefined
    }
}

impl fmt::Display for TrigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TrigValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TrigValue::ALL
            .iter()
            .copied()
            .find(|v| v.symbol() == s)
            .ok_or_else(|| format!("unknown trigonometric value: {s}"))
    }
}

/// The six trigonometric ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
    Cosec,
    Sec,
    Cot,
}

impl TrigFunction {
    pub const ALL: [TrigFunction; 6] = [
        TrigFunction::Sin,
        TrigFunction::Cos,
        TrigFunction::Tan,
        TrigFunction::Cosec,
        TrigFunction::Sec,
        TrigFunction::Cot,
    ];

    fn column(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrigFunction::Sin => write!(f, "sin"),
            TrigFunction::Cos => write!(f, "cos"),
            TrigFunction::Tan => write!(f, "tan"),
            TrigFunction::Cosec => write!(f, "cosec"),
            TrigFunction::Sec => write!(f, "sec"),
            TrigFunction::Cot => write!(f, "cot"),
        }
    }
}

/// Angles covered by the table, in degrees.
pub const ANGLES: [u32; 5] = [0, 30, 45, 60, 90];

use TrigValue::*;

/// Rows follow [`ANGLES`], columns follow [`TrigFunction::ALL`].
static TABLE: [[TrigValue; 6]; 5] = [
    // sin, cos, tan, cosec, sec, cot
    [Zero, One, Zero, Undefined, One, Undefined],
    [Half, Root3Over2, OneOverRoot3, Two, TwoOverRoot3, Root3],
    [Root2Over2, Root2Over2, One, Root2, Root2, One],
    [Root3Over2, Half, Root3, TwoOverRoot3, Two, OneOverRoot3],
    [One, Zero, Undefined, One, Undefined, Zero],
];

/// Look up the exact value of `function` at `angle` degrees.
///
/// Returns `None` for angles outside [`ANGLES`].
pub fn lookup(angle: u32, function: TrigFunction) -> Option<TrigValue> {
    let row = ANGLES.iter().position(|&a| a == angle)?;
    Some(TABLE[row][function.column()])
}

/// Angle and value at `row` of the table. `row` must index [`ANGLES`].
pub(crate) fn entry(row: usize, function: TrigFunction) -> (u32, TrigValue) {
    (ANGLES[row], TABLE[row][function.column()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_known_values() {
        assert_eq!(lookup(30, TrigFunction::Sin), Some(Half));
        assert_eq!(lookup(60, TrigFunction::Cos), Some(Half));
        assert_eq!(lookup(45, TrigFunction::Tan), Some(One));
        assert_eq!(lookup(0, TrigFunction::Cosec), Some(Undefined));
        assert_eq!(lookup(90, TrigFunction::Sec), Some(Undefined));
        assert_eq!(lookup(30, TrigFunction::Sec), Some(TwoOverRoot3));
        assert_eq!(lookup(60, TrigFunction::Cot), Some(OneOverRoot3));
        assert_eq!(lookup(90, TrigFunction::Cot), Some(Zero));
        assert_eq!(lookup(15, TrigFunction::Sin), None);
    }

    #[test]
    fn reciprocal_pairs_are_consistent() {
        let reciprocal = |v: TrigValue| match v {
            Zero => Undefined,
            Undefined => Zero,
            One => One,
            Half => Two,
            Two => Half,
            Root2Over2 => Root2,
            Root2 => Root2Over2,
            Root3Over2 => TwoOverRoot3,
            TwoOverRoot3 => Root3Over2,
            Root3 => OneOverRoot3,
            OneOverRoot3 => Root3,
        };
        for angle in ANGLES {
            let get = |f| lookup(angle, f).unwrap();
            assert_eq!(get(TrigFunction::Cosec), reciprocal(get(TrigFunction::Sin)));
            assert_eq!(get(TrigFunction::Sec), reciprocal(get(TrigFunction::Cos)));
            assert_eq!(get(TrigFunction::Cot), reciprocal(get(TrigFunction::Tan)));
        }
    }

    #[test]
    fn symbols_parse_back() {
        for v in TrigValue::ALL {
            assert_eq!(v.symbol().parse::<TrigValue>().unwrap(), v);
        }
        assert!("√5".parse::<TrigValue>().is_err());
    }

    #[test]
    fn serde_uses_symbols() {
        let json = serde_json::to_string(&Root3Over2).unwrap();
        assert_eq!(json, "\"√3/2\"");
        let back: TrigValue = serde_json::from_str("\"undefined\"").unwrap();
        assert_eq!(back, Undefined);
    }
}
