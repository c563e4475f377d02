// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Nominal voltage and phase descriptions, as written on equipment schedules,
//! e.g. `120/208 3` or `480 3`.

use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

/// The number of phases of a system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Single,
    Three,
}

impl Phase {
    /// The number of ungrounded conductors that a feeder of this phase carries.
    pub fn conductors(&self) -> u32 {
        match self {
            Phase::Single => 2,
            Phase::Three => 3,
        }
    }

    /// The multiplier applied to single conductor quantities in voltage drop
    /// and fault current calculations.
    pub(crate) fn multiplier(&self) -> f64 {
        match self {
            Phase::Single => 2.0,
            Phase::Three => 3f64.sqrt(),
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Phase::Single),
            3 => Ok(Phase::Three),
            _ => Err(Error::data_integrity(format!(
                "Phase must be 1 or 3, found {value}."
            ))),
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Single => write!(f, "1PH"),
            Phase::Three => write!(f, "3PH"),
        }
    }
}

/// The nominal voltage of a system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoltageSpec {
    line_to_neutral: Option<f64>,
    line_to_line: f64,
    phase: Phase,
}

impl VoltageSpec {
    /// Creates a voltage spec for a system with a grounded neutral.
    pub fn wye(line_to_neutral: f64, line_to_line: f64, phase: Phase) -> Self {
        Self {
            line_to_neutral: Some(line_to_neutral),
            line_to_line,
            phase,
        }
    }

    /// Creates a voltage spec for a system without a neutral.
    pub fn line(line_to_line: f64, phase: Phase) -> Self {
        Self {
            line_to_neutral: None,
            line_to_line,
            phase,
        }
    }

    pub fn line_to_neutral(&self) -> Option<f64> {
        self.line_to_neutral
    }

    /// The voltage used in all sizing calculations.
    pub fn line_to_line(&self) -> f64 {
        self.line_to_line
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_neutral(&self) -> bool {
        self.line_to_neutral.is_some()
    }
}

impl FromStr for VoltageSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::data_integrity(format!("Invalid voltage spec: {s:?}"));
        let parse_volts = |v: &str| -> Result<f64, Error> {
            let v = v.trim_end_matches(['V', 'v']);
            match v.parse::<f64>() {
                Ok(volts) if volts.is_finite() && volts > 0.0 => Ok(volts),
                _ => Err(invalid()),
            }
        };

        let mut parts = s.split_whitespace();
        let volts = parts.next().ok_or_else(invalid)?;
        let phase = match parts.next() {
            Some(p) => p.parse::<u8>().map_err(|_| invalid())?.try_into()?,
            None => Phase::Three,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        match volts.split_once('/') {
            Some((ln, ll)) => {
                let (ln, ll) = (parse_volts(ln)?, parse_volts(ll)?);
                if ln >= ll {
                    return Err(invalid());
                }
                Ok(Self::wye(ln, ll, phase))
            }
            None => Ok(Self::line(parse_volts(volts)?, phase)),
        }
    }
}

impl Display for VoltageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_to_neutral {
            Some(ln) => write!(f, "{ln}/{}V {}", self.line_to_line, self.phase),
            None => write!(f, "{}V {}", self.line_to_line, self.phase),
        }
    }
}
