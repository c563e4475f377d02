// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Engineering data used for sizing feeders and protective devices.
//!
//! All values are for copper THHN/THWN-2 conductors, terminations rated
//! 75 °C, and EMT raceways.  Rows are sorted by increasing size.

/// A standard conductor size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Conductor {
    pub label: &'static str,
    pub circular_mils: f64,
    /// Ampacity at 75 °C (NEC 310.16).
    pub ampacity: f64,
    /// The largest overcurrent device allowed for small conductors
    /// (NEC 240.4(D)).
    pub max_ocpd: Option<f64>,
    /// Cross-sectional area including insulation, in square inches
    /// (NEC Chapter 9, Table 5).
    pub area_sq_in: f64,
    /// The point-to-point "C" value for three single conductors in steel
    /// conduit, 600 V.
    pub c_value: f64,
}

impl Conductor {
    /// Conductors smaller than 1/0 AWG can't be installed in parallel
    /// (NEC 310.10(G)).
    pub fn can_be_paralleled(&self) -> bool {
        self.circular_mils >= 105_600.0
    }
}

const fn conductor(
    label: &'static str,
    circular_mils: f64,
    ampacity: f64,
    max_ocpd: Option<f64>,
    area_sq_in: f64,
    c_value: f64,
) -> Conductor {
    Conductor {
        label,
        circular_mils,
        ampacity,
        max_ocpd,
        area_sq_in,
        c_value,
    }
}

pub(crate) const CONDUCTORS: [Conductor; 18] = [
    conductor("#14", 4_110.0, 20.0, Some(15.0), 0.0097, 389.0),
    conductor("#12", 6_530.0, 25.0, Some(20.0), 0.0133, 617.0),
    conductor("#10", 10_380.0, 35.0, Some(30.0), 0.0211, 981.0),
    conductor("#8", 16_510.0, 50.0, None, 0.0366, 1_557.0),
    conductor("#6", 26_240.0, 65.0, None, 0.0507, 2_425.0),
    conductor("#4", 41_740.0, 85.0, None, 0.0824, 3_806.0),
    conductor("#3", 52_620.0, 100.0, None, 0.0973, 4_774.0),
    conductor("#2", 66_360.0, 115.0, None, 0.1158, 5_907.0),
    conductor("#1", 83_690.0, 130.0, None, 0.1562, 7_293.0),
    conductor("#1/0", 105_600.0, 150.0, None, 0.1855, 8_925.0),
    conductor("#2/0", 133_100.0, 175.0, None, 0.2223, 10_755.0),
    conductor("#3/0", 167_800.0, 200.0, None, 0.2679, 12_844.0),
    conductor("#4/0", 211_600.0, 230.0, None, 0.3237, 15_082.0),
    conductor("250 KCMIL", 250_000.0, 255.0, None, 0.3970, 16_483.0),
    conductor("300 KCMIL", 300_000.0, 285.0, None, 0.4608, 18_177.0),
    conductor("350 KCMIL", 350_000.0, 310.0, None, 0.5242, 19_704.0),
    conductor("400 KCMIL", 400_000.0, 335.0, None, 0.5863, 20_566.0),
    conductor("500 KCMIL", 500_000.0, 380.0, None, 0.7073, 22_185.0),
];

/// Resistivity constant of copper, in ohm-circular-mils per foot.
pub(crate) const COPPER_K: f64 = 12.9;

/// Standard ampere ratings of fuses and inverse time breakers
/// (NEC 240.6(A)).
pub(crate) const STANDARD_OCPD_RATINGS: [f64; 37] = [
    15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 125.0,
    150.0, 175.0, 200.0, 225.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 600.0, 700.0, 800.0,
    1000.0, 1200.0, 1600.0, 2000.0, 2500.0, 3000.0, 4000.0, 5000.0, 6000.0,
];

/// Breakers protecting transformers, smallest first.  Each one is selected
/// for any amperage up to and including its rating.
pub(crate) const TRANSFORMER_BREAKERS: [f64; 15] = [
    100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 600.0,
    700.0, 800.0,
];

/// Minimum equipment grounding conductor by rating of the upstream
/// overcurrent device (NEC 250.122).
pub(crate) const EQUIPMENT_GROUNDS: [(f64, &str); 17] = [
    (15.0, "#14"),
    (20.0, "#12"),
    (60.0, "#10"),
    (100.0, "#8"),
    (200.0, "#6"),
    (300.0, "#4"),
    (400.0, "#3"),
    (500.0, "#2"),
    (600.0, "#1"),
    (800.0, "#1/0"),
    (1000.0, "#2/0"),
    (1200.0, "#3/0"),
    (1600.0, "#4/0"),
    (2000.0, "250 KCMIL"),
    (2500.0, "350 KCMIL"),
    (3000.0, "400 KCMIL"),
    (4000.0, "500 KCMIL"),
];

/// Standard frame sizes of fusible disconnect switches.
pub(crate) const DISCONNECT_FRAMES: [f64; 8] =
    [30.0, 60.0, 100.0, 200.0, 400.0, 600.0, 800.0, 1200.0];

/// EMT trade sizes and the area available to conductors at 40 % fill, in
/// square inches (NEC Chapter 9, Table 4).
pub(crate) const EMT_FILL_AREAS: [(&str, f64); 10] = [
    ("1/2\"", 0.122),
    ("3/4\"", 0.213),
    ("1\"", 0.346),
    ("1-1/4\"", 0.598),
    ("1-1/2\"", 0.814),
    ("2\"", 1.342),
    ("2-1/2\"", 2.343),
    ("3\"", 3.538),
    ("3-1/2\"", 4.618),
    ("4\"", 5.901),
];

/// Returns the conductor with the given label.
pub(crate) fn conductor_by_label(label: &str) -> Option<&'static Conductor> {
    CONDUCTORS.iter().find(|c| c.label == label)
}
