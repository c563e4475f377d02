// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Available fault current calculations, using the point-to-point method.

use super::tables::{conductor_by_label, Conductor};
use crate::voltage::VoltageSpec;
use crate::Error;

fn conductor(size: &str) -> Result<&'static Conductor, Error> {
    conductor_by_label(size)
        .ok_or_else(|| Error::calculation(format!("Unknown conductor size: {size}.")))
}

/// Reduces `source_amps` by the impedance of a feeder.
///
/// `f = k * L * I / (C * n * E)` and `I' = I / (1 + f)`, where `k` is `√3`
/// for three-phase and `2` for single-phase systems.
fn through_feeder(
    source_amps: f64,
    distance_ft: f64,
    sets: u32,
    voltage: VoltageSpec,
    conductor: &Conductor,
) -> Result<f64, Error> {
    if sets == 0 {
        return Err(Error::calculation("A feeder needs at least one conductor set."));
    }
    let f = voltage.phase().multiplier() * distance_ft * source_amps
        / (conductor.c_value * f64::from(sets) * voltage.line_to_line());
    Ok(source_amps / (1.0 + f))
}

/// Returns the fault current available at the end of a feeder, given the
/// fault current available at its start.
pub fn aic_from_impedance(
    parent_aic: f64,
    distance_ft: f64,
    conductor_count: u32,
    voltage: VoltageSpec,
    conductor_size: &str,
) -> Result<f64, Error> {
    if !parent_aic.is_finite() || parent_aic < 0.0 {
        return Err(Error::calculation(format!(
            "Available fault current of {parent_aic}A is invalid."
        )));
    }
    through_feeder(
        parent_aic,
        distance_ft,
        conductor_count,
        voltage,
        conductor(conductor_size)?,
    )
}

/// Returns the full load current of a transformer's secondary.
pub fn transformer_full_load_amps(kva: f64, secondary: VoltageSpec) -> f64 {
    let volts = match secondary.phase() {
        crate::Phase::Single => secondary.line_to_line(),
        crate::Phase::Three => secondary.line_to_line() * 3f64.sqrt(),
    };
    kva * 1000.0 / volts
}

/// Returns the fault current available at the end of a feeder that starts at
/// a transformer's secondary.
///
/// The transformer is treated as a new source behind an infinite bus, so
/// that it delivers `FLA / Z` into a fault at its terminals.
pub fn aic_from_transformer(
    kva: f64,
    conductor_count: u32,
    impedance: f64,
    distance_ft: f64,
    voltage: VoltageSpec,
    conductor_size: &str,
) -> Result<f64, Error> {
    if !impedance.is_finite() || impedance <= 0.0 {
        return Err(Error::calculation(format!(
            "Transformer impedance of {impedance} p.u. is invalid."
        )));
    }
    if !kva.is_finite() || kva <= 0.0 {
        return Err(Error::calculation(format!(
            "Transformer rating of {kva}kVA is invalid."
        )));
    }
    let source = transformer_full_load_amps(kva, voltage) / impedance;
    through_feeder(
        source,
        distance_ft,
        conductor_count,
        voltage,
        conductor(conductor_size)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratings::tables::CONDUCTORS;
    use crate::voltage::Phase;
    use proptest::prelude::*;

    #[test]
    fn test_aic_from_impedance() -> Result<(), Error> {
        let voltage = VoltageSpec::wye(120.0, 208.0, Phase::Three);
        let aic = aic_from_impedance(22_000.0, 25.0, 2, voltage, "#3/0")?;
        assert!((aic - 18_671.0).abs() < 1.0, "{aic}");

        assert_eq!(aic_from_impedance(22_000.0, 0.0, 1, voltage, "#3/0")?, 22_000.0);
        assert!(aic_from_impedance(22_000.0, 25.0, 1, voltage, "#7")
            .is_err_and(|e| e == Error::calculation("Unknown conductor size: #7.")));
        assert!(aic_from_impedance(22_000.0, 25.0, 0, voltage, "#3/0").is_err());
        Ok(())
    }

    #[test]
    fn test_aic_from_transformer() -> Result<(), Error> {
        let secondary = VoltageSpec::wye(120.0, 208.0, Phase::Three);
        let fla = transformer_full_load_amps(75.0, secondary);
        assert!((fla - 208.2).abs() < 0.1, "{fla}");

        // At the terminals, the transformer delivers FLA / Z.
        let aic = aic_from_transformer(75.0, 1, 0.03, 0.0, secondary, "#4/0")?;
        assert!((aic - fla / 0.03).abs() < 1e-6);

        let aic = aic_from_transformer(75.0, 1, 0.03, 10.0, secondary, "#4/0")?;
        assert!(aic < fla / 0.03);
        assert!(aic > 6_000.0, "{aic}");

        assert!(aic_from_transformer(75.0, 1, 0.0, 10.0, secondary, "#4/0").is_err());
        Ok(())
    }

    proptest! {
        #[test]
        fn fault_current_never_increases(
            parent in 100.0f64..200_000.0,
            distance in 0.0f64..2_000.0,
            sets in 1u32..8,
            size in 0usize..CONDUCTORS.len(),
            three_phase in any::<bool>(),
        ) {
            let voltage = if three_phase {
                VoltageSpec::wye(277.0, 480.0, Phase::Three)
            } else {
                VoltageSpec::wye(120.0, 240.0, Phase::Single)
            };
            let label = CONDUCTORS[size].label;
            let aic = aic_from_impedance(parent, distance, sets, voltage, label).unwrap();
            prop_assert!(aic <= parent);
            prop_assert!(aic > 0.0);
            if distance >= 1.0 {
                prop_assert!(aic < parent);
            }
        }
    }
}
