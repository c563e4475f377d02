// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Selection of protective devices and grounding conductors from the step
//! tables in [`tables`][super::tables].

use super::tables::{
    DISCONNECT_FRAMES, EQUIPMENT_GROUNDS, STANDARD_OCPD_RATINGS, TRANSFORMER_BREAKERS,
};
use crate::Error;

fn ensure_positive(amps: f64, what: &str) -> Result<(), Error> {
    if !amps.is_finite() || amps <= 0.0 {
        return Err(Error::calculation(format!(
            "{what} of {amps}A is outside every sizing table."
        )));
    }
    Ok(())
}

/// Returns the smallest standard overcurrent device rating that is at least
/// `amps`.
pub(crate) fn next_standard_rating(amps: f64) -> Result<f64, Error> {
    ensure_positive(amps, "Overcurrent device rating")?;
    STANDARD_OCPD_RATINGS
        .iter()
        .copied()
        .find(|r| *r >= amps)
        .ok_or_else(|| {
            Error::calculation(format!(
                "No standard overcurrent device is rated for {amps}A."
            ))
        })
}

/// Returns the equipment grounding conductor required on a circuit protected
/// by an overcurrent device of the given rating.
pub fn equipment_ground(ocpd_amps: f64) -> Result<&'static str, Error> {
    ensure_positive(ocpd_amps, "Overcurrent device rating")?;
    EQUIPMENT_GROUNDS
        .iter()
        .find(|(max, _)| ocpd_amps <= *max)
        .map(|(_, label)| *label)
        .ok_or_else(|| {
            Error::calculation(format!(
                "No grounding conductor is listed for a {ocpd_amps}A overcurrent device."
            ))
        })
}

/// The breaker and grounding conductor protecting one side of a transformer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformerProtection {
    /// The amperage the breaker was selected for.
    pub amps: f64,
    pub breaker: f64,
    pub ground: &'static str,
}

/// Selects the breaker and grounding conductor for a transformer winding of
/// `kva` at `voltage`, with `amps = kva * 1000 / voltage`.
pub fn transformer_protection(kva: f64, voltage: f64) -> Result<TransformerProtection, Error> {
    ensure_positive(kva, "Transformer rating")?;
    ensure_positive(voltage, "Transformer voltage")?;
    let amps = kva * 1000.0 / voltage;
    let breaker = TRANSFORMER_BREAKERS
        .iter()
        .copied()
        .find(|b| amps <= *b)
        .ok_or_else(|| {
            Error::calculation(format!(
                "Transformer current of {amps:.1}A exceeds the largest transformer breaker."
            ))
        })?;
    Ok(TransformerProtection {
        amps,
        breaker,
        ground: equipment_ground(breaker)?,
    })
}

/// The switch and frame sizes of a fusible disconnect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisconnectSize {
    pub amp_switch: f64,
    pub amp_frame: f64,
}

/// Selects the smallest standard disconnect that carries `required_amps`.
pub fn disconnect_size(required_amps: f64) -> Result<DisconnectSize, Error> {
    let amp_switch = next_standard_rating(required_amps)?;
    let amp_frame = frame_for(amp_switch)?;
    Ok(DisconnectSize {
        amp_switch,
        amp_frame,
    })
}

/// Returns the smallest standard frame that holds a switch of the given size.
pub(crate) fn frame_for(amp_switch: f64) -> Result<f64, Error> {
    DISCONNECT_FRAMES
        .iter()
        .copied()
        .find(|f| *f >= amp_switch)
        .ok_or_else(|| {
            Error::calculation(format!(
                "No standard disconnect frame holds a {amp_switch}A switch."
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformer_protection() -> Result<(), Error> {
        // 75kVA at 208V draws 360.6A, which needs the 400A row.
        let protection = transformer_protection(75.0, 208.0)?;
        assert!((protection.amps - 360.576).abs() < 0.01);
        assert_eq!(protection.breaker, 400.0);
        assert_eq!(protection.ground, "#3");

        let protection = transformer_protection(30.0, 480.0)?;
        assert_eq!((protection.breaker, protection.ground), (100.0, "#8"));

        let protection = transformer_protection(80.0, 100.0)?;
        assert_eq!((protection.breaker, protection.ground), (800.0, "#1/0"));

        assert!(transformer_protection(500.0, 208.0).is_err_and(|e| e
            == Error::calculation(
                "Transformer current of 2403.8A exceeds the largest transformer breaker."
            )));
        assert!(transformer_protection(0.0, 208.0).is_err());
        Ok(())
    }

    #[test]
    fn test_equipment_ground() -> Result<(), Error> {
        assert_eq!(equipment_ground(15.0)?, "#14");
        assert_eq!(equipment_ground(100.0)?, "#8");
        assert_eq!(equipment_ground(101.0)?, "#6");
        assert_eq!(equipment_ground(800.0)?, "#1/0");
        assert!(equipment_ground(4001.0).is_err());
        assert!(equipment_ground(f64::NAN).is_err());
        Ok(())
    }

    #[test]
    fn test_disconnect_size() -> Result<(), Error> {
        assert_eq!(
            disconnect_size(42.0)?,
            DisconnectSize {
                amp_switch: 45.0,
                amp_frame: 60.0
            }
        );
        assert_eq!(
            disconnect_size(200.0)?,
            DisconnectSize {
                amp_switch: 200.0,
                amp_frame: 200.0
            }
        );
        assert!(disconnect_size(1300.0).is_err_and(|e| e
            == Error::calculation("No standard disconnect frame holds a 1600A switch.")));
        Ok(())
    }
}
