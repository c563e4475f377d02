// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Feeder conductor and conduit sizing.

use super::protection::{equipment_ground, next_standard_rating};
use super::tables::{conductor_by_label, Conductor, CONDUCTORS, COPPER_K, EMT_FILL_AREAS};
use crate::voltage::VoltageSpec;
use crate::Error;

/// The inputs for sizing one feeder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeederRequest {
    pub load_amps: f64,
    /// The rating of the overcurrent device protecting the feeder.
    pub mocp: f64,
    /// The one-way length of the feeder, in feet.
    pub distance_ft: f64,
    pub voltage: VoltageSpec,
    pub max_voltage_drop_percent: f64,
    pub max_parallel_sets: u32,
}

/// The conductors and conduit selected for a feeder.
#[derive(Clone, Debug, PartialEq)]
pub struct FeederSizing {
    conductor_size: &'static str,
    conductor_count: u32,
    wires_per_set: u32,
    ground_size: &'static str,
    conduit_size: &'static str,
    voltage_drop_percent: f64,
}

impl FeederSizing {
    /// The size of each ungrounded conductor, e.g. `#3/0`.
    pub fn conductor_size(&self) -> &'static str {
        self.conductor_size
    }

    /// The number of parallel conductor sets.
    pub fn conductor_count(&self) -> u32 {
        self.conductor_count
    }

    pub fn ground_size(&self) -> &'static str {
        self.ground_size
    }

    /// The EMT trade size used for each set.
    pub fn conduit_size(&self) -> &'static str {
        self.conduit_size
    }

    pub fn voltage_drop_percent(&self) -> f64 {
        self.voltage_drop_percent
    }

    /// The lines describing the feeder on the drawing.
    pub fn annotations(&self) -> Vec<String> {
        let sets = match self.conductor_count {
            1 => String::new(),
            n => format!("{n} SETS "),
        };
        vec![
            format!(
                "{sets}{} CU + {} CU GND IN {} EMT",
                quantity(self.wires_per_set, self.conductor_size),
                quantity(1, self.ground_size),
                self.conduit_size
            ),
            format!("VD {:.2}%", self.voltage_drop_percent),
        ]
    }
}

fn quantity(count: u32, label: &str) -> String {
    if label.starts_with('#') {
        format!("{count}{label}")
    } else {
        format!("{count}-{label}")
    }
}

/// Sizes the conductors and conduit of a feeder.
///
/// The smallest conductor that satisfies both the ampacity and the voltage
/// drop limit is selected, trying a single set first and then an increasing
/// number of parallel sets.
///
/// The function is pure: the same request always returns the same sizing.
pub fn size_wire_and_conduit(request: &FeederRequest) -> Result<FeederSizing, Error> {
    let FeederRequest {
        load_amps,
        mocp,
        distance_ft,
        voltage,
        max_voltage_drop_percent,
        max_parallel_sets,
    } = *request;

    for (value, what) in [(load_amps, "Load"), (mocp, "Overcurrent device rating")] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::calculation(format!(
                "{what} of {value}A is outside the conductor table."
            )));
        }
    }
    if !distance_ft.is_finite() || distance_ft < 0.0 {
        return Err(Error::calculation(format!(
            "Feeder length of {distance_ft}ft is invalid."
        )));
    }

    for sets in 1..=max_parallel_sets.max(1) {
        let candidate = CONDUCTORS
            .iter()
            .filter(|c| sets == 1 || c.can_be_paralleled())
            .filter(|c| c.ampacity * f64::from(sets) >= load_amps)
            .filter(|c| is_protected(c, sets, mocp))
            .map(|c| (c, voltage_drop_percent(c, sets, load_amps, distance_ft, voltage)))
            .find(|(_, vd)| *vd <= max_voltage_drop_percent);

        if let Some((conductor, vd)) = candidate {
            return complete_sizing(conductor, sets, mocp, voltage, vd);
        }
    }

    Err(Error::calculation(format!(
        "No feeder of up to {max_parallel_sets} sets carries {load_amps}A over {distance_ft}ft \
         within {max_voltage_drop_percent}% voltage drop."
    )))
}

/// Checks that the overcurrent device protects the conductors, allowing the
/// next standard size up for devices up to 800A (NEC 240.4(B)).
fn is_protected(conductor: &Conductor, sets: u32, mocp: f64) -> bool {
    if conductor.max_ocpd.is_some_and(|max| mocp > max) {
        return false;
    }
    let ampacity = conductor.ampacity * f64::from(sets);
    if ampacity >= mocp {
        return true;
    }
    mocp <= 800.0 && next_standard_rating(ampacity).is_ok_and(|next| next >= mocp)
}

/// Returns the voltage drop over the feeder, in percent of the line-to-line
/// voltage.
pub(crate) fn voltage_drop_percent(
    conductor: &Conductor,
    sets: u32,
    amps: f64,
    distance_ft: f64,
    voltage: VoltageSpec,
) -> f64 {
    let drop = voltage.phase().multiplier() * COPPER_K * amps * distance_ft
        / (conductor.circular_mils * f64::from(sets));
    drop / voltage.line_to_line() * 100.0
}

fn complete_sizing(
    conductor: &'static Conductor,
    sets: u32,
    mocp: f64,
    voltage: VoltageSpec,
    voltage_drop_percent: f64,
) -> Result<FeederSizing, Error> {
    // The grounding conductor never needs to be larger than the phase
    // conductors.
    let ground = conductor_by_label(equipment_ground(mocp)?)
        .filter(|g| g.circular_mils < conductor.circular_mils)
        .unwrap_or(conductor);

    let wires_per_set = voltage.phase().conductors() + u32::from(voltage.has_neutral());
    let area = f64::from(wires_per_set) * conductor.area_sq_in + ground.area_sq_in;
    let conduit_size = EMT_FILL_AREAS
        .iter()
        .find(|(_, fill)| *fill >= area)
        .map(|(size, _)| *size)
        .ok_or_else(|| {
            Error::calculation(format!(
                "No standard conduit holds {wires_per_set}{} and a {} ground.",
                conductor.label, ground.label
            ))
        })?;

    Ok(FeederSizing {
        conductor_size: conductor.label,
        conductor_count: sets,
        wires_per_set,
        ground_size: ground.label,
        conduit_size,
        voltage_drop_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voltage::Phase;
    use proptest::prelude::*;

    fn request(load_amps: f64, distance_ft: f64, voltage: VoltageSpec) -> FeederRequest {
        FeederRequest {
            load_amps,
            mocp: load_amps,
            distance_ft,
            voltage,
            max_voltage_drop_percent: 3.0,
            max_parallel_sets: 8,
        }
    }

    #[test]
    fn test_400a_208v_feeder() -> Result<(), Error> {
        let voltage = VoltageSpec::wye(120.0, 208.0, Phase::Three);
        let sizing = size_wire_and_conduit(&request(400.0, 25.0, voltage))?;

        // 500 kcmil carries only 380A, so two sets of 3/0 are used.
        assert_eq!(sizing.conductor_size(), "#3/0");
        assert_eq!(sizing.conductor_count(), 2);
        assert_eq!(sizing.ground_size(), "#3");
        assert_eq!(sizing.conduit_size(), "2\"");
        assert!(sizing.voltage_drop_percent() < 0.5);
        assert_eq!(
            sizing.annotations(),
            vec![
                "2 SETS 4#3/0 CU + 1#3 CU GND IN 2\" EMT".to_string(),
                "VD 0.32%".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_small_conductor_limits() -> Result<(), Error> {
        let voltage = VoltageSpec::wye(120.0, 240.0, Phase::Single);

        // #12 carries 25A but may only be protected at 20A.
        let sizing = size_wire_and_conduit(&request(25.0, 20.0, voltage))?;
        assert_eq!(sizing.conductor_size(), "#10");
        assert_eq!(sizing.ground_size(), "#10");

        let sizing = size_wire_and_conduit(&request(20.0, 20.0, voltage))?;
        assert_eq!(sizing.conductor_size(), "#12");
        assert_eq!(sizing.ground_size(), "#12");
        assert_eq!(sizing.conduit_size(), "1/2\"");
        assert_eq!(sizing.annotations()[0], "3#12 CU + 1#12 CU GND IN 1/2\" EMT");
        Ok(())
    }

    #[test]
    fn test_voltage_drop_upsizes() -> Result<(), Error> {
        let voltage = VoltageSpec::line(480.0, Phase::Three);
        let short = size_wire_and_conduit(&request(100.0, 10.0, voltage))?;
        let long = size_wire_and_conduit(&request(100.0, 1000.0, voltage))?;

        assert_eq!(short.conductor_size(), "#3");
        assert_eq!(long.conductor_count(), 1);
        // #2/0 would drop 3.5% over 1000ft.
        assert_eq!(long.conductor_size(), "#3/0");
        assert!(long.voltage_drop_percent() <= 3.0);
        assert_eq!(long.annotations()[0], "3#3/0 CU + 1#8 CU GND IN 2\" EMT");
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        let voltage = VoltageSpec::wye(277.0, 480.0, Phase::Three);
        assert!(size_wire_and_conduit(&request(0.0, 10.0, voltage)).is_err_and(|e| e
            == Error::calculation("Load of 0A is outside the conductor table.")));

        let mut too_big = request(4000.0, 10.0, voltage);
        too_big.max_parallel_sets = 2;
        assert!(size_wire_and_conduit(&too_big).is_err_and(|e| e
            == Error::calculation(
                "No feeder of up to 2 sets carries 4000A over 10ft within 3% voltage drop."
            )));
    }

    proptest! {
        #[test]
        fn sizing_is_pure(
            load in 1.0f64..3000.0,
            distance in 0.0f64..500.0,
            three_phase in any::<bool>(),
        ) {
            let voltage = if three_phase {
                VoltageSpec::wye(277.0, 480.0, Phase::Three)
            } else {
                VoltageSpec::wye(120.0, 240.0, Phase::Single)
            };
            let req = request(load, distance, voltage);
            let first = size_wire_and_conduit(&req);
            let second = size_wire_and_conduit(&req);
            prop_assert_eq!(&first, &second);
            if let Ok(sizing) = first {
                prop_assert!(sizing.voltage_drop_percent() <= 3.0);
                let conductor = conductor_by_label(sizing.conductor_size()).unwrap();
                prop_assert!(conductor.ampacity * f64::from(sizing.conductor_count()) >= load);
            }
        }
    }
}
