// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The pre-order cascade of ratings through a reconstructed tree.

use super::fault::{aic_from_impedance, aic_from_transformer};
use super::feeder::{size_wire_and_conduit, FeederRequest};
use super::protection::{disconnect_size, frame_for, transformer_protection, DisconnectSize};
use crate::entity::describe;
use crate::grammar::{self, FaultSource};
use crate::tree::{DiagramNode, Protection, Ratings};
use crate::{DiagramConfig, DiagramErrors, Entity, Equipment, Error};

/// Resolves the ratings of every node of the tree, parents before children.
///
/// A child with a missing or invalid nameplate value is removed from the tree
/// along with its subtree.  Calculation errors leave the failing node
/// unresolved, but its siblings are still resolved so that all the problems
/// are reported together.
pub(crate) fn propagate(root: &mut DiagramNode, config: &DiagramConfig, errors: &mut DiagramErrors) {
    match resolve_root(&root.equipment) {
        Ok(ratings) => {
            tracing::debug!(
                "Resolved {}: {:.0}A AIC at {}.",
                describe(&root.equipment),
                ratings.aic,
                ratings.voltage
            );
            root.ratings = Some(ratings);
            resolve_children(root, config, errors);
        }
        Err(err) => {
            let err = err.with_context(name(&root.equipment));
            tracing::error!("{err}");
            errors.push(err);
        }
    }
}

fn name(entity: &Equipment) -> String {
    format!("{} ({})", describe(entity), entity.name())
}

fn resolve_children(node: &mut DiagramNode, config: &DiagramConfig, errors: &mut DiagramErrors) {
    let Some(ratings) = &node.ratings else {
        return;
    };
    let parent = &node.equipment;

    node.children.retain_mut(|child| {
        match resolve_child(parent, ratings, &child.equipment, config) {
            Ok(resolved) => {
                tracing::debug!(
                    "Resolved {}: {:.0}A AIC, feeder {:?} x{}.",
                    describe(&child.equipment),
                    resolved.aic,
                    resolved.feeder_wire_size(),
                    resolved.feeder_wire_count()
                );
                child.ratings = Some(resolved);
                resolve_children(child, config, errors);
                true
            }
            Err(err) => {
                let err = err.with_context(name(&child.equipment));
                let keep = err.is_fatal();
                if keep {
                    tracing::error!("{err}");
                } else {
                    tracing::warn!("{err} Its subtree is skipped.");
                }
                errors.push(err);
                keep
            }
        }
    });
}

/// Checks a value that comes from the catalog.
fn nameplate(value: f64, what: &str) -> Result<f64, Error> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::data_integrity(format!(
            "{what} of {value} is missing or invalid."
        )));
    }
    Ok(value)
}

fn resolve_root(root: &Equipment) -> Result<Ratings, Error> {
    let Equipment::Service(service) = root else {
        return Err(Error::internal("Ratings can only be seeded at a service."));
    };
    // Without these, nothing below the service can be rated.
    let (Ok(main_rating), Ok(aic)) = (
        nameplate(service.amp_rating, "Service rating"),
        nameplate(service.aic_rating, "Available fault current"),
    ) else {
        return Err(Error::calculation(format!(
            "Service rating of {}A with {}A available fault current can't seed a diagram.",
            service.amp_rating, service.aic_rating
        )));
    };
    Ok(Ratings {
        aic,
        main_rating,
        voltage: service.voltage,
        parent_distance_ft: 0.0,
        feeder: None,
        protection: None,
    })
}

fn resolve_child(
    parent: &Equipment,
    parent_ratings: &Ratings,
    child: &Equipment,
    config: &DiagramConfig,
) -> Result<Ratings, Error> {
    let line_voltage = child.line_voltage(parent_ratings.voltage);
    let (main_rating, protection) = main_rating(child, parent_ratings.main_rating)?;

    let extra = child.parent_distance_ft();
    if !extra.is_finite() || extra < 0.0 {
        return Err(Error::data_integrity(format!(
            "Feeder length of {extra}ft is invalid."
        )));
    }
    let distance_ft = extra + config.mandatory_extra_distance_ft;

    let feeder = size_wire_and_conduit(&FeederRequest {
        load_amps: main_rating,
        mocp: main_rating,
        distance_ft,
        voltage: line_voltage,
        max_voltage_drop_percent: config.max_voltage_drop_percent,
        max_parallel_sets: config.max_parallel_sets,
    })?;

    let aic = match grammar::profile(parent.kind()).fault_source {
        FaultSource::Upstream => aic_from_impedance(
            parent_ratings.aic,
            distance_ft,
            feeder.conductor_count(),
            line_voltage,
            feeder.conductor_size(),
        )?,
        FaultSource::Transformer => {
            let Equipment::Transformer(transformer) = parent else {
                return Err(Error::internal(format!(
                    "{} is not a transformer.",
                    describe(parent)
                )));
            };
            aic_from_transformer(
                transformer.kva,
                feeder.conductor_count(),
                config.transformer_impedance,
                distance_ft,
                line_voltage,
                feeder.conductor_size(),
            )?
        }
    };

    Ok(Ratings {
        aic,
        main_rating,
        voltage: child.output_voltage(line_voltage),
        parent_distance_ft: distance_ft,
        feeder: Some(feeder),
        protection,
    })
}

/// Returns the rating the feeder to `child` is sized for, and the protective
/// devices selected along with it.
fn main_rating(
    child: &Equipment,
    parent_rating: f64,
) -> Result<(f64, Option<Protection>), Error> {
    match child {
        Equipment::Service(_) => Err(Error::internal("A service can't be fed by another entity.")),
        Equipment::Meter(_) => Ok((parent_rating, None)),
        Equipment::MainBreaker(b)
        | Equipment::DistributionBreaker(b)
        | Equipment::PanelBreaker(b) => Ok((nameplate(b.amp_rating, "Breaker rating")?, None)),
        Equipment::DistributionBus(b) => Ok((nameplate(b.amp_rating, "Bus rating")?, None)),
        Equipment::Panel(p) => {
            let rating = if p.is_mlo {
                nameplate(p.bus_size, "Bus size")?
            } else {
                nameplate(p.main_amp_rating, "Main breaker rating")?
            };
            Ok((rating, None))
        }
        Equipment::Disconnect(d) => {
            let size = match d.as_size {
                Some(amp_switch) => {
                    let amp_switch = nameplate(amp_switch, "Switch size")?;
                    let amp_frame = match d.af_size {
                        Some(af) => nameplate(af, "Frame size")?,
                        None => frame_for(amp_switch)?,
                    };
                    if amp_frame < amp_switch {
                        return Err(Error::data_integrity(format!(
                            "Frame size of {amp_frame}A is smaller than the switch size of \
                             {amp_switch}A."
                        )));
                    }
                    DisconnectSize {
                        amp_switch,
                        amp_frame,
                    }
                }
                None => disconnect_size(parent_rating)?,
            };
            Ok((size.amp_switch, Some(Protection::Disconnect(size))))
        }
        Equipment::Transformer(t) => {
            let kva = nameplate(t.kva, "Transformer rating")?;
            let primary = transformer_protection(kva, t.primary.line_to_line())?;
            let secondary = transformer_protection(kva, t.secondary.line_to_line())?;
            Ok((
                primary.breaker,
                Some(Protection::Transformer { primary, secondary }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Breaker, Disconnect, EntityInfo, Panel, Service, Transformer};
    use crate::voltage::{Phase, VoltageSpec};
    use crate::ErrorKind;
    use proptest::prelude::*;

    fn service(amps: f64, aic: f64, spec: &str) -> Equipment {
        Equipment::Service(Service {
            info: EntityInfo::new(0, "SVC"),
            amp_rating: amps,
            voltage: spec.parse().unwrap(),
            is_multi_meter: false,
            aic_rating: aic,
        })
    }

    fn panel(id: u64, amps: f64, distance: f64) -> Equipment {
        Equipment::Panel(Panel {
            info: EntityInfo::new(id, format!("LP-{id}")).with_parent_distance(distance),
            main_amp_rating: amps,
            is_mlo: false,
            voltage: None,
            bus_size: amps,
        })
    }

    fn leaf(equipment: Equipment) -> DiagramNode {
        DiagramNode::new(equipment, vec![])
    }

    fn ratings(node: &DiagramNode) -> &Ratings {
        node.ratings().unwrap()
    }

    #[test]
    fn test_service_feeding_a_panel() {
        let mut root = DiagramNode::new(
            service(400.0, 22_000.0, "120/208 3"),
            vec![leaf(panel(1, 400.0, 15.0))],
        );
        let mut errors = DiagramErrors::default();
        propagate(&mut root, &DiagramConfig::default(), &mut errors);
        assert!(errors.is_empty(), "{errors}");

        assert_eq!(ratings(&root).aic_rating(), 22_000.0);
        assert_eq!(ratings(&root).feeder_wire_count(), 0);

        let panel = ratings(&root.children()[0]);
        assert_eq!(panel.parent_distance_ft(), 25.0);
        assert_eq!(panel.feeder_wire_size(), Some("#3/0"));
        assert_eq!(panel.feeder_wire_count(), 2);
        assert!(panel.aic_rating() < 22_000.0);
        assert!((panel.aic_rating() - 18_671.0).abs() < 1.0);
        assert_eq!(panel.voltage(), VoltageSpec::wye(120.0, 208.0, Phase::Three));
    }

    #[test]
    fn test_transformer_is_a_new_source() {
        let transformer = Equipment::Transformer(Transformer {
            info: EntityInfo::new(1, "T-1").with_parent_distance(20.0),
            kva: 75.0,
            primary: VoltageSpec::line(480.0, Phase::Three),
            secondary: VoltageSpec::wye(120.0, 208.0, Phase::Three),
        });
        let mut root = DiagramNode::new(
            service(800.0, 35_000.0, "277/480 3"),
            vec![DiagramNode::new(
                transformer,
                vec![leaf(panel(2, 225.0, 5.0))],
            )],
        );
        let mut errors = DiagramErrors::default();
        propagate(&mut root, &DiagramConfig::default(), &mut errors);
        assert!(errors.is_empty(), "{errors}");

        let xfmr = &root.children()[0];
        // 75kVA at 480V draws 156.25A, which needs the 175A row.
        assert_eq!(ratings(xfmr).main_rating(), 175.0);
        let Some(Protection::Transformer { primary, secondary }) = ratings(xfmr).protection()
        else {
            panic!("no transformer protection");
        };
        assert_eq!((primary.breaker, primary.ground), (175.0, "#6"));
        assert_eq!((secondary.breaker, secondary.ground), (400.0, "#3"));
        assert_eq!(
            ratings(xfmr).voltage(),
            VoltageSpec::wye(120.0, 208.0, Phase::Three)
        );

        // FLA / Z of a 75kVA transformer at 208V is about 6940A, far below
        // what the utility delivers.
        let panel = ratings(&xfmr.children()[0]);
        assert_eq!(panel.feeder_wire_size(), Some("#4/0"));
        assert!(panel.aic_rating() < 6_940.0, "{}", panel.aic_rating());
        assert!(panel.aic_rating() > 5_000.0, "{}", panel.aic_rating());
        assert_eq!(panel.voltage(), VoltageSpec::wye(120.0, 208.0, Phase::Three));
    }

    #[test]
    fn test_missing_nameplate_skips_subtree() {
        let bad = Equipment::PanelBreaker(Breaker {
            info: EntityInfo::new(2, "PB-2"),
            amp_rating: 0.0,
            num_poles: 1,
        });
        let good = Equipment::PanelBreaker(Breaker {
            info: EntityInfo::new(3, "PB-3"),
            amp_rating: 20.0,
            num_poles: 1,
        });
        let mut root = DiagramNode::new(
            service(200.0, 10_000.0, "120/240 1"),
            vec![DiagramNode::new(
                panel(1, 200.0, 0.0),
                vec![DiagramNode::new(bad, vec![leaf(panel(4, 100.0, 0.0))]), leaf(good)],
            )],
        );
        let mut errors = DiagramErrors::default();
        propagate(&mut root, &DiagramConfig::default(), &mut errors);

        assert!(!errors.has_fatal());
        assert_eq!(
            errors.errors(),
            [Error::data_integrity(
                "PanelBreaker:2 (PB-2): Breaker rating of 0 is missing or invalid."
            )]
        );
        let children = root.children()[0].children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].equipment().id(), 3);
        assert_eq!(ratings(&children[0]).feeder_wire_size(), Some("#12"));
    }

    #[test]
    fn test_frame_smaller_than_switch() {
        let disconnect = |id, af_size| {
            Equipment::Disconnect(Disconnect {
                info: EntityInfo::new(id, format!("DS-{id}")),
                as_size: Some(60.0),
                af_size,
                num_poles: 3,
            })
        };
        let mut root = DiagramNode::new(
            service(200.0, 10_000.0, "120/208 3"),
            vec![DiagramNode::new(
                panel(1, 200.0, 0.0),
                vec![
                    leaf(disconnect(2, Some(30.0))),
                    leaf(disconnect(3, Some(100.0))),
                ],
            )],
        );
        let mut errors = DiagramErrors::default();
        propagate(&mut root, &DiagramConfig::default(), &mut errors);

        assert_eq!(
            errors.errors(),
            [Error::data_integrity(
                "Disconnect:2 (DS-2): Frame size of 30A is smaller than the switch size of 60A."
            )]
        );
        let children = root.children()[0].children();
        assert_eq!(children.len(), 1);
        let Some(Protection::Disconnect(size)) = ratings(&children[0]).protection() else {
            panic!("no disconnect size");
        };
        assert_eq!((size.amp_switch, size.amp_frame), (60.0, 100.0));
    }

    #[test]
    fn test_calculation_errors_accumulate() {
        let disconnect = |id| {
            Equipment::Disconnect(Disconnect {
                info: EntityInfo::new(id, format!("DS-{id}")),
                as_size: None,
                af_size: None,
                num_poles: 3,
            })
        };
        let mut root = DiagramNode::new(
            service(1300.0, 50_000.0, "277/480 3"),
            vec![leaf(disconnect(1)), leaf(disconnect(2))],
        );
        let mut errors = DiagramErrors::default();
        propagate(&mut root, &DiagramConfig::default(), &mut errors);

        assert!(errors.has_fatal());
        assert_eq!(
            errors.errors(),
            [1, 2].map(|id| Error::calculation(format!(
                "Disconnect:{id} (DS-{id}): No standard disconnect frame holds a 1600A switch."
            )))
        );
        assert!(root.children().iter().all(|c| c.ratings().is_none()));
    }

    #[test]
    fn test_unusable_service() {
        let mut root = leaf(service(0.0, 22_000.0, "120/208 3"));
        let mut errors = DiagramErrors::default();
        propagate(&mut root, &DiagramConfig::default(), &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind(), ErrorKind::Calculation);
        assert!(root.ratings().is_none());
    }

    proptest! {
        #[test]
        fn fault_current_decreases_downstream(
            aic in 5_000.0f64..100_000.0,
            chain in prop::collection::vec((15.0f64..400.0, 0.0f64..300.0), 1..6),
        ) {
            let mut node: Option<DiagramNode> = None;
            for (i, (amps, distance)) in chain.iter().enumerate().rev() {
                let children = node.take().into_iter().collect();
                node = Some(DiagramNode::new(panel(i as u64 + 1, *amps, *distance), children));
            }
            let mut root = DiagramNode::new(service(800.0, aic, "277/480 3"), node.into_iter().collect());
            let mut errors = DiagramErrors::default();
            propagate(&mut root, &DiagramConfig::default(), &mut errors);
            prop_assert!(errors.is_empty(), "{}", errors);

            let mut current = &root;
            while let Some(child) = current.children().first() {
                let (parent_aic, child_aic) = (ratings(current).aic_rating(), ratings(child).aic_rating());
                prop_assert!(child_aic < parent_aic, "{} >= {}", child_aic, parent_aic);
                current = child;
            }
        }
    }
}
