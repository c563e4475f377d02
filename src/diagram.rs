// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! One-line diagrams, ready for rendering.

use crate::entity::describe;
use crate::layout::{lay_out, Point, Side};
use crate::ratings::propagate;
use crate::tree::{DiagramNode, Protection, Ratings};
use crate::{DiagramErrors, DistributionGraph, Entity, Equipment, Error};

/// The fully computed tree below one service.
#[derive(Clone, Debug)]
pub struct OneLineDiagram {
    service_id: u64,
    root: DiagramNode,
    warnings: Vec<Error>,
}

/// One node of a [`OneLineDiagram`], as handed to a renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramEntry<'a> {
    pub equipment: &'a Equipment,
    /// The number of edges between the node and the service.
    pub depth: usize,
    pub position: Point,
    pub end_position: Point,
    pub side: Option<Side>,
    pub ratings: &'a Ratings,
    pub annotations: Vec<String>,
}

impl OneLineDiagram {
    pub fn service_id(&self) -> u64 {
        self.service_id
    }

    pub fn root(&self) -> &DiagramNode {
        &self.root
    }

    /// The data-integrity problems that parts of the diagram were skipped
    /// for.
    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }

    /// Returns the nodes of the diagram in pre-order.
    pub fn entries(&self) -> Vec<DiagramEntry<'_>> {
        let mut entries = vec![];
        self.root.walk(&mut |node, depth| {
            let (Some(placement), Some(ratings)) = (node.placement, node.ratings()) else {
                return;
            };
            entries.push(DiagramEntry {
                equipment: node.equipment(),
                depth,
                position: placement.position,
                end_position: placement.end_position,
                side: placement.side,
                ratings,
                annotations: annotations(node.equipment(), ratings),
            });
        });
        entries
    }
}

fn amps(value: f64) -> String {
    format!("{value}A")
}

/// Returns the text drawn next to an entity: its nameplate, the feeder from
/// its parent, the available fault current and its protective devices.
pub fn annotations(equipment: &Equipment, ratings: &Ratings) -> Vec<String> {
    let status = equipment.status().prefix();
    let nameplate = match equipment {
        Equipment::Service(s) => {
            let meters = if s.is_multi_meter { " MULTI-METER" } else { "" };
            format!("{status}{} {} SERVICE{meters}", amps(s.amp_rating), s.voltage)
        }
        Equipment::Meter(m) if m.is_space => format!("{status}METER SPACE"),
        Equipment::Meter(m) => {
            let cts = if m.has_cts { " W/ CTS" } else { "" };
            format!("{status}METER{cts}")
        }
        Equipment::MainBreaker(b)
        | Equipment::DistributionBreaker(b)
        | Equipment::PanelBreaker(b) => {
            format!("{status}{}/{}P", amps(b.amp_rating), b.num_poles)
        }
        Equipment::DistributionBus(b) => {
            format!("{status}{} BUS {}", amps(b.amp_rating), ratings.voltage())
        }
        Equipment::Panel(p) if p.is_mlo => format!(
            "{status}{} {} {} MLO",
            equipment.name(),
            amps(p.bus_size),
            ratings.voltage()
        ),
        Equipment::Panel(p) => format!(
            "{status}{} {} {} MCB, {} BUS",
            equipment.name(),
            amps(p.main_amp_rating),
            ratings.voltage(),
            amps(p.bus_size)
        ),
        Equipment::Disconnect(d) => match ratings.protection() {
            Some(Protection::Disconnect(size)) => format!(
                "{status}{}F/{}S/{}P",
                amps(size.amp_frame),
                amps(size.amp_switch),
                d.num_poles
            ),
            _ => format!("{status}DISCONNECT/{}P", d.num_poles),
        },
        Equipment::Transformer(t) => format!(
            "{status}{}KVA {} - {}",
            t.kva, t.primary, t.secondary
        ),
    };

    let mut lines = vec![nameplate];
    if let Some(feeder) = ratings.feeder() {
        lines.extend(feeder.annotations());
    }
    lines.push(format!("{:.0}A AIC", ratings.aic_rating()));
    if let Some(Protection::Transformer { primary, secondary }) = ratings.protection() {
        for (side, p) in [("PRI", primary), ("SEC", secondary)] {
            lines.push(format!(
                "{side} {} BKR, {} CU GND",
                amps(p.breaker),
                p.ground
            ));
        }
    }
    lines
}

/// Diagram generation.
impl DistributionGraph {
    /// Generates the one-line diagram of the service with the given id.
    ///
    /// The tree below the service is reconstructed, its ratings resolved and
    /// then laid out.  If any of these steps fails, the returned errors hold
    /// every problem found on the way, including the data-integrity problems
    /// of the catalog.
    pub fn one_line_diagram(&self, service_id: u64) -> Result<OneLineDiagram, DiagramErrors> {
        let mut errors = DiagramErrors::default();
        errors.extend(self.issues().iter().cloned());

        let mut issues = vec![];
        let mut root = match self.reconstruct(service_id, &mut issues) {
            Ok(root) => root,
            Err(err) => {
                tracing::error!("{err}");
                errors.push(err);
                return Err(errors);
            }
        };
        errors.extend(issues);

        propagate(&mut root, self.config(), &mut errors);
        if !errors.has_fatal() {
            lay_out(&mut root, &self.config().layout, &mut errors);
        }
        if errors.has_fatal() {
            tracing::error!(
                "Diagram of {} failed with {} errors.",
                describe(root.equipment()),
                errors.fatal().count()
            );
            return Err(errors);
        }

        tracing::debug!(
            "Generated the diagram of {} with {} warnings.",
            describe(root.equipment()),
            errors.len()
        );
        Ok(OneLineDiagram {
            service_id,
            root,
            warnings: errors.into_inner(),
        })
    }

    /// Generates the one-line diagrams of all services, in catalog order.
    pub fn one_line_diagrams(&self) -> Vec<Result<OneLineDiagram, DiagramErrors>> {
        self.services()
            .map(|s| self.one_line_diagram(s.id()))
            .collect()
    }
}
