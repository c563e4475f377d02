// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Validation of the meters fed by a service.

use crate::entity::describe;
use crate::entity_kind::KindPredicates;
use crate::{Entity, Equipment, Error};

use super::DistributionGraphValidator;

impl DistributionGraphValidator<'_> {
    /// Validates that a service only feeds multiple meters when it is
    /// declared as a multi-meter service.
    ///
    /// The meters are kept in the graph either way.
    pub(super) fn validate_meter_counts(&mut self) {
        let dg = self.dg;
        let mut found = vec![];
        for service in dg.services() {
            let Equipment::Service(s) = service else {
                continue;
            };
            if s.is_multi_meter {
                continue;
            }
            let Ok(successors) = dg.successors(service.id()) else {
                continue;
            };
            let meters = successors.filter(|n| n.is_meter()).count();
            if meters > 1 {
                found.push(Error::data_integrity(format!(
                    "{} isn't a multi-meter service, but feeds {meters} meters.",
                    describe(service)
                )));
            }
        }
        for issue in found {
            self.report(issue);
        }
    }
}
