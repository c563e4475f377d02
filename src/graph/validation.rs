// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! Methods for validating a [`DistributionGraph`] after its links have been
//! added.

mod validate_graph;
mod validate_services;

use crate::{DistributionGraph, Error};

use super::record_issue;

pub(crate) struct DistributionGraphValidator<'a> {
    dg: &'a DistributionGraph,
    issues: Vec<Error>,
}

impl DistributionGraph {
    /// Runs all the validations and records the issues found.
    pub(super) fn validate(&mut self) {
        let mut validator = DistributionGraphValidator {
            dg: self,
            issues: vec![],
        };

        validator.validate_meter_counts();
        validator.validate_connected_graph();

        let issues = validator.issues;
        self.issues.extend(issues);
    }
}

impl DistributionGraphValidator<'_> {
    fn report(&mut self, issue: Error) {
        record_issue(&mut self.issues, issue);
    }
}
