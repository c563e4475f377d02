// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! The rating propagator: cascades the available fault current and feeder
//! sizing from every node to its children.
//!
//! The engineering data lives in [`tables`], apart from the formulas that use
//! it.

mod fault;
mod feeder;
mod propagate;
mod protection;
pub(crate) mod tables;

pub use fault::{aic_from_impedance, aic_from_transformer, transformer_full_load_amps};
pub use feeder::{size_wire_and_conduit, FeederRequest, FeederSizing};
pub(crate) use propagate::propagate;
pub use protection::{
    disconnect_size, equipment_ground, transformer_protection, DisconnectSize,
    TransformerProtection,
};
