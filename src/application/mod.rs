//! Application layer: the view-state machine and the transport port.

pub mod api;
pub mod error;
pub mod service;
pub mod state;
pub mod store;
pub mod update;
