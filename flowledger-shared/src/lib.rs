//! Shared wire models for the FlowLedger client.
//!
//! Everything the remote cash-flow API sends or accepts is described here as
//! plain serde types, so the web crate and its tests agree on one schema.

pub mod models;
