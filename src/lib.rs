//! # purchais
//!
//! Kitchen inventory core for the PurchAIs demo.
//!
//! Provides the inventory mutation rules (add, cook, restock), the
//! rule-table recipe matcher, mocked receipt/fridge ingestion, restock
//! orders, and a kitchen session that ties them together with structured
//! logging and OpenTelemetry metrics.

pub mod catalog;
pub mod chef;
pub mod config;
pub mod error;
pub mod event;
pub mod ingest;
pub mod inventory;
pub mod kitchen;
pub mod matcher;
pub mod model;
pub mod notify;
pub mod order;
pub mod seed;
pub mod store;
pub mod telemetry;
