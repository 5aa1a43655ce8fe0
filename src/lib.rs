//! Agent Query Console
//!
//! Native egui front end for a single `POST /api/query` endpoint.
//! Sends free-text queries, renders the answers as result cards and
//! highlights the agent (weather, API, math) that produced each answer.

/// Query endpoint client and wire types
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
/// View state
pub mod state;
/// egui rendering
pub mod ui;
