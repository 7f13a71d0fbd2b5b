//! Core library for the ConnectLeads job-discovery service.
//!
//! The crate is split along the request path: the [`listings`] module owns the
//! canonical job model, the curated catalog, the pure filter engine, and the
//! source gateway that pulls listings from upstream providers with a synthetic
//! fallback. The remaining modules carry service plumbing shared by every
//! binary that embeds the library.

pub mod config;
pub mod error;
pub mod listings;
pub mod telemetry;
