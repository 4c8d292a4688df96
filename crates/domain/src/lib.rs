//! # folio-domain
//!
//! Pure domain model for the folio portfolio page.
//!
//! ## Responsibilities
//! - Foundational types: section identifiers, error conventions, geometry
//! - Define the **navigation state** shared by the page handlers
//! - Define the **theme** and its persisted sentinel
//! - Hold the tunable thresholds ([`config::NavConfig`])
//! - Resolve the active section from section bounds
//! - Carry the static page content
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All platform boundaries are expressed as traits in the `app` crate (ports).

pub mod config;
pub mod error;
pub mod geometry;
pub mod section;
pub mod theme;

pub mod content;
pub mod navigation;
