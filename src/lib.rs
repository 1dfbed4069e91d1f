//! AHP Engine - Analytic Hierarchy Process decision support
//!
//! Derives criteria and alternative weights from pairwise comparisons,
//! checks the consistency of every comparison matrix and synthesizes a
//! ranked score per alternative.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
