//! Core building blocks: run parameters, config loading and step planning.
//! These are consumed by the high-level `api` module.
pub mod config;
pub mod params;
pub mod plan;
