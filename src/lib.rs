//! Shared library for `DegreePlanner`
//! Contains the planning core used by the CLI.

pub mod core;

pub use core::config;
