//! Core module for degree planning

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod planner;
pub mod prereq;
pub mod scheduler;
