//! Adapter implementations for schedule planning ports.

pub mod config_file;
pub mod memory;
