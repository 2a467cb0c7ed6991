//! Step definitions for schedule repair behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
