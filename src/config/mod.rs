//! Configuration model for branchsweep.
//!
//! This module defines the Config struct that represents `.branchsweep.yaml`
//! at the repository root. The file is optional. Parsing is forward-compatible
//! (unknown fields are ignored) and every field has a default.

mod model;
mod operations;


pub use model::Config;
