//! Placement resolver for floating panels
//!
//! Given an anchor rectangle, the pre-measured size of a floating panel, a
//! placement hint and the viewport, computes where the panel goes.

pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

pub use config::PlacementConfig;
pub use error::PlacementError;
pub use resolver::{resolve, resolve_with_config};
pub use types::*;
