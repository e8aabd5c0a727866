//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimulationConfig`]
//! - Error types
//! - Identifiers and sizes (PageId, FrameCapacity)

pub mod config;
pub mod error;
mod frame_capacity;
mod page_id;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use frame_capacity::FrameCapacity;
pub use page_id::PageId;
