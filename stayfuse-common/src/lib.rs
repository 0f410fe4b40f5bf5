//! # StayFuse Common Library
//!
//! Shared code for the StayFuse services:
//! - Canonical hotel model (the schema every supplier record is normalized into)
//! - Common error types

pub mod error;
pub mod model;

pub use error::{Error, Result};
pub use model::{Amenities, DestinationId, Hotel, ImageRef, Images, Location};
