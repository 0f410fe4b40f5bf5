//! HTTP API handlers for stayfuse-merge

pub mod health;
pub mod hotels;
pub mod merge;

pub use health::health_routes;
pub use hotels::hotel_routes;
pub use merge::merge_routes;
