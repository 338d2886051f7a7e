//! Connectivity Demo Core Library
//!
//! Provides the domain logic for the service connectivity demo panels:
//! - Demo panel configuration (targets, actions, diagram assets)
//! - The backend gateway (`/resolv`, `/webproxy`, `/dbconnect`, `/dump`)
//! - The panel controller state machine (reset / start / run)
//!
//! This library is frontend-independent: the display model is plain data and
//! the backend is abstracted behind a trait, so terminal and web frontends
//! can share the same controllers.

pub mod error;
pub mod gateway;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{DemoError, DemoResult};
pub use gateway::HttpDemoGateway;
pub use services::PanelController;
pub use traits::DemoGateway;
