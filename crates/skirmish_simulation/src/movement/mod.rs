//! Movement domain: navigation intent for enemies
//!
//! Содержит:
//! - NavigationAgent (destination + enabled flag, читается host pathfinding)

pub mod components;

// Re-export all components
pub use components::*;
