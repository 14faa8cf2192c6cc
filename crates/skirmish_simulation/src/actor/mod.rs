//! Actor domain: spawning enemies / player / cameras, activation lifecycle.
//!
//! Содержит:
//! - EnemyBlueprint / PlayerBlueprint + spawn helpers (setup errors surface here)
//! - reset_on_activation (fresh lifecycle for reused pool instances)
//! - encounter spawn ring (seeded)

pub mod encounter;
pub mod lifecycle;
pub mod spawn;

#[cfg(test)]
mod spawn_tests;

pub use encounter::*;
pub use lifecycle::*;
pub use spawn::*;
