//! Combat components

pub mod engagement;
pub mod projectile;
pub mod weapon;


// Re-export all components
pub use engagement::*;
pub use projectile::*;
pub use weapon::*;
