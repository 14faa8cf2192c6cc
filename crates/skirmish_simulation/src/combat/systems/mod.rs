//! Combat systems (decision + ranged combat)

mod decision;
mod weapon;


// Re-export all systems
pub use decision::*;
pub use weapon::*;
