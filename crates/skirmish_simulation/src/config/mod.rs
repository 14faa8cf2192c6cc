//! Read-only configuration: weapon catalog, weapon layers, simulation settings.
//!
//! Загружается один раз при старте уровня, дальше только читается.
//! Every failure here is a setup error (`ConfigError`) surfaced at load or
//! spawn time, never during per-tick evaluation.

use thiserror::Error;

pub mod settings;
pub mod weapons;


pub use settings::*;
pub use weapons::*;

/// Setup error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Catalog has no entry for a weapon type
    #[error("weapon {0:?} is missing from the catalog")]
    MissingWeapon(WeaponType),
    /// Weapon value that must be strictly positive is not
    #[error("weapon {weapon:?}: {field} must be > 0 (got {value})")]
    NonPositiveWeaponValue {
        /// Offending weapon
        weapon: WeaponType,
        /// Field name
        field: &'static str,
        /// Value found
        value: f32,
    },
    /// Layer mask does not encode exactly one layer
    #[error("layer mask {0:#034b} must have exactly one bit set")]
    InvalidLayerMask(u32),
    /// Simulation setting out of range
    #[error("setting {field} is invalid (got {value})")]
    InvalidSetting {
        /// Field name
        field: &'static str,
        /// Value found
        value: f64,
    },
    /// RON text could not be parsed
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
