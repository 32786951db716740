//! weapon_core - Dice rolling and weapon damage formulas
//!
//! This library provides:
//! - roll_dice: Sum of N six-sided dice from an injected RNG
//! - Fixed: Base-10 fixed-point used by the damage formulas
//! - WeaponDamage: Sword/Arrow damage model that recomputes on every write
//! - SessionConfig: TOML configuration for the interactive shell

pub mod config;
pub mod damage;
pub mod dice;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use config::{default_session_config, ConfigError, SessionConfig};
pub use damage::{compute_damage, Fixed, WeaponDamage};
pub use dice::{roll_d6, roll_dice};
pub use types::{Modifiers, WeaponKind};
