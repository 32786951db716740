//! Prelude module for convenient imports
//!
//! ```rust
//! use weapon_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Modifiers, WeaponKind};

// Dice
pub use crate::dice::{roll_d6, roll_dice, D6_SIDES};

// Damage system
pub use crate::damage::{compute_damage, Fixed, WeaponDamage};

// Config
pub use crate::config::{default_session_config, SessionConfig};
