//! Damage system - fixed-point arithmetic, weapon formulas and the damage model

mod fixed;
mod formula;
mod model;

pub use fixed::Fixed;
pub use formula::{arrow, compute_damage, sword};
pub use model::WeaponDamage;
