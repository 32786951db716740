//! WeaponDamage - stateful damage model that recomputes on every write

use super::compute_damage;
use crate::dice::roll_dice;
use crate::types::{Modifiers, WeaponKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Current roll, modifiers and derived damage for one weapon
///
/// Every setter recalculates `damage` before returning, so `damage()` always
/// matches `compute_damage(kind, roll, modifiers)` once any input is written.
/// Deserializing reads only the inputs and recomputes damage from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WeaponInputs")]
pub struct WeaponDamage {
    kind: WeaponKind,
    roll: i32,
    damage: i32,
    modifiers: Modifiers,
}

/// Serialized inputs of a `WeaponDamage`; any stored damage is ignored
#[derive(Deserialize)]
struct WeaponInputs {
    kind: WeaponKind,
    #[serde(default)]
    roll: i32,
    #[serde(default)]
    modifiers: Modifiers,
}

impl From<WeaponInputs> for WeaponDamage {
    fn from(inputs: WeaponInputs) -> Self {
        let mut weapon = WeaponDamage {
            kind: inputs.kind,
            roll: inputs.roll,
            modifiers: inputs.modifiers,
            damage: 0,
        };
        weapon.recalculate();
        weapon
    }
}

impl WeaponDamage {
    /// Create a model and roll `dice_count` d6 for the starting roll
    ///
    /// A non-positive dice count skips the roll: roll and damage both stay 0
    /// until the caller sets a roll.
    pub fn new(kind: WeaponKind, dice_count: i32, rng: &mut impl Rng) -> Self {
        let mut weapon = WeaponDamage {
            kind,
            roll: 0,
            modifiers: Modifiers::default(),
            damage: 0,
        };

        if dice_count > 0 {
            weapon.roll = roll_dice(dice_count, rng);
            weapon.recalculate();
        }

        weapon
    }

    /// Create a model using the weapon's standard dice count (3d6 sword, 1d6 arrow)
    pub fn with_default_dice(kind: WeaponKind, rng: &mut impl Rng) -> Self {
        Self::new(kind, kind.default_dice_count(), rng)
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn roll(&self) -> i32 {
        self.roll
    }

    pub fn magic(&self) -> bool {
        self.modifiers.magic
    }

    pub fn flaming(&self) -> bool {
        self.modifiers.flaming
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn set_roll(&mut self, roll: i32) {
        self.roll = roll;
        self.recalculate();
    }

    pub fn set_magic(&mut self, magic: bool) {
        self.modifiers.magic = magic;
        self.recalculate();
    }

    pub fn set_flaming(&mut self, flaming: bool) {
        self.modifiers.flaming = flaming;
        self.recalculate();
    }

    /// Set both modifier flags at once
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.damage = compute_damage(self.kind, self.roll, self.modifiers);
        tracing::trace!(
            weapon = self.kind.name(),
            roll = self.roll,
            magic = self.modifiers.magic,
            flaming = self.modifiers.flaming,
            damage = self.damage,
            "recalculated damage"
        );
    }
}
