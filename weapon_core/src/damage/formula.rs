//! Weapon damage formulas - turning a roll total + modifiers into damage

use super::Fixed;
use crate::types::{Modifiers, WeaponKind};

/// Flat damage every sword hit deals on top of the roll
const SWORD_BASE_DAMAGE: i32 = 3;
/// Extra flat damage for a flaming sword
const SWORD_FLAME_BONUS: i32 = 2;
/// Roll multiplier for a magic sword (1.75)
const SWORD_MAGIC_MULTIPLIER: Fixed = Fixed::from_hundredths(175);

/// Fraction of the roll an arrow deals (0.35)
const ARROW_BASE_MULTIPLIER: Fixed = Fixed::from_hundredths(35);
/// Multiplier applied to a magic arrow's base damage (2.5)
const ARROW_MAGIC_MULTIPLIER: Fixed = Fixed::from_hundredths(250);
/// Fractional damage added before rounding for a flaming arrow (1.25)
const ARROW_FLAME_BONUS: Fixed = Fixed::from_hundredths(125);

/// Calculate damage for any weapon kind
pub fn compute_damage(kind: WeaponKind, roll: i32, modifiers: Modifiers) -> i32 {
    match kind {
        WeaponKind::Sword => sword(roll, modifiers),
        WeaponKind::Arrow => arrow(roll, modifiers),
    }
}

/// Sword: trunc(roll × magic multiplier) + 3, plus 2 when flaming
pub fn sword(roll: i32, modifiers: Modifiers) -> i32 {
    let multiplier = if modifiers.magic {
        SWORD_MAGIC_MULTIPLIER
    } else {
        Fixed::ONE
    };

    let mut damage = (Fixed::from_int(roll) * multiplier)
        .trunc()
        .saturating_add(SWORD_BASE_DAMAGE);
    if modifiers.flaming {
        damage = damage.saturating_add(SWORD_FLAME_BONUS);
    }
    damage
}

/// Arrow: ceil(roll × 0.35 [× 2.5 if magic] [+ 1.25 if flaming])
pub fn arrow(roll: i32, modifiers: Modifiers) -> i32 {
    let mut base = Fixed::from_int(roll) * ARROW_BASE_MULTIPLIER;
    if modifiers.magic {
        base = base * ARROW_MAGIC_MULTIPLIER;
    }

    if modifiers.flaming {
        (base + ARROW_FLAME_BONUS).ceil()
    } else {
        base.ceil()
    }
}
