//! Core types shared by the damage model and the shell

use serde::{Deserialize, Serialize};

/// Weapon variant, each with its own damage formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Sword,
    Arrow,
}

impl WeaponKind {
    /// Get all weapon kinds
    pub fn all() -> &'static [WeaponKind] {
        &[WeaponKind::Sword, WeaponKind::Arrow]
    }

    /// Number of d6 rolled for this weapon (3d6 sword, 1d6 arrow)
    pub fn default_dice_count(&self) -> i32 {
        match self {
            WeaponKind::Sword => 3,
            WeaponKind::Arrow => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Sword => "Sword",
            WeaponKind::Arrow => "Arrow",
        }
    }

    /// Parse a weapon selection key (`S` or `A`, any case)
    pub fn from_key(key: char) -> Option<WeaponKind> {
        match key.to_ascii_uppercase() {
            'S' => Some(WeaponKind::Sword),
            'A' => Some(WeaponKind::Arrow),
            _ => None,
        }
    }
}

/// Magic/flaming modifiers applied to a weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub magic: bool,
    #[serde(default)]
    pub flaming: bool,
}

impl Modifiers {
    pub fn new(magic: bool, flaming: bool) -> Self {
        Modifiers { magic, flaming }
    }

    /// Parse a selection code: 0 none, 1 magic, 2 flaming, 3 both
    pub fn from_selection_code(code: char) -> Option<Modifiers> {
        match code {
            '0' => Some(Modifiers::new(false, false)),
            '1' => Some(Modifiers::new(true, false)),
            '2' => Some(Modifiers::new(false, true)),
            '3' => Some(Modifiers::new(true, true)),
            _ => None,
        }
    }

    /// Short label for display ("plain", "magic", "flaming", "magic + flaming")
    pub fn label(&self) -> &'static str {
        match (self.magic, self.flaming) {
            (false, false) => "plain",
            (true, false) => "magic",
            (false, true) => "flaming",
            (true, true) => "magic + flaming",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_codes() {
        assert_eq!(Modifiers::from_selection_code('0'), Some(Modifiers::new(false, false)));
        assert_eq!(Modifiers::from_selection_code('1'), Some(Modifiers::new(true, false)));
        assert_eq!(Modifiers::from_selection_code('2'), Some(Modifiers::new(false, true)));
        assert_eq!(Modifiers::from_selection_code('3'), Some(Modifiers::new(true, true)));
        assert_eq!(Modifiers::from_selection_code('4'), None);
        assert_eq!(Modifiers::from_selection_code('q'), None);
    }

    #[test]
    fn test_weapon_keys() {
        assert_eq!(WeaponKind::from_key('s'), Some(WeaponKind::Sword));
        assert_eq!(WeaponKind::from_key('S'), Some(WeaponKind::Sword));
        assert_eq!(WeaponKind::from_key('a'), Some(WeaponKind::Arrow));
        assert_eq!(WeaponKind::from_key('x'), None);
    }

    #[test]
    fn test_default_dice_counts() {
        assert_eq!(WeaponKind::Sword.default_dice_count(), 3);
        assert_eq!(WeaponKind::Arrow.default_dice_count(), 1);
    }
}
