//! Application state

use rand::SeedableRng;
use weapon_core::{roll_dice, Modifiers, WeaponDamage, WeaponKind};

/// Maximum number of turns kept in the history panel
pub const HISTORY_LIMIT: usize = 50;

/// One completed roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub weapon: WeaponKind,
    pub modifiers: Modifiers,
    pub roll: i32,
    pub damage: i32,
}

/// Which prompt the shell is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectModifiers,
    SelectWeapon { modifiers: Modifiers },
    ShowResult(Turn),
}

pub struct App {
    pub stage: Stage,
    pub sword: WeaponDamage,
    pub arrow: WeaponDamage,
    /// Most recent turn first
    pub history: Vec<Turn>,
    pub rng: rand::rngs::StdRng,
    pub should_quit: bool,
}

impl App {
    /// Create the shell with a seeded or entropy-backed RNG
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        };

        let sword = WeaponDamage::with_default_dice(WeaponKind::Sword, &mut rng);
        let arrow = WeaponDamage::with_default_dice(WeaponKind::Arrow, &mut rng);

        App {
            stage: Stage::SelectModifiers,
            sword,
            arrow,
            history: Vec::new(),
            rng,
            should_quit: false,
        }
    }

    pub fn weapon(&self, kind: WeaponKind) -> &WeaponDamage {
        match kind {
            WeaponKind::Sword => &self.sword,
            WeaponKind::Arrow => &self.arrow,
        }
    }

    /// Handle a typed character for the current prompt
    pub fn on_char(&mut self, key: char) {
        match self.stage {
            Stage::SelectModifiers => match Modifiers::from_selection_code(key) {
                Some(modifiers) => self.stage = Stage::SelectWeapon { modifiers },
                None => self.quit(),
            },
            Stage::SelectWeapon { modifiers } => match WeaponKind::from_key(key) {
                Some(kind) => {
                    let turn = self.play_turn(kind, modifiers);
                    self.stage = Stage::ShowResult(turn);
                }
                None => self.quit(),
            },
            Stage::ShowResult(_) => self.next_turn(),
        }
    }

    /// Handle a non-character key (Enter, arrows, ...)
    ///
    /// These are never a valid selection, so they quit at a prompt and only
    /// dismiss a result.
    pub fn on_other_key(&mut self) {
        match self.stage {
            Stage::ShowResult(_) => self.next_turn(),
            _ => self.quit(),
        }
    }

    pub fn quit(&mut self) {
        tracing::info!(turns = self.history.len(), "quitting");
        self.should_quit = true;
    }

    fn next_turn(&mut self) {
        self.stage = Stage::SelectModifiers;
    }

    /// Roll the weapon's dice and write roll, magic, flaming onto its model
    fn play_turn(&mut self, kind: WeaponKind, modifiers: Modifiers) -> Turn {
        let roll = roll_dice(kind.default_dice_count(), &mut self.rng);
        let weapon = match kind {
            WeaponKind::Sword => &mut self.sword,
            WeaponKind::Arrow => &mut self.arrow,
        };
        weapon.set_roll(roll);
        weapon.set_magic(modifiers.magic);
        weapon.set_flaming(modifiers.flaming);

        let turn = Turn {
            weapon: kind,
            modifiers,
            roll: weapon.roll(),
            damage: weapon.damage(),
        };
        tracing::info!(
            weapon = kind.name(),
            modifiers = modifiers.label(),
            roll = turn.roll,
            damage = turn.damage,
            "turn resolved"
        );

        self.history.insert(0, turn);
        self.history.truncate(HISTORY_LIMIT);
        turn
    }
}
