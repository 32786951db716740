//! Six-sided dice rolling

use rand::Rng;

/// Number of faces on a d6
pub const D6_SIDES: i32 = 6;

/// Roll a single d6
pub fn roll_d6(rng: &mut impl Rng) -> i32 {
    rng.gen_range(1..=D6_SIDES)
}

/// Roll `number_of_rolls` d6 and return the sum
///
/// A non-positive count rolls nothing and returns 0.
pub fn roll_dice(number_of_rolls: i32, rng: &mut impl Rng) -> i32 {
    if number_of_rolls <= 0 {
        return 0;
    }

    let total = sum_faces((0..number_of_rolls).map(|_| roll_d6(rng)));
    tracing::debug!(dice = number_of_rolls, total, "rolled d6 pool");
    total
}

/// Sum die faces, saturating at `i32::MAX` for very large pools
fn sum_faces(faces: impl Iterator<Item = i32>) -> i32 {
    faces.fold(0, |total, face| total.saturating_add(face))
}
