//! Role draw for the `/start` command.
//!
//! One display name is drawn uniformly at random from the roster and announced
//! as the santa.

use rand::Rng;

use super::error::RoleDrawError;

/// Source of randomness for the draw.
#[cfg_attr(test, mockall::automock)]
pub trait Picker: Send {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Draw one name out of `candidates`.
///
/// # Errors
///
/// Returns `RoleDrawError::EmptyRoster` when there is nobody to draw from, and
/// `RoleDrawError::PickOutOfRange` when the picker misbehaves.
pub fn draw_role(candidates: &[String], picker: &mut dyn Picker) -> Result<String, RoleDrawError> {
    if candidates.is_empty() {
        return Err(RoleDrawError::EmptyRoster);
    }
    let index = picker.pick(candidates.len());
    candidates
        .get(index)
        .cloned()
        .ok_or(RoleDrawError::PickOutOfRange {
            index,
            len: candidates.len(),
        })
}
