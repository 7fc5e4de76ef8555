//! The faces of a single roll.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The faces that came up on one roll of a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    faces: Vec<u32>,
}

impl Roll {
    /// Wrap rolled faces.
    pub fn new(faces: Vec<u32>) -> Self {
        Self { faces }
    }

    /// Each die's face, in roll order.
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Sum of the faces, saturating at `i32::MAX`.
    pub fn total(&self) -> i32 {
        self.faces
            .iter()
            .map(|&f| i32::try_from(f).unwrap_or(i32::MAX))
            .fold(0, i32::saturating_add)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(u32::to_string).collect();
        write!(f, "{} = {}", faces.join(" + "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_and_display() {
        let roll = Roll::new(vec![3, 5]);
        assert_eq!(roll.total(), 8);
        assert_eq!(roll.to_string(), "3 + 5 = 8");
    }

    #[test]
    fn empty_roll_is_zero() {
        assert_eq!(Roll::default().total(), 0);
    }

    #[test]
    fn total_saturates() {
        let roll = Roll::new(vec![u32::MAX, 1]);
        assert_eq!(roll.total(), i32::MAX);
    }
}
