//! Building domain entity

use chrono::{DateTime, Utc};

/// Apartment building with submetered residential units.
///
/// Units are numbered 1..=units. The unit count is assumed immutable once
/// usage snapshots reference the building; this is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub id: i32,
    pub name: String,
    /// Number of residential units, at least [`Building::MIN_UNITS`]
    pub units: i32,
    pub created_at: DateTime<Utc>,
}

impl Building {
    /// A building needs at least two units for cost sharing to mean anything.
    pub const MIN_UNITS: i32 = 2;

    pub fn unit_numbers(&self) -> impl Iterator<Item = i32> {
        1..=self.units
    }
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_numbers_are_one_based() {
        let b = Building {
            id: 1,
            name: "H2".into(),
            units: 4,
            created_at: Utc::now(),
        };
        assert_eq!(b.unit_numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
