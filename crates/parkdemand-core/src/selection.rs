use serde::{Deserialize, Serialize};

/// A record that a dropdown selection can point at.
pub trait Identified {
    fn id(&self) -> &str;
}

/// The id of a previously chosen dropdown entry, as held in session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,
}

impl Selection {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl<T: Identified> From<&T> for Selection {
    fn from(record: &T) -> Self {
        Self::new(record.id())
    }
}

/// Index of the candidate whose id matches `previous`, or `default_index`.
///
/// A missing or stale selection is not an error; it just falls back.
#[must_use]
pub fn resolve_selection<T: Identified>(
    previous: Option<&Selection>,
    candidates: &[T],
    default_index: usize,
) -> usize {
    previous
        .and_then(|prev| candidates.iter().position(|c| c.id() == prev.id))
        .unwrap_or(default_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::LOCATIONS;

    #[test]
    fn no_previous_selection_uses_default() {
        assert_eq!(resolve_selection(None, &LOCATIONS, 0), 0);
    }

    #[test]
    fn matching_id_resolves_to_its_position() {
        let prev = Selection::new("miami");
        assert_eq!(resolve_selection(Some(&prev), &LOCATIONS, 0), 5);
    }

    #[test]
    fn every_catalog_id_resolves_to_itself() {
        for (idx, location) in LOCATIONS.iter().enumerate() {
            let prev = Selection::from(location);
            assert_eq!(resolve_selection(Some(&prev), &LOCATIONS, 0), idx);
        }
    }

    #[test]
    fn stale_id_falls_back_to_default() {
        let prev = Selection::new("springfield");
        assert_eq!(resolve_selection(Some(&prev), &LOCATIONS, 3), 3);
    }

    #[test]
    fn empty_candidates_fall_back_to_default() {
        let prev = Selection::new("miami");
        let none: [crate::locations::Location; 0] = [];
        assert_eq!(resolve_selection(Some(&prev), &none, 2), 2);
    }
}
