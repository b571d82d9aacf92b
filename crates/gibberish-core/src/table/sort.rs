//! Tri-state column sorting.

use serde::{Deserialize, Serialize};

use super::Column;

/// Sort direction of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next direction on a header click: unsorted → ascending → descending → unsorted.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Unsorted => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
        }
    }
}

/// Which column, if any, orders the table.
///
/// At most one column carries a direction other than
/// [`SortDirection::Unsorted`]; activating one column drops the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    active: Option<(Column, SortDirection)>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current direction of `column`.
    pub fn direction(&self, column: Column) -> SortDirection {
        match self.active {
            Some((active, direction)) if active == column => direction,
            _ => SortDirection::Unsorted,
        }
    }

    /// The active column and its direction.
    pub fn active(&self) -> Option<(Column, SortDirection)> {
        self.active
    }

    /// Set `column` to `direction` and every other column to unsorted.
    pub fn set(&mut self, column: Column, direction: SortDirection) {
        self.active = match direction {
            SortDirection::Unsorted => None,
            direction => Some((column, direction)),
        };
    }

    /// Advance `column` one step and return its new direction.
    pub fn cycle(&mut self, column: Column) -> SortDirection {
        let next = self.direction(column).next();
        self.set(column, next);
        next
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cycle_order() {
        let mut spec = SortSpec::new();
        assert_eq!(spec.cycle(Column::Name), SortDirection::Ascending);
        assert_eq!(spec.cycle(Column::Name), SortDirection::Descending);
        assert_eq!(spec.cycle(Column::Name), SortDirection::Unsorted);
        assert_eq!(spec.active(), None);
    }

    #[test]
    fn test_switching_column_resets_others() {
        let mut spec = SortSpec::new();
        spec.cycle(Column::Name);
        spec.cycle(Column::Name);
        assert_eq!(spec.direction(Column::Name), SortDirection::Descending);

        // A fresh column starts from unsorted regardless of the previous one
        assert_eq!(spec.cycle(Column::GibberishScore), SortDirection::Ascending);
        assert_eq!(spec.direction(Column::Name), SortDirection::Unsorted);
        assert_eq!(spec.direction(Column::Gibberish), SortDirection::Unsorted);
    }

    fn any_column() -> impl Strategy<Value = Column> {
        prop::sample::select(Column::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn at_most_one_column_is_sorted(clicks in prop::collection::vec(any_column(), 0..20)) {
            let mut spec = SortSpec::new();
            for column in clicks {
                spec.cycle(column);
                let sorted = Column::ALL
                    .iter()
                    .filter(|c| spec.direction(**c) != SortDirection::Unsorted)
                    .count();
                prop_assert!(sorted <= 1);
            }
        }

        #[test]
        fn three_clicks_return_to_unsorted(column in any_column()) {
            let mut spec = SortSpec::new();
            spec.cycle(column);
            spec.cycle(column);
            spec.cycle(column);
            prop_assert_eq!(spec, SortSpec::new());
        }
    }
}
