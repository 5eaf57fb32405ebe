//! Filter and sort controls for the table.

use chrono::NaiveDate;

use super::column::Column;
use crate::model::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: Column,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            column: Column::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl Sort {
    /// Header click: the active ascending column flips to descending,
    /// anything else sorts ascending by `column`.
    pub fn request(self, column: Column) -> Self {
        let direction = if self.column == column {
            self.direction.flipped()
        } else {
            SortDirection::Asc
        };
        Self { column, direction }
    }
}

/// Range constraints; `None` bounds are open. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub hire_date_from: Option<NaiveDate>,
    pub hire_date_to: Option<NaiveDate>,
}

/// One edit to [`Filters`]; `None` clears that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    MinAge(Option<u32>),
    MaxAge(Option<u32>),
    HireDateFrom(Option<NaiveDate>),
    HireDateTo(Option<NaiveDate>),
}

impl Filters {
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::MinAge(v) => self.min_age = v,
            FilterChange::MaxAge(v) => self.max_age = v,
            FilterChange::HireDateFrom(v) => self.hire_date_from = v,
            FilterChange::HireDateTo(v) => self.hire_date_to = v,
        }
    }

    pub fn is_active(&self) -> bool {
        self != &Filters::default()
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        self.min_age.is_none_or(|min| entity.age >= min)
            && self.max_age.is_none_or(|max| entity.age <= max)
            && self.hire_date_from.is_none_or(|from| entity.hire_date >= from)
            && self.hire_date_to.is_none_or(|to| entity.hire_date <= to)
    }
}

/// Case-insensitive substring match over names, email and id.
pub fn matches_search(entity: &Entity, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    entity.first_name.to_lowercase().contains(&term)
        || entity.last_name.to_lowercase().contains(&term)
        || entity.email.to_lowercase().contains(&term)
        || entity.id.to_string().contains(&term)
}
