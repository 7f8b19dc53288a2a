use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::entities::Tenor;

/// Selection for one filterable dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Criterion<T> {
    #[default]
    NoConstraint,
    Value(T),
}

/// Inclusive calendar-date range. An inverted range (`start > end`) is valid
/// and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Marketers shown in the daily achievement view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum MarketerSelection {
    /// Every marketer present in the filtered table.
    #[default]
    AllInView,
    /// Exactly these names. An empty set shows nothing.
    Only(BTreeSet<String>),
}

/// Current sidebar selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub company: Criterion<String>,
    pub marketer: Criterion<String>,
    pub status: Criterion<String>,
    pub tenor: Criterion<Tenor>,
    /// `None` when the data has no parsable dates; matches no record.
    pub date_range: Option<DateRange>,
    pub daily_marketers: MarketerSelection,
}

// --

impl<T: PartialEq> Criterion<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Criterion::NoConstraint => true,
            Criterion::Value(v) => v == value,
        }
    }

    /// Like `admits`, for nullable fields. A null field only passes when
    /// unconstrained.
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Criterion::NoConstraint, _) => true,
            (Criterion::Value(v), Some(value)) => v == value,
            (Criterion::Value(_), None) => false,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Criterion::NoConstraint => None,
            Criterion::Value(v) => Some(v),
        }
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl FilterCriteria {
    /// Every scalar dimension unconstrained, dates limited to `date_range`.
    pub fn unconstrained(date_range: Option<DateRange>) -> Self {
        Self {
            company: Criterion::NoConstraint,
            marketer: Criterion::NoConstraint,
            status: Criterion::NoConstraint,
            tenor: Criterion::NoConstraint,
            date_range,
            daily_marketers: MarketerSelection::AllInView,
        }
    }
}
