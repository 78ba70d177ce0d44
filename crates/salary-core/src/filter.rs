//! Sidebar filter state and the record predicate built from it.
//!
//! A [`FilterSet`] holds one selection per [`Dimension`]. A selection is a
//! list of [`Choice`]s; the `SelectAll` sentinel expands to every option of
//! the dimension when the predicate is built and never matches literally.
//!
//! An empty effective selection matches nothing. Callers that need to tell
//! "nothing selected" apart from "no rows left" use
//! [`FilterSet::awaiting_selection`].

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use thiserror::Error;

use salary_model::{Dimension, FilterOptions, FilterValue, ModelError, Record};

/// Display text of the select-all sentinel.
pub const SELECT_ALL: &str = "Select All";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error(transparent)]
    Dimension(#[from] ModelError),
    #[error("value '{value}' is not an option for {dimension}")]
    UnknownValue { dimension: Dimension, value: String },
}

/// One entry of a dimension's selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice {
    SelectAll,
    Value(FilterValue),
}

impl Choice {
    /// Parses one user token. `Select All` and `all` are the sentinel.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(SELECT_ALL) || trimmed.eq_ignore_ascii_case("all") {
            Choice::SelectAll
        } else {
            Choice::Value(FilterValue::parse(trimmed))
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Choice::Value(FilterValue::Present(value.into()))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::SelectAll => write!(f, "{SELECT_ALL}"),
            Choice::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Splits a comma-separated list into choices, dropping empty tokens.
pub fn parse_choices(input: &str) -> Vec<Choice> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(Choice::parse)
        .collect()
}

/// Current selections for all five dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    options: FilterOptions,
    selections: [Vec<Choice>; 5],
}

impl FilterSet {
    /// Starts with every dimension on "Select All".
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            selections: std::array::from_fn(|_| vec![Choice::SelectAll]),
        }
    }

    /// Options of a dimension, from the unfiltered dataset.
    pub fn options(&self, dimension: Dimension) -> &[FilterValue] {
        self.options.get(dimension)
    }

    /// Replaces the selection of one dimension.
    pub fn select<I>(&mut self, dimension: Dimension, choices: I)
    where
        I: IntoIterator<Item = Choice>,
    {
        let mut selection: Vec<Choice> = Vec::new();
        for choice in choices {
            if !selection.contains(&choice) {
                selection.push(choice);
            }
        }
        self.selections[dimension.index()] = selection;
    }

    /// Like [`select`](Self::select) but rejects values that are not options.
    pub fn select_checked<I>(
        &mut self,
        dimension: Dimension,
        choices: I,
    ) -> Result<(), SelectionError>
    where
        I: IntoIterator<Item = Choice>,
    {
        let choices: Vec<Choice> = choices.into_iter().collect();
        for choice in &choices {
            if let Choice::Value(value) = choice
                && !self.options(dimension).contains(value)
            {
                return Err(SelectionError::UnknownValue {
                    dimension,
                    value: value.to_string(),
                });
            }
        }
        self.select(dimension, choices);
        Ok(())
    }

    pub fn selection(&self, dimension: Dimension) -> &[Choice] {
        &self.selections[dimension.index()]
    }

    pub fn reset(&mut self, dimension: Dimension) {
        self.selections[dimension.index()] = vec![Choice::SelectAll];
    }

    pub fn reset_all(&mut self) {
        for dimension in Dimension::ALL {
            self.reset(dimension);
        }
    }

    /// Concrete values the dimension matches after expanding "Select All".
    pub fn effective_selection(&self, dimension: Dimension) -> BTreeSet<FilterValue> {
        let selection = self.selection(dimension);
        if selection.contains(&Choice::SelectAll) {
            return self.options(dimension).iter().cloned().collect();
        }
        selection
            .iter()
            .filter_map(|choice| match choice {
                Choice::Value(value) => Some(value.clone()),
                Choice::SelectAll => None,
            })
            .collect()
    }

    /// Dimensions whose effective selection is empty.
    pub fn awaiting_selection(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| self.effective_selection(*dimension).is_empty())
            .collect()
    }

    /// Freezes the current selections into a predicate.
    pub fn predicate(&self) -> Predicate {
        Predicate {
            accepted: std::array::from_fn(|idx| {
                self.effective_selection(Dimension::ALL[idx])
                    .into_iter()
                    .collect()
            }),
        }
    }

    /// One-off check; build a [`Predicate`] when testing many records.
    pub fn matches(&self, record: &Record) -> bool {
        self.predicate().matches(record)
    }

    /// Records that pass every dimension, in dataset order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        let predicate = self.predicate();
        records
            .iter()
            .filter(|record| predicate.matches(record))
            .collect()
    }
}

/// Effective selections of all dimensions, ready to test records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    accepted: [Accepted; 5],
}

impl Predicate {
    pub fn matches(&self, record: &Record) -> bool {
        Dimension::ALL.iter().all(|dimension| {
            self.accepted[dimension.index()].contains(record.dimension_value(*dimension))
        })
    }
}

/// Values one dimension accepts, keyed for constant-time lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Accepted {
    present: HashSet<String>,
    missing: bool,
}

impl Accepted {
    fn contains(&self, value: Option<&str>) -> bool {
        match value {
            Some(value) => self.present.contains(value),
            None => self.missing,
        }
    }
}

impl FromIterator<FilterValue> for Accepted {
    fn from_iter<I: IntoIterator<Item = FilterValue>>(values: I) -> Self {
        let mut accepted = Accepted::default();
        for value in values {
            match value {
                FilterValue::Present(value) => {
                    accepted.present.insert(value);
                }
                FilterValue::Missing => accepted.missing = true,
            }
        }
        accepted
    }
}
