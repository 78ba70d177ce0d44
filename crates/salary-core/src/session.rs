//! Per-user interactive state.
//!
//! The dataset is shared and immutable; a [`Session`] owns the only mutable
//! state, the filter set and the selected visualization. Every [`Event`]
//! is applied synchronously and followed by a full re-render.

use std::sync::Arc;

use tracing::{debug, info};

use salary_ingest::Dataset;
use salary_model::Dimension;

use crate::filter::{Choice, FilterSet, SelectionError};
use crate::view::{ViewModel, Visualization, render};

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replace a dimension's selection. An empty list deselects everything.
    Select {
        dimension: Dimension,
        choices: Vec<Choice>,
    },
    /// Back to "Select All" for one dimension, or for all when `None`.
    Reset(Option<Dimension>),
    Visualize(Visualization),
}

#[derive(Debug, Clone)]
pub struct Session {
    dataset: Arc<Dataset>,
    filters: FilterSet,
    visualization: Visualization,
}

impl Session {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let filters = FilterSet::new(dataset.filter_options().clone());
        Self {
            dataset,
            filters,
            visualization: Visualization::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn visualization(&self) -> Visualization {
        self.visualization
    }

    /// Applies an event. On error the session keeps its previous state.
    pub fn apply(&mut self, event: Event) -> Result<(), SelectionError> {
        match event {
            Event::Select { dimension, choices } => {
                debug!(dimension = dimension.column(), choices = choices.len(), "select");
                self.filters.select_checked(dimension, choices)?;
            }
            Event::Reset(Some(dimension)) => {
                debug!(dimension = dimension.column(), "reset");
                self.filters.reset(dimension);
            }
            Event::Reset(None) => {
                debug!("reset all");
                self.filters.reset_all();
            }
            Event::Visualize(visualization) => {
                info!(visualization = visualization.slug(), "switch visualization");
                self.visualization = visualization;
            }
        }
        Ok(())
    }

    /// Applies an event and renders the resulting view.
    pub fn handle(&mut self, event: Event) -> Result<ViewModel<'_>, SelectionError> {
        self.apply(event)?;
        Ok(self.view())
    }

    /// Renders the current state without changing it.
    pub fn view(&self) -> ViewModel<'_> {
        render(&self.dataset, &self.filters, self.visualization)
    }
}
