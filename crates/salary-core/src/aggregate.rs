//! Group-by aggregates over a filtered record set.
//!
//! Every function is pure and takes any iterator of record references, so
//! the output of [`crate::FilterSet::apply`] can be passed straight in.
//! Records whose group key is null belong to no group. Groups are first
//! collected in first-encountered order and all sorts are stable, so ties
//! keep that order. Empty input produces an empty result.

use std::collections::HashMap;

use serde::Serialize;

use salary_model::{GroupKey, Metric, Record};

/// Label of the synthetic bucket appended by [`top_k_plus_other`].
pub const OTHER_LABEL: &str = "Other";

/// Default `k` for [`top_k_plus_other`].
pub const DEFAULT_TOP_K: usize = 5;

/// A group label with a numeric statistic (usually a mean).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A group label with a record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: usize,
}

impl LabeledCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Five-number summary plus mean for one group, as drawn by a box plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub label: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

fn grouped<'a, I>(records: I, key: GroupKey) -> Vec<(String, Vec<&'a Record>)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a Record>)> = Vec::new();
    for record in records {
        let Some(value) = record.group_value(key) else {
            continue;
        };
        let slot = match index.get(value.as_ref()) {
            Some(slot) => *slot,
            None => {
                let slot = groups.len();
                index.insert(value.to_string(), slot);
                groups.push((value.into_owned(), Vec::new()));
                slot
            }
        };
        groups[slot].1.push(record);
    }
    groups
}

fn group_means<'a, I>(records: I, key: GroupKey, metric: Metric) -> Vec<LabeledValue>
where
    I: IntoIterator<Item = &'a Record>,
{
    grouped(records, key)
        .into_iter()
        .map(|(label, members)| {
            let sum: f64 = members.iter().map(|record| record.metric(metric)).sum();
            LabeledValue {
                label,
                value: sum / members.len() as f64,
            }
        })
        .collect()
}

/// Mean of `metric` per group, highest mean first.
pub fn group_mean<'a, I>(records: I, key: GroupKey, metric: Metric) -> Vec<LabeledValue>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut means = group_means(records, key, metric);
    means.sort_by(|a, b| b.value.total_cmp(&a.value));
    means
}

/// First `n` entries of an ordered series (all of them when shorter).
pub fn top_n<T: Clone>(series: &[T], n: usize) -> Vec<T> {
    series[..n.min(series.len())].to_vec()
}

/// Mean of `metric` per group, lowest mean first, truncated to `n`.
pub fn bottom_n<'a, I>(records: I, key: GroupKey, metric: Metric, n: usize) -> Vec<LabeledValue>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut means = group_means(records, key, metric);
    means.sort_by(|a, b| a.value.total_cmp(&b.value));
    means.truncate(n);
    means
}

/// Number of records per distinct value, most frequent first.
pub fn value_counts<'a, I>(records: I, key: GroupKey) -> Vec<LabeledCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: Vec<LabeledCount> = grouped(records, key)
        .into_iter()
        .map(|(label, members)| LabeledCount {
            label,
            count: members.len(),
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `k` most frequent values plus an [`OTHER_LABEL`] entry for the rest.
///
/// The `Other` entry is always present, with a zero count when `k` covers
/// every value. Counts sum to the number of input records; records with a
/// null key are counted in `Other`. Empty input returns an empty result.
pub fn top_k_plus_other<'a, I>(records: I, key: GroupKey, k: usize) -> Vec<LabeledCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    if records.is_empty() {
        return Vec::new();
    }
    let mut top = value_counts(records.iter().copied(), key);
    top.truncate(k);
    let covered: usize = top.iter().map(|entry| entry.count).sum();
    top.push(LabeledCount::new(OTHER_LABEL, records.len() - covered));
    top
}

/// Box-plot statistics of `metric` per group, in first-encountered order.
///
/// Quartiles interpolate linearly between the closest ranks.
pub fn box_summary<'a, I>(records: I, key: GroupKey, metric: Metric) -> Vec<BoxSummary>
where
    I: IntoIterator<Item = &'a Record>,
{
    grouped(records, key)
        .into_iter()
        .map(|(label, members)| {
            let mut values: Vec<f64> = members.iter().map(|record| record.metric(metric)).collect();
            values.sort_by(f64::total_cmp);
            let sum: f64 = values.iter().sum();
            BoxSummary {
                label,
                count: values.len(),
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
                mean: sum / values.len() as f64,
            }
        })
        .collect()
}

/// Linear-interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
