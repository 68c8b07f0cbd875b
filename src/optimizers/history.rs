use std::collections::BTreeMap;
use std::fmt;

/// The metrics an optimizer can record, one sequence of values each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Mean of the batch losses over one epoch. Only recorded when the
    /// optimizer knows its loss function.
    Loss,
    /// Mean Euclidean norm of the batch gradients over one epoch.
    GradientNorm,
    /// Euclidean distance between the parameters before and after one epoch.
    ParameterChange,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Loss, Metric::GradientNorm, Metric::ParameterChange];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Loss => "loss",
            Metric::GradientNorm => "gradient_norm",
            Metric::ParameterChange => "parameter_change",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Append-only log of per-iteration metrics.
///
/// Values are only ever pushed; the whole log is dropped at once by
/// [`History::clear`]. Metrics iterate in the order of [`Metric`].
#[derive(Debug, Clone, PartialEq)]
pub struct History<F> {
    records: BTreeMap<Metric, Vec<F>>,
}

impl<F> Default for History<F> {
    fn default() -> Self {
        History {
            records: BTreeMap::new(),
        }
    }
}

impl<F: Copy> History<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to the sequence of a metric.
    pub fn record(&mut self, metric: Metric, value: F) {
        self.records.entry(metric).or_default().push(value);
    }

    /// All the values recorded for a metric, oldest first.
    pub fn get(&self, metric: Metric) -> Option<&[F]> {
        self.records.get(&metric).map(Vec::as_slice)
    }

    pub fn last(&self, metric: Metric) -> Option<F> {
        self.get(metric).and_then(|values| values.last().copied())
    }

    pub fn n_records(&self, metric: Metric) -> usize {
        self.get(metric).map_or(0, <[F]>::len)
    }

    /// Number of metrics with at least one recorded value.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &[F])> {
        self.records
            .iter()
            .map(|(metric, values)| (*metric, values.as_slice()))
    }
}
