use crate::classifiers::Prediction;
use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulator of predictive performance.
///
/// A `PerformanceEvaluator` consumes ground-truth class codes and the
/// prediction made for them, and exposes aggregated metrics via
/// [`performance`](PerformanceEvaluator::performance).
pub trait PerformanceEvaluator {
    /// Clears internal state/metrics (class count does not change).
    fn reset(&mut self);

    /// Feeds one scored example. Callers guarantee both codes are in range.
    fn add_result(&mut self, true_class: usize, prediction: &Prediction);

    /// Returns a snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
