use crate::evaluation::Measurement;

/// Count matrix indexed `[predicted][true]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    num_classes: usize,
    counts: Vec<usize>,
}

impl ConfusionMatrix {
    pub fn new(num_classes: usize) -> Self {
        Self {
            num_classes,
            counts: vec![0; num_classes * num_classes],
        }
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    fn offset(&self, predicted: usize, truth: usize) -> Option<usize> {
        (predicted < self.num_classes && truth < self.num_classes)
            .then(|| predicted * self.num_classes + truth)
    }

    /// Codes are checked by the caller; out-of-range pairs are ignored.
    pub(crate) fn record(&mut self, predicted: usize, truth: usize) {
        if let Some(i) = self.offset(predicted, truth) {
            self.counts[i] += 1;
        }
    }

    pub fn count(&self, predicted: usize, truth: usize) -> Option<usize> {
        self.offset(predicted, truth).map(|i| self.counts[i])
    }

    pub fn row(&self, predicted: usize) -> Option<&[usize]> {
        let start = self.offset(predicted, 0)?;
        Some(&self.counts[start..start + self.num_classes])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
    }

    /// Divides every row by its sum, giving `P(true | predicted)` per row.
    /// Rows of never-predicted classes stay all zero.
    pub fn normalized(&self) -> Vec<Vec<f64>> {
        self.counts
            .chunks(self.num_classes.max(1))
            .map(|row| {
                let sum: usize = row.iter().sum();
                if sum == 0 {
                    vec![0.0; self.num_classes]
                } else {
                    row.iter().map(|&c| c as f64 / sum as f64).collect()
                }
            })
            .collect()
    }
}

/// Result of one evaluation pass over a test partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    counts: ConfusionMatrix,
    confusion: Vec<Vec<f64>>,
    trust: Vec<f64>,
}

impl Evaluation {
    pub fn from_counts(counts: ConfusionMatrix) -> Self {
        let confusion = counts.normalized();
        let trust = confusion
            .iter()
            .enumerate()
            .map(|(c, row)| row[c])
            .collect();
        Self {
            counts,
            confusion,
            trust,
        }
    }

    /// Raw `[predicted][true]` counts.
    pub fn counts(&self) -> &ConfusionMatrix {
        &self.counts
    }

    /// Row-normalized confusion matrix.
    pub fn confusion(&self) -> &[Vec<f64>] {
        &self.confusion
    }

    /// Per-class precision, the diagonal of [`Self::confusion`].
    pub fn trust(&self) -> &[f64] {
        &self.trust
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.counts.total();
        if total == 0 {
            return f64::NAN;
        }
        let correct: usize = (0..self.counts.num_classes())
            .filter_map(|c| self.counts.count(c, c))
            .sum();
        correct as f64 / total as f64
    }

    pub fn measurements(&self) -> Vec<Measurement> {
        let mut m = vec![Measurement::accuracy(self.accuracy())];
        m.extend(
            self.trust
                .iter()
                .enumerate()
                .map(|(c, &t)| Measurement::trust(c, t)),
        );
        m
    }
}
