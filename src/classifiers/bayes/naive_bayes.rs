use crate::classifiers::bayes::{DistributionTable, FitWarning, NaiveBayesModel, NaiveBayesParams};
use crate::classifiers::error::{
    ClassifierError, ConfigurationError, PreconditionViolation, Result,
};
use crate::core::attributes::{Attribute, AttributeKind};
use crate::core::dataset::LabeledTable;
use crate::core::estimators::{CategoricalEstimator, Distribution, GaussianEstimator};
use crate::core::instances::{Instance, Value};
use crate::evaluation::{Evaluation, HoldoutEvaluator, Partition};
use rayon::prelude::*;

/// Naive Bayes estimator bound to a borrowed labeled table.
///
/// A freshly bound estimator has an empty partition; call
/// [`set_default_partition`](Self::set_default_partition) or
/// [`set_partition`](Self::set_partition) before [`fit`](Self::fit).
pub struct NaiveBayes<'a> {
    table: &'a dyn LabeledTable,
    class_index: usize,
    num_classes: usize,
    use_all_attributes: bool,
    selected_attributes: Vec<usize>,
    partition: Partition,
    params: NaiveBayesParams,
}

impl<'a> NaiveBayes<'a> {
    pub fn bind(
        table: &'a dyn LabeledTable,
        class_index: usize,
        use_all_attributes: bool,
    ) -> Result<Self> {
        let attributes = table.number_of_attributes();
        let class_attribute = table.attribute_at_index(class_index).ok_or(
            PreconditionViolation::ClassIndexOutOfRange {
                index: class_index,
                attributes,
            },
        )?;
        let num_classes = match class_attribute {
            Attribute::Nominal(a) => a.cardinality(),
            other => {
                return Err(PreconditionViolation::ClassAttributeNotNominal {
                    index: class_index,
                    name: other.name().to_string(),
                    kind: other.kind(),
                }
                .into());
            }
        };
        if num_classes == 0 {
            return Err(PreconditionViolation::NoClasses.into());
        }

        Ok(Self {
            table,
            class_index,
            num_classes,
            use_all_attributes,
            selected_attributes: Vec::new(),
            partition: Partition::empty(),
            params: NaiveBayesParams::default(),
        })
    }

    pub fn with_params(mut self, params: NaiveBayesParams) -> Result<Self> {
        params.check()?;
        self.params = params;
        Ok(self)
    }

    pub fn table(&self) -> &'a dyn LabeledTable {
        self.table
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn number_of_classes(&self) -> usize {
        self.num_classes
    }

    pub fn params(&self) -> &NaiveBayesParams {
        &self.params
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Train and test both become the whole table.
    pub fn set_default_partition(&mut self) {
        self.partition = Partition::full(self.table.number_of_instances());
    }

    pub fn set_partition(&mut self, partition: Partition) -> Result<()> {
        self.partition = Partition::new(
            partition.train().to_vec(),
            partition.test().to_vec(),
            self.table.number_of_instances(),
        )?;
        Ok(())
    }

    /// Restricts the predictors used when `use_all_attributes` is false.
    pub fn select_attributes<I>(&mut self, indices: I) -> Result<()>
    where
        I: IntoIterator<Item = usize>,
    {
        let attributes = self.table.number_of_attributes();
        let mut selected = Vec::new();
        for index in indices {
            if index >= attributes {
                return Err(
                    PreconditionViolation::AttributeIndexOutOfRange { index, attributes }.into(),
                );
            }
            if index == self.class_index {
                return Err(PreconditionViolation::ClassAttributeSelected { index }.into());
            }
            selected.push(index);
        }
        selected.sort_unstable();
        selected.dedup();
        self.selected_attributes = selected;
        Ok(())
    }

    /// Ascending indices of the attributes the model conditions on.
    pub fn predictive_attributes(&self) -> Vec<usize> {
        if self.use_all_attributes {
            (0..self.table.number_of_attributes())
                .filter(|&i| i != self.class_index)
                .collect()
        } else {
            self.selected_attributes.clone()
        }
    }

    /// Estimates priors and every conditional distribution from the training
    /// partition. Any error discards the whole model.
    pub fn fit(&self) -> Result<NaiveBayesModel> {
        self.partition.require_non_empty()?;
        if self.params.validate {
            self.partition.check_unique()?;
        }
        if !self.use_all_attributes && self.selected_attributes.is_empty() {
            return Err(PreconditionViolation::NoPredictiveAttributes.into());
        }

        log::info!(
            "training naive bayes on {} instances ({} classes)",
            self.partition.train().len(),
            self.num_classes
        );

        let mut distributions = DistributionTable::init(self)?;
        let rows_by_class = self.rows_by_class()?;

        let train_size = self.partition.train().len() as f64;
        let mut priors = Vec::with_capacity(self.num_classes);
        let mut warnings = Vec::new();
        for (class, rows) in rows_by_class.iter().enumerate() {
            if rows.is_empty() {
                let warning = FitWarning::EmptyClass {
                    class,
                    name: self.class_name(class),
                };
                log::warn!("{warning}");
                warnings.push(warning);
            }
            priors.push(rows.len() as f64 / train_size);
        }

        // Empty classes are never scored past their zero prior.
        let cells: Vec<(usize, usize)> = (0..self.num_classes)
            .filter(|&c| !rows_by_class[c].is_empty())
            .flat_map(|c| distributions.attributes().iter().map(move |&a| (c, a)))
            .collect();

        let fit_one = |&(class, attribute): &(usize, usize)| {
            self.fit_cell(class, attribute, &rows_by_class[class])
        };
        let fitted: Vec<Result<Distribution>> = if self.params.parallel {
            cells.par_iter().map(fit_one).collect()
        } else {
            cells.iter().map(fit_one).collect()
        };

        for (&(class, attribute), distribution) in cells.iter().zip(fitted) {
            if let Some(cell) = distributions.get_mut(class, attribute) {
                *cell = distribution?;
            }
        }

        let class_counts = rows_by_class.iter().map(Vec::len).collect();
        let model = NaiveBayesModel::new(
            self.table.number_of_attributes(),
            priors,
            class_counts,
            distributions,
            warnings,
        );
        if self.params.validate {
            model.check_consistency()?;
        }

        log::info!(
            "naive bayes fitted: {} cells, {} warnings",
            cells.len(),
            model.warnings().len()
        );
        Ok(model)
    }

    /// Scores the test partition with `model`.
    pub fn evaluate(&self, model: &NaiveBayesModel) -> Result<Evaluation> {
        HoldoutEvaluator::new(self.table, self.class_index).evaluate(model, &self.partition)
    }

    fn instance(&self, index: usize) -> Result<&'a dyn Instance> {
        self.table.instance_at_index(index).ok_or_else(|| {
            PreconditionViolation::InstanceIndexOutOfRange {
                index,
                count: self.table.number_of_instances(),
            }
            .into()
        })
    }

    /// Training indices grouped by known label.
    fn rows_by_class(&self) -> Result<Vec<Vec<usize>>> {
        let mut rows = vec![Vec::new(); self.num_classes];
        for &index in self.partition.train() {
            match self.instance(index)?.value_at_index(self.class_index) {
                Some(Value::Nominal(code)) if *code < self.num_classes => rows[*code].push(index),
                Some(Value::Nominal(code)) => {
                    return Err(ClassifierError::InvalidCategory {
                        code: *code,
                        cardinality: self.num_classes,
                    });
                }
                Some(Value::Missing) | None => {}
                Some(other) => {
                    return Err(ClassifierError::ValueTypeMismatch {
                        expected: AttributeKind::Nominal,
                        found: other.clone(),
                    });
                }
            }
        }
        Ok(rows)
    }

    fn fit_cell(&self, class: usize, attribute: usize, rows: &[usize]) -> Result<Distribution> {
        let descriptor = self.table.attribute_at_index(attribute).ok_or(
            PreconditionViolation::AttributeIndexOutOfRange {
                index: attribute,
                attributes: self.table.number_of_attributes(),
            },
        )?;

        let distribution = match descriptor {
            Attribute::Numeric(_) => {
                let mut values = Vec::with_capacity(rows.len());
                for &row in rows {
                    match self.instance(row)?.value_at_index(attribute) {
                        Some(Value::Numeric(x)) if x.is_finite() => values.push(*x),
                        Some(Value::Numeric(x)) => {
                            return Err(ClassifierError::NonFiniteValue {
                                attribute,
                                value: *x,
                            });
                        }
                        Some(Value::Missing) | None => {}
                        Some(other) => return Err(mismatch(AttributeKind::Numeric, other)),
                    }
                }
                if values.is_empty() {
                    return Err(self.no_observations(class, attribute, descriptor));
                }
                let gaussian = GaussianEstimator::fit(&values, self.params.var_smoothing);
                log::debug!(
                    "class {class} attribute {attribute}: mean {} variance {} over {} values",
                    gaussian.mean(),
                    gaussian.variance(),
                    gaussian.count()
                );
                Distribution::Gaussian(gaussian)
            }
            Attribute::Nominal(nominal) => {
                let cardinality = nominal.cardinality();
                let mut counts = vec![0usize; cardinality];
                for &row in rows {
                    match self.instance(row)?.value_at_index(attribute) {
                        Some(Value::Nominal(code)) if *code < cardinality => counts[*code] += 1,
                        Some(Value::Nominal(code)) => {
                            return Err(ClassifierError::InvalidCategory {
                                code: *code,
                                cardinality,
                            });
                        }
                        Some(Value::Missing) | None => {}
                        Some(other) => return Err(mismatch(AttributeKind::Nominal, other)),
                    }
                }
                let categorical = CategoricalEstimator::fit(&counts)
                    .ok_or_else(|| self.no_observations(class, attribute, descriptor))?;
                log::debug!(
                    "class {class} attribute {attribute}: counts {:?}, smoothed {}",
                    categorical.counts(),
                    categorical.is_smoothed()
                );
                Distribution::Categorical(categorical)
            }
            Attribute::String(a) => {
                return Err(ConfigurationError::UnsupportedAttributeType {
                    index: attribute,
                    name: a.name.clone(),
                    kind: AttributeKind::String,
                }
                .into());
            }
        };
        Ok(distribution)
    }

    fn class_name(&self, class: usize) -> String {
        self.table
            .class_label_name(self.class_index, class)
            .unwrap_or("?")
            .to_string()
    }

    fn no_observations(
        &self,
        class: usize,
        attribute: usize,
        descriptor: &Attribute,
    ) -> ClassifierError {
        ConfigurationError::NoObservations {
            class,
            class_name: self.class_name(class),
            attribute,
            attribute_name: descriptor.name().to_string(),
        }
        .into()
    }
}

fn mismatch(expected: AttributeKind, found: &Value) -> ClassifierError {
    ClassifierError::ValueTypeMismatch {
        expected,
        found: found.clone(),
    }
}
