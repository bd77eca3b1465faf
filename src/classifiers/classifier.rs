use crate::classifiers::error::{ClassifierError, PreconditionViolation, Result};
use crate::core::instances::Instance;

/// Outcome of the argmax decision rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class: usize,
    pub score: f64,
}

/// A fitted model that ranks class codes `0..number_of_classes()` for an
/// instance.
pub trait Classifier {
    fn number_of_classes(&self) -> usize;

    /// Unnormalized ranking score of `class` for `instance`; higher is better.
    fn score(&self, class: usize, instance: &dyn Instance) -> Result<f64>;

    fn scores(&self, instance: &dyn Instance) -> Result<Vec<f64>> {
        (0..self.number_of_classes())
            .map(|class| self.score(class, instance))
            .collect()
    }

    /// Picks the class with the highest score. Ties keep the lowest class code,
    /// and so does a row where every score is `-inf`. A NaN score is an error.
    fn classify(&self, instance: &dyn Instance) -> Result<Prediction> {
        let mut best: Option<Prediction> = None;
        for class in 0..self.number_of_classes() {
            let score = self.score(class, instance)?;
            if score.is_nan() {
                return Err(ClassifierError::UndefinedScore { class });
            }
            match best {
                Some(current) if !(score > current.score) => {}
                _ => best = Some(Prediction { class, score }),
            }
        }
        best.ok_or_else(|| PreconditionViolation::NoClasses.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::DenseInstance;

    struct Fixed(Vec<f64>);

    impl Classifier for Fixed {
        fn number_of_classes(&self) -> usize {
            self.0.len()
        }

        fn score(&self, class: usize, _instance: &dyn Instance) -> Result<f64> {
            Ok(self.0[class])
        }
    }

    fn any_instance() -> DenseInstance {
        DenseInstance::new(vec![])
    }

    #[test]
    fn picks_maximum() {
        let p = Fixed(vec![-3.0, -1.0, -2.0]).classify(&any_instance()).unwrap();
        assert_eq!(p, Prediction { class: 1, score: -1.0 });
    }

    #[test]
    fn ties_keep_first_class() {
        let p = Fixed(vec![-2.0, -1.0, -1.0]).classify(&any_instance()).unwrap();
        assert_eq!(p.class, 1);
    }

    #[test]
    fn all_negative_infinity_selects_class_zero() {
        let p = Fixed(vec![f64::NEG_INFINITY; 3])
            .classify(&any_instance())
            .unwrap();
        assert_eq!(p.class, 0);
        assert_eq!(p.score, f64::NEG_INFINITY);
    }

    #[test]
    fn negative_infinity_never_beats_finite() {
        let p = Fixed(vec![f64::NEG_INFINITY, -1e300])
            .classify(&any_instance())
            .unwrap();
        assert_eq!(p.class, 1);
    }

    #[test]
    fn no_classes_is_an_error() {
        let err = Fixed(vec![]).classify(&any_instance()).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::Precondition(PreconditionViolation::NoClasses)
        );
    }

    #[test]
    fn nan_score_is_an_error_wherever_it_appears() {
        for scores in [vec![f64::NAN, -1.0], vec![-1.0, f64::NAN]] {
            let class = scores.iter().position(|s| s.is_nan()).unwrap();
            let err = Fixed(scores).classify(&any_instance()).unwrap_err();
            assert_eq!(err, ClassifierError::UndefinedScore { class });
        }
    }
}
