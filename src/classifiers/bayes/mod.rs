mod distribution_table;
mod fit_warning;
mod naive_bayes;
mod naive_bayes_model;
mod params;

pub use distribution_table::DistributionTable;
pub use fit_warning::FitWarning;
pub use naive_bayes::NaiveBayes;
pub use naive_bayes_model::NaiveBayesModel;
pub use params::NaiveBayesParams;
