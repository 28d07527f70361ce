//! The validation action contract

use ward_config::{Config, IssueContext};
use ward_ir::Dataset;

/// An atomic, stateless check over values of type `T`.
///
/// Actions never fail for bad input: a failed check is reported by appending
/// an issue to the dataset. Actions skip their check when the dataset is no
/// longer typed and never clear the typed flag themselves.
pub trait ValidationAction<T>: IssueContext + Send + Sync {
    /// Whether running the action suspends; always false for this family
    fn is_async(&self) -> bool {
        false
    }

    /// Inspect the dataset and return it, possibly with a new issue
    fn run(&self, dataset: Dataset<T>, config: &Config) -> Dataset<T>;
}

/// An action behind a box, as stored in pipelines
pub type BoxedAction<T> = Box<dyn ValidationAction<T>>;

/// Run `actions` in order, threading the dataset from one to the next
pub fn run_all<T>(
    actions: &[BoxedAction<T>],
    dataset: Dataset<T>,
    config: &Config,
) -> Dataset<T> {
    actions
        .iter()
        .fold(dataset, |dataset, action| action.run(dataset, config))
}
