//! The schema contract

use std::sync::Arc;
use ward_config::{Config, get_global_config};
use ward_ir::{Dataset, IssueKind};

/// Narrows a raw [`ward_ir::Value`] to a target type.
///
/// A schema receives an untyped dataset, marks it typed when the value
/// conforms and otherwise appends a schema issue. `config` is the caller's
/// configuration; `None` means the global configuration applies.
pub trait Schema: Send + Sync {
    /// Always [`IssueKind::Schema`] for plain schemas
    fn kind(&self) -> IssueKind {
        IssueKind::Schema
    }

    /// Discriminant of the schema (e.g. `string`)
    fn schema_type(&self) -> &'static str;

    /// Description of the accepted input
    fn expects(&self) -> &str;

    /// Whether validation suspends; always false for this family
    fn is_async(&self) -> bool {
        false
    }

    /// Validate `dataset` under the caller's configuration
    fn validate(&self, dataset: Dataset, config: Option<&Config>) -> Dataset;

    /// Validate under a configuration that already includes the overrides
    /// collected by [`Schema::collect_overrides`].
    fn validate_resolved(&self, dataset: Dataset, config: &Config) -> Dataset {
        self.validate(dataset, Some(config))
    }

    /// Push configuration overrides this schema applies, innermost first
    fn collect_overrides<'a>(&'a self, _overrides: &mut Vec<&'a Config>) {}
}

/// Run `f` with the caller's config, or the global one when there is none
pub(crate) fn with_config<R>(config: Option<&Config>, f: impl FnOnce(&Config) -> R) -> R {
    match config {
        Some(config) => f(config),
        None => {
            let global = get_global_config();
            f(global.as_ref())
        }
    }
}

macro_rules! forward_schema {
    ($($ty:ty),*) => {$(
        impl<S: Schema + ?Sized> Schema for $ty {
            fn kind(&self) -> IssueKind {
                (**self).kind()
            }

            fn schema_type(&self) -> &'static str {
                (**self).schema_type()
            }

            fn expects(&self) -> &str {
                (**self).expects()
            }

            fn is_async(&self) -> bool {
                (**self).is_async()
            }

            fn validate(&self, dataset: Dataset, config: Option<&Config>) -> Dataset {
                (**self).validate(dataset, config)
            }

            fn validate_resolved(&self, dataset: Dataset, config: &Config) -> Dataset {
                (**self).validate_resolved(dataset, config)
            }

            fn collect_overrides<'a>(&'a self, overrides: &mut Vec<&'a Config>) {
                (**self).collect_overrides(overrides);
            }
        }
    )*};
}

forward_schema!(&S, Box<S>, Arc<S>);
