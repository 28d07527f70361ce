//! Configuration wrapper for schemas

use crate::schema::Schema;
use tracing::trace;
use ward_config::{Config, get_global_config};
use ward_ir::{Dataset, IssueKind};

/// A schema validated under a fixed configuration override.
///
/// The effective configuration is the caller's (or the global one) with the
/// override merged on top. The wrapped schema is only borrowed during
/// validation and is never changed. Directly stacked wrappers apply their
/// overrides innermost first, so the outermost override wins.
#[derive(Debug, Clone)]
pub struct Configured<S> {
    schema: S,
    config: Config,
}

/// Wrap `schema` so it always validates with `config` merged over the caller's
#[must_use]
pub fn configure<S: Schema>(schema: S, config: Config) -> Configured<S> {
    Configured { schema, config }
}

impl<S> Configured<S> {
    /// The wrapped schema
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// The override this wrapper applies
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<S: Schema> Configured<S> {
    /// Resolve the configuration validation runs under
    #[must_use]
    pub fn effective_config(&self, caller: Option<&Config>) -> Config {
        let base = caller
            .cloned()
            .unwrap_or_else(|| get_global_config().as_ref().clone());
        let mut overrides = Vec::new();
        self.collect_overrides(&mut overrides);
        overrides
            .into_iter()
            .fold(base, |effective, config| effective.merge(config))
    }
}

impl<S: Schema> Schema for Configured<S> {
    fn kind(&self) -> IssueKind {
        self.schema.kind()
    }

    fn schema_type(&self) -> &'static str {
        self.schema.schema_type()
    }

    fn expects(&self) -> &str {
        self.schema.expects()
    }

    fn is_async(&self) -> bool {
        self.schema.is_async()
    }

    fn validate(&self, dataset: Dataset, config: Option<&Config>) -> Dataset {
        let effective = self.effective_config(config);
        trace!(lang = ?effective.lang, "Validating with configured schema");
        self.schema.validate_resolved(dataset, &effective)
    }

    fn validate_resolved(&self, dataset: Dataset, config: &Config) -> Dataset {
        self.schema.validate_resolved(dataset, config)
    }

    fn collect_overrides<'a>(&'a self, overrides: &mut Vec<&'a Config>) {
        self.schema.collect_overrides(overrides);
        overrides.push(&self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string;
    use ward_ir::Value;

    #[test]
    fn test_override_wins_over_caller() {
        let schema = configure(string(None), Config::new().lang("de"));
        let caller = Config::new().lang("en").abort_early(true);

        let effective = schema.effective_config(Some(&caller));
        assert_eq!(effective.lang.as_deref(), Some("de"));
        assert_eq!(effective.abort_early, Some(true));
    }

    #[test]
    fn test_outermost_override_wins() {
        let inner = configure(string(None), Config::new().lang("de").abort_pipe_early(true));
        let outer = configure(inner, Config::new().lang("fr"));

        let effective = outer.effective_config(Some(&Config::new().lang("en")));
        assert_eq!(effective.lang.as_deref(), Some("fr"));
        assert_eq!(effective.abort_pipe_early, Some(true));

        let dataset = outer.validate(Dataset::new(Value::Null), Some(&Config::new()));
        assert_eq!(dataset.issues[0].lang.as_deref(), Some("fr"));
    }

    #[test]
    fn test_delegates_metadata() {
        let schema = configure(string(None), Config::new());
        assert_eq!(schema.schema_type(), "string");
        assert_eq!(schema.expects(), "string");
        assert_eq!(schema.kind(), IssueKind::Schema);
        assert!(schema.config().lang.is_none());
    }
}
