//! Rule orchestration: fetch values once, run every rule, keep the failures.

use gridlint_value::Scalar;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::context::ValidationContext;
use crate::error::{ExpressionError, ExtractError};
use crate::result::ValidationResult;
use crate::rule::{Rule, RuleSpec};

/// Extraction collaborator: produces field values for one source.
///
/// Implementations read whatever backs the location map (a workbook, an
/// exported sheet, a test fixture) and return the values they could produce,
/// keyed by field name. Fields without a value are simply omitted; the
/// context reads them back as [`Scalar::Absent`]. An access failure must be
/// signalled as an [`ExtractError`], never as partial silently-wrong data.
pub trait FieldSource {
    /// Fetch values for the fields named by `field_locations` from the
    /// source identified by `source_id`.
    fn fetch(
        &self,
        source_id: &str,
        field_locations: &IndexMap<String, String>,
    ) -> Result<IndexMap<String, Scalar>, ExtractError>;
}

/// In-memory [`FieldSource`] over a fixed value map.
///
/// For tests and for callers that already hold their extracted values. The
/// source identifier is ignored; `fetch` returns the subset of held values
/// named by the location map.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    values: IndexMap<String, Scalar>,
}

impl StaticSource {
    pub fn new(values: IndexMap<String, Scalar>) -> Self {
        Self { values }
    }
}

impl FieldSource for StaticSource {
    fn fetch(
        &self,
        _source_id: &str,
        field_locations: &IndexMap<String, String>,
    ) -> Result<IndexMap<String, Scalar>, ExtractError> {
        Ok(field_locations
            .keys()
            .filter_map(|field| {
                self.values
                    .get(field)
                    .map(|value| (field.clone(), value.clone()))
            })
            .collect())
    }
}

/// An ordered rule set evaluated as a unit.
///
/// The engine is stateless across calls beyond the held rules, so one
/// instance can be shared and reused for any number of sources; `validate`
/// takes `&self` and writes nothing.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    rules: Vec<Rule>,
}

impl ValidationEngine {
    /// Create an engine over already-built rules, kept in the given order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Build an engine from raw rule records, validating every expression.
    ///
    /// The first malformed record aborts construction; a rule set either
    /// loads completely or not at all.
    pub fn from_specs(specs: Vec<RuleSpec>) -> Result<Self, ExpressionError> {
        let rules = specs
            .into_iter()
            .map(Rule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// The held rules, in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule against the values extracted for `source_id`.
    ///
    /// Extraction happens once, up front; a fetch failure aborts the run.
    /// Each rule is then evaluated exactly once in declaration order, with no
    /// short-circuiting after a failure, so one call surfaces the complete
    /// set of violations. The returned list holds only the failing results;
    /// an empty list means the source passed.
    pub fn validate(
        &self,
        source: &impl FieldSource,
        source_id: &str,
        field_locations: &IndexMap<String, String>,
    ) -> Result<Vec<ValidationResult>, ExtractError> {
        let values = source.fetch(source_id, field_locations)?;
        let context = ValidationContext::new(values, field_locations.clone());

        let mut failures = Vec::new();
        for rule in &self.rules {
            let result = rule.validate(&context);
            trace!(rule = rule.name(), valid = result.is_valid, "Rule evaluated");
            if !result.is_valid {
                failures.push(result);
            }
        }

        debug!(
            source = source_id,
            rules = self.rules.len(),
            failures = failures.len(),
            "Validation run finished"
        );
        Ok(failures)
    }
}
