//! Build-warning suppression.
//!
//! A [`WarningPolicy`] is a plain value carried by every descriptor. Deciding
//! whether a warning is suppressed depends only on the event and the policy
//! table, never on build order.

use indexmap::IndexMap;
use kiln_config::WarningOptions;

use crate::descriptor::TargetFamily;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Diagnostic raised by the bundling engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub code: String,
    /// Module that triggered the warning, when the engine knows it
    #[serde(default)]
    pub importer: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl WarningEvent {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            importer: None,
            message: message.into(),
        }
    }

    pub fn with_importer(mut self, importer: impl Into<String>) -> Self {
        self.importer = Some(importer.into());
        self
    }
}

impl fmt::Display for WarningEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(importer) = &self.importer {
            write!(f, " ({importer})")?;
        }
        Ok(())
    }
}

/// Named predicate over a warning event.
#[derive(Clone, Copy)]
pub struct WarningPredicate {
    name: &'static str,
    test: fn(&WarningEvent) -> bool,
}

impl WarningPredicate {
    pub const fn new(name: &'static str, test: fn(&WarningEvent) -> bool) -> Self {
        Self { name, test }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, event: &WarningEvent) -> bool {
        (self.test)(event)
    }
}

impl fmt::Debug for WarningPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WarningPredicate").field(&self.name).finish()
    }
}

impl PartialEq for WarningPredicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::fn_addr_eq(self.test, other.test)
    }
}

impl Eq for WarningPredicate {}

impl Serialize for WarningPredicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WarningPredicate", 1)?;
        state.serialize_field("predicate", self.name)?;
        state.end()
    }
}

/// How a recognized warning code is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodePolicy {
    Always(bool),
    When(WarningPredicate),
}

impl CodePolicy {
    fn suppresses(&self, event: &WarningEvent) -> bool {
        match self {
            CodePolicy::Always(suppress) => *suppress,
            CodePolicy::When(predicate) => predicate.matches(event),
        }
    }
}

/// Suppression rules attached to a descriptor.
///
/// Rules, in order:
/// 1. exact-code allowlist
/// 2. circular-dependency exception: importer path contains a listed
///    fragment (script targets only; stylesheet policies carry no fragments)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WarningPolicy {
    ignored_codes: IndexMap<String, CodePolicy>,
    circular_exceptions: Vec<String>,
}

impl WarningPolicy {
    /// Allowlist only, for targets without a module import graph.
    pub fn generic(options: &WarningOptions) -> Self {
        Self {
            ignored_codes: options
                .ignored_codes
                .iter()
                .map(|(code, suppress)| (code.clone(), CodePolicy::Always(*suppress)))
                .collect(),
            circular_exceptions: Vec::new(),
        }
    }

    /// Allowlist plus the circular-dependency exception.
    pub fn full(options: &WarningOptions) -> Self {
        Self {
            circular_exceptions: options.circular_exceptions.clone(),
            ..Self::generic(options)
        }
    }

    /// Policy attached to descriptors of `family`.
    pub fn for_family(family: TargetFamily, options: &WarningOptions) -> Self {
        match family {
            TargetFamily::Stylesheet => Self::generic(options),
            TargetFamily::Esm | TargetFamily::Umd => Self::full(options),
        }
    }

    /// Add or replace the policy for one code.
    pub fn with_code(mut self, code: impl Into<String>, policy: CodePolicy) -> Self {
        self.ignored_codes.insert(code.into(), policy);
        self
    }

    pub fn circular_exceptions(&self) -> &[String] {
        &self.circular_exceptions
    }

    pub fn code_policy(&self, code: &str) -> Option<&CodePolicy> {
        self.ignored_codes.get(code)
    }

    pub fn should_suppress(&self, event: &WarningEvent) -> bool {
        let by_code = self
            .ignored_codes
            .get(&event.code)
            .is_some_and(|policy| policy.suppresses(event));

        by_code || self.is_circular_exception(event)
    }

    /// Forward `event` to `report` unless it is suppressed.
    ///
    /// Returns whether the event was reported.
    pub fn handle(&self, event: &WarningEvent, report: impl FnOnce(&WarningEvent)) -> bool {
        if self.should_suppress(event) {
            tracing::trace!(code = %event.code, "warning suppressed");
            false
        } else {
            report(event);
            true
        }
    }

    fn is_circular_exception(&self, event: &WarningEvent) -> bool {
        let Some(importer) = event.importer.as_deref() else {
            return false;
        };
        self.circular_exceptions
            .iter()
            .any(|fragment| importer.contains(fragment.as_str()))
    }
}

/// Default reporting handler: emit the warning as a tracing event.
pub fn report_warning(event: &WarningEvent) {
    tracing::warn!(
        code = %event.code,
        importer = event.importer.as_deref().unwrap_or("-"),
        "{}",
        event.message
    );
}
