//! Expense domain types
//!
//! The draft is the single in-progress, unsaved expense record being
//! edited. It lives in memory only; losing the process loses the draft.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SubmitError;

/// Expense category, serialized lowercase on the wire.
///
/// The webhook keys row handling on the category name, so the set is
/// closed: deserializing any other string fails, which keeps a draft's
/// category structurally valid at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Food,
    Base,
}

impl Category {
    /// All categories, in the order the entry form offers them
    pub const ALL: [Category; 3] = [Category::Business, Category::Food, Category::Base];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Food => "food",
            Category::Base => "base",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Business
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutable expense record being composed.
///
/// A fresh draft starts at cost 0 with the first category and empty text
/// fields, and is replaced by a fresh default after a successful
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Expense amount; must be a positive finite number to submit
    pub cost: f64,
    pub category: Category,
    /// What was purchased
    pub what: String,
    /// Where it was purchased
    pub r#where: String,
    /// Why it was purchased
    pub why: String,
    /// Optional receipt note or URL; empty means absent
    #[serde(default)]
    pub receipt: String,
}

impl ExpenseDraft {
    /// Check the draft against the submission rules, first failure wins.
    ///
    /// Order: cost, then what, then where, then why. `category` always
    /// holds a valid value and `receipt` is unconstrained, so neither is
    /// checked. A failure here means no network call is attempted.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if !self.cost.is_finite() || self.cost <= 0.0 {
            return Err(SubmitError::InvalidCost);
        }
        if self.what.trim().is_empty() {
            return Err(SubmitError::MissingField("what"));
        }
        if self.r#where.trim().is_empty() {
            return Err(SubmitError::MissingField("where"));
        }
        if self.why.trim().is_empty() {
            return Err(SubmitError::MissingField("why"));
        }
        Ok(())
    }

    /// True iff `validate` would pass
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Partial draft update: applying a patch replaces exactly the fields
/// that are present and leaves the rest untouched.
///
/// Unknown fields are rejected at deserialization, so a misspelled field
/// name cannot silently drop an edit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftPatch {
    pub cost: Option<f64>,
    pub category: Option<Category>,
    pub what: Option<String>,
    pub r#where: Option<String>,
    pub why: Option<String>,
    pub receipt: Option<String>,
}

/// Outcome of one submission pipeline invocation.
///
/// No state is retained across invocations; the message is shown to the
/// user verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<SubmitError> for SubmissionResult {
    fn from(err: SubmitError) -> Self {
        Self::failure(err.to_string())
    }
}
