//! Form State Holder
//!
//! Owns the single in-progress expense draft for the form's editing
//! session. Pure in-memory mutation: no I/O, no side effects. The
//! submission pipeline receives the draft as an explicit argument and
//! never reaches into this state itself.

use xpns_common::{DraftPatch, ExpenseDraft};

/// Holds the current draft between edits.
///
/// Lifecycle: created with the default draft when the service starts,
/// mutated field-wise as the user edits, and reset to the default draft
/// after a successful submission. Failed submissions leave the draft
/// untouched so the user can correct and resubmit.
#[derive(Debug, Default)]
pub struct FormState {
    draft: ExpenseDraft,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current draft
    pub fn current(&self) -> &ExpenseDraft {
        &self.draft
    }

    /// Replace exactly the fields present in the patch, leaving the rest
    /// untouched. Field types make structural corruption impossible: a
    /// patch cannot carry an out-of-enumeration category.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(cost) = patch.cost {
            self.draft.cost = cost;
        }
        if let Some(category) = patch.category {
            self.draft.category = category;
        }
        if let Some(what) = patch.what {
            self.draft.what = what;
        }
        if let Some(location) = patch.r#where {
            self.draft.r#where = location;
        }
        if let Some(why) = patch.why {
            self.draft.why = why;
        }
        if let Some(receipt) = patch.receipt {
            self.draft.receipt = receipt;
        }
    }

    /// Replace the draft with the default instance
    pub fn reset(&mut self) {
        self.draft = ExpenseDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpns_common::Category;

    #[test]
    fn starts_with_default_draft() {
        let form = FormState::new();
        assert_eq!(form.current(), &ExpenseDraft::default());
    }

    #[test]
    fn apply_replaces_only_present_fields() {
        let mut form = FormState::new();

        form.apply(DraftPatch {
            cost: Some(12.5),
            ..DraftPatch::default()
        });

        assert_eq!(form.current().cost, 12.5);
        assert_eq!(form.current().category, Category::Business);
        assert!(form.current().what.is_empty());

        form.apply(DraftPatch {
            category: Some(Category::Food),
            what: Some("lunch".to_string()),
            ..DraftPatch::default()
        });

        // Earlier edit survives later patches that do not mention it
        assert_eq!(form.current().cost, 12.5);
        assert_eq!(form.current().category, Category::Food);
        assert_eq!(form.current().what, "lunch");
    }

    #[test]
    fn apply_can_clear_a_field() {
        let mut form = FormState::new();
        form.apply(DraftPatch {
            what: Some("lunch".to_string()),
            ..DraftPatch::default()
        });
        form.apply(DraftPatch {
            what: Some(String::new()),
            ..DraftPatch::default()
        });

        assert!(form.current().what.is_empty());
    }

    #[test]
    fn reset_restores_default_draft() {
        let mut form = FormState::new();
        form.apply(DraftPatch {
            cost: Some(42.0),
            category: Some(Category::Base),
            what: Some("tools".to_string()),
            r#where: Some("hardware store".to_string()),
            why: Some("repairs".to_string()),
            receipt: Some("IMG_2041.jpg".to_string()),
        });

        form.reset();

        assert_eq!(form.current(), &ExpenseDraft::default());
    }
}
