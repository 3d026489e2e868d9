//! # XPNS Common Library
//!
//! Shared code for the XPNS expense logger:
//! - Expense domain types (draft, category, patch, submission result)
//! - Submission error taxonomy
//! - Configuration loading and endpoint resolution

pub mod config;
pub mod error;
pub mod expense;

pub use error::{Error, Result, SubmitError};
pub use expense::{Category, DraftPatch, ExpenseDraft, SubmissionResult};
