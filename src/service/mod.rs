//! Account service, its store seam, and write validation.

mod accounts;
mod crud;
mod validation;
pub use accounts::AccountService;
pub use crud::{AccountStore, SqliteAccountStore};
pub use validation::{FieldRules, FieldViolation, RequestValidator, Rule, ACCOUNT_RULES};
