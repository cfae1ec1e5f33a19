//! Request extractors.

mod account_json;
pub use account_json::AccountJson;
