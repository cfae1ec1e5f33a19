//! Account record as stored, and the writable fields a request carries.

use chrono::NaiveDateTime;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One stored credential set.
///
/// The passphrase is persisted and returned in plaintext. This is a known
/// weakness of the stored format and is kept as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub platform: String,
    pub url: String,
    pub identity: String,
    pub passphrase: String,
    pub notes: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

/// Mutable fields of an account, as decoded from a create or update body.
///
/// Decoding is lenient about keys and strict about values:
/// - keys match field names case-insensitively (`URL`, `Platform`);
/// - a repeated key overwrites the earlier value;
/// - `null` leaves the field as it was, so a missing field stays empty and
///   validation can name it;
/// - unknown keys, including `id` and timestamps, are ignored;
/// - a non-string value for a known field is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccountInput {
    pub platform: String,
    pub url: String,
    pub identity: String,
    pub passphrase: String,
    pub notes: String,
}

impl AccountInput {
    /// Field values in validation order, keyed by their JSON names.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("platform", self.platform.as_str()),
            ("url", self.url.as_str()),
            ("identity", self.identity.as_str()),
            ("passphrase", self.passphrase.as_str()),
            ("notes", self.notes.as_str()),
        ]
    }
}

impl AccountInput {
    fn slot(&mut self, key: &str) -> Option<&mut String> {
        // Unicode folds that land on ASCII letters used in field names.
        let folded: String = key
            .chars()
            .map(|c| match c {
                '\u{017F}' => 's',
                '\u{212A}' => 'k',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        match folded.as_str() {
            "platform" => Some(&mut self.platform),
            "url" => Some(&mut self.url),
            "identity" => Some(&mut self.identity),
            "passphrase" => Some(&mut self.passphrase),
            "notes" => Some(&mut self.notes),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for AccountInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AccountInputVisitor)
    }
}

struct AccountInputVisitor;

impl<'de> Visitor<'de> for AccountInputVisitor {
    type Value = AccountInput;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an account object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<AccountInput, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = AccountInput::default();
        while let Some(key) = map.next_key::<String>()? {
            match input.slot(&key) {
                Some(slot) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *slot = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_decode_empty() {
        let input: AccountInput =
            serde_json::from_str(r#"{"platform":"GitHub","url":null,"id":42}"#).unwrap();
        assert_eq!(input.platform, "GitHub");
        assert_eq!(input.url, "");
        assert_eq!(input.notes, "");
    }

    #[test]
    fn non_string_field_is_rejected() {
        assert!(serde_json::from_str::<AccountInput>(r#"{"platform":5}"#).is_err());
        assert!(serde_json::from_str::<AccountInput>(r#"{"URL":true}"#).is_err());
        assert!(serde_json::from_str::<AccountInput>(r#"["GitHub"]"#).is_err());
        assert!(serde_json::from_str::<AccountInput>("null").is_err());
    }

    #[test]
    fn keys_match_case_insensitively() {
        let input: AccountInput = serde_json::from_str(
            r#"{"Platform":"GitHub","URL":"https://github.com","IDENTITY":"octo","PassPhrase":"testpass123","nOtEs":"n"}"#,
        )
        .unwrap();
        assert_eq!(input.platform, "GitHub");
        assert_eq!(input.url, "https://github.com");
        assert_eq!(input.identity, "octo");
        assert_eq!(input.passphrase, "testpass123");
        assert_eq!(input.notes, "n");
    }

    #[test]
    fn repeated_keys_last_value_wins() {
        let input: AccountInput =
            serde_json::from_str(r#"{"url":"https://a.example","URL":"https://b.example","notes":"x","notes":null}"#)
                .unwrap();
        assert_eq!(input.url, "https://b.example");
        assert_eq!(input.notes, "x");
    }

    #[test]
    fn account_serializes_camel_case() {
        let ts = NaiveDateTime::parse_from_str("2024-05-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let account = Account {
            id: 1,
            platform: "GitHub".into(),
            url: "https://github.com".into(),
            identity: "octo".into(),
            passphrase: "hunter2hunter2".into(),
            notes: String::new(),
            created_at: ts,
            updated_at: ts,
        };
        let v = serde_json::to_value(&account).unwrap();
        assert_eq!(v["createdAt"], "2024-05-01T12:00:00");
        assert_eq!(v["updatedAt"], "2024-05-01T12:00:00");
        assert_eq!(v["identity"], "octo");
    }
}
