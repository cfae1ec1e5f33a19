//! AccountService: validate-before-write sequencing over an injected store.

use crate::error::AccountError;
use crate::model::{Account, AccountInput};
use crate::service::crud::AccountStore;
use crate::service::validation::RequestValidator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub async fn create_account(&self, input: &AccountInput) -> Result<Account, AccountError> {
        RequestValidator::validate(input)?;
        let account = self.store.create(input).await?;
        tracing::info!(id = account.id, "account created");
        Ok(account)
    }

    pub async fn get_all_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.store.list_all().await
    }

    pub async fn get_account_by_id(&self, id: &str) -> Result<Account, AccountError> {
        let id = parse_id(id)?;
        self.store.get_by_id(id).await
    }

    /// Full replace; every required field must be supplied.
    pub async fn update_account(&self, id: &str, input: &AccountInput) -> Result<Account, AccountError> {
        let id = parse_id(id)?;
        RequestValidator::validate(input)?;
        let account = self.store.update(id, input).await?;
        tracing::info!(id, "account updated");
        Ok(account)
    }

    pub async fn delete_account(&self, id: &str) -> Result<(), AccountError> {
        let id = parse_id(id)?;
        self.store.delete(id).await?;
        tracing::info!(id, "account deleted");
        Ok(())
    }
}

fn parse_id(raw: &str) -> Result<i64, AccountError> {
    raw.parse::<i64>()
        .map_err(|_| AccountError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Store double that records calls and always fails with NotFound.
    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        fn record(&self, call: String) -> AccountError {
            self.calls.lock().unwrap().push(call);
            AccountError::NotFound
        }
    }

    #[async_trait]
    impl AccountStore for RecordingStore {
        async fn create(&self, _input: &AccountInput) -> Result<Account, AccountError> {
            Err(self.record("create".into()))
        }
        async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
            Err(self.record("list".into()))
        }
        async fn get_by_id(&self, id: i64) -> Result<Account, AccountError> {
            Err(self.record(format!("get {id}")))
        }
        async fn update(&self, id: i64, _input: &AccountInput) -> Result<Account, AccountError> {
            Err(self.record(format!("update {id}")))
        }
        async fn delete(&self, id: i64) -> Result<(), AccountError> {
            Err(self.record(format!("delete {id}")))
        }
    }

    fn service() -> (AccountService, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore::default());
        (AccountService::new(store.clone()), store)
    }

    fn valid() -> AccountInput {
        AccountInput {
            platform: "GitHub".into(),
            url: "https://github.com".into(),
            identity: "updateduser".into(),
            passphrase: "updatedpass123".into(),
            notes: "Updated test account".into(),
        }
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_store() {
        let (svc, store) = service();
        let input = AccountInput {
            platform: "GitHub".into(),
            ..Default::default()
        };
        let err = svc.create_account(&input).await.unwrap_err();
        assert!(matches!(err, AccountError::Validation(v) if v.field == "url"));
        let err = svc.update_account("1", &input).await.unwrap_err();
        assert!(matches!(err, AccountError::Validation(_)));
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_before_validation() {
        let (svc, store) = service();
        for id in ["abc", "", "1.5", "99999999999999999999"] {
            assert!(matches!(svc.get_account_by_id(id).await, Err(AccountError::InvalidId(_))));
            assert!(matches!(
                svc.update_account(id, &AccountInput::default()).await,
                Err(AccountError::InvalidId(_))
            ));
            assert!(matches!(svc.delete_account(id).await, Err(AccountError::InvalidId(_))));
        }
        assert!(store.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn not_found_propagates() {
        let (svc, store) = service();
        assert!(matches!(svc.get_account_by_id("999").await, Err(AccountError::NotFound)));
        assert!(matches!(svc.update_account("999", &valid()).await, Err(AccountError::NotFound)));
        assert!(matches!(svc.delete_account("999").await, Err(AccountError::NotFound)));
        assert_eq!(
            *store.calls.lock().unwrap(),
            vec!["get 999", "update 999", "delete 999"]
        );
    }
}
