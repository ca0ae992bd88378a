//! Account service: generic CRUD shared by all five account kinds.

use assetdesk_domain::account::{AccountKind, AccountRecord};
use assetdesk_domain::error::{AssetDeskError, ValidationError};
use assetdesk_domain::id::EmployeeId;

use crate::ports::AccountRepository;

/// Application service for caller-shaped account rows.
pub struct AccountService<R> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert an account row whose columns are the record's keys.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAccountRecord`] when the record has no
    /// keys, or a storage error (e.g. an unknown column) from the repository.
    #[tracing::instrument(skip(self, record), fields(columns = record.len()))]
    pub async fn create_account(
        &self,
        kind: AccountKind,
        record: AccountRecord,
    ) -> Result<(), AssetDeskError> {
        ensure_columns(&record)?;
        self.repo.create(kind, record).await
    }

    /// Look up the account of `kind` owned by an employee.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_account(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
    ) -> Result<Option<AccountRecord>, AssetDeskError> {
        self.repo.get_by_user(kind, user_id).await
    }

    /// List every account of `kind` with its owner's name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_accounts(
        &self,
        kind: AccountKind,
    ) -> Result<Vec<AccountRecord>, AssetDeskError> {
        self.repo.get_all(kind).await
    }

    /// Set every column named in the record on the employee's account.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyAccountRecord`] when the record has no
    /// keys, or a storage error from the repository.
    #[tracing::instrument(skip(self, record), fields(columns = record.len()))]
    pub async fn update_account(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
        record: AccountRecord,
    ) -> Result<(), AssetDeskError> {
        ensure_columns(&record)?;
        self.repo.update(kind, user_id, record).await
    }

    /// Delete the account of `kind` owned by an employee.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_account(
        &self,
        kind: AccountKind,
        user_id: EmployeeId,
    ) -> Result<(), AssetDeskError> {
        self.repo.delete(kind, user_id).await
    }
}

fn ensure_columns(record: &AccountRecord) -> Result<(), ValidationError> {
    if record.is_empty() {
        return Err(ValidationError::EmptyAccountRecord);
    }
    Ok(())
}
