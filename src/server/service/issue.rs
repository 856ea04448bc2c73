//! Issue recording.
//!
//! Creating an issue is the one operation in the system with a hard
//! consistency requirement: the issue row and the stock decrement must land
//! together or not at all, and two concurrent issues must never both succeed
//! when only one fits the remaining stock.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::issue::CreateIssueDto,
    server::{
        data::{
            inventory::{DecrementOutcome, InventoryRepository},
            issue::{IssueJoinedRow, IssueRepository},
        },
        error::{inventory::InventoryError, issue::IssueError, Error},
    },
};

/// Service enforcing the stock invariant while recording ammunition issues.
pub struct IssueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueService<'a> {
    /// Creates a new instance of [`IssueService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an ammunition issue against a stock lot.
    ///
    /// # Behavior
    /// - Rejects `issue_quantity <= 0` before touching storage.
    /// - Reads the lot outside the transaction for an early, user-facing
    ///   `NotFound`/`InsufficientStock`. This read is advisory only.
    /// - Inserts the issue row and decrements the lot inside one transaction.
    ///   The decrement's `quantity >= amount` guard is re-evaluated under the
    ///   row lock, so a concurrent issue that drained the lot after the
    ///   advisory read makes this one roll back rather than oversell.
    /// - Every failure after `begin()` rolls the whole unit back; the caller
    ///   never observes an issue row without its decrement or vice versa.
    ///
    /// # Returns
    /// - `Ok(issue_id)`: Both writes committed
    /// - `Err(Error::IssueError(InvalidQuantity))`: Non-positive quantity, no writes
    /// - `Err(Error::InventoryError(NotFound))`: Lot does not exist, no writes
    /// - `Err(Error::InventoryError(InsufficientStock))`: Lot holds too little, no writes
    /// - `Err(Error::DbErr(_))`: Storage failure, transaction rolled back
    pub async fn create_issue(&self, issue: &CreateIssueDto) -> Result<i32, Error> {
        if issue.issue_quantity <= 0 {
            return Err(IssueError::InvalidQuantity(issue.issue_quantity).into());
        }

        let inventory_repo = InventoryRepository::new(self.db);
        let lot = inventory_repo
            .get(issue.inventory_stock_id)
            .await?
            .ok_or(InventoryError::NotFound(issue.inventory_stock_id))?;

        if lot.quantity < issue.issue_quantity {
            return Err(InventoryError::InsufficientStock {
                stock_id: lot.id,
                requested: issue.issue_quantity,
            }
            .into());
        }

        let txn = self.db.begin().await?;

        let outcome = async {
            let record = IssueRepository::new(&txn).create(issue).await?;

            let decrement = InventoryRepository::new(&txn)
                .decrement_quantity(issue.inventory_stock_id, issue.issue_quantity)
                .await?;

            match decrement {
                DecrementOutcome::Applied => Ok(record.id),
                DecrementOutcome::Insufficient => {
                    Err(Error::from(InventoryError::InsufficientStock {
                        stock_id: issue.inventory_stock_id,
                        requested: issue.issue_quantity,
                    }))
                }
                DecrementOutcome::NotFound => Err(Error::from(InventoryError::NotFound(
                    issue.inventory_stock_id,
                ))),
            }
        }
        .await;

        match outcome {
            Ok(issue_id) => {
                txn.commit().await?;

                tracing::info!(
                    issue_id = %issue_id,
                    stock_id = %issue.inventory_stock_id,
                    quantity = %issue.issue_quantity,
                    "ammunition issue recorded"
                );

                Ok(issue_id)
            }
            Err(e) => {
                // Discards the issue insert along with the failed decrement
                txn.rollback().await?;

                Err(e)
            }
        }
    }

    pub async fn get_issue(&self, issue_id: i32) -> Result<entity::issue::Model, Error> {
        IssueRepository::new(self.db)
            .get(issue_id)
            .await?
            .ok_or_else(|| IssueError::NotFound(issue_id).into())
    }

    pub async fn list_issues(&self) -> Result<Vec<entity::issue::Model>, Error> {
        Ok(IssueRepository::new(self.db).get_all().await?)
    }

    pub async fn list_issues_joined(&self) -> Result<Vec<IssueJoinedRow>, Error> {
        Ok(IssueRepository::new(self.db).get_all_joined().await?)
    }

    /// Edits an issue record.
    ///
    /// Known limitation, kept deliberately: editing the quantity of an issue
    /// does NOT adjust the lot's on-hand count. Issue history and inventory
    /// are independently editable; callers that change a quantity must
    /// correct the lot through the inventory endpoints if they want the
    /// ledger to follow.
    pub async fn update_issue(
        &self,
        issue_id: i32,
        issue: &CreateIssueDto,
    ) -> Result<entity::issue::Model, Error> {
        IssueRepository::new(self.db)
            .update(issue_id, issue)
            .await?
            .ok_or_else(|| IssueError::NotFound(issue_id).into())
    }

    /// Deletes an issue record.
    ///
    /// Same limitation as [`Self::update_issue`]: the issued quantity is NOT
    /// returned to the lot.
    pub async fn delete_issue(&self, issue_id: i32) -> Result<(), Error> {
        let result = IssueRepository::new(self.db).delete(issue_id).await?;

        if result.rows_affected == 0 {
            return Err(IssueError::NotFound(issue_id).into());
        }

        Ok(())
    }
}
