//! Transaction guard with rollback-on-drop semantics.

use jobgrid_core::AppError;
use sqlx::{PgPool, Postgres, Transaction};

/// Wraps a sqlx transaction so an early return (or panic) rolls back
/// automatically when the guard is dropped. Call [`commit`](Self::commit)
/// to make the work permanent.
pub struct TransactionGuard {
    tx: Option<Transaction<'static, Postgres>>,
}

impl TransactionGuard {
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(TransactionGuard { tx: Some(tx) })
    }

    /// Access the underlying transaction for query execution.
    pub fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, AppError> {
        self.tx
            .as_mut()
            .ok_or_else(|| AppError::Internal("Transaction already consumed".to_string()))
    }

    pub async fn commit(mut self) -> Result<(), AppError> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        Ok(())
    }
}

impl Drop for TransactionGuard {
    fn drop(&mut self) {
        if self.tx.is_some() {
            // sqlx rolls the transaction back when it is dropped.
            tracing::debug!("Transaction guard dropped without commit; rolling back");
        }
    }
}
