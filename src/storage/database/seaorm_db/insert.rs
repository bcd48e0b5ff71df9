use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseTransaction, DbBackend, DbErr, EntityTrait,
    QueryTrait, Statement,
};

use super::super::entities::todo;
use crate::storage::traits::{InsertReceipt, InsertStatement};

/// Single-row insert bound to one pooled connection.
///
/// The connection is held inside an open transaction; dropping the statement
/// without executing it rolls back and returns the connection to the pool.
pub struct SeaOrmInsert {
    tx: Option<DatabaseTransaction>,
    backend: DbBackend,
}

impl SeaOrmInsert {
    pub(super) fn new(tx: DatabaseTransaction, backend: DbBackend) -> Self {
        Self {
            tx: Some(tx),
            backend,
        }
    }

    fn build(&self, title: &str) -> Statement {
        let model = todo::ActiveModel {
            title: Set(title.to_owned()),
            completed: Set(false),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let mut insert = todo::Entity::insert(model);
        if self.backend.support_returning() {
            QueryTrait::query(&mut insert).returning_col(todo::Column::Id);
        }
        insert.build(self.backend)
    }
}

#[async_trait]
impl InsertStatement for SeaOrmInsert {
    async fn execute(&mut self, title: &str) -> Result<InsertReceipt, DbErr> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| DbErr::Custom("insert statement already executed".to_string()))?;
        let stmt = self.build(title);

        let receipt = if self.backend.support_returning() {
            InsertReceipt::from_returned_row(tx.query_one(stmt).await?)
        } else {
            InsertReceipt::from_last_insert_id(tx.execute(stmt).await?.last_insert_id())
        };

        tx.commit().await?;
        Ok(receipt)
    }
}
