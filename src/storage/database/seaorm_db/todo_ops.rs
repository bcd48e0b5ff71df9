use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, todo};
use super::insert::SeaOrmInsert;
use super::types::SeaOrmDatabase;
use crate::core::models::{Todo, UpdateTodo};
use crate::storage::traits::{InsertStatement, TodoStore};

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            completed: model.completed,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl TodoStore for SeaOrmDatabase {
    async fn prepare_insert(&self) -> std::result::Result<Box<dyn InsertStatement>, DbErr> {
        let tx = self.db.begin().await?;
        Ok(Box::new(SeaOrmInsert::new(tx, self.backend)))
    }

    async fn list_todos(&self) -> std::result::Result<Vec<Todo>, DbErr> {
        let models = entities::Todo::find()
            .order_by_desc(todo::Column::CreatedAt)
            .order_by_desc(todo::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Todo::from).collect())
    }

    async fn create_todo(&self, title: &str) -> std::result::Result<Todo, DbErr> {
        debug!("Creating todo: {}", title);

        let active_model = todo::ActiveModel {
            title: Set(title.to_owned()),
            completed: Set(false),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        let model = entities::Todo::insert(active_model)
            .exec_with_returning(&self.db)
            .await?;

        Ok(model.into())
    }

    async fn update_todo(
        &self,
        id: i64,
        update: &UpdateTodo,
    ) -> std::result::Result<bool, DbErr> {
        debug!("Updating todo {}", id);

        let result = entities::Todo::update_many()
            .col_expr(todo::Column::Title, Expr::value(update.title.clone()))
            .col_expr(todo::Column::Completed, Expr::value(update.completed))
            .filter(todo::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_todo(&self, id: i64) -> std::result::Result<bool, DbErr> {
        debug!("Deleting todo {}", id);

        let result = entities::Todo::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn health_check(&self) -> std::result::Result<(), DbErr> {
        self.ping().await
    }
}
