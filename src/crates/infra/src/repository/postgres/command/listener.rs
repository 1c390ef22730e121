use super::db_data::listener::{ActiveModel, Entity};
use async_trait::async_trait;
use domain::listener::{Listener, ListenerError, ListenerRepository};
use domain::value::ListenerId;
use sea_orm::*;

#[derive(Clone)]
pub struct ListenerRepositoryImpl {
    db: DbConn,
}

impl ListenerRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ListenerRepository for ListenerRepositoryImpl {
    async fn find_by_id(&self, id: ListenerId) -> Result<Option<Listener>, ListenerError> {
        let result = Entity::find_by_id(id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| ListenerError::DbErr(e.to_string()))?;
        Ok(result.map(|model| model.into()))
    }

    async fn save(&self, listener: &Listener) -> Result<(), ListenerError> {
        let active_model: ActiveModel = listener.into();
        let exists = Entity::find_by_id(listener.id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| ListenerError::DbErr(e.to_string()))?
            .is_some();
        if exists {
            active_model
                .update(&self.db)
                .await
                .map_err(|e| ListenerError::DbErr(e.to_string()))?;
        } else {
            active_model
                .insert(&self.db)
                .await
                .map_err(|e| ListenerError::DbErr(e.to_string()))?;
        }
        Ok(())
    }
}
