use super::db_data::active_playback::{ActiveModel, Column, Entity};
use async_trait::async_trait;
use domain::playback::{ActivePlayback, ActivePlaybackRepository, PlaybackError};
use domain::value::ListenerId;
use sea_orm::*;

#[derive(Clone)]
pub struct ActivePlaybackRepositoryImpl {
    db: DbConn,
}

impl ActivePlaybackRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivePlaybackRepository for ActivePlaybackRepositoryImpl {
    async fn find_by_listener_id(
        &self,
        listener_id: ListenerId,
    ) -> Result<Option<ActivePlayback>, PlaybackError> {
        let result = Entity::find()
            .filter(Column::ListenerId.eq(listener_id.as_i64()))
            .one(&self.db)
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;
        Ok(result.map(|model| model.into()))
    }

    async fn replace_for_listener(&self, active: &ActivePlayback) -> Result<(), PlaybackError> {
        // 删旧插新放进同一事务，外部读不到零行或两行的中间态
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;

        Entity::delete_many()
            .filter(Column::ListenerId.eq(active.listener_id.as_i64()))
            .exec(&txn)
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;

        let active_model: ActiveModel = active.into();
        Entity::insert(active_model)
            .exec(&txn)
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;

        Ok(())
    }
}
