use super::db_data::recorded_location::{ActiveModel, Column, Entity, Model};
use async_trait::async_trait;
use domain::playback::{PlaybackError, RecordedLocation, RecordedLocationRepository};
use domain::value::PlaybackId;
use sea_orm::*;

#[derive(Clone)]
pub struct RecordedLocationRepositoryImpl {
    db: DbConn,
}

impl RecordedLocationRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordedLocationRepository for RecordedLocationRepositoryImpl {
    async fn find_by_playback_id(
        &self,
        playback_id: PlaybackId,
    ) -> Result<Vec<RecordedLocation>, PlaybackError> {
        // 雪花ID随时间单调递增，按ID升序即写入顺序
        let rows: Vec<Model> = Entity::find()
            .filter(Column::PlaybackId.eq(playback_id.as_i64()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;
        Ok(rows.into_iter().map(|model| model.into()).collect())
    }

    async fn save(&self, location: &RecordedLocation) -> Result<(), PlaybackError> {
        let active_model: ActiveModel = location.into();
        Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;
        Ok(())
    }
}
