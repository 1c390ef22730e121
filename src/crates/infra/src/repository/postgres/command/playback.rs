use super::db_data::playback::{ActiveModel, Column, Entity};
use async_trait::async_trait;
use domain::playback::{Playback, PlaybackError, PlaybackRepository};
use domain::value::{ListenerId, TrackId};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

#[derive(Clone)]
pub struct PlaybackRepositoryImpl {
    db: DbConn,
}

impl PlaybackRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlaybackRepository for PlaybackRepositoryImpl {
    async fn find_by_pair(
        &self,
        listener_id: ListenerId,
        track_id: TrackId,
    ) -> Result<Option<Playback>, PlaybackError> {
        let result = Entity::find()
            .filter(Column::ListenerId.eq(listener_id.as_i64()))
            .filter(Column::TrackId.eq(track_id.as_i64()))
            .one(&self.db)
            .await
            .map_err(|e| PlaybackError::DbErr(e.to_string()))?;
        Ok(result.map(|model| model.into()))
    }

    async fn insert(&self, playback: &Playback) -> Result<(), PlaybackError> {
        let active_model: ActiveModel = playback.into();
        // 撞上 (listener_id, track_id) 唯一约束时不写入任何行，
        // sea-orm 用 RecordNotInserted 报告这种情况
        match Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([Column::ListenerId, Column::TrackId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await
        {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotInserted) => Err(PlaybackError::DuplicatePair {
                listener_id: playback.listener_id.clone(),
                track_id: playback.track_id.clone(),
            }),
            Err(e) => Err(PlaybackError::DbErr(e.to_string())),
        }
    }
}
