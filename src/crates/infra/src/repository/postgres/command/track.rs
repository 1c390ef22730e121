use super::db_data::track::{ActiveModel, Entity};
use async_trait::async_trait;
use domain::track::{Track, TrackError, TrackRepository};
use domain::value::TrackId;
use sea_orm::*;

#[derive(Clone)]
pub struct TrackRepositoryImpl {
    db: DbConn,
}

impl TrackRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TrackRepository for TrackRepositoryImpl {
    async fn find_by_id(&self, id: TrackId) -> Result<Option<Track>, TrackError> {
        let result = Entity::find_by_id(id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| TrackError::DbErr(e.to_string()))?;
        Ok(result.map(|model| model.into()))
    }

    async fn save(&self, track: &Track) -> Result<(), TrackError> {
        let active_model: ActiveModel = track.into();
        let exists = Entity::find_by_id(track.id.as_i64())
            .one(&self.db)
            .await
            .map_err(|e| TrackError::DbErr(e.to_string()))?
            .is_some();
        if exists {
            active_model
                .update(&self.db)
                .await
                .map_err(|e| TrackError::DbErr(e.to_string()))?;
        } else {
            active_model
                .insert(&self.db)
                .await
                .map_err(|e| TrackError::DbErr(e.to_string()))?;
        }
        Ok(())
    }
}
