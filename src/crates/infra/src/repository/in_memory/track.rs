use async_trait::async_trait;
use dashmap::DashMap;
use domain::track::{Track, TrackError, TrackRepository};
use domain::value::TrackId;

#[derive(Clone, Default)]
pub struct InMemoryTrackRepository {
    store: std::sync::Arc<DashMap<i64, Track>>,
}

impl InMemoryTrackRepository {
    pub fn new() -> Self {
        Self {
            store: std::sync::Arc::new(DashMap::new()),
        }
    }
}

#[async_trait]
impl TrackRepository for InMemoryTrackRepository {
    async fn find_by_id(&self, id: TrackId) -> Result<Option<Track>, TrackError> {
        Ok(self.store.get(&id.as_i64()).map(|v| v.clone()))
    }

    async fn save(&self, track: &Track) -> Result<(), TrackError> {
        self.store.insert(track.id.as_i64(), track.clone());
        Ok(())
    }
}
