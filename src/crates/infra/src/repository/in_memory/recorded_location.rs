use async_trait::async_trait;
use dashmap::DashMap;
use domain::playback::{PlaybackError, RecordedLocation, RecordedLocationRepository};
use domain::value::PlaybackId;

/// 按播放记录ID分桶存放位置历史，桶内保持追加顺序
#[derive(Clone, Default)]
pub struct InMemoryRecordedLocationRepository {
    store: std::sync::Arc<DashMap<i64, Vec<RecordedLocation>>>,
}

impl InMemoryRecordedLocationRepository {
    pub fn new() -> Self {
        Self {
            store: std::sync::Arc::new(DashMap::new()),
        }
    }
}

#[async_trait]
impl RecordedLocationRepository for InMemoryRecordedLocationRepository {
    async fn find_by_playback_id(
        &self,
        playback_id: PlaybackId,
    ) -> Result<Vec<RecordedLocation>, PlaybackError> {
        Ok(self
            .store
            .get(&playback_id.as_i64())
            .map(|v| v.clone())
            .unwrap_or_default())
    }

    async fn save(&self, location: &RecordedLocation) -> Result<(), PlaybackError> {
        self.store
            .entry(location.playback_id.as_i64())
            .or_default()
            .push(location.clone());
        Ok(())
    }
}
