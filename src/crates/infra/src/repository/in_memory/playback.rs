use async_trait::async_trait;
use dashmap::DashMap;
use domain::playback::{Playback, PlaybackError, PlaybackRepository};
use domain::value::{ListenerId, TrackId};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct InMemoryPlaybackRepository {
    store: Arc<DashMap<i64, Playback>>,
    // 查重与插入必须在同一临界区内完成，(听众, 曲目) 唯一性才经得起并发
    write_lock: Arc<Mutex<()>>,
}

impl InMemoryPlaybackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn lookup_pair(&self, listener_id: &ListenerId, track_id: &TrackId) -> Option<Playback> {
        self.store
            .iter()
            .find(|e| e.value().listener_id == *listener_id && e.value().track_id == *track_id)
            .map(|e| e.value().clone())
    }
}

#[async_trait]
impl PlaybackRepository for InMemoryPlaybackRepository {
    async fn find_by_pair(
        &self,
        listener_id: ListenerId,
        track_id: TrackId,
    ) -> Result<Option<Playback>, PlaybackError> {
        Ok(self.lookup_pair(&listener_id, &track_id))
    }

    async fn insert(&self, playback: &Playback) -> Result<(), PlaybackError> {
        let _guard = self.write_lock.lock().await;
        if self
            .lookup_pair(&playback.listener_id, &playback.track_id)
            .is_some()
        {
            return Err(PlaybackError::DuplicatePair {
                listener_id: playback.listener_id.clone(),
                track_id: playback.track_id.clone(),
            });
        }
        self.store.insert(playback.id.as_i64(), playback.clone());
        Ok(())
    }
}
