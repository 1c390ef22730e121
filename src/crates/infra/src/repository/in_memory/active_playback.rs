use async_trait::async_trait;
use dashmap::DashMap;
use domain::playback::{ActivePlayback, ActivePlaybackRepository, PlaybackError};
use domain::value::ListenerId;

/// 以听众ID为键，插入即整体替换，天然满足"每个听众至多一行"
#[derive(Clone, Default)]
pub struct InMemoryActivePlaybackRepository {
    store: std::sync::Arc<DashMap<i64, ActivePlayback>>,
}

impl InMemoryActivePlaybackRepository {
    pub fn new() -> Self {
        Self {
            store: std::sync::Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }
}

#[async_trait]
impl ActivePlaybackRepository for InMemoryActivePlaybackRepository {
    async fn find_by_listener_id(
        &self,
        listener_id: ListenerId,
    ) -> Result<Option<ActivePlayback>, PlaybackError> {
        Ok(self.store.get(&listener_id.as_i64()).map(|v| v.clone()))
    }

    async fn replace_for_listener(&self, active: &ActivePlayback) -> Result<(), PlaybackError> {
        self.store
            .insert(active.listener_id.as_i64(), active.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value::{ActivePlaybackId, GeoPoint, PlaybackId};

    #[tokio::test]
    async fn test_replace_leaves_single_record_per_listener() {
        let repo = InMemoryActivePlaybackRepository::new();
        let listener_id = ListenerId::from(1);

        for i in 1..=5 {
            repo.replace_for_listener(&ActivePlayback::new(
                ActivePlaybackId::from(i),
                listener_id.clone(),
                PlaybackId::from(100 + i),
                GeoPoint::new(10.0 + i as f64, 20.0),
            ))
            .await
            .unwrap();
        }

        assert_eq!(repo.len(), 1);
        let current = repo
            .find_by_listener_id(listener_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.id.as_i64(), 5);
        assert_eq!(current.playback_id.as_i64(), 105);
        assert_eq!(current.point, GeoPoint::new(15.0, 20.0));
    }

    #[tokio::test]
    async fn test_listeners_do_not_share_state() {
        let repo = InMemoryActivePlaybackRepository::new();
        repo.replace_for_listener(&ActivePlayback::new(
            ActivePlaybackId::from(1),
            ListenerId::from(1),
            PlaybackId::from(100),
            GeoPoint::new(10.0, 20.0),
        ))
        .await
        .unwrap();
        repo.replace_for_listener(&ActivePlayback::new(
            ActivePlaybackId::from(2),
            ListenerId::from(2),
            PlaybackId::from(200),
            GeoPoint::new(30.0, 40.0),
        ))
        .await
        .unwrap();

        assert_eq!(repo.len(), 2);
        let first = repo
            .find_by_listener_id(ListenerId::from(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.playback_id.as_i64(), 100);
    }
}
