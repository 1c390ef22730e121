use async_trait::async_trait;
use dashmap::DashMap;
use domain::listener::{Listener, ListenerError, ListenerRepository};
use domain::value::ListenerId;

#[derive(Clone, Default)]
pub struct InMemoryListenerRepository {
    store: std::sync::Arc<DashMap<i64, Listener>>,
}

impl InMemoryListenerRepository {
    pub fn new() -> Self {
        Self {
            store: std::sync::Arc::new(DashMap::new()),
        }
    }
}

#[async_trait]
impl ListenerRepository for InMemoryListenerRepository {
    async fn find_by_id(&self, id: ListenerId) -> Result<Option<Listener>, ListenerError> {
        Ok(self.store.get(&id.as_i64()).map(|v| v.clone()))
    }

    async fn save(&self, listener: &Listener) -> Result<(), ListenerError> {
        self.store.insert(listener.id.as_i64(), listener.clone());
        Ok(())
    }
}
