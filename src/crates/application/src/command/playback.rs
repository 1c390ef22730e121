use std::sync::Arc;

use super::shared::IdGenerator;
use crate::error::AppError;
use domain::listener::ListenerRepository;
use domain::playback::{
    ActivePlayback, ActivePlaybackRepository, LocationDedupPolicy, Playback, PlaybackError,
    PlaybackRepository, RecordedLocation, RecordedLocationRepository,
};
use domain::track::TrackRepository;
use domain::value::{ActivePlaybackId, GeoPoint, ListenerId, LocationId, PlaybackId, TrackId};
use log::{debug, info};

#[derive(Debug)]
pub struct ReportPlaybackCmd {
    pub listener_id: ListenerId,
    pub track_id: TrackId,
    pub point: GeoPoint,
}

/// 上报处理结果：曲目属性 + 当前收听状态的归属与坐标
#[derive(Debug, Clone)]
pub struct PlaybackSummary {
    pub track_id: TrackId,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub external_url: String,
    pub preview_url: Option<String>,
    pub listener_id: ListenerId,
    pub latitude: f64,
    pub longitude: f64,
}

/// 播放记录注册表
///
/// 维护"每个 (听众, 曲目) 组合恰有一条播放记录"的约束。并发创建
/// 竞争由存储层唯一约束裁决，输掉的一方重读赢家的行，冲突不外泄。
pub struct PlaybackRegistry {
    playback_repo: Arc<dyn PlaybackRepository>,
    listener_repo: Arc<dyn ListenerRepository>,
    track_repo: Arc<dyn TrackRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl PlaybackRegistry {
    pub fn new(
        playback_repo: Arc<dyn PlaybackRepository>,
        listener_repo: Arc<dyn ListenerRepository>,
        track_repo: Arc<dyn TrackRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            playback_repo,
            listener_repo,
            track_repo,
            id_generator,
        }
    }

    /// 幂等获取或创建播放记录。
    ///
    /// 组合已存在时原样返回既有记录；否则先校验听众与曲目存在，
    /// 再生成ID插入。
    pub async fn get_or_create(
        &self,
        listener_id: ListenerId,
        track_id: TrackId,
    ) -> Result<Playback, AppError> {
        if let Some(existing) = self
            .playback_repo
            .find_by_pair(listener_id.clone(), track_id.clone())
            .await?
        {
            return Ok(existing);
        }

        self.listener_repo
            .find_by_id(listener_id.clone())
            .await?
            .ok_or_else(|| {
                AppError::AggregateNotFound("Listener".to_string(), listener_id.to_string())
            })?;
        self.track_repo
            .find_by_id(track_id.clone())
            .await?
            .ok_or_else(|| {
                AppError::AggregateNotFound("Track".to_string(), track_id.to_string())
            })?;

        let id = self.id_generator.next_id().await?;
        let playback = Playback::new(PlaybackId::from(id), listener_id.clone(), track_id.clone());
        match self.playback_repo.insert(&playback).await {
            Ok(()) => {
                info!(
                    "created playback {} for listener {} track {}",
                    playback.id, listener_id, track_id
                );
                Ok(playback)
            }
            Err(PlaybackError::DuplicatePair { .. }) => {
                // 输掉并发创建竞争，改用赢家插入的那一行
                debug!(
                    "playback for listener {} track {} created concurrently, refetching",
                    listener_id, track_id
                );
                self.playback_repo
                    .find_by_pair(listener_id.clone(), track_id.clone())
                    .await?
                    .ok_or_else(|| {
                        AppError::UnknownError(format!(
                            "playback for listener {} track {} missing after duplicate insert",
                            listener_id, track_id
                        ))
                    })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// 当前收听状态维护器
///
/// 保证每个听众最多一行当前状态：每次上报都用新状态整体替换，
/// 替换的原子性由仓储的事务实现保证。
pub struct ActivePlaybackTracker {
    active_repo: Arc<dyn ActivePlaybackRepository>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ActivePlaybackTracker {
    pub fn new(
        active_repo: Arc<dyn ActivePlaybackRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            active_repo,
            id_generator,
        }
    }

    /// 无条件刷新听众的当前收听状态，返回新写入的记录
    pub async fn set_active(
        &self,
        listener_id: ListenerId,
        playback_id: PlaybackId,
        point: GeoPoint,
    ) -> Result<ActivePlayback, AppError> {
        let id = self.id_generator.next_id().await?;
        let active = ActivePlayback::new(
            ActivePlaybackId::from(id),
            listener_id,
            playback_id,
            point,
        );
        self.active_repo.replace_for_listener(&active).await?;
        Ok(active)
    }
}

/// 播放上报服务
///
/// 串起一次上报的完整流程：取播放记录、位置查重归档、刷新当前
/// 状态、拼装摘要返回。
pub struct PlaybackRecordingService {
    registry: PlaybackRegistry,
    tracker: ActivePlaybackTracker,
    location_repo: Arc<dyn RecordedLocationRepository>,
    track_repo: Arc<dyn TrackRepository>,
    dedup_policy: LocationDedupPolicy,
    id_generator: Arc<dyn IdGenerator>,
}

impl PlaybackRecordingService {
    pub fn new(
        registry: PlaybackRegistry,
        tracker: ActivePlaybackTracker,
        location_repo: Arc<dyn RecordedLocationRepository>,
        track_repo: Arc<dyn TrackRepository>,
        dedup_policy: LocationDedupPolicy,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            registry,
            tracker,
            location_repo,
            track_repo,
            dedup_policy,
            id_generator,
        }
    }

    /// 处理一次播放位置上报。
    ///
    /// 位置归档与当前状态刷新是两个独立单元：归档失败不会跳过
    /// 刷新，两者都失败时向调用方上报归档侧的错误。播放记录创建
    /// 后不回滚，整个操作重试是安全的。
    pub async fn report_playback(
        &self,
        cmd: ReportPlaybackCmd,
    ) -> Result<PlaybackSummary, AppError> {
        let playback = self
            .registry
            .get_or_create(cmd.listener_id.clone(), cmd.track_id.clone())
            .await?;

        let archive_result = self.archive_location(&playback, &cmd.point).await;

        let active_result = self
            .tracker
            .set_active(cmd.listener_id.clone(), playback.id.clone(), cmd.point)
            .await;

        archive_result?;
        let active = active_result?;

        let track = self
            .track_repo
            .find_by_id(cmd.track_id.clone())
            .await?
            .ok_or_else(|| {
                AppError::AggregateNotFound("Track".to_string(), cmd.track_id.to_string())
            })?;

        Ok(PlaybackSummary {
            track_id: track.id,
            title: track.title,
            artist: track.artist,
            image_url: track.image_url,
            external_url: track.external_url,
            preview_url: track.preview_url,
            listener_id: active.listener_id,
            latitude: active.point.latitude,
            longitude: active.point.longitude,
        })
    }

    /// 查重，并在候选位置确属新地点时追加一条历史记录
    async fn archive_location(
        &self,
        playback: &Playback,
        point: &GeoPoint,
    ) -> Result<(), AppError> {
        let history = self
            .location_repo
            .find_by_playback_id(playback.id.clone())
            .await?;
        if self.dedup_policy.should_record(point, &history) {
            let id = self.id_generator.next_id().await?;
            let location = RecordedLocation::new(LocationId::from(id), playback.id.clone(), *point);
            self.location_repo.save(&location).await?;
            debug!("recorded location {} for playback {}", point, playback.id);
        } else {
            info!(
                "location {} for playback {} within dedup radius of history, not archived",
                point, playback.id
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashmap::DashMap;
    use domain::listener::{Listener, ListenerError};
    use domain::playback::DEDUP_RADIUS_DEGREES;
    use domain::track::{Track, TrackError};
    use std::sync::atomic::{AtomicI64, Ordering};

    #[derive(Default)]
    struct SeqIdGenerator {
        counter: AtomicI64,
    }

    #[async_trait::async_trait]
    impl IdGenerator for SeqIdGenerator {
        async fn next_id(&self) -> Result<i64, AppError> {
            Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    #[derive(Default)]
    struct FakeListenerRepo {
        rows: DashMap<i64, Listener>,
    }

    #[async_trait::async_trait]
    impl ListenerRepository for FakeListenerRepo {
        async fn find_by_id(&self, id: ListenerId) -> Result<Option<Listener>, ListenerError> {
            Ok(self.rows.get(&id.as_i64()).map(|e| e.value().clone()))
        }
        async fn save(&self, listener: &Listener) -> Result<(), ListenerError> {
            self.rows.insert(listener.id.as_i64(), listener.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeTrackRepo {
        rows: DashMap<i64, Track>,
    }

    #[async_trait::async_trait]
    impl TrackRepository for FakeTrackRepo {
        async fn find_by_id(&self, id: TrackId) -> Result<Option<Track>, TrackError> {
            Ok(self.rows.get(&id.as_i64()).map(|e| e.value().clone()))
        }
        async fn save(&self, track: &Track) -> Result<(), TrackError> {
            self.rows.insert(track.id.as_i64(), track.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakePlaybackRepo {
        rows: DashMap<i64, Playback>,
    }

    #[async_trait::async_trait]
    impl PlaybackRepository for FakePlaybackRepo {
        async fn find_by_pair(
            &self,
            listener_id: ListenerId,
            track_id: TrackId,
        ) -> Result<Option<Playback>, PlaybackError> {
            Ok(self
                .rows
                .iter()
                .find(|e| {
                    e.value().listener_id == listener_id && e.value().track_id == track_id
                })
                .map(|e| e.value().clone()))
        }
        async fn insert(&self, playback: &Playback) -> Result<(), PlaybackError> {
            if self
                .find_by_pair(playback.listener_id.clone(), playback.track_id.clone())
                .await?
                .is_some()
            {
                return Err(PlaybackError::DuplicatePair {
                    listener_id: playback.listener_id.clone(),
                    track_id: playback.track_id.clone(),
                });
            }
            self.rows.insert(playback.id.as_i64(), playback.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeLocationRepo {
        rows: DashMap<i64, Vec<RecordedLocation>>,
    }

    #[async_trait::async_trait]
    impl RecordedLocationRepository for FakeLocationRepo {
        async fn find_by_playback_id(
            &self,
            playback_id: PlaybackId,
        ) -> Result<Vec<RecordedLocation>, PlaybackError> {
            Ok(self
                .rows
                .get(&playback_id.as_i64())
                .map(|e| e.value().clone())
                .unwrap_or_default())
        }
        async fn save(&self, location: &RecordedLocation) -> Result<(), PlaybackError> {
            self.rows
                .entry(location.playback_id.as_i64())
                .or_default()
                .push(location.clone());
            Ok(())
        }
    }

    /// 首查落空若干次后才放行，模拟检查与插入之间被并发请求抢先
    struct RacyPlaybackRepo {
        inner: FakePlaybackRepo,
        misses_remaining: AtomicI64,
    }

    #[async_trait::async_trait]
    impl PlaybackRepository for RacyPlaybackRepo {
        async fn find_by_pair(
            &self,
            listener_id: ListenerId,
            track_id: TrackId,
        ) -> Result<Option<Playback>, PlaybackError> {
            if self.misses_remaining.fetch_sub(1, Ordering::SeqCst) > 0 {
                return Ok(None);
            }
            self.inner.find_by_pair(listener_id, track_id).await
        }
        async fn insert(&self, playback: &Playback) -> Result<(), PlaybackError> {
            self.inner.insert(playback).await
        }
    }

    /// 存储故障桩：归档侧读写一律失败
    struct BrokenLocationRepo;

    #[async_trait::async_trait]
    impl RecordedLocationRepository for BrokenLocationRepo {
        async fn find_by_playback_id(
            &self,
            _playback_id: PlaybackId,
        ) -> Result<Vec<RecordedLocation>, PlaybackError> {
            Err(PlaybackError::DbErr("location storage unavailable".to_string()))
        }
        async fn save(&self, _location: &RecordedLocation) -> Result<(), PlaybackError> {
            Err(PlaybackError::DbErr("location storage unavailable".to_string()))
        }
    }

    #[derive(Default)]
    struct FakeActivePlaybackRepo {
        rows: DashMap<i64, ActivePlayback>,
    }

    #[async_trait::async_trait]
    impl ActivePlaybackRepository for FakeActivePlaybackRepo {
        async fn find_by_listener_id(
            &self,
            listener_id: ListenerId,
        ) -> Result<Option<ActivePlayback>, PlaybackError> {
            Ok(self
                .rows
                .get(&listener_id.as_i64())
                .map(|e| e.value().clone()))
        }
        async fn replace_for_listener(&self, active: &ActivePlayback) -> Result<(), PlaybackError> {
            self.rows.insert(active.listener_id.as_i64(), active.clone());
            Ok(())
        }
    }

    struct Fixture {
        listeners: Arc<FakeListenerRepo>,
        tracks: Arc<FakeTrackRepo>,
        playbacks: Arc<FakePlaybackRepo>,
        locations: Arc<FakeLocationRepo>,
        actives: Arc<FakeActivePlaybackRepo>,
        service: PlaybackRecordingService,
    }

    impl Fixture {
        fn new() -> Self {
            let listeners = Arc::new(FakeListenerRepo::default());
            let tracks = Arc::new(FakeTrackRepo::default());
            let playbacks = Arc::new(FakePlaybackRepo::default());
            let locations = Arc::new(FakeLocationRepo::default());
            let actives = Arc::new(FakeActivePlaybackRepo::default());
            let id_generator = Arc::new(SeqIdGenerator::default());

            let registry = PlaybackRegistry::new(
                playbacks.clone(),
                listeners.clone(),
                tracks.clone(),
                id_generator.clone(),
            );
            let tracker = ActivePlaybackTracker::new(actives.clone(), id_generator.clone());
            let service = PlaybackRecordingService::new(
                registry,
                tracker,
                locations.clone(),
                tracks.clone(),
                LocationDedupPolicy::new(DEDUP_RADIUS_DEGREES),
                id_generator,
            );

            Self {
                listeners,
                tracks,
                playbacks,
                locations,
                actives,
                service,
            }
        }

        async fn seed(&self) {
            self.listeners
                .save(&Listener::new(
                    ListenerId::from(1),
                    "Ada",
                    "ada@example.com",
                    None,
                ))
                .await
                .unwrap();
            self.tracks
                .save(&Track::new(
                    TrackId::from(10),
                    "Paranoid Android",
                    "Radiohead",
                    "https://img.example.com/10.jpg",
                    "https://play.example.com/10",
                    Some("https://preview.example.com/10"),
                ))
                .await
                .unwrap();
            self.tracks
                .save(&Track::new(
                    TrackId::from(11),
                    "Karma Police",
                    "Radiohead",
                    "https://img.example.com/11.jpg",
                    "https://play.example.com/11",
                    None,
                ))
                .await
                .unwrap();
        }

        async fn report(
            &self,
            listener_id: i64,
            track_id: i64,
            latitude: f64,
            longitude: f64,
        ) -> Result<PlaybackSummary, AppError> {
            self.service
                .report_playback(ReportPlaybackCmd {
                    listener_id: ListenerId::from(listener_id),
                    track_id: TrackId::from(track_id),
                    point: GeoPoint::new(latitude, longitude),
                })
                .await
        }

        async fn location_count(&self, listener_id: i64, track_id: i64) -> usize {
            let playback = self
                .playbacks
                .find_by_pair(ListenerId::from(listener_id), TrackId::from(track_id))
                .await
                .unwrap()
                .expect("playback should exist");
            self.locations
                .find_by_playback_id(playback.id)
                .await
                .unwrap()
                .len()
        }
    }

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let fx = Fixture::new();
        fx.seed().await;

        let first = fx
            .service
            .registry
            .get_or_create(ListenerId::from(1), TrackId::from(10))
            .await
            .unwrap();
        let second = fx
            .service
            .registry
            .get_or_create(ListenerId::from(1), TrackId::from(10))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(fx.playbacks.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_get_or_create_rejects_unknown_listener() {
        let fx = Fixture::new();
        fx.seed().await;

        let err = fx.report(99, 10, 10.0, 20.0).await.unwrap_err();
        match err {
            AppError::AggregateNotFound(entity, _) => assert_eq!(entity, "Listener"),
            other => panic!("unexpected error: {}", other),
        }
        assert!(fx.playbacks.rows.is_empty());
        assert!(fx.actives.rows.is_empty());
    }

    #[tokio::test]
    async fn test_get_or_create_rejects_unknown_track() {
        let fx = Fixture::new();
        fx.seed().await;

        let err = fx.report(1, 99, 10.0, 20.0).await.unwrap_err();
        match err {
            AppError::AggregateNotFound(entity, _) => assert_eq!(entity, "Track"),
            other => panic!("unexpected error: {}", other),
        }
        assert!(fx.playbacks.rows.is_empty());
    }

    #[tokio::test]
    async fn test_registry_recovers_from_lost_insert_race() {
        let fx = Fixture::new();
        fx.seed().await;

        // 赢家的行已经在库里，但首查被安排成一次落空，
        // 迫使 get_or_create 走插入→冲突→重读的恢复路径
        let racy = Arc::new(RacyPlaybackRepo {
            inner: FakePlaybackRepo::default(),
            misses_remaining: AtomicI64::new(1),
        });
        let winner = Playback::new(PlaybackId::from(777), ListenerId::from(1), TrackId::from(10));
        racy.inner.insert(&winner).await.unwrap();

        let registry = PlaybackRegistry::new(
            racy.clone(),
            fx.listeners.clone(),
            fx.tracks.clone(),
            Arc::new(SeqIdGenerator::default()),
        );

        let resolved = registry
            .get_or_create(ListenerId::from(1), TrackId::from(10))
            .await
            .unwrap();
        assert_eq!(resolved.id.as_i64(), 777);
        assert_eq!(racy.inner.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_location_skips_archive_but_refreshes_active() {
        let fx = Fixture::new();
        fx.seed().await;

        fx.report(1, 10, 10.0, 20.0).await.unwrap();
        let first_active = fx
            .actives
            .find_by_listener_id(ListenerId::from(1))
            .await
            .unwrap()
            .unwrap();

        // 相距约 0.00014 度，在半径之内
        let summary = fx.report(1, 10, 10.0001, 20.0001).await.unwrap();

        assert_eq!(fx.location_count(1, 10).await, 1);
        let refreshed = fx
            .actives
            .find_by_listener_id(ListenerId::from(1))
            .await
            .unwrap()
            .unwrap();
        assert_ne!(refreshed.id, first_active.id);
        assert_eq!(refreshed.point, GeoPoint::new(10.0001, 20.0001));
        assert_eq!(summary.latitude, 10.0001);
        assert_eq!(summary.longitude, 20.0001);
    }

    #[tokio::test]
    async fn test_summary_joins_track_attributes_and_active_coordinates() {
        let fx = Fixture::new();
        fx.seed().await;

        let summary = fx.report(1, 10, 10.0, 20.0).await.unwrap();

        assert_eq!(summary.track_id.as_i64(), 10);
        assert_eq!(summary.title, "Paranoid Android");
        assert_eq!(summary.artist, "Radiohead");
        assert_eq!(summary.image_url, "https://img.example.com/10.jpg");
        assert_eq!(summary.external_url, "https://play.example.com/10");
        assert_eq!(
            summary.preview_url.as_deref(),
            Some("https://preview.example.com/10")
        );
        assert_eq!(summary.listener_id.as_i64(), 1);
        assert_eq!(summary.latitude, 10.0);
        assert_eq!(summary.longitude, 20.0);
    }

    #[tokio::test]
    async fn test_full_reporting_scenario() {
        let fx = Fixture::new();
        fx.seed().await;

        // 第一次上报：播放记录、历史位置、当前状态各一
        fx.report(1, 10, 10.0, 20.0).await.unwrap();
        assert_eq!(fx.playbacks.rows.len(), 1);
        assert_eq!(fx.location_count(1, 10).await, 1);

        // 半径内的重复位置：历史不变，当前状态刷新
        fx.report(1, 10, 10.0001, 20.0001).await.unwrap();
        assert_eq!(fx.location_count(1, 10).await, 1);
        let active = fx
            .actives
            .find_by_listener_id(ListenerId::from(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.point, GeoPoint::new(10.0001, 20.0001));

        // 半径外的新位置：历史 +1
        fx.report(1, 10, 10.02, 20.02).await.unwrap();
        assert_eq!(fx.location_count(1, 10).await, 2);

        // 换一首曲目：新播放记录，当前状态指向它，旧状态被替换
        fx.report(1, 11, 10.02, 20.02).await.unwrap();
        assert_eq!(fx.playbacks.rows.len(), 2);
        let active = fx
            .actives
            .find_by_listener_id(ListenerId::from(1))
            .await
            .unwrap()
            .unwrap();
        let t2_playback = fx
            .playbacks
            .find_by_pair(ListenerId::from(1), TrackId::from(11))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(active.playback_id, t2_playback.id);
        assert_eq!(fx.actives.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_archive_failure_still_refreshes_active_record() {
        let fx = Fixture::new();
        fx.seed().await;

        let id_generator = Arc::new(SeqIdGenerator::default());
        let registry = PlaybackRegistry::new(
            fx.playbacks.clone(),
            fx.listeners.clone(),
            fx.tracks.clone(),
            id_generator.clone(),
        );
        let tracker = ActivePlaybackTracker::new(fx.actives.clone(), id_generator.clone());
        let service = PlaybackRecordingService::new(
            registry,
            tracker,
            Arc::new(BrokenLocationRepo),
            fx.tracks.clone(),
            LocationDedupPolicy::default(),
            id_generator,
        );

        let err = service
            .report_playback(ReportPlaybackCmd {
                listener_id: ListenerId::from(1),
                track_id: TrackId::from(10),
                point: GeoPoint::new(10.0, 20.0),
            })
            .await
            .unwrap_err();

        // 归档失败上报给调用方，但当前状态仍已刷新
        assert!(matches!(
            err,
            AppError::PlaybackError(PlaybackError::DbErr(_))
        ));
        let active = fx
            .actives
            .find_by_listener_id(ListenerId::from(1))
            .await
            .unwrap();
        assert!(active.is_some());
        // 播放记录创建不回滚，重试可以复用
        assert_eq!(fx.playbacks.rows.len(), 1);
    }

    #[tokio::test]
    async fn test_radius_boundary_admits_exact_distance() {
        let fx = Fixture::new();
        fx.seed().await;

        // 半径与坐标差都取二进制精确值，边界判定不受浮点舍入干扰
        let id_generator = Arc::new(SeqIdGenerator::default());
        let registry = PlaybackRegistry::new(
            fx.playbacks.clone(),
            fx.listeners.clone(),
            fx.tracks.clone(),
            id_generator.clone(),
        );
        let tracker = ActivePlaybackTracker::new(fx.actives.clone(), id_generator.clone());
        let service = PlaybackRecordingService::new(
            registry,
            tracker,
            fx.locations.clone(),
            fx.tracks.clone(),
            LocationDedupPolicy::new(0.25),
            id_generator,
        );

        let cmd = |latitude: f64| ReportPlaybackCmd {
            listener_id: ListenerId::from(1),
            track_id: TrackId::from(10),
            point: GeoPoint::new(latitude, 20.0),
        };

        service.report_playback(cmd(10.0)).await.unwrap();
        assert_eq!(fx.location_count(1, 10).await, 1);

        // 恰好等于半径：算半径之外，应归档
        service.report_playback(cmd(10.25)).await.unwrap();
        assert_eq!(fx.location_count(1, 10).await, 2);

        // 半径之内一点点：不归档
        service.report_playback(cmd(10.1875)).await.unwrap();
        assert_eq!(fx.location_count(1, 10).await, 2);
    }
}
