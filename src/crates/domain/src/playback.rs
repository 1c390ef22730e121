use super::value::{ActivePlaybackId, GeoPoint, ListenerId, LocationId, PlaybackId, TrackId};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

/// 默认去重半径：1/69 度，约合赤道上一英里的经纬度跨度
pub const DEDUP_RADIUS_DEGREES: f64 = 0.01449275362;

/// 播放领域错误
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("playback already exists for listener {listener_id} and track {track_id}")]
    DuplicatePair {
        listener_id: ListenerId,
        track_id: TrackId,
    },
    #[error("{0}")]
    DbErr(String),
    #[error("{0}")]
    OtherErr(String),
}

/// 播放聚合根
///
/// 每个 (听众, 曲目) 组合最多存在一条播放记录，由数据库唯一约束
/// 兜底。该记录本身不携带位置，位置历史单独挂在它之下。
#[derive(Debug, Clone)]
pub struct Playback {
    pub id: PlaybackId,
    pub listener_id: ListenerId,
    pub track_id: TrackId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Playback {
    pub fn new(id: PlaybackId, listener_id: ListenerId, track_id: TrackId) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            id,
            listener_id,
            track_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 历史位置记录
///
/// 隶属于某条播放记录的一次"值得保留"的收听位置，只追加不修改。
#[derive(Debug, Clone)]
pub struct RecordedLocation {
    pub id: LocationId,
    pub playback_id: PlaybackId,
    pub point: GeoPoint,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RecordedLocation {
    pub fn new(id: LocationId, playback_id: PlaybackId, point: GeoPoint) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            id,
            playback_id,
            point,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 当前收听状态
///
/// 每个听众最多一行，指向其正在收听的播放记录与所在位置。
/// 每次上报都会整体替换，不保留历史。
#[derive(Debug, Clone)]
pub struct ActivePlayback {
    pub id: ActivePlaybackId,
    pub listener_id: ListenerId,
    pub playback_id: PlaybackId,
    pub point: GeoPoint,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ActivePlayback {
    pub fn new(
        id: ActivePlaybackId,
        listener_id: ListenerId,
        playback_id: PlaybackId,
        point: GeoPoint,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            id,
            listener_id,
            playback_id,
            point,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 位置去重策略
///
/// 半径在构造时注入，量纲与坐标一致（度）。候选点只要与任何一个
/// 历史点的距离小于半径，就视为重复，整条上报不再写入历史。
#[derive(Debug, Clone)]
pub struct LocationDedupPolicy {
    radius: f64,
}

impl LocationDedupPolicy {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// 判断候选点是否应写入历史。
    ///
    /// 与每个历史点的距离均不小于半径才算新位置；恰好等于半径算作
    /// 半径之外。历史为空时恒为 true。
    pub fn should_record(&self, candidate: &GeoPoint, history: &[RecordedLocation]) -> bool {
        history
            .iter()
            .all(|loc| candidate.distance_to(&loc.point) >= self.radius)
    }
}

impl Default for LocationDedupPolicy {
    fn default() -> Self {
        Self {
            radius: DEDUP_RADIUS_DEGREES,
        }
    }
}

/// 播放记录仓储接口
#[async_trait]
pub trait PlaybackRepository: Send + Sync {
    /// 根据 (听众, 曲目) 组合查找播放记录
    async fn find_by_pair(
        &self,
        listener_id: ListenerId,
        track_id: TrackId,
    ) -> Result<Option<Playback>, PlaybackError>;

    /// 插入新的播放记录；组合已存在时返回 DuplicatePair
    async fn insert(&self, playback: &Playback) -> Result<(), PlaybackError>;
}

/// 位置历史仓储接口
#[async_trait]
pub trait RecordedLocationRepository: Send + Sync {
    /// 按写入顺序返回某条播放记录下的全部历史位置
    async fn find_by_playback_id(
        &self,
        playback_id: PlaybackId,
    ) -> Result<Vec<RecordedLocation>, PlaybackError>;

    /// 追加一条历史位置
    async fn save(&self, location: &RecordedLocation) -> Result<(), PlaybackError>;
}

/// 当前收听状态仓储接口
#[async_trait]
pub trait ActivePlaybackRepository: Send + Sync {
    /// 查询听众当前的收听状态
    async fn find_by_listener_id(
        &self,
        listener_id: ListenerId,
    ) -> Result<Option<ActivePlayback>, PlaybackError>;

    /// 用新状态整体替换该听众的当前收听状态，删旧插新在同一事务内完成
    async fn replace_for_listener(&self, active: &ActivePlayback) -> Result<(), PlaybackError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, lat: f64, lon: f64) -> RecordedLocation {
        RecordedLocation::new(
            LocationId::from(id),
            PlaybackId::from(1),
            GeoPoint::new(lat, lon),
        )
    }

    #[test]
    fn test_empty_history_always_records() {
        let policy = LocationDedupPolicy::default();
        assert!(policy.should_record(&GeoPoint::new(10.0, 20.0), &[]));
    }

    #[test]
    fn test_nearby_point_is_rejected() {
        let policy = LocationDedupPolicy::default();
        let history = vec![location(1, 10.0, 20.0)];
        // 相距 0.0001 度左右，远小于半径
        assert!(!policy.should_record(&GeoPoint::new(10.0001, 20.0001), &history));
    }

    #[test]
    fn test_distant_point_is_recorded() {
        let policy = LocationDedupPolicy::default();
        let history = vec![location(1, 10.0, 20.0)];
        assert!(policy.should_record(&GeoPoint::new(10.02, 20.02), &history));
    }

    #[test]
    fn test_point_exactly_on_radius_is_recorded() {
        // 0.25 与坐标差都是二进制精确值，算出的距离严格等于半径
        let policy = LocationDedupPolicy::new(0.25);
        let history = vec![location(1, 10.0, 20.0)];
        assert!(policy.should_record(&GeoPoint::new(10.25, 20.0), &history));
    }

    #[test]
    fn test_point_just_inside_radius_is_rejected() {
        let policy = LocationDedupPolicy::new(0.25);
        let history = vec![location(1, 10.0, 20.0)];
        assert!(!policy.should_record(&GeoPoint::new(10.1875, 20.0), &history));
    }

    #[test]
    fn test_single_close_neighbor_rejects_despite_distant_ones() {
        let policy = LocationDedupPolicy::default();
        let history = vec![
            location(1, 50.0, 50.0),
            location(2, 10.0, 20.0),
            location(3, -30.0, 80.0),
        ];
        assert!(!policy.should_record(&GeoPoint::new(10.001, 20.001), &history));
    }

    #[test]
    fn test_same_coordinates_are_rejected() {
        let policy = LocationDedupPolicy::default();
        let history = vec![location(1, 10.0, 20.0)];
        assert!(!policy.should_record(&GeoPoint::new(10.0, 20.0), &history));
    }
}
