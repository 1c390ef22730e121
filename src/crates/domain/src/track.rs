use super::value::TrackId;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

/// 曲目领域错误
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("{0}")]
    DbErr(String),
    #[error("{0}")]
    OtherErr(String),
}

/// 曲目聚合根
///
/// 曲目是可被收听的音乐条目，属性在入库时由上游目录同步，
/// 播放上报流程只读取它来拼装摘要。
#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,                 // 曲目唯一标识符
    pub title: String,               // 标题
    pub artist: String,              // 艺术家名称
    pub image_url: String,           // 封面图片URL
    pub external_url: String,        // 外部播放页URL
    pub preview_url: Option<String>, // 试听片段URL，可能缺失
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Track {
    pub fn new(
        id: TrackId,
        title: &str,
        artist: &str,
        image_url: &str,
        external_url: &str,
        preview_url: Option<&str>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            id,
            title: String::from(title),
            artist: String::from(artist),
            image_url: String::from(image_url),
            external_url: String::from(external_url),
            preview_url: preview_url.map(String::from),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 曲目仓储接口
#[async_trait]
pub trait TrackRepository: Send + Sync {
    /// 根据曲目ID查找
    async fn find_by_id(&self, id: TrackId) -> Result<Option<Track>, TrackError>;

    /// 保存曲目（创建或更新）
    async fn save(&self, track: &Track) -> Result<(), TrackError>;
}
