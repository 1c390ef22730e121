use super::value::ListenerId;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

/// 听众领域错误
#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("{0}")]
    DbErr(String),
    #[error("{0}")]
    OtherErr(String),
}

/// 听众聚合根
///
/// 听众是上报播放位置的个体。档案字段（昵称、邮箱、头像）由
/// 账号体系维护，本服务只在校验与展示时读取，不做修改。
#[derive(Debug, Clone)]
pub struct Listener {
    pub id: ListenerId,                    // 听众唯一标识符
    pub display_name: String,              // 展示名称
    pub email: String,                     // 电子邮件地址
    pub profile_image_url: Option<String>, // 头像URL，可选
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Listener {
    pub fn new(
        id: ListenerId,
        display_name: &str,
        email: &str,
        profile_image_url: Option<&str>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            id,
            display_name: String::from(display_name),
            email: String::from(email),
            profile_image_url: profile_image_url.map(String::from),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 听众仓储接口
///
/// 依赖反转原则 (DIP) 的体现。定义领域需要的仓储能力，
/// 由基础设施层实现。
#[async_trait]
pub trait ListenerRepository: Send + Sync {
    /// 根据听众ID查找
    async fn find_by_id(&self, id: ListenerId) -> Result<Option<Listener>, ListenerError>;

    /// 保存听众（创建或更新）
    async fn save(&self, listener: &Listener) -> Result<(), ListenerError>;
}
