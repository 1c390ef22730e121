use domain::playback::ActivePlayback;
use domain::value::{ActivePlaybackId, GeoPoint, ListenerId, PlaybackId};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "active_playback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    /// 唯一约束：每个听众至多一行
    #[sea_orm(column_type = "BigInteger")]
    pub listener_id: i64,
    #[sea_orm(column_type = "BigInteger")]
    pub playback_id: i64,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Listener,
    Playback,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Listener => Entity::belongs_to(super::listener::Entity)
                .from(Column::ListenerId)
                .to(super::listener::Column::Id)
                .into(),
            Self::Playback => Entity::belongs_to(super::playback::Entity)
                .from(Column::PlaybackId)
                .to(super::playback::Column::Id)
                .into(),
        }
    }
}

impl Related<super::listener::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listener.def()
    }
}

impl Related<super::playback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playback.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ActivePlayback> for ActiveModel {
    fn from(active: &ActivePlayback) -> Self {
        Self {
            id: Set(active.id.as_i64()),
            listener_id: Set(active.listener_id.as_i64()),
            playback_id: Set(active.playback_id.as_i64()),
            latitude: Set(active.point.latitude),
            longitude: Set(active.point.longitude),
            created_at: Set(active.created_at),
            updated_at: Set(active.updated_at),
        }
    }
}

impl From<Model> for ActivePlayback {
    fn from(model: Model) -> Self {
        Self {
            id: ActivePlaybackId::from(model.id),
            listener_id: ListenerId::from(model.listener_id),
            playback_id: PlaybackId::from(model.playback_id),
            point: GeoPoint::new(model.latitude, model.longitude),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
