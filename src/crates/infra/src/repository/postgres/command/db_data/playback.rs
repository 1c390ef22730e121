use domain::playback::Playback;
use domain::value::{ListenerId, PlaybackId, TrackId};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "playback")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    #[sea_orm(column_type = "BigInteger")]
    pub listener_id: i64,
    #[sea_orm(column_type = "BigInteger")]
    pub track_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Listener,
    Track,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Listener => Entity::belongs_to(super::listener::Entity)
                .from(Column::ListenerId)
                .to(super::listener::Column::Id)
                .into(),
            Self::Track => Entity::belongs_to(super::track::Entity)
                .from(Column::TrackId)
                .to(super::track::Column::Id)
                .into(),
        }
    }
}

impl Related<super::listener::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listener.def()
    }
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Playback> for ActiveModel {
    fn from(playback: &Playback) -> Self {
        Self {
            id: Set(playback.id.as_i64()),
            listener_id: Set(playback.listener_id.as_i64()),
            track_id: Set(playback.track_id.as_i64()),
            created_at: Set(playback.created_at),
            updated_at: Set(playback.updated_at),
        }
    }
}

impl From<Model> for Playback {
    fn from(model: Model) -> Self {
        Self {
            id: PlaybackId::from(model.id),
            listener_id: ListenerId::from(model.listener_id),
            track_id: TrackId::from(model.track_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
