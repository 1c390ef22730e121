use domain::playback::RecordedLocation;
use domain::value::{GeoPoint, LocationId, PlaybackId};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recorded_location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
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
    Playback,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Playback => Entity::belongs_to(super::playback::Entity)
                .from(Column::PlaybackId)
                .to(super::playback::Column::Id)
                .into(),
        }
    }
}

impl Related<super::playback::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playback.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&RecordedLocation> for ActiveModel {
    fn from(location: &RecordedLocation) -> Self {
        Self {
            id: Set(location.id.as_i64()),
            playback_id: Set(location.playback_id.as_i64()),
            latitude: Set(location.point.latitude),
            longitude: Set(location.point.longitude),
            created_at: Set(location.created_at),
            updated_at: Set(location.updated_at),
        }
    }
}

impl From<Model> for RecordedLocation {
    fn from(model: Model) -> Self {
        Self {
            id: LocationId::from(model.id),
            playback_id: PlaybackId::from(model.playback_id),
            point: GeoPoint::new(model.latitude, model.longitude),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
