use domain::track::Track;
use domain::value::TrackId;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "track")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub external_url: String,
    pub preview_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No relations defined for Track")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Track> for ActiveModel {
    fn from(track: &Track) -> Self {
        Self {
            id: Set(track.id.as_i64()),
            title: Set(track.title.clone()),
            artist: Set(track.artist.clone()),
            image_url: Set(track.image_url.clone()),
            external_url: Set(track.external_url.clone()),
            preview_url: Set(track.preview_url.clone()),
            created_at: Set(track.created_at),
            updated_at: Set(track.updated_at),
        }
    }
}

impl From<Model> for Track {
    fn from(model: Model) -> Self {
        Self {
            id: TrackId::from(model.id),
            title: model.title,
            artist: model.artist,
            image_url: model.image_url,
            external_url: model.external_url,
            preview_url: model.preview_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
