use domain::listener::Listener;
use domain::value::ListenerId;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listener")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub id: i64,
    pub display_name: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No relations defined for Listener")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Listener> for ActiveModel {
    fn from(listener: &Listener) -> Self {
        Self {
            id: Set(listener.id.as_i64()),
            display_name: Set(listener.display_name.clone()),
            email: Set(listener.email.clone()),
            profile_image_url: Set(listener.profile_image_url.clone()),
            created_at: Set(listener.created_at),
            updated_at: Set(listener.updated_at),
        }
    }
}

impl From<Model> for Listener {
    fn from(model: Model) -> Self {
        Self {
            id: ListenerId::from(model.id),
            display_name: model.display_name,
            email: model.email,
            profile_image_url: model.profile_image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
