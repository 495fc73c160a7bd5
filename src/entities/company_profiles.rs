use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "company_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub web_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub pinterest_url: Option<String>,
    pub active: bool,
    pub views: i32,
    pub created_at: String,
    pub updated_at: String,
    pub advertiser_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shared_advertisers::Entity",
        from = "Column::AdvertiserId",
        to = "super::shared_advertisers::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Advertiser,
    #[sea_orm(has_many = "super::shared_ads::Entity")]
    SharedAds,
}

impl Related<super::shared_advertisers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advertiser.def()
    }
}

impl Related<super::shared_ads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SharedAds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
