use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shared_ads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ad_name: String,
    /// Internal notes for the advertiser
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// 320x180 image
    pub image_filename: String,
    pub image_path: String,
    pub active: bool,
    pub clicks: i32,
    pub impressions: i32,
    pub created_at: String,
    pub updated_at: String,
    pub advertiser_id: i32,
    pub company_profile_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::company_profiles::Entity",
        from = "Column::CompanyProfileId",
        to = "super::company_profiles::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    CompanyProfile,
}

impl Related<super::shared_advertisers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advertiser.def()
    }
}

impl Related<super::company_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
