use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shared_advertisers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    /// Argon2id password hash
    pub password_hash: Option<String>,

    pub active: bool,

    pub reset_token: Option<String>,

    /// RFC 3339 expiry of `reset_token`
    pub reset_token_expires: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company_profiles::Entity")]
    CompanyProfiles,
    #[sea_orm(has_many = "super::shared_ads::Entity")]
    SharedAds,
}

impl Related<super::company_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyProfiles.def()
    }
}

impl Related<super::shared_ads::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SharedAds.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
