use sea_orm::entity::prelude::*;

/// Slot-based ad placements of the sibling news site.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "advertisements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// `sidebar-1`, `sidebar-2`, `sidebar-3` or `banner-top`
    pub slot_position: String,
    #[sea_orm(column_type = "Text")]
    pub adrotate_url: String,
    pub fallback_image: Option<String>,
    pub fallback_link: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
