use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_company_profiles_active_name")
                    .table(CompanyProfiles::Table)
                    .col(CompanyProfiles::Active)
                    .col(CompanyProfiles::CompanyName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shared_ads_company_profile")
                    .table(SharedAds::Table)
                    .col(SharedAds::CompanyProfileId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_shared_ads_company_profile")
                    .table(SharedAds::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_company_profiles_active_name")
                    .table(CompanyProfiles::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyProfiles {
    Table,
    Active,
    CompanyName,
}

#[derive(DeriveIden)]
enum SharedAds {
    Table,
    CompanyProfileId,
}
