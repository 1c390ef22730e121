use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create listener table
        manager
            .create_table(
                Table::create()
                    .table(Listener::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Listener::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Listener::DisplayName).string().not_null())
                    .col(ColumnDef::new(Listener::Email).string().not_null())
                    .col(ColumnDef::new(Listener::ProfileImageUrl).string())
                    .col(ColumnDef::new(Listener::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Listener::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create track table
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Track::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Track::Title).string().not_null())
                    .col(ColumnDef::new(Track::Artist).string().not_null())
                    .col(ColumnDef::new(Track::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Track::ExternalUrl).string().not_null())
                    .col(ColumnDef::new(Track::PreviewUrl).string())
                    .col(ColumnDef::new(Track::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Track::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Listener::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Listener {
    Table,
    Id,
    DisplayName,
    Email,
    ProfileImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Track {
    Table,
    Id,
    Title,
    Artist,
    ImageUrl,
    ExternalUrl,
    PreviewUrl,
    CreatedAt,
    UpdatedAt,
}
