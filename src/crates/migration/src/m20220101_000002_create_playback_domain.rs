use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create playback table
        manager
            .create_table(
                Table::create()
                    .table(Playback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Playback::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Playback::ListenerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Playback::TrackId).big_integer().not_null())
                    .col(ColumnDef::new(Playback::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Playback::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // 并发创建竞争由这条唯一约束裁决
        manager
            .create_index(
                Index::create()
                    .name("playback_listener_track_unique")
                    .table(Playback::Table)
                    .col(Playback::ListenerId)
                    .col(Playback::TrackId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create recorded_location table
        manager
            .create_table(
                Table::create()
                    .table(RecordedLocation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecordedLocation::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RecordedLocation::PlaybackId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecordedLocation::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecordedLocation::Longitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecordedLocation::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecordedLocation::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_recorded_location_playback_id")
                    .table(RecordedLocation::Table)
                    .col(RecordedLocation::PlaybackId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Create active_playback table
        manager
            .create_table(
                Table::create()
                    .table(ActivePlayback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivePlayback::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ActivePlayback::ListenerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivePlayback::PlaybackId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivePlayback::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivePlayback::Longitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivePlayback::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivePlayback::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个听众至多一行当前状态
        manager
            .create_index(
                Index::create()
                    .name("active_playback_listener_unique")
                    .table(ActivePlayback::Table)
                    .col(ActivePlayback::ListenerId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order
        manager
            .drop_table(Table::drop().table(ActivePlayback::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RecordedLocation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Playback::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Playback {
    Table,
    Id,
    ListenerId,
    TrackId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RecordedLocation {
    Table,
    Id,
    PlaybackId,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ActivePlayback {
    Table,
    Id,
    ListenerId,
    PlaybackId,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
