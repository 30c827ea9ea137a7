use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `gigs` table and its columns.
#[derive(DeriveIden)]
enum Gigs {
    Table,
    Id,
    OwnerId,
    Title,
    EmployerName,
    Location,
    Pay,
    Duration,
    WorkersNeeded,
    JobType,
    Skills,
    Schedule,
    Description,
    ContactInfo,
    Status,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gigs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Gigs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Gigs::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Gigs::Title).string().not_null())
                    .col(ColumnDef::new(Gigs::EmployerName).string().not_null())
                    .col(ColumnDef::new(Gigs::Location).string().not_null())
                    .col(ColumnDef::new(Gigs::Pay).string().not_null())
                    .col(ColumnDef::new(Gigs::Duration).string().not_null())
                    .col(
                        ColumnDef::new(Gigs::WorkersNeeded)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Gigs::JobType).string().null())
                    .col(ColumnDef::new(Gigs::Skills).string().not_null())
                    .col(ColumnDef::new(Gigs::Schedule).string().not_null())
                    .col(ColumnDef::new(Gigs::Description).text().not_null())
                    .col(ColumnDef::new(Gigs::ContactInfo).string().not_null())
                    .col(ColumnDef::new(Gigs::Status).string().not_null())
                    .col(
                        ColumnDef::new(Gigs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gigs_owner_id")
                            .from(Gigs::Table, Gigs::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gigs::Table).to_owned())
            .await
    }
}
