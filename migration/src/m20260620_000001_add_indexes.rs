use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Gigs {
    Table,
    OwnerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    GigId,
    WorkerId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on gigs.owner_id for the profile listing
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_owner_id")
                    .table(Gigs::Table)
                    .col(Gigs::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Index on gigs.created_at for newest-first listings
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_created_at")
                    .table(Gigs::Table)
                    .col(Gigs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Index on applications.worker_id for the worker side of the inbox
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_worker_id")
                    .table(Applications::Table)
                    .col(Applications::WorkerId)
                    .to_owned(),
            )
            .await?;

        // Index on applications.gig_id for the employer side of the inbox
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_gig_id")
                    .table(Applications::Table)
                    .col(Applications::GigId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_gigs_owner_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gigs_created_at").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_applications_worker_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_applications_gig_id").to_owned())
            .await?;

        Ok(())
    }
}
