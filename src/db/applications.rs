use sea_orm::*;
use uuid::Uuid;

use crate::models::applications::{self, Status};
use crate::models::gigs;

/// Result of an apply attempt: either a fresh row or the one that already
/// existed for this (gig, worker) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Created(applications::Model),
    Existing(applications::Model),
}

/// Fetch the application a worker has on a gig, if any.
pub async fn find_by_gig_and_worker(
    db: &DatabaseConnection,
    gig_id: Uuid,
    worker_id: Uuid,
) -> Result<Option<applications::Model>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::GigId.eq(gig_id))
        .filter(applications::Column::WorkerId.eq(worker_id))
        .one(db)
        .await
}

/// Apply to a gig. Idempotent per (gig, worker): when an application already
/// exists it is returned untouched, including when a concurrent insert wins
/// the race and trips the unique index.
pub async fn apply(
    db: &DatabaseConnection,
    gig_id: Uuid,
    worker_id: Uuid,
    message: String,
) -> Result<ApplyOutcome, DbErr> {
    if let Some(existing) = find_by_gig_and_worker(db, gig_id, worker_id).await? {
        return Ok(ApplyOutcome::Existing(existing));
    }

    let new_application = applications::ActiveModel {
        id: Set(Uuid::new_v4()),
        gig_id: Set(gig_id),
        worker_id: Set(worker_id),
        message: Set(message),
        status: Set(Status::Pending),
        created_at: Set(chrono::Utc::now()),
    };

    match new_application.insert(db).await {
        Ok(created) => Ok(ApplyOutcome::Created(created)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            let existing = find_by_gig_and_worker(db, gig_id, worker_id)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound("Application not found".to_string()))?;
            Ok(ApplyOutcome::Existing(existing))
        }
        Err(e) => Err(e),
    }
}

/// Fetch a single application by ID.
pub async fn get_application_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<applications::Model>, DbErr> {
    applications::Entity::find_by_id(id).one(db).await
}

/// Set the status of an application, persisting only that column.
pub async fn set_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: Status,
) -> Result<applications::Model, DbErr> {
    let application = applications::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Application not found".to_string()))?;

    let mut active: applications::ActiveModel = application.into();
    active.status = Set(status);

    active.update(db).await
}

/// Applications the user submitted, paired with their gigs, newest first.
pub async fn submitted_by(
    db: &DatabaseConnection,
    worker_id: Uuid,
) -> Result<Vec<(applications::Model, Option<gigs::Model>)>, DbErr> {
    applications::Entity::find()
        .find_also_related(gigs::Entity)
        .filter(applications::Column::WorkerId.eq(worker_id))
        .order_by_desc(applications::Column::CreatedAt)
        .all(db)
        .await
}

/// Applications received on the user's postings, paired with their gigs,
/// newest first. Worker records are batch-loaded separately by the handler.
pub async fn received_by(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<Vec<(applications::Model, Option<gigs::Model>)>, DbErr> {
    applications::Entity::find()
        .find_also_related(gigs::Entity)
        .filter(gigs::Column::OwnerId.eq(owner_id))
        .order_by_desc(applications::Column::CreatedAt)
        .all(db)
        .await
}
