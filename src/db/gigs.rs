use sea_orm::*;
use uuid::Uuid;

use crate::models::gigs::{self, NewGig};

/// How many gigs the home page features.
const FRONT_PAGE_LIMIT: u64 = 6;

/// How many of the caller's own gigs the profile page shows.
const PROFILE_LIMIT: u64 = 10;

/// Insert a new gig. New gigs always start out "open".
pub async fn insert_gig(
    db: &DatabaseConnection,
    input: NewGig,
    owner_id: Uuid,
) -> Result<gigs::Model, DbErr> {
    let new_gig = gigs::ActiveModel {
        id: Set(Uuid::new_v4()),
        owner_id: Set(owner_id),
        title: Set(input.title),
        employer_name: Set(input.employer_name),
        location: Set(input.location),
        pay: Set(input.pay),
        duration: Set(input.duration),
        workers_needed: Set(input.workers_needed),
        job_type: Set(input.job_type),
        skills: Set(input.skills),
        schedule: Set(input.schedule),
        description: Set(input.description),
        contact_info: Set(input.contact_info),
        status: Set("open".to_string()),
        created_at: Set(chrono::Utc::now()),
    };

    new_gig.insert(db).await
}

/// Fetch all gigs, newest first.
pub async fn get_all_gigs(db: &DatabaseConnection) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .order_by_desc(gigs::Column::CreatedAt)
        .all(db)
        .await
}

/// The newest gigs featured on the home page.
pub async fn front_page_gigs(db: &DatabaseConnection) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .order_by_desc(gigs::Column::CreatedAt)
        .limit(FRONT_PAGE_LIMIT)
        .all(db)
        .await
}

/// Fetch a single gig by ID.
pub async fn get_gig_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<gigs::Model>, DbErr> {
    gigs::Entity::find_by_id(id).one(db).await
}

/// The caller's own postings for the profile page, newest first.
pub async fn get_gigs_by_owner(
    db: &DatabaseConnection,
    owner_id: Uuid,
) -> Result<Vec<gigs::Model>, DbErr> {
    gigs::Entity::find()
        .filter(gigs::Column::OwnerId.eq(owner_id))
        .order_by_desc(gigs::Column::CreatedAt)
        .limit(PROFILE_LIMIT)
        .all(db)
        .await
}
