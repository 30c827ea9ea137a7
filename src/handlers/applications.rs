use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::applications::{self as application_db, ApplyOutcome};
use crate::db::gigs as gig_db;
use crate::db::users as user_db;
use crate::error::AppError;
use crate::handlers::{render, see_other};
use crate::models::applications::{ApplyForm, Status};
use crate::models::users::UserResponse;
use crate::models::{applications, gigs, users};
use crate::session::{Message, SessionHandle};

/// POST /apply/{gig_id}/ — apply to a gig (requires authentication).
///
/// Idempotent per (gig, worker): a repeat submission reports the existing
/// application's status instead of creating or resetting anything.
pub async fn apply(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    session: SessionHandle,
    path: web::Path<Uuid>,
    form: web::Form<ApplyForm>,
) -> Result<HttpResponse, AppError> {
    let gig_id = path.into_inner();

    if gig_db::get_gig_by_id(db.get_ref(), gig_id).await?.is_none() {
        session
            .flash(Message::error("That gig no longer exists."))
            .await?;
        return Ok(see_other("/jobs/", &session));
    }

    match application_db::apply(db.get_ref(), gig_id, user.0.id, form.into_inner().message())
        .await?
    {
        ApplyOutcome::Created(application) => {
            tracing::info!(application_id = %application.id, gig_id = %gig_id, worker_id = %user.0.id, "application created");
            session
                .flash(Message::success("Applied successfully!"))
                .await?;
        }
        ApplyOutcome::Existing(application) => {
            session
                .flash(Message::info(format!(
                    "You already applied. Current status: {}.",
                    application.status.as_str()
                )))
                .await?;
        }
    }

    Ok(see_other("/inbox/", &session))
}

/// POST /applications/{id}/accept/ — gig owner accepts an application.
pub async fn accept(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    session: SessionHandle,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    transition(user, db, session, path.into_inner(), Status::Accepted).await
}

/// POST /applications/{id}/reject/ — gig owner rejects an application.
pub async fn reject(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    session: SessionHandle,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    transition(user, db, session, path.into_inner(), Status::Rejected).await
}

/// Shared accept/reject path. Only the owner of the associated gig may
/// transition an application; there is no guard against re-transitioning a
/// terminal one (last writer wins).
async fn transition(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    session: SessionHandle,
    application_id: Uuid,
    status: Status,
) -> Result<HttpResponse, AppError> {
    let Some(application) =
        application_db::get_application_by_id(db.get_ref(), application_id).await?
    else {
        session
            .flash(Message::error("That application no longer exists."))
            .await?;
        return Ok(see_other("/inbox/", &session));
    };

    let Some(gig) = gig_db::get_gig_by_id(db.get_ref(), application.gig_id).await? else {
        session
            .flash(Message::error("That gig no longer exists."))
            .await?;
        return Ok(see_other("/inbox/", &session));
    };

    if gig.owner_id != user.0.id {
        session.flash(Message::error("Not allowed.")).await?;
        return Ok(see_other("/inbox/", &session));
    }

    application_db::set_status(db.get_ref(), application_id, status.clone()).await?;

    tracing::info!(application_id = %application_id, status = status.as_str(), "application status updated");
    let confirmation = match status {
        Status::Accepted => "Application accepted.",
        _ => "Application rejected.",
    };
    session.flash(Message::success(confirmation)).await?;
    Ok(see_other("/inbox/", &session))
}

// ── Inbox ──

/// One row of the "what I applied to" partition.
#[derive(Debug, Serialize)]
pub struct SubmittedRow {
    pub application: applications::Model,
    pub gig: gigs::Model,
}

/// One row of the "who applied to my postings" partition.
#[derive(Debug, Serialize)]
pub struct ReceivedRow {
    pub application: applications::Model,
    pub gig: gigs::Model,
    pub worker: UserResponse,
}

/// Applications split by status, each bucket newest first.
#[derive(Debug, Serialize)]
pub struct Buckets<T> {
    pub pending: Vec<T>,
    pub accepted: Vec<T>,
    pub rejected: Vec<T>,
}

impl<T> Default for Buckets<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Buckets<T> {
    fn push(&mut self, status: Status, row: T) {
        match status {
            Status::Pending => self.pending.push(row),
            Status::Accepted => self.accepted.push(row),
            Status::Rejected => self.rejected.push(row),
        }
    }
}

/// GET /inbox/ — both partitions, bucketed by status (requires
/// authentication).
pub async fn inbox(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    let submitted = application_db::submitted_by(db.get_ref(), user.0.id).await?;
    let received = application_db::received_by(db.get_ref(), user.0.id).await?;

    // One batched lookup for the applicants on the employer side.
    let worker_ids: Vec<Uuid> = received
        .iter()
        .map(|(application, _)| application.worker_id)
        .collect();
    let workers: HashMap<Uuid, users::Model> = user_db::get_users_by_ids(db.get_ref(), worker_ids)
        .await?
        .into_iter()
        .map(|worker| (worker.id, worker))
        .collect();

    let mut mine = Buckets::default();
    for (application, gig) in submitted {
        // The gig is never absent in practice: applications cascade-delete
        // with their gig.
        if let Some(gig) = gig {
            mine.push(application.status.clone(), SubmittedRow { application, gig });
        }
    }

    let mut incoming = Buckets::default();
    for (application, gig) in received {
        let (Some(gig), Some(worker)) = (gig, workers.get(&application.worker_id)) else {
            continue;
        };
        incoming.push(
            application.status.clone(),
            ReceivedRow {
                application,
                gig,
                worker: UserResponse::from(worker.clone()),
            },
        );
    }

    let mut ctx = Context::new();
    ctx.insert("mine", &mine);
    ctx.insert("received", &incoming);
    render(&tera, &session, "inbox.html", ctx).await
}
