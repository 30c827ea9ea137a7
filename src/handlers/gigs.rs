use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use tera::{Context, Tera};

use crate::auth::middleware::AuthenticatedUser;
use crate::db::gigs as gig_db;
use crate::error::AppError;
use crate::handlers::{render, see_other};
use crate::models::gigs::PostJobForm;
use crate::session::{Message, SessionHandle};

/// GET /post-job/ — show the posting form (requires authentication).
pub async fn post_job_form(
    _user: AuthenticatedUser,
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "post-job.html", Context::new()).await
}

/// POST /post-job/ — create a gig (requires authentication).
///
/// Validation failures redisplay the form with one message per failed field
/// and create nothing.
pub async fn post_job(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    session: SessionHandle,
    form: web::Form<PostJobForm>,
) -> Result<HttpResponse, AppError> {
    let new_gig = match form.into_inner().validate() {
        Ok(new_gig) => new_gig,
        Err(errors) => {
            for error in &errors {
                session.flash(Message::error(error.message)).await?;
            }
            return render(&tera, &session, "post-job.html", Context::new()).await;
        }
    };

    let gig = gig_db::insert_gig(db.get_ref(), new_gig, user.0.id).await?;

    tracing::info!(gig_id = %gig.id, owner_id = %user.0.id, "gig posted");
    session
        .flash(Message::success("Job posted successfully!"))
        .await?;
    Ok(see_other("/jobs/", &session))
}
