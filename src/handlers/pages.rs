use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use tera::{Context, Tera};

use crate::db::gigs as gig_db;
use crate::error::AppError;
use crate::handlers::render;
use crate::session::SessionHandle;

/// GET / — home page with the newest gigs.
pub async fn home(
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    let featured = gig_db::front_page_gigs(db.get_ref()).await?;

    let mut ctx = Context::new();
    ctx.insert("featured_gigs", &featured);
    render(&tera, &session, "index.html", ctx).await
}

/// GET /jobs/ — the full listing, newest first.
pub async fn jobs(
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    let gigs = gig_db::get_all_gigs(db.get_ref()).await?;

    let mut ctx = Context::new();
    ctx.insert("gigs", &gigs);
    render(&tera, &session, "jobs.html", ctx).await
}

// ── Static informational pages ──

pub async fn about(tera: web::Data<Tera>, session: SessionHandle) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "about.html", Context::new()).await
}

pub async fn faq(tera: web::Data<Tera>, session: SessionHandle) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "faq.html", Context::new()).await
}

pub async fn help_center(
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "help-center.html", Context::new()).await
}

pub async fn contact_support(
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "contact-support.html", Context::new()).await
}

pub async fn safety_guidelines(
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "safety-guidelines.html", Context::new()).await
}

pub async fn terms(tera: web::Data<Tera>, session: SessionHandle) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "terms-of-service.html", Context::new()).await
}
