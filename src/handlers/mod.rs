pub mod applications;
pub mod auth;
pub mod gigs;
pub mod pages;

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::error::AppError;
use crate::session::SessionHandle;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Public pages ──
    cfg.service(web::resource("/").route(web::get().to(pages::home)));
    cfg.service(web::resource("/jobs/").route(web::get().to(pages::jobs)));

    // ── Identity & session ──
    cfg.service(
        web::resource("/signup/")
            .route(web::get().to(auth::signup_form))
            .route(web::post().to(auth::signup)),
    );
    cfg.service(
        web::resource("/login/")
            .route(web::get().to(auth::login_form))
            .route(web::post().to(auth::login)),
    );
    cfg.service(web::resource("/logout/").route(web::post().to(auth::logout)));
    cfg.service(web::resource("/profile/").route(web::get().to(auth::profile)));

    // ── Gigs & applications (guarded by the AuthenticatedUser extractor) ──
    cfg.service(
        web::resource("/post-job/")
            .route(web::get().to(gigs::post_job_form))
            .route(web::post().to(gigs::post_job)),
    );
    cfg.service(web::resource("/inbox/").route(web::get().to(applications::inbox)));
    cfg.service(web::resource("/apply/{gig_id}/").route(web::post().to(applications::apply)));
    cfg.service(
        web::scope("/applications")
            .route("/{id}/accept/", web::post().to(applications::accept))
            .route("/{id}/reject/", web::post().to(applications::reject)),
    );

    // ── Static informational pages ──
    cfg.service(web::resource("/about/").route(web::get().to(pages::about)));
    cfg.service(web::resource("/faq/").route(web::get().to(pages::faq)));
    cfg.service(web::resource("/help/").route(web::get().to(pages::help_center)));
    cfg.service(web::resource("/contact/").route(web::get().to(pages::contact_support)));
    cfg.service(web::resource("/safety/").route(web::get().to(pages::safety_guidelines)));
    cfg.service(web::resource("/terms/").route(web::get().to(pages::terms)));
}

/// Render a template with the session's drained flash messages and login
/// state, attaching the session cookie when the token was minted just now.
pub(crate) async fn render(
    tera: &Tera,
    session: &SessionHandle,
    template: &str,
    mut ctx: Context,
) -> Result<HttpResponse, AppError> {
    ctx.insert("messages", &session.take_messages().await?);
    ctx.insert("logged_in", &session.user_id().await?.is_some());

    let body = tera.render(template, &ctx)?;

    let mut builder = HttpResponse::Ok();
    builder.content_type("text/html; charset=utf-8");
    if session.is_fresh() {
        builder.cookie(session.cookie());
    }
    Ok(builder.body(body))
}

/// 303 redirect that carries the session cookie when needed.
pub(crate) fn see_other(location: &str, session: &SessionHandle) -> HttpResponse {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location));
    if session.is_fresh() {
        builder.cookie(session.cookie());
    }
    builder.finish()
}
