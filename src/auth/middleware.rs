use actix_web::http::{StatusCode, header};
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::db::users::get_user_by_id;
use crate::models::users;
use crate::session::{SESSION_COOKIE, SessionStore};

/// Extractor for handlers that require a signed-in caller. Resolves the
/// session cookie to a user row; anything short of that redirects to the
/// login page instead of erroring.
pub struct AuthenticatedUser(pub users::Model);

/// Rejection response for guarded routes: a 303 to /login/.
#[derive(Debug)]
pub struct AuthRedirect;

impl fmt::Display for AuthRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("authentication required")
    }
}

impl ResponseError for AuthRedirect {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/login/"))
            .finish()
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. The session token travels in the cookie.
            let token = req
                .cookie(SESSION_COOKIE)
                .map(|c| c.value().to_string())
                .ok_or(AuthRedirect)?;

            // 2. Resolve it against the session store.
            let store = req.app_data::<web::Data<SessionStore>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Session store not configured")
            })?;

            let user_id = store
                .user_id(&token)
                .await
                .map_err(|e| {
                    actix_web::error::ErrorInternalServerError(format!("Session store error: {e}"))
                })?
                .ok_or(AuthRedirect)?;

            // 3. Load the user row. A dangling session (user deleted) is
            //    treated the same as no session.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            let user = get_user_by_id(db.get_ref(), user_id)
                .await
                .map_err(|e| {
                    actix_web::error::ErrorInternalServerError(format!("Database error: {e}"))
                })?
                .ok_or(AuthRedirect)?;

            Ok(AuthenticatedUser(user))
        })
    }
}
