use actix_web::{HttpResponse, web};
use sea_orm::{DatabaseConnection, SqlErr};
use tera::{Context, Tera};

use crate::auth::middleware::AuthenticatedUser;
use crate::auth::password;
use crate::db::gigs as gig_db;
use crate::db::users as user_db;
use crate::error::AppError;
use crate::handlers::{render, see_other};
use crate::models::users::{LoginForm, SignupForm, UserResponse};
use crate::session::{Message, SessionHandle};

/// GET /signup/ — show the registration form.
pub async fn signup_form(
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "signup.html", Context::new()).await
}

/// POST /signup/ — create an identity and open a session.
pub async fn signup(
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    mut session: SessionHandle,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
    let new_user = match form.into_inner().validate() {
        Ok(new_user) => new_user,
        Err(errors) => {
            for error in &errors {
                session.flash(Message::error(error.message)).await?;
            }
            return render(&tera, &session, "signup.html", Context::new()).await;
        }
    };

    // Registered emails are unique; the generic message directs to login
    // without creating a second identity.
    if user_db::find_by_email(db.get_ref(), &new_user.email)
        .await?
        .is_some()
    {
        session
            .flash(Message::error("Email already registered. Please login."))
            .await?;
        return Ok(see_other("/login/", &session));
    }

    let password_hash = password::hash(&new_user.password)?;

    let user = match user_db::insert_user(db.get_ref(), new_user, password_hash).await {
        Ok(user) => user,
        // A concurrent signup for the same email beat us to the unique index.
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            session
                .flash(Message::error("Email already registered. Please login."))
                .await?;
            return Ok(see_other("/login/", &session));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %user.id, "new user registered");
    session.login(user.id).await?;
    Ok(see_other("/", &session))
}

/// GET /login/ — show the login form.
pub async fn login_form(
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    render(&tera, &session, "login.html", Context::new()).await
}

/// POST /login/ — authenticate and open a session.
///
/// Failures are deliberately indistinguishable: unknown email and wrong
/// password produce the same message.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    mut session: SessionHandle,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let email = form.normalized_email();

    let user = if email.is_empty() {
        None
    } else {
        user_db::find_by_email(db.get_ref(), &email).await?
    };

    let Some(user) = user else {
        session
            .flash(Message::error("Invalid email or password."))
            .await?;
        return render(&tera, &session, "login.html", Context::new()).await;
    };

    let verified = match password::verify(form.password(), &user.password_hash) {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(user_id = %user.id, error = %e, "stored password hash is unreadable");
            false
        }
    };

    if !verified {
        session
            .flash(Message::error("Invalid email or password."))
            .await?;
        return render(&tera, &session, "login.html", Context::new()).await;
    }

    tracing::info!(user_id = %user.id, "user logged in");
    session.login(user.id).await?;
    Ok(see_other("/", &session))
}

/// POST /logout/ — destroy the session.
pub async fn logout(mut session: SessionHandle) -> Result<HttpResponse, AppError> {
    session.logout().await?;
    session
        .flash(Message::info("You have been logged out."))
        .await?;
    Ok(see_other("/", &session))
}

/// GET /profile/ — the caller's newest postings.
pub async fn profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    tera: web::Data<Tera>,
    session: SessionHandle,
) -> Result<HttpResponse, AppError> {
    let posted = gig_db::get_gigs_by_owner(db.get_ref(), user.0.id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserResponse::from(user.0));
    ctx.insert("posted_gigs", &posted);
    render(&tera, &session, "profile.html", ctx).await
}
