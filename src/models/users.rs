use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{FieldError, required};

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gigs::Entity")]
    Gigs,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
}

impl Related<super::gigs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gigs.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Validated signup data, ready for insertion. The email is lowercased.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Raw body of POST /signup/.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub accept_terms: Option<String>,
}

impl SignupForm {
    /// Field-by-field validation. Passwords are deliberately not trimmed.
    pub fn validate(self) -> Result<NewUser, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = required("name", self.name, &mut errors);
        let email = required("email", self.email, &mut errors).to_lowercase();
        let password = self.password.unwrap_or_default();
        if password.is_empty() {
            errors.push(FieldError::new("password", "This field is required."));
        }

        if self.accept_terms.as_deref() != Some("on") {
            errors.push(FieldError::new(
                "accept_terms",
                "Please accept the Terms of Service.",
            ));
        }

        let confirm = self.confirm_password.unwrap_or_default();
        if !password.is_empty() && password != confirm {
            errors.push(FieldError::new(
                "confirm_password",
                "Passwords do not match.",
            ));
        }

        if errors.is_empty() {
            Ok(NewUser {
                name,
                email,
                password,
            })
        } else {
            Err(errors)
        }
    }
}

/// Raw body of POST /login/.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginForm {
    /// Email lowercased and trimmed the same way signup stores it.
    pub fn normalized_email(&self) -> String {
        self.email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }
}

/// A safe user representation for templates (never exposes the hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTimeUtc,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            created_at: m.created_at,
        }
    }
}
