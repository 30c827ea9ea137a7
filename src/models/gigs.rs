use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{FieldError, optional, required};

/// Job type stored as a kebab-case string in the database. The column is
/// nullable; the posting form treats it as optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[sea_orm(string_value = "full-time")]
    FullTime,
    #[sea_orm(string_value = "part-time")]
    PartTime,
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "temporary")]
    Temporary,
}

impl JobType {
    /// Parse the value submitted by the job-type `<select>`.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "temporary" => Some(Self::Temporary),
            _ => None,
        }
    }
}

/// SeaORM entity for the `gigs` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gigs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub employer_name: String,
    pub location: String,
    pub pay: String,
    pub duration: String,
    pub workers_needed: i32,
    pub job_type: Option<JobType>,
    pub skills: String,
    pub schedule: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub contact_info: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Validated gig data, ready for insertion.
#[derive(Debug, Clone)]
pub struct NewGig {
    pub title: String,
    pub employer_name: String,
    pub location: String,
    pub pay: String,
    pub duration: String,
    pub workers_needed: i32,
    pub job_type: Option<JobType>,
    pub skills: String,
    pub schedule: String,
    pub description: String,
    pub contact_info: String,
}

/// Raw body of POST /post-job/.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostJobForm {
    pub title: Option<String>,
    pub employer_name: Option<String>,
    pub location: Option<String>,
    pub pay: Option<String>,
    pub duration: Option<String>,
    pub workers_needed: Option<String>,
    pub job_type: Option<String>,
    pub skills: Option<String>,
    pub schedule: Option<String>,
    pub description: Option<String>,
    pub contact_info: Option<String>,
}

impl PostJobForm {
    /// Field-by-field validation: title, employer_name, location, pay and
    /// description are required after trimming; workers_needed defaults to 1
    /// when blank and must otherwise be a positive integer.
    pub fn validate(self) -> Result<NewGig, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = required("title", self.title, &mut errors);
        let employer_name = required("employer_name", self.employer_name, &mut errors);
        let location = required("location", self.location, &mut errors);
        let pay = required("pay", self.pay, &mut errors);
        let description = required("description", self.description, &mut errors);

        let workers_needed = match self.workers_needed.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<i32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    errors.push(FieldError::new(
                        "workers_needed",
                        "Enter a positive whole number.",
                    ));
                    1
                }
            },
        };

        let job_type = match self.job_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match JobType::from_form_value(raw) {
                Some(job_type) => Some(job_type),
                None => {
                    errors.push(FieldError::new("job_type", "Choose a valid job type."));
                    None
                }
            },
        };

        if errors.is_empty() {
            Ok(NewGig {
                title,
                employer_name,
                location,
                pay,
                duration: optional(self.duration),
                workers_needed,
                job_type,
                skills: optional(self.skills),
                schedule: optional(self.schedule),
                description,
                contact_info: optional(self.contact_info),
            })
        } else {
            Err(errors)
        }
    }
}
