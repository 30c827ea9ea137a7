//! Form validation tests for the signup, login and post-job DTOs.
//!
//! These exercise the typed validation layer only; no database or server is
//! needed. Run with: `cargo test --test forms_test`

use gigboard_backend::models::gigs::{JobType, PostJobForm};
use gigboard_backend::models::users::{LoginForm, SignupForm};

/// Helper: a post-job form with every required field present.
fn complete_post_job_form() -> PostJobForm {
    PostJobForm {
        title: Some("Mover".to_string()),
        employer_name: Some("Acme".to_string()),
        location: Some("Pune".to_string()),
        pay: Some("₹500/day".to_string()),
        description: Some("Lift boxes".to_string()),
        ..Default::default()
    }
}

#[test]
fn post_job_accepts_a_complete_form() {
    let gig = complete_post_job_form().validate().expect("form is valid");

    assert_eq!(gig.title, "Mover");
    assert_eq!(gig.employer_name, "Acme");
    assert_eq!(gig.location, "Pune");
    assert_eq!(gig.pay, "₹500/day");
    assert_eq!(gig.description, "Lift boxes");
    assert_eq!(gig.workers_needed, 1);
    assert_eq!(gig.job_type, None);
    assert_eq!(gig.duration, "");
    assert_eq!(gig.skills, "");
}

#[test]
fn post_job_trims_whitespace() {
    let mut form = complete_post_job_form();
    form.title = Some("  Mover  ".to_string());
    form.skills = Some("  lifting, driving  ".to_string());

    let gig = form.validate().expect("form is valid");
    assert_eq!(gig.title, "Mover");
    assert_eq!(gig.skills, "lifting, driving");
}

#[test]
fn post_job_rejects_each_missing_required_field() {
    for field in ["title", "employer_name", "location", "pay", "description"] {
        let mut form = complete_post_job_form();
        match field {
            "title" => form.title = Some("   ".to_string()),
            "employer_name" => form.employer_name = None,
            "location" => form.location = Some(String::new()),
            "pay" => form.pay = None,
            "description" => form.description = Some(" ".to_string()),
            _ => unreachable!(),
        }

        let errors = form.validate().expect_err("form must be invalid");
        assert!(
            errors.iter().any(|e| e.field == field),
            "expected an error on {field}, got {errors:?}"
        );
    }
}

#[test]
fn post_job_workers_needed_defaults_to_one() {
    let mut form = complete_post_job_form();
    form.workers_needed = Some("  ".to_string());
    assert_eq!(form.validate().unwrap().workers_needed, 1);

    let mut form = complete_post_job_form();
    form.workers_needed = None;
    assert_eq!(form.validate().unwrap().workers_needed, 1);
}

#[test]
fn post_job_workers_needed_parses_positive_integers() {
    let mut form = complete_post_job_form();
    form.workers_needed = Some("3".to_string());
    assert_eq!(form.validate().unwrap().workers_needed, 3);
}

#[test]
fn post_job_workers_needed_rejects_garbage_and_zero() {
    for bad in ["abc", "0", "-2", "1.5"] {
        let mut form = complete_post_job_form();
        form.workers_needed = Some(bad.to_string());

        let errors = form.validate().expect_err("must be invalid");
        assert!(errors.iter().any(|e| e.field == "workers_needed"));
    }
}

#[test]
fn post_job_parses_job_type() {
    let mut form = complete_post_job_form();
    form.job_type = Some("part-time".to_string());
    assert_eq!(form.validate().unwrap().job_type, Some(JobType::PartTime));

    let mut form = complete_post_job_form();
    form.job_type = Some("freelance".to_string());
    let errors = form.validate().expect_err("unknown job type");
    assert!(errors.iter().any(|e| e.field == "job_type"));
}

/// Helper: a signup form that passes validation.
fn complete_signup_form() -> SignupForm {
    SignupForm {
        name: Some("Alice".to_string()),
        email: Some("alice@example.com".to_string()),
        password: Some("hunter2hunter2".to_string()),
        confirm_password: Some("hunter2hunter2".to_string()),
        accept_terms: Some("on".to_string()),
    }
}

#[test]
fn signup_accepts_a_complete_form() {
    let user = complete_signup_form().validate().expect("form is valid");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password, "hunter2hunter2");
}

#[test]
fn signup_normalizes_email_to_lowercase() {
    let mut form = complete_signup_form();
    form.email = Some("  Alice@Example.COM ".to_string());

    let user = form.validate().expect("form is valid");
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn signup_rejects_missing_required_fields() {
    let mut form = complete_signup_form();
    form.name = None;
    form.password = None;

    let errors = form.validate().expect_err("must be invalid");
    assert!(errors.iter().any(|e| e.field == "name"));
    assert!(errors.iter().any(|e| e.field == "password"));
}

#[test]
fn signup_requires_accepting_the_terms() {
    let mut form = complete_signup_form();
    form.accept_terms = None;

    let errors = form.validate().expect_err("must be invalid");
    assert!(errors.iter().any(|e| e.field == "accept_terms"));
}

#[test]
fn signup_rejects_mismatched_passwords() {
    let mut form = complete_signup_form();
    form.confirm_password = Some("something-else".to_string());

    let errors = form.validate().expect_err("must be invalid");
    assert!(errors.iter().any(|e| e.field == "confirm_password"));
}

#[test]
fn signup_does_not_trim_passwords() {
    let mut form = complete_signup_form();
    form.password = Some(" spaced ".to_string());
    form.confirm_password = Some(" spaced ".to_string());

    let user = form.validate().expect("form is valid");
    assert_eq!(user.password, " spaced ");
}

#[test]
fn login_normalizes_email_like_signup_stores_it() {
    let form = LoginForm {
        email: Some("  Bob@Example.COM ".to_string()),
        password: Some("pw".to_string()),
    };
    assert_eq!(form.normalized_email(), "bob@example.com");
    assert_eq!(form.password(), "pw");
}

#[test]
fn login_handles_absent_fields() {
    let form = LoginForm::default();
    assert_eq!(form.normalized_email(), "");
    assert_eq!(form.password(), "");
}
