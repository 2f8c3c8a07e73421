use crate::domain::model::{Ack, EnrollmentPayload, SignupPayload};
use crate::utils::error::{RelayError, Result};

pub const BETA_WELCOME: &str = "Welcome to the beta program!";
pub const COURSE_WELCOME: &str = "Welcome email queued!";

/// Logs a beta signup and acknowledges it. Nothing is persisted yet; the
/// storage backend for signups is an unresolved external dependency.
pub fn record_beta_signup(payload: &SignupPayload) -> Result<Ack> {
    let email = required_email(payload.email.as_deref())?;

    tracing::info!(
        email = %email,
        name = payload.name.as_deref().unwrap_or(""),
        interest = payload.interest.as_deref().unwrap_or(""),
        "beta signup received"
    );
    // TODO: hand the record to the signup store once one is chosen

    Ok(Ack {
        success: true,
        message: BETA_WELCOME.to_string(),
        email: email.to_string(),
    })
}

/// Logs a course enrollment and acknowledges it. No email is actually sent;
/// delivery goes through a queue that does not exist yet.
pub fn record_course_enrollment(payload: &EnrollmentPayload) -> Result<Ack> {
    let email = required_email(payload.email.as_deref())?;

    tracing::info!(
        email = %email,
        name = payload.name.as_deref().unwrap_or(""),
        course = payload.course_name.as_deref().unwrap_or(""),
        "course welcome email requested"
    );
    // TODO: enqueue the welcome email once the mail queue exists

    Ok(Ack {
        success: true,
        message: COURSE_WELCOME.to_string(),
        email: email.to_string(),
    })
}

fn required_email(value: Option<&str>) -> Result<&str> {
    match value {
        Some(email) if !email.trim().is_empty() => Ok(email),
        _ => Err(RelayError::ValidationError {
            message: "email is required".to_string(),
        }),
    }
}
