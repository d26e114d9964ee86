//! Form validation shared by pages and state holders.
//!
//! Every validator trims its inputs and returns the normalized values, so
//! callers store exactly what was checked. Error `Display` text is shown
//! inline under the form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::model::Role;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_NAME_LEN: usize = 80;
pub const MAX_SUBJECT_LEN: usize = 120;
pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0} is already a team member")]
    DuplicateMember(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("This ticket is closed")]
    TicketClosed,
}

/// Signup form fields as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub company_name: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Individual,
            company_name: String::new(),
        }
    }
}

/// Shape check: one `@`, non-empty local part, dotted domain, no spaces.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// # Errors
///
/// [`ValidationError::Required`] when blank, [`ValidationError::InvalidEmail`]
/// when malformed.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = required(raw, "Email")?;
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_ascii_lowercase())
}

/// Returns the normalized email and the password as typed.
///
/// # Errors
///
/// Blank fields or a malformed email.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), ValidationError> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    Ok((email, password.to_owned()))
}

/// # Errors
///
/// The first failing field, in form order.
pub fn validate_signup(form: &SignupForm) -> Result<SignupForm, ValidationError> {
    let name = validate_name(&form.name, "Name")?;
    let email = validate_email(&form.email)?;
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    let company_name = match form.role {
        Role::Organization => validate_name(&form.company_name, "Company name")?,
        Role::Individual => String::new(),
    };
    Ok(SignupForm {
        name,
        email,
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        role: form.role,
        company_name,
    })
}

/// Returns the trimmed name and, for organizations, the trimmed company.
///
/// # Errors
///
/// Blank or over-long name/company.
pub fn validate_profile(
    name: &str,
    company_name: &str,
    role: Role,
) -> Result<(String, Option<String>), ValidationError> {
    let name = validate_name(name, "Name")?;
    let company = match role {
        Role::Organization => Some(validate_name(company_name, "Company name")?),
        Role::Individual => None,
    };
    Ok((name, company))
}

/// Returns the trimmed subject and message.
///
/// # Errors
///
/// Blank/over-long subject or a message under [`MIN_MESSAGE_LEN`].
pub fn validate_ticket(subject: &str, message: &str) -> Result<(String, String), ValidationError> {
    let subject = required(subject, "Subject")?;
    if subject.chars().count() > MAX_SUBJECT_LEN {
        return Err(ValidationError::TooLong { field: "Subject", max: MAX_SUBJECT_LEN });
    }
    let message = required(message, "Message")?;
    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(ValidationError::TooShort { field: "Message", min: MIN_MESSAGE_LEN });
    }
    Ok((subject, message))
}

/// # Errors
///
/// [`ValidationError::Required`] when the reply is blank.
pub fn validate_reply(body: &str) -> Result<String, ValidationError> {
    required(body, "Reply")
}

fn validate_name(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = required(raw, field)?;
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong { field, max: MAX_NAME_LEN });
    }
    Ok(value)
}

fn required(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value.to_owned())
}
