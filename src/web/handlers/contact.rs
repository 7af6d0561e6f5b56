// Contact page and simulated contact-form submission
//
// The form is never forwarded anywhere: a valid submission is logged and
// acknowledged. htmx requests (HX-Request header) get only the result
// fragment; plain form posts get the whole page back.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::content::ContentStore;
use crate::web::error::{render, AppError};
use crate::web::view_models::SiteChrome;
use crate::web::AppState;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ContactForm {
    /// Check required fields, the email shape, and that a chosen service exists.
    pub fn validate(&self, store: &ContentStore) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let required = [
            ("firstName", &self.first_name, "الاسم الأول مطلوب"),
            ("lastName", &self.last_name, "اسم العائلة مطلوب"),
            ("email", &self.email, "البريد الإلكتروني مطلوب"),
            ("message", &self.message, "الرسالة مطلوبة"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.push(FieldError { field, message });
            }
        }

        if !self.email.trim().is_empty() && !is_plausible_email(self.email.trim()) {
            errors.push(FieldError {
                field: "email",
                message: "البريد الإلكتروني غير صالح",
            });
        }

        let service = self.service.trim();
        if !service.is_empty() && store.get_service(service).is_none() {
            errors.push(FieldError {
                field: "service",
                message: "الخدمة المختارة غير متوفرة",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, Default)]
pub enum ContactOutcome {
    /// Form not submitted yet.
    #[default]
    Pending,
    Sent,
    Invalid(Vec<FieldError>),
}

impl ContactOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, ContactOutcome::Sent)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            ContactOutcome::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

/// Option in the service select.
pub struct ServiceOption {
    pub id: String,
    pub title: String,
    pub selected: bool,
}

fn service_options(store: &ContentStore, selected: &str) -> Vec<ServiceOption> {
    store
        .list_services()
        .iter()
        .map(|s| ServiceOption {
            id: s.id.clone(),
            title: s.title.clone(),
            selected: s.id == selected,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub site: SiteChrome,
    pub form: ContactForm,
    pub services: Vec<ServiceOption>,
    pub outcome: ContactOutcome,
}

impl ContactTemplate {
    /// Error message for a form field, empty when the field is fine.
    pub fn error_for(&self, field: &str) -> &str {
        self.outcome
            .errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
            .unwrap_or("")
    }
}

#[derive(Template)]
#[template(path = "partials/contact_result.html")]
pub struct ContactResultTemplate {
    pub outcome: ContactOutcome,
}

pub async fn contact_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = ContactTemplate {
        site: state.chrome(),
        services: service_options(&state.store, ""),
        form: ContactForm::default(),
        outcome: ContactOutcome::Pending,
    };

    render(&template)
}

pub async fn submit_contact(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let (status, outcome) = match form.validate(&state.store) {
        Ok(()) => {
            let service = form.service.trim();
            tracing::info!(
                "Contact request received (service: {})",
                if service.is_empty() { "general" } else { service }
            );
            (StatusCode::OK, ContactOutcome::Sent)
        }
        Err(errors) => {
            tracing::debug!("Contact form rejected with {} errors", errors.len());
            (StatusCode::UNPROCESSABLE_ENTITY, ContactOutcome::Invalid(errors))
        }
    };

    // htmx only swaps 2xx responses into the page
    if is_htmx {
        let body = render(&ContactResultTemplate { outcome })?;
        return Ok((StatusCode::OK, body).into_response());
    }

    // A sent form comes back empty; a rejected one keeps what was typed
    let form = if outcome.is_sent() { ContactForm::default() } else { form };
    let template = ContactTemplate {
        site: state.chrome(),
        services: service_options(&state.store, &form.service),
        form,
        outcome,
    };
    let body = render(&template)?;
    Ok((status, body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_email() {
        assert!(is_plausible_email("user@example.sa"));
        assert!(!is_plausible_email("user@"));
        assert!(!is_plausible_email("@example.sa"));
        assert!(!is_plausible_email("user example.sa"));
        assert!(!is_plausible_email("a@b@c"));
        assert!(!is_plausible_email("us er@example.sa"));
    }

    #[test]
    fn test_outcome_errors() {
        let outcome = ContactOutcome::Invalid(vec![FieldError {
            field: "email",
            message: "x",
        }]);
        assert_eq!(outcome.errors().len(), 1);
        assert!(!outcome.is_sent());
        assert!(ContactOutcome::Sent.errors().is_empty());
    }
}
