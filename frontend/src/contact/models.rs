use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// `local@domain.tld`-shaped check. Deliberately loose, not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Contact form fields, named after the `name` attributes in the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Nome,
    Email,
    Telefone,
    Empresa,
    Servico,
    Mensagem,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Field::Nome, Field::Email, Field::Telefone, Field::Mensagem];

    pub fn name(self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Email => "email",
            Field::Telefone => "telefone",
            Field::Empresa => "empresa",
            Field::Servico => "servico",
            Field::Mensagem => "mensagem",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub empresa: String,
    pub servico: String,
    pub mensagem: String,
    pub terms_accepted: bool,
}

impl ContactSubmission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Nome => &self.nome,
            Field::Email => &self.email,
            Field::Telefone => &self.telefone,
            Field::Empresa => &self.empresa,
            Field::Servico => &self.servico,
            Field::Mensagem => &self.mensagem,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Nome => &mut self.nome,
            Field::Email => &mut self.email,
            Field::Telefone => &mut self.telefone,
            Field::Empresa => &mut self.empresa,
            Field::Servico => &mut self.servico,
            Field::Mensagem => &mut self.mensagem,
        };
        *slot = value;
    }
}

/// Inline error shown under a single field.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Este campo é obrigatório")]
    Required,
    #[error("Por favor, insira um e-mail válido")]
    InvalidEmail,
}

/// Page-level error, shown as a notice at the top of the form.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Por favor, aceite os termos para continuar.")]
    TermsNotAccepted,
    #[error("Por favor, insira seu e-mail.")]
    EmailMissing,
    #[error("Por favor, insira um e-mail válido.")]
    EmailInvalid,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub field_errors: BTreeMap<Field, FieldError>,
    pub form_error: Option<FormError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.form_error.is_none()
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.field_errors.get(&field).copied()
    }
}

/// Validates the whole submission from scratch. At most one error per field.
pub fn validate(submission: &ContactSubmission) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in Field::REQUIRED {
        if submission.value(field).trim().is_empty() {
            report.field_errors.insert(field, FieldError::Required);
        }
    }

    // Checked against the raw value, so stray surrounding spaces also fail.
    let email = &submission.email;
    if !email.trim().is_empty() && !is_valid_email(email) {
        report.field_errors.insert(Field::Email, FieldError::InvalidEmail);
    }

    if !submission.terms_accepted {
        report.form_error = Some(FormError::TermsNotAccepted);
    }

    report
}

/// Newsletter variant: one email field, errors are page-level. Returns the
/// trimmed address on success.
pub fn validate_newsletter_email(email: &str) -> Result<&str, FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::EmailMissing);
    }
    if !is_valid_email(email) {
        return Err(FormError::EmailInvalid);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            nome: "Ana".into(),
            email: "ana@empresa.com.br".into(),
            telefone: "(75) 98828-2970".into(),
            empresa: String::new(),
            servico: String::new(),
            mensagem: "Oi".into(),
            terms_accepted: true,
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@b.com "));
    }

    #[test]
    fn complete_submission_passes() {
        let report = validate(&complete());
        assert!(report.is_valid(), "{:?}", report);
    }

    #[test]
    fn exactly_the_missing_fields_are_flagged() {
        let mut submission = complete();
        submission.nome = "   ".into();
        submission.mensagem = String::new();

        let report = validate(&submission);
        let flagged: Vec<Field> = report.field_errors.keys().copied().collect();
        assert_eq!(flagged, vec![Field::Nome, Field::Mensagem]);
        assert_eq!(report.error_for(Field::Nome), Some(FieldError::Required));
        assert_eq!(report.error_for(Field::Email), None);
        assert!(report.form_error.is_none());
    }

    #[test]
    fn optional_fields_are_never_flagged() {
        let report = validate(&ContactSubmission::default());
        assert_eq!(report.field_errors.len(), Field::REQUIRED.len());
        assert!(report.error_for(Field::Empresa).is_none());
        assert!(report.error_for(Field::Servico).is_none());
    }

    #[test]
    fn malformed_email_is_a_field_error() {
        let mut submission = complete();
        submission.email = "ana@empresa".into();

        let report = validate(&submission);
        assert_eq!(report.error_for(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(report.field_errors.len(), 1);
    }

    #[test]
    fn blank_email_is_required_not_malformed() {
        let mut submission = complete();
        submission.email = "  ".into();
        assert_eq!(validate(&submission).error_for(Field::Email), Some(FieldError::Required));
    }

    #[test]
    fn unaccepted_terms_block_with_page_error() {
        let mut submission = complete();
        submission.terms_accepted = false;

        let report = validate(&submission);
        assert!(!report.is_valid());
        assert!(report.field_errors.is_empty());
        assert_eq!(report.form_error, Some(FormError::TermsNotAccepted));
    }

    #[test]
    fn revalidating_unchanged_form_is_stable() {
        let submission = ContactSubmission {
            email: "nope".into(),
            ..ContactSubmission::default()
        };
        let first = validate(&submission);
        let second = validate(&submission);
        assert_eq!(first, second);
        assert_eq!(first.field_errors.len(), 4);
    }

    #[test]
    fn newsletter_email_checks() {
        assert_eq!(validate_newsletter_email("   "), Err(FormError::EmailMissing));
        assert_eq!(validate_newsletter_email("x@y"), Err(FormError::EmailInvalid));
        assert_eq!(validate_newsletter_email("  x@y.com "), Ok("x@y.com"));
    }

    #[test]
    fn messages_are_localized() {
        assert_eq!(FieldError::Required.to_string(), "Este campo é obrigatório");
        assert_eq!(
            FormError::TermsNotAccepted.to_string(),
            "Por favor, aceite os termos para continuar."
        );
    }

    #[test]
    fn set_and_value_agree() {
        let mut submission = ContactSubmission::default();
        submission.set(Field::Servico, "Gestão Financeira".into());
        assert_eq!(submission.value(Field::Servico), "Gestão Financeira");
        assert_eq!(Field::Servico.name(), "servico");
        assert!(!Field::Servico.is_required());
    }
}
