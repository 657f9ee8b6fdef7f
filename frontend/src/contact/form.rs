use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::models::{validate, ContactSubmission, Field, ValidationReport};
use crate::contact::notice::{FormKind, Notice, NoticeBanner, NoticeKind};
use crate::pages::services::SERVICES;
use crate::utils::phone::format_phone;
use crate::utils::whatsapp::{open_chat, ChatLink, Composer};

pub const REDIRECT_NOTICE: &str = "Redirecionando para WhatsApp...";

/// What the form turns into after a valid submit: the one chat link to open
/// and the blank state the form is reset to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub link: ChatLink,
    pub next: ContactSubmission,
    pub report: ValidationReport,
}

/// Validates and, when everything passes, builds the chat link for this
/// submission. On rejection the report says which fields to annotate.
pub fn submit_contact(
    submission: &ContactSubmission,
    composer: &Composer,
) -> Result<Accepted, ValidationReport> {
    let report = validate(submission);
    if !report.is_valid() {
        return Err(report);
    }
    Ok(Accepted {
        link: composer.contact_link(submission),
        next: ContactSubmission::default(),
        report: ValidationReport::default(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub notice: Option<Notice>,
    pub on_notice: Callback<(FormKind, NoticeKind, String)>,
}

#[function_component]
pub fn ContactForm(props: &ContactFormProps) -> Html {
    let composer = use_context::<Composer>().unwrap_or_default();
    let submission = use_state(ContactSubmission::default);
    let report = use_state(ValidationReport::default);
    let service_ref = use_node_ref();

    let onsubmit = {
        let submission = submission.clone();
        let report = report.clone();
        let on_notice = props.on_notice.clone();
        let service_ref = service_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit_contact(&submission, &composer) {
                Ok(accepted) => {
                    log::info!("Contact form valid, forwarding to WhatsApp");
                    open_chat(&accepted.link);
                    on_notice.emit((
                        FormKind::Contact,
                        NoticeKind::Success,
                        REDIRECT_NOTICE.to_string(),
                    ));
                    // The browser keeps a picked option regardless of `selected`
                    if let Some(select) = service_ref.cast::<HtmlSelectElement>() {
                        select.set_value(&accepted.next.servico);
                    }
                    submission.set(accepted.next);
                    report.set(accepted.report);
                }
                Err(rejected) => {
                    log::debug!(
                        "Contact form rejected: {} field error(s), form error {:?}",
                        rejected.field_errors.len(),
                        rejected.form_error
                    );
                    if let Some(form_error) = rejected.form_error {
                        on_notice.emit((
                            FormKind::Contact,
                            NoticeKind::Error,
                            form_error.to_string(),
                        ));
                    }
                    report.set(rejected);
                }
            }
        })
    };

    let update = |field: Field| {
        let submission = submission.clone();
        move |value: String| {
            let mut next = (*submission).clone();
            next.set(field, value);
            submission.set(next);
        }
    };

    let text_input = |field: Field,
                      label: &'static str,
                      input_type: &'static str,
                      placeholder: &'static str| {
        let set = update(field);
        let error = report.error_for(field);
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        });
        html! {
            <div class="form-group">
                <label for={field.name()}>
                    {label}
                    if field.is_required() { <span class="required">{" *"}</span> }
                </label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={input_type}
                    placeholder={placeholder}
                    class={classes!(error.is_some().then_some("input-error"))}
                    value={submission.value(field).to_string()}
                    {oninput}
                />
                <FieldErrorText error={error.map(|e| e.to_string())} />
            </div>
        }
    };

    let on_phone_input = {
        let set = update(Field::Telefone);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let masked = format_phone(&input.value());
            input.set_value(&masked);
            set(masked);
        })
    };

    let on_service_change = {
        let set = update(Field::Servico);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };

    let on_message_input = {
        let set = update(Field::Mensagem);
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            set(textarea.value());
        })
    };

    let on_terms_change = {
        let submission = submission.clone();
        Callback::from(move |e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*submission).clone();
            next.terms_accepted = checkbox.checked();
            submission.set(next);
        })
    };

    let phone_error = report.error_for(Field::Telefone);
    let message_error = report.error_for(Field::Mensagem);

    html! {
        <form id="contactForm" class="contact-form" {onsubmit} novalidate={true}>
            <NoticeBanner notice={props.notice.clone()} />
            { text_input(Field::Nome, "Nome", "text", "Seu nome completo") }
            { text_input(Field::Email, "E-mail", "email", "seu@email.com") }
            <div class="form-group">
                <label for="telefone">{"Telefone"}<span class="required">{" *"}</span></label>
                <input
                    id="telefone"
                    name="telefone"
                    type="tel"
                    placeholder="(00) 00000-0000"
                    class={classes!(phone_error.is_some().then_some("input-error"))}
                    value={submission.telefone.clone()}
                    oninput={on_phone_input}
                />
                <FieldErrorText error={phone_error.map(|e| e.to_string())} />
            </div>
            { text_input(Field::Empresa, "Empresa", "text", "Nome da sua empresa") }
            <div class="form-group">
                <label for="servico">{"Serviço de Interesse"}</label>
                <select
                    id="servico"
                    name="servico"
                    ref={service_ref}
                    onchange={on_service_change}
                >
                    <option value="" selected={submission.servico.is_empty()}>
                        {"Selecione um serviço"}
                    </option>
                    { for SERVICES.iter().map(|service| html! {
                        <option value={service.name} selected={submission.servico == service.name}>
                            {service.name}
                        </option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="mensagem">{"Mensagem"}<span class="required">{" *"}</span></label>
                <textarea
                    id="mensagem"
                    name="mensagem"
                    rows="5"
                    placeholder="Conte um pouco sobre o seu desafio"
                    class={classes!(message_error.is_some().then_some("input-error"))}
                    value={submission.mensagem.clone()}
                    oninput={on_message_input}
                />
                <FieldErrorText error={message_error.map(|e| e.to_string())} />
            </div>
            <div class="form-group checkbox-group">
                <label>
                    <input
                        type="checkbox"
                        checked={submission.terms_accepted}
                        onchange={on_terms_change}
                    />
                    {" Concordo com a política de privacidade e autorizo o contato."}
                </label>
            </div>
            <button type="submit" class="submit-button">{"Enviar pelo WhatsApp"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct FieldErrorTextProps {
    error: Option<String>,
}

#[function_component]
fn FieldErrorText(props: &FieldErrorTextProps) -> Html {
    match &props.error {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChatConfig;
    use crate::contact::models::{FieldError, FormError};

    fn composer() -> Composer {
        Composer::new(ChatConfig::new("5575000000000", "https://wa.me").unwrap())
    }

    fn valid() -> ContactSubmission {
        ContactSubmission {
            nome: "Ana".into(),
            email: "a@b.com".into(),
            telefone: "(75) 98828-2970".into(),
            mensagem: "Oi".into(),
            terms_accepted: true,
            ..ContactSubmission::default()
        }
    }

    #[test]
    fn valid_submission_yields_one_link() {
        let accepted = submit_contact(&valid(), &composer()).unwrap();
        let link = accepted.link.as_str();
        assert!(link.starts_with("https://wa.me/5575000000000?text="));
        assert!(link.contains("Mensagem"));
    }

    #[test]
    fn valid_submission_clears_the_form() {
        let mut submission = valid();
        submission.empresa = "ACME".into();
        submission.servico = "Gestão Financeira".into();

        let accepted = submit_contact(&submission, &composer()).unwrap();
        assert_eq!(accepted.next, ContactSubmission::default());
        assert!(!accepted.next.terms_accepted);
        assert!(accepted.next.servico.is_empty());
        for field in Field::REQUIRED {
            assert_eq!(accepted.next.value(field), "");
        }
        assert!(accepted.report.is_valid());
        assert!(accepted.report.field_errors.is_empty());
    }

    #[test]
    fn missing_fields_yield_no_link() {
        let mut submission = valid();
        submission.telefone = " ".into();

        let report = submit_contact(&submission, &composer()).unwrap_err();
        assert_eq!(report.field_errors.len(), 1);
        assert_eq!(report.error_for(Field::Telefone), Some(FieldError::Required));
    }

    #[test]
    fn terms_gate_blocks_otherwise_valid_form() {
        let mut submission = valid();
        submission.terms_accepted = false;

        let report = submit_contact(&submission, &composer()).unwrap_err();
        assert!(report.field_errors.is_empty());
        assert_eq!(report.form_error, Some(FormError::TermsNotAccepted));
    }

    #[test]
    fn link_carries_raw_field_values() {
        let mut submission = valid();
        submission.empresa = "ACME".into();
        let accepted = submit_contact(&submission, &composer()).unwrap();
        assert_eq!(accepted.link, composer().contact_link(&submission));
        assert!(accepted.link.as_str().contains("ACME"));
    }
}
