use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::contact::form::REDIRECT_NOTICE;
use crate::contact::models::{validate_newsletter_email, FormError};
use crate::contact::notice::{FormKind, Notice, NoticeBanner, NoticeKind};
use crate::utils::whatsapp::{open_chat, ChatLink, Composer};

pub fn submit_newsletter(email: &str, composer: &Composer) -> Result<ChatLink, FormError> {
    let email = validate_newsletter_email(email)?;
    Ok(composer.newsletter_link(email))
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    pub notice: Option<Notice>,
    pub on_notice: Callback<(FormKind, NoticeKind, String)>,
}

#[function_component]
pub fn NewsletterForm(props: &NewsletterFormProps) -> Html {
    let composer = use_context::<Composer>().unwrap_or_default();
    let email = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit_newsletter(&email, &composer) {
                Ok(link) => {
                    log::info!("Newsletter signup valid, forwarding to WhatsApp");
                    open_chat(&link);
                    on_notice.emit((
                        FormKind::Newsletter,
                        NoticeKind::Success,
                        REDIRECT_NOTICE.to_string(),
                    ));
                    email.set(String::new());
                }
                Err(e) => {
                    on_notice.emit((FormKind::Newsletter, NoticeKind::Error, e.to_string()));
                }
            }
        })
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    html! {
        <section class="newsletter">
            <h2>{"Receba nossas novidades"}</h2>
            <p>{"Dicas de gestão e estratégia direto no seu WhatsApp."}</p>
            <form class="newsletter-form" {onsubmit} novalidate={true}>
                <NoticeBanner notice={props.notice.clone()} />
                <input
                    type="email"
                    name="email"
                    placeholder="Seu melhor e-mail"
                    value={(*email).clone()}
                    {oninput}
                />
                <button type="submit">{"Inscrever-se"}</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_is_trimmed_into_link() {
        let link = submit_newsletter("  x@y.com ", &Composer::default()).unwrap();
        assert_eq!(link, Composer::default().newsletter_link("x@y.com"));
    }

    #[test]
    fn empty_and_malformed_emails_are_page_errors() {
        let composer = Composer::default();
        assert_eq!(submit_newsletter("", &composer), Err(FormError::EmailMissing));
        assert_eq!(submit_newsletter("x@y", &composer), Err(FormError::EmailInvalid));
        assert_eq!(
            submit_newsletter(" ", &composer).unwrap_err().to_string(),
            "Por favor, insira seu e-mail."
        );
    }
}
