use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::ChatConfig;
use crate::contact::models::ContactSubmission;

/// Characters `encodeURIComponent` leaves untouched, so links match what the
/// browser itself would produce.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A ready-to-open chat link with the message pre-filled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatLink(String);

impl ChatLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns form values into WhatsApp messages and links for a fixed recipient.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composer {
    config: ChatConfig,
}

impl Composer {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    pub fn contact_message(&self, submission: &ContactSubmission) -> String {
        let mut message = format!("*Contato via Site - {}*\n\n", self.config.business_name());
        message.push_str(&format!("*Nome:* {}\n", submission.nome));
        message.push_str(&format!("*E-mail:* {}\n", submission.email));
        message.push_str(&format!("*Telefone:* {}\n", submission.telefone));

        if !submission.empresa.is_empty() {
            message.push_str(&format!("*Empresa:* {}\n", submission.empresa));
        }
        if !submission.servico.is_empty() {
            message.push_str(&format!("*Serviço de Interesse:* {}\n", submission.servico));
        }

        message.push_str(&format!("\n*Mensagem:*\n{}", submission.mensagem));
        message
    }

    pub fn newsletter_message(&self, email: &str) -> String {
        format!(
            "*Inscrição Newsletter - {}*\n\nGostaria de me inscrever na newsletter.\n\n*E-mail:* {}",
            self.config.business_name(),
            email
        )
    }

    pub fn consultation_message(&self, context: Option<&str>) -> String {
        let mut message = format!(
            "*Solicitação de Consultoria - {}*\n\n",
            self.config.business_name()
        );
        message.push_str("Olá! Gostaria de agendar uma consultoria estratégica inicial.");

        if let Some(context) = context.filter(|c| !c.is_empty()) {
            message.push_str(&format!("\n\n*Contexto:* {}", context));
        }

        message.push_str("\n\nAguardo retorno para agendarmos uma conversa.");
        message
    }

    pub fn service_inquiry_message(&self, service_name: &str) -> String {
        format!(
            "*Interesse em Serviço - {}*\n\nOlá! Tenho interesse em saber mais sobre:\n\n*{}*\n\nGostaria de receber mais informações e agendar uma conversa.",
            self.config.business_name(),
            service_name
        )
    }

    pub fn link(&self, message: &str) -> ChatLink {
        ChatLink(format!(
            "{}/{}?text={}",
            self.config.base_url(),
            self.config.recipient(),
            utf8_percent_encode(message, URI_COMPONENT)
        ))
    }

    pub fn contact_link(&self, submission: &ContactSubmission) -> ChatLink {
        self.link(&self.contact_message(submission))
    }

    pub fn newsletter_link(&self, email: &str) -> ChatLink {
        self.link(&self.newsletter_message(email))
    }

    pub fn consultation_link(&self, context: Option<&str>) -> ChatLink {
        self.link(&self.consultation_message(context))
    }

    pub fn service_inquiry_link(&self, service_name: &str) -> ChatLink {
        self.link(&self.service_inquiry_message(service_name))
    }
}

/// Opens the link in a new tab. A blocked pop-up is only logged; the page
/// itself is never navigated away.
pub fn open_chat(link: &ChatLink) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available, cannot open {}", link);
        return;
    };
    match window.open_with_url_and_target(link.as_str(), "_blank") {
        Ok(Some(_)) => log::info!("Opened WhatsApp chat"),
        Ok(None) => log::warn!("Browser refused to open a new tab for the chat link"),
        Err(e) => log::warn!("Failed to open chat link: {:?}", e),
    }
}
