use thiserror::Error;

const DEFAULT_RECIPIENT: &str = "557598828297";
const DEFAULT_BASE_URL: &str = "https://wa.me";
const DEFAULT_BUSINESS_NAME: &str = "Júco Consultoria";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("recipient must be a non-empty string of digits, got {0:?}")]
    InvalidRecipient(String),
    #[error("base url must start with https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Where composed messages are sent. Provided to the component tree through a
/// `ContextProvider` so nothing below `App` hard-codes the recipient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatConfig {
    recipient: String,
    base_url: String,
    business_name: String,
}

impl ChatConfig {
    pub fn new(recipient: &str, base_url: &str) -> Result<Self, ConfigError> {
        if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidRecipient(recipient.to_string()));
        }
        if !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            recipient: recipient.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
        })
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
        }
    }
}

/// Build-time overrides via `WHATSAPP_NUMBER` / `WHATSAPP_BASE_URL`, falling back
/// to the production number when unset or invalid.
pub fn get_chat_config() -> ChatConfig {
    let recipient = option_env!("WHATSAPP_NUMBER").unwrap_or(DEFAULT_RECIPIENT);
    let base_url = option_env!("WHATSAPP_BASE_URL").unwrap_or(DEFAULT_BASE_URL);
    match ChatConfig::new(recipient, base_url) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring chat config override: {}", e);
            ChatConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_number() {
        let config = ChatConfig::default();
        assert_eq!(config.recipient(), "557598828297");
        assert_eq!(config.base_url(), "https://wa.me");
        assert_eq!(config.business_name(), "Júco Consultoria");
    }

    #[test]
    fn rejects_recipient_with_separators() {
        assert_eq!(
            ChatConfig::new("+55 75 9882", "https://wa.me"),
            Err(ConfigError::InvalidRecipient("+55 75 9882".to_string()))
        );
        assert!(ChatConfig::new("", "https://wa.me").is_err());
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config = ChatConfig::new("5511999990000", "https://chat.test/").unwrap();
        assert_eq!(config.base_url(), "https://chat.test");
        assert!(ChatConfig::new("5511999990000", "http://chat.test").is_err());
    }
}
