//! Location message and deep links used to reach a pet's owner.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capabilities::NavigationTarget;
use crate::config::AppConfig;
use crate::event::Coordinate;
use crate::locale::Locale;

/// Characters left untouched by JavaScript's `encodeURIComponent`.
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

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("the pet record has no phone number")]
    MissingPhoneNumber,
    #[error("phone number {0:?} contains no digits")]
    UnusablePhoneNumber(String),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShareChannel {
    WhatsApp,
    Sms,
}

impl ShareChannel {
    /// Prompt order.
    pub const ALL: [Self; 2] = [Self::WhatsApp, Self::Sms];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Sms => "SMS",
        }
    }

    /// The messaging app opens beside the app; the SMS composer replaces it.
    #[must_use]
    pub const fn target(self) -> NavigationTarget {
        match self {
            Self::WhatsApp => NavigationTarget::NewContext,
            Self::Sms => NavigationTarget::CurrentContext,
        }
    }
}

/// Text sent to the owner, announcing the find with a map link.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShareMessage {
    pub maps_link: String,
    pub text: String,
}

impl ShareMessage {
    #[must_use]
    pub fn new(position: Coordinate, maps_base_url: &str, locale: Locale) -> Self {
        let maps_link = format!("{maps_base_url}?q={},{}", position.lat(), position.lng());
        let text = compose(&maps_link, locale);
        Self { maps_link, text }
    }

    /// Rewrites the sentence for `locale`; the map link is unchanged.
    pub fn relocalize(&mut self, locale: Locale) {
        self.text = compose(&self.maps_link, locale);
    }

    #[must_use]
    pub fn encoded(&self) -> String {
        encode_component(&self.text)
    }
}

fn compose(maps_link: &str, locale: Locale) -> String {
    format!("{} {maps_link}", locale.strings().found_sentence)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeepLink {
    pub channel: ShareChannel,
    pub url: String,
    pub target: NavigationTarget,
}

impl DeepLink {
    /// Link opening `channel` on a conversation with `raw_phone`, prefilled
    /// with `message`.
    pub fn build(
        channel: ShareChannel,
        raw_phone: &str,
        message: &ShareMessage,
        config: &AppConfig,
    ) -> Result<Self, ShareError> {
        let phone = sanitize_phone(raw_phone);
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return Err(ShareError::UnusablePhoneNumber(raw_phone.to_owned()));
        }

        let body = message.encoded();
        let url = match channel {
            ShareChannel::WhatsApp => format!(
                "https://{}/{}?text={body}",
                config.messaging_domain,
                international_phone(&phone, config)
            ),
            // SMS keeps the number exactly as the owner stored it.
            ShareChannel::Sms => format!("sms:{phone}?body={body}"),
        };

        Ok(Self {
            channel,
            url,
            target: channel.target(),
        })
    }
}

/// Drops everything but digits and a leading `+`.
#[must_use]
pub fn sanitize_phone(raw: &str) -> String {
    let mut phone = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && phone.is_empty()) {
            phone.push(c);
        }
    }
    phone
}

/// Sanitised number in `+<country><subscriber>` form.
#[must_use]
pub fn international_phone(phone: &str, config: &AppConfig) -> String {
    if phone.starts_with('+') {
        return phone.to_owned();
    }

    let code = config.country_calling_code.as_str();
    let national = config.national_number_length;
    if national > 0 && phone.len() == code.len() + national && phone.starts_with(code) {
        format!("+{phone}")
    } else {
        format!("+{code}{phone}")
    }
}

#[must_use]
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}
