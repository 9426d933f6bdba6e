use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;

pub const YOU_MUST_LOG_IN_TO_VIEW_YOUR_INBOX: &str =
    "layouts.notifications.you_must_log_in_to_view_your_inbox";
pub const YOU_ARE_NOT_AUTHORIZED_TO_VIEW_THIS_CONTENT: &str =
    "layouts.notifications.you_are_not_authorized_to_view_this_content";
pub const MESSAGE_NOT_SENT: &str = "layouts.notifications.message_not_sent";
pub const MESSAGE_SENT: &str = "layouts.notifications.message_sent";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Locale {
    #[default]
    En,
    Fi,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag.split(['-', '_']).next()?.trim();
        if language.eq_ignore_ascii_case("en") {
            Some(Locale::En)
        } else if language.eq_ignore_ascii_case("fi") {
            Some(Locale::Fi)
        } else {
            None
        }
    }

    /// Picks the first supported language of an `Accept-Language` header, in header order.
    pub fn from_headers_or(headers: &HeaderMap, fallback: Locale) -> Self {
        headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| {
                value
                    .split(',')
                    .filter_map(|entry| entry.split(';').next())
                    .find_map(Locale::from_tag)
            })
            .unwrap_or(fallback)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fi => "fi",
        }
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let text = match (locale, key) {
        (Locale::En, YOU_MUST_LOG_IN_TO_VIEW_YOUR_INBOX) => "You must log in to view your inbox.",
        (Locale::Fi, YOU_MUST_LOG_IN_TO_VIEW_YOUR_INBOX) => {
            "Sinun täytyy kirjautua sisään nähdäksesi postilaatikkosi."
        }
        (Locale::En, YOU_ARE_NOT_AUTHORIZED_TO_VIEW_THIS_CONTENT) => {
            "You are not authorized to view this content."
        }
        (Locale::Fi, YOU_ARE_NOT_AUTHORIZED_TO_VIEW_THIS_CONTENT) => {
            "Sinulla ei ole oikeuksia nähdä tätä sisältöä."
        }
        (Locale::En, MESSAGE_NOT_SENT) => "Sending the message failed. Please try again.",
        (Locale::Fi, MESSAGE_NOT_SENT) => "Viestin lähetys epäonnistui. Yritä uudelleen.",
        (Locale::En, MESSAGE_SENT) => "Message sent",
        (Locale::Fi, MESSAGE_SENT) => "Viesti lähetetty",
        _ => return None,
    };
    Some(text)
}

const KEYS: [&str; 4] = [
    YOU_MUST_LOG_IN_TO_VIEW_YOUR_INBOX,
    YOU_ARE_NOT_AUTHORIZED_TO_VIEW_THIS_CONTENT,
    MESSAGE_NOT_SENT,
    MESSAGE_SENT,
];

/// Returns the static form of `key` when it has a translation.
pub fn known_key(key: &str) -> Option<&'static str> {
    KEYS.into_iter().find(|known| *known == key)
}

/// Translates `key`, falling back to the key itself when no text exists.
pub fn t(locale: Locale, key: &str) -> String {
    match lookup(locale, key) {
        Some(text) => text.to_owned(),
        None => {
            tracing::warn!(locale = locale.as_str(), key, "Missing translation");
            key.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn translates_known_keys() {
        assert_eq!(
            t(Locale::En, YOU_ARE_NOT_AUTHORIZED_TO_VIEW_THIS_CONTENT),
            "You are not authorized to view this content."
        );
        assert_eq!(t(Locale::Fi, MESSAGE_SENT), "Viesti lähetetty");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(t(Locale::Fi, "layouts.nope"), "layouts.nope");
        assert_eq!(known_key("layouts.nope"), None);
        assert_eq!(known_key(MESSAGE_SENT), Some(MESSAGE_SENT));
    }

    #[test]
    fn accept_language_picks_first_supported() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("sv-SE, fi;q=0.8, en;q=0.5"));
        assert_eq!(Locale::from_headers_or(&headers, Locale::En), Locale::Fi);

        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de"));
        assert_eq!(Locale::from_headers_or(&headers, Locale::En), Locale::En);
        assert_eq!(Locale::from_headers_or(&HeaderMap::new(), Locale::En), Locale::En);
    }

    #[test]
    fn unsupported_languages_use_the_fallback() {
        let mut headers = HeaderMap::new();
        assert_eq!(Locale::from_headers_or(&headers, Locale::Fi), Locale::Fi);

        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de, sv;q=0.5"));
        assert_eq!(Locale::from_headers_or(&headers, Locale::Fi), Locale::Fi);

        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB"));
        assert_eq!(Locale::from_headers_or(&headers, Locale::Fi), Locale::En);
    }

    #[test]
    fn parses_region_tags() {
        assert_eq!(Locale::from_tag("en_US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("FI-fi"), Some(Locale::Fi));
        assert_eq!(Locale::from_tag(""), None);
    }
}
