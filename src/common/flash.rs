use crate::common::cookies;
use crate::common::i18n::{self, Locale};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use serde::Serialize;

pub const FLASH_COOKIE: &str = "_inbox_flash";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Notice,
    Warning,
    Error,
}

impl FlashLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Notice => "notice",
            FlashLevel::Warning => "warning",
            FlashLevel::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "notice" => Some(FlashLevel::Notice),
            "warning" => Some(FlashLevel::Warning),
            "error" => Some(FlashLevel::Error),
            _ => None,
        }
    }
}

/// A one-shot notification for the next page, stored as `<level>:<translation key>`,
/// followed by `:<locale>` when it was raised for a community.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flash {
    pub level: FlashLevel,
    pub key: &'static str,
    pub locale: Option<Locale>,
}

#[derive(Debug, Serialize)]
pub struct RenderedFlash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub const fn notice(key: &'static str) -> Self {
        Self {
            level: FlashLevel::Notice,
            key,
            locale: None,
        }
    }

    pub const fn warning(key: &'static str) -> Self {
        Self {
            level: FlashLevel::Warning,
            key,
            locale: None,
        }
    }

    pub const fn error(key: &'static str) -> Self {
        Self {
            level: FlashLevel::Error,
            key,
            locale: None,
        }
    }

    /// Renders in `locale` unless the request asks for a supported language.
    pub fn in_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn encode(&self) -> String {
        match self.locale {
            Some(locale) => format!("{}:{}:{}", self.level.as_str(), self.key, locale.as_str()),
            None => format!("{}:{}", self.level.as_str(), self.key),
        }
    }

    /// Only keys with a translation are accepted back from the client.
    pub fn decode(value: &str) -> Option<Self> {
        let (level, rest) = value.split_once(':')?;
        let level = FlashLevel::parse(level)?;
        let (key, locale) = match rest.split_once(':') {
            Some((key, tag)) => (key, Some(Locale::from_tag(tag)?)),
            None => (rest, None),
        };
        let key = i18n::known_key(key)?;
        Some(Self { level, key, locale })
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        cookies::find(headers, FLASH_COOKIE).and_then(Flash::decode)
    }

    /// The request's `Accept-Language` wins over the locale the flash was raised in.
    pub fn render_for(&self, headers: &HeaderMap) -> RenderedFlash {
        let locale = Locale::from_headers_or(headers, self.locale.unwrap_or_default());
        self.render(locale)
    }

    pub fn render(&self, locale: Locale) -> RenderedFlash {
        RenderedFlash {
            level: self.level,
            message: i18n::t(locale, self.key),
        }
    }

    pub fn redirect(self, location: &str) -> Response {
        let cookie = cookies::set(FLASH_COOKIE, &self.encode());
        (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(location)).into_response()
    }
}

pub fn clear_cookie() -> AppendHeaders<[(axum::http::HeaderName, String); 1]> {
    AppendHeaders([(SET_COOKIE, cookies::clear(FLASH_COOKIE))])
}
