//! One-shot flash messages carried in a signed cookie.
//!
//! The server sets messages on a redirect and the next rendered page takes
//! them, clearing the cookie. Cookies that fail signature verification are
//! treated as absent.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use url::form_urlencoded;

use crate::content::{FlashLevel, FlashMessage};

pub const FLASH_COOKIE: &str = "flash";

/// Queue `messages` for the next rendered page.
pub fn push(jar: SignedCookieJar, messages: &[FlashMessage]) -> SignedCookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, encode(messages)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Remove and return any queued messages.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<FlashMessage>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Vec::new());
    };

    let messages = decode(cookie.value());
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}

fn encode(messages: &[FlashMessage]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(messages.iter().map(|m| (m.level.to_string(), m.message.as_str())))
        .finish()
}

fn decode(value: &str) -> Vec<FlashMessage> {
    form_urlencoded::parse(value.as_bytes())
        .filter_map(|(level, message)| {
            let level = level.parse::<FlashLevel>().ok()?;
            Some(FlashMessage::new(level, message.into_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    #[test]
    fn test_encoding_keeps_every_level() {
        let messages = vec![
            FlashMessage::new(FlashLevel::Info, "Saved as draft"),
            FlashMessage::new(FlashLevel::Success, "Published"),
            FlashMessage::new(FlashLevel::Warning, "Slug changed; links & bookmarks break"),
            FlashMessage::error("Title is required"),
        ];

        assert_eq!(decode(&encode(&messages)), messages);
        assert!(decode("bogus=1&error=Kept").iter().all(|m| m.level == FlashLevel::Error));
    }

    #[test]
    fn test_take_is_one_shot() {
        let jar = push(
            SignedCookieJar::new(Key::generate()),
            &[FlashMessage::error("Title is required")],
        );

        let (jar, messages) = take(jar);
        assert_eq!(messages, vec![FlashMessage::error("Title is required")]);

        let (_, messages) = take(jar);
        assert!(messages.is_empty());
    }
}
