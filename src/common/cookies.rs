use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Finds the value of cookie `name` across every `Cookie` header of a request.
pub fn find<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

pub fn set(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn clear(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_cookie_among_several() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1; _inbox_session=abc"));
        headers.append(COOKIE, HeaderValue::from_static("b=\"2\""));
        assert_eq!(find(&headers, "_inbox_session"), Some("abc"));
        assert_eq!(find(&headers, "b"), Some("2"));
        assert_eq!(find(&headers, "missing"), None);
    }
}
