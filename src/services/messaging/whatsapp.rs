use url::Url;

const WA_ME: &str = "https://wa.me";

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("phone number has no digits: {0:?}")]
    InvalidPhone(String),

    #[error("invalid link: {0}")]
    Url(#[from] url::ParseError),
}

/// Strips formatting such as `+`, spaces, dashes and parentheses.
pub fn normalize_phone(phone: &str) -> Result<String, LinkError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(LinkError::InvalidPhone(phone.to_string()));
    }
    Ok(digits)
}

/// `https://wa.me/<digits>`, optionally with a pre-filled `text`.
pub fn deep_link(phone: &str, text: Option<&str>) -> Result<Url, LinkError> {
    let base = format!("{WA_ME}/{}", normalize_phone(phone)?);
    let url = match text {
        Some(text) => Url::parse_with_params(&base, &[("text", text)])?,
        None => Url::parse(&base)?,
    };
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+55 (28) 99957-4221").unwrap(), "5528999574221");
        assert!(matches!(normalize_phone("n/a"), Err(LinkError::InvalidPhone(_))));
    }

    #[test]
    fn test_contact_link_has_no_query() {
        let url = deep_link("5528999574221", None).unwrap();
        assert_eq!(url.as_str(), "https://wa.me/5528999574221");
    }

    #[test]
    fn test_text_is_encoded_and_round_trips() {
        let text = "Olá RK9! 🐾\nDe: 01/02/2030";
        let url = deep_link("+55 51 9424-4240", Some(text)).unwrap();
        assert!(url.as_str().starts_with("https://wa.me/555194244240?text="));
        assert!(!url.as_str().contains('\n'));
        assert!(!url.as_str().contains(' '));

        let decoded = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(decoded, text);
    }
}
