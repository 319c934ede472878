use crux_http::HttpError;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::event::PetId;
use crate::pet::PetRecord;

pub const MAX_URL_LENGTH: usize = 2048;
pub const PETS_PATH_SEGMENT: &str = "animals";

/// What the HTTP capability hands back for a pet lookup.
pub type LookupResponse = crux_http::Result<crux_http::Response<Vec<u8>>>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("pet {0} not found")]
    NotFound(PetId),

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("undecodable pet record: {0}")]
    Decode(String),
}

impl LookupError {
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::NotFound(_) => Some(404),
            LookupError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: String,
}

/// `{base}/animals/{id}`, with the id escaped as a single path segment.
pub fn lookup_url(base: &str, id: &PetId) -> Result<Url, LookupError> {
    let invalid = |reason: String| LookupError::InvalidUrl {
        url: truncate_url(base),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "invalid scheme '{}', only 'http' and 'https' are allowed",
            url.scheme()
        )));
    }

    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".to_owned()))?
        .pop_if_empty()
        .push(PETS_PATH_SEGMENT)
        .push(id.as_str());

    if url.as_str().len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "URL exceeds maximum length of {MAX_URL_LENGTH} bytes"
        )));
    }

    Ok(url)
}

/// Maps the raw lookup response onto a record or a classified failure.
///
/// `crux_http` reports non-2xx statuses as `HttpError::Http`; those are
/// classified by status like a non-2xx `Ok` response would be.
pub fn read_lookup_response(id: &PetId, response: LookupResponse) -> Result<PetRecord, LookupError> {
    let response = match response {
        Ok(response) => response,
        Err(HttpError::Http { code, body, .. }) => {
            return Err(status_error(id, u16::from(code), body.as_deref().unwrap_or_default()));
        }
        Err(e) => return Err(LookupError::Transport(e.to_string())),
    };

    let status = u16::from(response.status());
    let body = response.body().map(Vec::as_slice).unwrap_or_default();

    if (200..=299).contains(&status) {
        serde_json::from_slice(body).map_err(|e| LookupError::Decode(e.to_string()))
    } else {
        Err(status_error(id, status, body))
    }
}

fn status_error(id: &PetId, status: u16, body: &[u8]) -> LookupError {
    if status == 404 {
        return LookupError::NotFound(id.clone());
    }

    let message = serde_json::from_slice::<ApiErrorResponse>(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error: {status}"));
    LookupError::Status { status, message }
}

fn truncate_url(url: &str) -> String {
    if url.len() <= 100 {
        url.to_string()
    } else {
        let cut = (0..=100).rev().find(|&i| url.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &url[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_lookup_url() {
        let url = lookup_url("https://api.example.com/api", &PetId::new("42")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/animals/42");
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let url = lookup_url("https://api.example.com/api/", &PetId::new("42")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/animals/42");
    }

    #[test]
    fn id_is_escaped_as_one_segment() {
        let url = lookup_url("https://api.example.com", &PetId::new("a b/c")).unwrap();
        assert_eq!(url.path(), "/animals/a%20b%2Fc");
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(matches!(
            lookup_url("mailto:someone@example.com", &PetId::new("1")),
            Err(LookupError::InvalidUrl { .. })
        ));
        assert!(matches!(
            lookup_url("ftp://files.example.com", &PetId::new("1")),
            Err(LookupError::InvalidUrl { .. })
        ));
        assert!(matches!(
            lookup_url("", &PetId::new("1")),
            Err(LookupError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_overlong_url() {
        let id = PetId::new("x".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            lookup_url("https://api.example.com", &id),
            Err(LookupError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn status_hint() {
        assert_eq!(LookupError::NotFound(PetId::new("1")).status(), Some(404));
        assert_eq!(
            LookupError::Status { status: 503, message: String::new() }.status(),
            Some(503)
        );
        assert_eq!(LookupError::Transport("offline".into()).status(), None);
    }

    fn http_error(status: u16, body: Option<&[u8]>) -> LookupResponse {
        Err(HttpError::Http {
            code: status.try_into().unwrap(),
            message: status.to_string(),
            body: body.map(<[u8]>::to_vec),
        })
    }

    #[test]
    fn http_404_is_not_found() {
        let id = PetId::new("404");
        let error = read_lookup_response(&id, http_error(404, None)).unwrap_err();
        assert_eq!(error, LookupError::NotFound(id));
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn http_error_body_message_is_kept() {
        let body = br#"{"message":"database unavailable"}"#;
        let error =
            read_lookup_response(&PetId::new("42"), http_error(503, Some(body))).unwrap_err();
        assert_eq!(
            error,
            LookupError::Status {
                status: 503,
                message: "database unavailable".into()
            }
        );
        assert_eq!(error.to_string(), "HTTP error 503: database unavailable");
    }

    #[test]
    fn http_error_without_body_uses_status() {
        let error = read_lookup_response(&PetId::new("42"), http_error(500, None)).unwrap_err();
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.to_string(), "HTTP error 500: HTTP error: 500");
    }

    #[test]
    fn timeout_stays_a_transport_error() {
        let error = read_lookup_response(&PetId::new("42"), Err(HttpError::Timeout)).unwrap_err();
        assert!(matches!(error, LookupError::Transport(_)));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn truncates_long_urls_on_char_boundary() {
        let long = format!("https://{}", "é".repeat(80));
        let truncated = truncate_url(&long);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 103);
    }
}
