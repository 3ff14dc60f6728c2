use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::convert::Infallible;

/// Form extractor for pages that must always render.
///
/// Never rejects. A body that is not `application/x-www-form-urlencoded`, or
/// that cannot be read or decoded, yields `T::default()`. When a field is
/// repeated the first value wins.
#[derive(Debug, Clone, Default)]
pub struct PageForm<T>(pub T);

impl<T, S> FromRequest<S> for PageForm<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if !is_form {
            tracing::debug!("Request has no urlencoded form body, using defaults");
            return Ok(PageForm(T::default()));
        }

        match Bytes::from_request(req, state).await {
            Ok(body) => Ok(PageForm(parse_form(&body))),
            Err(e) => {
                tracing::warn!("Failed to read form body: {}", e);
                Ok(PageForm(T::default()))
            }
        }
    }
}

/// Decodes an urlencoded body keeping only the first value of each field.
pub fn parse_form<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    let pairs: Vec<(String, String)> = match serde_urlencoded::from_bytes(body) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::debug!("Malformed form body: {}", e);
            return T::default();
        }
    };

    let mut seen = HashSet::new();
    let first_values: Vec<(String, String)> = pairs
        .into_iter()
        .filter(|(key, _)| seen.insert(key.clone()))
        .collect();

    serde_urlencoded::to_string(&first_values)
        .ok()
        .and_then(|encoded| serde_urlencoded::from_str(&encoded).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::progress::ProgressForm;

    #[test]
    fn first_duplicate_wins() {
        let form: ProgressForm = parse_form(b"balance=1&balance=2&goal=4");
        assert_eq!(form.balance.as_deref(), Some("1"));
        assert_eq!(form.goal.as_deref(), Some("4"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let form: ProgressForm = parse_form(b"balance=5&csrf=abc");
        assert_eq!(form.balance.as_deref(), Some("5"));
        assert!(form.goal.is_none());
    }

    #[test]
    fn empty_body_gives_defaults() {
        let form: ProgressForm = parse_form(b"");
        assert!(form.balance.is_none());
        assert!(form.goal.is_none());
    }
}
