//! JSON/XML content negotiation for the users resource.
//!
//! Request bodies are decoded according to `Content-Type`, responses are
//! encoded according to the first `Accept` entry naming a supported format.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        request::Parts,
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
};
use models::User;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::JsonApiError;

pub const MIME_JSON: &str = "application/json";
pub const MIME_XML: &str = "application/xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Json,
    Xml,
}

impl MediaFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            MediaFormat::Json => MIME_JSON,
            MediaFormat::Xml => MIME_XML,
        }
    }

    /// A missing `Content-Type` is read as JSON.
    pub fn from_content_type(headers: &HeaderMap) -> Result<Self, JsonApiError> {
        let Some(value) = headers.get(CONTENT_TYPE) else { return Ok(MediaFormat::Json) };
        let raw = value.to_str().unwrap_or_default();
        Self::match_mime(raw, false)
            .ok_or_else(|| JsonApiError::unsupported_media_type(format!("unsupported content type: {raw}")))
    }

    /// Quality values are ignored; the first acceptable entry wins.
    pub fn from_accept(headers: &HeaderMap) -> Result<Self, JsonApiError> {
        let raw = headers.get(ACCEPT).and_then(|v| v.to_str().ok()).unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(MediaFormat::Json);
        }
        raw.split(',')
            .find_map(|entry| Self::match_mime(entry, true))
            .ok_or_else(|| JsonApiError::not_acceptable(format!("cannot produce any of: {raw}")))
    }

    fn match_mime(entry: &str, allow_wildcard: bool) -> Option<Self> {
        let mime = entry.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        if mime.ends_with("json") {
            Some(MediaFormat::Json)
        } else if mime.ends_with("xml") {
            Some(MediaFormat::Xml)
        } else if allow_wildcard && (mime == "*/*" || mime == "application/*") {
            Some(MediaFormat::Json)
        } else {
            None
        }
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, String> {
        match self {
            MediaFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
            MediaFormat::Xml => {
                let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
                quick_xml::de::from_str(text).map_err(|e| e.to_string())
            }
        }
    }
}

/// Response format requested by the client.
#[derive(Debug, Clone, Copy)]
pub struct Accept(pub MediaFormat);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Accept {
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        MediaFormat::from_accept(&parts.headers).map(Accept)
    }
}

/// Request body decoded as JSON or XML. Malformed bodies are rejected with 400.
#[derive(Debug)]
pub struct Entity<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Entity<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = MediaFormat::from_content_type(req.headers())?;
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonApiError::bad_request(e.body_text()))?;
        format
            .decode(&bytes)
            .map(Entity)
            .map_err(|e| JsonApiError::bad_request(format!("cannot read entity: {e}")))
    }
}

/// XML rendering for response bodies. JSON goes through `Serialize` directly.
pub trait XmlBody {
    fn to_xml(&self) -> Result<String, String>;
}

impl XmlBody for User {
    fn to_xml(&self) -> Result<String, String> {
        quick_xml::se::to_string_with_root("user", self).map_err(|e| e.to_string())
    }
}

impl XmlBody for Vec<User> {
    fn to_xml(&self) -> Result<String, String> {
        #[derive(Serialize)]
        struct Users<'a> {
            user: &'a [User],
        }
        quick_xml::se::to_string_with_root("users", &Users { user: self }).map_err(|e| e.to_string())
    }
}

/// An entity written in the negotiated format.
#[derive(Debug)]
pub struct Negotiated<T> {
    pub format: MediaFormat,
    pub status: StatusCode,
    pub body: T,
}

impl<T> Negotiated<T> {
    pub fn ok(format: MediaFormat, body: T) -> Self {
        Self { format, status: StatusCode::OK, body }
    }

    pub fn created(format: MediaFormat, body: T) -> Self {
        Self { format, status: StatusCode::CREATED, body }
    }
}

impl<T: Serialize + XmlBody> IntoResponse for Negotiated<T> {
    fn into_response(self) -> Response {
        let rendered = match self.format {
            MediaFormat::Json => serde_json::to_string(&self.body).map_err(|e| e.to_string()),
            MediaFormat::Xml => self.body.to_xml(),
        };
        match rendered {
            Ok(body) => (self.status, [(CONTENT_TYPE, self.format.content_type())], body).into_response(),
            Err(e) => JsonApiError::internal(format!("cannot write entity: {e}")).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use models::UserInput;

    fn headers(name: axum::http::HeaderName, value: &'static str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(name, HeaderValue::from_static(value));
        h
    }

    #[test]
    fn accept_picks_first_supported_entry() {
        assert_eq!(MediaFormat::from_accept(&HeaderMap::new()).unwrap(), MediaFormat::Json);
        assert_eq!(MediaFormat::from_accept(&headers(ACCEPT, "application/xml")).unwrap(), MediaFormat::Xml);
        assert_eq!(
            MediaFormat::from_accept(&headers(ACCEPT, "text/html, text/xml;q=0.9, */*;q=0.1")).unwrap(),
            MediaFormat::Xml
        );
        assert_eq!(MediaFormat::from_accept(&headers(ACCEPT, "*/*")).unwrap(), MediaFormat::Json);
        let err = MediaFormat::from_accept(&headers(ACCEPT, "text/plain")).unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_ACCEPTABLE);
    }

    #[test]
    fn content_type_selects_decoder() {
        assert_eq!(MediaFormat::from_content_type(&HeaderMap::new()).unwrap(), MediaFormat::Json);
        assert_eq!(
            MediaFormat::from_content_type(&headers(CONTENT_TYPE, "application/json; charset=utf-8")).unwrap(),
            MediaFormat::Json
        );
        assert_eq!(MediaFormat::from_content_type(&headers(CONTENT_TYPE, "text/xml")).unwrap(), MediaFormat::Xml);
        let err = MediaFormat::from_content_type(&headers(CONTENT_TYPE, "text/plain")).unwrap_err();
        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn decodes_xml_user() {
        let xml = b"<user><id>1</id><name>Melissa</name><age>30</age></user>";
        let user: User = MediaFormat::Xml.decode(xml).unwrap();
        assert_eq!(user, User { id: "1".into(), name: "Melissa".into(), age: 30 });
    }

    #[test]
    fn decodes_capitalized_xml_user() {
        let xml = b"<User><Id>1</Id><Name>Melissa</Name></User>";
        let user: User = MediaFormat::Xml.decode(xml).unwrap();
        assert_eq!(user, User { id: "1".into(), name: "Melissa".into(), age: 0 });
    }

    #[test]
    fn decodes_partial_xml_input() {
        let input: UserInput = MediaFormat::Xml.decode(b"<user><name>Melissa</name></user>").unwrap();
        assert_eq!(input.name.as_deref(), Some("Melissa"));
        assert_eq!(input.age, None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(MediaFormat::Json.decode::<User>(b"{not json").is_err());
    }

    #[test]
    fn renders_xml_user_and_list() {
        let user = User { id: "1".into(), name: "Melissa".into(), age: 30 };
        let one = user.to_xml().unwrap();
        assert_eq!(one, "<user><id>1</id><name>Melissa</name><age>30</age></user>");

        let many = vec![user].to_xml().unwrap();
        assert!(many.starts_with("<users>"));
        assert!(many.contains("<user><id>1</id><name>Melissa</name><age>30</age></user>"));
    }
}
