use actix_web::{http::Method, web::Bytes, HttpRequest};
use userfn_db::users::models::UserId;

///
/// A single call of the function: method, request path and the raw body.
///
#[derive(Debug, Clone)]
pub struct Invocation {
    method: Method,
    request_url: String,
    body: Bytes,
}

impl Invocation {
    pub fn new(method: Method, request_url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            method,
            request_url: request_url.into(),
            body: body.into(),
        }
    }

    ///
    /// Build an [`Invocation`] from an incoming request. The query string is dropped.
    ///
    pub fn from_request(request: &HttpRequest, body: Bytes) -> Self {
        Self::new(request.method().clone(), request.path(), body)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    ///
    /// The user id addressed by the request path, if there is a non-empty one.
    ///
    pub fn user_id(&self) -> Option<UserId> {
        parse_user_id(&self.request_url).and_then(|id| UserId::parse(id.to_string()).ok())
    }
}

///
/// Extract `{id}` from a path shaped like `.../users/{id}`.
///
pub fn parse_user_id(path: &str) -> Option<&str> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        [.., "users", id] => Some(*id),
        _ => None,
    }
}
