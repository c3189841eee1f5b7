use reqwest::Method;
use reqwest::multipart::Form;
use serde_json::Value;

/// Body variants the backend accepts. JSON is serialized with an explicit
/// content type; multipart is handed to the transport untouched so it sets
/// the boundary itself.
pub enum RequestBody {
    Json(Value),
    Multipart(Form),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::Json(value) => f.debug_tuple("Json").field(value).finish(),
            RequestBody::Multipart(_) => f.write_str("Multipart(..)"),
        }
    }
}

/// One outbound call, assembled before execution. Authentication is required
/// by default; `public()` opts out for login and registration.
#[derive(Debug)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub requires_auth: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            requires_auth: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one query pair. Order of appended pairs is preserved in the
    /// final URL.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a batch of query pairs, keeping their order.
    pub fn queries(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Mark the call as not needing a session.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}
