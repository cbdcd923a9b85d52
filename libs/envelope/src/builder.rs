use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use http::{header, HeaderValue, StatusCode};
use serde::Serialize;

use crate::error::{ErrorBody, UserInfo};
use crate::payload::Payload;
use paging_core::PageParams;

/// Per-request JSON response builder.
///
/// Holds the request URI (the base for paging links), the transport status
/// and the payload state. Converting it into a response consumes it, so a
/// response is rendered exactly once.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    request_uri: String,
    status: StatusCode,
    payload: Payload,
}

impl ResponseBuilder {
    /// Start an empty 200 response for the given request URI
    /// (path and query, e.g. `/items?skip=10`).
    pub fn new(request_uri: impl Into<String>) -> Self {
        Self {
            request_uri: request_uri.into(),
            status: StatusCode::OK,
            payload: Payload::default(),
        }
    }

    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Attach a named content entry, e.g. `"users"` -> serialized list.
    ///
    /// No-op for the reserved `error`/`pagination` keys and after an error
    /// has been set. A value that fails to serialize is logged and dropped.
    pub fn attach(&mut self, key: &str, value: impl Serialize) {
        match serde_json::to_value(value) {
            Ok(value) => self.payload.attach(key, value),
            Err(e) => {
                tracing::error!(key, error = %e, "dropping unserializable response content");
            }
        }
    }

    /// Set the transport status code without touching the payload.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Switch the payload to the error shape with the status' default
    /// message. Purges all previously attached content.
    pub fn set_error(&mut self, status: StatusCode, user_info: impl Into<Option<UserInfo>>) {
        self.set_custom_error(status, 0, ErrorBody::default_message(status), user_info);
    }

    /// Switch the payload to the error shape with a custom code and message.
    ///
    /// A `custom_code` of zero resolves to the HTTP status code. Also
    /// records `status` as the transport status. Calling this twice with the
    /// same arguments leaves the same error in place.
    pub fn set_custom_error(
        &mut self,
        status: StatusCode,
        custom_code: u32,
        message: impl Into<String>,
        user_info: impl Into<Option<UserInfo>>,
    ) {
        self.payload
            .fail(ErrorBody::new(status, custom_code, message, user_info.into()));
        self.status = status;
    }

    /// Set an error and render the final response in one step.
    ///
    /// Consumes the builder, so no further output can follow.
    pub fn send_error(
        mut self,
        status: StatusCode,
        user_info: impl Into<Option<UserInfo>>,
    ) -> Response {
        self.set_error(status, user_info);
        self.into_response()
    }

    /// Set a custom error and render the final response in one step.
    pub fn send_custom_error(
        mut self,
        status: StatusCode,
        custom_code: u32,
        message: impl Into<String>,
        user_info: impl Into<Option<UserInfo>>,
    ) -> Response {
        self.set_custom_error(status, custom_code, message, user_info);
        self.into_response()
    }

    /// Compute paging metadata against the stored request URI and attach it
    /// under the reserved `pagination` key.
    ///
    /// `records` is the total count for the query, `records_on_page` the
    /// count actually returned. No-op after an error has been set.
    pub fn paginate(
        &mut self,
        params: PageParams,
        records: u64,
        records_on_page: u64,
    ) -> Result<(), paging_core::Error> {
        if self.payload.is_failed() {
            return Ok(());
        }
        let paging = paging_core::compute(
            &self.request_uri,
            params.skip,
            params.limit,
            records,
            records_on_page,
        )?;
        tracing::debug!(
            uri = %self.request_uri,
            page = paging.current_page,
            pages = paging.pages,
            "computed paging"
        );
        match serde_json::to_value(&paging) {
            Ok(value) => self.payload.set_pagination(value),
            Err(e) => tracing::error!(error = %e, "dropping unserializable paging metadata"),
        }
        Ok(())
    }
}

impl IntoResponse for ResponseBuilder {
    /// Render the payload as pretty-printed JSON with the recorded status.
    fn into_response(self) -> Response {
        let body = self.payload.to_json();
        match serde_json::to_vec_pretty(&body) {
            Ok(bytes) => {
                let mut resp = bytes.into_response();
                *resp.status_mut() = self.status;
                resp.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                resp
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response payload");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Extractor building a `ResponseBuilder` from the request's path and query.
///
/// Usage in handlers:
///   async fn list_users(mut resp: ResponseBuilder, /* ... */) { /* ... */ }
impl<S> FromRequestParts<S> for ResponseBuilder
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let uri = parts
                .uri
                .path_and_query()
                .map_or_else(|| "/".to_owned(), |pq| pq.as_str().to_owned());
            Ok(Self::new(uri))
        }
    }
}
