//! JSON response envelope for axum handlers.
//!
//! A [`ResponseBuilder`] is created once per request, accumulates named
//! content entries, can switch the payload into an error shape, attaches
//! paging metadata computed from the request URI, and finally renders the
//! whole envelope as a pretty-printed JSON response.
//!
//! ```no_run
//! use axum::extract::Query;
//! use axum::http::StatusCode;
//! use axum::response::{IntoResponse, Response};
//! use envelope::{PageParams, ResponseBuilder, UserInfo};
//!
//! async fn list_items(
//!     mut resp: ResponseBuilder,
//!     Query(params): Query<PageParams>,
//! ) -> Response {
//!     let items = vec!["a", "b", "c"];
//!     resp.attach("items", &items);
//!     if resp.paginate(params, 25, items.len() as u64).is_err() {
//!         return resp.send_error(
//!             StatusCode::BAD_REQUEST,
//!             UserInfo::message("limit must be greater than zero"),
//!         );
//!     }
//!     resp.into_response()
//! }
//! ```

pub mod builder;
pub mod error;
pub mod payload;

pub use builder::ResponseBuilder;
pub use error::{ErrorBody, UserDetail, UserInfo};
pub use payload::Payload;

// Re-exported so handlers only need this crate.
pub use paging_core::{PageParams, Paging, DEFAULT_LIMIT, DEFAULT_SKIP, PARAM_LIMIT, PARAM_SKIP};
