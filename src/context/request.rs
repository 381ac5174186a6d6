//! Request ID correlation.
//!
//! The request ID lives in a [`Context`] under the reserved key `reqID`.

use uuid::Uuid;

use super::propagation::Context;

/// Reserved context key for the request ID.
pub const REQUEST_ID_KEY: &str = "reqID";

/// Derived context that knows its request ID. `ctx` is left untouched.
pub fn with_request_id(ctx: &Context, request_id: impl Into<String>) -> Context {
    let request_id: String = request_id.into();
    ctx.with_value(REQUEST_ID_KEY, request_id)
}

/// Request ID attached to `ctx` or any of its ancestors.
pub fn request_id(ctx: &Context) -> Option<&str> {
    ctx.value::<String>(REQUEST_ID_KEY).map(String::as_str)
}

/// Fresh request ID of the form `req-xxxxxxxx`.
pub fn new_request_id() -> String {
    format!("req-{}", &Uuid::new_v4().simple().to_string()[..8])
}
