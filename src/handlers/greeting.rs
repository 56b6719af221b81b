use crate::core::error::GreetingError;
use axum::http::Method;
use tracing::debug;

pub const GREETING: &str = "Hello World";

/// Greeting handler, mounted on every path
///
/// GET only; any other method gets 405.
pub async fn greeting_handler(method: Method) -> Result<&'static str, GreetingError> {
    if method != Method::GET {
        debug!(method = %method, "Rejected non-GET greeting request");
        return Err(GreetingError::MethodNotAllowed);
    }

    Ok(GREETING)
}
