//! Shared response envelope for API handlers.
//!
//! Successful responses wrap their payload in `{ "data": ... }`. Using
//! [`DataResponse`] instead of ad-hoc `json!` keeps the envelope typed.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: wallets }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
