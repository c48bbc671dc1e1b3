//! Resource envelope builder.
//!
//! Every success body flows through this module so all resources share one
//! response shape:
//!
//! - detail / mutation: `{"success": true, "data": <record>}`
//! - listing: `{"success": true, "count": <n>, "data": [...]}`
//! - delete: `{"success": true, "message": "<Noun> deleted"}` (study spots
//!   use `{"success": true, "data": {}}`)
//!
//! Public listings degrade to an empty collection when the store fails, via
//! [`collection_or_empty`]. Admin listings bypass that helper so operators
//! see store failures.

use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::domain::Error;

/// 200 with a single record payload.
pub(crate) fn record(data: impl Serialize) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "data": data }))
}

/// 201 for freshly created records.
pub(crate) fn created(data: impl Serialize) -> HttpResponse {
    HttpResponse::Created().json(json!({ "success": true, "data": data }))
}

/// 200 with a counted collection payload.
pub(crate) fn listing<T: Serialize>(items: Vec<T>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "count": items.len(),
        "data": items,
    }))
}

/// 200 delete acknowledgement carrying a message.
pub(crate) fn deleted(noun: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": format!("{noun} deleted"),
    }))
}

/// 200 delete acknowledgement carrying an empty data object. Study spots
/// only, matching the original service's envelope for that family.
pub(crate) fn deleted_empty() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "data": {} }))
}

/// Degrade-to-empty policy for public listings: any listing failure becomes
/// an empty successful collection so read paths never hard-fail on a store
/// outage. This is the only place the policy lives.
pub(crate) fn collection_or_empty<T: Serialize>(result: Result<Vec<T>, Error>) -> HttpResponse {
    match result {
        Ok(items) => listing(items),
        Err(error) => {
            warn!(
                code = %error.code(),
                error = %error,
                "listing degraded to empty collection"
            );
            listing(Vec::<T>::new())
        }
    }
}
