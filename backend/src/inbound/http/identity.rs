//! Caller identity extractor.
//!
//! The auth gateway authenticates requests upstream and asserts the caller
//! as an `X-Caller-Id` / `X-Caller-Role` header pair. Protected handlers
//! take a [`Caller`] parameter; extraction failure short-circuits the
//! handler with 401 through the uniform failure envelope.

use std::future::{Ready, ready};
use std::str::FromStr;

use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::domain::{Caller, CallerId, Error, Role};

pub const CALLER_ID_HEADER: &str = "X-Caller-Id";
pub const CALLER_ROLE_HEADER: &str = "X-Caller-Role";

fn header_str<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, Error> {
    let value = headers
        .get(name)
        .ok_or_else(|| Error::unauthorized("caller identity required"))?;
    value
        .to_str()
        .map_err(|_| Error::unauthorized(format!("{name} header is not valid text")))
}

pub(crate) fn caller_from_headers(headers: &HeaderMap) -> Result<Caller, Error> {
    let id = CallerId::parse(header_str(headers, CALLER_ID_HEADER)?)
        .map_err(|_| Error::unauthorized("caller id must be a UUID"))?;
    let role = Role::from_str(header_str(headers, CALLER_ROLE_HEADER)?)
        .map_err(|_| Error::unauthorized("caller role must be student, faculty or admin"))?;
    Ok(Caller::new(id, role))
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(caller_from_headers(req.headers()))
    }
}
