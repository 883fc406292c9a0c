use actix_web::body::MessageBody;
use actix_web::dev::{self, ServiceRequest, ServiceResponse};
use actix_web::error::PayloadError;
use actix_web::middleware::Next;
use actix_web::{web, Error, FromRequest, HttpMessage, ResponseError};
use futures_util::stream;
use serde_json::Value;

use crate::errors::CustomError;

const JSON_CONTENT_TYPE: &str = "application/json";

// JSON body parser. Requests that declare a JSON body get it buffered and
// checked here, before route matching; a body that fails the check is
// answered with 400 and never reaches a handler. Everything else passes
// through untouched.
pub async fn json_body(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    // content_type() slices the header at ';' but keeps surrounding spaces.
    if !req
        .content_type()
        .trim()
        .eq_ignore_ascii_case(JSON_CONTENT_TYPE)
    {
        let res = next.call(req).await?;
        return Ok(res.map_into_left_body());
    }

    let (http_req, mut payload) = req.into_parts();
    let bytes = web::Bytes::from_request(&http_req, &mut payload).await?;

    if let Err(rejection) = check_json(&bytes) {
        let response = rejection.error_response();
        let req = ServiceRequest::from_parts(http_req, dev::Payload::None);
        return Ok(req.into_response(response).map_into_right_body());
    }

    // Hand the buffered bytes back so downstream extractors still see the
    // body.
    let req = ServiceRequest::from_parts(http_req, bytes_to_payload(bytes));
    let res = next.call(req).await?;
    Ok(res.map_into_left_body())
}

// Empty bodies are fine; non-empty ones must parse, and the top-level value
// must be an object or an array.
fn check_json(bytes: &[u8]) -> Result<(), CustomError> {
    if bytes.is_empty() {
        return Ok(());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| CustomError::MalformedJsonError(err.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(()),
        _ => Err(CustomError::MalformedJsonError(
            "expected an object or array at the top level".to_string(),
        )),
    }
}

fn bytes_to_payload(bytes: web::Bytes) -> dev::Payload {
    let stream = stream::once(async move { Ok::<_, PayloadError>(bytes) });
    dev::Payload::Stream {
        payload: Box::pin(stream),
    }
}
