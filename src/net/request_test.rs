use super::*;
use crate::net::types::MessageResponse;

#[test]
fn bearer_becomes_authorization_header() {
    let req = ApiRequest::new(Method::Get, "http://api.test/api/news").bearer("tok");
    assert_eq!(req.authorization_header().as_deref(), Some("Bearer tok"));
}

#[test]
fn unauthenticated_request_has_no_header() {
    assert_eq!(ApiRequest::new(Method::Get, "http://api.test/x").authorization_header(), None);
}

#[test]
fn query_is_percent_encoded_and_appended() {
    let req = ApiRequest::new(Method::Get, "http://api.test/api/news")
        .query(&[("search", "rock & roll".to_owned()), ("page", "2".to_owned())]);
    assert_eq!(req.url, "http://api.test/api/news?search=rock%20%26%20roll&page=2");
}

#[test]
fn query_extends_existing_query_string() {
    let req = ApiRequest::new(Method::Get, "http://api.test/x?a=1").query(&[("b", "2".to_owned())]);
    assert_eq!(req.url, "http://api.test/x?a=1&b=2");
}

#[test]
fn empty_query_leaves_url_untouched() {
    let req = ApiRequest::new(Method::Get, "http://api.test/x").query(&[]);
    assert_eq!(req.url, "http://api.test/x");
}

#[test]
fn parse_maps_envelope_through_extractor() {
    let call: ApiCall<MessageResponse, String> =
        ApiCall::mapped(ApiRequest::new(Method::Delete, "http://api.test/x"), |r| r.message);
    assert_eq!(call.parse(serde_json::json!({ "message": "deleted" })), Ok("deleted".to_owned()));
}

#[test]
fn parse_reports_shape_mismatch_as_decode_error() {
    let call: ApiCall<Vec<String>> = ApiCall::new(ApiRequest::new(Method::Get, "http://api.test/x"));
    assert!(matches!(call.parse(serde_json::json!({ "not": "a list" })), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn send_outside_browser_is_unavailable() {
    let call: ApiCall<MessageResponse> = ApiCall::new(ApiRequest::new(Method::Get, "http://api.test/x"));
    let result = block_on_ready(call.send(&CancelToken::new()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn send_with_cancelled_token_short_circuits() {
    let call: ApiCall<MessageResponse> = ApiCall::new(ApiRequest::new(Method::Get, "http://api.test/x"));
    let token = CancelToken::new();
    token.cancel();
    assert_eq!(block_on_ready(call.send(&token)), Err(ApiError::Cancelled));
}

/// Drive a future that never actually suspends.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future suspended"),
    }
}
