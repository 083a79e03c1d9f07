use super::*;

#[test]
fn cancelled_requests_are_silent() {
    let mut notices = NoticeState::default();
    assert_eq!(notices.report_error(&ApiError::Cancelled, "Failed to load news"), None);
    assert_eq!(notices.current, None);
}

#[test]
fn server_message_wins_over_fallback() {
    let mut notices = NoticeState::default();
    let err = ApiError::Status { status: 400, message: Some("Email already exists".to_owned()) };
    notices.report_error(&err, "Failed to add writer");
    let shown = notices.current.expect("notice shown");
    assert_eq!(shown.kind, NoticeKind::Error);
    assert_eq!(shown.text, "Email already exists");
}

#[test]
fn network_failure_uses_fallback() {
    let mut notices = NoticeState::default();
    notices.report_error(&ApiError::Network("offline".to_owned()), "Failed to load news");
    assert_eq!(notices.current.map(|n| n.text), Some("Failed to load news".to_owned()));
}

#[test]
fn newer_notice_replaces_older() {
    let mut notices = NoticeState::default();
    let first = notices.success("Saved");
    let second = notices.error("Oops");
    assert_ne!(first, second);
    assert_eq!(notices.current.as_ref().map(|n| n.id), Some(second));
}

#[test]
fn dismiss_ignores_stale_ids() {
    let mut notices = NoticeState::default();
    let first = notices.success("Saved");
    let second = notices.success("Saved again");
    notices.dismiss(first);
    assert_eq!(notices.current.as_ref().map(|n| n.id), Some(second));
    notices.dismiss(second);
    assert_eq!(notices.current, None);
}
