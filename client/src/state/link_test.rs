use super::*;

fn token() -> LinkToken {
    LinkToken { link_token: "link-sandbox-1".to_owned() }
}

#[test]
fn request_is_gated_while_pending() {
    let mut status = LinkStatus::default();
    assert!(status.begin_request());
    assert!(!status.begin_request());
    assert_eq!(status, LinkStatus::Requesting);
}

#[test]
fn success_stores_token_and_blocks_new_requests() {
    let mut status = LinkStatus::default();
    status.begin_request();
    status.finish(Ok(token()));
    assert_eq!(status, LinkStatus::Ready(token()));
    assert!(!status.begin_request());
    assert_eq!(status.button_label(), "Bank link ready");
}

#[test]
fn failure_allows_retry() {
    let mut status = LinkStatus::default();
    status.begin_request();
    status.finish(Err("link token request failed: 502".to_owned()));
    assert_eq!(status.button_label(), "Try again");
    assert!(status.begin_request());
}

#[test]
fn finish_without_request_is_ignored() {
    let mut status = LinkStatus::default();
    status.finish(Ok(token()));
    assert_eq!(status, LinkStatus::Idle);
}
