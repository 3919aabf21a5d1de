use super::*;

#[test]
fn success_covers_every_2xx_status() {
    assert!(RelayResponse::new(200, "").is_success());
    assert!(RelayResponse::new(204, "").is_success());
    assert!(RelayResponse::new(299, "").is_success());
    assert!(!RelayResponse::new(199, "").is_success());
    assert!(!RelayResponse::new(302, "").is_success());
    assert!(!RelayResponse::new(422, "").is_success());
}

#[test]
fn error_messages_reads_errors_list_in_order() {
    let resp = RelayResponse::new(
        422,
        r#"{"errors":[{"code":"TYPE_EMAIL","message":"should be an email"},{"message":"too many requests"}]}"#,
    );
    assert_eq!(
        resp.error_messages(),
        Some(vec!["should be an email".to_owned(), "too many requests".to_owned()])
    );
}

#[test]
fn error_messages_none_for_unparsable_body() {
    assert_eq!(RelayResponse::new(500, "<html>bad gateway</html>").error_messages(), None);
    assert_eq!(RelayResponse::new(500, "").error_messages(), None);
}

#[test]
fn error_messages_none_without_errors_list() {
    assert_eq!(RelayResponse::new(400, r#"{"error":"nope"}"#).error_messages(), None);
    assert_eq!(RelayResponse::new(400, r#"{"errors":null}"#).error_messages(), None);
}

#[test]
fn error_messages_none_for_empty_errors_list() {
    assert_eq!(RelayResponse::new(400, r#"{"errors":[]}"#).error_messages(), None);
}

#[test]
fn transport_error_display_includes_detail() {
    let err = TransportError::Request("connection refused".to_owned());
    assert_eq!(err.to_string(), "relay request failed: connection refused");
}
