use super::*;

// =============================================================
// Path building and percent-encoding
// =============================================================

#[test]
fn encode_path_segment_keeps_unreserved() {
    assert_eq!(encode_path_segment("abc-123_x.y~z"), "abc-123_x.y~z");
}

#[test]
fn encode_path_segment_escapes_separators() {
    assert_eq!(encode_path_segment("a b/c?d"), "a%20b%2Fc%3Fd");
}

#[test]
fn encode_path_segment_escapes_utf8_bytes() {
    assert_eq!(encode_path_segment("idée"), "id%C3%A9e");
}

#[test]
fn friend_path_encodes_id() {
    assert_eq!(friend_path("f/1"), "/api/friends/f%2F1");
}

#[test]
fn ideas_path_encodes_id() {
    assert_eq!(ideas_path("f 1"), "/api/friends/f%201/ideas");
}

// =============================================================
// Error taxonomy
// =============================================================

#[test]
fn conflict_is_only_409() {
    assert!(ApiError::Status(409).is_conflict());
    assert!(!ApiError::Status(400).is_conflict());
    assert!(!ApiError::Network("boom".to_owned()).is_conflict());
}

#[test]
fn unauthenticated_covers_401_and_403() {
    assert!(ApiError::Status(401).is_unauthenticated());
    assert!(ApiError::Status(403).is_unauthenticated());
    assert!(!ApiError::Status(500).is_unauthenticated());
    assert!(!ApiError::Decode("bad json".to_owned()).is_unauthenticated());
}

#[test]
fn auth_failure_statuses() {
    assert!(is_auth_failure(401));
    assert!(is_auth_failure(403));
    assert!(!is_auth_failure(404));
    assert!(!is_auth_failure(200));
}

#[test]
fn status_accessor_only_for_http_answers() {
    assert_eq!(ApiError::Status(204).status(), Some(204));
    assert_eq!(ApiError::Network("x".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}

#[test]
fn error_messages_name_the_cause() {
    assert_eq!(ApiError::Status(500).to_string(), "HTTP 500");
    assert_eq!(
        ApiError::Network("offline".to_owned()).to_string(),
        "network error: offline"
    );
}
