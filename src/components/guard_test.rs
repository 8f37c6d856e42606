use super::*;

// =============================================================
// login_path_with_return
// =============================================================

#[test]
fn login_path_encodes_the_origin() {
    assert_eq!(
        login_path_with_return("/friends/42"),
        "/login?from=%2Ffriends%2F42"
    );
}

#[test]
fn login_path_without_origin_is_bare() {
    assert_eq!(login_path_with_return(""), "/login");
    assert_eq!(login_path_with_return("/"), "/login");
}

// =============================================================
// return_target
// =============================================================

#[test]
fn return_target_round_trips_an_app_path() {
    assert_eq!(return_target(Some("/friends/42")), "/friends/42");
}

#[test]
fn return_target_defaults_to_friends() {
    assert_eq!(return_target(None), "/friends");
}

#[test]
fn return_target_rejects_external_urls() {
    assert_eq!(return_target(Some("https://evil.example")), "/friends");
    assert_eq!(return_target(Some("//evil.example")), "/friends");
    assert_eq!(return_target(Some("friends")), "/friends");
}
