use super::*;

#[test]
fn default_session_has_no_access() {
    assert!(!SessionState::default().access_granted);
}
