use super::*;

/// Tests that `dance` replies with the configured attachment.
///
/// Expected: one Reply::Attachment with the dance path
#[test]
fn sends_attachment() {
    let (test, state) = setup();

    let replies = run(&state, &invocation("!dance")).unwrap();

    assert_eq!(replies, vec![Reply::Attachment(test.dance_path.clone())]);
}

/// Tests that a missing file is not checked by the handler itself.
///
/// Expected: Ok with the attachment; reading happens at send time
#[test]
fn defers_missing_file() {
    let test = TestBuilder::new().build().unwrap();
    let state = state_for(&test);

    let replies = run(&state, &invocation("!dance")).unwrap();

    assert!(!test.dance_path.exists());
    assert_eq!(replies, vec![Reply::Attachment(test.dance_path.clone())]);
}
