use slack_history::setup_logging;

#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_logging(false);
        // A second install is ignored rather than panicking.
        setup_logging(true);
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}
