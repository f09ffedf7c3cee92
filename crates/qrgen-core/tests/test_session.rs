mod common;

use qrgen_core::error::QrGenError;
use qrgen_core::session::{Action, Outcome, Session, SkipReason};
use qrgen_core::settings::Settings;

fn session_in(dir: &std::path::Path) -> Session {
    Session::new(Settings::default().with_output_dir(dir.join("qr-codes")))
}

fn file_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

#[test]
fn test_session_starts_empty() {
    let session = Session::default();
    assert!(session.text.is_empty());
    assert!(session.holder().is_empty());
    assert_eq!(session.revision(), 0);
    assert_eq!(session.settings().output_dir, std::path::PathBuf::from("qr-codes"));
}

#[test]
fn test_generate_populates_holder() {
    let mut session = Session::default();
    session.text = "hello".into();

    let outcome = session.dispatch(Action::Generate).unwrap();

    assert_eq!(outcome, Outcome::Generated { width: 290, height: 290 });
    let current = session.holder().current().unwrap();
    assert_eq!(current.image().dimensions(), (290, 290));
    assert_eq!(current.preview().dimensions(), (290, 290));
    assert_eq!(session.revision(), 1);
}

#[test]
fn test_generate_with_empty_text_is_noop() {
    let mut session = Session::default();
    let outcome = session.dispatch(Action::Generate).unwrap();
    assert_eq!(outcome, Outcome::Skipped(SkipReason::EmptyText));
    assert!(session.holder().is_empty());
    assert_eq!(session.revision(), 0);
}

#[test]
fn test_generate_failure_keeps_previous_image() {
    let mut session = Session::default();
    session.text = "first".into();
    session.dispatch(Action::Generate).unwrap();
    let before = session.holder().current().unwrap().image().clone();

    session.text = "z".repeat(3000);
    let err = session.dispatch(Action::Generate).unwrap_err();

    assert!(matches!(err, QrGenError::DataTooLong { .. }));
    assert_eq!(session.holder().current().unwrap().image(), &before);
    assert_eq!(session.revision(), 1);
}

#[test]
fn test_generate_failure_from_empty_stays_empty() {
    let mut session = Session::default();
    session.text = "z".repeat(3000);
    assert!(session.dispatch(Action::Generate).is_err());
    assert!(session.holder().is_empty());
}

#[test]
fn test_clear_is_idempotent() {
    let mut session = Session::default();
    assert_eq!(session.dispatch(Action::Clear).unwrap(), Outcome::Cleared);
    assert!(session.holder().is_empty());
    assert_eq!(session.revision(), 0);

    session.text = "hello".into();
    session.dispatch(Action::Generate).unwrap();
    assert_eq!(session.dispatch(Action::Clear).unwrap(), Outcome::Cleared);
    assert!(session.holder().is_empty());
    assert_eq!(session.dispatch(Action::Clear).unwrap(), Outcome::Cleared);
    assert!(session.holder().is_empty());
    assert_eq!(session.revision(), 2);
}

#[test]
fn test_clear_keeps_text() {
    let mut session = Session::default();
    session.text = "keep me".into();
    session.dispatch(Action::Generate).unwrap();
    session.dispatch(Action::Clear).unwrap();
    assert_eq!(session.text, "keep me");
}

#[test]
fn test_save_without_image_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    session.text = "hello".into();

    let outcome = session.dispatch(Action::Save).unwrap();

    assert_eq!(outcome, Outcome::Skipped(SkipReason::NoImage));
    assert!(!dir.path().join("qr-codes").exists());
}

#[test]
fn test_save_with_empty_text_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    session.text = "hello".into();
    session.dispatch(Action::Generate).unwrap();
    session.text.clear();

    let outcome = session.dispatch(Action::Save).unwrap();

    assert_eq!(outcome, Outcome::Skipped(SkipReason::EmptyText));
    assert_eq!(file_count(&dir.path().join("qr-codes")), 0);
    assert!(!session.holder().is_empty());
}

#[test]
fn test_save_after_clear_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    session.text = "hello".into();
    session.dispatch(Action::Generate).unwrap();
    session.dispatch(Action::Clear).unwrap();

    let outcome = session.dispatch(Action::Save).unwrap();
    assert_eq!(outcome, Outcome::Skipped(SkipReason::NoImage));
}

#[test]
fn test_generate_then_save_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    session.text = "hello".into();
    session.dispatch(Action::Generate).unwrap();

    let outcome = session.dispatch(Action::Save).unwrap();

    let expected = dir.path().join("qr-codes").join("hello.png");
    assert_eq!(outcome, Outcome::Saved(expected.clone()));
    let loaded = image::open(&expected).unwrap().to_luma8();
    assert_eq!(common::decode_all(&loaded), vec!["hello".to_string()]);
    // Save never changes the holder.
    assert!(!session.holder().is_empty());
    assert_eq!(session.revision(), 1);
}

#[test]
fn test_save_sanitizes_filename() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    session.text = "a/b:c".into();
    session.dispatch(Action::Generate).unwrap();

    session.dispatch(Action::Save).unwrap();

    assert!(dir.path().join("qr-codes").join("a_b_c.png").exists());
}

#[test]
fn test_regenerate_replaces_image() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());

    session.text = "first".into();
    session.dispatch(Action::Generate).unwrap();
    session.text = "second".into();
    session.dispatch(Action::Generate).unwrap();
    session.dispatch(Action::Save).unwrap();

    let preview = session.holder().current().unwrap().preview().clone();
    assert_eq!(common::decode_all(&preview), vec!["second".to_string()]);

    let saved = image::open(dir.path().join("qr-codes").join("second.png"))
        .unwrap()
        .to_luma8();
    assert_eq!(common::decode_all(&saved), vec!["second".to_string()]);
    assert!(!dir.path().join("qr-codes").join("first.png").exists());
    assert_eq!(session.revision(), 2);
}

#[test]
fn test_save_failure_leaves_state_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("qr-codes");
    std::fs::write(&blocker, b"file in the way").unwrap();
    let mut session = session_in(dir.path());
    session.text = "hello".into();
    session.dispatch(Action::Generate).unwrap();

    let err = session.dispatch(Action::Save).unwrap_err();

    assert!(matches!(err, QrGenError::Io(_)));
    assert!(!session.holder().is_empty());
    assert_eq!(session.revision(), 1);
}

#[test]
fn test_action_display() {
    assert_eq!(format!("{}", Action::Generate), "Generate");
    assert_eq!(format!("{}", Action::Save), "Save");
    assert_eq!(format!("{}", Action::Clear), "Clear");
}
