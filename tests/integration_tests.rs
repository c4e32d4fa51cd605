//! Integration tests for the menu loop pieces: input, session, view

use crossterm::event::{KeyCode, KeyEvent};

use piece_reserve::config::AppConfig;
use piece_reserve::core::{Session, SessionConfig};
use piece_reserve::input::{handle_key_event, should_quit};
use piece_reserve::status_after_key;
use piece_reserve::term::{encode_lines_into, Line, SessionView, StatusMessage};
use piece_reserve::types::{Command, ReserveError, QUEUE_CAPACITY, STACK_CAPACITY};

fn press(c: char) -> KeyEvent {
    KeyEvent::from(KeyCode::Char(c))
}

#[test]
fn test_session_startup_layout() {
    let session = Session::new(&SessionConfig::default());
    let snap = session.snapshot();

    assert_eq!(snap.queue.len(), QUEUE_CAPACITY);
    assert_eq!(snap.stack.len(), STACK_CAPACITY);
    assert_eq!(snap.next_id, (QUEUE_CAPACITY + STACK_CAPACITY) as u64);
}

#[test]
fn test_same_seed_same_session() {
    let cfg = SessionConfig {
        seed: 777,
        preseed_stack: true,
    };
    let mut a = Session::new(&cfg);
    let mut b = Session::new(&cfg);

    for c in ['1', '3', '2', '4', '5', '1', '1'] {
        let cmd = handle_key_event(press(c)).unwrap();
        assert_eq!(a.apply(cmd), b.apply(cmd));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_key_presses_drive_session() {
    let mut session = Session::new(&SessionConfig::default());
    let view = SessionView::default();

    // Stack starts full, so reserving is refused.
    let cmd = handle_key_event(press('2')).unwrap();
    assert_eq!(cmd, Command::Reserve);
    let status = StatusMessage::from(session.apply(cmd));
    assert!(matches!(
        status,
        StatusMessage::Rejected(ReserveError::CapacityExceeded { .. })
    ));

    let lines = view.render(&session.snapshot(), Some(&status));
    assert!(lines.iter().any(|l| l.text().starts_with("Not possible")));

    // Use one reserved piece, then reserving works.
    session.apply(handle_key_event(press('u')).unwrap()).unwrap();
    let status = StatusMessage::from(session.apply(Command::Reserve));
    assert!(matches!(status, StatusMessage::Done(_)));
    assert_eq!(session.stack().len(), STACK_CAPACITY);

    assert!(should_quit(press('0')));
}

#[test]
fn test_unmapped_key_reports_invalid_option() {
    let mut session = Session::new(&SessionConfig::default());
    let before = session.snapshot();

    let status = status_after_key(&mut session, press('x'));
    assert_eq!(status, StatusMessage::InvalidOption);
    assert_eq!(session.snapshot(), before);

    let lines = SessionView::default().render(&session.snapshot(), Some(&status));
    assert!(lines.iter().any(|l| l.text() == "Invalid option!"));

    // Mapped keys still go through to the session.
    let status = status_after_key(&mut session, press('1'));
    assert!(matches!(status, StatusMessage::Done(_)));
    assert_ne!(session.snapshot(), before);
}

#[test]
fn test_render_after_bulk_swap_lists_swapped_pieces() {
    let mut session = Session::new(&SessionConfig::default());
    let before = session.snapshot();
    let status = StatusMessage::from(session.apply(Command::SwapBulk));

    let lines = SessionView::default().render(&session.snapshot(), Some(&status));
    let queue_line = lines
        .iter()
        .map(Line::text)
        .find(|l| l.starts_with("Queue:"))
        .unwrap();
    // Former stack top is now at the queue front.
    let expected_front = before.stack[0].to_string();
    assert!(queue_line.contains(&expected_front));

    let mut out = Vec::new();
    encode_lines_into(&lines, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains(&expected_front));
}

#[test]
fn test_app_config_default_preseeds_stack() {
    let cfg = AppConfig::default();
    assert!(cfg.session.preseed_stack);
    assert!(cfg.log_path.is_none());
}
