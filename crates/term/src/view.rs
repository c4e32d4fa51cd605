//! SessionView: maps a session snapshot into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::text::{Line, Rgb, Span};
use crate::types::{Command, Outcome, Piece, PieceKind, ReserveError};

const RULE: &str = "=====================================";
const DIMMED: Rgb = Rgb::new(120, 120, 120);

/// Result of the last command, shown under the state listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    Done(Outcome),
    Rejected(ReserveError),
    /// A key that maps to no command or quit.
    InvalidOption,
}

impl From<Result<Outcome, ReserveError>> for StatusMessage {
    fn from(value: Result<Outcome, ReserveError>) -> Self {
        match value {
            Ok(outcome) => StatusMessage::Done(outcome),
            Err(e) => StatusMessage::Rejected(e),
        }
    }
}

/// Text renderer for the queue, the stack and the command menu.
#[derive(Debug, Clone)]
pub struct SessionView {
    title: String,
    show_menu: bool,
}

impl Default for SessionView {
    fn default() -> Self {
        Self {
            title: "Piece Reserve".to_string(),
            show_menu: true,
        }
    }
}

impl SessionView {
    pub fn with_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    pub fn render(&self, snap: &SessionSnapshot, status: Option<&StatusMessage>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(20);

        lines.push(Line::plain(RULE));
        lines.push(Span::plain(format!("        {}        ", self.title)).bold().into());
        lines.push(Line::plain(RULE));
        lines.push(Line::new());

        lines.push(piece_row("Queue:               ", snap.queue.iter()));
        lines.push(piece_row("Stack (top -> base): ", snap.stack.iter()));
        lines.push(Line::plain(format!("Next id: {}", snap.next_id)));
        lines.push(Line::new());

        if let Some(status) = status {
            lines.push(status_line(status));
            lines.push(Line::new());
        }

        if self.show_menu {
            lines.push(Line::plain("Options:"));
            for cmd in Command::ALL {
                let entry = format!("{} - {}", cmd.menu_key(), cmd.label());
                // Reserving onto a full stack can only be rejected.
                if cmd == Command::Reserve && snap.stack_is_full() {
                    lines.push(Span::colored(entry, DIMMED).into());
                } else {
                    lines.push(Line::plain(entry));
                }
            }
            lines.push(Line::plain("0 - Quit"));
        }

        lines
    }
}

fn piece_row<'a>(label: &str, pieces: impl Iterator<Item = &'a Piece>) -> Line {
    let mut line = Line::plain(label);
    let mut any = false;
    for piece in pieces {
        line.push(Span::colored(format!("{piece} "), piece_color(piece.kind())));
        any = true;
    }
    if !any {
        line.push(Span::colored("(empty)", DIMMED));
    }
    line
}

fn status_line(status: &StatusMessage) -> Line {
    match status {
        StatusMessage::Done(outcome) => {
            Span::colored(outcome.to_string(), Rgb::new(120, 220, 120)).into()
        }
        StatusMessage::Rejected(e) => {
            Span::colored(format!("Not possible: {e}."), Rgb::new(220, 80, 80))
                .bold()
                .into()
        }
        StatusMessage::InvalidOption => {
            Span::colored("Invalid option!", Rgb::new(240, 200, 80)).into()
        }
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Container;

    fn snap() -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        s.queue.push(Piece::new(PieceKind::I, 0));
        s.queue.push(Piece::new(PieceKind::O, 1));
        s.stack.push(Piece::new(PieceKind::L, 5));
        s.next_id = 6;
        s
    }

    #[test]
    fn renders_queue_and_stack_listings() {
        let lines = SessionView::default().render(&snap(), None);
        let text: Vec<String> = lines.iter().map(Line::text).collect();

        assert!(text.iter().any(|l| l.starts_with("Queue:") && l.contains("[I 0] [O 1]")));
        assert!(text.iter().any(|l| l.starts_with("Stack") && l.contains("[L 5]")));
        assert!(text.iter().any(|l| l == "Next id: 6"));
        assert!(text.iter().any(|l| l == "0 - Quit"));
    }

    #[test]
    fn empty_stack_is_labelled() {
        let mut s = snap();
        s.stack.clear();
        let lines = SessionView::default().render(&s, None);
        assert!(lines
            .iter()
            .any(|l| l.text().starts_with("Stack") && l.text().ends_with("(empty)")));
    }

    #[test]
    fn pieces_are_colored_by_kind() {
        let lines = SessionView::default().render(&snap(), None);
        let queue = lines.iter().find(|l| l.text().starts_with("Queue:")).unwrap();
        assert_eq!(queue.spans[1].fg, Some(piece_color(PieceKind::I)));
        assert_eq!(queue.spans[2].fg, Some(piece_color(PieceKind::O)));
    }

    #[test]
    fn status_line_reports_rejection() {
        let status = StatusMessage::Rejected(ReserveError::CapacityExceeded {
            container: Container::Stack,
            capacity: 3,
        });
        let lines = SessionView::default().render(&snap(), Some(&status));
        assert!(lines
            .iter()
            .any(|l| l.text() == "Not possible: the stack is full (3 pieces)."));
    }

    #[test]
    fn status_line_reports_invalid_option() {
        let lines = SessionView::default().render(&snap(), Some(&StatusMessage::InvalidOption));
        let line = lines.iter().find(|l| l.text() == "Invalid option!").unwrap();
        assert_eq!(line.spans[0].fg, Some(Rgb::new(240, 200, 80)));
    }

    #[test]
    fn reserve_entry_dimmed_when_stack_full() {
        let reserve_entry = |s: &SessionSnapshot| {
            SessionView::default()
                .render(s, None)
                .into_iter()
                .find(|l| l.text().starts_with("2 - "))
                .unwrap()
        };

        let mut s = snap();
        assert_eq!(reserve_entry(&s).spans[0].fg, None);

        s.stack.push(Piece::new(PieceKind::T, 6));
        s.stack.push(Piece::new(PieceKind::I, 7));
        assert!(s.stack_is_full());
        assert_eq!(reserve_entry(&s).spans[0].fg, Some(DIMMED));

        let play = SessionView::default()
            .render(&s, None)
            .into_iter()
            .find(|l| l.text().starts_with("1 - "))
            .unwrap();
        assert_eq!(play.spans[0].fg, None);
    }

    #[test]
    fn menu_can_be_hidden() {
        let lines = SessionView::default().with_menu(false).render(&snap(), None);
        assert!(!lines.iter().any(|l| l.text() == "Options:"));
    }
}
