//! Turns session snapshots into terminal lines.

use santa_room_shared::time::timestamp_to_jst_clock;

use crate::{
    domain::{ChatEntry, Participant},
    session::{ConnectionState, SessionView},
};

/// Remembers what has been printed so far, so that each snapshot only yields
/// the lines that are new.
#[derive(Debug, Default)]
pub struct Renderer {
    printed: usize,
    last_state: Option<ConnectionState>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines to print for `view` that were not printed before.
    pub fn render(&mut self, view: &SessionView) -> Vec<String> {
        let mut lines = Vec::new();

        if self.last_state != Some(view.state) {
            self.last_state = Some(view.state);
            lines.push(format!("*** {} ({})", view.state, view.room));
        }

        for entry in view.entries.iter().skip(self.printed) {
            lines.extend(render_entry(entry));
        }
        self.printed = self.printed.max(view.entries.len());

        lines
    }
}

fn render_entry(entry: &ChatEntry) -> Vec<String> {
    let body = format!("    {}", entry.content);
    if entry.show_sender_label {
        vec![
            format!(
                "[{}] {}",
                timestamp_to_jst_clock(entry.timestamp.value()),
                entry.sender_label()
            ),
            body,
        ]
    } else {
        vec![body]
    }
}

/// Roster listing for `/who`.
pub fn render_roster(participants: &[Participant]) -> Vec<String> {
    if participants.is_empty() {
        return vec!["nobody else is here".to_string()];
    }
    let mut lines = vec![format!("{} participant(s):", participants.len())];
    lines.extend(
        participants
            .iter()
            .map(|p| format!("  {} ({})", p.label(), p.address)),
    );
    lines
}
