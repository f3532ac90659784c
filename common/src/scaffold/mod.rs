//! Presentation scaffolding shared by minigames: a container per instance, a
//! message box showing the latest status line, and a scrolling terminal.

mod options;
mod terminal;

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{EventBus, EventKind, GameEvent};

pub use options::{MAX_TERMINAL_LINES, MinigameOptions};
pub use terminal::Terminal;

pub struct MinigameUi {
    container_id: String,
    message_box: String,
    terminal: Terminal,
    options: MinigameOptions,
}

impl MinigameUi {
    fn new(container_id: String, options: &MinigameOptions) -> Self {
        Self {
            container_id,
            message_box: String::new(),
            terminal: Terminal::new(options.terminal_max_lines, options.message_prefix.clone()),
            options: options.clone(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn message_box(&self) -> &str {
        &self.message_box
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn options(&self) -> &MinigameOptions {
        &self.options
    }

    pub fn show_message(&mut self, text: &str) {
        self.message_box = text.to_string();
        self.terminal.write(text);
    }

    /// Lays out message box, game section and terminal inside the container.
    pub fn render(&self, game_section: &str) -> String {
        let width = self.options.width;
        let mut body = vec![self.message_box.clone(), String::new()];
        body.extend(game_section.lines().map(str::to_string));
        if self.options.show_terminal {
            body.push("-".repeat(width));
            body.extend(self.terminal.lines().cloned());
        }

        if !self.options.show_border {
            return body.join("\n") + "\n";
        }

        let edge = format!("+{}+", "-".repeat(width));
        let mut out = vec![edge.clone()];
        out.extend(body.into_iter().map(|line| {
            let clipped: String = line.chars().take(width).collect();
            format!("|{:<width$}|", clipped, width = width)
        }));
        out.push(edge);
        out.join("\n") + "\n"
    }
}

/// Creates the scaffold for one instance and wires it to the `message` signal.
pub fn setup_base_ui(events: &mut EventBus, options: &MinigameOptions) -> Rc<RefCell<MinigameUi>> {
    let ui = Rc::new(RefCell::new(MinigameUi::new(
        events.instance_id().container_id(),
        options,
    )));

    let handle = ui.clone();
    events.on(EventKind::Message, move |event| {
        if let Some(text) = event.as_message() {
            handle.borrow_mut().show_message(text);
        }
    });

    events.send(&GameEvent::message("interface ready"));
    ui
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::InstanceId;

    #[test]
    fn test_setup_announces_itself() {
        let mut events = EventBus::new(InstanceId::new("3".to_string()));
        let ui = setup_base_ui(&mut events, &MinigameOptions::default());
        let ui = ui.borrow();
        assert_eq!(ui.container_id(), "minigames:3");
        assert_eq!(ui.message_box(), "interface ready");
        assert_eq!(
            ui.terminal().lines().collect::<Vec<_>>(),
            vec![">> interface ready"]
        );
    }

    #[test]
    fn test_message_box_keeps_only_latest() {
        let mut events = EventBus::new(InstanceId::new("4".to_string()));
        let ui = setup_base_ui(&mut events, &MinigameOptions::default());
        events.send(&GameEvent::message("first"));
        events.send(&GameEvent::message("second"));
        assert_eq!(ui.borrow().message_box(), "second");
        assert_eq!(ui.borrow().terminal().len(), 3);
    }

    #[test]
    fn test_render_with_border_and_no_terminal() {
        let options = MinigameOptions {
            width: 12,
            show_border: true,
            show_terminal: false,
            ..MinigameOptions::default()
        };
        let mut events = EventBus::new(InstanceId::new("5".to_string()));
        let ui = setup_base_ui(&mut events, &options);
        let rendered = ui.borrow().render("O|X\n");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+------------+");
        assert_eq!(lines[1], "|interface re|");
        assert_eq!(lines[3], "|O|X         |");
        assert_eq!(lines.last(), Some(&"+------------+"));
        assert!(!rendered.contains(">> "));
    }
}
