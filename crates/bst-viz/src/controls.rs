//! Keyboard controls and status overlay for the visualizer.

use bst_core::{SearchAlgorithm, SearchStatus, Session, parse_search_value, parse_values};
use macroquad::prelude::*;

/// Longest search value the input field accepts.
const MAX_INPUT_LEN: usize = 2;
/// Longest value list the list field accepts.
const MAX_LIST_LEN: usize = 120;

/// A request produced by user input, applied to the session by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Search { value: i32, algorithm: SearchAlgorithm },
    Build(Vec<i32>),
    RandomTree,
    Rebuild,
    Clear,
}

/// Which text field receives typed characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Search,
    List,
}

/// Search-value input field, value-list field, algorithm selector and
/// status overlay.
pub struct ControlPanel {
    field: Field,
    input: String,
    list_input: String,
    algorithm: SearchAlgorithm,
    message: Option<String>,
    value_min: i32,
    value_max: i32,
}

impl ControlPanel {
    /// Creates a panel accepting values in `[value_min, value_max]`.
    pub fn new(algorithm: SearchAlgorithm, value_min: i32, value_max: i32) -> Self {
        Self {
            field: Field::Search,
            input: String::new(),
            list_input: String::new(),
            algorithm,
            message: None,
            value_min,
            value_max,
        }
    }

    /// Shows `message` below the status lines until the next command.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Handles keyboard input for this frame.
    ///
    /// While a search is running every control is disabled and typed
    /// characters are discarded.
    pub fn update(&mut self, searching: bool) -> Option<Command> {
        let mut typed = Vec::new();
        while let Some(c) = get_char_pressed() {
            typed.push(c);
        }
        if searching {
            return None;
        }

        for c in typed {
            self.type_char(c);
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }

        let command = match self.field {
            Field::List => {
                if is_key_pressed(KeyCode::Escape) {
                    self.field = Field::Search;
                    None
                } else if is_key_pressed(KeyCode::Enter) {
                    self.submit()
                } else {
                    None
                }
            }
            Field::Search => {
                if is_key_pressed(KeyCode::Tab) {
                    self.algorithm = self.algorithm.next();
                }
                if is_key_pressed(KeyCode::Enter) {
                    self.submit()
                } else if is_key_pressed(KeyCode::V) {
                    self.field = Field::List;
                    None
                } else if is_key_pressed(KeyCode::R) {
                    Some(Command::RandomTree)
                } else if is_key_pressed(KeyCode::L) {
                    Some(Command::Rebuild)
                } else if is_key_pressed(KeyCode::C) {
                    Some(Command::Clear)
                } else {
                    None
                }
            }
        };

        if command.is_some() {
            self.message = None;
        }
        command
    }

    /// Appends `c` to the focused field if that field accepts it.
    fn type_char(&mut self, c: char) {
        match self.field {
            Field::Search => {
                if c.is_ascii_digit() && self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            Field::List => {
                let accepted = c.is_ascii_digit() || c == ',' || c == ' ';
                if accepted && self.list_input.len() < MAX_LIST_LEN {
                    self.list_input.push(c);
                }
            }
        }
    }

    fn backspace(&mut self) {
        match self.field {
            Field::Search => self.input.pop(),
            Field::List => self.list_input.pop(),
        };
    }

    /// Turns the focused field into a command, or sets an error message.
    fn submit(&mut self) -> Option<Command> {
        let (min, max) = (self.value_min, self.value_max);
        match self.field {
            Field::Search => match parse_search_value(&self.input, min, max) {
                Ok(value) => Some(Command::Search {
                    value,
                    algorithm: self.algorithm,
                }),
                Err(err) => {
                    self.message = Some(format!(
                        "Enter a number between {min:02} and {max:02} ({err})"
                    ));
                    None
                }
            },
            Field::List => match parse_values(&self.list_input, min, max) {
                Ok(values) => {
                    self.field = Field::Search;
                    Some(Command::Build(values))
                }
                Err(err) => {
                    self.message = Some(format!("Invalid value list ({err})"));
                    None
                }
            },
        }
    }

    /// Draws the status overlay.
    pub fn draw_ui(&self, session: &Session, y_offset: f32) {
        let tree = session.tree();
        draw_text(
            &format!("Nodes: {} | Depth: {}", tree.len(), tree.depth()),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );

        let (prompt, color) = match self.field {
            Field::Search => (
                format!(
                    "Algorithm: {} [Tab] | Search: {}_ [Enter]",
                    self.algorithm.label(),
                    self.input
                ),
                YELLOW,
            ),
            Field::List => (
                format!("Values: {}_ [Enter] build | [Esc] cancel", self.list_input),
                SKYBLUE,
            ),
        };
        draw_text(&prompt, 10.0, y_offset + 20.0, 18.0, color);

        let (status, color) = match session.status() {
            SearchStatus::Idle => ("Ready".to_string(), GREEN),
            SearchStatus::Searching { revealed, total } => {
                (format!("Searching... step {revealed}/{total}"), ORANGE)
            }
            SearchStatus::Finished { found, steps } => (
                format!(
                    "{} in {steps} steps",
                    if found { "Found" } else { "Not found" }
                ),
                if found { GREEN } else { RED },
            ),
        };
        draw_text(&status, 10.0, y_offset + 40.0, 18.0, color);

        if !session.search_path().is_empty() {
            let path = session
                .search_path()
                .iter()
                .map(|v| format!("{v:02}"))
                .collect::<Vec<_>>()
                .join(" -> ");
            draw_text(&format!("Path: {path}"), 10.0, y_offset + 60.0, 18.0, ORANGE);
        }

        if let Some(message) = &self.message {
            draw_text(message, 10.0, y_offset + 80.0, 16.0, RED);
        }

        draw_text(
            "[V]alues | [R]andom | [L]oad list | [C]lear | Drag to rotate, scroll to zoom",
            10.0,
            y_offset + 100.0,
            16.0,
            DARKGRAY,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ControlPanel {
        ControlPanel::new(SearchAlgorithm::Recursive, 1, 99)
    }

    fn type_str(panel: &mut ControlPanel, text: &str) {
        for c in text.chars() {
            panel.type_char(c);
        }
    }

    #[test]
    fn search_field_keeps_two_digits() {
        let mut panel = panel();
        type_str(&mut panel, "4a2,7");
        assert_eq!(panel.input, "42");
        assert_eq!(
            panel.submit(),
            Some(Command::Search {
                value: 42,
                algorithm: SearchAlgorithm::Recursive
            })
        );
    }

    #[test]
    fn empty_search_sets_message() {
        let mut panel = panel();
        assert_eq!(panel.submit(), None);
        assert!(panel.message.is_some());
    }

    #[test]
    fn typed_list_builds_tree() {
        let mut panel = panel();
        panel.field = Field::List;
        type_str(&mut panel, "50, 30,x70, 0, 20");
        assert_eq!(panel.list_input, "50, 30,70, 0, 20");

        assert_eq!(panel.submit(), Some(Command::Build(vec![50, 30, 70, 20])));
        assert_eq!(panel.field, Field::Search);
    }

    #[test]
    fn unusable_list_keeps_field_open() {
        let mut panel = panel();
        panel.field = Field::List;
        type_str(&mut panel, "0, ,100");

        assert_eq!(panel.submit(), None);
        assert_eq!(panel.field, Field::List);
        assert!(panel.message.is_some());
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut panel = panel();
        type_str(&mut panel, "12");
        panel.field = Field::List;
        type_str(&mut panel, "5,6");
        panel.backspace();

        assert_eq!(panel.list_input, "5,");
        assert_eq!(panel.input, "12");
    }
}
