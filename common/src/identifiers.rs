use std::fmt;

/// Identifies one widget instance. Event handlers and board state are scoped
/// to the instance that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the scaffold container, `minigames:<id>`.
    pub fn container_id(&self) -> String {
        format!("minigames:{}", self.0)
    }

    /// Element id of a game section, e.g. `minigames:tictactoe:<id>`.
    pub fn game_section_id(&self, game: &str) -> String {
        format!("minigames:{}:{}", game, self.0)
    }
}

impl From<String> for InstanceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<InstanceId> for String {
    fn from(id: InstanceId) -> Self {
        id.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
