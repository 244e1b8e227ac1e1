use serde::Serialize;

/// List endpoints never return more than this many documents.
pub const LIST_LIMIT: i64 = 100;

/// Health-check state of one database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl From<bool> for ConnectionStatus {
    fn from(reachable: bool) -> Self {
        if reachable {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_plain_words() {
        assert_eq!(
            serde_json::to_string(&ConnectionStatus::Connected).unwrap(),
            "\"Connected\""
        );
        assert_eq!(
            serde_json::to_string(&ConnectionStatus::Disconnected).unwrap(),
            "\"Disconnected\""
        );
    }
}
