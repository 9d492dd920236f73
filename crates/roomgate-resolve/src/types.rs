//! Request, response, and wire types for the room lookup.

use serde::{Deserialize, Serialize};

/// Status value the service uses to reject a room.
pub const STATUS_ERROR: &str = "error";

/// What the client sends when asking about a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// The room identifier typed by the user or generated locally.
    pub meeting_id: String,
    /// Stable identifier of this client installation.
    pub device_id: String,
    /// Name the user will appear under.
    pub display_name: String,
}

/// A room the service accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRoom {
    /// Canonical, human-readable room title.
    pub title: String,
    /// Canonical room reference to navigate to. May be empty.
    pub room_url: String,
}

/// The service's verdict on a room identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The service rejected the identifier with a human-readable reason.
    Rejected { description: String },
    /// The service accepted the identifier.
    Resolved(ResolvedRoom),
}

/// Raw JSON body returned by the lookup endpoint.
///
/// Every field is optional on the wire; absent or `null` fields read as
/// empty strings once converted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckMeetingResponse {
    pub status: Option<String>,
    pub description: Option<String>,
    pub title: Option<String>,
    pub room_url: Option<String>,
}

impl CheckMeetingResponse {
    /// Whether the service flagged the identifier as invalid.
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ERROR)
    }

    /// Interprets the body. Any status other than `"error"` is a success.
    pub fn into_resolution(self) -> Resolution {
        if self.is_error() {
            Resolution::Rejected {
                description: self.description.unwrap_or_default(),
            }
        } else {
            Resolution::Resolved(ResolvedRoom {
                title: self.title.unwrap_or_default(),
                room_url: self.room_url.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Resolution {
        serde_json::from_str::<CheckMeetingResponse>(json)
            .unwrap()
            .into_resolution()
    }

    #[test]
    fn test_error_status_is_rejection() {
        let res = parse(r#"{"status":"error","description":"Wrong room name"}"#);
        assert_eq!(
            res,
            Resolution::Rejected {
                description: "Wrong room name".into()
            }
        );
    }

    #[test]
    fn test_success_carries_title_and_url() {
        let res = parse(
            r#"{"status":"ok","title":"Room123","room_url":"https://x/room123"}"#,
        );
        assert_eq!(
            res,
            Resolution::Resolved(ResolvedRoom {
                title: "Room123".into(),
                room_url: "https://x/room123".into(),
            })
        );
    }

    #[test]
    fn test_missing_status_is_success() {
        let res = parse(r#"{"title":"Standup"}"#);
        assert_eq!(
            res,
            Resolution::Resolved(ResolvedRoom {
                title: "Standup".into(),
                room_url: String::new(),
            })
        );
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let res = parse(r#"{"status":"error","description":null}"#);
        assert_eq!(
            res,
            Resolution::Rejected {
                description: String::new()
            }
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let res = parse(r#"{"status":"success","title":"T","room_url":"u","extra":42}"#);
        assert!(matches!(res, Resolution::Resolved(_)));
    }

    #[test]
    fn test_status_match_is_exact() {
        let body = CheckMeetingResponse {
            status: Some("ERROR".into()),
            ..Default::default()
        };
        assert!(!body.is_error());
    }
}
