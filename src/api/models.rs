use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Room {
    pub id: String,
}

/// A message as the server reports it. `sent_at` is always the
/// server-assigned timestamp; the client never stamps messages itself.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn user_decodes_camel_case_full_name() {
        let user: User = serde_json::from_str(r#"{"id":"u1","fullName":"Ada Lovelace"}"#)
            .expect("user json");
        assert_eq!(user.id, "u1");
        assert_eq!(user.full_name, "Ada Lovelace");
    }

    #[test]
    fn message_decodes_server_sent_at() {
        let message: Message = serde_json::from_str(
            r#"{"sender":"u1","text":"hi","sentAt":"2024-05-04T12:30:00Z"}"#,
        )
        .expect("message json");
        assert_eq!(message.sender, "u1");
        assert_eq!(message.text, "hi");
        assert_eq!(
            message.sent_at,
            Utc.with_ymd_and_hms(2024, 5, 4, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn message_round_trips_with_camel_case_keys() {
        let message = Message {
            sender: "u1".into(),
            text: "hi".into(),
            sent_at: Utc.with_ymd_and_hms(2024, 5, 4, 12, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&message).expect("to json");
        assert!(value.get("sentAt").is_some());
        let back: Message = serde_json::from_value(value).expect("from json");
        assert_eq!(back, message);
    }
}
