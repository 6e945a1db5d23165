// Babble: an in-memory messaging-client simulator. Generates a synthetic
// population of contacts and conversations, then keeps it alive with
// timer-driven fake activity while preserving the chat list's ordering
// invariants.

pub mod gen;
pub mod models;
pub mod sim;
pub mod store;
pub mod utils;

// Re-export the types a consumer touches most.
pub use models::*;
pub use store::{ChatPatch, ChatStore, ProfileChange, StoreEvent, MAX_PINNED_CHATS};

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> ChatSession {
        ChatSession {
            id: ChatSession::id_for("u_0"),
            user_id: "u_0".to_string(),
            last_message: String::new(),
            last_message_time: String::new(),
            unread_count: 0,
            messages: Vec::new(),
            pinned: false,
            archived: false,
        }
    }

    #[test]
    fn test_session_id_derivation() {
        assert_eq!(ChatSession::id_for("u_7"), "chat_u_7");
        assert_eq!(ChatSession::id_for("special_1"), "chat_special_1");
    }

    #[test]
    fn test_push_message_keeps_tail_cache_in_sync() {
        let mut session = empty_session();

        session.push_message(Message {
            id: "m1".to_string(),
            text: "first".to_string(),
            timestamp: "09:00".to_string(),
            is_mine: false,
            status: DeliveryStatus::Read,
        });
        session.push_message(Message {
            id: "m2".to_string(),
            text: "second".to_string(),
            timestamp: "09:05".to_string(),
            is_mine: true,
            status: DeliveryStatus::Sent,
        });

        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.last_message, "second");
        assert_eq!(session.last_message_time, "09:05");
        assert_eq!(session.messages.last().map(|m| m.id.as_str()), Some("m2"));
    }

    #[test]
    fn test_unviewed_status_detection() {
        let mut user = User {
            id: "u_1".to_string(),
            kind: UserKind::Person,
            name: "Siti Wijaya".to_string(),
            avatar: String::new(),
            is_online: false,
            about: None,
            phone_number: None,
            status_updates: Vec::new(),
        };
        assert!(!user.has_unviewed_status());

        user.status_updates.push(StatusUpdate {
            id: "st_1".to_string(),
            kind: StatusKind::Text,
            content: "Weekend vibes".to_string(),
            caption: None,
            timestamp: "12:00".to_string(),
            is_viewed: true,
            color: Some("bg-teal-500".to_string()),
        });
        assert!(!user.has_unviewed_status());

        user.status_updates.push(StatusUpdate {
            id: "st_2".to_string(),
            kind: StatusKind::Text,
            content: "Mood 😎".to_string(),
            caption: None,
            timestamp: "12:30".to_string(),
            is_viewed: false,
            color: Some("bg-pink-500".to_string()),
        });
        assert!(user.has_unviewed_status());
    }

    #[test]
    fn test_group_tag() {
        let group = User {
            id: "g_0".to_string(),
            kind: UserKind::Group,
            name: "Futsal Rabu Malam".to_string(),
            avatar: String::new(),
            is_online: false,
            about: None,
            phone_number: None,
            status_updates: Vec::new(),
        };
        assert!(group.is_group());
    }
}
