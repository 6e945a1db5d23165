use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Person,
    Group,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub kind: UserKind,
    pub name: String,
    pub avatar: String,
    pub is_online: bool,
    pub about: Option<String>,
    pub phone_number: Option<String>,
    /// Stories, chronological oldest first. Injected updates append at the tail.
    pub status_updates: Vec<StatusUpdate>,
}

impl User {
    pub fn is_group(&self) -> bool {
        self.kind == UserKind::Group
    }

    pub fn has_unviewed_status(&self) -> bool {
        self.status_updates.iter().any(|s| !s.is_viewed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Image,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: String,
    pub kind: StatusKind,
    /// Image locator or text body, depending on `kind`.
    pub content: String,
    pub caption: Option<String>,
    pub timestamp: String,
    pub is_viewed: bool,
    /// Background color token, only set for text statuses.
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,      // accepted, single check
    Delivered, // reached the counterpart device, double check
    Read,      // opened, blue check
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    /// Display string, not an instant ("14:02", "Yesterday", "03/11/25").
    pub timestamp: String,
    pub is_mine: bool,
    /// Only meaningful when `is_mine` is true.
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    /// Registry key of the counterpart; resolve through `ChatStore::user`.
    pub user_id: String,
    pub last_message: String,
    pub last_message_time: String,
    pub unread_count: u32,
    /// Strictly chronological, oldest first. Appends only at the tail.
    pub messages: Vec<Message>,
    pub pinned: bool,
    pub archived: bool,
}

impl ChatSession {
    /// Session ids derive from the counterpart; one session per user.
    pub fn id_for(user_id: &str) -> String {
        format!("chat_{}", user_id)
    }

    /// Appends at the tail and refreshes the denormalized last-message cache.
    /// Every append goes through here so the cache cannot drift.
    pub fn push_message(&mut self, message: Message) {
        self.last_message = message.text.clone();
        self.last_message_time = message.timestamp.clone();
        self.messages.push(message);
    }
}
