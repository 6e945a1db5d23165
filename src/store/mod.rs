// The live dataset: one identity-keyed user registry plus the ordered chat
// list, mutated only through the action methods below. Every mutation is a
// single read-compute-publish step; interested parties observe it through
// subscription channels rather than polling.

use std::collections::HashMap;

use log::{debug, info};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::gen::population::Population;
use crate::gen::random::clock_now;
use crate::models::{ChatSession, DeliveryStatus, Message, StatusUpdate, User};

pub mod reorder;

pub use reorder::reorder;

/// Hard cap on concurrently pinned, non-archived chats.
pub const MAX_PINNED_CHATS: usize = 3;

/// Transient signals for the view layer. Emitted, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A pin attempt was rejected because the cap is already reached.
    PinLimitReached { chat_id: String },
    /// Chat list content or ordering changed; re-render the list.
    ChatListChanged,
    /// A profile or story changed. Ordering is deliberately unaffected.
    ContactChanged { user_id: String },
}

/// Generic pin/archive patch, the shape chat-row menus produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatPatch {
    pub pinned: Option<bool>,
    pub archived: Option<bool>,
}

/// A simulated edit to a user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChange {
    Rename(String),
    About(String),
}

pub struct ChatStore {
    chats: Vec<ChatSession>,
    users: HashMap<String, User>,
    contact_order: Vec<String>,
    active_chat_id: Option<String>,
    subscribers: Vec<mpsc::UnboundedSender<StoreEvent>>,
}

impl ChatStore {
    pub fn new(population: Population) -> Self {
        ChatStore {
            chats: population.sessions,
            users: population.users,
            contact_order: population.contact_order,
            active_chat_id: None,
            subscribers: Vec::new(),
        }
    }

    pub fn chats(&self) -> &[ChatSession] {
        &self.chats
    }

    pub fn chat(&self, chat_id: &str) -> Option<&ChatSession> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    /// Contact-list ordering over registry keys.
    pub fn contact_ids(&self) -> &[String] {
        &self.contact_order
    }

    /// Contacts in list order, joined through the registry.
    pub fn contacts(&self) -> impl Iterator<Item = &User> + '_ {
        self.contact_order.iter().filter_map(|id| self.users.get(id))
    }

    pub fn active_chat_id(&self) -> Option<&str> {
        self.active_chat_id.as_deref()
    }

    /// Count of pinned chats that still occupy a pin slot.
    pub fn pinned_count(&self) -> usize {
        self.chats.iter().filter(|c| c.pinned && !c.archived).count()
    }

    /// Opens a channel that receives every subsequent [`StoreEvent`].
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<StoreEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: StoreEvent) {
        // Dropped receivers are pruned on the way through.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Appends an outgoing message to `chat_id`. Unknown ids are ignored.
    pub fn send_message(&mut self, chat_id: &str, text: &str) {
        let Some(index) = self.chats.iter().position(|c| c.id == chat_id) else {
            debug!("send_message: unknown chat {}", chat_id);
            return;
        };

        let message = Message {
            id: format!("new_{}", Uuid::new_v4()),
            text: text.to_string(),
            timestamp: clock_now(),
            is_mine: true,
            status: DeliveryStatus::Sent,
        };

        let mut chat = self.chats[index].clone();
        chat.push_message(message);
        chat.archived = false;

        let current = std::mem::take(&mut self.chats);
        self.chats = reorder(current, chat);
        self.emit(StoreEvent::ChatListChanged);
    }

    /// Marks `chat_id` as the open conversation and clears its unread badge.
    pub fn select_chat(&mut self, chat_id: &str) {
        let Some(chat) = self.chats.iter_mut().find(|c| c.id == chat_id) else {
            debug!("select_chat: unknown chat {}", chat_id);
            return;
        };
        chat.unread_count = 0;
        self.active_chat_id = Some(chat_id.to_string());
        self.emit(StoreEvent::ChatListChanged);
    }

    /// Applies a pin/archive patch. Pinning past the cap is rejected with a
    /// [`StoreEvent::PinLimitReached`] signal and no state change; archiving
    /// always clears the pin in the same update.
    pub fn update_chat(&mut self, chat_id: &str, patch: ChatPatch) {
        let Some(index) = self.chats.iter().position(|c| c.id == chat_id) else {
            debug!("update_chat: unknown chat {}", chat_id);
            return;
        };

        if let Some(pinned) = patch.pinned {
            if pinned && !self.chats[index].pinned {
                if self.pinned_count() >= MAX_PINNED_CHATS {
                    info!("pin limit reached, rejecting pin of {}", chat_id);
                    self.emit(StoreEvent::PinLimitReached {
                        chat_id: chat_id.to_string(),
                    });
                } else {
                    self.chats[index].pinned = true;
                }
            } else if !pinned {
                self.chats[index].pinned = false;
            }
        }

        if let Some(archived) = patch.archived {
            let chat = &mut self.chats[index];
            chat.archived = archived;
            if archived {
                // Archived chats never hold a pin slot.
                chat.pinned = false;
            }
        }

        self.emit(StoreEvent::ChatListChanged);
    }

    /// Applies a simulated incoming message: append, bump the unread badge
    /// unless the chat is currently open, un-archive, reorder.
    pub fn apply_incoming(&mut self, chat_id: &str, message: Message) {
        let Some(index) = self.chats.iter().position(|c| c.id == chat_id) else {
            debug!("apply_incoming: unknown chat {}", chat_id);
            return;
        };

        let is_active = self.active_chat_id.as_deref() == Some(chat_id);

        let mut chat = self.chats[index].clone();
        chat.push_message(message);
        chat.unread_count = if is_active { 0 } else { chat.unread_count + 1 };
        chat.archived = false;

        let current = std::mem::take(&mut self.chats);
        self.chats = reorder(current, chat);
        self.emit(StoreEvent::ChatListChanged);
    }

    /// Appends a story to a user. Applied once in the registry, so the
    /// contact list and every session joining on the id observe it
    /// together. The chat list is deliberately not reordered.
    pub fn apply_status(&mut self, user_id: &str, status: StatusUpdate) {
        let Some(user) = self.users.get_mut(user_id) else {
            debug!("apply_status: unknown user {}", user_id);
            return;
        };
        user.status_updates.push(status);
        self.emit(StoreEvent::ContactChanged {
            user_id: user_id.to_string(),
        });
    }

    /// Applies a simulated profile edit. Same propagation and no-reorder
    /// rules as [`ChatStore::apply_status`].
    pub fn apply_profile(&mut self, user_id: &str, change: ProfileChange) {
        let Some(user) = self.users.get_mut(user_id) else {
            debug!("apply_profile: unknown user {}", user_id);
            return;
        };
        match change {
            ProfileChange::Rename(name) => user.name = name,
            ProfileChange::About(about) => user.about = Some(about),
        }
        self.emit(StoreEvent::ContactChanged {
            user_id: user_id.to_string(),
        });
    }
}
