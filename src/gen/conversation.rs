// Conversation generation: a plausible message history walked backward from
// the session's last activity, then flipped to chronological order.

use rand::Rng;

use crate::models::{ChatSession, DeliveryStatus, Message, User};

use super::corpus;
use super::random::{random_bool, random_int, random_item, relative_timestamp};

fn generate_message_history(
    rng: &mut impl Rng,
    user_id: &str,
    count: u32,
    start_minute_offset: u32,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(count as usize);
    let mut offset = start_minute_offset;

    for i in 0..count {
        // Gap between consecutive messages: one minute to three hours.
        offset += random_int(rng, 1, 180);

        let is_mine = random_bool(rng, 0.4);
        // Anything older than ten simulated minutes has settled to read.
        let status = if offset < 10 {
            random_item(
                rng,
                &[DeliveryStatus::Sent, DeliveryStatus::Delivered, DeliveryStatus::Read],
            )
            .copied()
            .unwrap_or(DeliveryStatus::Read)
        } else {
            DeliveryStatus::Read
        };

        messages.push(Message {
            id: format!("msg_{}_{}", user_id, i),
            text: corpus::pick(rng, &corpus::ALL_TEXTS).to_string(),
            timestamp: relative_timestamp(offset as i64),
            is_mine,
            status,
        });
    }

    // Built newest first; flip so the newest message sits at the tail.
    messages.reverse();
    messages
}

pub fn generate_chat_session(
    rng: &mut impl Rng,
    user: &User,
    archived: bool,
    pinned: bool,
) -> ChatSession {
    let msg_count = random_int(rng, 5, 500);
    // Last activity anywhere between just now and ten days back.
    let last_active_minutes = random_int(rng, 0, 14400);

    let messages = generate_message_history(rng, &user.id, msg_count, last_active_minutes);
    let (last_message, last_message_time) = match messages.last() {
        Some(tail) => (tail.text.clone(), tail.timestamp.clone()),
        None => (String::new(), String::new()),
    };

    ChatSession {
        id: ChatSession::id_for(&user.id),
        user_id: user.id.clone(),
        last_message,
        last_message_time,
        unread_count: if random_bool(rng, 0.2) {
            random_int(rng, 1, 15)
        } else {
            0
        },
        messages,
        pinned,
        archived,
    }
}
