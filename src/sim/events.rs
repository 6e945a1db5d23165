// Payload builders for simulated activity: incoming messages, fresh
// stories, and profile edits.

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use uuid::Uuid;

use crate::gen::corpus;
use crate::gen::random::{clock_now, random_bool, random_int};
use crate::models::{DeliveryStatus, Message, StatusKind, StatusUpdate, User};
use crate::store::ProfileChange;

fn incoming_text(rng: &mut impl Rng, is_special: bool) -> String {
    if is_special {
        return corpus::pick(rng, corpus::ROMANTIC_TEXTS).to_string();
    }

    let pool = match random_int(rng, 1, 4) {
        1 => corpus::GREETINGS,
        2 => corpus::QUESTIONS,
        3 => corpus::STATEMENTS,
        _ => corpus::BUSINESS_TALK,
    };
    corpus::pick(rng, pool).to_string()
}

/// An incoming message stamped with the current time of day. The scripted
/// chat draws from its own pool so the relationship stays in character.
pub fn incoming_message(rng: &mut impl Rng, is_special: bool) -> Message {
    Message {
        id: format!("msg_auto_{}", Uuid::new_v4()),
        text: incoming_text(rng, is_special),
        timestamp: clock_now(),
        is_mine: false,
        // Delivery state is only rendered for outgoing messages.
        status: DeliveryStatus::Read,
    }
}

/// A fresh, unviewed story to append to some contact.
pub fn status_post(rng: &mut impl Rng) -> StatusUpdate {
    let is_image = random_bool(rng, 0.6);
    let id = Uuid::new_v4();

    StatusUpdate {
        id: format!("st_new_{}", id),
        kind: if is_image { StatusKind::Image } else { StatusKind::Text },
        content: if is_image {
            format!("https://picsum.photos/seed/new_{}/500/800", id)
        } else {
            corpus::pick(rng, corpus::LIVE_STATUS_TEXTS).to_string()
        },
        caption: None,
        timestamp: "Just now".to_string(),
        is_viewed: false,
        color: if is_image {
            None
        } else {
            Some(corpus::pick(rng, corpus::LIVE_STATUS_COLORS).to_string())
        },
    }
}

lazy_static! {
    // An emoji or parenthesised tag appended after the base name.
    static ref EMOJI_SUFFIX: Regex =
        Regex::new(r" [\p{Emoji}\u{203C}-\u{3299}]\s?.*$").expect("valid suffix pattern");
    static ref PAREN_SUFFIX: Regex = Regex::new(r" \(.*\)$").expect("valid suffix pattern");
}

/// Display name with any previously appended suffix marker removed, so
/// repeated renames never stack suffixes.
pub fn base_name(name: &str) -> String {
    let stripped = EMOJI_SUFFIX.replace(name, "");
    PAREN_SUFFIX.replace(&stripped, "").into_owned()
}

/// Either a display-name rewrite (fresh suffix over the stripped base) or a
/// replacement about line, at even odds.
pub fn profile_change(rng: &mut impl Rng, user: &User) -> ProfileChange {
    if random_bool(rng, 0.5) {
        let suffix = corpus::pick(rng, corpus::NAME_SUFFIXES);
        ProfileChange::Rename(format!("{}{}", base_name(&user.name), suffix))
    } else {
        ProfileChange::About(corpus::pick(rng, corpus::ABOUT_REPLACEMENTS).to_string())
    }
}
