// Startup population: the contact and group pools, the scripted special
// relationship, and the archived/active distribution of chat sessions.

use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::models::{ChatSession, DeliveryStatus, Message, StatusKind, StatusUpdate, User, UserKind};
use crate::store::MAX_PINNED_CHATS;

use super::conversation::generate_chat_session;
use super::corpus;
use super::profile::{generate_contacts, generate_user};
use super::random::{random_int, relative_timestamp};

#[derive(Debug, Clone)]
pub struct PopulationConfig {
    pub total_contacts: usize,
    pub total_groups: usize,
    /// Total archived sessions, groups included.
    pub archived_chats: usize,
    /// Active personal sessions; active groups and the scripted chat are extra.
    pub active_chats: usize,
    pub archived_groups: usize,
    pub active_groups: usize,
    /// Percent chance an active session is seeded pinned.
    pub pin_percent: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        PopulationConfig {
            total_contacts: 900,
            total_groups: 20,
            archived_chats: 90,
            active_chats: 40,
            archived_groups: 5,
            active_groups: 15,
            pin_percent: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("population config seats {needed} {pool} users but only {available} are generated")]
    PoolExhausted {
        pool: &'static str,
        needed: usize,
        available: usize,
    },
}

/// The initial in-memory dataset handed to the store.
#[derive(Debug)]
pub struct Population {
    /// Sessions in initial list order, scripted chat first.
    pub sessions: Vec<ChatSession>,
    /// Identity-keyed user registry shared by the contact list and sessions.
    pub users: HashMap<String, User>,
    /// Contact-list ordering over registry keys.
    pub contact_order: Vec<String>,
}

fn scripted_user() -> User {
    User {
        id: corpus::SPECIAL_USER_ID.to_string(),
        kind: UserKind::Person,
        name: corpus::SPECIAL_USER_NAME.to_string(),
        avatar: corpus::SPECIAL_USER_AVATAR.to_string(),
        is_online: true,
        about: Some(corpus::SPECIAL_USER_ABOUT.to_string()),
        phone_number: Some(corpus::SPECIAL_USER_PHONE.to_string()),
        status_updates: vec![StatusUpdate {
            id: format!("st_{}_0", corpus::SPECIAL_USER_ID),
            kind: StatusKind::Image,
            content: corpus::SPECIAL_STATUS_IMAGE.to_string(),
            caption: Some(corpus::SPECIAL_STATUS_CAPTION.to_string()),
            timestamp: relative_timestamp(15),
            is_viewed: false,
            color: None,
        }],
    }
}

fn scripted_session(user: &User) -> ChatSession {
    let mut session = ChatSession {
        id: ChatSession::id_for(&user.id),
        user_id: user.id.clone(),
        last_message: String::new(),
        last_message_time: String::new(),
        unread_count: 2, // the two unanswered script lines
        messages: Vec::new(),
        pinned: true,
        archived: false,
    };

    for (index, line) in corpus::SCRIPTED_CHAT.iter().enumerate() {
        session.push_message(Message {
            id: format!("msg_{}_{}", user.id, index),
            text: line.text.to_string(),
            timestamp: relative_timestamp(line.minutes_ago),
            is_mine: line.is_mine,
            status: DeliveryStatus::Read,
        });
    }

    session
}

fn place_sessions(
    rng: &mut impl Rng,
    sessions: &mut Vec<ChatSession>,
    pool: &[User],
    archived: bool,
    pin_percent: u32,
    pinned_count: &mut usize,
) {
    for user in pool {
        let pinned = !archived
            && *pinned_count < MAX_PINNED_CHATS
            && random_int(rng, 1, 100) <= pin_percent;
        if pinned {
            *pinned_count += 1;
        }
        sessions.push(generate_chat_session(rng, user, archived, pinned));
    }
}

fn check_pool(
    pool: &'static str,
    needed: usize,
    available: usize,
) -> Result<(), PopulationError> {
    if needed > available {
        return Err(PopulationError::PoolExhausted {
            pool,
            needed,
            available,
        });
    }
    Ok(())
}

/// Builds the whole startup dataset. Runs once at process start; everything
/// afterwards is mutation, never regeneration.
pub fn build_population(
    rng: &mut impl Rng,
    config: &PopulationConfig,
) -> Result<Population, PopulationError> {
    let archived_personals = config.archived_chats.saturating_sub(config.archived_groups);

    check_pool(
        "group",
        config.archived_groups + config.active_groups,
        config.total_groups,
    )?;
    check_pool(
        "contact",
        archived_personals + config.active_chats,
        config.total_contacts,
    )?;

    let contacts = generate_contacts(rng, config.total_contacts);
    let groups: Vec<User> = (0..config.total_groups)
        .map(|i| generate_user(rng, &format!("g_{}", i), UserKind::Group))
        .collect();

    let mut sessions = Vec::new();
    let mut pinned_count = 0usize;

    // The scripted chat goes in first so it is stable across runs.
    let special = scripted_user();
    sessions.push(scripted_session(&special));
    pinned_count += 1;

    // Groups, archived then active.
    place_sessions(
        rng,
        &mut sessions,
        &groups[..config.archived_groups],
        true,
        config.pin_percent,
        &mut pinned_count,
    );
    place_sessions(
        rng,
        &mut sessions,
        &groups[config.archived_groups..config.archived_groups + config.active_groups],
        false,
        config.pin_percent,
        &mut pinned_count,
    );

    // Personal contacts, archived then active, drawn from the front of the pool.
    place_sessions(
        rng,
        &mut sessions,
        &contacts[..archived_personals],
        true,
        config.pin_percent,
        &mut pinned_count,
    );
    place_sessions(
        rng,
        &mut sessions,
        &contacts[archived_personals..archived_personals + config.active_chats],
        false,
        config.pin_percent,
        &mut pinned_count,
    );

    debug!(
        "placed {} sessions ({} seeded pins)",
        sessions.len(),
        pinned_count
    );

    let mut contact_order = Vec::with_capacity(1 + contacts.len() + groups.len());
    let mut users = HashMap::with_capacity(1 + contacts.len() + groups.len());

    contact_order.push(special.id.clone());
    users.insert(special.id.clone(), special);
    for user in contacts {
        contact_order.push(user.id.clone());
        users.insert(user.id.clone(), user);
    }
    for group in groups {
        contact_order.push(group.id.clone());
        users.insert(group.id.clone(), group);
    }

    info!(
        "generated {} contacts and {} chat sessions",
        contact_order.len(),
        sessions.len()
    );

    Ok(Population {
        sessions,
        users,
        contact_order,
    })
}
