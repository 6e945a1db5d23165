// Profile generation: person and group users, plus their status stories.

use rand::Rng;

use crate::models::{StatusKind, StatusUpdate, User, UserKind};

use super::corpus;
use super::random::{random_bool, random_int, relative_timestamp};

/// Chance a freshly generated person carries active stories.
const STATUS_CARRIER_P: f64 = 0.25;

fn generate_status_updates(rng: &mut impl Rng, user_id: &str, count: u32) -> Vec<StatusUpdate> {
    let mut updates = Vec::with_capacity(count as usize);
    for i in 0..count {
        let is_image = random_bool(rng, 0.7);
        let minutes_ago = random_int(rng, 5, 1400); // within the last day

        updates.push(StatusUpdate {
            id: format!("st_{}_{}", user_id, i),
            kind: if is_image { StatusKind::Image } else { StatusKind::Text },
            content: if is_image {
                format!("https://picsum.photos/seed/status_{}_{}/500/800", user_id, i)
            } else {
                corpus::pick(rng, corpus::STATUS_TEXTS).to_string()
            },
            caption: if is_image && random_bool(rng, 0.4) {
                Some(corpus::pick(rng, corpus::STATUS_TEXTS).to_string())
            } else {
                None
            },
            timestamp: relative_timestamp(minutes_ago as i64),
            // The first story is always unviewed so every carrier shows a ring.
            is_viewed: if i == 0 { false } else { random_bool(rng, 0.5) },
            color: if is_image {
                None
            } else {
                Some(corpus::pick(rng, corpus::STATUS_COLORS).to_string())
            },
        });
    }

    // Ids are zero-indexed in generation order, so an id sort is oldest first.
    updates.sort_by(|a, b| a.id.cmp(&b.id));
    updates
}

fn generate_phone_number(rng: &mut impl Rng) -> String {
    format!(
        "+62 8{}-{}-{}",
        random_int(rng, 10, 99),
        random_int(rng, 1000, 9999),
        random_int(rng, 1000, 9999)
    )
}

pub fn generate_user(rng: &mut impl Rng, id: &str, kind: UserKind) -> User {
    match kind {
        UserKind::Group => User {
            id: id.to_string(),
            kind,
            name: corpus::pick(rng, corpus::GROUP_NAMES).to_string(),
            avatar: format!("https://picsum.photos/seed/group_{}/200/200", id),
            is_online: false,
            about: Some(corpus::GROUP_ABOUT.to_string()),
            phone_number: None,
            status_updates: Vec::new(),
        },
        UserKind::Person => {
            let first = corpus::pick(rng, corpus::FIRST_NAMES);
            let last = corpus::pick(rng, corpus::LAST_NAMES);
            let phone_number = Some(generate_phone_number(rng));
            let status_updates = if random_bool(rng, STATUS_CARRIER_P) {
                let count = random_int(rng, 1, 5);
                generate_status_updates(rng, id, count)
            } else {
                Vec::new()
            };

            User {
                id: id.to_string(),
                kind,
                name: format!("{} {}", first, last),
                avatar: format!("https://picsum.photos/seed/{}/200/200", id),
                is_online: random_bool(rng, 0.3),
                about: Some(corpus::pick(rng, corpus::ABOUT_STATUSES).to_string()),
                phone_number,
                status_updates,
            }
        }
    }
}

/// Sequentially numbered person contacts `u_0..u_{n-1}`.
pub fn generate_contacts(rng: &mut impl Rng, count: usize) -> Vec<User> {
    (0..count)
        .map(|i| generate_user(rng, &format!("u_{}", i), UserKind::Person))
        .collect()
}
