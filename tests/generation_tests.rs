// Generation invariants: contact shape, story rules, conversation ordering,
// and the startup population layout.

use rand::rngs::StdRng;
use rand::SeedableRng;

use babble::gen::population::PopulationError;
use babble::gen::{
    build_population, generate_chat_session, generate_contacts, generate_user, PopulationConfig,
};
use babble::{DeliveryStatus, StatusKind, UserKind, MAX_PINNED_CHATS};

#[test]
fn contacts_get_sequential_ids_and_person_shape() {
    let mut rng = StdRng::seed_from_u64(1);
    let contacts = generate_contacts(&mut rng, 50);

    assert_eq!(contacts.len(), 50);
    for (i, user) in contacts.iter().enumerate() {
        assert_eq!(user.id, format!("u_{}", i));
        assert_eq!(user.kind, UserKind::Person);
        assert!(!user.name.is_empty());
        assert!(user.name.contains(' '), "first and last name expected");
        let phone = user.phone_number.as_deref().unwrap();
        assert!(phone.starts_with("+62 8"), "got {}", phone);
        assert!(user.about.is_some());
    }
}

#[test]
fn person_stories_follow_the_generation_rules() {
    let mut rng = StdRng::seed_from_u64(2);
    let contacts = generate_contacts(&mut rng, 300);

    let carriers: Vec<_> = contacts
        .iter()
        .filter(|u| !u.status_updates.is_empty())
        .collect();
    assert!(!carriers.is_empty(), "a quarter of 300 should carry stories");

    for user in carriers {
        let stories = &user.status_updates;
        assert!((1..=5).contains(&stories.len()));
        assert!(
            !stories[0].is_viewed,
            "the chronologically first story is always unviewed"
        );
        for story in stories {
            match story.kind {
                StatusKind::Image => {
                    assert!(story.color.is_none());
                    assert!(story.content.contains("status_"));
                }
                StatusKind::Text => {
                    assert!(story.color.is_some());
                    assert!(story.caption.is_none());
                }
            }
        }
        // Ids are unique within one user's sequence.
        let mut ids: Vec<_> = stories.iter().map(|s| s.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), stories.len());
    }
}

#[test]
fn groups_have_group_shape() {
    let mut rng = StdRng::seed_from_u64(3);
    for i in 0..20 {
        let group = generate_user(&mut rng, &format!("g_{}", i), UserKind::Group);
        assert!(group.is_group());
        assert!(group.phone_number.is_none());
        assert!(group.status_updates.is_empty());
        assert!(!group.is_online);
        assert_eq!(group.about.as_deref(), Some("Group chat"));
        assert!(!group.name.is_empty());
    }
}

#[test]
fn generated_sessions_keep_tail_cache_and_bounds() {
    let mut rng = StdRng::seed_from_u64(4);
    let users = generate_contacts(&mut rng, 20);

    for user in &users {
        let session = generate_chat_session(&mut rng, user, false, false);
        assert_eq!(session.id, format!("chat_{}", user.id));
        assert_eq!(session.user_id, user.id);
        assert!((5..=500).contains(&session.messages.len()));

        let tail = session.messages.last().unwrap();
        assert_eq!(session.last_message, tail.text);
        assert_eq!(session.last_message_time, tail.timestamp);
        assert!(session.unread_count <= 15);
    }
}

#[test]
fn session_flags_pass_through() {
    let mut rng = StdRng::seed_from_u64(5);
    let user = generate_user(&mut rng, "u_0", UserKind::Person);

    let archived = generate_chat_session(&mut rng, &user, true, false);
    assert!(archived.archived);
    assert!(!archived.pinned);

    let pinned = generate_chat_session(&mut rng, &user, false, true);
    assert!(!pinned.archived);
    assert!(pinned.pinned);
}

#[test]
fn long_histories_mix_directions_and_settle_to_read() {
    let mut rng = StdRng::seed_from_u64(6);
    let user = generate_user(&mut rng, "u_0", UserKind::Person);
    let session = generate_chat_session(&mut rng, &user, false, false);

    if session.messages.len() >= 50 {
        assert!(session.messages.iter().any(|m| m.is_mine));
        assert!(session.messages.iter().any(|m| !m.is_mine));
    }
    // Everything except the freshest minutes has a settled delivery state.
    let read = session
        .messages
        .iter()
        .filter(|m| m.status == DeliveryStatus::Read)
        .count();
    assert!(read >= session.messages.len().saturating_sub(10));
}

#[test]
fn population_layout_matches_config() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = PopulationConfig::default();
    let population = build_population(&mut rng, &config).unwrap();

    // 1 scripted + 5 archived groups + 15 active groups + 85 archived
    // personals + 40 active personals.
    assert_eq!(population.sessions.len(), 146);
    let archived = population.sessions.iter().filter(|s| s.archived).count();
    assert_eq!(archived, config.archived_chats);

    // Registry holds the scripted user plus every contact and group once.
    assert_eq!(population.users.len(), 1 + 900 + 20);
    assert_eq!(population.contact_order.len(), population.users.len());
    assert_eq!(population.contact_order[0], "special_1");
}

#[test]
fn scripted_session_is_first_and_pinned() {
    let mut rng = StdRng::seed_from_u64(8);
    let population = build_population(&mut rng, &PopulationConfig::default()).unwrap();

    let special = &population.sessions[0];
    assert_eq!(special.id, "chat_special_1");
    assert!(special.pinned);
    assert!(!special.archived);
    assert_eq!(special.unread_count, 2);
    assert!(!special.messages.is_empty());
    assert_eq!(
        special.last_message,
        special.messages.last().unwrap().text
    );

    let user = population.users.get("special_1").unwrap();
    assert!(user.has_unviewed_status());
    assert!(user.is_online);
}

#[test]
fn seeded_population_respects_pin_cap() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let population = build_population(&mut rng, &PopulationConfig::default()).unwrap();
        let pinned = population
            .sessions
            .iter()
            .filter(|s| s.pinned && !s.archived)
            .count();
        assert!((1..=MAX_PINNED_CHATS).contains(&pinned), "seed {}: {}", seed, pinned);
        assert!(
            !population.sessions.iter().any(|s| s.pinned && s.archived),
            "archived sessions are never seeded pinned"
        );
    }
}

#[test]
fn oversubscribed_config_is_rejected() {
    let mut rng = StdRng::seed_from_u64(9);
    let config = PopulationConfig {
        total_contacts: 10,
        ..PopulationConfig::default()
    };
    match build_population(&mut rng, &config) {
        Err(PopulationError::PoolExhausted { pool, .. }) => assert_eq!(pool, "contact"),
        other => panic!("expected PoolExhausted, got {:?}", other),
    }
}
