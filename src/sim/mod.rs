// The simulation loop. A single cooperative timer task injects activity
// into the live store at randomized intervals: mostly incoming messages,
// sometimes a story, occasionally a profile edit. The task re-reads store
// state (including the active chat) inside every tick, so nothing is
// captured stale, and exactly one timer is pending at any instant.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::gen::corpus;
use crate::gen::random::{random_int, random_item, weighted_pick};
use crate::models::ChatSession;
use crate::store::ChatStore;

pub mod events;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    IncomingMessage,
    StatusPost,
    ProfileChange,
}

/// Messages dominate, stories are occasional, profile edits are rare.
pub const EVENT_WEIGHTS: &[(EventKind, u32)] = &[
    (EventKind::IncomingMessage, 6),
    (EventKind::StatusPost, 2),
    (EventKind::ProfileChange, 1),
];

/// Incoming messages only land in the top of the list, mirroring the chats
/// a user would plausibly still be active in.
pub const RECENT_CHAT_WINDOW: usize = 16;

#[derive(Debug, Clone, Copy)]
pub struct SimulatorConfig {
    /// Fixed delay before the very first tick.
    pub warmup: Duration,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        SimulatorConfig {
            warmup: Duration::from_secs(5),
            min_delay: Duration::from_secs(30),
            max_delay: Duration::from_secs(120),
        }
    }
}

/// Runs one simulation step: draw an event kind, apply it. Returns the kind
/// applied, or `None` when the weight table is empty.
pub fn tick(store: &mut ChatStore, rng: &mut impl Rng) -> Option<EventKind> {
    let kind = *weighted_pick(rng, EVENT_WEIGHTS)?;
    apply_event(store, rng, kind);
    Some(kind)
}

/// Applies one event of the given kind to the store. Split out from the
/// draw so tests can drive each kind deterministically.
pub fn apply_event(store: &mut ChatStore, rng: &mut impl Rng, kind: EventKind) {
    match kind {
        EventKind::IncomingMessage => {
            if store.chats().is_empty() {
                return;
            }
            let upper = store.chats().len().min(RECENT_CHAT_WINDOW) - 1;
            let index = random_int(rng, 0, upper as u32) as usize;
            let chat_id = store.chats()[index].id.clone();

            let is_special = chat_id == ChatSession::id_for(corpus::SPECIAL_USER_ID);
            let message = events::incoming_message(rng, is_special);
            debug!("simulated message into {}: {}", chat_id, message.text);
            store.apply_incoming(&chat_id, message);
        }
        EventKind::StatusPost => {
            let Some(user_id) = random_item(rng, store.contact_ids()).cloned() else {
                return;
            };
            let status = events::status_post(rng);
            debug!("simulated story for {}", user_id);
            store.apply_status(&user_id, status);
        }
        EventKind::ProfileChange => {
            let Some(user_id) = random_item(rng, store.contact_ids()).cloned() else {
                return;
            };
            let Some(user) = store.user(&user_id) else {
                return;
            };
            let change = events::profile_change(rng, user);
            debug!("simulated profile edit for {}: {:?}", user_id, change);
            store.apply_profile(&user_id, change);
        }
    }
}

pub struct Simulator;

/// Handle to the running loop. Dropping it cancels the pending tick.
pub struct SimulatorHandle {
    shutdown: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl Simulator {
    /// Spawns the timer task. The store is locked per tick only; between
    /// ticks the loop is suspended on a single pending sleep that the
    /// handle can cancel.
    pub fn spawn<R>(
        store: Arc<Mutex<ChatStore>>,
        mut rng: R,
        config: SimulatorConfig,
    ) -> SimulatorHandle
    where
        R: Rng + Send + 'static,
    {
        let (shutdown, mut cancelled) = watch::channel(false);

        let join = tokio::spawn(async move {
            info!("simulation loop armed, first tick in {:?}", config.warmup);

            tokio::select! {
                _ = tokio::time::sleep(config.warmup) => {}
                _ = cancelled.changed() => return,
            }

            loop {
                {
                    // Fresh read of the live store; the active chat id seen
                    // here is whatever it is now, not at spawn time.
                    let mut store = store.lock().await;
                    tick(&mut store, &mut rng);
                }

                let delay = Duration::from_millis(random_int(
                    &mut rng,
                    config.min_delay.as_millis() as u32,
                    config.max_delay.as_millis() as u32,
                ) as u64);
                debug!("next simulated event in {:?}", delay);

                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = cancelled.changed() => break,
                }
            }

            info!("simulation loop stopped");
        });

        SimulatorHandle { shutdown, join }
    }
}

impl SimulatorHandle {
    /// Cancels the pending tick and waits for the task to wind down.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.join.await;
    }
}
