use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::sync::Mutex;

use babble::gen::{build_population, PopulationConfig};
use babble::sim::{Simulator, SimulatorConfig};
use babble::store::{ChatStore, StoreEvent};
use babble::{utils, ChatSession, User};

/// Command line arguments for the demo runner.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Babble: a fake messaging backend that keeps itself busy.",
    long_about = "Generates a synthetic population of contacts and conversations, \
    then simulates live activity (incoming messages, stories, profile edits) \
    until interrupted or until the tick budget runs out."
)]
struct Args {
    /// RNG seed; omit for a different dataset every run
    #[arg(long)]
    seed: Option<u64>,

    /// Total person contacts to generate
    #[arg(long, default_value_t = 900)]
    contacts: usize,

    /// Total group pseudo-users to generate
    #[arg(long, default_value_t = 20)]
    groups: usize,

    /// Total archived sessions, groups included
    #[arg(long, default_value_t = 90)]
    archived: usize,

    /// Active personal sessions
    #[arg(long, default_value_t = 40)]
    active: usize,

    /// Stop after this many simulated events (default: run until Ctrl-C)
    #[arg(long)]
    ticks: Option<u64>,

    /// Delay before the first simulated event, in milliseconds
    #[arg(long, default_value_t = 5_000)]
    warmup_ms: u64,

    /// Lower bound on the delay between events, in milliseconds
    #[arg(long, default_value_t = 30_000)]
    min_delay_ms: u64,

    /// Upper bound on the delay between events, in milliseconds
    #[arg(long, default_value_t = 120_000)]
    max_delay_ms: u64,

    /// Print the final dataset as JSON on exit
    #[arg(long)]
    dump: bool,

    /// Write logs to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,
}

#[derive(Serialize)]
struct Dump<'a> {
    chats: &'a [ChatSession],
    contacts: Vec<&'a User>,
}

fn render_chat_list(store: &ChatStore) {
    println!("--- chat list ---");
    for chat in store.chats().iter().filter(|c| !c.archived).take(10) {
        let name = store
            .user(&chat.user_id)
            .map(|u| u.name.as_str())
            .unwrap_or("(unknown)");
        let pin = if chat.pinned { "📌 " } else { "   " };
        let unread = if chat.unread_count > 0 {
            format!(" ({})", chat.unread_count)
        } else {
            String::new()
        };
        println!(
            "{}{:<24} {:>8}  {}{}",
            pin,
            name,
            chat.last_message_time,
            truncate(&chat.last_message, 48),
            unread
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    utils::setup_logging(args.log_file.as_deref(), LevelFilter::Info)?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Seeded run: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let config = PopulationConfig {
        total_contacts: args.contacts,
        total_groups: args.groups,
        archived_chats: args.archived,
        active_chats: args.active,
        ..PopulationConfig::default()
    };
    let population = build_population(&mut rng, &config)?;

    let mut store = ChatStore::new(population);
    let mut events = store.subscribe();
    render_chat_list(&store);

    let store = Arc::new(Mutex::new(store));
    let sim_config = SimulatorConfig {
        warmup: Duration::from_millis(args.warmup_ms),
        min_delay: Duration::from_millis(args.min_delay_ms),
        max_delay: Duration::from_millis(args.max_delay_ms),
    };
    let simulator = Simulator::spawn(store.clone(), rng, sim_config);

    let mut seen: u64 = 0;
    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Some(StoreEvent::ChatListChanged) => {
                        render_chat_list(&*store.lock().await);
                    }
                    Some(StoreEvent::ContactChanged { user_id }) => {
                        let store = store.lock().await;
                        if let Some(user) = store.user(&user_id) {
                            println!(
                                "contact update: {} ({} stories)",
                                user.name,
                                user.status_updates.len()
                            );
                        }
                    }
                    Some(StoreEvent::PinLimitReached { chat_id }) => {
                        // Transient signal; a real view layer would toast it.
                        println!("pin limit reached for {}", chat_id);
                    }
                    None => break,
                }

                seen += 1;
                if let Some(budget) = args.ticks {
                    if seen >= budget {
                        info!("Tick budget of {} reached", budget);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                break;
            }
        }
    }

    simulator.shutdown().await;

    if args.dump {
        let store = store.lock().await;
        let dump = Dump {
            chats: store.chats(),
            contacts: store.contacts().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    println!("Simulation ended.");
    Ok(())
}
