//! Drives one welcome screen from the terminal.
//!
//! ```text
//! welcome-cli [--config roomgate.toml] [ROOM]
//! ```
//!
//! Without `--config` the service is taken from `ROOMGATE_SERVICE_URL`
//! and `ROOMGATE_SERVICE_TOKEN`. Without `ROOM` the suggested names are
//! shown for a while and the generated one is joined.

use std::time::Duration;

use clap::Parser;
use roomgate::prelude::*;
use tokio::time::timeout;
use tracing_subscriber::EnvFilter;

/// How long to watch suggestions before joining.
const BROWSE_FOR: Duration = Duration::from_secs(12);

const JOIN_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Stands in for the conference view: prints the room instead of opening it.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    async fn navigate(&self, room_url: &str) -> Result<(), NavigationError> {
        println!("-> entering {room_url}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "welcome-cli", about = "Pick a room and join it", long_about = None)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Room to join instead of the generated suggestion
    room: Option<String>,
}

fn load_config(path: Option<&str>) -> Result<RoomgateConfig, ConfigError> {
    match path {
        Some(path) => RoomgateConfig::load(path),
        None => {
            let mut config = RoomgateConfig::new(ResolverConfig::new("", ""));
            config.apply_env();
            config.validated()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let screen = WelcomeScreenBuilder::new(config).build(PrintNavigator)?;

    let mut snapshots = screen.subscribe();
    if let Some(room) = &args.room {
        screen.set_room(room.as_str()).await?;
    } else {
        // Print every name once it is fully revealed.
        let _ = timeout(BROWSE_FOR, async {
            let mut last = String::new();
            while snapshots.changed().await.is_ok() {
                let snap = snapshots.borrow_and_update().clone();
                let revealed = !snap.animating && !snap.room_placeholder.is_empty();
                if revealed && snap.room_placeholder != last {
                    println!("suggested: {}", snap.room_placeholder);
                    last = snap.room_placeholder;
                }
            }
        })
        .await;
    }

    match screen.join().await? {
        JoinTrigger::Started => {}
        other => {
            tracing::warn!(?other, "join did not start");
        }
    }

    let settled = timeout(
        JOIN_TIMEOUT,
        snapshots.wait_for(|s| !s.resolving && !s.joining),
    )
    .await
    .map(|r| r.map(|snap| snap.clone()));
    match settled {
        Ok(Ok(snap)) if !snap.error_msg.is_empty() => eprintln!("error: {}", snap.error_msg),
        Ok(Ok(snap)) => println!("joined {} ({})", snap.generated_room_name, snap.room),
        Ok(Err(_)) => eprintln!("screen closed before the join settled"),
        Err(_) => eprintln!("join did not settle within {JOIN_TIMEOUT:?}"),
    }

    screen.destroy().await?;
    Ok(())
}
