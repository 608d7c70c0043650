//! Chat room client entry point
//!
//! Run with:
//! ```bash
//! cargo run -p room-client
//! ```
//!
//! Configuration is loaded from environment variables (see
//! `room-common`). Type `/quit` or press Ctrl-C to leave the room.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::error;

use room_client::RoomManager;
use room_common::{try_init_tracing, AppConfig, AppResult, DirectoryBackend, DirectoryConfig};
use room_core::{DirectoryError, DisplayName, PresenceDirectory};
use room_directory::{create_mysql_pool, create_pg_pool, MySqlPresenceDirectory, PgPresenceDirectory, PoolConfig};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    println!("Welcome to the public chat!\n");

    // Validation failure exits before any collaborator is contacted
    let name = match prompt_display_name() {
        Ok(name) => name,
        Err(e) => {
            println!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(config, name).await {
        error!(error = %e, "Session failed");
        std::process::exit(1);
    }
}

/// Prompt for and validate the display name
fn prompt_display_name() -> anyhow::Result<DisplayName> {
    print!("Please, enter your name: ");
    std::io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read name")?;

    Ok(DisplayName::new(line.trim_end_matches(['\r', '\n']))?)
}

async fn run(config: AppConfig, name: DisplayName) -> AppResult<()> {
    let directory = connect_directory(&config.directory).await?;

    let manager = RoomManager::login(name, directory).await?;
    println!("[{}] has been logged in", manager.identity().name());

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let handle = manager.start(&config, input_rx).await?;
    let shutdown = manager.shutdown_signal();

    tokio::spawn(feed_input(input_tx));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => println!("Exiting..."),
        () = shutdown.triggered() => {}
    }

    manager.shutdown().await;
    handle.join().await;

    Ok(())
}

/// Build the configured directory backend
async fn connect_directory(
    config: &DirectoryConfig,
) -> Result<Arc<dyn PresenceDirectory>, DirectoryError> {
    let pool_config = PoolConfig::new(config.url(), config.max_connections);

    match config.backend {
        DirectoryBackend::Postgres => {
            let pool = create_pg_pool(&pool_config)
                .await
                .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
            Ok(Arc::new(PgPresenceDirectory::new(pool)))
        }
        DirectoryBackend::Mysql => {
            let pool = create_mysql_pool(&pool_config)
                .await
                .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;
            Ok(Arc::new(MySqlPresenceDirectory::new(pool)))
        }
    }
}

/// Forward stdin lines into the outbound relay until EOF
async fn feed_input(tx: mpsc::UnboundedSender<String>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if tx.send(line).is_err() {
            break;
        }
    }
}
