//! Terminal front end for the task list.
//!
//! Reads one command per line from stdin and redraws the screen every time
//! the store publishes a change. Type `help` for the command list.

use std::io::Write;
use tasks::input::{self, HELP};
use tasks::{parse, render, AppConfig, Strings, TaskEnvironment, TaskError, TaskListStore, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        locale = %config.locale,
        notice = ?config.notice_duration,
        "Starting task list"
    );

    let strings = Strings::new(config.locale);
    let store = TaskListStore::new(TaskEnvironment::new(config.notice_duration));
    let mut changes = store.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    draw(&store, &strings, config.ansi).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }

                match parse(&line) {
                    Ok(UiEvent::Quit) => break,
                    Ok(UiEvent::Help) => println!("{HELP}"),
                    Ok(event) => {
                        if let Err(error) = input::dispatch(&store, event).await {
                            // User-facing rejections show up as the notice
                            if !error.task_error().is_some_and(TaskError::is_user_facing) {
                                eprintln!("{error}");
                            }
                        }
                    }
                    Err(error) => eprintln!("{error}"),
                }
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&store, &strings, config.ansi).await?;
            }
        }
    }

    if let Err(error) = store.shutdown(config.shutdown_timeout()).await {
        tracing::warn!(%error, "Shutdown did not finish cleanly");
    }

    tracing::info!("Task list closed");
    Ok(())
}

async fn draw(store: &TaskListStore, strings: &Strings, ansi: bool) -> std::io::Result<()> {
    let screen = render(&store.snapshot().await, strings).with_ansi(ansi);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout)?;
    write!(stdout, "{screen}")?;
    stdout.flush()
}
