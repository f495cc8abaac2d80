//! Baker Bot terminal chat.
//!
//! Drives the order dialogue from a rustyline REPL: numbers pick one of the
//! current buttons, slash commands map to widget actions and anything else
//! is typed text.

mod helper;
mod host;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bakerbot_application::{
    Delivery, HostPorts, NoCamera, OrderDialogueController, Outcome, TypingDelay, TypingScheduler,
};
use bakerbot_core::storage::KeyValueStore;
use bakerbot_infrastructure::config_service::{load_config, load_default_config};
use bakerbot_infrastructure::paths::BakerPaths;
use bakerbot_infrastructure::{JsonFileStore, MemoryStore, SessionPersistence};

use helper::{COMMANDS, CliHelper};
use host::PrintLink;

#[derive(Parser)]
#[command(name = "bakerbot")]
#[command(about = "Chat with the bakery assistant and place a custom order", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Conversation storage file
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Keep the conversation in memory only
    #[arg(long, conflicts_with = "storage")]
    ephemeral: bool,

    /// Discard any saved conversation before starting
    #[arg(long)]
    reset: bool,

    /// Show replies immediately
    #[arg(long)]
    no_typing: bool,
}

/// Logs go to a daily file so they never interleave with the chat.
fn init_logging() -> Option<WorkerGuard> {
    let dir = BakerPaths::logs_dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        dir,
        "bakerbot.log",
    ));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bakerbot=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    Some(guard)
}

fn open_store(cli: &Cli) -> Result<Arc<dyn KeyValueStore>> {
    if cli.ephemeral {
        return Ok(Arc::new(MemoryStore::new()));
    }
    let path = match &cli.storage {
        Some(path) => path.clone(),
        None => BakerPaths::storage_file()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(Arc::new(JsonFileStore::new(path)))
}

struct Repl {
    controller: OrderDialogueController,
    scheduler: TypingScheduler,
    bot_name: String,
}

impl Repl {
    /// Shows what one controller call produced, pacing new assistant messages.
    async fn show(&mut self, outcome: Outcome) {
        for notification in &outcome.notifications {
            render::notification(notification);
        }

        let view = self.controller.view();
        if outcome.transcript_rewritten {
            render::transcript(&view, &self.bot_name);
        } else if !outcome.assistant_messages.is_empty() {
            let token = self.scheduler.token();
            let ctrl_c = tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            });
            let bot_name = self.bot_name.clone();
            let delivery = self
                .scheduler
                .deliver(
                    &outcome.assistant_messages,
                    |active| render::typing(active, &bot_name),
                    |m| render::message(m, &bot_name),
                )
                .await;
            ctrl_c.abort();
            if let Delivery::Cancelled { remaining } = delivery {
                tracing::debug!(remaining, "Reveal interrupted");
                println!("{}", "Chat closed. Type /open to continue.".yellow());
                return;
            }
        }

        if !self.scheduler.is_closed() {
            render::controls(&view);
        }
    }

    /// Reopens the widget, greeting a fresh session and redrawing the rest.
    fn reopen(&mut self) {
        self.scheduler.reopen();
        self.controller.open();
        let view = self.controller.view();
        render::transcript(&view, &self.bot_name);
        render::controls(&view);
    }

    /// Returns `false` when the REPL should exit.
    async fn dispatch(&mut self, input: &str) -> bool {
        match input {
            "/quit" | "/exit" => return false,
            "/open" => {
                self.reopen();
                return true;
            }
            _ => {}
        }

        if self.scheduler.is_closed() {
            println!("{}", "Chat is closed. Type /open to continue.".yellow());
            return true;
        }

        let outcome = match input {
            "/close" => {
                self.scheduler.close();
                println!("{}", "Chat closed.".bright_black());
                return true;
            }
            "/view" => {
                render::transcript(&self.controller.view(), &self.bot_name);
                render::controls(&self.controller.view());
                return true;
            }
            "/back" => self.controller.go_back(),
            "/restart" => self.controller.restart(),
            "/help" => {
                for (cmd, about) in COMMANDS {
                    println!("  {} {}", cmd.bright_cyan(), about.bright_black());
                }
                return true;
            }
            _ => {
                let buttons = self.controller.view().active_quick_replies;
                match input.parse::<usize>() {
                    Ok(n) if (1..=buttons.len()).contains(&n) => {
                        let label = &buttons[n - 1];
                        println!("{}", format!("> {label}").green());
                        self.controller.select_quick_reply(label)
                    }
                    _ => self.controller.submit_text(input),
                }
            }
        };

        if outcome.is_noop() {
            tracing::debug!(input, "Nothing to do");
        }
        self.show(outcome).await;
        true
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default_config()?,
    };

    let persistence = SessionPersistence::new(open_store(&cli)?, config.storage.clone());
    if cli.reset {
        persistence.clear()?;
    }

    let delay = if cli.no_typing {
        TypingDelay::NONE
    } else {
        TypingDelay::from_config(&config.typing)
    };
    let bot_name = config.bot_name.clone();
    let ports = HostPorts {
        links: Arc::new(PrintLink),
        preview: Arc::new(NoCamera),
    };

    println!(
        "{}",
        format!("=== {} ===", config.business_name).bright_magenta().bold()
    );
    println!(
        "{}",
        "Pick a button by number, type a message, or /help for commands.".bright_black()
    );
    println!();

    let mut repl = Repl {
        controller: OrderDialogueController::new(config, persistence, ports),
        scheduler: TypingScheduler::new(delay),
        bot_name,
    };
    repl.reopen();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if !repl.dispatch(trimmed).await {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    println!("{}", "Goodbye! 🧁".bright_green());
    Ok(())
}
