//! The terminal chat client.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use sitechat::Session;
use sitechat_transport::{RemoteChat, ServiceConfig};
use tokio::io::{self, AsyncBufReadExt};

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match env::var("SITECHAT_BASE_URL") {
        Ok(base_url) => ServiceConfig::with_base_url(base_url),
        Err(_) => ServiceConfig::default(),
    };
    let remote = RemoteChat::new(config);

    // The service scales to zero; give it a head start while the user
    // types.
    tokio::spawn({
        let remote = remote.clone();
        async move { remote.wake().await }
    });

    let mut session = Session::new(remote);

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    // One-shot mode: `sitechat "a question"` prints one reply and exits.
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        let question = args.join(" ");
        ask_and_print(&mut session, &question, &progress_style).await;
        return;
    }

    println!("Ask me anything. Press Ctrl-D to leave.");
    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        ask_and_print(&mut session, &line, &progress_style).await;
    }
}

async fn ask_and_print(
    session: &mut Session<RemoteChat>,
    input: &str,
    progress_style: &ProgressStyle,
) {
    if input.trim().is_empty() {
        return;
    }

    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(progress_style.clone());
    progress_bar.set_message("Thinking...");
    progress_bar.enable_steady_tick(Duration::from_millis(100));

    let reply = session.ask(input).await;

    // Finish the progress bar before printing anything else.
    progress_bar.finish_and_clear();

    if let Some(reply) = reply {
        println!(
            "{}🤖 {}",
            BAR_CHAR.bright_cyan(),
            reply.content.bright_white()
        );
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
