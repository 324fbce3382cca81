use std::{io, time::Duration};

use clap::{Parser, Subcommand};
use missing_persons::{
    api::HttpRecordApi,
    clients::terminal::{ConfirmMode, OutputFormat, TerminalView},
    consts::consts::{
        RecordId, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MARK_FOUND_PATH, RECORDS_PATH,
    },
    controller::RecordController,
    options::ClientOptions,
    view::ViewEvent,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// 🔎 Missing persons client, lists, searches and marks records as found against the records API
#[derive(Parser, Debug)]
struct Cli {
    /// Base URL of the records API
    #[clap(short, long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Request timeout in seconds
    #[clap(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Path of the records listing, relative to the base URL
    #[clap(long, default_value = RECORDS_PATH)]
    records_path: String,

    /// Path prefix of the mark-found action, the record id is appended
    #[clap(long, default_value = MARK_FOUND_PATH)]
    mark_found_path: String,

    /// Print the results container markup instead of text cards
    #[clap(long)]
    html: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the records and print them, optionally filtered
    List {
        /// Case-insensitive text matched against name, city, state and phone
        #[clap(short, long)]
        query: Option<String>,
    },
    /// Mark one record as found, then print the reloaded list
    MarkFound {
        id: String,

        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
    },
    /// Load once, then read queries from stdin, one per line.
    ///
    /// `:found <id>` marks a record as found, `:reload` refetches and `:quit` exits.
    Browse,
}

enum BrowseInput {
    Event(ViewEvent),
    Quit,
}

fn parse_browse_line(line: &str) -> BrowseInput {
    let trimmed = line.trim();

    if trimmed == ":quit" {
        return BrowseInput::Quit;
    }

    if trimmed == ":reload" {
        return BrowseInput::Event(ViewEvent::Reload);
    }

    if let Some(id) = trimmed.strip_prefix(":found ") {
        return BrowseInput::Event(ViewEvent::MarkFound(RecordId::from(id.trim())));
    }

    // Every other line is the new contents of the search field
    BrowseInput::Event(ViewEvent::QueryChanged(line.to_string()))
}

fn client_options(args: &Cli) -> ClientOptions {
    ClientOptions::default()
        .set_base_url(args.url.as_str())
        .set_timeout(Duration::from_secs(args.timeout))
        .set_records_path(args.records_path.as_str())
        .set_mark_found_path(args.mark_found_path.as_str())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = client_options(&args);

    log::info!("Using records API at {}", options.base_url);

    let api = HttpRecordApi::new(options)?;

    let format = if args.html {
        OutputFormat::Html
    } else {
        OutputFormat::Text
    };

    match args.command {
        Command::List { query } => {
            let view = TerminalView::new(io::stdout(), format, ConfirmMode::Prompt)
                .without_search_field();
            let mut controller = RecordController::new(api, view);

            controller.load_records().await?;

            if let Some(query) = query {
                controller.filter_records(&query);
            }
        }
        Command::MarkFound { id, yes } => {
            let confirm_mode = if yes {
                ConfirmMode::AssumeYes
            } else {
                ConfirmMode::Prompt
            };
            let view =
                TerminalView::new(io::stdout(), format, confirm_mode).without_search_field();
            let mut controller = RecordController::new(api, view);

            controller.mark_as_found(&RecordId(id)).await?;
        }
        Command::Browse => {
            let view = TerminalView::new(io::stdout(), format, ConfirmMode::Prompt);
            let mut controller = RecordController::new(api, view);

            // A failed first load is already on screen, `:reload` can retry it
            let _ = controller.load_records().await;

            let mut lines = BufReader::new(tokio::io::stdin()).lines();

            while let Some(line) = lines.next_line().await? {
                match parse_browse_line(&line) {
                    BrowseInput::Quit => break,
                    BrowseInput::Event(event) => {
                        // Failures were shown to the user, the session carries on
                        if let Err(err) = controller.handle(event).await {
                            log::debug!("Event failed: {}", err);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
