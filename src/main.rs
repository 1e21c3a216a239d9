use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use recase::clipboard::{self, ClipboardSink};
use recase::config::AppConfig;
use recase::store::{BankStore, JsonFileStore, MemoryStore};
use recase::{display, repl, transform, word_bank, CaseStyle, LexicalTables, Session, WordBank};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version)]
#[command(about = "Case conversion with smart title casing, undo history and a word bank", long_about = None)]
// disable the default flags so they can be listed under "Flags" below
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the word bank (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Keep the word bank in memory only, nothing is read or written
    #[arg(long, global = true, default_value_t = false, help_heading = "Flags")]
    ephemeral: bool,

    /// Never copy results to the clipboard
    #[arg(long, global = true, default_value_t = false, help_heading = "Flags")]
    no_copy: bool,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = "Flags")]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version, help_heading = "Flags")]
    version: Option<bool>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert TEXT (or stdin) to a case style and print it
    To {
        #[arg(value_enum)]
        style: CaseStyle,
        text: Vec<String>,
    },
    /// Inspect or change the word bank
    Bank {
        #[command(subcommand)]
        action: BankAction,
    },
    /// Interactive editing session reading commands from stdin
    Session {
        /// Initial buffer contents
        text: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum BankAction {
    /// Show the saved words
    List {
        /// Print the stored entries as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    Add { token: String },
    Remove { token: String },
    Clear,
    /// Capture selections into the bank
    On,
    /// Stop capturing selections
    Off,
    /// Append TOKEN to TEXT (or stdin) unless it is already one of its words
    Insert { token: String, text: Vec<String> },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let app_config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let tables = LexicalTables::from_config(&app_config.lexicon)
        .context("could not build the lexical tables")?;

    match cli.command {
        Command::To { style, text } => {
            let input = text_or_stdin(text)?;
            let caser = transform::TitleCaser::new(&tables).with_singularization(app_config.singularize);
            let output = transform::apply(style, &input, &caser);
            println!("{}", output);
            if app_config.copy_to_clipboard && !cli.no_copy {
                copy_best_effort(&*clipboard::system(), &output);
            }
        }
        Command::Bank { action } => {
            let store = open_store(cli.data_dir.clone(), cli.ephemeral, &app_config);
            run_bank(action, store)?;
        }
        Command::Session { text } => {
            let store = open_store(cli.data_dir.clone(), cli.ephemeral, &app_config);
            let mut session = Session::new(tables, store)
                .with_history_capacity(app_config.history_capacity)
                .with_singularization(app_config.singularize)
                .with_text(text.join(" "));
            if app_config.copy_to_clipboard && !cli.no_copy {
                session = session.with_clipboard(clipboard::system());
            }

            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("recase session, :help for commands, :quit to leave");
            }
            repl::run(&mut session, stdin.lock(), io::stdout().lock(), display::terminal_width())?;
        }
    }

    Ok(())
}

fn run_bank(action: BankAction, store: Box<dyn BankStore>) -> Result<()> {
    let mut bank = WordBank::load(&*store);

    let changed = match action {
        BankAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&bank.to_persisted())?);
            } else {
                print!("{}", display::format_bank(&bank, display::terminal_width()));
            }
            false
        }
        BankAction::Add { token } => bank.add(&token),
        BankAction::Remove { token } => bank.remove(&token),
        BankAction::Clear => bank.clear(),
        BankAction::On => bank.set_active(true),
        BankAction::Off => bank.set_active(false),
        BankAction::Insert { token, text } => {
            let buffer = text_or_stdin(text)?;
            println!("{}", word_bank::insert_into(&buffer, &token));
            false
        }
    };

    if changed {
        if let Err(err) = store.save(&bank.to_persisted()) {
            log::warn!("could not save word bank: {}", err);
        }
    }
    Ok(())
}

fn open_store(data_dir: Option<PathBuf>, ephemeral: bool, config: &AppConfig) -> Box<dyn BankStore> {
    if ephemeral {
        return Box::new(MemoryStore::new());
    }
    let dir = data_dir.or_else(|| config.data_dir.clone());
    match dir.map(|dir| JsonFileStore::new(dir)).or_else(JsonFileStore::default_location) {
        Some(store) => {
            log::debug!("word bank stored in {}", store.dir().display());
            Box::new(store)
        }
        None => {
            log::warn!("no data directory available, word bank will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn text_or_stdin(words: Vec<String>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut raw = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut raw)
        .context("could not read text from stdin")?;
    // drop the newline the shell or pipe appended
    if raw.ends_with('\n') {
        raw.pop();
        if raw.ends_with('\r') {
            raw.pop();
        }
    }
    Ok(raw)
}

fn copy_best_effort(sink: &dyn ClipboardSink, text: &str) {
    if let Err(err) = sink.set_contents(text) {
        log::debug!("clipboard copy via {} failed: {}", sink.name(), err);
    }
}
