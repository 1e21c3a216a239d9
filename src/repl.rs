//! Line-oriented front end for an interactive session.
//!
//! Plain lines replace the buffer. Lines starting with ':' are commands;
//! start a line with "::" to type text that begins with a colon.

use crate::display;
use crate::models::CaseStyle;
use crate::session::Session;
use anyhow::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(String),
    Apply(CaseStyle),
    Undo,
    Redo,
    Clear,
    Show,
    Select(String),
    BankList,
    BankAdd(String),
    BankRemove(String),
    BankClear,
    BankActive(bool),
    Insert(String),
    Help,
    Quit,
    Unknown(String),
}

const HELP: &str = "\
text            replace the buffer
:upper :lower :sentence :capitalize :inverse :title
:undo :redo :clear :show
:select <text>  capture a selection into the word bank
:bank [add <w> | remove <w> | clear | on | off]
:insert <w>     append a bank word to the buffer
:quit";

pub fn parse(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(text) = line.strip_prefix("::") {
        return Command::Edit(format!(":{}", text));
    }
    let Some(command) = line.strip_prefix(':') else {
        return Command::Edit(line.to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    if let Ok(style) = name.parse::<CaseStyle>() {
        return Command::Apply(style);
    }

    match name {
        "undo" | "u" => Command::Undo,
        "redo" | "r" => Command::Redo,
        "clear" => Command::Clear,
        "show" | "s" => Command::Show,
        "select" => Command::Select(arg.to_string()),
        "insert" | "i" => Command::Insert(arg.to_string()),
        "bank" | "b" => parse_bank(arg),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(command.to_string()),
    }
}

fn parse_bank(arg: &str) -> Command {
    let (action, word) = match arg.split_once(char::is_whitespace) {
        Some((action, word)) => (action, word.trim()),
        None => (arg, ""),
    };
    match action {
        "" | "list" => Command::BankList,
        "add" => Command::BankAdd(word.to_string()),
        "remove" | "rm" => Command::BankRemove(word.to_string()),
        "clear" => Command::BankClear,
        "on" => Command::BankActive(true),
        "off" => Command::BankActive(false),
        _ => Command::Unknown(format!("bank {}", arg)),
    }
}

/// Reads commands until end of input or `:quit`, echoing the buffer after
/// every change.
pub fn run(session: &mut Session, input: impl BufRead, mut out: impl Write, width: usize) -> Result<()> {
    for line in input.lines() {
        let command = parse(&line?);
        log::trace!("session command: {:?}", command);

        match command {
            Command::Quit => break,
            Command::Edit(text) => session.edit(text),
            Command::Apply(style) => {
                session.apply(style);
            }
            Command::Undo => {
                if !session.history().can_undo() {
                    writeln!(out, "! nothing to undo")?;
                    continue;
                }
                session.undo();
            }
            Command::Redo => {
                if !session.history().can_redo() {
                    writeln!(out, "! nothing to redo")?;
                    continue;
                }
                session.redo();
            }
            Command::Clear => session.clear(),
            Command::Show => {}
            Command::Select(text) => {
                let captured = session.select(&text);
                report(&mut out, captured, "captured", "not captured")?;
                continue;
            }
            Command::Insert(word) => {
                if !session.bank().contains(&word) {
                    writeln!(out, "! {:?} is not in the word bank", word)?;
                    continue;
                }
                session.insert_from_bank(&word);
            }
            Command::BankList => {
                write!(out, "{}", display::format_bank(session.bank(), width))?;
                continue;
            }
            Command::BankAdd(word) => {
                let added = session.bank_add(&word);
                report(&mut out, added, "added", "unchanged")?;
                continue;
            }
            Command::BankRemove(word) => {
                let removed = session.bank_remove(&word);
                report(&mut out, removed, "removed", "unchanged")?;
                continue;
            }
            Command::BankClear => {
                session.bank_clear();
                writeln!(out, "~ bank cleared")?;
                continue;
            }
            Command::BankActive(active) => {
                session.set_bank_active(active);
                writeln!(out, "~ capture {}", if active { "on" } else { "off" })?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Unknown(name) => {
                writeln!(out, "! unknown command :{} (try :help)", name)?;
                continue;
            }
        }

        writeln!(out, "{}", session.buffer())?;
    }

    out.flush()?;
    Ok(())
}

fn report(out: &mut impl Write, changed: bool, yes: &str, no: &str) -> Result<()> {
    writeln!(out, "~ {}", if changed { yes } else { no })?;
    Ok(())
}
