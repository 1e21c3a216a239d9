//! Best-effort clipboard output.
//!
//! Copying is a side effect of a finished transform. Nothing waits on it and
//! a failure never reaches the buffer or the user.

use std::borrow::Cow;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("clipboard provider command failed")]
    CommandFailed,
    #[error("failed to write to clipboard provider's stdin")]
    StdinWriteFailed,
}

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardSink {
    fn name(&self) -> Cow<'_, str>;
    fn set_contents(&self, content: &str) -> ClipboardResult<()>;
}

#[derive(Debug, Default)]
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn name(&self) -> Cow<'_, str> {
        "none".into()
    }

    fn set_contents(&self, _content: &str) -> ClipboardResult<()> {
        Ok(())
    }
}

/// Pipes text into an external copy command such as `wl-copy` or `pbcopy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: Cow<'static, str>,
    args: Vec<Cow<'static, str>>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<Cow<'static, str>>, args: &[&'static str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| Cow::Borrowed(*a)).collect(),
        }
    }

    /// Picks the first copy command that looks usable on this machine.
    pub fn detect() -> Option<Self> {
        Self::detect_with(|var| std::env::var_os(var).is_some(), binary_exists)
    }

    fn detect_with(has_env: impl Fn(&str) -> bool, has_binary: impl Fn(&str) -> bool) -> Option<Self> {
        let candidates: &[(&'static str, &[&'static str], Option<&str>)] = &[
            ("wl-copy", &["--type", "text/plain"], Some("WAYLAND_DISPLAY")),
            ("xclip", &["-i", "-selection", "clipboard"], Some("DISPLAY")),
            ("xsel", &["-i", "-b"], Some("DISPLAY")),
            ("pbcopy", &[], None),
            ("termux-clipboard-set", &[], None),
            ("win32yank.exe", &["-i", "--crlf"], None),
            ("clip.exe", &[], None),
        ];

        candidates
            .iter()
            .find(|(program, _, env)| {
                env.map_or(true, |var| has_env(var)) && has_binary(program)
            })
            .map(|(program, args, _)| Self::new(*program, args))
    }
}

impl ClipboardSink for CommandClipboard {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.program)
    }

    fn set_contents(&self, content: &str) -> ClipboardResult<()> {
        let mut child = Command::new(self.program.as_ref())
            .args(self.args.iter().map(|a| a.as_ref()))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let mut stdin = child.stdin.take().ok_or(ClipboardError::StdinWriteFailed)?;
        stdin
            .write_all(content.as_bytes())
            .map_err(|_| ClipboardError::StdinWriteFailed)?;
        drop(stdin);

        if child.wait()?.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed)
        }
    }
}

fn binary_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

/// The system clipboard when one is found, otherwise a sink that drops everything.
pub fn system() -> Box<dyn ClipboardSink> {
    match CommandClipboard::detect() {
        Some(provider) => {
            log::debug!("using clipboard provider {}", provider.name());
            Box::new(provider)
        }
        None => {
            log::debug!("no clipboard provider found");
            Box::new(NoClipboard)
        }
    }
}
