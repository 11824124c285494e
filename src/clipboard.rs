// src/clipboard.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard utility found (tried pbcopy, clip, wl-copy, xclip, xsel)")]
    NoBackend,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Destination for copied text.
pub trait ClipboardSink {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Status event produced by a copy action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyNotice {
    Copied,
    Failed(String),
}

impl CopyNotice {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyNotice::Copied)
    }

    pub fn message(&self) -> String {
        match self {
            CopyNotice::Copied => "Password copied!".to_string(),
            CopyNotice::Failed(reason) => format!("Could not copy password: {}", reason),
        }
    }
}

/// Copy `text` and report the outcome as a notice instead of an error.
pub fn copy_to_clipboard<C: ClipboardSink + ?Sized>(sink: &mut C, text: &str) -> CopyNotice {
    match sink.write(text) {
        Ok(()) => CopyNotice::Copied,
        Err(e) => {
            log::warn!("Failed to copy to clipboard: {}", e);
            CopyNotice::Failed(e.to_string())
        }
    }
}

// Utilities we know how to feed through stdin, in order of preference
const BACKENDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("clip", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Clipboard backed by the platform's command line utility.
pub struct SystemClipboard {
    program: PathBuf,
    args: Vec<String>,
}

impl SystemClipboard {
    pub fn detect() -> Result<Self> {
        for (name, args) in BACKENDS {
            if let Some(program) = Self::find_program(name) {
                log::debug!("Using clipboard utility {}", program.display());
                return Ok(Self {
                    program,
                    args: args.iter().map(|a| a.to_string()).collect(),
                });
            }
        }

        Err(ClipboardError::NoBackend)
    }

    /// Use a specific utility instead of probing for one.
    pub fn with_program(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn find_program(name: &str) -> Option<PathBuf> {
        let locator = if cfg!(windows) { "where" } else { "which" };

        match Command::new(locator)
            .arg(name)
            .stderr(Stdio::null())
            .output() {
            Ok(output) if output.status.success() => {
                let path_str = String::from_utf8_lossy(&output.stdout);
                let path = PathBuf::from(path_str.lines().next()?.trim());
                if path.exists() {
                    return Some(path);
                }
            },
            _ => {}
        }

        None
    }
}

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        // xclip and wl-copy fork a process that keeps serving the selection;
        // it must not inherit any pipe we wait on.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed(format!(
                "{} exited with {}",
                self.program.display(),
                status
            )));
        }

        Ok(())
    }
}

/// In-process clipboard for tests and headless sessions.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
