use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Why a line could not be read. `Closed` covers end-of-input and a ctrl-c
/// interrupt; either way the session winds down gracefully without
/// persisting partial state.
#[derive(Debug)]
pub enum InputError {
    Closed,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Closed => write!(f, "input closed"),
            InputError::Io(e) => write!(f, "input error: {e}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Source of interactive lines (menu choices, names, letter guesses).
/// Production reads stdin; tests feed a scripted queue.
pub trait LineSource {
    /// Blocks for the next line, trimmed of surrounding whitespace.
    fn read_line(&mut self) -> Result<String, InputError>;
}

/// One message from the stdin reader thread or the signal handler.
#[derive(Debug)]
pub enum StdinEvent {
    Line(String),
    Closed,
    Failed(io::Error),
}

/// Production line source. Stdin is read on a dedicated thread and handed
/// over a channel; a ctrl-c handler feeds `Closed` into the same channel,
/// so an interrupt unblocks the waiting prompt instead of killing the
/// process mid-session.
pub struct StdinSource {
    rx: Receiver<StdinEvent>,
    closed: bool,
}

impl StdinSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        let interrupt_tx = tx.clone();
        let _ = ctrlc::set_handler(move || {
            let _ = interrupt_tx.send(StdinEvent::Closed);
        });

        thread::spawn(move || read_stdin_lines(tx));

        Self::with_receiver(rx)
    }

    /// Builds a source over an arbitrary event channel; used by tests to
    /// simulate stdin traffic and interrupts.
    pub fn with_receiver(rx: Receiver<StdinEvent>) -> Self {
        Self { rx, closed: false }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

fn read_stdin_lines(tx: Sender<StdinEvent>) {
    let stdin = io::stdin();
    loop {
        let mut buf = String::new();
        match stdin.lock().read_line(&mut buf) {
            Ok(0) => {
                let _ = tx.send(StdinEvent::Closed);
                break;
            }
            Ok(_) => {
                if tx.send(StdinEvent::Line(buf.trim().to_string())).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = tx.send(StdinEvent::Failed(e));
                break;
            }
        }
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self) -> Result<String, InputError> {
        if self.closed {
            return Err(InputError::Closed);
        }
        match self.rx.recv() {
            Ok(StdinEvent::Line(line)) => Ok(line),
            Ok(StdinEvent::Failed(e)) => {
                self.closed = true;
                Err(InputError::Io(e))
            }
            Ok(StdinEvent::Closed) | Err(_) => {
                self.closed = true;
                Err(InputError::Closed)
            }
        }
    }
}

/// Canned line source for unit and integration tests.
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> Result<String, InputError> {
        match self.lines.pop_front() {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(InputError::Closed),
        }
    }
}
