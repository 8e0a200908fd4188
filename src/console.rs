//! Console I/O
//!
//! Line-oriented input and text output for the shell. Three consoles share the
//! `Console` trait:
//!
//! - `EditorConsole` drives an interactive terminal through rustyline, with line
//!   editing and in-memory history.
//! - `StreamConsole` reads raw bytes from any async reader (piped stdin, a test
//!   buffer) and decodes each line lossily.
//! - `ScriptedConsole` replays queued input and records everything written.

use std::collections::VecDeque;
use std::io;
use std::sync::mpsc as std_mpsc;
use std::thread;

use async_trait::async_trait;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Reasons a line could not be read.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("interrupted")]
    Interrupted,

    #[error("end of input")]
    Eof,

    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<ReadlineError> for ConsoleError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Interrupted => ConsoleError::Interrupted,
            ReadlineError::Eof => ConsoleError::Eof,
            ReadlineError::Io(e) => ConsoleError::Io(e),
            other => ConsoleError::Io(io::Error::other(other.to_string())),
        }
    }
}

/// A line-oriented terminal.
#[async_trait]
pub trait Console: Send {
    /// Show `prompt`, then read one line without its line terminator.
    async fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Write `text` and make it visible immediately.
    async fn write(&mut self, text: &str) -> Result<(), ConsoleError>;
}

/// Ctrl+C presses, queued from the moment the listener exists.
///
/// A press that lands while no line is being read is kept and reported by the
/// next read.
pub struct Interrupts {
    rx: mpsc::UnboundedReceiver<()>,
}

impl Interrupts {
    /// Watch for Ctrl+C for the rest of the process. Must be called inside a
    /// tokio runtime.
    pub fn listen() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            loop {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!(error = %e, "cannot listen for Ctrl+C");
                    break;
                }
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        Self { rx }
    }

    /// Interrupts fed from a channel instead of the process signal.
    pub fn from_receiver(rx: mpsc::UnboundedReceiver<()>) -> Self {
        Self { rx }
    }

    /// Drain presses that are already queued. Returns true if there were any.
    fn take_pending(&mut self) -> bool {
        let mut any = false;
        while self.rx.try_recv().is_ok() {
            any = true;
        }
        any
    }

    /// Wait for the next press. Never resolves once the listener is gone.
    async fn next(&mut self) {
        if self.rx.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

/// Decode one raw line, dropping a trailing `\n` or `\r\n`.
///
/// Bytes that are not valid UTF-8 become U+FFFD.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Read up to the next `\n` into `pending` and decode it.
///
/// `read_until` appends whatever it already consumed to `pending` before a
/// cancellation, so a dropped call loses nothing as long as the buffer is kept.
async fn read_raw_line<R>(reader: &mut R, pending: &mut Vec<u8>) -> Result<String, ConsoleError>
where
    R: AsyncBufRead + Unpin + Send,
{
    reader.read_until(b'\n', pending).await?;
    if pending.is_empty() {
        return Err(ConsoleError::Eof);
    }
    let line = decode_line(pending);
    pending.clear();
    Ok(line)
}

/// Console over an async byte reader and writer.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
    pending: Vec<u8>,
    interrupts: Option<Interrupts>,
}

/// `StreamConsole` over the process's standard streams.
pub type StdConsole = StreamConsole<BufReader<Stdin>, Stdout>;

impl StdConsole {
    /// Standard streams, with Ctrl+C reported as `ConsoleError::Interrupted`.
    pub fn stdio() -> Self {
        StreamConsole::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .with_interrupts(Interrupts::listen())
    }
}

impl<R, W> StreamConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: Vec::new(),
            interrupts: None,
        }
    }

    pub fn with_interrupts(mut self, interrupts: Interrupts) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    #[cfg(test)]
    pub(crate) fn writer(&self) -> &W {
        &self.writer
    }
}

#[async_trait]
impl<R, W> Console for StreamConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.write(prompt).await?;
        let Some(interrupts) = self.interrupts.as_mut() else {
            return read_raw_line(&mut self.reader, &mut self.pending).await;
        };
        tokio::select! {
            biased;
            _ = interrupts.next() => Err(ConsoleError::Interrupted),
            line = read_raw_line(&mut self.reader, &mut self.pending) => line,
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

type ReadOutcome = Result<String, ConsoleError>;

fn editor_gone() -> ConsoleError {
    ConsoleError::Io(io::Error::other("line editor thread exited"))
}

/// Interactive console backed by rustyline.
///
/// rustyline blocks, so the editor lives on its own thread and serves one
/// prompt at a time. Ctrl+C typed at the prompt comes back from the editor as
/// an interrupt; presses that arrive while no prompt is open are picked up by
/// the `Interrupts` listener and reported by the next read.
pub struct EditorConsole {
    prompts: std_mpsc::Sender<String>,
    lines: mpsc::UnboundedReceiver<ReadOutcome>,
    stdout: Stdout,
    interrupts: Interrupts,
}

impl EditorConsole {
    pub fn spawn(interrupts: Interrupts) -> Result<Self, ConsoleError> {
        let (prompt_tx, prompt_rx) = std_mpsc::channel::<String>();
        let (line_tx, line_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = std_mpsc::sync_channel::<Result<(), ConsoleError>>(1);

        thread::Builder::new()
            .name("line-editor".to_string())
            .spawn(move || {
                let mut rl: Editor<(), DefaultHistory> = match Editor::new() {
                    Ok(rl) => rl,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.into()));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));

                for prompt in prompt_rx {
                    let outcome = rl.readline(&prompt);
                    if let Ok(line) = &outcome {
                        if !line.trim().is_empty() {
                            if let Err(e) = rl.add_history_entry(line.as_str()) {
                                warn!("Failed to add history entry: {}", e);
                            }
                        }
                    }
                    if line_tx.send(outcome.map_err(ConsoleError::from)).is_err() {
                        break;
                    }
                }
                debug!("line editor thread finished");
            })?;

        ready_rx.recv().map_err(|_| editor_gone())??;
        Ok(Self {
            prompts: prompt_tx,
            lines: line_rx,
            stdout: tokio::io::stdout(),
            interrupts,
        })
    }
}

#[async_trait]
impl Console for EditorConsole {
    async fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        if self.interrupts.take_pending() {
            self.write(prompt).await?;
            return Err(ConsoleError::Interrupted);
        }
        self.prompts.send(prompt.to_string()).map_err(|_| editor_gone())?;
        self.lines.recv().await.unwrap_or_else(|| Err(editor_gone()))
    }

    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.flush().await?;
        Ok(())
    }
}

/// One queued input event for a `ScriptedConsole`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Line(String),
    Interrupt,
}

/// Console that replays queued input and captures output.
///
/// Prompts are recorded as output. Reading past the end of the queue reports
/// end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<ScriptedInput>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(|l| ScriptedInput::Line(l.into())).collect(),
            output: String::new(),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.input.push_back(ScriptedInput::Line(line.into()));
    }

    pub fn push_interrupt(&mut self) {
        self.input.push_back(ScriptedInput::Interrupt);
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drain and return everything written so far.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Number of queued events not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.push_str(prompt);
        match self.input.pop_front() {
            Some(ScriptedInput::Line(line)) => Ok(line),
            Some(ScriptedInput::Interrupt) => Err(ConsoleError::Interrupted),
            None => Err(ConsoleError::Eof),
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.push_str(text);
        Ok(())
    }
}
