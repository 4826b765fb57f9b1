//! Event log written to a terminal.

use std::io::{stderr, Error as IoError, Stderr, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    Info(String),
    Warn(String),
    Done(String),
}

/// Receives events from a card. Logging never fails from the card's side.
pub trait LogSink {
    fn log(&mut self, event: LogEvent);
}

/// Drops every event.
#[derive(Debug, Default)]
pub struct NoLog;

impl LogSink for NoLog {
    fn log(&mut self, _event: LogEvent) {}
}

#[derive(Debug)]
pub struct TermLog<T: Write> {
    tty: T,
    color: bool,
}

impl TermLog<Stderr> {
    pub fn new_stderr() -> Self {
        Self::new(stderr(), true)
    }
}

impl<T: Write> TermLog<T> {
    pub fn new(tty: T, color: bool) -> Self {
        Self { tty, color }
    }

    pub fn into_inner(self) -> T {
        self.tty
    }

    fn write_event(&mut self, event: LogEvent) -> Result<(), IoError> {
        match event {
            LogEvent::Info(msg) => self.log_message("INFO", msg, termion::color::LightBlack),
            LogEvent::Warn(msg) => self.log_message("WARN", msg, termion::color::LightYellow),
            LogEvent::Done(msg) => self.log_message("DONE", msg, termion::color::LightGreen),
        }
    }

    fn log_message(
        &mut self,
        label: &'static str,
        msg: String,
        color: impl termion::color::Color,
    ) -> Result<(), IoError> {
        let msg = msg.replace('\t', "    ");
        if self.color {
            let color = termion::color::Fg(color);
            let reset = termion::style::Reset;
            writeln!(self.tty, "{color}[{label}] {reset}{msg}")?;
        } else {
            writeln!(self.tty, "[{label}] {msg}")?;
        }
        self.tty.flush()
    }
}

impl<T: Write> LogSink for TermLog<T> {
    fn log(&mut self, event: LogEvent) {
        let _ = self.write_event(event);
    }
}
