//! Sound effects as an injected capability.
//!
//! The session decides *when* something should be heard; a [`SoundSink`]
//! decides *how*. Terminals have no synthesiser, so the closest real sound
//! is the bell.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Something worth a sound.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SoundEvent {
    /// A mark was placed.
    Click,
    /// The human (or either player in two-player mode) won.
    Win,
    /// The computer won.
    Lose,
    /// Draw.
    Tie,
    /// Board or scores were reset.
    Reset,
    /// Cursor moved onto a playable square.
    Hover,
}

impl SoundEvent {
    /// Tone frequencies in Hz; chords play their notes in order.
    pub fn tones(self) -> &'static [u32] {
        match self {
            SoundEvent::Click => &[800],
            SoundEvent::Win => &[523, 659, 784],
            SoundEvent::Lose => &[440, 369, 311],
            SoundEvent::Tie => &[440],
            SoundEvent::Reset => &[600],
            SoundEvent::Hover => &[1000],
        }
    }
}

/// Plays sound events.
pub trait SoundSink: Send + Sync {
    /// Renders `event`.
    fn play(&self, event: SoundEvent);
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&self, _event: SoundEvent) {}
}

/// Logs each event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&self, event: SoundEvent) {
        debug!(%event, tones = ?event.tones(), "Sound");
    }
}

/// Rings the terminal bell.
///
/// Hover is too frequent to ring for and is skipped.
#[derive(Debug)]
pub struct TerminalBell<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalBell<W> {
    /// Rings on `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TerminalBell<std::io::Stdout> {
    /// Rings on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> SoundSink for TerminalBell<W> {
    fn play(&self, event: SoundEvent) {
        if event == SoundEvent::Hover {
            return;
        }
        let Ok(mut out) = self.out.lock() else {
            warn!("Bell writer poisoned");
            return;
        };
        if let Err(e) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to ring bell");
        }
    }
}

/// Which [`SoundSink`] the application builds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SoundBackend {
    /// [`Silent`].
    Silent,
    /// [`LogSink`].
    Log,
    /// [`TerminalBell`] on stdout.
    #[default]
    Bell,
}

impl SoundBackend {
    /// Builds the sink.
    pub fn sink(self) -> Box<dyn SoundSink> {
        match self {
            SoundBackend::Silent => Box::new(Silent),
            SoundBackend::Log => Box::new(LogSink),
            SoundBackend::Bell => Box::new(TerminalBell::stdout()),
        }
    }
}
