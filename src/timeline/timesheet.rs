use crate::{
    foundation::error::{CinegridError, CinegridResult},
    speech::provider::{SpeechSynthesizer, VoiceSpec},
};

/// One line of narration waiting to be synthesized.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationLine {
    /// Scene id this line narrates.
    pub id: u32,
    /// The text to speak.
    pub text: String,
    /// Voice parameters forwarded to the provider.
    #[serde(default)]
    pub voice: VoiceSpec,
}

impl NarrationLine {
    /// Line with default voice parameters.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            voice: VoiceSpec::default(),
        }
    }
}

/// One narration clip placed on the running timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    /// Scene id, copied from the input line.
    pub id: u32,
    /// Start offset in seconds; equals the previous entry's `end_sec`.
    pub start_sec: f64,
    /// End offset in seconds, `start_sec + duration_sec`.
    pub end_sec: f64,
    /// Clip length in seconds (measured, or estimated on fallback).
    pub duration_sec: f64,
    /// Audio location; empty when synthesis failed and the duration is an
    /// estimate.
    pub audio_url: String,
    /// The narrated text, kept for captioning.
    pub text: String,
}

impl TimesheetEntry {
    /// Whether this entry fell back to an estimated duration because
    /// synthesis failed. Orchestrators surface these to the user.
    pub fn is_degraded(&self) -> bool {
        self.audio_url.is_empty()
    }
}

/// Tuning for the estimated-duration fallback.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimesheetConfig {
    /// Speaking rate assumed when a clip's real duration is unavailable.
    /// Fallback seconds are `ceil(chars / rate)`. Must be positive.
    pub fallback_chars_per_sec: f64,
}

impl Default for TimesheetConfig {
    /// Ten characters per second, a serviceable average across languages.
    fn default() -> Self {
        Self {
            fallback_chars_per_sec: 10.0,
        }
    }
}

fn fallback_duration_secs(text: &str, chars_per_sec: f64) -> f64 {
    (text.chars().count() as f64 / chars_per_sec).ceil()
}

/// Narration clips laid end to end from second zero.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    /// Entries in input order, one per narration line.
    pub entries: Vec<TimesheetEntry>,
}

impl Timesheet {
    /// End of the last entry, or zero for an empty sheet.
    pub fn total_duration_secs(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.end_sec)
    }

    /// Entry for a scene id, if present.
    pub fn entry_for(&self, id: u32) -> Option<&TimesheetEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// How many entries carry estimated durations instead of real audio.
    pub fn degraded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_degraded()).count()
    }

    /// Build an all-estimate timesheet without calling any provider.
    ///
    /// Every entry uses the fallback duration and an empty `audio_url`.
    /// Useful for offline planning and previews before spending TTS quota;
    /// the timing gets replaced once real clips exist.
    pub fn estimate(lines: &[NarrationLine], cfg: TimesheetConfig) -> Self {
        let mut entries = Vec::with_capacity(lines.len());
        let mut cursor_sec = 0.0;
        for line in lines {
            let duration_sec = fallback_duration_secs(&line.text, cfg.fallback_chars_per_sec);
            entries.push(TimesheetEntry {
                id: line.id,
                start_sec: cursor_sec,
                end_sec: cursor_sec + duration_sec,
                duration_sec,
                audio_url: String::new(),
                text: line.text.clone(),
            });
            cursor_sec += duration_sec;
        }
        Self { entries }
    }

    /// Check the gap-free invariant on a sheet that did not come from
    /// [`TimesheetBuilder`] (hand-written or deserialized data).
    pub fn validate(&self) -> CinegridResult<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.duration_sec.is_finite() || entry.duration_sec < 0.0 {
                return Err(CinegridError::validation(format!(
                    "timesheet entry {} has invalid duration {}",
                    entry.id, entry.duration_sec
                )));
            }
            if (entry.end_sec - entry.start_sec - entry.duration_sec).abs() > 1e-9 {
                return Err(CinegridError::validation(format!(
                    "timesheet entry {} span does not match its duration",
                    entry.id
                )));
            }
            if i == 0 {
                if entry.start_sec != 0.0 {
                    return Err(CinegridError::validation(
                        "timesheet must start at second zero",
                    ));
                }
            } else if (entry.start_sec - self.entries[i - 1].end_sec).abs() > 1e-9 {
                return Err(CinegridError::validation(format!(
                    "timesheet has a gap before entry {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}

/// Accumulates timesheet entries one awaited synthesis call at a time.
///
/// Lines are strictly sequential on purpose: each entry's start offset is
/// the previous entry's end, so firing providers concurrently would not
/// speed anything up without speculative duration math. The builder is also
/// the cancellation point. Every `push_line` leaves the sheet complete up
/// to that line, so an orchestrator may stop between lines and keep what it
/// has.
#[derive(Debug)]
pub struct TimesheetBuilder {
    cfg: TimesheetConfig,
    entries: Vec<TimesheetEntry>,
    cursor_sec: f64,
}

impl TimesheetBuilder {
    /// Empty sheet starting at second zero.
    pub fn new(cfg: TimesheetConfig) -> Self {
        Self {
            cfg,
            entries: Vec::new(),
            cursor_sec: 0.0,
        }
    }

    /// Entries accumulated so far.
    pub fn entries(&self) -> &[TimesheetEntry] {
        &self.entries
    }

    /// Synthesize one line and append its entry.
    ///
    /// Never fails: a synthesis error, or a clip violating the measured
    /// duration contract, degrades to the estimated duration with an empty
    /// `audio_url` and a warning.
    #[tracing::instrument(skip_all, fields(line = line.id))]
    pub async fn push_line<S: SpeechSynthesizer>(&mut self, line: &NarrationLine, synth: &S) {
        let (duration_sec, audio_url) = match synth.synthesize(&line.text, &line.voice).await {
            Ok(clip) if clip.duration_secs.is_finite() && clip.duration_secs >= 0.0 => {
                (clip.duration_secs, clip.audio_url)
            }
            Ok(clip) => {
                let estimated =
                    fallback_duration_secs(&line.text, self.cfg.fallback_chars_per_sec);
                tracing::warn!(
                    reported_secs = clip.duration_secs,
                    estimated_secs = estimated,
                    "provider reported an invalid clip duration, using estimate"
                );
                (estimated, String::new())
            }
            Err(err) => {
                let estimated =
                    fallback_duration_secs(&line.text, self.cfg.fallback_chars_per_sec);
                tracing::warn!(
                    error = %err,
                    estimated_secs = estimated,
                    "synthesis failed, using estimated duration"
                );
                (estimated, String::new())
            }
        };

        let start_sec = self.cursor_sec;
        self.entries.push(TimesheetEntry {
            id: line.id,
            start_sec,
            end_sec: start_sec + duration_sec,
            duration_sec,
            audio_url,
            text: line.text.clone(),
        });
        self.cursor_sec = start_sec + duration_sec;
    }

    /// Finish the sheet.
    pub fn finish(self) -> Timesheet {
        Timesheet {
            entries: self.entries,
        }
    }
}

/// Synthesize every line in order and lay the clips end to end.
///
/// The output always has exactly one entry per input line; failed lines
/// carry estimated durations. See [`TimesheetBuilder`] for the sequencing
/// and cancellation story.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub async fn build_timesheet<S: SpeechSynthesizer>(
    lines: &[NarrationLine],
    synth: &S,
    cfg: TimesheetConfig,
) -> Timesheet {
    let mut builder = TimesheetBuilder::new(cfg);
    for line in lines {
        builder.push_line(line, synth).await;
    }
    let sheet = builder.finish();
    let degraded = sheet.degraded_count();
    if degraded > 0 {
        tracing::warn!(degraded, total = sheet.entries.len(), "timesheet has degraded entries");
    }
    sheet
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timesheet.rs"]
mod tests;
