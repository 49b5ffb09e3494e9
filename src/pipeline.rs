/// Processing-display sequencing for the summarize flow.
///
/// The step indicator, rotating status texts and typing effect are plain
/// data models advanced tick by tick; the UI layer owns the actual timers
/// and just calls `advance`/`tick` when they fire.

/// Stage labels lit one by one while a summary is generated.
pub const PIPELINE_STEPS: [&str; 4] = [
    "Fetching thread",
    "Extracting tweets",
    "Summarizing",
    "Rendering results",
];

/// Rotating status texts shown with the typing effect.
pub const PROCESSING_TEXTS: [&str; 6] = [
    "Analyzing content...",
    "Extracting key insights...",
    "Processing thread structure...",
    "Identifying main themes...",
    "Generating summary points...",
    "Finalizing results...",
];

/// Delay between lighting consecutive pipeline steps.
pub const STEP_ADVANCE_MS: u32 = 1500;
/// Pause with all steps lit before the sequence clears.
pub const RESTART_HOLD_MS: u32 = 2000;
/// Gap between clearing the steps and relighting the first one.
pub const CLEAR_GAP_MS: u32 = 500;
/// Per-character cadence of the typing effect.
pub const TYPE_TICK_MS: u32 = 50;
/// Pause on a fully typed status text before the next one starts.
pub const TEXT_HOLD_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Advancing,
    Holding,
    Cleared,
}

/// The step indicator: an ordered sequence advanced index-by-index by a
/// single scheduler, looping hold → clear → restart forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSequence {
    lit: usize,
    phase: Phase,
}

impl PipelineSequence {
    pub fn new() -> Self {
        PipelineSequence {
            lit: 0,
            phase: Phase::Advancing,
        }
    }

    /// Number of steps currently lit, counted from the front.
    pub fn lit(&self) -> usize {
        self.lit
    }

    pub fn is_lit(&self, index: usize) -> bool {
        index < self.lit
    }

    /// Move the sequence forward one tick. Returns the delay in
    /// milliseconds until the scheduler should call `advance` again.
    pub fn advance(&mut self) -> u32 {
        match self.phase {
            Phase::Advancing => {
                self.lit += 1;
                if self.lit == PIPELINE_STEPS.len() {
                    self.phase = Phase::Holding;
                    RESTART_HOLD_MS
                } else {
                    STEP_ADVANCE_MS
                }
            }
            Phase::Holding => {
                self.lit = 0;
                self.phase = Phase::Cleared;
                CLEAR_GAP_MS
            }
            Phase::Cleared => {
                self.lit = 1;
                self.phase = Phase::Advancing;
                STEP_ADVANCE_MS
            }
        }
    }
}

impl Default for PipelineSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Cycles through `PROCESSING_TEXTS`, wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRotation {
    index: usize,
}

impl StatusRotation {
    pub fn new() -> Self {
        StatusRotation { index: 0 }
    }

    pub fn current(&self) -> &'static str {
        PROCESSING_TEXTS[self.index]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % PROCESSING_TEXTS.len();
        self.current()
    }
}

/// Character-at-a-time reveal of a status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingText {
    text: &'static str,
    shown: usize,
}

impl TypingText {
    pub fn new(text: &'static str) -> Self {
        TypingText { text, shown: 0 }
    }

    /// Reveal one more character. Returns true while there is more to type.
    pub fn tick(&mut self) -> bool {
        if self.shown < self.text.chars().count() {
            self.shown += 1;
        }
        self.shown < self.text.chars().count()
    }

    pub fn visible(&self) -> String {
        self.text.chars().take(self.shown).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.text.chars().count()
    }
}
