/// Input feedback state machine: maps validation verdicts to what the
/// URL field should look like, independent of rendering.
use crate::validate::{validate, Verdict};

/// Milliseconds of quiet typing before a verdict is applied.
pub const DEBOUNCE_MS: u32 = 300;

/// Delay before validating pasted content, so the browser has finished
/// inserting it into the field.
pub const PASTE_SETTLE_MS: u32 = 10;

/// How long the submit-gate error banner stays up before auto-dismissing.
pub const ERROR_DISMISS_MS: u32 = 5000;

/// Visual state tag on the input element. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputVisualState {
    Default,
    Valid,
    Invalid,
}

impl InputVisualState {
    /// CSS class for the state, empty for `Default`.
    pub fn css_class(self) -> &'static str {
        match self {
            InputVisualState::Default => "",
            InputVisualState::Valid => "valid",
            InputVisualState::Invalid => "invalid",
        }
    }
}

/// Validator badge shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Hidden,
    /// Affirmative style with confirmatory text.
    Confirmed,
}

impl BadgeState {
    pub fn text(self) -> &'static str {
        match self {
            BadgeState::Hidden => "",
            BadgeState::Confirmed => "Valid Twitter/X URL detected",
        }
    }
}

/// What the submit gate decided for the current field content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Verdict was `Valid`: let the submission proceed.
    Proceed,
    /// Blocked; the attached message goes into the error banner.
    Block(String),
}

/// Observable feedback state for the URL input.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackState {
    pub visual: InputVisualState,
    pub badge: BadgeState,
    /// Inline error banner content, if one is showing.
    pub error: Option<String>,
    // Generation of the validation timer whose verdict is allowed to land.
    generation: u64,
}

impl FeedbackState {
    pub fn new() -> Self {
        FeedbackState {
            visual: InputVisualState::Default,
            badge: BadgeState::Hidden,
            error: None,
            generation: 0,
        }
    }

    /// Register an input change. Returns the generation token the caller
    /// must present when the debounce timer fires; any token minted
    /// earlier is superseded and its verdict will be ignored.
    pub fn note_input(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True if `token` is still the live timer generation.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// Apply the verdict for a fired timer. Stale tokens are dropped so a
    /// verdict from an earlier keystroke can never overwrite a fresher one.
    pub fn apply_debounced(&mut self, token: u64, verdict: Verdict) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.apply_verdict(verdict);
        true
    }

    /// Map a verdict onto badge and visual state.
    pub fn apply_verdict(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Empty => {
                self.badge = BadgeState::Hidden;
                self.visual = InputVisualState::Default;
            }
            Verdict::Valid => {
                self.badge = BadgeState::Confirmed;
                self.visual = InputVisualState::Valid;
            }
            Verdict::Invalid => {
                self.badge = BadgeState::Hidden;
                self.visual = InputVisualState::Invalid;
            }
        }
    }

    /// Synchronous submit gate. Re-validates the current content; a
    /// non-`Valid` verdict blocks submission, raises the inline error and
    /// forces the `Invalid` visual state.
    pub fn submit(&mut self, raw_input: &str) -> SubmitDecision {
        if validate(raw_input) == Verdict::Valid {
            self.error = None;
            SubmitDecision::Proceed
        } else {
            let message = "Please enter a valid Twitter/X thread URL".to_string();
            self.error = Some(message.clone());
            self.visual = InputVisualState::Invalid;
            SubmitDecision::Block(message)
        }
    }

    /// Drop the error banner (auto-dismiss timer or user edit).
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// External reset: back to the pristine state.
    pub fn reset(&mut self) {
        self.visual = InputVisualState::Default;
        self.badge = BadgeState::Hidden;
        self.error = None;
        self.generation += 1;
    }
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = FeedbackState::new();
        assert_eq!(state.visual, InputVisualState::Default);
        assert_eq!(state.badge, BadgeState::Hidden);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_verdict_mapping_valid() {
        let mut state = FeedbackState::new();
        state.apply_verdict(Verdict::Valid);
        assert_eq!(state.visual, InputVisualState::Valid);
        assert_eq!(state.badge, BadgeState::Confirmed);
        assert_eq!(state.badge.text(), "Valid Twitter/X URL detected");
    }

    #[test]
    fn test_verdict_mapping_invalid() {
        let mut state = FeedbackState::new();
        state.apply_verdict(Verdict::Invalid);
        assert_eq!(state.visual, InputVisualState::Invalid);
        assert_eq!(state.badge, BadgeState::Hidden);
    }

    #[test]
    fn test_verdict_mapping_empty_resets() {
        let mut state = FeedbackState::new();
        state.apply_verdict(Verdict::Valid);
        state.apply_verdict(Verdict::Empty);
        assert_eq!(state.visual, InputVisualState::Default);
        assert_eq!(state.badge, BadgeState::Hidden);
    }

    #[test]
    fn test_debounce_supersede_on_new_input() {
        let mut state = FeedbackState::new();

        // Three rapid keystrokes: only the last timer may land
        let first = state.note_input();
        let second = state.note_input();
        let last = state.note_input();

        assert!(!state.apply_debounced(first, Verdict::Invalid));
        assert!(!state.apply_debounced(second, Verdict::Invalid));
        assert_eq!(state.visual, InputVisualState::Default);

        assert!(state.apply_debounced(last, Verdict::Valid));
        assert_eq!(state.visual, InputVisualState::Valid);
    }

    #[test]
    fn test_stale_verdict_never_overwrites_fresher_one() {
        let mut state = FeedbackState::new();

        let old = state.note_input();
        let fresh = state.note_input();

        assert!(state.apply_debounced(fresh, Verdict::Valid));
        // Out-of-order firing of the superseded timer is a no-op
        assert!(!state.apply_debounced(old, Verdict::Invalid));
        assert_eq!(state.visual, InputVisualState::Valid);
    }

    #[test]
    fn test_submit_gate_blocks_invalid() {
        let mut state = FeedbackState::new();
        let decision = state.submit("not a url");

        assert!(matches!(decision, SubmitDecision::Block(_)));
        assert_eq!(state.visual, InputVisualState::Invalid);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_submit_gate_blocks_empty() {
        let mut state = FeedbackState::new();
        assert!(matches!(state.submit(""), SubmitDecision::Block(_)));
        assert!(matches!(state.submit("   "), SubmitDecision::Block(_)));
        assert!(state.error.is_some());
    }

    #[test]
    fn test_debounced_verdict_after_submit_keeps_error() {
        let mut state = FeedbackState::new();

        // Typing starts a debounce, then submit fires before it lands
        let token = state.note_input();
        state.submit("twitter.com/user/status/abc");
        assert!(state.error.is_some());

        // The pending verdict still applies (token is current), but it
        // must not dismiss the banner: that is the 5000 ms timer's job
        assert!(state.apply_debounced(token, Verdict::Invalid));
        assert!(state.error.is_some());
        assert_eq!(state.visual, InputVisualState::Invalid);
    }

    #[test]
    fn test_submit_gate_allows_valid() {
        let mut state = FeedbackState::new();
        let decision = state.submit("https://x.com/user/status/123");

        assert_eq!(decision, SubmitDecision::Proceed);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_submit_trims_before_checking() {
        let mut state = FeedbackState::new();
        let decision = state.submit("  https://twitter.com/user/status/42  ");
        assert_eq!(decision, SubmitDecision::Proceed);
    }

    #[test]
    fn test_error_dismiss() {
        let mut state = FeedbackState::new();
        state.submit("nope");
        assert!(state.error.is_some());

        state.dismiss_error();
        assert_eq!(state.error, None);
        // Dismissing the banner does not touch the visual state
        assert_eq!(state.visual, InputVisualState::Invalid);
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut state = FeedbackState::new();
        let token = state.note_input();
        state.submit("nope");

        state.reset();

        assert_eq!(state, {
            let mut pristine = FeedbackState::new();
            pristine.generation = state.generation;
            pristine
        });
        // Reset also invalidates in-flight timers
        assert!(!state.apply_debounced(token, Verdict::Invalid));
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(InputVisualState::Default.css_class(), "");
        assert_eq!(InputVisualState::Valid.css_class(), "valid");
        assert_eq!(InputVisualState::Invalid.css_class(), "invalid");
    }
}
