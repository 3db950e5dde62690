//! Voice-input stub of the chat widget.
//!
//! There is no speech recognition: a capture "listens" for a fixed time and
//! then yields a canned transcript. Each capture gets a ticket so a capture
//! stopped by the user (or superseded by a newer one) never fills the input.

pub const VOICE_SAMPLE: &str = "Allocate 2 AI engineers to Project Alpha next Monday";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoiceInput {
    listening: bool,
    ticket: u64,
}

impl VoiceInput {
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Starts a capture and returns its ticket, or stops the running one.
    pub fn toggle(&mut self) -> Option<u64> {
        self.ticket += 1;
        self.listening = !self.listening;
        self.listening.then_some(self.ticket)
    }

    /// Transcript of a finished capture, `None` if it was cancelled.
    pub fn finish(&mut self, ticket: u64) -> Option<&'static str> {
        if self.listening && self.ticket == ticket {
            self.listening = false;
            Some(VOICE_SAMPLE)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_yields_sample() {
        let mut voice = VoiceInput::default();
        let ticket = voice.toggle().unwrap();
        assert!(voice.is_listening());
        assert_eq!(voice.finish(ticket), Some(VOICE_SAMPLE));
        assert!(!voice.is_listening());
    }

    #[test]
    fn test_stopped_capture_is_discarded() {
        let mut voice = VoiceInput::default();
        let ticket = voice.toggle().unwrap();
        assert_eq!(voice.toggle(), None);
        assert_eq!(voice.finish(ticket), None);
    }

    #[test]
    fn test_stale_ticket_after_restart() {
        let mut voice = VoiceInput::default();
        let first = voice.toggle().unwrap();
        voice.toggle();
        let second = voice.toggle().unwrap();
        assert_eq!(voice.finish(first), None);
        assert!(voice.is_listening());
        assert_eq!(voice.finish(second), Some(VOICE_SAMPLE));
    }
}
