use contracts::domain::a002_chat::{ChatSession, VoiceInput};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatWidgetVm {
    pub session: RwSignal<ChatSession>,
    pub draft: RwSignal<String>,
    pub voice: RwSignal<VoiceInput>,
}

impl ChatWidgetVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            draft: RwSignal::new(String::new()),
            voice: RwSignal::new(VoiceInput::default()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.with(|s| s.is_open())
    }

    pub fn is_typing(&self) -> bool {
        self.session.with(|s| s.is_typing())
    }

    pub fn is_listening(&self) -> bool {
        self.voice.with(|v| v.is_listening())
    }
}
