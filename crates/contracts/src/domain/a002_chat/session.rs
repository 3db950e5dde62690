use super::aggregate::Message;
use super::responder::select_response;
use crate::shared::simulation::Delay;
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello! I'm your AI assistant for talent management. You can ask me to allocate resources, check availability, or get insights about your projects. Try saying \"Allocate 2 AI engineers to Project Alpha next Monday\"";

/// State of the floating chat widget for one browser session.
///
/// The message log is append-only. `pending` counts user messages whose
/// reply has not arrived yet; the typing indicator shows while it is
/// non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<Message>,
    pending: usize,
    is_open: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
            pending: 0,
            is_open: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.pending > 0
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Appends the user's message and starts "typing".
    ///
    /// Blank input is ignored and returns `None`; otherwise the caller is
    /// expected to schedule [`assistant_reply`] and hand the result to
    /// [`ChatSession::receive`].
    pub fn send(&mut self, input: &str) -> Option<Message> {
        if input.trim().is_empty() {
            return None;
        }
        let message = Message::user(input);
        self.messages.push(message.clone());
        self.pending += 1;
        Some(message)
    }

    pub fn receive(&mut self, reply: Message) {
        self.messages.push(reply);
        self.pending = self.pending.saturating_sub(1);
    }
}

/// Simulated assistant latency followed by the keyword-matched reply.
pub async fn assistant_reply<D: Delay>(delay: &D, reply_ms: u32, input: &str) -> Message {
    delay.wait(reply_ms).await;
    let response = select_response(input);
    log::debug!("chat reply selected: {:?}", response);
    Message::assistant(response.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_chat::aggregate::MessageOrigin;
    use crate::domain::a002_chat::responder::CannedResponse;
    use crate::shared::simulation::testing::RecordingDelay;
    use futures::executor::block_on;

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].origin, MessageOrigin::Assistant);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(!session.is_typing());
        assert!(!session.is_open());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.send("   ").is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_conflict_round_trip() {
        let delay = RecordingDelay::default();
        let mut session = ChatSession::new();
        let before = session.messages().to_vec();

        let sent = session.send("conflict").unwrap();
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_typing());
        assert!(sent.is_user());

        let reply = block_on(assistant_reply(&delay, 1500, &sent.content));
        session.receive(reply);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[..1], before[..]);
        assert_eq!(messages[1], sent);
        assert_eq!(messages[2].origin, MessageOrigin::Assistant);
        assert_eq!(messages[2].content, CannedResponse::Conflict.text());
        assert!(!session.is_typing());
        assert_eq!(delay.waits(), [1500]);
    }

    #[test]
    fn test_typing_stays_on_until_every_reply_arrives() {
        let mut session = ChatSession::new();
        session.send("one").unwrap();
        session.send("two").unwrap();
        session.receive(Message::assistant("first"));
        assert!(session.is_typing());
        session.receive(Message::assistant("second"));
        assert!(!session.is_typing());
    }

    #[test]
    fn test_open_close() {
        let mut session = ChatSession::new();
        session.open();
        assert!(session.is_open());
        session.close();
        assert!(!session.is_open());
    }
}
