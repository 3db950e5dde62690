pub mod aggregate;
pub mod responder;
pub mod session;
pub mod voice;

pub use aggregate::{Message, MessageId, MessageOrigin};
pub use responder::{select_response, CannedResponse};
pub use session::{assistant_reply, ChatSession, GREETING};
pub use voice::{VoiceInput, VOICE_SAMPLE};
