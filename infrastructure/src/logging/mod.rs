//! JSONL writers: persona conversation log and experiment results.
//!
//! [`JsonlConversationLogger`] implements the
//! [`ConversationLogger`](dialectic_application::ConversationLogger) port;
//! [`JsonlResultWriter`] implements [`ResultSink`](dialectic_application::ResultSink).

mod conversation;
mod results;

pub use conversation::JsonlConversationLogger;
pub use results::JsonlResultWriter;
