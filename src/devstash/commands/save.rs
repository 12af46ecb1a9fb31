use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::envelope::SnippetEnvelope;
use crate::error::Result;
use crate::input::{acquire, Acquired, InputSource, StdinSource};
use crate::webhook::{deliver, Transport};

pub const USAGE_HINT: &str =
    "Usage: Pipe content into devstash. e.g., 'cat file.txt | devstash'";
pub const SAVED_MESSAGE: &str = "Successfully saved to DevStash!";

#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub source: InputSource,
    /// Raw comma-separated tags, as typed.
    pub tags: String,
    pub note: String,
}

/// Acquire, build, deliver. Each step finishes before the next begins and
/// any failure ends the run.
pub fn run<T: Transport + ?Sized>(
    transport: &T,
    settings: &Settings,
    request: &SaveRequest,
    stdin: &mut dyn StdinSource,
) -> Result<CmdResult> {
    let content = match acquire(&request.source, stdin)? {
        Acquired::Content(content) => content,
        Acquired::NoInput => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(USAGE_HINT));
            return Ok(result);
        }
    };

    let envelope = SnippetEnvelope::build(content, &request.tags, &request.note);
    let id = envelope.id();
    deliver(transport, settings, envelope)?;
    tracing::debug!(%id, "snippet delivered");

    let mut result = CmdResult::default().with_delivered(id);
    result.add_message(CmdMessage::success(SAVED_MESSAGE));
    Ok(result)
}
