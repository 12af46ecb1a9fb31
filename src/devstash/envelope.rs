use crate::tags::parse_tags;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// The JSON record posted to the webhook.
///
/// Fields are private: an envelope is fixed once built and is consumed by a
/// single dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetEnvelope {
    id: Uuid,
    content: String,
    user_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(serialize_with = "serialize_rfc3339")]
    created_at: DateTime<Utc>,
}

impl SnippetEnvelope {
    /// Builds an envelope with a fresh id, stamped now.
    ///
    /// `content` must already have passed the emptiness check. An empty
    /// `note` is dropped from the wire form.
    pub fn build(content: String, tags: &str, note: &str) -> Self {
        let note = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
        Self {
            id: Uuid::new_v4(),
            content,
            user_tags: parse_tags(tags),
            note,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn user_tags(&self) -> &[String] {
        &self.user_tags
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

fn serialize_rfc3339<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}
