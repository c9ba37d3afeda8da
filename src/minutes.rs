//! Structured minutes metadata supplied alongside the document.
//!
//! The generation service returns both a rendered document and a structured
//! JSON payload (participants, decisions, action items, discussion points).
//! The editor keeps the structured form for its table view and can render a
//! default document from it when the service supplies none.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One discussed topic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionPoint {
    pub topic: String,
    pub details: String,
}

/// A decision and the person responsible for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub decision: String,
    pub responsible: String,
}

/// An action item with an owner and optional deadline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Structured minutes produced by the generation service.
///
/// Generated payloads are best-effort JSON, so every field defaults when
/// absent rather than failing the parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingMinutes {
    pub title: String,
    pub date: String,
    pub participants: Vec<String>,
    pub agenda_summary: String,
    pub discussion_points: Vec<DiscussionPoint>,
    pub decisions: Vec<Decision>,
    pub action_items: Vec<ActionItem>,
}

impl MeetingMinutes {
    /// Parse the generation service's JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MinutesJson`](crate::Error::MinutesJson) when the
    /// payload is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the service's JSON shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MinutesJson`](crate::Error::MinutesJson) when
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the default minutes document used when the service supplies
    /// no pre-rendered output.
    #[must_use]
    pub fn render_markup(&self) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"meeting-minutes\">");
        out.push_str(&format!("<h1>{}</h1>", escape_text(&self.title)));
        out.push_str(&format!(
            "<p><strong>Date:</strong> {}</p>",
            escape_text(&self.date)
        ));
        out.push_str(&format!(
            "<p><strong>Participants:</strong> {}</p>",
            escape_text(&self.participants.join(", "))
        ));

        out.push_str("<h2>Agenda Summary</h2>");
        out.push_str(&format!("<p>{}</p>", escape_text(&self.agenda_summary)));

        out.push_str("<h2>Discussion Points</h2>");
        for point in &self.discussion_points {
            out.push_str(&format!(
                "<div class=\"discussion-point\"><h3>{}</h3><p>{}</p></div>",
                escape_text(&point.topic),
                escape_text(&point.details)
            ));
        }

        out.push_str("<h2>Decisions Made</h2>");
        for decision in &self.decisions {
            out.push_str(&format!(
                "<div class=\"decision\"><p><strong>Decision:</strong> {}</p>\
                 <p><strong>Responsible:</strong> {}</p></div>",
                escape_text(&decision.decision),
                escape_text(&decision.responsible)
            ));
        }

        out.push_str("<h2>Action Items</h2>");
        for item in &self.action_items {
            out.push_str(&format!(
                "<div class=\"action-item\"><p><strong>Task:</strong> {}</p>\
                 <p><strong>Owner:</strong> {}</p>",
                escape_text(&item.task),
                escape_text(&item.owner)
            ));
            if let Some(deadline) = &item.deadline {
                out.push_str(&format!(
                    "<p><strong>Deadline:</strong> {}</p>",
                    escape_text(deadline)
                ));
            }
            out.push_str("</div>");
        }

        out.push_str("</div>");
        out
    }
}

/// Escape text for embedding in markup.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
