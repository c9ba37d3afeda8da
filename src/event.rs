//! Session events delegated to the embedding application.
//!
//! Export, share, and start-over are external collaborators: the session
//! raises a request and the host fulfils it. The sink is owned by the
//! session rather than registered globally, so two mounted editors never
//! cross wires.

use crate::export::ExportFormat;

/// Requests the session raises for its host to fulfil.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Export the current minutes in the given format.
    ExportRequested(ExportFormat),
    /// Produce a shareable link for the current minutes.
    ShareRequested,
    /// Discard the session and return to the upload step.
    StartOverRequested,
}

/// Callback sink receiving session events.
pub type EventSink = Box<dyn FnMut(SessionEvent)>;
