//! Activity notifications delivered by the host

use std::fmt;
use std::str::FromStr;

/// One discrete activity notification.
///
/// Every event carries the path of the note it concerns so the orchestrator
/// can drop activity inside excluded folders before any engine sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    NoteCreated { path: String },
    NoteDeleted { path: String },
    /// Net change in outgoing links of a note
    LinkDelta { path: String, delta: i64 },
    /// Net change in character count of a note
    CharsDelta { path: String, delta: i64 },
    /// One minute spent reading a note
    ReadingTick { path: String },
}

impl ActivityEvent {
    pub fn path(&self) -> &str {
        match self {
            Self::NoteCreated { path }
            | Self::NoteDeleted { path }
            | Self::LinkDelta { path, .. }
            | Self::CharsDelta { path, .. }
            | Self::ReadingTick { path } => path,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::NoteCreated { .. } => ActivityKind::NoteCreated,
            Self::NoteDeleted { .. } => ActivityKind::NoteDeleted,
            Self::LinkDelta { .. } => ActivityKind::Links,
            Self::CharsDelta { .. } => ActivityKind::Chars,
            Self::ReadingTick { .. } => ActivityKind::Reading,
        }
    }
}

/// Discriminant of [`ActivityEvent`], parsed from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    NoteCreated,
    NoteDeleted,
    Links,
    Chars,
    Reading,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoteCreated => "note-created",
            Self::NoteDeleted => "note-deleted",
            Self::Links => "links",
            Self::Chars => "chars",
            Self::Reading => "reading",
        }
    }

    /// Build the event for this kind. `amount` is only used by delta kinds.
    pub fn into_event(self, path: impl Into<String>, amount: i64) -> ActivityEvent {
        let path = path.into();
        match self {
            Self::NoteCreated => ActivityEvent::NoteCreated { path },
            Self::NoteDeleted => ActivityEvent::NoteDeleted { path },
            Self::Links => ActivityEvent::LinkDelta { path, delta: amount },
            Self::Chars => ActivityEvent::CharsDelta { path, delta: amount },
            Self::Reading => ActivityEvent::ReadingTick { path },
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseActivityError {
    #[error("Unknown activity kind: {0} (expected note-created, note-deleted, links, chars or reading)")]
    Unknown(String),
}

impl FromStr for ActivityKind {
    type Err = ParseActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "note-created" | "create" => Ok(Self::NoteCreated),
            "note-deleted" | "delete" => Ok(Self::NoteDeleted),
            "links" | "link-delta" => Ok(Self::Links),
            "chars" | "chars-delta" => Ok(Self::Chars),
            "reading" | "reading-tick" => Ok(Self::Reading),
            other => Err(ParseActivityError::Unknown(other.to_string())),
        }
    }
}
