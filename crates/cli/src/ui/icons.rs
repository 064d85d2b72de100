//! Icon system for reminders and status output
//!
//! Messages are recognized as already decorated when they open with one of
//! [`Icons::MESSAGE_GLYPHS`]. Everything else gets [`Icons::IDEA`].

/// Icon constants
pub struct Icons;

impl Icons {
    // Message glyphs
    /// Tooling reminder
    pub const TOOL: &'static str = "🔧";
    /// Checklist item
    pub const CHECK: &'static str = "✅";
    /// Warning about the operation
    pub const ALERT: &'static str = "🚨";
    /// Default prefix for undecorated messages
    pub const IDEA: &'static str = "💡";
    /// Reference to a ticket or PR
    pub const LINK: &'static str = "🔗";
    /// Documentation reminder
    pub const MEMO: &'static str = "📝";

    /// Glyphs that mark a message as already decorated
    pub const MESSAGE_GLYPHS: [&'static str; 6] = [
        Self::TOOL,
        Self::CHECK,
        Self::ALERT,
        Self::IDEA,
        Self::LINK,
        Self::MEMO,
    ];

    // Headers
    /// Post-action reminder header
    pub const PARTY: &'static str = "🎉";
    /// Pre-action message header
    pub const PUZZLE: &'static str = "🧩";

    // Status icons
    /// Completed step
    pub const STATUS_SUCCESS: &'static str = "✅";
    /// Skipped or foreign item (trailing space pads the narrow glyph)
    pub const STATUS_WARNING: &'static str = "⚠️ ";
    /// Failure or cancellation
    pub const STATUS_ERROR: &'static str = "❌";
    /// Confirmation prompt
    pub const STATUS_QUESTION: &'static str = "❓";
}

/// Status icon type
#[derive(Debug, Clone, Copy)]
pub enum StatusIcon {
    /// ✅
    Success,
    /// ⚠️
    Warning,
    /// ❌
    Error,
    /// ❓
    Question,
    /// 🎉
    Celebrate,
}

impl StatusIcon {
    /// Get the glyph for this status
    pub fn get(self) -> &'static str {
        match self {
            Self::Success => Icons::STATUS_SUCCESS,
            Self::Warning => Icons::STATUS_WARNING,
            Self::Error => Icons::STATUS_ERROR,
            Self::Question => Icons::STATUS_QUESTION,
            Self::Celebrate => Icons::PARTY,
        }
    }
}
