//! Guest entry entity - one persisted (name, message) submission

/// A persisted guestbook entry.
///
/// Entries are immutable once created: there is no update or delete path.
/// The id is generated by storage and determines display order (newest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestEntry {
    pub id: i64,
    pub name: String,
    pub message: String,
}

/// A guest entry that has not been persisted yet.
///
/// Built from a form submission; the id is assigned by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuestEntry {
    pub name: String,
    pub message: String,
}

impl NewGuestEntry {
    /// Create a new entry; field values are stored verbatim
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Check whether both fields are present and non-empty.
    ///
    /// A pure presence check: any non-empty value passes, whitespace
    /// included. Submissions failing this check are silently dropped
    /// rather than surfaced as validation errors.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.message.is_empty()
    }
}
