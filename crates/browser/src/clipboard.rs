//! Clipboard collaborator.

/// Abstract clipboard the host application implements.
///
/// `write` is the primary (typically async-platform) clipboard; when it
/// fails the session falls back to [`write_fallback`], the synchronous
/// select-and-copy primitive. Both return whether the text landed on the
/// clipboard.
///
/// [`write_fallback`]: Clipboard::write_fallback
pub trait Clipboard {
    /// Primary clipboard write.
    fn write(&mut self, text: &str) -> bool;

    /// Compatibility fallback used when [`Clipboard::write`] fails.
    fn write_fallback(&mut self, text: &str) -> bool;
}
