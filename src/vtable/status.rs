//! Transient status display hook.
//!
//! The extraction pipeline reports the file it is about to scan through this
//! trait; the CLI renders it on stderr, tests record it, library callers may
//! pass nothing.

/// A display with numbered channels that can show one transient line each.
pub trait StatusDisplay {
    fn show(&self, channel: u32, text: &str);
    fn clear(&self, channel: u32);
}

/// A display plus the channel to report on.
#[derive(Clone, Copy)]
pub struct StatusHandle<'a> {
    pub display: &'a dyn StatusDisplay,
    pub channel: u32,
}

impl<'a> StatusHandle<'a> {
    pub fn new(display: &'a dyn StatusDisplay, channel: u32) -> Self {
        Self { display, channel }
    }

    pub(crate) fn show(&self, text: &str) {
        self.display.show(self.channel, text);
    }
}

impl std::fmt::Debug for StatusHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusHandle").field("channel", &self.channel).finish()
    }
}

/// Clears the channel when dropped, so it happens on every exit path.
pub(crate) struct ClearOnDrop<'a>(pub Option<StatusHandle<'a>>);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.0 {
            handle.display.clear(handle.channel);
        }
    }
}
