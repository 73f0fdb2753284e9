//! Host platform capabilities used by the card's export actions.
//!
//! The card never talks to the clipboard or the browser directly; it is
//! handed a [`ClipboardWriter`] and a [`LinkOpener`]. Desktop builds use
//! [`SystemClipboard`] and [`SystemBrowser`], tests use the in-memory
//! [`MemoryClipboard`] and [`RecordingOpener`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{HoroscopeError, HoroscopeResult};

/// Writes plain text to a clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> HoroscopeResult<()>;
}

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open_link(&self, url: &str) -> HoroscopeResult<()>;
}

/// Whether clipboard contents vanish with the process that set them (X11, Wayland).
const SELECTION_NEEDS_OWNER: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

/// System clipboard via arboard.
///
/// On X11 and Wayland the selection is served by the process that set it.
/// A short-lived process should use [`SystemClipboard::until_replaced`],
/// whose writes block until another application takes the clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard {
    until_replaced: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard whose writes keep serving the selection until it is replaced.
    pub fn until_replaced() -> Self {
        Self {
            until_replaced: true,
        }
    }

    /// True when a write will block until another application owns the clipboard.
    pub fn waits_for_new_owner(&self) -> bool {
        self.until_replaced && SELECTION_NEEDS_OWNER
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> HoroscopeResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| HoroscopeError::Clipboard(e.to_string()))?;
        let result = if self.until_replaced {
            set_and_serve(&mut clipboard, text)
        } else {
            clipboard.set_text(text)
        };
        result.map_err(|e| HoroscopeError::Clipboard(e.to_string()))
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn set_and_serve(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    clipboard.set().wait().text(text)
}

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
fn set_and_serve(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Default browser via the `open` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open_link(&self, url: &str) -> HoroscopeResult<()> {
        open::that_detached(url).map_err(|e| HoroscopeError::LinkOpen(e.to_string()))
    }
}

/// In-memory clipboard. Clones share the same contents.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    inner: Arc<Mutex<MemoryClipboardState>>,
}

#[derive(Debug, Default)]
struct MemoryClipboardState {
    contents: Option<String>,
    writes: usize,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let clipboard = Self::default();
        clipboard.inner.lock().fail_with = Some(reason.into());
        clipboard
    }

    pub fn contents(&self) -> Option<String> {
        self.inner.lock().contents.clone()
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.inner.lock().writes
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> HoroscopeResult<()> {
        let mut state = self.inner.lock();
        if let Some(reason) = &state.fail_with {
            return Err(HoroscopeError::Clipboard(reason.clone()));
        }
        state.contents = Some(text.to_string());
        state.writes += 1;
        Ok(())
    }
}

/// Link opener that records URLs instead of opening them.
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open_link(&self, url: &str) -> HoroscopeResult<()> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}
