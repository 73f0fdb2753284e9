//! Platform context provider for AstroGit.
//!
//! Provides the clipboard and link-opening capabilities to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(Platform::system);
//!
//! // In child components
//! let platform = use_platform();
//! card.share(platform.opener.as_ref())?;
//! ```

use std::sync::Arc;

use astrogit_core::{ClipboardWriter, HoroscopeCard, LinkOpener, SystemBrowser, SystemClipboard};
use dioxus::prelude::*;

/// Host capabilities shared through context.
#[derive(Clone)]
pub struct Platform {
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub opener: Arc<dyn LinkOpener>,
}

impl Platform {
    /// System clipboard and default browser.
    pub fn system() -> Self {
        Self {
            clipboard: Arc::new(SystemClipboard::new()),
            opener: Arc::new(SystemBrowser),
        }
    }
}

/// Get the card prepared at startup.
pub fn get_launch_card() -> Result<HoroscopeCard, String> {
    crate::get_launch_card()
}

/// Hook to access the platform capabilities from context.
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}
