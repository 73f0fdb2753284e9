//! Card-local display state: the active tab and the transient "copied"
//! indicator.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Which half of the card is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CardTab {
    #[default]
    Message,
    Traits,
}

impl CardTab {
    pub const ALL: [CardTab; 2] = [CardTab::Message, CardTab::Traits];

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            CardTab::Message => "Your Message",
            CardTab::Traits => "Your Traits",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardTab::Message => "message",
            CardTab::Traits => "traits",
        }
    }
}

impl FromStr for CardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "message" => Ok(CardTab::Message),
            "traits" => Ok(CardTab::Traits),
            other => Err(format!("unknown tab '{}' (expected message or traits)", other)),
        }
    }
}

/// Label of the copy button.
pub fn copy_button_label(copied: bool) -> &'static str {
    if copied {
        "Copied to Clipboard!"
    } else {
        "Copy Horoscope"
    }
}

/// Flag that turns on after a successful copy and turns itself off after
/// `hold`.
///
/// Marking again while on restarts the hold; the flag never drops to false
/// in between. Dropping the indicator aborts a pending reset. Observers
/// follow changes through [`CopiedIndicator::subscribe`].
///
/// [`CopiedIndicator::mark_copied`] spawns onto the current tokio runtime.
#[derive(Debug)]
pub struct CopiedIndicator {
    state: Arc<watch::Sender<bool>>,
    generation: Arc<AtomicU64>,
    hold: Duration,
    reset: Option<JoinHandle<()>>,
}

impl CopiedIndicator {
    pub fn new(hold: Duration) -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            hold,
            reset: None,
        }
    }

    pub fn is_copied(&self) -> bool {
        *self.state.borrow()
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Turn the flag on and (re)arm the reset timer.
    pub fn mark_copied(&mut self) {
        if let Some(pending) = self.reset.take() {
            pending.abort();
        }

        // generation moves before the flag rises
        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(true);

        let generation = self.generation.clone();
        let state = self.state.clone();
        let hold = self.hold;
        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            // A newer mark owns the flag once the generation has moved on
            state.send_if_modified(|copied| {
                if generation.load(Ordering::SeqCst) == armed && *copied {
                    *copied = false;
                    true
                } else {
                    false
                }
            });
        }));

        tracing::debug!("Copied indicator armed for {:?}", self.hold);
    }

    /// Abort a pending reset and turn the flag off now.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.reset.take() {
            pending.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_if_modified(|copied| std::mem::replace(copied, false));
    }
}

impl Drop for CopiedIndicator {
    fn drop(&mut self) {
        if let Some(pending) = self.reset.take() {
            pending.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: Duration = Duration::from_secs(2);

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
    }

    #[test]
    fn tab_defaults_to_message() {
        assert_eq!(CardTab::default(), CardTab::Message);
    }

    #[test]
    fn tab_labels_and_parsing() {
        assert_eq!(CardTab::Message.label(), "Your Message");
        assert_eq!(CardTab::Traits.label(), "Your Traits");
        assert_eq!("traits".parse::<CardTab>(), Ok(CardTab::Traits));
        assert_eq!("MESSAGE".parse::<CardTab>(), Ok(CardTab::Message));
        assert!("stars".parse::<CardTab>().is_err());
    }

    #[test]
    fn copy_label_tracks_flag() {
        assert_eq!(copy_button_label(false), "Copy Horoscope");
        assert_eq!(copy_button_label(true), "Copied to Clipboard!");
    }

    #[tokio::test(start_paused = true)]
    async fn flag_starts_off() {
        let indicator = CopiedIndicator::new(HOLD);
        assert!(!indicator.is_copied());
        assert_eq!(indicator.hold(), HOLD);
    }

    #[tokio::test(start_paused = true)]
    async fn flag_resets_after_hold() {
        let mut indicator = CopiedIndicator::new(HOLD);
        indicator.mark_copied();
        assert!(indicator.is_copied());

        advance(1999).await;
        assert!(indicator.is_copied());

        advance(2).await;
        assert!(!indicator.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn remark_extends_without_flicker() {
        let mut indicator = CopiedIndicator::new(HOLD);
        let mut rx = indicator.subscribe();
        let observed = tokio::spawn(async move {
            let mut seen = Vec::new();
            while rx.changed().await.is_ok() {
                let copied = *rx.borrow_and_update();
                seen.push(copied);
                if !copied {
                    break;
                }
            }
            seen
        });

        indicator.mark_copied();
        advance(1500).await;
        indicator.mark_copied();

        // first timer would have fired at 2000ms
        advance(1000).await;
        assert!(indicator.is_copied());

        advance(1600).await;
        assert!(!indicator.is_copied());

        let seen = observed.await.unwrap();
        assert_eq!(seen.last(), Some(&false));
        assert!(seen[..seen.len() - 1].iter().all(|copied| *copied));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_pending_reset() {
        let mut indicator = CopiedIndicator::new(HOLD);
        let rx = indicator.subscribe();
        indicator.mark_copied();
        drop(indicator);

        advance(5000).await;
        // no reset was delivered after teardown
        assert!(*rx.borrow());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_turns_off_immediately() {
        let mut indicator = CopiedIndicator::new(HOLD);
        indicator.mark_copied();
        indicator.cancel();
        assert!(!indicator.is_copied());

        indicator.mark_copied();
        advance(2001).await;
        assert!(!indicator.is_copied());
    }
}
