//! Screen navigation controller.
//!
//! Owns the single mutable "which screen is visible" cell and the
//! transition rules between screens. Screens receive signal triggers,
//! never write access to the state.

pub mod model;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;

pub use model::{transition, NavSignal, Screen};

/// Delay before the splash screen advances on its own.
const SPLASH_DELAY: Duration = Duration::from_millis(2000);

/// Navigation error types.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    #[error("invalid navigation signal: no {signal:?} edge from '{from:?}'")]
    InvalidSignal { from: Screen, signal: NavSignal },

    #[error("invalid navigation target: cannot move from '{from:?}' to '{to:?}'")]
    InvalidTarget { from: Screen, to: Screen },
}

/// Read-only handle on the current screen. Cloneable; outlives the
/// controller but can never move the state.
#[derive(Clone)]
pub struct ScreenReader {
    current: Arc<Mutex<Screen>>,
}

impl ScreenReader {
    pub fn current(&self) -> Screen {
        *self.current.lock().unwrap()
    }
}

/// The navigation state machine. Starts on `Splash` and schedules the
/// one automatic transition; everything else is signal-driven.
///
/// Dropping the controller aborts the splash timer, so a torn-down
/// controller can never apply a stale transition.
pub struct NavController {
    current: Arc<Mutex<Screen>>,
    splash_timer: Option<JoinHandle<()>>,
}

impl NavController {
    /// Create a controller with the standard splash delay.
    ///
    /// Must be called from within a tokio runtime (the splash timer is a
    /// spawned task).
    pub fn new() -> Self {
        Self::with_splash_delay(SPLASH_DELAY)
    }

    /// Create a controller with a custom splash delay.
    pub fn with_splash_delay(delay: Duration) -> Self {
        let current = Arc::new(Mutex::new(Screen::Splash));

        let timer = tokio::spawn({
            let current = Arc::clone(&current);
            async move {
                tokio::time::sleep(delay).await;
                // Re-check under the lock: if anything already moved the
                // state off splash, the elapsed timer must not fire.
                let mut cur = current.lock().unwrap();
                if let Some(next) = transition(*cur, NavSignal::SplashElapsed) {
                    tracing::debug!(to = next.as_str(), "splash delay elapsed");
                    *cur = next;
                }
            }
        });

        Self {
            current,
            splash_timer: Some(timer),
        }
    }

    /// The currently visible screen.
    pub fn current(&self) -> Screen {
        *self.current.lock().unwrap()
    }

    /// A read-only handle for descendants of the controller.
    pub fn reader(&self) -> ScreenReader {
        ScreenReader {
            current: Arc::clone(&self.current),
        }
    }

    /// Fire a navigation signal.
    ///
    /// Applies the transition table; a signal with no edge from the
    /// current screen leaves the state unchanged and returns an error.
    pub fn signal(&mut self, signal: NavSignal) -> Result<Screen, NavError> {
        let mut cur = self.current.lock().unwrap();
        let from = *cur;
        let Some(next) = transition(from, signal) else {
            return Err(NavError::InvalidSignal { from, signal });
        };
        *cur = next;
        drop(cur);

        if from == Screen::Splash {
            self.cancel_splash_timer();
        }
        tracing::debug!(from = from.as_str(), to = next.as_str(), "screen transition");
        Ok(next)
    }

    /// Navigate to a target screen.
    ///
    /// The target must be one hop away in the transition table; screens
    /// are trusted to request only the edges exposed to them, so a miss
    /// here is a programming error surfaced as `InvalidTarget`.
    pub fn navigate_to(&mut self, to: Screen) -> Result<Screen, NavError> {
        let from = self.current();
        let signal = from
            .signals()
            .iter()
            .copied()
            .find(|s| transition(from, *s) == Some(to))
            .ok_or(NavError::InvalidTarget { from, to })?;
        self.signal(signal)
    }

    fn cancel_splash_timer(&mut self) {
        if let Some(timer) = self.splash_timer.take() {
            timer.abort();
        }
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NavController {
    fn drop(&mut self) {
        self.cancel_splash_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_splash_advances_after_delay_and_not_before() {
        let controller = NavController::new();
        assert_eq!(controller.current(), Screen::Splash);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(controller.current(), Screen::Splash);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(controller.current(), Screen::WhoIsUsing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_splash_timer() {
        let controller = NavController::new();
        let reader = controller.reader();

        tokio::time::sleep(Duration::from_millis(500)).await;
        drop(controller);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(reader.current(), Screen::Splash);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_walk_through_the_app() {
        let mut nav = NavController::new();
        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert_eq!(nav.current(), Screen::WhoIsUsing);

        assert_eq!(nav.signal(NavSignal::Continue), Ok(Screen::Onboarding));
        assert_eq!(
            nav.signal(NavSignal::OnboardingComplete),
            Ok(Screen::Dashboard)
        );
        assert_eq!(nav.signal(NavSignal::OpenLearning), Ok(Screen::Learning));
        assert_eq!(nav.signal(NavSignal::StartQuiz), Ok(Screen::Quiz));
        assert_eq!(nav.signal(NavSignal::Back), Ok(Screen::Learning));
        assert_eq!(nav.signal(NavSignal::StartGame), Ok(Screen::Game));
        assert_eq!(nav.signal(NavSignal::Back), Ok(Screen::Learning));
        assert_eq!(nav.signal(NavSignal::Back), Ok(Screen::Dashboard));
        assert_eq!(nav.signal(NavSignal::OpenWallet), Ok(Screen::Wallet));
        assert_eq!(nav.signal(NavSignal::Back), Ok(Screen::Dashboard));
        assert_eq!(nav.signal(NavSignal::OpenSettings), Ok(Screen::Settings));
        assert_eq!(nav.signal(NavSignal::Back), Ok(Screen::Dashboard));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_signal_leaves_state_unchanged() {
        let mut nav = NavController::new();
        tokio::time::sleep(Duration::from_millis(2001)).await;

        let err = nav.signal(NavSignal::Back).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidSignal {
                from: Screen::WhoIsUsing,
                signal: NavSignal::Back,
            }
        );
        assert_eq!(nav.current(), Screen::WhoIsUsing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigate_to_checks_the_edge_set() {
        let mut nav = NavController::new();
        tokio::time::sleep(Duration::from_millis(2001)).await;
        nav.signal(NavSignal::Continue).unwrap();
        nav.signal(NavSignal::OnboardingComplete).unwrap();

        assert_eq!(nav.navigate_to(Screen::Wallet), Ok(Screen::Wallet));
        assert_eq!(
            nav.navigate_to(Screen::Quiz),
            Err(NavError::InvalidTarget {
                from: Screen::Wallet,
                to: Screen::Quiz,
            })
        );
    }
}
