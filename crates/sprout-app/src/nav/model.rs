//! Screen and signal definitions for the navigation state machine.

use serde::{Deserialize, Serialize};

/// One full-tree view shown to the user. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Splash,
    WhoIsUsing,
    Onboarding,
    Dashboard,
    Learning,
    Quiz,
    Game,
    Wallet,
    Settings,
}

impl Screen {
    /// Parse from string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "whoIsUsing" => Self::WhoIsUsing,
            "onboarding" => Self::Onboarding,
            "dashboard" => Self::Dashboard,
            "learning" => Self::Learning,
            "quiz" => Self::Quiz,
            "game" => Self::Game,
            "wallet" => Self::Wallet,
            "settings" => Self::Settings,
            _ => Self::Splash,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::WhoIsUsing => "whoIsUsing",
            Self::Onboarding => "onboarding",
            Self::Dashboard => "dashboard",
            Self::Learning => "learning",
            Self::Quiz => "quiz",
            Self::Game => "game",
            Self::Wallet => "wallet",
            Self::Settings => "settings",
        }
    }

    /// Check if a direct transition to another screen exists.
    pub fn can_transition_to(&self, to: &Self) -> bool {
        self.signals()
            .iter()
            .any(|s| transition(*self, *s) == Some(*to))
    }

    /// The signals with an outbound edge from this screen.
    pub fn signals(&self) -> &'static [NavSignal] {
        use NavSignal::*;
        match self {
            Self::Splash => &[SplashElapsed],
            Self::WhoIsUsing => &[Continue],
            Self::Onboarding => &[OnboardingComplete],
            Self::Dashboard => &[OpenLearning, OpenWallet, OpenSettings],
            Self::Learning => &[StartQuiz, StartGame, Back],
            Self::Quiz => &[Back],
            Self::Game => &[Back],
            Self::Wallet => &[Back],
            Self::Settings => &[Back],
        }
    }
}

/// A navigation trigger. One variant per outbound edge kind; `Back` covers
/// the single-predecessor return edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSignal {
    /// Splash delay elapsed (fired by the controller's timer, never by screens).
    SplashElapsed,
    /// Profile chosen on the who-is-using screen. Any profile choice
    /// produces the same transition.
    Continue,
    /// Onboarding finished.
    OnboardingComplete,
    OpenLearning,
    OpenWallet,
    OpenSettings,
    StartQuiz,
    StartGame,
    /// Return to the immediate predecessor. Not a history stack.
    Back,
}

/// The fixed, directional transition table: source screen and signal map
/// to exactly one target screen, or to nothing.
pub fn transition(from: Screen, signal: NavSignal) -> Option<Screen> {
    use NavSignal::*;
    use Screen::*;
    match (from, signal) {
        (Splash, SplashElapsed) => Some(WhoIsUsing),
        (WhoIsUsing, Continue) => Some(Onboarding),
        (Onboarding, OnboardingComplete) => Some(Dashboard),
        (Dashboard, OpenLearning) => Some(Learning),
        (Dashboard, OpenWallet) => Some(Wallet),
        (Dashboard, OpenSettings) => Some(Settings),
        (Learning, StartQuiz) => Some(Quiz),
        (Learning, StartGame) => Some(Game),
        (Learning, Back) => Some(Dashboard),
        (Quiz, Back) => Some(Learning),
        (Game, Back) => Some(Learning),
        (Wallet, Back) => Some(Dashboard),
        (Settings, Back) => Some(Dashboard),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavSignal::*;
    use Screen::*;

    #[test]
    fn test_every_edge() {
        let edges = [
            (Splash, SplashElapsed, WhoIsUsing),
            (WhoIsUsing, Continue, Onboarding),
            (Onboarding, OnboardingComplete, Dashboard),
            (Dashboard, OpenLearning, Learning),
            (Dashboard, OpenWallet, Wallet),
            (Dashboard, OpenSettings, Settings),
            (Learning, StartQuiz, Quiz),
            (Learning, StartGame, Game),
            (Learning, Back, Dashboard),
            (Quiz, Back, Learning),
            (Game, Back, Learning),
            (Wallet, Back, Dashboard),
            (Settings, Back, Dashboard),
        ];
        for (from, signal, to) in edges {
            assert_eq!(transition(from, signal), Some(to), "{from:?} --{signal:?}");
            assert!(from.can_transition_to(&to));
        }
    }

    #[test]
    fn test_undefined_signals_have_no_edge() {
        assert_eq!(transition(Splash, Continue), None);
        assert_eq!(transition(Dashboard, Back), None);
        assert_eq!(transition(Quiz, StartQuiz), None);
        assert_eq!(transition(Wallet, OpenSettings), None);
        assert_eq!(transition(Settings, SplashElapsed), None);
    }

    #[test]
    fn test_no_screen_reachable_from_everywhere() {
        // Directional table: the dashboard is not reachable from splash in
        // one hop, and splash is terminal-entry only.
        assert!(!Splash.can_transition_to(&Dashboard));
        for screen in [
            Splash, WhoIsUsing, Onboarding, Dashboard, Learning, Quiz, Game, Wallet, Settings,
        ] {
            assert!(!screen.can_transition_to(&Splash));
        }
    }

    #[test]
    fn test_screen_names_roundtrip() {
        for screen in [
            WhoIsUsing, Onboarding, Dashboard, Learning, Quiz, Game, Wallet, Settings, Splash,
        ] {
            assert_eq!(Screen::from_str(screen.as_str()), screen);
        }
    }
}
