// Agent status badges
// Highlights the agent that answered the last query for a short while

use std::time::{Duration, Instant};

/// Default highlight duration
pub const DEFAULT_HIGHLIGHT: Duration = Duration::from_secs(3);

/// Agent categories shown in the status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Weather lookups
    Weather,
    /// External data sources (quotes, jokes, facts, ...)
    Api,
    /// Calculations
    Math,
}

impl AgentKind {
    /// All kinds, in match priority order
    pub const ALL: [AgentKind; 3] = [AgentKind::Weather, AgentKind::Api, AgentKind::Math];

    /// Display name of the badge
    pub fn title(self) -> &'static str {
        match self {
            AgentKind::Weather => "Weather Agent",
            AgentKind::Api => "API Agent",
            AgentKind::Math => "Math Agent",
        }
    }

    /// Short description under the title
    pub fn description(self) -> &'static str {
        match self {
            AgentKind::Weather => "Real-time weather data",
            AgentKind::Api => "Quotes, jokes and facts",
            AgentKind::Math => "Calculations and formulas",
        }
    }

    /// Case-sensitive substring looked for in `agent_used`
    fn marker(self) -> &'static str {
        match self {
            AgentKind::Weather => "Weather",
            AgentKind::Api => "API",
            AgentKind::Math => "Math",
        }
    }

    /// Match an agent label to a badge; first marker in priority order wins
    pub fn from_agent_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| label.contains(kind.marker()))
    }
}

#[derive(Debug, Clone, Copy)]
struct Highlight {
    kind: AgentKind,
    until: Instant,
}

/// Highlight state of the three badges (at most one active)
#[derive(Debug, Clone)]
pub struct AgentBadges {
    highlight: Option<Highlight>,
    duration: Duration,
}

impl Default for AgentBadges {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT)
    }
}

impl AgentBadges {
    /// Create badges that stay highlighted for `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            highlight: None,
            duration,
        }
    }

    /// Highlight the badge matching `agent_label`
    ///
    /// Any previous highlight is dropped, even if nothing matches.
    pub fn activate(&mut self, agent_label: &str, now: Instant) -> Option<AgentKind> {
        self.highlight = AgentKind::from_agent_label(agent_label).map(|kind| Highlight {
            kind,
            until: now + self.duration,
        });
        self.active()
    }

    /// Remove any highlight
    pub fn clear(&mut self) {
        self.highlight = None;
    }

    /// Drop the highlight if its time is up; returns true if one was dropped
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.highlight {
            Some(h) if now >= h.until => {
                self.highlight = None;
                true
            }
            _ => false,
        }
    }

    /// Currently highlighted badge
    pub fn active(&self) -> Option<AgentKind> {
        self.highlight.map(|h| h.kind)
    }

    /// Whether `kind` is highlighted
    pub fn is_active(&self, kind: AgentKind) -> bool {
        self.active() == Some(kind)
    }

    /// When the current highlight ends
    pub fn deadline(&self) -> Option<Instant> {
        self.highlight.map(|h| h.until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matching() {
        assert_eq!(AgentKind::from_agent_label("Weather Agent"), Some(AgentKind::Weather));
        assert_eq!(AgentKind::from_agent_label("API Agent"), Some(AgentKind::Api));
        assert_eq!(AgentKind::from_agent_label("Math Tool"), Some(AgentKind::Math));
        assert_eq!(AgentKind::from_agent_label("Search Agent"), None);
        // Case-sensitive
        assert_eq!(AgentKind::from_agent_label("weather agent"), None);
        assert_eq!(AgentKind::from_agent_label("Api Agent"), None);
    }

    #[test]
    fn test_weather_wins_over_api() {
        assert_eq!(
            AgentKind::from_agent_label("Weather API Agent"),
            Some(AgentKind::Weather)
        );
        assert_eq!(AgentKind::from_agent_label("Math via API"), Some(AgentKind::Api));
    }

    #[test]
    fn test_activate_only_one() {
        let now = Instant::now();
        let mut badges = AgentBadges::default();

        assert_eq!(badges.activate("Weather Agent", now), Some(AgentKind::Weather));
        assert!(badges.is_active(AgentKind::Weather));
        assert!(!badges.is_active(AgentKind::Api));
        assert!(!badges.is_active(AgentKind::Math));

        assert_eq!(badges.activate("Math Tool", now), Some(AgentKind::Math));
        assert!(!badges.is_active(AgentKind::Weather));
        assert!(badges.is_active(AgentKind::Math));
    }

    #[test]
    fn test_unrecognized_label_clears() {
        let now = Instant::now();
        let mut badges = AgentBadges::default();
        badges.activate("API Agent", now);
        assert_eq!(badges.activate("Oracle", now), None);
        assert!(badges.active().is_none());
    }

    #[test]
    fn test_expires_after_duration() {
        let now = Instant::now();
        let mut badges = AgentBadges::default();
        badges.activate("Weather Agent", now);

        assert!(!badges.expire(now + Duration::from_millis(2999)));
        assert!(badges.is_active(AgentKind::Weather));

        assert!(badges.expire(now + Duration::from_secs(3)));
        assert!(badges.active().is_none());
        assert!(badges.deadline().is_none());
    }

    #[test]
    fn test_reactivation_gets_full_duration() {
        let now = Instant::now();
        let mut badges = AgentBadges::default();
        badges.activate("Weather Agent", now);
        badges.activate("Math Agent", now + Duration::from_secs(2));

        assert!(!badges.expire(now + Duration::from_secs(4)));
        assert!(badges.is_active(AgentKind::Math));
        assert!(badges.expire(now + Duration::from_secs(5)));
    }
}
