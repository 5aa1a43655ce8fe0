// State management module
// Result history, agent badge highlighting and animation state

/// Startup reveal and placeholder typing
pub mod animation;
/// Agent badge highlighting
pub mod badges;
/// Result cards and history
pub mod results;

pub use animation::{ConsoleAnimations, PanelReveal, PlaceholderTyper, TyperTiming, PANEL_COUNT};
pub use badges::{AgentBadges, AgentKind};
pub use results::{CardKind, ResultCard, ResultsList, WELCOME_MESSAGE};
