// Decorative animations
// Panel fade-in on startup and the typing placeholder in the query box.
// Both are advanced by the frame loop; nothing here runs on its own.

use std::time::{Duration, Instant};

/// Number of panels revealed on startup (agent status, query, results)
pub const PANEL_COUNT: usize = 3;

/// Frame interval used while the reveal is still moving
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Staggered fade/slide-in of the main panels
#[derive(Debug, Clone)]
pub struct PanelReveal {
    started: Instant,
    stagger: Duration,
    duration: Duration,
    rise: f32,
}

impl PanelReveal {
    /// Reveal starting at `started`: 200ms stagger, 600ms per panel, 30px rise
    pub fn new(started: Instant) -> Self {
        Self {
            started,
            stagger: Duration::from_millis(200),
            duration: Duration::from_millis(600),
            rise: 30.0,
        }
    }

    /// Linear progress of panel `index` in `0.0..=1.0`
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        let start = self.started + self.stagger * index as u32;
        if now < start {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        ((now - start).as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Opacity of panel `index`
    pub fn opacity(&self, index: usize, now: Instant) -> f32 {
        ease(self.progress(index, now))
    }

    /// Remaining downward offset of panel `index`, in points
    pub fn offset(&self, index: usize, now: Instant) -> f32 {
        self.rise * (1.0 - ease(self.progress(index, now)))
    }

    /// Whether every panel has finished moving
    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(PANEL_COUNT - 1, now) >= 1.0
    }
}

fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Timing of the placeholder typing loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TyperTiming {
    /// Delay before the first character appears
    pub start_delay: Duration,
    /// Interval between typed characters
    pub type_step: Duration,
    /// Interval between deleted characters
    pub delete_step: Duration,
    /// Pause at full length before deleting
    pub hold: Duration,
}

impl Default for TyperTiming {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(1000),
            type_step: Duration::from_millis(100),
            delete_step: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TyperPhase {
    Typing,
    Holding,
    Deleting,
}

/// Types and deletes the placeholder text one character at a time, forever
#[derive(Debug, Clone)]
pub struct PlaceholderTyper {
    text: String,
    /// Byte offset of every char boundary, including the end
    boundaries: Vec<usize>,
    visible: usize,
    phase: TyperPhase,
    next_step: Instant,
    timing: TyperTiming,
}

impl PlaceholderTyper {
    /// Start the loop for `text` at `now`
    pub fn new(text: impl Into<String>, timing: TyperTiming, now: Instant) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let min_step = Duration::from_millis(1);
        let timing = TyperTiming {
            type_step: timing.type_step.max(min_step),
            delete_step: timing.delete_step.max(min_step),
            ..timing
        };

        Self {
            text,
            boundaries,
            visible: 0,
            phase: TyperPhase::Typing,
            next_step: now + timing.start_delay,
            timing,
        }
    }

    fn char_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn cycle_length(&self) -> Duration {
        let chars = self.char_count() as u32;
        self.timing.type_step * chars + self.timing.hold + self.timing.delete_step * chars
    }

    /// Advance every step that is due; returns true if the text changed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.char_count() == 0 {
            return false;
        }

        // After a long stall (minimised window) resume from now instead of replaying
        if now.saturating_duration_since(self.next_step) > self.cycle_length() {
            self.next_step = now;
        }

        let before = self.visible;
        while now >= self.next_step {
            self.step();
        }
        before != self.visible
    }

    fn step(&mut self) {
        let total = self.char_count();
        match self.phase {
            TyperPhase::Typing => {
                self.visible += 1;
                if self.visible >= total {
                    self.phase = TyperPhase::Holding;
                    self.next_step += self.timing.hold;
                } else {
                    self.next_step += self.timing.type_step;
                }
            }
            TyperPhase::Holding | TyperPhase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.phase = TyperPhase::Typing;
                    self.next_step += self.timing.type_step;
                } else {
                    self.phase = TyperPhase::Deleting;
                    self.next_step += self.timing.delete_step;
                }
            }
        }
    }

    /// Currently visible prefix
    pub fn visible_text(&self) -> &str {
        &self.text[..self.boundaries[self.visible]]
    }

    /// Full placeholder text
    pub fn full_text(&self) -> &str {
        &self.text
    }

    /// When the next character changes
    pub fn next_deadline(&self) -> Option<Instant> {
        (self.char_count() > 0).then_some(self.next_step)
    }
}

/// Animation state owned by the window
#[derive(Debug, Clone)]
pub struct ConsoleAnimations {
    reveal: Option<PanelReveal>,
    typer: Option<PlaceholderTyper>,
    hint: String,
}

impl ConsoleAnimations {
    /// Start the animations, or build a static variant when disabled
    pub fn new(hint: impl Into<String>, enabled: bool, now: Instant) -> Self {
        let hint = hint.into();
        if !enabled {
            return Self {
                reveal: None,
                typer: None,
                hint,
            };
        }
        Self {
            reveal: Some(PanelReveal::new(now)),
            typer: Some(PlaceholderTyper::new(hint.clone(), TyperTiming::default(), now)),
            hint,
        }
    }

    /// Advance the animations; returns true if a repaint is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        let typed = self.typer.as_mut().is_some_and(|t| t.tick(now));
        let moving = self.reveal.as_ref().is_some_and(|r| !r.is_settled(now));
        typed || moving
    }

    /// Hint text to show in the query box
    pub fn hint_text(&self) -> &str {
        match &self.typer {
            Some(typer) => typer.visible_text(),
            None => &self.hint,
        }
    }

    /// Opacity of panel `index`
    pub fn panel_opacity(&self, index: usize, now: Instant) -> f32 {
        self.reveal.as_ref().map_or(1.0, |r| r.opacity(index, now))
    }

    /// Downward offset of panel `index`
    pub fn panel_offset(&self, index: usize, now: Instant) -> f32 {
        self.reveal.as_ref().map_or(0.0, |r| r.offset(index, now))
    }

    /// Next instant a repaint is needed for the animations
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        if self.reveal.as_ref().is_some_and(|r| !r.is_settled(now)) {
            return Some(now + FRAME_INTERVAL);
        }
        self.typer.as_ref().and_then(|t| t.next_deadline())
    }
}
