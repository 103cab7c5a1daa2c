//! Landing section: greeting, name and a typewriter cycling through phrases.

use std::time::{Duration, Instant};

use folio_types::SectionSpec;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::SectionView;
use crate::app::App;
use crate::ui::runtime::IDLE_TICK;
use crate::ui::theme::{Theme, theme_helpers as th};

const TYPE_DELAY: Duration = Duration::from_millis(150);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(1500);
const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);

/// Types a phrase one character at a time, holds it, deletes it, then moves
/// on to the next phrase. The first character appears immediately.
#[derive(Debug, Clone)]
pub(crate) struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    chars: usize,
    deleting: bool,
    next_step_at: Instant,
}

impl Typewriter {
    pub fn new(phrases: &[String], now: Instant) -> Self {
        Self {
            phrases: phrases
                .iter()
                .filter(|phrase| !phrase.is_empty())
                .map(|phrase| phrase.chars().collect())
                .collect(),
            phrase: 0,
            chars: 0,
            deleting: false,
            next_step_at: now,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Text currently shown.
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|phrase| phrase[..self.chars].iter().collect())
            .unwrap_or_default()
    }

    /// Whether the next step falls within `window` of `now`.
    pub fn is_due_within(&self, now: Instant, window: Duration) -> bool {
        !self.is_idle() && self.next_step_at <= now + window
    }

    /// Runs every step that is due at `now`.
    pub fn advance(&mut self, now: Instant) {
        if self.is_idle() {
            return;
        }
        while now >= self.next_step_at {
            let delay = self.step();
            self.next_step_at += delay;
        }
    }

    fn step(&mut self) -> Duration {
        let length = self.phrases[self.phrase].len();
        if self.deleting {
            self.chars -= 1;
            if self.chars == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                return NEXT_PHRASE_DELAY;
            }
            DELETE_DELAY
        } else {
            self.chars += 1;
            if self.chars == length {
                self.deleting = true;
                return HOLD_DELAY;
            }
            TYPE_DELAY
        }
    }
}

pub(crate) struct HomeView {
    typewriter: Typewriter,
}

pub(crate) fn create(_spec: &SectionSpec, app: &App) -> Box<dyn SectionView> {
    Box::new(HomeView {
        typewriter: Typewriter::new(&app.profile.phrases, app.now),
    })
}

impl SectionView for HomeView {
    fn tick(&mut self, now: Instant) {
        self.typewriter.advance(now);
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.typewriter.is_due_within(now, IDLE_TICK)
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &*app.theme;
        Block::default().style(th::background_style(theme)).render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled("Hi, I am", theme.text_secondary_style())),
            Line::default(),
            Line::from(Span::styled(
                app.profile.full_name.clone(),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        if !self.typewriter.is_idle() {
            lines.push(Line::from(vec![
                Span::styled("I am ", theme.text_primary_style()),
                Span::styled(self.typewriter.text(), theme.accent_emphasis_style()),
                Span::styled("|", theme.accent_style().add_modifier(Modifier::SLOW_BLINK)),
            ]));
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(app.profile.headline.clone(), theme.text_muted_style())));

        let [body] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        Paragraph::new(lines).centered().render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases() -> Vec<String> {
        vec!["ab".to_string(), "xyz".to_string()]
    }

    #[test]
    fn first_character_is_typed_immediately() {
        let start = Instant::now();
        let mut typewriter = Typewriter::new(&phrases(), start);
        assert_eq!(typewriter.text(), "");
        typewriter.advance(start);
        assert_eq!(typewriter.text(), "a");
        typewriter.advance(start + Duration::from_millis(149));
        assert_eq!(typewriter.text(), "a");
        typewriter.advance(start + TYPE_DELAY);
        assert_eq!(typewriter.text(), "ab");
    }

    #[test]
    fn holds_then_deletes_then_moves_to_the_next_phrase() {
        let start = Instant::now();
        let mut typewriter = Typewriter::new(&phrases(), start);
        // "ab" complete at 150ms, held for 1500ms.
        typewriter.advance(start + Duration::from_millis(1649));
        assert_eq!(typewriter.text(), "ab");
        typewriter.advance(start + Duration::from_millis(1650));
        assert_eq!(typewriter.text(), "a");
        // Last deletion at 1700ms, then a 500ms pause before "x".
        typewriter.advance(start + Duration::from_millis(2199));
        assert_eq!(typewriter.text(), "");
        typewriter.advance(start + Duration::from_millis(2200));
        assert_eq!(typewriter.text(), "x");
    }

    #[test]
    fn wraps_around_to_the_first_phrase() {
        let start = Instant::now();
        let mut typewriter = Typewriter::new(&["a".to_string()], start);
        typewriter.advance(start);
        assert_eq!(typewriter.text(), "a");
        typewriter.advance(start + HOLD_DELAY);
        assert_eq!(typewriter.text(), "");
        typewriter.advance(start + HOLD_DELAY + NEXT_PHRASE_DELAY);
        assert_eq!(typewriter.text(), "a");
    }

    #[test]
    fn long_holds_let_the_ticker_idle() {
        let start = Instant::now();
        let mut typewriter = Typewriter::new(&phrases(), start);
        assert!(typewriter.is_due_within(start, IDLE_TICK));
        // "ab" is complete at 150ms; the next step is the delete at 1650ms.
        typewriter.advance(start + TYPE_DELAY);
        assert_eq!(typewriter.text(), "ab");
        assert!(!typewriter.is_due_within(start + TYPE_DELAY, IDLE_TICK));
        assert!(!typewriter.is_due_within(start + Duration::from_millis(600), IDLE_TICK));
        assert!(typewriter.is_due_within(start + Duration::from_millis(650), IDLE_TICK));
    }

    #[test]
    fn no_phrases_means_no_animation() {
        let start = Instant::now();
        let mut typewriter = Typewriter::new(&[String::new()], start);
        typewriter.advance(start + Duration::from_secs(10));
        assert!(typewriter.is_idle());
        assert!(!typewriter.is_due_within(start, IDLE_TICK));
        assert_eq!(typewriter.text(), "");
    }
}
