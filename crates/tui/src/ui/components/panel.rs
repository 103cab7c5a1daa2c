//! Collapsible navigation panel for the mobile layout.
//!
//! The panel slides in from the left edge and lists the same entries as the
//! desktop rail. An accepted selection closes it; so does a click on the
//! backdrop.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_engine::Tween;
use folio_types::{Effect, SectionId};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::nav_bar::RAIL_ROW_PITCH;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;
use crate::ui::utils::{blit, find_target_index_by_mouse_position, percent_to_cells};

const PANEL_MAX_WIDTH: u16 = 30;
const CLOSED_PERCENT: f32 = -100.0;
const OPEN_PERCENT: f32 = 0.0;

#[derive(Debug)]
pub struct PanelState {
    open: bool,
    slide: Tween,
    duration: Duration,
    /// Area covered by the panel and its backdrop during the last render.
    pub last_area: Rect,
    pub per_item_areas: Vec<Rect>,
    /// Visible part of the panel itself, excluding the backdrop.
    pub surface_area: Rect,
    /// The top bar's menu button.
    pub menu_button_area: Rect,
}

impl PanelState {
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            open: false,
            slide: Tween::settled(CLOSED_PERCENT, now, duration),
            duration,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
            surface_area: Rect::default(),
            menu_button_area: Rect::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, now: Instant) {
        self.open = true;
        self.slide.retarget(OPEN_PERCENT, now);
    }

    pub fn close(&mut self, now: Instant) {
        self.open = false;
        self.slide.retarget(CLOSED_PERCENT, now);
    }

    /// Closes without the slide-out, e.g. when the layout leaves mobile.
    pub fn close_immediately(&mut self, now: Instant) {
        self.open = false;
        self.slide = Tween::settled(CLOSED_PERCENT, now, self.duration);
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.open { self.close(now) } else { self.open(now) }
    }

    /// Horizontal offset in percent of the panel width; `-100` is fully hidden.
    pub fn offset_percent(&self, now: Instant) -> f32 {
        self.slide.value_at(now)
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.open || self.offset_percent(now) > CLOSED_PERCENT
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.slide.is_settled(now)
    }
}

#[derive(Debug, Default)]
pub struct PanelComponent;

impl PanelComponent {
    fn render_panel(app: &App, area: Rect, buf: &mut Buffer) -> Vec<Rect> {
        let theme = &*app.theme;
        let block: Block = th::chrome_block(theme, true);
        let inner = block.inner(area);
        block.render(area, buf);

        let header = vec![
            Line::from(Span::styled(app.profile.name.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(app.profile.badge.clone(), theme.accent_style())),
        ];
        Paragraph::new(header).render(inner, buf);

        let top = inner.y.saturating_add(3);
        let active = app.navigation.active_index();
        let mut rows = Vec::with_capacity(app.rail.items.len());
        for (index, item) in app.rail.items.iter().enumerate() {
            let y = top + index as u16 * RAIL_ROW_PITCH;
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            let (marker, style) = if index == active {
                ("▌ ", theme.accent_emphasis_style())
            } else {
                ("  ", theme.text_secondary_style())
            };
            Paragraph::new(Line::from(vec![
                Span::styled(marker, theme.accent_style()),
                Span::styled(format!("{} {}", item.icon, item.label), style),
            ]))
            .render(row, buf);
            rows.push(row);
        }
        rows
    }

    fn selected_entry(app: &App, mouse: &MouseEvent) -> Option<SectionId> {
        find_target_index_by_mouse_position(&app.panel.last_area, &app.panel.per_item_areas, mouse.column, mouse.row)
            .and_then(|index| app.rail.items.get(index))
            .map(|item| item.id.clone())
    }
}

impl Component for PanelComponent {
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if !app.panel.is_open() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match Self::selected_entry(app, &mouse) {
            Some(id) => {
                let _ = app.select_section(id.as_str());
            }
            None => {
                let point = Position::new(mouse.column, mouse.row);
                if app.panel.last_area.contains(point) && !app.panel.surface_area.contains(point) {
                    app.panel.close(app.now);
                }
            }
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        if !app.panel.is_visible(app.now) {
            app.panel.per_item_areas.clear();
            return;
        }
        frame.render_widget(Block::default().style(app.theme.backdrop_style()), area);

        let width = area.width.min(PANEL_MAX_WIDTH);
        let mut scratch = Buffer::empty(Rect::new(0, 0, width, area.height));
        let rows = Self::render_panel(app, scratch.area, &mut scratch);

        let dx = percent_to_cells(app.panel.offset_percent(app.now), width);
        blit(&scratch, frame.buffer_mut(), area, dx, 0);

        let visible_width = u16::try_from(i32::from(width) + dx).unwrap_or(0);
        app.panel.last_area = area;
        app.panel.surface_area = Rect::new(area.x, area.y, visible_width, area.height);
        app.panel.per_item_areas = rows
            .into_iter()
            .filter_map(|row| {
                let x = i32::from(area.x) + dx + i32::from(row.x);
                let x = u16::try_from(x).ok()?;
                Some(Rect::new(x, area.y + row.y, row.width, row.height))
            })
            .collect();
    }
}
