//! The demo host page: one option list, offered to a multi-select and a single-select dropdown.

use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Modifier;

use crate::dropdown::DropdownAction;
use crate::dropdown::DropdownOptions;
use crate::dropdown::SelectDropdown;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::listener::PointerListeners;
use crate::listener::SubscriptionId;
use crate::options::OptionSet;
use crate::render;
use crate::theme::Theme;

pub const DEMO_OPTIONS: [&str; 10] = [
    "First",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "twenty-five",
];

pub const MULTI_HEADING: &str = "Multi-select dropdown:";
pub const SINGLE_HEADING: &str = "Single-select dropdown:";
const HELP: &str = "click: toggle / select • ×: remove • wheel: scroll • q: quit";

/// Widest a dropdown gets, in columns.
const MAX_WIDGET_W: u16 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    None,
    Redraw,
    Quit,
}

/// Which dropdown on the page an event concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Multi,
    Single,
}

impl Slot {
    fn name(self) -> &'static str {
        match self {
            Self::Multi => "multi",
            Self::Single => "single",
        }
    }
}

/// Hosts the two demo dropdowns and the page-wide pointer registry they are mounted on.
///
/// Every pointer press goes through the registry first, so an open list closes when the press
/// lands anywhere else, including on the other dropdown. The press is then routed to whichever
/// dropdown it landed on.
#[derive(Debug)]
pub struct DemoPage {
    listeners: PointerListeners,
    multi: SelectDropdown,
    single: SelectDropdown,
}

impl Default for DemoPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoPage {
    pub fn new() -> Self {
        Self::with_options(OptionSet::new(DEMO_OPTIONS))
    }

    pub fn with_options(option_set: OptionSet) -> Self {
        let listeners = PointerListeners::new();
        let mut multi = SelectDropdown::new(
            option_set.clone(),
            DropdownOptions {
                multi_select: true,
                ..Default::default()
            },
        );
        let mut single = SelectDropdown::new(
            option_set,
            DropdownOptions {
                multi_select: false,
                placeholder: Some("Select...".to_string()),
                ..Default::default()
            },
        );
        multi.mount(&listeners);
        single.mount(&listeners);
        Self {
            listeners,
            multi,
            single,
        }
    }

    pub fn listeners(&self) -> &PointerListeners {
        &self.listeners
    }

    pub fn multi(&self) -> &SelectDropdown {
        &self.multi
    }

    pub fn single(&self) -> &SelectDropdown {
        &self.single
    }

    pub fn dropdown(&self, slot: Slot) -> &SelectDropdown {
        match slot {
            Slot::Multi => &self.multi,
            Slot::Single => &self.single,
        }
    }

    fn dropdown_mut(&mut self, slot: Slot) -> &mut SelectDropdown {
        match slot {
            Slot::Multi => &mut self.multi,
            Slot::Single => &mut self.single,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> PageAction {
        match event {
            InputEvent::Key(key) => self.handle_key(&key),
            InputEvent::Mouse(m) => self.handle_mouse(m),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> PageAction {
        let quit = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => !key.modifiers.ctrl,
            KeyCode::Char('c') => key.modifiers.ctrl,
            _ => false,
        };
        if quit {
            tracing::info!(event = "page.quit");
            PageAction::Quit
        } else {
            PageAction::None
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> PageAction {
        let position = event.position();
        match event.kind {
            MouseEventKind::Down(_) => {
                let before = self.open_flags();
                let target = self.listeners.pointer_down(position);
                let mut changed = self.open_flags() != before;
                if let Some(slot) = target.and_then(|id| self.slot_for(id)) {
                    changed |= self.route(slot, event);
                }
                if changed {
                    PageAction::Redraw
                } else {
                    PageAction::None
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let Some(slot) = self
                    .listeners
                    .target_at(position)
                    .and_then(|id| self.slot_for(id))
                else {
                    return PageAction::None;
                };
                if self.route(slot, event) {
                    PageAction::Redraw
                } else {
                    PageAction::None
                }
            }
            MouseEventKind::Up(_) => PageAction::None,
        }
    }

    fn route(&mut self, slot: Slot, event: MouseEvent) -> bool {
        match self.dropdown_mut(slot).handle_mouse_event(event) {
            DropdownAction::None => false,
            DropdownAction::Redraw => true,
            DropdownAction::SelectionChanged => {
                let labels = self.dropdown(slot).selection().labels().to_vec();
                tracing::info!(
                    event = "page.selection_changed",
                    dropdown = slot.name(),
                    selection = ?labels
                );
                true
            }
        }
    }

    fn slot_for(&self, id: SubscriptionId) -> Option<Slot> {
        if self.multi.subscription_id() == Some(id) {
            Some(Slot::Multi)
        } else if self.single.subscription_id() == Some(id) {
            Some(Slot::Single)
        } else {
            None
        }
    }

    fn open_flags(&self) -> (bool, bool) {
        (self.multi.is_open(), self.single.is_open())
    }

    /// Lays out headings, dropdowns and the help line inside `area`.
    ///
    /// The single-select dropdown is drawn first so the multi-select list, when open, covers it.
    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, theme.text_primary);

        let body_bottom = area.bottom().saturating_sub(1).max(area.y);
        let widget_w = area.width.min(MAX_WIDGET_W);
        let heading_style = theme.text_primary.add_modifier(Modifier::BOLD);

        let multi_heading_y = area.y;
        let multi_y = multi_heading_y + 1;
        let multi_h = self.multi.header_height(widget_w);
        let single_heading_y = multi_y.saturating_add(multi_h).saturating_add(1);
        let single_y = single_heading_y.saturating_add(1);

        let heading = |buf: &mut Buffer, y: u16, text: &str| {
            if y < body_bottom {
                render::render_str_clipped(area.x, y, area.width, buf, text, heading_style);
            }
        };
        heading(buf, multi_heading_y, MULTI_HEADING);
        heading(buf, single_heading_y, SINGLE_HEADING);

        let widget_area = |y: u16| {
            Rect::new(area.x, y, widget_w, body_bottom.saturating_sub(y))
        };
        self.single.render_ref(widget_area(single_y), buf, theme);
        self.multi.render_ref(widget_area(multi_y), buf, theme);

        if area.height > 1 {
            render::render_str_clipped(
                area.x,
                area.bottom() - 1,
                area.width,
                buf,
                HELP,
                theme.text_muted,
            );
        }
    }

    /// Where a press would land, for hosts that want to hit-test without dispatching.
    pub fn slot_at(&self, position: Position) -> Option<Slot> {
        self.listeners
            .target_at(position)
            .and_then(|id| self.slot_for(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(page: &mut DemoPage) -> Buffer {
        let area = Rect::new(0, 0, 50, 24);
        let mut buf = Buffer::empty(area);
        page.render_ref(area, &mut buf, &Theme::default());
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn both_dropdowns_are_mounted() {
        let page = DemoPage::new();
        assert_eq!(page.listeners().len(), 2);
        assert!(page.multi().is_mounted());
        assert!(page.single().is_mounted());
        assert_eq!(page.multi().option_set().len(), DEMO_OPTIONS.len());
    }

    #[test]
    fn renders_headings_and_placeholder() {
        let mut page = DemoPage::new();
        let buf = draw(&mut page);
        assert!(row(&buf, 0).starts_with(MULTI_HEADING));
        assert!(row(&buf, 5).starts_with(SINGLE_HEADING));
        assert!(row(&buf, 7).contains("Select..."));
        assert!(row(&buf, 23).starts_with("click: toggle"));
    }

    #[test]
    fn quit_keys() {
        let mut page = DemoPage::new();
        let q = InputEvent::Key(KeyEvent::new(KeyCode::Char('q')));
        assert_eq!(page.handle_event(q), PageAction::Quit);
        let x = InputEvent::Key(KeyEvent::new(KeyCode::Char('x')));
        assert_eq!(page.handle_event(x), PageAction::None);
    }

    #[test]
    fn dropping_the_page_releases_subscriptions() {
        let page = DemoPage::new();
        let listeners = page.listeners().clone();
        drop(page);
        assert!(listeners.is_empty());
    }
}
