//! A select dropdown with single- and multi-selection modes.
//!
//! [`SelectDropdown`] owns all of its interactive state: whether the option list is open and
//! what is selected. The host supplies the [`OptionSet`] and the mode once, renders the widget
//! every frame, and forwards pointer input to it.
//!
//! ## Outside-click dismissal
//!
//! Mount the widget on the host's [`PointerListeners`] registry and feed the registry every
//! pointer press; an open list then closes whenever a press lands anywhere but on this widget.
//! The subscription is released by [`SelectDropdown::unmount`] or when the widget is dropped.
//! Hosts that do not use a registry can call [`SelectDropdown::handle_outside_interaction`].
//!
//! ## Selection changes
//!
//! The widget does not hold a callback. [`SelectDropdown::handle_event`] returns
//! [`DropdownAction::SelectionChanged`] whenever a press changed the selection; read the new
//! value with [`SelectDropdown::selection`].

use std::cell::Cell;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Clear;
use ratatui::widgets::Widget;

use crate::input::InputEvent;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::layout;
use crate::layout::DropdownLayout;
use crate::layout::HeaderSpec;
use crate::layout::Hit;
use crate::layout::ListSpec;
use crate::listener::HitLayer;
use crate::listener::PointerDownListener;
use crate::listener::PointerListeners;
use crate::listener::Subscription;
use crate::listener::SubscriptionId;
use crate::options::OptionSet;
use crate::render;
use crate::selection::SelectionMode;
use crate::selection::SelectionState;
use crate::theme::Theme;
use crate::viewport::ViewportState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownAction {
    None,
    Redraw,
    SelectionChanged,
}

/// Construction-time configuration.
///
/// The symbols are drawn into single cells, so they should be one column wide.
#[derive(Clone, Debug)]
pub struct DropdownOptions {
    pub multi_select: bool,
    /// Rows shown before the option list starts scrolling.
    pub max_visible_options: u16,
    pub show_scrollbar: bool,
    pub placeholder: Option<String>,
    pub toggle_symbol: String,
    pub clear_symbol: String,
    pub tag_close_symbol: String,
    pub divider_symbol: String,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            multi_select: false,
            max_visible_options: 6,
            show_scrollbar: true,
            placeholder: None,
            toggle_symbol: "▼".to_string(),
            clear_symbol: "×".to_string(),
            tag_close_symbol: "×".to_string(),
            divider_symbol: "│".to_string(),
        }
    }
}

impl DropdownOptions {
    pub fn mode(&self) -> SelectionMode {
        if self.multi_select {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }
}

/// Where the widget was last drawn.
#[derive(Clone, Copy, Debug, Default)]
struct Bounds {
    header: Option<Rect>,
    list: Option<Rect>,
}

/// State shared between the widget and its pointer-down subscription.
#[derive(Debug, Default)]
struct Shared {
    open: Cell<bool>,
    bounds: Cell<Bounds>,
}

impl Shared {
    /// The rendered header, plus the list while open. Empty before the first render.
    fn contains(&self, position: Position) -> bool {
        self.hit(position).is_some()
    }

    fn dismiss(&self) -> bool {
        let was_open = self.open.replace(false);
        if was_open {
            tracing::debug!(event = "dropdown.dismissed");
        }
        was_open
    }
}

impl PointerDownListener for Shared {
    fn hit(&self, position: Position) -> Option<HitLayer> {
        let bounds = self.bounds.get();
        if self.open.get() && bounds.list.is_some_and(|r| r.contains(position)) {
            return Some(HitLayer::Overlay);
        }
        bounds
            .header
            .is_some_and(|r| r.contains(position))
            .then_some(HitLayer::Base)
    }

    fn on_pointer_down(&self, inside: bool) {
        if !inside {
            self.dismiss();
        }
    }
}

#[derive(Debug)]
pub struct SelectDropdown {
    option_set: OptionSet,
    options: DropdownOptions,
    selection: SelectionState,
    shared: Rc<Shared>,
    list_state: ViewportState,
    layout: Option<DropdownLayout>,
    subscription: Option<Subscription>,
}

impl SelectDropdown {
    pub fn new(option_set: OptionSet, options: DropdownOptions) -> Self {
        Self {
            selection: SelectionState::new(options.mode()),
            option_set,
            options,
            shared: Rc::new(Shared::default()),
            list_state: ViewportState::default(),
            layout: None,
            subscription: None,
        }
    }

    pub fn single(option_set: OptionSet) -> Self {
        Self::new(option_set, DropdownOptions::default())
    }

    pub fn multi(option_set: OptionSet) -> Self {
        Self::new(
            option_set,
            DropdownOptions {
                multi_select: true,
                ..Default::default()
            },
        )
    }

    pub fn option_set(&self) -> &OptionSet {
        &self.option_set
    }

    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selection.contains(label)
    }

    pub fn is_open(&self) -> bool {
        self.shared.open.get()
    }

    /// Starts listening for pointer presses on `listeners`. Mounting again moves the
    /// subscription; a widget is never registered twice.
    pub fn mount(&mut self, listeners: &PointerListeners) {
        let listener: Rc<dyn PointerDownListener> = self.shared.clone();
        let subscription = listeners.subscribe(listener);
        tracing::debug!(event = "dropdown.mounted", id = ?subscription.id());
        self.subscription = Some(subscription);
    }

    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(event = "dropdown.unmounted", id = ?subscription.id());
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn subscription_id(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    pub fn toggle_open(&mut self) {
        let open = !self.shared.open.get();
        self.shared.open.set(open);
        if open {
            self.list_state.to_top();
            tracing::debug!(event = "dropdown.opened");
        } else {
            tracing::debug!(event = "dropdown.closed");
        }
    }

    /// Selects `label`, which must come from the option set.
    ///
    /// Single mode replaces the selection and closes the list. Multi mode appends `label`
    /// unless it is already selected and leaves the list open.
    /// Returns `true` if the selection changed.
    pub fn select_option(&mut self, label: &str) -> bool {
        debug_assert!(
            self.option_set.contains(label),
            "selected label is not an option"
        );
        let changed = self.selection.select(label);
        if changed {
            tracing::debug!(event = "dropdown.option_selected", label);
        }
        if self.mode() == SelectionMode::Single && self.shared.open.replace(false) {
            tracing::debug!(event = "dropdown.closed");
        }
        changed
    }

    /// Removes `label` in multi mode; clears the selection in single mode.
    /// Returns `true` if the selection changed.
    pub fn remove_selection(&mut self, label: &str) -> bool {
        let changed = self.selection.remove(label);
        if changed {
            tracing::debug!(event = "dropdown.selection_removed", label);
        }
        changed
    }

    /// Returns `true` if anything was selected.
    pub fn clear_all(&mut self) -> bool {
        let changed = self.selection.clear();
        if changed {
            tracing::debug!(event = "dropdown.cleared");
        }
        changed
    }

    /// Closes the list if `position` falls outside the rendered widget. A widget that has not
    /// been rendered yet occupies nothing, so every position is outside it.
    ///
    /// Returns `true` if this closed an open list.
    pub fn handle_outside_interaction(&mut self, position: Position) -> bool {
        if self.shared.contains(position) {
            return false;
        }
        self.shared.dismiss()
    }

    /// Header height, border included, for the current selection at `width` columns.
    pub fn header_height(&self, width: u16) -> u16 {
        layout::header_height(&self.selection, width)
    }

    /// The area covered by the last render, header and list included.
    pub fn rendered_area(&self) -> Option<Rect> {
        let layout = self.layout.as_ref()?;
        Some(match layout.list {
            Some(list) => layout.header.area.union(list.area),
            None => layout.header.area,
        })
    }

    /// Tag labels as last rendered, in display order.
    pub fn rendered_tags(&self) -> Vec<&str> {
        self.layout
            .as_ref()
            .map(|l| l.header.tags.iter().map(|t| t.label.as_str()).collect())
            .unwrap_or_default()
    }

    /// Whether the last render showed the clear-all control.
    pub fn has_clear_control(&self) -> bool {
        self.layout
            .as_ref()
            .is_some_and(|l| l.header.clear.is_some())
    }

    pub fn layout(&self) -> Option<&DropdownLayout> {
        self.layout.as_ref()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> DropdownAction {
        match event {
            InputEvent::Key(_) => DropdownAction::None,
            InputEvent::Mouse(m) => self.handle_mouse_event(m),
        }
    }

    /// Routes a pointer event through the layout of the last render.
    ///
    /// Nested controls (option rows, tag close marks, the clear-all mark) consume the press;
    /// anything else on the header toggles the list.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> DropdownAction {
        let Some(layout) = self.layout.as_ref() else {
            return DropdownAction::None;
        };
        let position = event.position();

        match event.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if !self.is_open() || !layout.list.is_some_and(|l| l.area.contains(position)) {
                    return DropdownAction::None;
                }
                let before = self.list_state.y;
                let delta = if event.kind == MouseEventKind::ScrollUp {
                    -1
                } else {
                    1
                };
                self.list_state.scroll_y_by(delta);
                if self.list_state.y == before {
                    DropdownAction::None
                } else {
                    DropdownAction::Redraw
                }
            }
            _ if event.is_click() => {
                let first_row = self.list_state.y as usize;
                let hit = if self.is_open() {
                    layout.hit(position, first_row, self.option_set.len())
                } else {
                    layout.header.area.contains(position).then(|| {
                        layout
                            .hit(position, first_row, self.option_set.len())
                            .unwrap_or(Hit::Header)
                    })
                };
                match hit {
                    Some(hit) => self.apply_hit(hit),
                    None => DropdownAction::None,
                }
            }
            _ => DropdownAction::None,
        }
    }

    fn apply_hit(&mut self, hit: Hit) -> DropdownAction {
        match hit {
            Hit::OptionRow(idx) => {
                let Some(label) = self.option_set.get(idx).map(str::to_owned) else {
                    return DropdownAction::None;
                };
                // Selected rows are disabled.
                if self.selection.contains(&label) {
                    return DropdownAction::None;
                }
                self.select_option(&label);
                DropdownAction::SelectionChanged
            }
            Hit::TagClose(label) => changed_action(self.remove_selection(&label)),
            Hit::Clear => changed_action(self.clear_all()),
            Hit::Header => {
                self.toggle_open();
                DropdownAction::Redraw
            }
            Hit::List => DropdownAction::None,
        }
    }

    /// Draws the header at the top of `area` and, while open, the option list right below it.
    ///
    /// The list overlays whatever lies underneath, so render the widget after anything it may
    /// cover. It is clipped to `area`.
    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            self.layout = None;
            self.shared.bounds.set(Bounds::default());
            return;
        }

        let list_spec = self.is_open().then_some(ListSpec {
            option_count: self.option_set.len(),
            max_visible: self.options.max_visible_options,
            show_scrollbar: self.options.show_scrollbar,
        });
        let header_spec = HeaderSpec {
            placeholder: self.options.placeholder.as_deref(),
        };
        let layout = layout::compute(area, &self.selection, header_spec, list_spec);

        self.render_header(&layout, buf, theme);
        if let Some(list) = layout.list {
            self.list_state.set_viewport(list.rows.height);
            self.list_state.set_content(self.option_set.len() as u32);
            self.render_list(list, buf, theme);
        }

        self.shared.bounds.set(Bounds {
            header: Some(layout.header.area),
            list: layout.list.map(|l| l.area),
        });
        self.layout = Some(layout);
    }

    fn render_header(&self, layout: &DropdownLayout, buf: &mut Buffer, theme: &Theme) {
        let header = &layout.header;
        buf.set_style(header.area, theme.text_primary);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.border)
            .render(header.area, buf);

        let inner = Rect::new(
            header.area.x.saturating_add(1),
            header.area.y.saturating_add(1),
            header.area.width.saturating_sub(2),
            header.area.height.saturating_sub(2),
        );
        let visible = |r: Rect| inner.contains(Position::new(r.x, r.y));

        for tag in header.tags.iter().filter(|t| visible(t.chip)) {
            buf.set_style(tag.chip, theme.tag);
            let label_cols = tag.chip.width.saturating_sub(layout::TAG_CHROME);
            render::render_str_clipped(
                tag.chip.x + 1,
                tag.chip.y,
                label_cols,
                buf,
                &tag.text,
                theme.tag,
            );
            buf.set_stringn(
                tag.close.x,
                tag.close.y,
                &self.options.tag_close_symbol,
                1,
                theme.tag_close,
            );
        }

        if let Some(value) = &header.value
            && value.area.height > 0
        {
            let style = if value.is_placeholder {
                theme.text_muted
            } else {
                theme.text_primary
            };
            render::render_str_clipped(
                value.area.x,
                value.area.y,
                value.area.width,
                buf,
                &value.text,
                style,
            );
        }

        if let Some(clear) = header.clear.filter(|r| visible(*r)) {
            buf.set_stringn(clear.x, clear.y, &self.options.clear_symbol, 1, theme.button);
        }
        if let Some(divider) = header.divider.filter(|r| visible(*r)) {
            buf.set_stringn(
                divider.x,
                divider.y,
                &self.options.divider_symbol,
                1,
                theme.divider,
            );
        }
        if visible(header.toggle) {
            buf.set_stringn(
                header.toggle.x,
                header.toggle.y,
                &self.options.toggle_symbol,
                1,
                theme.button,
            );
        }
    }

    fn render_list(&self, list: layout::ListLayout, buf: &mut Buffer, theme: &Theme) {
        Clear.render(list.area, buf);
        buf.set_style(list.area, theme.option);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.border)
            .render(list.area, buf);

        for row in 0..list.rows.height {
            let Some(label) = self
                .list_state
                .content_row(row)
                .and_then(|idx| self.option_set.get(idx))
            else {
                break;
            };
            let y = list.rows.y + row;
            let style = if self.selection.contains(label) {
                theme.option_selected
            } else {
                theme.option
            };
            buf.set_style(Rect::new(list.rows.x, y, list.rows.width, 1), style);
            render::render_str_clipped(
                list.rows.x + 1,
                y,
                list.rows.width.saturating_sub(1),
                buf,
                label,
                style,
            );
        }

        if let Some(scrollbar) = list.scrollbar {
            render::render_scrollbar(scrollbar, buf, &self.list_state, theme.scrollbar);
        }
    }
}

fn changed_action(changed: bool) -> DropdownAction {
    if changed {
        DropdownAction::SelectionChanged
    } else {
        DropdownAction::Redraw
    }
}
