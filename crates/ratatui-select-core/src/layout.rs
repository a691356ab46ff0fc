//! Geometry of a dropdown: where the header, tags, buttons and option rows land.
//!
//! Layout is a pure function of the area, the current selection and whether the list is open.
//! The widget computes it during rendering and keeps it around for hit-testing pointer presses.

use ratatui::layout::Position;
use ratatui::layout::Rect;

use crate::render;
use crate::selection::SelectionState;

/// Columns taken by a chip around its label: `" " label " × "`.
pub const TAG_CHROME: u16 = 4;
/// Gap between chips and between the content region and the buttons.
const GAP: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagLayout {
    /// The selected label this chip stands for.
    pub label: String,
    /// What the chip shows, possibly truncated to fit.
    pub text: String,
    pub chip: Rect,
    pub close: Rect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueLayout {
    pub area: Rect,
    pub text: String,
    pub is_placeholder: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLayout {
    pub area: Rect,
    pub content: Rect,
    pub tags: Vec<TagLayout>,
    pub value: Option<ValueLayout>,
    pub clear: Option<Rect>,
    pub divider: Option<Rect>,
    pub toggle: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListLayout {
    pub area: Rect,
    pub rows: Rect,
    pub scrollbar: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownLayout {
    pub header: HeaderLayout,
    pub list: Option<ListLayout>,
}

/// What the option list needs to know to size itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSpec {
    pub option_count: usize,
    pub max_visible: u16,
    pub show_scrollbar: bool,
}

/// Header parts that reach the rendered output.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderSpec<'a> {
    pub placeholder: Option<&'a str>,
}

/// A hit-tested region of a rendered dropdown, deepest control first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    OptionRow(usize),
    TagClose(String),
    Clear,
    Header,
    List,
}

pub fn buttons_width(has_selection: bool) -> u16 {
    // "× │ ▼" or "▼"
    if has_selection { 5 } else { 1 }
}

fn content_width(width: u16, has_selection: bool) -> u16 {
    width
        .saturating_sub(2)
        .saturating_sub(buttons_width(has_selection))
        .saturating_sub(GAP)
}

struct FlowedTag {
    row: u16,
    x: u16,
    label_cols: u16,
}

/// Lays chips out left to right, wrapping to a new row when the next chip does not fit.
/// A chip wider than the whole row gets its label truncated.
fn flow_tags(labels: &[String], width: u16) -> (Vec<FlowedTag>, u16) {
    let mut out = Vec::with_capacity(labels.len());
    let mut row = 0u16;
    let mut x = 0u16;
    let max_label = width.saturating_sub(TAG_CHROME);

    for label in labels {
        let label_cols = render::str_width(label).min(max_label);
        let chip_w = label_cols + TAG_CHROME;
        if x > 0 && x + chip_w > width {
            row += 1;
            x = 0;
        }
        out.push(FlowedTag { row, x, label_cols });
        x = x.saturating_add(chip_w).saturating_add(GAP);
    }

    let rows = if labels.is_empty() { 1 } else { row + 1 };
    (out, rows)
}

/// Rows of content inside the header border.
pub fn header_rows(selection: &SelectionState, width: u16) -> u16 {
    match selection {
        SelectionState::Single(_) => 1,
        SelectionState::Multi(labels) => {
            flow_tags(labels, content_width(width, !labels.is_empty())).1
        }
    }
}

/// Total header height, border included, for a header `width` columns wide.
pub fn header_height(selection: &SelectionState, width: u16) -> u16 {
    header_rows(selection, width) + 2
}

pub fn compute(
    area: Rect,
    selection: &SelectionState,
    header_spec: HeaderSpec<'_>,
    list: Option<ListSpec>,
) -> DropdownLayout {
    let header = compute_header(area, selection, header_spec);
    let list = list.and_then(|spec| compute_list(area, header.area, spec));
    DropdownLayout { header, list }
}

fn compute_header(area: Rect, selection: &SelectionState, spec: HeaderSpec<'_>) -> HeaderLayout {
    let has_selection = !selection.is_empty();
    let rows = header_rows(selection, area.width);
    let header = Rect::new(area.x, area.y, area.width, (rows + 2).min(area.height));
    let inner = Rect::new(
        header.x.saturating_add(1),
        header.y.saturating_add(1),
        header.width.saturating_sub(2),
        header.height.saturating_sub(2),
    );

    let cw = content_width(area.width, has_selection);
    let content = Rect::new(inner.x, inner.y, cw.min(inner.width), inner.height);

    let bw = buttons_width(has_selection);
    let bx = inner.right().saturating_sub(bw).max(inner.x);
    let by = inner.y + rows.saturating_sub(1) / 2;
    let (clear, divider, toggle_x) = if has_selection {
        (
            Some(Rect::new(bx, by, 1, 1)),
            Some(Rect::new(bx + 2, by, 1, 1)),
            bx + 4,
        )
    } else {
        (None, None, bx)
    };
    let toggle = Rect::new(toggle_x, by, 1, 1);

    let mut tags = Vec::new();
    let mut value = None;
    match selection {
        SelectionState::Multi(labels) => {
            let (flowed, _) = flow_tags(labels, content.width);
            for (label, f) in labels.iter().zip(flowed) {
                let chip = Rect::new(
                    content.x + f.x,
                    content.y + f.row,
                    f.label_cols + TAG_CHROME,
                    1,
                );
                // " label × ": the close mark sits two columns before the chip's end.
                let close = Rect::new(chip.x + 1 + f.label_cols + 1, chip.y, 1, 1);
                tags.push(TagLayout {
                    label: label.clone(),
                    text: render::truncate_to_width(label, f.label_cols),
                    chip,
                    close,
                });
            }
        }
        SelectionState::Single(current) => {
            let row = Rect::new(content.x, content.y, content.width, content.height.min(1));
            value = match (current, spec.placeholder) {
                (Some(label), _) => Some(ValueLayout {
                    area: row,
                    text: render::truncate_to_width(label, content.width),
                    is_placeholder: false,
                }),
                (None, Some(placeholder)) => Some(ValueLayout {
                    area: row,
                    text: render::truncate_to_width(placeholder, content.width),
                    is_placeholder: true,
                }),
                (None, None) => None,
            };
        }
    }
    if matches!(selection, SelectionState::Multi(labels) if labels.is_empty())
        && let Some(placeholder) = spec.placeholder
    {
        value = Some(ValueLayout {
            area: Rect::new(content.x, content.y, content.width, content.height.min(1)),
            text: render::truncate_to_width(placeholder, content.width),
            is_placeholder: true,
        });
    }

    HeaderLayout {
        area: header,
        content,
        tags,
        value,
        clear,
        divider,
        toggle,
    }
}

fn compute_list(area: Rect, header: Rect, spec: ListSpec) -> Option<ListLayout> {
    let y = header.bottom();
    let available = area.bottom().saturating_sub(y);
    if available == 0 {
        return None;
    }

    let visible = spec.option_count.min(spec.max_visible as usize) as u16;
    let height = (visible + 2).min(available);
    let list = Rect::new(area.x, y, area.width, height);
    let mut rows = Rect::new(
        list.x.saturating_add(1),
        list.y.saturating_add(1),
        list.width.saturating_sub(2),
        list.height.saturating_sub(2),
    );

    let overflowing = spec.option_count > rows.height as usize;
    let scrollbar = if spec.show_scrollbar && overflowing && rows.width >= 2 {
        rows.width -= 1;
        Some(Rect::new(rows.right(), rows.y, 1, rows.height))
    } else {
        None
    };

    Some(ListLayout {
        area: list,
        rows,
        scrollbar,
    })
}

impl DropdownLayout {
    /// Every rendered cell: the header, and the list while it is shown.
    pub fn contains(&self, position: Position) -> bool {
        self.header.area.contains(position)
            || self.list.is_some_and(|l| l.area.contains(position))
    }

    /// Resolves a position to the innermost control, given the list's first visible option.
    pub fn hit(&self, position: Position, first_row: usize, option_count: usize) -> Option<Hit> {
        if let Some(list) = self.list
            && list.area.contains(position)
        {
            if list.rows.contains(position) {
                let idx = first_row + (position.y - list.rows.y) as usize;
                if idx < option_count {
                    return Some(Hit::OptionRow(idx));
                }
            }
            return Some(Hit::List);
        }

        if !self.header.area.contains(position) {
            return None;
        }
        if let Some(tag) = self
            .header
            .tags
            .iter()
            .find(|t| t.close.contains(position))
        {
            return Some(Hit::TagClose(tag.label.clone()));
        }
        if self.header.clear.is_some_and(|r| r.contains(position)) {
            return Some(Hit::Clear);
        }
        Some(Hit::Header)
    }
}
