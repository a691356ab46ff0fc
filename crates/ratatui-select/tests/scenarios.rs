use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui_select::dropdown::DropdownAction;
use ratatui_select::dropdown::SelectDropdown;
use ratatui_select::input::InputEvent;
use ratatui_select::input::MouseEvent;
use ratatui_select::listener::PointerListeners;
use ratatui_select::options::OptionSet;
use ratatui_select::page::DemoPage;
use ratatui_select::page::PageAction;
use ratatui_select::page::Slot;
use ratatui_select::theme::Theme;

const OPTS: [&str; 3] = ["First", "Two", "Three"];

fn page() -> DemoPage {
    DemoPage::with_options(OptionSet::new(OPTS))
}

fn draw_page(page: &mut DemoPage) -> Buffer {
    let area = Rect::new(0, 0, 50, 24);
    let mut buf = Buffer::empty(area);
    page.render_ref(area, &mut buf, &Theme::default());
    buf
}

fn draw(d: &mut SelectDropdown) {
    let area = Rect::new(0, 0, 30, 12);
    let mut buf = Buffer::empty(area);
    d.render_ref(area, &mut buf, &Theme::default());
}

fn press(page: &mut DemoPage, at: impl FnOnce(&DemoPage) -> Position) -> PageAction {
    let p = at(page);
    let action = page.handle_event(InputEvent::Mouse(MouseEvent::click(p.x, p.y)));
    draw_page(page);
    action
}

fn toggle_of(d: &SelectDropdown) -> Position {
    let t = d.layout().expect("rendered").header.toggle;
    Position::new(t.x, t.y)
}

fn row_of(d: &SelectDropdown, label: &str) -> Position {
    let list = d.layout().and_then(|l| l.list).expect("list is open");
    let idx = d.option_set().position(label).expect("known option") as u16;
    Position::new(list.rows.x + 1, list.rows.y + idx)
}

fn tag_close_of(d: &SelectDropdown, label: &str) -> Position {
    let tag = d
        .layout()
        .expect("rendered")
        .header
        .tags
        .iter()
        .find(|t| t.label == label)
        .expect("tag is rendered")
        .clone();
    Position::new(tag.close.x, tag.close.y)
}

fn clear_of(d: &SelectDropdown) -> Position {
    let c = d.layout().expect("rendered").header.clear.expect("clear control");
    Position::new(c.x, c.y)
}

#[test]
fn scenario_a_multi_select_then_remove_tag() {
    let mut page = page();
    draw_page(&mut page);

    press(&mut page, |pg| toggle_of(pg.multi()));
    assert!(page.multi().is_open());

    press(&mut page, |pg| row_of(pg.multi(), "Two"));
    assert_eq!(page.multi().selection().labels(), ["Two"]);
    assert!(page.multi().is_open());

    press(&mut page, |pg| row_of(pg.multi(), "First"));
    assert_eq!(page.multi().selection().labels(), ["Two", "First"]);
    assert!(page.multi().is_open());

    press(&mut page, |pg| tag_close_of(pg.multi(), "Two"));
    assert_eq!(page.multi().selection().labels(), ["First"]);
    assert_eq!(page.multi().rendered_tags(), vec!["First"]);
}

#[test]
fn scenario_b_single_select_disables_selected_row() {
    let mut page = page();
    draw_page(&mut page);

    press(&mut page, |pg| toggle_of(pg.single()));
    assert!(page.single().is_open());

    let action = press(&mut page, |pg| row_of(pg.single(), "Three"));
    assert_eq!(action, PageAction::Redraw);
    assert_eq!(page.single().selection().single(), Some("Three"));
    assert!(!page.single().is_open());

    press(&mut page, |pg| toggle_of(pg.single()));
    assert!(page.single().is_open());
    let action = press(&mut page, |pg| row_of(pg.single(), "Three"));
    assert_eq!(action, PageAction::None);
    assert_eq!(page.single().selection().single(), Some("Three"));
}

#[test]
fn scenario_c_clear_all_hides_the_control() {
    let mut page = page();
    draw_page(&mut page);

    press(&mut page, |pg| toggle_of(pg.multi()));
    press(&mut page, |pg| row_of(pg.multi(), "First"));
    press(&mut page, |pg| row_of(pg.multi(), "Two"));
    assert!(page.multi().has_clear_control());

    press(&mut page, |pg| clear_of(pg.multi()));
    assert!(page.multi().selection().is_empty());
    assert!(!page.multi().has_clear_control());
    // Clearing is a nested control; it does not toggle the list.
    assert!(page.multi().is_open());
}

#[test]
fn reselecting_a_removed_option_appends_it() {
    let mut d = SelectDropdown::multi(OptionSet::new(OPTS));
    d.select_option("First");
    d.select_option("Two");
    d.select_option("Three");
    d.remove_selection("First");
    d.select_option("First");
    assert_eq!(d.selection().labels(), ["Two", "Three", "First"]);

    draw(&mut d);
    assert_eq!(d.rendered_tags(), vec!["Two", "Three", "First"]);
}

#[test]
fn multi_selection_is_distinct_clicks_in_first_click_order() {
    // A small LCG keeps the sequences deterministic.
    let mut seed = 0x2545_f491_u32;
    for _ in 0..200 {
        let mut d = SelectDropdown::multi(OptionSet::new(OPTS));
        let mut expected: Vec<&str> = Vec::new();
        let len = (seed % 7) as usize;
        for _ in 0..len {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let label = OPTS[(seed >> 16) as usize % OPTS.len()];
            d.select_option(label);
            if !expected.contains(&label) {
                expected.push(label);
            }
        }
        assert_eq!(d.selection().labels(), expected.as_slice());
        seed = seed.wrapping_add(1);
    }
}

#[test]
fn single_selection_always_closes_and_holds_at_most_one() {
    let mut d = SelectDropdown::single(OptionSet::new(OPTS));
    for label in ["Two", "Two", "First", "Three"] {
        d.toggle_open();
        d.select_option(label);
        assert!(!d.is_open());
        assert!(d.selection().len() <= 1);
        assert_eq!(d.selection().single(), Some(label));
    }
}

#[test]
fn clear_all_is_idempotent() {
    let mut d = SelectDropdown::multi(OptionSet::new(OPTS));
    assert!(!d.clear_all());
    d.select_option("Two");
    assert!(d.clear_all());
    assert!(d.selection().is_empty());
    assert!(!d.clear_all());
    assert!(d.selection().is_empty());

    let mut s = SelectDropdown::single(OptionSet::new(OPTS));
    s.select_option("Two");
    assert!(s.clear_all());
    assert!(s.selection().is_empty());
}

#[test]
fn outside_interaction_inside_never_changes_open_state() {
    let mut d = SelectDropdown::multi(OptionSet::new(OPTS));
    draw(&mut d);
    let inside = toggle_of(&d);

    assert!(!d.handle_outside_interaction(inside));
    assert!(!d.is_open());

    d.toggle_open();
    draw(&mut d);
    assert!(!d.handle_outside_interaction(inside));
    assert!(!d.handle_outside_interaction(row_of(&d, "Three")));
    assert!(d.is_open());

    assert!(d.handle_outside_interaction(Position::new(29, 11)));
    assert!(!d.is_open());
    // Already closed: still closed.
    assert!(!d.handle_outside_interaction(Position::new(29, 11)));
    assert!(!d.is_open());
}

#[test]
fn press_outside_both_dropdowns_closes_them() {
    let mut page = page();
    draw_page(&mut page);
    press(&mut page, |pg| toggle_of(pg.multi()));
    assert!(page.multi().is_open());

    let action = press(&mut page, |_| Position::new(45, 20));
    assert_eq!(action, PageAction::Redraw);
    assert!(!page.multi().is_open());
    assert!(!page.single().is_open());

    assert_eq!(press(&mut page, |_| Position::new(45, 20)), PageAction::None);
}

#[test]
fn opening_one_dropdown_dismisses_the_other() {
    let mut page = page();
    draw_page(&mut page);
    press(&mut page, |pg| toggle_of(pg.single()));
    assert!(page.single().is_open());

    press(&mut page, |pg| toggle_of(pg.multi()));
    assert!(page.multi().is_open());
    assert!(!page.single().is_open());
}

#[test]
fn open_list_overlays_the_dropdown_below() {
    let mut page = page();
    draw_page(&mut page);
    press(&mut page, |pg| toggle_of(pg.multi()));

    // The multi list covers the single-select header; presses there hit the list.
    let single_header = page.single().layout().unwrap().header.area;
    let p = Position::new(single_header.x + 2, single_header.y + 1);
    assert_eq!(page.slot_at(p), Some(Slot::Multi));

    press(&mut page, |_| p);
    assert!(!page.single().is_open());
    assert!(page.multi().is_open());
}

#[test]
fn instances_are_independent_and_release_their_listeners() {
    let hub = PointerListeners::new();
    let mut a = SelectDropdown::multi(OptionSet::new(OPTS));
    let mut b = SelectDropdown::single(OptionSet::new(OPTS));
    a.mount(&hub);
    b.mount(&hub);
    assert_eq!(hub.len(), 2);

    a.select_option("Two");
    assert!(b.selection().is_empty());

    drop(a);
    assert_eq!(hub.len(), 1);
    b.unmount();
    assert!(hub.is_empty());
}

#[test]
fn empty_option_set_opens_to_an_empty_list() {
    let mut d = SelectDropdown::single(OptionSet::new(Vec::<String>::new()));
    draw(&mut d);
    let toggle = toggle_of(&d);
    assert_eq!(
        d.handle_event(InputEvent::Mouse(MouseEvent::click(toggle.x, toggle.y))),
        DropdownAction::Redraw
    );
    draw(&mut d);
    let list = d.layout().and_then(|l| l.list).expect("list is shown");
    assert_eq!(list.rows.height, 0);
    assert_eq!(
        d.handle_event(InputEvent::Mouse(MouseEvent::click(list.area.x, list.area.y))),
        DropdownAction::None
    );
}

#[test]
fn duplicate_labels_act_together() {
    let mut d = SelectDropdown::multi(OptionSet::new(["Two", "Two", "Three"]));
    d.toggle_open();
    draw(&mut d);
    let list = d.layout().and_then(|l| l.list).unwrap();
    d.handle_event(InputEvent::Mouse(MouseEvent::click(list.rows.x + 1, list.rows.y + 1)));
    assert_eq!(d.selection().labels(), ["Two"]);

    // The first "Two" row is now disabled too.
    draw(&mut d);
    let action = d.handle_event(InputEvent::Mouse(MouseEvent::click(list.rows.x + 1, list.rows.y)));
    assert_eq!(action, DropdownAction::None);

    d.remove_selection("Two");
    assert!(d.selection().is_empty());
}
