use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub border: Style,
    pub tag: Style,
    pub tag_close: Style,
    pub button: Style,
    pub divider: Style,
    pub option: Style,
    pub option_selected: Style,
    pub scrollbar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            border: Style::default().gray(),
            tag: Style::default().white().on_blue(),
            tag_close: Style::default().white().on_blue().bold(),
            button: Style::default(),
            divider: Style::default().gray(),
            option: Style::default(),
            option_selected: Style::default().on_dark_gray().dim(),
            scrollbar: Style::default().dark_gray(),
        }
    }
}
