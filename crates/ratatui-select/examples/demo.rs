use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui_select::crossterm_input::input_event_from_crossterm;
use ratatui_select::page::DemoPage;
use ratatui_select::page::PageAction;
use ratatui_select::theme::Theme;
use std::io;
use std::io::Stdout;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Path of the JSON log file. Logging stays off when unset, since the terminal is in use.
const LOG_ENV: &str = "RATATUI_SELECT_LOG";

fn main() -> io::Result<()> {
    init_logging()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let mut page = DemoPage::new();

    let res = run(&mut terminal, &theme, &mut page);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    theme: &Theme,
    page: &mut DemoPage,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            page.render_ref(area, f.buffer_mut(), theme);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        match page.handle_event(ev) {
            PageAction::Quit => return Ok(()),
            PageAction::Redraw | PageAction::None => {}
        }
    }
}

fn init_logging() -> io::Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::sync::Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();
    Ok(())
}
