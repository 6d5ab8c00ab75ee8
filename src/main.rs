//! Gradian - a terminal-based interactive slope calculator.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gradian::app::{App, Theme};
use gradian::attribution::Attribution;
use gradian::engine::typeset::Typesetter;
use gradian::forms::InputMode;
use gradian::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Gruvbox dark.
    Dark,
    /// Gruvbox light.
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::GruvboxDark,
            ThemeArg::Light => Theme::GruvboxLight,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gradian")]
#[command(about = "A terminal-based interactive slope calculator", long_about = None)]
#[command(version)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Color theme to start with
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Render math as plain ASCII markup instead of Unicode
    #[arg(long)]
    ascii: bool,

    /// Override the attribution title
    #[arg(long)]
    cite_title: Option<String>,

    /// Override the attribution URL
    #[arg(long)]
    cite_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Gradian");
    }

    let default_attribution = Attribution::from_package();
    let attribution = Attribution::new(
        args.cite_title
            .clone()
            .unwrap_or_else(|| default_attribution.title().to_string()),
        args.cite_url
            .clone()
            .unwrap_or_else(|| default_attribution.url().to_string()),
    );
    let typesetter = if args.ascii {
        Typesetter::ascii()
    } else {
        Typesetter::unicode()
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(attribution, typesetter, args.theme.into());
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Gradian exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        app.tick();

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Help overlay - any key closes it
                    if app.show_help {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            _ => app.toggle_help(),
                        }
                        continue;
                    }

                    match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                        // Mode selectors
                        (KeyModifiers::NONE, KeyCode::Char('1')) => {
                            app.set_mode(InputMode::Points);
                        }
                        (KeyModifiers::NONE, KeyCode::Char('2')) => {
                            app.set_mode(InputMode::Rate);
                        }
                        (KeyModifiers::NONE, KeyCode::Char('m')) => {
                            app.toggle_mode();
                        }

                        // Field focus
                        (KeyModifiers::NONE, KeyCode::Tab)
                        | (KeyModifiers::NONE, KeyCode::Down)
                        | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                            app.focus_next();
                        }
                        (_, KeyCode::BackTab)
                        | (KeyModifiers::NONE, KeyCode::Up)
                        | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                            app.focus_prev();
                        }

                        // Editing
                        (KeyModifiers::NONE, KeyCode::Backspace) => {
                            app.backspace();
                        }
                        (KeyModifiers::NONE, KeyCode::Esc) => {
                            app.clear_field();
                        }
                        (KeyModifiers::NONE, KeyCode::Enter) => {
                            app.recompute();
                        }

                        // Clipboard
                        (KeyModifiers::NONE, KeyCode::Char('c')) => {
                            app.copy_html();
                        }
                        (KeyModifiers::NONE, KeyCode::Char('y')) => {
                            app.copy_markdown();
                        }

                        // Features
                        (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                            app.cycle_theme();
                        }
                        (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                            app.toggle_help();
                        }

                        // Everything else may be field input
                        (KeyModifiers::NONE, KeyCode::Char(c))
                        | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                            app.input_char(c);
                        }

                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Moved = mouse.kind {
                        app.set_pointer(mouse.column, mouse.row);
                    }
                }
                _ => {}
            }
        }
    }
}
