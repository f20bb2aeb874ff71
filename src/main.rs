use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use pedsite::app::App;
use pedsite::config::Config;
use pedsite::event::AppEvent;
use pedsite::section::Section;
use pedsite::tui::Tui;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Section to open first: home, works, about, contact or hire
    #[arg(short, long, default_value = "home")]
    section: Section,

    /// Where to write logs
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn install_panic_hook() {
    let handler = better_panic::Settings::auto()
        .most_recent_first(false)
        .create_panic_handler();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        handler(info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.unwrap_or_else(pedsite::utils::get_log_path);
    pedsite::utils::init_logging(&log_path)?;

    let config = Config::load(args.config.as_deref())?;
    tracing::info!(section = %args.section, "starting");

    install_panic_hook();

    let backend = ratatui::backend::CrosstermBackend::new(io::stdout());
    let terminal = ratatui::Terminal::new(backend)?;
    let mut tui = Tui::new(terminal);

    tui.enter()?;

    let mut app = App::new(config, args.section);
    app.on_resize(tui.width()?);

    let result = run(&mut tui, &mut app);

    // Release the scroll lock before leaving the page.
    app.teardown();
    tui.exit()?;
    result
}

fn run<B: ratatui::backend::Backend>(tui: &mut Tui<B>, app: &mut App) -> Result<()> {
    loop {
        tui.draw(app)?;

        match tui.next_event()? {
            AppEvent::Input(event) => {
                if !pedsite::handlers::handle_event(app, &event, Instant::now()) {
                    break;
                }
            }
            AppEvent::Tick => {}
        }
    }
    Ok(())
}
