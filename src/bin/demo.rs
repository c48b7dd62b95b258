//! Interactive demo for the dialog manager.
//!
//! Mounts a single confirmation dialog over an empty application surface and
//! runs a blocking event loop until the dialog reaches a terminal state.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use scrim::{events, DefaultStrings, DialogConfig, DialogManager, Handlers, Stage};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Backend = CrosstermBackend<io::Stdout>;

#[derive(Parser, Debug)]
#[command(name = "scrim-demo", about = "Modal dialog demo")]
struct Args {
    /// Dialog title
    #[arg(long, default_value = "Remove publication")]
    title: String,

    /// Dialog body text
    #[arg(long, default_value = "Really remove this publication?")]
    body: String,

    /// Submit button label
    #[arg(long, default_value = "Remove")]
    submit_label: String,

    /// Present the body without a submit/cancel footer
    #[arg(long)]
    no_footer: bool,

    /// Render the submit button disabled
    #[arg(long)]
    submit_disabled: bool,
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let stage = Stage::with_app_surfaces();
    let (tx, mut rx) = events::channel();
    let mut manager = DialogManager::new(&stage, tx)?;
    manager.open(
        DialogConfig::new("demo", args.title)
            .body(args.body)
            .submit_label(args.submit_label)
            .has_footer(!args.no_footer)
            .submit_enabled(!args.submit_disabled)
            .auto_focus_submit(true),
        Handlers::new().on_confirm(|| info!("confirm handler ran")),
        &DefaultStrings,
    )?;

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut manager, &mut rx);
    restore_terminal(&mut terminal)?;
    result
}

fn init_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scrim=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    Ok(())
}

fn init_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<Backend>,
    manager: &mut DialogManager,
    rx: &mut events::EventReceiver,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            manager.render(frame, area);
        })?;

        if !manager.is_open() {
            break;
        }

        match crossterm::event::read()? {
            Event::Key(key) => manager.handle_key_event(key)?,
            Event::Mouse(mouse) => manager.handle_mouse_event(mouse)?,
            _ => {}
        }

        while let Ok(event) = rx.try_recv() {
            info!(?event, "dialog event");
        }
    }

    while let Ok(event) = rx.try_recv() {
        info!(?event, "dialog event");
    }
    Ok(())
}
