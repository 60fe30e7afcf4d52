#![forbid(unsafe_code)]

//! Terminal demo: two tabbed checkable trees and a selection summary.
//!
//! Runs a synchronous read/update/draw loop over crossterm in raw mode.
//! Set `TREETABS_LOG` (an `EnvFilter` directive, e.g. `debug`) and redirect
//! stderr to a file to capture transition logs.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing_subscriber::EnvFilter;
use treetabs_core::event::Event;
use treetabs_runtime::{App, Cmd, ContextProvider, StateContainer, Tab, TreeId};
use treetabs_widgets::TreeGuides;

const HELP: &str = "arrows: navigate  space/enter: toggle  tab: switch  q: quit";

fn init_logging() {
    if std::env::var_os("TREETABS_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_env("TREETABS_LOG"))
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> io::Result<()> {
    init_logging();
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = run(&mut stdout);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut impl Write) -> io::Result<()> {
    let provider = ContextProvider::new();
    let mut app = App::new(provider.handle());
    tracing::info!("session started");
    loop {
        draw(out, &app)?;
        // Focus lands only after the render pass that created its target.
        app.apply_pending_focus();
        let Some(event) = Event::from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        if app.update(event) == Cmd::Quit {
            tracing::info!("quit requested");
            break;
        }
    }
    Ok(())
}

fn draw<C: StateContainer>(out: &mut impl Write, app: &App<C>) -> io::Result<()> {
    let (width, _) = terminal::size()?;
    let width = width as usize;
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    for tab in [Tab::Tree1, Tab::Tree2, Tab::Summary] {
        if tab == app.tab() {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(format!(" {} ", tab.title())),
                SetAttribute(Attribute::Reset),
                Print(" ")
            )?;
        } else {
            queue!(out, Print(format!(" {}  ", tab.title())))?;
        }
    }
    queue!(out, MoveTo(0, 1), Print("\u{2500}".repeat(width)))?;

    let mut row = 2u16;
    match app.tab().tree() {
        Some(id) => {
            for line in app.lines(id, TreeGuides::Unicode, width) {
                queue!(out, MoveTo(0, row))?;
                if line.active {
                    queue!(
                        out,
                        SetAttribute(Attribute::Reverse),
                        Print(&line.text),
                        SetAttribute(Attribute::Reset)
                    )?;
                } else {
                    queue!(out, Print(&line.text))?;
                }
                row += 1;
            }
        }
        None => {
            for id in TreeId::ALL {
                let label = match id {
                    TreeId::Tree1 => Tab::Tree1.title(),
                    TreeId::Tree2 => Tab::Tree2.title(),
                };
                queue!(out, MoveTo(0, row), Print(format!("{label} selections:")))?;
                row += 1;
                let entries = app.summary(id);
                if entries.is_empty() {
                    queue!(out, MoveTo(0, row), Print("  (none)"))?;
                    row += 1;
                }
                for entry in entries {
                    queue!(
                        out,
                        MoveTo(0, row),
                        Print(format!("  {} ({})", entry.title, entry.value))
                    )?;
                    row += 1;
                }
                row += 1;
            }
        }
    }

    queue!(out, MoveTo(0, row + 1), Print(HELP))?;
    out.flush()
}
