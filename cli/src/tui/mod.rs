pub mod app;
pub mod ui;

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use satstreak_core::{CalculatorConfig, EstimateUseCase, PriceService, PriceSource};
use tracing::info;

use crate::args::CalcArgs;
use crate::tui::app::App;

pub fn run(config: &CalculatorConfig, args: &CalcArgs) -> Result<()> {
    // Data setup
    let service = PriceService::new(args.price_source()).with_fallback(config.fallback_price_usd);
    let usecase = EstimateUseCase::new(&service, config);
    let mut app = App::new(
        usecase,
        args.streak_days().unwrap_or(config.default_streak_days),
        args.rate,
        args.currency_or(config),
        config.chart_points,
    );

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("chart opened");

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<S: PriceSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.decrease_days(1),
                        KeyCode::Right | KeyCode::Char('l') => app.increase_days(1),
                        KeyCode::Down | KeyCode::Char('j') => app.decrease_days(30),
                        KeyCode::Up | KeyCode::Char('k') => app.increase_days(30),
                        KeyCode::Char('c') => app.toggle_currency(),
                        _ => {}
                    }
                }
            }
        }
    }
}
