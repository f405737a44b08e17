use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use trivia_quiz::{App, AppConfig, Countdown, TimerCommand, handle_key, logger, ui};

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_file {
        logger::init(path)?;
    }
    logger::log(&format!("Starting trivia quiz with {:?}", config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, config: &AppConfig) -> io::Result<()> {
    let mut app = App::from_config(config);
    let (mut countdown, mut ticks) = Countdown::new(config.tick_period);
    let mut events = EventStream::new();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        let command = tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key)
                }
                Some(Ok(_)) => TimerCommand::Keep,
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(tick) = ticks.recv() => {
                if countdown.accepts(tick) {
                    app.on_tick()
                } else {
                    TimerCommand::Keep
                }
            }
        };
        countdown.apply(command);
    }

    countdown.cancel();
    Ok(())
}
