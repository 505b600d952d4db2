use portal::app::{App, AppMessage};
use portal::cli::{parse_args, run_cli_command};
use portal::error::{PortalError, PortalResult};
use portal::startup::{init_logging, PortalConfig};
use portal::terminal::{setup_panic_hook, PortalTerminal, TerminalManager};
use portal::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Flags are handled before the terminal is touched
    let options = match run_cli_command(parse_args(std::env::args())) {
        Ok(Some(options)) => options,
        Ok(None) => return Ok(()),
        Err(usage) => {
            eprintln!("{}", usage);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = options.apply(PortalConfig::from_env());
    if let Err(e) = init_logging(&config.log_path()).map_err(PortalError::from) {
        eprintln!("Warning: logging disabled [{}]: {}", e.error_code(), e);
    }
    tracing::info!(
        load_delay_ms = config.load_delay.as_millis() as u64,
        toast_ms = config.toast_duration.as_millis() as u64,
        "starting portal {}",
        portal::cli::VERSION
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome: PortalResult<()> = runtime.block_on(async {
        let mut app = App::new(config);
        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();
        result
    });
    if let Err(e) = &outcome {
        tracing::error!("{} ({}): {}", e.error_code(), e.category(), e);
        eprintln!("{}", e.category().recovery_hint());
    }
    Ok(outcome?)
}

async fn next_message(rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>) -> Option<AppMessage> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn run_app(terminal: &mut PortalTerminal, app: &mut App) -> PortalResult<()> {
    let mut event_stream = EventStream::new();
    // The loop owns the receiver from here on
    let mut message_rx = app.message_rx.take();
    let mut ticker = tokio::time::interval(app.config.tick_rate);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => {
                let before = app.tick_count;
                app.tick();
                // Spinner frames advance every fourth tick
                if app.screen.as_ref().is_some_and(|s| s.is_loading())
                    && before / 4 != app.tick_count / 4
                {
                    app.mark_dirty();
                }
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        tracing::debug!("resize {}x{}", width, height);
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("terminal event error: {}", e);
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        return Ok(());
                    }
                }
            }

            Some(msg) = next_message(&mut message_rx) => {
                app.handle_message(msg);
            }
        }
    }
}
