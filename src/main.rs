// sortty: step-by-step sorting algorithm visualizer

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use sortty::cli::{Args, Mode, USAGE};
use sortty::config::VisualizerConfig;
use sortty::engine::AlgorithmKind;
use sortty::playback::{PlaybackController, TickOutcome};
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    match args.mode {
        Mode::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Mode::Version => {
            println!("sortty {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Mode::Interactive | Mode::Headless(_) => {}
    }

    init_logging(
        args.log_file.as_deref(),
        matches!(args.mode, Mode::Headless(_)),
    )?;

    let mut controller = PlaybackController::new(&args.config)?;
    load_initial_dataset(&mut controller, &args.config)?;

    match args.mode {
        Mode::Headless(kind) => run_headless(&mut controller, kind),
        _ => run_tui(controller, &args.config),
    }
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so interactive sessions only log when a file is given.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortty=info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}

fn load_initial_dataset(
    controller: &mut PlaybackController,
    config: &VisualizerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match (&config.data, config.seed) {
        (Some(values), _) => controller.load(values.clone())?,
        (None, Some(seed)) => {
            controller.generate_with(config.initial_size, &mut StdRng::seed_from_u64(seed))?
        }
        (None, None) => controller.generate(config.initial_size)?,
    }
    Ok(())
}

/// Sort without the TUI, stepping as fast as the delay allows
fn run_headless(
    controller: &mut PlaybackController,
    kind: AlgorithmKind,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Input:  {:?}", controller.working());
    controller.start(kind)?;

    let step = controller.delay().duration();
    loop {
        if let TickOutcome::Finished(summary) = controller.tick(step)? {
            println!("Output: {:?}", controller.working());
            println!("{}", summary);
            return Ok(());
        }
    }
}

fn run_tui(
    controller: PlaybackController,
    config: &VisualizerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
