use trackline::cli::Args;
use trackline::config::{self, EditorConfig};
use trackline::core::engine::LengthPolicy;
use trackline::core::event_bus::EventBus;
use trackline::entities::Timeline;
use trackline::replay;
use trackline::widgets::timeline::{render_text, Editor, GestureEndedEvent, PaletteRefilledEvent};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

fn main() -> Result<()> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());

    // Ensure directories exist
    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {}", e);
    }

    init_logging(&args, &path_config)?;

    info!("Trackline starting...");
    debug!("Command-line args: {:?}", args);
    info!(
        "Config path: {}",
        config::config_file(config::CONFIG_FILE, &path_config).display()
    );

    let mut editor_config = EditorConfig::load(&path_config)?;
    if args.no_clamp {
        editor_config.length_policy = LengthPolicy::Unclamped;
    }

    let timeline = match &args.timeline {
        // from_json rejects duplicate ids
        Some(path) => Timeline::from_json(path)
            .with_context(|| format!("Failed to load timeline: {}", path.display()))?,
        None => {
            info!("No timeline given, starting from demo");
            Timeline::demo()
        }
    };

    let event_bus = EventBus::new();
    event_bus.subscribe::<GestureEndedEvent, _>(|e| {
        info!("{} of {} ended on {:?}", e.kind, e.segment_id, e.track_id);
    });
    event_bus.subscribe::<PaletteRefilledEvent, _>(|e| {
        info!("Palette: placed {}, next candidate {}", e.placed, e.candidate);
    });

    let mut editor = Editor::new(timeline, editor_config).with_emitter(event_bus.emitter());

    if let Some(script) = &args.script {
        let steps = replay::load_script(script)?;
        let report = replay::replay(&mut editor, &steps);
        debug!("{:?}", report);
    }
    // Subscribers already saw everything
    event_bus.poll();

    let timeline = editor.into_timeline();

    if let Some(out) = &args.out {
        timeline
            .to_json(out)
            .with_context(|| format!("Failed to save timeline: {}", out.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
    } else {
        print!("{}", render_text(&timeline, args.px_per_cell));
    }
    Ok(())
}

/// Console logging respects RUST_LOG; `--log` writes to a file instead
fn init_logging(args: &Args, path_config: &config::PathConfig) -> Result<()> {
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| config::data_file(config::LOG_FILE, path_config));

        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), log_level);
    } else {
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .format_timestamp_millis()
            .init();
    }
    Ok(())
}
