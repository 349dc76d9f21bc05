mod cli;
mod panel;
mod replay;
mod run;

use gripper_common::{EventBus, GripperError};
use gripper_config::GripperConfig;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn load_config(args: &Args) -> (GripperConfig, Option<GripperError>) {
    let loaded = match &args.config {
        Some(path) => gripper_config::load_config_from(path),
        None => gripper_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (GripperConfig::default(), Some(e.into())),
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn replay_script(script: &std::path::Path, json: bool, config: &GripperConfig) -> Result<i32, GripperError> {
    let steps = replay::load_script(script)?;
    let outcome = replay::replay(&steps, config)?;
    if json {
        let text = serde_json::to_string_pretty(&outcome)
            .map_err(|e| GripperError::Other(format!("failed to serialize outcome: {e}")))?;
        println!("{text}");
    } else {
        println!("panel: {}x{}", outcome.size.width, outcome.size.height);
        println!(
            "resizes: {}  completed: {}  cancelled: {}",
            outcome.resizes, outcome.completed, outcome.cancelled
        );
    }
    Ok(0)
}

fn run_console(request: run::RunRequest, config: &GripperConfig) -> Result<i32, GripperError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let bus = EventBus::new();
    let _stdout = bus.add_console_output_handler(run::StreamPrinter::stdout(std::io::stdout()));
    let _stderr = bus.add_console_output_handler(run::StreamPrinter::stderr(std::io::stderr()));

    let exit = runtime.block_on(run::run_command(request, config, &bus))?;
    Ok(run::exit_code(&exit))
}

fn main() {
    let args = cli::parse();
    let (config, config_error) = load_config(&args);

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    init_logging(&directive);

    tracing::info!("gripper v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let result = match args.command {
        Command::Replay { script, json } => replay_script(&script, json, &config),
        Command::Run {
            command,
            directory,
            input,
        } => run_console(
            run::RunRequest {
                command,
                directory,
                input,
            },
            &config,
        ),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("gripper: {e}");
            std::process::exit(1);
        }
    }
}
