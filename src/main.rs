use clap::Parser;
use math_ops::config::{cli, Command};
use math_ops::utils::{logger, validation::Validate};
use math_ops::{BatchConfig, CalcEngine, CliConfig, MathError, OutputFormat};

fn main() {
    let config = CliConfig::parse();

    if config.format == OutputFormat::Json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), MathError> {
    config.validate()?;

    let outcomes = match &config.command {
        Command::Batch { config: path } => {
            tracing::info!("Loading batch from: {}", path.display());
            let batch = BatchConfig::from_file(path)?;
            batch.validate()?;
            CalcEngine::new(batch).run()?
        }
        Command::Add(_) | Command::Subtract(_) => CalcEngine::new(config.clone()).run()?,
    };

    let stdout = std::io::stdout();
    cli::write_outcomes(&mut stdout.lock(), &outcomes, config.format)
}
