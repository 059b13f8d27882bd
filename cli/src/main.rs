//! CLI entrypoint for promptline
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use promptline_application::{PromptSettings, Prompter};
use promptline_domain::{PromptValue, ValidationMode, config::known_keys, factorial, lenient_int};
use promptline_infrastructure::{
    ConfigLoader, FileConfig, read_file, read_file_joined, read_file_lines, write_file,
    write_file_reporting,
};
use promptline_presentation::{
    AskCommand, Cli, Command, CommandOutcome, ConsoleFormatter, NumberKind, OutputConfig,
    ReadMode, StdConsole, output::formatter::OutputFormatter,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Prompts own stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_config_sources() {
            println!("{}", line);
        }
        println!();
        println!("Known keys:");
        for key in known_keys() {
            println!("  {:<20} {}", key.key, key.description);
            if let Some(flag) = key.cli_flag {
                println!("  {:<20} override: {}", "", flag);
            }
            if !key.valid_values.is_empty() {
                println!("  {:<20} values:   {}", "", key.valid_values.join(", "));
            }
        }
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        eprintln!("{}", issue);
    }

    let settings = prompt_settings(&cli, &config);
    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color && !cli.no_color,
    };
    output.apply_color();

    debug!(?settings, ?output, "Resolved configuration");

    let Some(command) = cli.command else {
        bail!("No command given. Run `promptline --help` for usage.");
    };

    let outcome = execute(command, settings)?;
    println!("{}", ConsoleFormatter.render(&outcome, output.format));

    Ok(())
}

/// Merge file settings with CLI overrides
fn prompt_settings(cli: &Cli, config: &FileConfig) -> PromptSettings {
    let (mut settings, _) = config.prompt.to_prompt_settings();
    if cli.legacy {
        settings = settings.with_mode(ValidationMode::Legacy);
    }
    if let Some(max) = cli.max_attempts {
        settings = settings.with_max_attempts((max > 0).then_some(max));
    }
    settings
}

fn execute(command: Command, settings: PromptSettings) -> Result<CommandOutcome> {
    match command {
        Command::Ask(ask) => {
            let mut prompter = Prompter::new(StdConsole::stdio()).with_settings(settings);
            let answer = ask_once(&mut prompter, ask)?;
            info!(%answer, "Prompt answered");
            Ok(CommandOutcome::Answer { answer })
        }
        Command::ParseInt { text } => Ok(CommandOutcome::ParseInt {
            value: lenient_int(&text),
            input: text,
        }),
        Command::Factorial { n } => Ok(CommandOutcome::Factorial {
            n,
            value: factorial(n)?,
        }),
        Command::Read { path, mode } => {
            let display = path.display().to_string();
            Ok(match mode {
                ReadMode::Whole => CommandOutcome::Read {
                    contents: read_file(&path)?,
                    path: display,
                },
                ReadMode::Joined => CommandOutcome::Read {
                    contents: read_file_joined(&path)?,
                    path: display,
                },
                ReadMode::Lines => CommandOutcome::ReadLines {
                    lines: read_file_lines(&path)?,
                    path: display,
                },
            })
        }
        Command::Write {
            path,
            contents,
            report,
        } => {
            let written = if report {
                write_file_reporting(&path, &contents)?
            } else {
                write_file(&path, &contents)?;
                true
            };
            Ok(CommandOutcome::Write {
                path: path.display().to_string(),
                written,
            })
        }
    }
}

fn ask_once(prompter: &mut Prompter<StdConsole>, ask: AskCommand) -> Result<PromptValue> {
    let value = match ask {
        AskCommand::Bool { message, yes, no } => {
            PromptValue::Bool(prompter.prompt_bool(&message, &yes, &no)?)
        }
        AskCommand::Char { message, min, max } => PromptValue::Char(prompter.prompt_char(
            &message,
            min.unwrap_or('\0'),
            max.unwrap_or(char::MAX),
        )?),
        AskCommand::Number {
            message,
            min,
            max,
            kind,
        } => {
            let (default_min, default_max) = kind.default_bounds();
            let min = min.unwrap_or(default_min);
            let max = max.unwrap_or(default_max);
            // Saturating casts keep out-of-width bounds at the edge of the kind
            let number = match kind {
                NumberKind::Double => prompter.prompt_double(&message, min, max)?,
                NumberKind::Float => {
                    prompter.prompt_float(&message, min as f32, max as f32)?.into()
                }
                NumberKind::Int => prompter.prompt_int(&message, min as i32, max as i32)?.into(),
                NumberKind::Long => prompter.prompt_long(&message, min as i64, max as i64)? as f64,
                NumberKind::Short => {
                    prompter.prompt_short(&message, min as i16, max as i16)?.into()
                }
                NumberKind::Byte => prompter.prompt_byte(&message, min as i8, max as i8)?.into(),
            };
            PromptValue::Number(number)
        }
        AskCommand::Text {
            message,
            allow_empty,
        } => PromptValue::Text(prompter.prompt_input(&message, allow_empty)?),
        AskCommand::Menu {
            message,
            options,
            with_quit,
        } => PromptValue::Menu(prompter.prompt_menu(&message, options.as_slice(), with_quit)?),
    };
    Ok(value)
}
