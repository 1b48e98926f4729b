pub mod config;
pub mod css;
pub mod engine;
pub mod format;
pub mod order;
pub mod registry;
pub mod scanner;
pub mod tokenizer;
pub mod variant;

use crate::registry::BaseClassRegistry;
use crate::variant::VariantRegistry;
use std::env;
use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Compile {
        config: Option<String>,
    },
    Dump {
        config: Option<String>,
    },
    List {
        config: Option<String>,
    },
    Format {
        inputs: Vec<String>,
        config: Option<String>,
        check: bool,
        ignore: Vec<String>,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    pub message: String,
}

pub fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Compile { config } => run_compile(config),
        Command::Dump { config } => run_dump(config),
        Command::List { config } => run_list(config),
        Command::Format {
            inputs,
            config,
            check,
            ignore,
        } => run_format(inputs, config, check, ignore),
        Command::Help => {
            print_help();
            Ok(())
        }
    }
}

pub fn run_from_env() -> Result<(), CliError> {
    let command = parse_args(env::args().skip(1))?;
    run(command)
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let args = args.into_iter().collect::<Vec<_>>();
    let Some(cmd) = args.first() else {
        return Ok(Command::Compile { config: None });
    };

    match cmd.as_str() {
        "compile" => parse_config_only("compile", &args[1..]).map(|config| Command::Compile { config }),
        "dump" => parse_config_only("dump", &args[1..]).map(|config| Command::Dump { config }),
        "list" => parse_config_only("list", &args[1..]).map(|config| Command::List { config }),
        "format" => parse_format_args(&args[1..]),
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-c" | "--config" => parse_config_only("compile", &args).map(|config| Command::Compile { config }),
        _ => Err(CliError {
            message: format!("unknown command: {}", cmd),
        }),
    }
}

fn parse_config_only(command: &str, args: &[String]) -> Result<Option<String>, CliError> {
    let mut config = None;
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "--config" | "-c" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: format!("{} requires a value for --config", command),
                    });
                }
                config = Some(args[idx].clone());
            }
            value => {
                return Err(CliError {
                    message: format!("unexpected argument for {}: {}", command, value),
                });
            }
        }
        idx += 1;
    }

    Ok(config)
}

fn parse_format_args(args: &[String]) -> Result<Command, CliError> {
    let mut inputs = Vec::new();
    let mut config = None;
    let mut check = false;
    let mut ignore = Vec::new();
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "--config" | "-c" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "format requires a value for --config".to_string(),
                    });
                }
                config = Some(args[idx].clone());
            }
            "--ignore" | "-I" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "format requires a value for --ignore".to_string(),
                    });
                }
                ignore.push(args[idx].clone());
            }
            "--check" => {
                check = true;
            }
            value => {
                inputs.push(value.to_string());
            }
        }
        idx += 1;
    }

    if inputs.is_empty() {
        return Err(CliError {
            message: "format requires at least one path or glob pattern".to_string(),
        });
    }

    Ok(Command::Format {
        inputs,
        config,
        check,
        ignore,
    })
}

/// Builds both registries from the theme at `config_path`, or from the
/// defaults when no path is given.
pub fn load_registries(
    config_path: Option<&str>,
) -> Result<(VariantRegistry, BaseClassRegistry), CliError> {
    let theme = match config_path {
        Some(path) => {
            let config = config::load(Path::new(path)).map_err(|err| CliError {
                message: err.message,
            })?;
            let theme = config::resolve_theme(&config);
            tracing::info!(path, theme = %theme.name, "loaded config");
            theme
        }
        None => config::ResolvedTheme::default(),
    };

    let variants = VariantRegistry::from_theme(&theme);
    let classes = BaseClassRegistry::from_theme(&theme);
    tracing::debug!(
        variants = variants.len(),
        classes = classes.len(),
        "built registries"
    );
    Ok((variants, classes))
}

fn run_compile(config: Option<String>) -> Result<(), CliError> {
    let (variants, classes) = load_registries(config.as_deref())?;
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| CliError {
            message: format!("failed to read stdin: {}", err),
        })?;
        let css = engine::parse_line_to_css(&line, &variants, &classes);
        out.write_all(css.as_bytes()).map_err(write_error)?;
        // Interactive use expects each line's CSS straight away.
        out.flush().map_err(write_error)?;
    }

    Ok(())
}

fn run_dump(config: Option<String>) -> Result<(), CliError> {
    let (_, classes) = load_registries(config.as_deref())?;
    let rules = named_rules(&classes);
    let mut out = BufWriter::new(io::stdout().lock());
    out.write_all(order::render_all(&rules).as_bytes())
        .map_err(write_error)?;
    out.flush().map_err(write_error)
}

fn run_list(config: Option<String>) -> Result<(), CliError> {
    let (_, classes) = load_registries(config.as_deref())?;
    let mut out = BufWriter::new(io::stdout().lock());
    for rule in named_rules(&classes) {
        writeln!(out, "{}", list_row(&rule)).map_err(write_error)?;
    }
    out.flush().map_err(write_error)
}

fn run_format(
    inputs: Vec<String>,
    config: Option<String>,
    check: bool,
    ignore: Vec<String>,
) -> Result<(), CliError> {
    let (variants, classes) = load_registries(config.as_deref())?;
    let files = scanner::resolve_inputs(&inputs, &ignore).map_err(|err| CliError {
        message: err.message,
    })?;

    let mut changed = 0usize;
    for path in &files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        let formatted = format::format_text(&text, &variants, &classes);
        if formatted == text {
            continue;
        }
        changed += 1;
        if check {
            println!("would reformat {}", path.display());
            continue;
        }
        fs::write(path, formatted).map_err(|err| CliError {
            message: format!("failed to write {}: {}", path.display(), err),
        })?;
        tracing::info!(path = %path.display(), "formatted");
    }

    eprintln!("checked {} files, {} changed", files.len(), changed);
    if check && changed > 0 {
        return Err(CliError {
            message: format!("{} file(s) would be reformatted", changed),
        });
    }
    Ok(())
}

/// Every ready-made class as a rule selecting itself, in output order.
fn named_rules(classes: &BaseClassRegistry) -> Vec<css::OrderedRule> {
    let mut rules = classes
        .ready_made()
        .map(|(name, rule)| {
            let mut rule = rule.clone();
            rule.rule.selector = name.to_string();
            rule
        })
        .collect::<Vec<_>>();
    order::sort_rules(&mut rules);
    rules
}

fn list_row(rule: &css::OrderedRule) -> String {
    let declarations = rule
        .rule
        .declarations
        .iter()
        .map(|declaration| format!("{}: {};", declaration.property, declaration.value))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{:<28} {:>6}  {}", rule.selector(), rule.order, declarations)
}

fn write_error(err: io::Error) -> CliError {
    CliError {
        message: format!("failed to write output: {}", err),
    }
}

fn print_help() {
    println!("gustcss");
    println!();
    println!("USAGE:");
    println!("  gustcss [compile] [--config <path>]");
    println!("  gustcss dump [--config <path>]");
    println!("  gustcss list [--config <path>]");
    println!("  gustcss format [--config <path>] [--check] [--ignore <glob>] <path|glob...>");
    println!();
    println!("Compile reads class names from stdin and prints CSS for each line.");
    println!("Set GUSTCSS_LOG (e.g. GUSTCSS_LOG=debug) to see skipped classes.");
    println!();
    println!("EXAMPLES:");
    println!("  echo \"md:hover:bg-red-500 aspect-video\" | gustcss");
    println!("  gustcss dump -c gustcss.toml > all.css");
    println!("  gustcss format \"src/**/*.{{html,tsx}}\"");
    println!("  gustcss format --check -I \"**/vendor/**\" templates");
}
