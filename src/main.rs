use anyhow::{Context, Result};
use clap::Parser;
use ngrams::cli::{Cli, OutputFormat};
use ngrams::config::Config;
use ngrams::generate::{generate, GenerateConfig};
use ngrams::json_output::{JsonOutput, JsonReport};
use ngrams::{report, tokenizer};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Gather input text from --input, positional words, or stdin
fn read_input(args: &Cli) -> Result<String> {
    if let Some(path) = &args.input {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read input from stdin")?;
    Ok(text)
}

/// Render the requested output as a single string
fn render(args: &Cli, words: &[String], config: &GenerateConfig) -> Result<String> {
    if args.report {
        let sections = report::build_report(words);
        return match args.format {
            OutputFormat::Text => {
                let mut buffer = Vec::new();
                report::write_text(&sections, &mut buffer)?;
                Ok(String::from_utf8(buffer)?)
            }
            OutputFormat::Json => JsonReport::new(words.len(), sections).to_json(),
        };
    }

    let result = generate(args.operation, words, config);

    match args.format {
        OutputFormat::Text => Ok(format!("{}\n", result.to_text())),
        OutputFormat::Json => {
            let json = JsonOutput::new(args.operation, words.len(), config, result).to_json()?;
            Ok(format!("{json}\n"))
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => Config::from_toml(path)?,
        None => Config::embedded_default()?,
    };

    let generate_config = GenerateConfig {
        size: args.size.unwrap_or(config.defaults.size),
        distance: args.distance.unwrap_or(config.defaults.distance),
        order: args.order.unwrap_or(config.defaults.order),
        case: args.case.unwrap_or(config.defaults.case),
    };

    let text = read_input(&args)?;
    let mut words = config.tokenizer()?.tokenize(&text);
    if tokenizer::is_empty_words(&words) {
        words.clear();
    }
    tracing::debug!(words = words.len(), ?generate_config, "tokenized input");

    let rendered = render(&args, &words, &generate_config)?;

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?,
    }

    Ok(())
}
