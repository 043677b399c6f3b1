mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, InputFormat};
use email_sift_core::{
    decode_input, deliver, load_config_file, parse_csv_emails, parse_delimiter,
    parse_manual_emails, to_json, BatchRunner, Config, ConfigBuilder, CsvExporter, ExportFormat,
    OutputTarget, VerificationSummary,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("Verification failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    tracing::debug!("Using configuration: {:?}", config);

    let emails = read_emails(&cli, config.csv_delimiter)?;
    if emails.is_empty() {
        tracing::warn!("No email addresses found in input; nothing to verify");
        return Ok(());
    }

    let runner = BatchRunner::new(&config);
    let progress = progress_bar(emails.len(), cli.no_progress)?;
    let progress_cb = progress.clone();
    let results = runner
        .run_with_progress(emails, move |done| progress_cb.set_position(done as u64))
        .await;
    progress.finish_and_clear();
    let results = results.context("An error occurred during email verification")?;

    let summary = VerificationSummary::from_results(&results);
    eprintln!("{}", summary);
    tracing::info!(
        "Verification completed at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let content = match cli.format {
        ExportFormat::Csv => CsvExporter::from_config(&config).export(&results),
        ExportFormat::Json => to_json(&results)?,
    };
    let target = output_target(&cli, &config);
    deliver(&content, &target)?;
    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut builder = ConfigBuilder::new();
    if let Some((file, path)) = load_config_file(cli.config.as_deref())? {
        builder = builder.with_file(&file, Some(path))?;
    }
    if let Some(ms) = cli.delay_ms {
        builder = builder.verification_delay(Duration::from_millis(ms));
    }
    if let Some(rate) = cli.invalid_rate {
        builder = builder.invalid_domain_rate(rate);
    }
    if let Some(seed) = cli.seed {
        builder = builder.rng_seed(seed);
    }
    if let Some(ref delimiter) = cli.delimiter {
        builder = builder.csv_delimiter(parse_delimiter(delimiter)?);
    }
    if cli.escape_csv {
        builder = builder.escape_csv(true);
    }
    Ok(builder.build()?)
}

fn read_emails(cli: &Cli, delimiter: char) -> Result<Vec<String>> {
    if !cli.emails.is_empty() {
        return Ok(parse_manual_emails(&cli.emails.join("\n")));
    }

    let bytes = if cli.reads_stdin() {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read emails from stdin")?;
        buf
    } else {
        let path = cli.input.as_deref().unwrap_or(Path::new("-"));
        std::fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };
    let text = decode_input(&bytes);

    let emails = match cli.resolved_input_format() {
        InputFormat::Csv => parse_csv_emails(&text, delimiter),
        InputFormat::Text => parse_manual_emails(&text),
    };
    Ok(emails)
}

fn output_target(cli: &Cli, config: &Config) -> OutputTarget {
    match cli.output {
        Some(ref out) => OutputTarget::from_arg(out),
        None => {
            let path = Path::new(&config.output_filename);
            match cli.format {
                ExportFormat::Csv => OutputTarget::File(path.to_path_buf()),
                ExportFormat::Json => OutputTarget::File(path.with_extension("json")),
            }
        }
    }
}

fn progress_bar(len: usize, hidden: bool) -> Result<ProgressBar> {
    if hidden {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
        )?
        .progress_chars("#>-"),
    );
    pb.set_message("verifying");
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
