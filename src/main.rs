// Noncescan - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.2
//
// Command-line entry point: parse and validate arguments, initialize
// logging, run the nonce search, and emit the summary and optional JSON
// report.

use clap::Parser;
use log::{LevelFilter, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use noncescan::core::compact::bits_difficulty;
use noncescan::core::types::{Args, SearchJob};
use noncescan::search::runner::SearchRunner;
use noncescan::utils::format::FormatUtils;
use noncescan::Result;
use rand::Rng;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    init_logging(level)?;

    let header = args.header_bytes()?;
    let bits = args.compact_bits()?;

    let job = match SearchJob::from_bits(header, bits) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("❌ Invalid compact difficulty {:08x}: {}", bits, e);
            std::process::exit(1);
        }
    };

    let start_nonce = if args.random_start {
        rand::thread_rng().r#gen::<u32>()
    } else {
        args.start_nonce
    };
    let max_duration = (args.max_duration > 0).then(|| Duration::from_secs(args.max_duration));

    info!("🚀 Starting Noncescan - SHA-256d nonce search");
    info!("🎚️ Compact difficulty: {:08x} (difficulty {})", bits, bits_difficulty(bits));
    info!("🎯 Target: {}", hex::encode(job.target));
    info!(
        "🧵 Threads: {}",
        if args.threads == 0 { "auto".to_string() } else { args.threads.to_string() }
    );
    info!("🔢 Start nonce: {:08x}{}", start_nonce, if args.random_start { " (random)" } else { "" });
    match max_duration {
        Some(limit) => info!("⏱️ Max duration: {}s", limit.as_secs()),
        None => info!("⏱️ Max duration: unlimited (full nonce space)"),
    }

    let runner = SearchRunner::new(job.clone(), args.threads, start_nonce, max_duration);
    let outcome = runner.run().await?;

    info!("📊 Search Complete!");
    if outcome.result.found {
        info!("💎 Nonce found: {:08x} ({})", outcome.result.nonce, outcome.result.nonce);
        if let Some(hash) = outcome.result.hash {
            info!("#️⃣ Hash: {}", hex::encode(hash));
        }
    } else {
        info!("🛑 No satisfying nonce found");
    }
    info!(
        "⏱️ Duration: {}",
        FormatUtils::format_duration(Duration::from_nanos(
            u64::try_from(outcome.elapsed_nanos).unwrap_or(u64::MAX)
        ))
    );
    info!("⚡ Average hashrate: {}", FormatUtils::format_hashrate(outcome.hashrate));
    info!("🔥 Peak hashrate: {}", FormatUtils::format_hashrate(outcome.peak_hashrate));
    info!("📈 Total hashes: {}", FormatUtils::format_number(outcome.total_hashes));
    info!("🧵 Threads used: {}", outcome.thread_count);

    if let Some(path) = &args.report {
        let report = outcome.to_report(&job);
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &report)?;
        info!("📝 Report written to {}", path.display());
    }

    if !outcome.result.found {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
