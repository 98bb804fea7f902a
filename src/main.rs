use ip_address_format::config::{Config, OutputFormat};
use ip_address_format::output::{format_error, AddressTable};
use ip_address_format::{parse, ParsedAddress};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;
use std::io::BufRead;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        log::info!("No arguments, reading addresses from stdin");
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                inputs.push(line.trim().to_string());
            }
        }
    }

    let mut failed = 0;
    for raw in &inputs {
        match parse(raw) {
            Ok(addr) => print_address(&addr, &config)?,
            Err(e) => {
                failed += 1;
                match config.output {
                    OutputFormat::Table => println!("{}", format_error(raw, &e.to_string())),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({
                            "input": raw,
                            "error": e.kind(),
                            "message": e.to_string(),
                        })
                    ),
                }
            }
        }
    }

    log::info!("#End main() {} parsed, {} failed", inputs.len() - failed, failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_address(addr: &ParsedAddress, config: &Config) -> Result<(), Box<dyn Error>> {
    let table = AddressTable::new(addr, &config.radixes, config.padded);
    match config.output {
        OutputFormat::Table => print!("{table}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&table)?),
    }
    Ok(())
}

/// Use the log4rs file when there is one, otherwise warnings to stderr.
fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("{log_config} not found, logging warnings to stderr");
    Ok(())
}
