use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};

use apriori::{write_report, AprioriError, Config, TransactionIndex};

fn main() {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(AprioriError::Usage(usage)) => {
            println!("{}", usage);
            return;
        }
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, apriori::config::USAGE);
            process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let index = TransactionIndex::from_path(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, config, &index)?;
    out.flush()?;

    Ok(())
}
