use std::io::{self, Write};
use std::process::ExitCode;

use huffreport::compression::{FrequencyTable, Report};
use huffreport::{Config, Result};

fn run(args: &[String]) -> Result<()> {
    let config = Config::from_args(args)?;
    let table = FrequencyTable::from_path(&config.input_file)?;
    let report = Report::generate(&table)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
