use anyhow::Result;
use qbankcheck::{dupes, report, table};
use std::{io, path::Path};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <questions_csv> [key_column]", args[0]);
        eprintln!(
            "Example: {} ./question_bank/filipino_lang_prof_v1.csv question_id",
            args[0]
        );
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let key_column = args
        .get(2)
        .map(String::as_str)
        .unwrap_or(dupes::DEFAULT_KEY_COLUMN);

    let table = table::load_csv(path)?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        "loaded {}",
        path.display()
    );

    let dupes = dupes::find_duplicates(&table, key_column)?;
    report::write_report(&mut io::stdout().lock(), &table, key_column, &dupes)?;

    Ok(())
}
