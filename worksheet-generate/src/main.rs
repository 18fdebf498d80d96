// Entry point for the command line generator

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tokio::task::JoinHandle;
use common_types::Generate::{str_to_categories, GenerateRequestBuilder};
use worksheet_generate::{generate, render, E};

mod cli;
mod config;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), E> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .with_target(false)
        .without_time()
        .init();

    let categories = str_to_categories(&cli.categories)?;
    let request = GenerateRequestBuilder::default()
        .exercise_count(cli.count)
        .max_number(cli.range)
        .categories(categories)
        .random_answer_position(cli.random_answer_position)
        .build()?;

    let format = cli.format.unwrap_or(*config::FORMAT);
    let columns = cli.columns.unwrap_or(*config::COLUMNS);
    let path = match cli.output {
        Some(path) => path,
        None => config::OUTPUT_DIR.join(config::default_file_name(cli.range, cli.count, format)),
    };
    let seed = cli.seed;

    let handle: JoinHandle<Result<usize, E>>;
    {
        let path = path.clone();
        handle = tokio::task::spawn_blocking(move || {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let sheet = generate::generate(&request, &mut rng)?;
            render::save_sheet(&sheet, format, columns, &path)?;
            Ok(sheet.len())
        });
    }

    match handle.await? {
        Ok(count) => {
            tracing::info!("Saved {count} exercises as {format} to {}", path.display());
            Ok(())
        },
        Err(err) => {
            tracing::error!("Failed to generate sheet: {err}");
            Err(err)
        },
    }
}
