use std::process::ExitCode;

use clap::Parser;
use invite_codes::{
    config::{STORE_ANON_KEY_VAR, StoreConfig},
    error::Result,
    infrastructure::store::{MemoryStore, RestStore},
    services::invite::{DEFAULT_BATCH_SIZE, create_batch, report_lines},
    utils::server::{LogFormat, init_tracing},
};

/// Generate a batch of unique invite codes and insert them into `invite_codes`.
#[derive(Debug, Parser)]
#[command(name = "generate_invite_codes", version)]
struct Args {
    /// Number of codes to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_BATCH_SIZE)]
    count: usize,

    /// Print the batch without contacting the store.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    if let Err(err) = init_tracing(LogFormat::Compact) {
        eprintln!("Failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let mut rng = rand::rng();

    let invites = if args.dry_run {
        create_batch(&MemoryStore::new(), &mut rng, args.count).await?
    } else {
        let config = StoreConfig::from_env(STORE_ANON_KEY_VAR)?;
        config.validate()?;
        let store = RestStore::new(&config)?;

        create_batch(&store, &mut rng, args.count).await?
    };

    for line in report_lines(&invites, args.dry_run) {
        println!("{line}");
    }

    Ok(())
}
