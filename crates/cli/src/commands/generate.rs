use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use sentinel_simulation::{GeneratorConfig, generate_events, write_activity_log};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Where to write the activity log.
    #[arg(long, default_value = "logs/activity_logs.csv")]
    pub out: PathBuf,

    /// Number of random rows, before the injected suspicious ones.
    #[arg(long, default_value_t = 50)]
    pub count: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &GenerateArgs) -> anyhow::Result<()> {
    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
    }

    let events = generate_events(&GeneratorConfig {
        count: args.count,
        seed: args.seed,
    });
    write_activity_log(&args.out, &events)?;

    info!(path = %args.out.display(), rows = events.len(), "generated activity log");
    Ok(())
}
