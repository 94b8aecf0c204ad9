/// Build the gallery page for the current directory.
/// Reads `catalog.toml` from the working directory when present.
use anyhow::{Context, Result};

use dome_catalog::{BuildArgs, init_logger, parse_toml, run_build};

const CONFIG_FILE: &str = "catalog.toml";

fn main() -> Result<()> {
    let root = std::env::current_dir().context("Failed to read working directory")?;
    let config_toml = root.join(CONFIG_FILE);

    let args = if config_toml.is_file() {
        parse_toml(&config_toml, &root)
            .with_context(|| format!("Failed to parse {}", config_toml.display()))?
    } else {
        BuildArgs {
            images_dir: root.clone(),
            output: root.join(BuildArgs::default().output),
            ..Default::default()
        }
    };

    init_logger(args.verbose);
    tracing::debug!("{:#?}", args);

    let report = run_build(&args).context("Failed to build catalog")?;
    println!("{}", report.summary());

    Ok(())
}
