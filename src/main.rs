use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Env};
use log::info;

use cafe_wall::{Args, CliRenderController, PpmFilePresenter, RngSource};

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let (options, seed) = args
        .render_options()
        .context("failed to load render settings")?;

    if let Some(seed) = seed {
        info!("using seed {seed}");
    }

    let mut controller =
        CliRenderController::new(PpmFilePresenter::new(), RngSource::from_seed(seed));

    controller
        .generate(&options)
        .context("failed to render the café wall")?;
    controller
        .write(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
