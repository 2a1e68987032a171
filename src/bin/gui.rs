use anyhow::Context;
use env_logger::{Builder, Env};

use cafe_wall::{PixelsPresenterFactory, RngSource, RunGuiCommand};

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());

    command
        .execute(RngSource::from_seed(None))
        .context("café wall window failed")
}
