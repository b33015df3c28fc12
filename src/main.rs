use std::{env, io};

use clap::Parser;
use tagsplit::{cli, commands, Cli, Splitter};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse_from(cli::expand_output_options(env::args_os()));

    let splitter = Splitter::new(
        cli.tag_id,
        cli.tag_value.into_bytes(),
        cli.max_edit_dist,
        cli.discard_missing_tags,
    );

    commands::split(
        cli.input_bam,
        cli.output_bam_1,
        cli.output_bam_2,
        &splitter,
    )?;

    Ok(())
}
