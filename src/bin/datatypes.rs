use clap::Parser;
use primer::cli::OutputArgs;
use primer::demos::datatypes;
use primer::output::print_transcript;

#[derive(Parser, Debug)]
#[command(
    name = "primer-datatypes",
    version,
    about = "Walkthrough of primitive, composite, reference, and special types"
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    print_transcript(cli.output.json, &datatypes::transcript())
}
