use clap::Parser;
use primer::cli::OutputArgs;
use primer::demos::variables;
use primer::output::print_transcript;

#[derive(Parser, Debug)]
#[command(
    name = "primer-variables",
    version,
    about = "Walkthrough of binding styles, defaults, constants, conversion, and shadowing"
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    print_transcript(cli.output.json, &variables::transcript())
}
