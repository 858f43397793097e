use clap::Args;

/// Output options shared by both binaries.
#[derive(Args, Debug)]
pub struct OutputArgs {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}
