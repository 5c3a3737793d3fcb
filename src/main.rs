use clap::Parser;
use rowpost::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();
    return rowpost::run(args);
}
