use anyhow::{Context, Result};
use card_splitter::{CardSplitter, SOURCE_PATH};

fn run() -> Result<()> {
    let splitter = CardSplitter::default();
    let report = splitter
        .run()
        .with_context(|| format!("Failed to split {}", SOURCE_PATH))?;
    println!("{}", report);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
}
