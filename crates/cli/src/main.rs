use clap::Parser;

use gildedrose_cli::Config;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = Config::parse();

    let stdout = std::io::stdout();
    gildedrose_cli::run(&config, &mut stdout.lock())
}
