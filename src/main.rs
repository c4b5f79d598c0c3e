use anyhow::Result;
use combo_select::app;
use combo_select::config::config::Config;
use combo_select::logging;

const DEMO_CANDIDATES: [&str; 8] = [
    "Aman", "Bhushan", "Chetan", "Daksh", "Ela", "Faiz", "Gohar", "Himesh",
];

fn main() -> Result<()> {
    let log_buffer = logging::init_tracing();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(target: "config", "falling back to defaults: {err:#}");
        Config::default()
    });

    let args: Vec<String> = std::env::args().skip(1).collect();
    let candidates: Vec<String> = if args.is_empty() {
        DEMO_CANDIDATES.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    let selected = app::run(candidates, &config, log_buffer)?;
    if let Some(selected) = selected {
        println!("{selected}");
    }

    Ok(())
}
