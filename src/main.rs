use anyhow::Context;
use clap::Parser;
use league_recap::analysis::build_recap;
use league_recap::champions::ChampionRoster;
use league_recap::config::Config;
use league_recap::display::output::{display_error, display_info, display_recap, display_success};
use league_recap::input::load_matches;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "League Recap")]
#[command(about = "Build a year-end performance recap from collected match records", long_about = None)]
struct Args {
    /// Path to a JSON array of Match-V5 records
    matches_file: PathBuf,

    /// Target player PUUID
    puuid: String,

    /// Number of top champions to display (at most 5)
    #[arg(short, long, default_value = "5")]
    top_n: usize,

    /// Print the recap as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let roster = match &config.champion_data {
        Some(path) => ChampionRoster::from_file(path)
            .with_context(|| format!("loading champion table from {}", path.display()))?,
        None => ChampionRoster::builtin(),
    };

    if !args.json {
        display_info(&format!(
            "Analyzing {} for player {}",
            args.matches_file.display(),
            args.puuid
        ));
    }

    let matches = load_matches(&args.matches_file)?;
    let recap = build_recap(&matches, &args.puuid, &roster);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recap)?);
        return Ok(());
    }

    display_success(&format!(
        "Processed {} of {} records",
        recap.overview.total_games,
        matches.len()
    ));
    display_recap(&recap, &args.puuid, args.top_n);

    Ok(())
}
