use anyhow::{bail, Context, Result};
use clap::Parser;
use pokemon_combat::{load_roster, Battle, BattleConfig, Creature, Pokedex, TypeChart};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pit two creatures from a roster against each other.
#[derive(Debug, Parser)]
#[command(name = "pokemon-combat", version, about)]
struct Args {
    /// Creature that attacks first
    #[arg(required_unless_present = "list")]
    first: Option<String>,

    /// Creature that attacks second
    #[arg(required_unless_present = "list")]
    second: Option<String>,

    /// RON file with creature definitions
    #[arg(long, default_value = "data/roster.ron")]
    roster: PathBuf,

    /// RON file with battle settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many rounds
    #[arg(long, conflicts_with = "unbounded")]
    max_rounds: Option<u32>,

    /// Never stop early, even if neither creature can do damage
    #[arg(long)]
    unbounded: bool,

    /// Print the battle report as JSON instead of the text log
    #[arg(long)]
    json: bool,

    /// Print the roster and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let pokedex: Pokedex = load_roster(&args.roster)
        .with_context(|| format!("loading roster {}", args.roster.display()))?
        .into_iter()
        .collect();

    if args.list {
        print_roster(&pokedex);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => BattleConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => BattleConfig::default(),
    };
    if let Some(max_rounds) = args.max_rounds {
        config = BattleConfig::with_max_rounds(max_rounds);
    }
    if args.unbounded {
        config = BattleConfig::unbounded();
    }

    // Each side gets its own copy, so a creature may fight itself.
    let mut first = find_creature(&pokedex, args.first.as_deref())?;
    let mut second = find_creature(&pokedex, args.second.as_deref())?;

    let report = Battle::with_config(&mut first, &mut second, TypeChart::standard(), config).run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.log_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn find_creature(pokedex: &Pokedex, name: Option<&str>) -> Result<Creature> {
    let Some(name) = name else {
        bail!("two creature names are required");
    };

    if let Some(creature) = pokedex.get(name) {
        return Ok(creature.clone());
    }

    match pokedex.search_by_name(name).as_slice() {
        [only] => Ok((*only).clone()),
        [] => bail!("no creature named {:?} in the roster", name),
        several => {
            let names: Vec<&str> = several.iter().map(|creature| creature.name()).collect();
            bail!("{:?} is ambiguous: {}", name, names.join(", "))
        }
    }
}

fn print_roster(pokedex: &Pokedex) {
    const NAME_WIDTH: usize = 12;
    const TYPE_WIDTH: usize = 18;

    println!(
        "{:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:>4} {:>4} {:>4} {:>5}",
        "Name", "Type(s)", "HP", "ATK", "DEF", "Total"
    );
    for creature in pokedex.iter() {
        println!(
            "{:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:>4} {:>4} {:>4} {:>5}",
            creature.name(),
            creature.typing().to_string(),
            creature.health(),
            creature.attack(),
            creature.defense(),
            creature.total_stats()
        );
    }
}
