use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use alien_invasion::simulation::{
    allocate_alien_names, format_city_map, generate_city_map, read_city_map, write_city_map,
    CityMap, InvasionWorld, ThreadRandom,
};

#[derive(Parser)]
#[command(name = "alien_invasion")]
#[command(about = "Simulate aliens wandering a city map and destroying it")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random city map and write it to a file
    Generate {
        #[command(flatten)]
        grid: GridArgs,

        /// File to write the map to
        #[arg(long)]
        output: PathBuf,

        /// Seed for a reproducible map
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run an invasion on a generated or loaded map
    Run {
        /// Number of aliens
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
        aliens: u32,

        /// Maximum number of moves per alien
        #[arg(long, default_value_t = 10000, value_parser = clap::value_parser!(u32).range(1..=10000))]
        moves: u32,

        #[command(flatten)]
        grid: GridArgs,

        /// Map file to load instead of generating one
        #[arg(long, conflicts_with_all = ["width", "height"])]
        map_file: Option<PathBuf>,

        /// Token delimiter of the map file (whitespace when omitted)
        #[arg(long, requires = "map_file", value_parser = parse_delimiter)]
        delimiter: Option<char>,

        /// Seed for a reproducible invasion
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct GridArgs {
    /// Number of cities per row (grid columns)
    #[arg(long, default_value_t = 0)]
    width: usize,

    /// Number of rows in the grid
    #[arg(long, default_value_t = 0)]
    height: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate { grid, output, seed } => {
            let mut rng = random_source(seed);
            let city_map = generate_map(&grid, &mut rng)?;
            dump_map_into_file(&city_map, &output)?;
            info!("Wrote {} cities to {}", city_map.len(), output.display());
        }
        Command::Run {
            aliens,
            moves,
            grid,
            map_file,
            delimiter,
            seed,
        } => {
            let mut rng = random_source(seed);
            let city_map = match map_file {
                Some(path) => load_map(&path, delimiter)?,
                None => generate_map(&grid, &mut rng)?,
            };
            play_invasion(city_map, aliens as usize, moves as usize, rng)?;
        }
    }
    Ok(())
}

fn parse_delimiter(value: &str) -> std::result::Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(delimiter), None) => Ok(delimiter),
        _ => Err(format!("delimiter must be a single character, got '{}'", value)),
    }
}

fn random_source(seed: Option<u64>) -> ThreadRandom {
    match seed {
        Some(seed) => ThreadRandom::with_seed(seed),
        None => ThreadRandom::new(),
    }
}

fn generate_map(grid: &GridArgs, rng: &mut ThreadRandom) -> Result<CityMap> {
    if grid.width == 0 || grid.height == 0 {
        bail!("need to provide both --width and --height, or a --map-file");
    }
    generate_city_map(grid.height, grid.width, rng).context("cannot generate city map")
}

fn load_map(path: &Path, delimiter: Option<char>) -> Result<CityMap> {
    let file =
        File::open(path).with_context(|| format!("cannot open map file {}", path.display()))?;
    read_city_map(BufReader::new(file), delimiter)
        .with_context(|| format!("cannot read map file {}", path.display()))
}

fn dump_map_into_file(city_map: &CityMap, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_city_map(city_map, BufWriter::new(file))
        .with_context(|| format!("cannot write map to {}", path.display()))
}

fn play_invasion(
    city_map: CityMap,
    alien_count: usize,
    moves: usize,
    mut rng: ThreadRandom,
) -> Result<()> {
    info!("Obtained city map with {} cities", city_map.len());
    print!("{}", format_city_map(&city_map));

    let aliens = allocate_alien_names(&mut rng, alien_count).context("cannot generate alien names")?;
    info!("Generated aliens: {}", aliens.join(", "));

    let mut world = InvasionWorld::new(aliens.as_slice(), city_map, rng);
    info!("Invasion starting...");
    world.run(moves);

    info!("City map at the end of the invasion:");
    write_city_map(&world.city_map, io::stdout().lock()).context("cannot print city map")?;
    world.log_summary();
    Ok(())
}
