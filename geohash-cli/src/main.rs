use anyhow::Result;
use clap::{Parser, Subcommand};
use geohash::Direction;
use std::path::PathBuf;

mod commands;

/// Geohash encoding and neighbor lookup tool
#[derive(Parser)]
#[command(name = "geohash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of characters in encoded geohashes
    #[arg(
        short,
        long,
        env = "GEOHASH_PRECISION",
        default_value = "12",
        allow_negative_numbers = true,
        global = true
    )]
    precision: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate as a geohash
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a geohash into its bounding cell
    Decode {
        /// Geohash to decode
        geohash: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the cell next to a geohash in one direction
    Neighbor {
        /// Geohash to start from
        geohash: String,

        /// Direction: top, right, bottom or left (north/east/south/west also work)
        direction: Direction,
    },

    /// Print the eight cells surrounding a geohash
    Neighbors {
        /// Geohash at the center of the grid
        geohash: String,

        /// Output result as JSON
        #[arg(short, long, conflicts_with = "geojson")]
        json: bool,

        /// Output the cell and its neighbors as a GeoJSON FeatureCollection
        #[arg(short, long)]
        geojson: bool,
    },

    /// Add a geohash column to every row of a CSV file
    Batch {
        /// Input CSV file
        input: PathBuf,

        /// Output file (defaults to <input>_geohash.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name for latitude
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude
        #[arg(long, default_value = "lon")]
        lon_col: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { lat, lon, json } => {
            commands::encode::run(lat, lon, cli.precision, json)
        }
        Commands::Decode { geohash, json } => commands::decode::run(&geohash, json),
        Commands::Neighbor { geohash, direction } => {
            commands::neighbors::run_single(&geohash, direction)
        }
        Commands::Neighbors {
            geohash,
            json,
            geojson,
        } => commands::neighbors::run(&geohash, json, geojson),
        Commands::Batch {
            input,
            output,
            lat_col,
            lon_col,
        } => commands::batch::run(input, output, lat_col, lon_col, cli.precision),
    }
}
