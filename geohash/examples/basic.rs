//! Basic example demonstrating geohash library usage.
//!
//! Run with: cargo run --example basic -- [precision]

use geohash::{adjacent_grid, decode, encode, GeohashError, GRID_DIRECTIONS};
use std::env;

fn main() -> Result<(), GeohashError> {
    let precision = env::args()
        .nth(1)
        .map(|arg| {
            arg.parse::<i64>().unwrap_or_else(|_| {
                eprintln!("Usage: cargo run --example basic -- [precision]");
                std::process::exit(1);
            })
        })
        .unwrap_or(7);
    let precision = geohash::checked_precision(precision)?;

    // Encode some famous places
    let locations = [
        ("Forbidden City, Beijing", 39.916345, 116.397155),
        ("Mount Fuji, Japan", 35.3606, 138.7274),
        ("Plaza Mayor, Madrid", 40.415363, -3.707398),
    ];

    println!("Geohashes at precision {}:", precision);
    println!("{:-<50}", "");

    for (name, lat, lon) in &locations {
        let hash = encode(*lat, *lon, precision)?;
        let cell = decode(&hash)?;
        println!(
            "{}: {} (±{:.5}° lat, ±{:.5}° lon)",
            name, hash, cell.lat.error, cell.lon.error
        );
    }

    // Show the neighborhood of the first location
    let (name, lat, lon) = locations[0];
    let hash = encode(lat, lon, precision)?;
    println!("\nNeighbors of {} ({}):", name, hash);
    for (position, neighbor) in GRID_DIRECTIONS.iter().zip(adjacent_grid(&hash)?) {
        match neighbor {
            Some(neighbor) => println!("  {:>12}: {}", position, neighbor),
            None => println!("  {:>12}: (off the map)", position),
        }
    }

    Ok(())
}
