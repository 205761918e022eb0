use color_mst::{compute_mst, extract_distinct_colors, Color, PixelGrid};
use std::error::Error;
use std::{env, fs};
use tracing::info;
use tracing_subscriber::EnvFilter;

// One image row per line, pixels separated by whitespace, channels as "r,g,b"
fn parse_pixels(contents: &str) -> Result<Vec<Vec<Color>>, Box<dyn Error>> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().map(parse_pixel).collect::<Result<Vec<_>, _>>())
        .collect()
}

fn parse_pixel(token: &str) -> Result<Color, Box<dyn Error>> {
    let channels = token
        .split(',')
        .map(|channel| channel.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()?;
    match channels.as_slice() {
        &[red, green, blue] => Ok(Color::new(red, green, blue)),
        _ => Err(format!("pixel `{token}` does not have three channels").into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| String::from("test_pixels.txt"));
    let contents = fs::read_to_string(&path)?;
    let rows = parse_pixels(&contents)?;
    let grid = PixelGrid::from_rows(&rows)?;
    info!(path = %path, height = grid.height(), width = grid.width(), "loaded pixel grid");

    let distinct = extract_distinct_colors(&grid);
    let tree = compute_mst(&distinct)?;
    println!("{}", distinct.len());
    println!("{:.2}", tree.total_weight());
    Ok(())
}
