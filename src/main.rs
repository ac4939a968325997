use kruskal_mst::{CityMap, CityMapConfig, TextRenderer};
use std::env;
use std::error::Error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("data/cities.csv"));
    let city_map = CityMap::from_path(&path, CityMapConfig::default())?;

    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    city_map.render(&mut renderer)?;

    let mut out = renderer.into_inner();
    match city_map.graph().mst_weight() {
        Some(weight) => writeln!(out, "total mst weight {weight}")?,
        None => writeln!(out, "total mst weight overflows")?,
    }
    Ok(())
}
