use crate::render::{render_graph, GraphRenderer};
use crate::validation::CityValidator;
use crate::{City, CityMapConfig, CityMapError, Graph};
use std::fs;
use std::path::Path;

const NUM_DATA_FIELDS: usize = 4;
const CITY_NAME_FIELD: usize = 0;
const LATITUDE_FIELD: usize = 2;
const LONGITUDE_FIELD: usize = 3;

/// A complete graph of cities, with every pair of distinct cities joined by an edge
/// weighted with the distance between them.
#[derive(Debug)]
pub struct CityMap {
    graph: Graph<City>,
    config: CityMapConfig,
}

impl CityMap {
    /// Reads city records from the file at `path`. See [`CityMap::from_records`] for the
    /// record format.
    pub fn from_path<P: AsRef<Path>>(path: P, config: CityMapConfig) -> Result<Self, CityMapError> {
        let contents = fs::read_to_string(path)?;
        Self::from_records(&contents, config)
    }

    /// Builds the map from comma separated records, one per line, laid out as
    /// `name,population,latitude,longitude`. The population is ignored.
    ///
    /// Malformed records are skipped with a warning. At most `max_cities` lines are
    /// consumed, skipped ones included.
    ///
    /// # Returns
    /// * The city map, or an error if no record could be used.
    ///
    /// # Examples
    /// ```
    ///use kruskal_mst::{CityMap, CityMapConfig};
    ///
    ///let records = "Boston,675647,42.3601,-71.0589\n\
    ///               Albany,99224,42.6526,-73.7562\n\
    ///               Providence,190934,41.8240,-71.4128";
    ///let city_map = CityMap::from_records(records, CityMapConfig::default()).unwrap();
    ///assert_eq!(3, city_map.graph().n_nodes());
    ///assert_eq!(6, city_map.graph().n_edges());
    /// ```
    pub fn from_records(records: &str, config: CityMapConfig) -> Result<Self, CityMapError> {
        let mut graph = Graph::new();
        for line in records.lines().take(config.max_cities) {
            match parse_record(line) {
                Ok(city) => {
                    graph.add_node(city);
                }
                Err(err) => eprintln!("MST_WARNING: Unable to parse line {line:?}. {err}"),
            }
        }
        if graph.n_nodes() == 0 {
            return Err(CityMapError::EmptyDataset);
        }

        let mut city_map = CityMap { graph, config };
        city_map.add_all_edges();
        Ok(city_map)
    }

    pub fn graph(&self) -> &Graph<City> {
        &self.graph
    }

    pub fn config(&self) -> &CityMapConfig {
        &self.config
    }

    /// Draws the map and highlights its minimum spanning tree.
    pub fn render<R: GraphRenderer<City, u32>>(&self, renderer: &mut R) -> Result<(), CityMapError> {
        render_graph(&self.graph, self.config.min_display_weight, renderer)
    }

    fn add_all_edges(&mut self) {
        let ids = self.graph.nodes().iter().map(|node| node.id()).collect::<Vec<_>>();
        for &current in &ids {
            for &other in &ids {
                if other == current {
                    continue;
                }
                let weight = self.config.dist_metric.calc_weight(
                    &self.graph.node(other).data().coords(),
                    &self.graph.node(current).data().coords(),
                    self.config.earth_radius,
                );
                self.graph.add_edge(other, current, weight);
            }
        }
    }
}

/// Parses a single `name,population,latitude,longitude` record.
pub fn parse_record(line: &str) -> Result<City, CityMapError> {
    let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
    if fields.len() != NUM_DATA_FIELDS {
        return Err(CityMapError::InvalidRecord(format!(
            "Expected {NUM_DATA_FIELDS} fields, found {}",
            fields.len()
        )));
    }
    let latitude = parse_coordinate(fields[LATITUDE_FIELD], "latitude")?;
    let longitude = parse_coordinate(fields[LONGITUDE_FIELD], "longitude")?;
    let city = City::new(fields[CITY_NAME_FIELD], latitude, longitude);
    CityValidator::new(&city).validate()?;
    Ok(city)
}

fn parse_coordinate(field: &str, name: &str) -> Result<f64, CityMapError> {
    field
        .parse::<f64>()
        .map_err(|err| CityMapError::InvalidRecord(format!("Bad {name} {field:?}: {err}")))
}
