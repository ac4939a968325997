use kruskal_mst::{CityMap, CityMapConfig, CityMapError, DistanceMetric, TextRenderer};
use std::path::PathBuf;

fn cities_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/cities.csv")
}

#[test]
fn loads_dataset() {
    let city_map = CityMap::from_path(cities_path(), CityMapConfig::default()).unwrap();
    let graph = city_map.graph();
    assert_eq!(15, graph.n_nodes());
    assert_eq!(15 * 14, graph.n_edges());
    assert_eq!("New York", graph.nodes()[0].data().name());
}

#[test]
fn record_limit() {
    let config = CityMapConfig::builder().max_cities(5).build();
    let city_map = CityMap::from_path(cities_path(), config).unwrap();
    assert_eq!(5, city_map.graph().n_nodes());
    assert_eq!(4, city_map.graph().mst_edges().count());
}

#[test]
fn spanning_tree_links_every_city() {
    let city_map = CityMap::from_path(cities_path(), CityMapConfig::default()).unwrap();
    let graph = city_map.graph();
    let mst = graph.mst_edges().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(14, mst.len());

    // The lightest edge in the dataset is New York - Philadelphia
    let names = (
        graph.node(mst[0].node1()).data().name(),
        graph.node(mst[0].node2()).data().name(),
    );
    assert!(names == ("New York", "Philadelphia") || names == ("Philadelphia", "New York"));
    assert!((75..=85).contains(&mst[0].weight()));
}

#[test]
fn metrics_give_close_trees() {
    let great_circle = CityMap::from_path(cities_path(), CityMapConfig::default()).unwrap();
    let config = CityMapConfig::builder()
        .dist_metric(DistanceMetric::Haversine)
        .build();
    let haversine = CityMap::from_path(cities_path(), config).unwrap();

    let a = great_circle.graph().mst_weight().unwrap();
    let b = haversine.graph().mst_weight().unwrap();
    // Truncation can differ by at most one mile per edge
    assert!(a.abs_diff(b) <= 14);
}

#[test]
fn kilometres() {
    let miles = CityMap::from_path(cities_path(), CityMapConfig::default()).unwrap();
    let config = CityMapConfig::builder().earth_radius(6371.0).build();
    let kilometres = CityMap::from_path(cities_path(), config).unwrap();
    assert!(kilometres.graph().mst_weight().unwrap() > miles.graph().mst_weight().unwrap());
}

#[test]
fn text_rendering() {
    let config = CityMapConfig::builder().max_cities(3).build();
    let city_map = CityMap::from_path(cities_path(), config).unwrap();
    let mut renderer = TextRenderer::new(Vec::new());
    city_map.render(&mut renderer).unwrap();
    let text = String::from_utf8(renderer.into_inner()).unwrap();

    // Six directed edges, three nodes, two tree edges each with two endpoints
    assert_eq!(6, text.lines().filter(|l| l.starts_with("edge ")).count());
    assert_eq!(3, text.lines().filter(|l| l.starts_with("node ")).count());
    assert_eq!(2, text.lines().filter(|l| l.starts_with("mst edge ")).count());
    assert_eq!(4, text.lines().filter(|l| l.starts_with("mst node ")).count());
}

#[test]
fn missing_dataset() {
    let result = CityMap::from_path("no/such/cities.csv", CityMapConfig::default());
    assert!(matches!(result, Err(CityMapError::Io(..))));
}
