use crate::distance::DistanceMetric;

// Defaults for parameters
const MAX_CITIES_DEFAULT: usize = 50;
const EARTH_RADIUS_DEFAULT: f64 = 3963.0; // miles
const DISTANCE_METRIC_DEFAULT: DistanceMetric = DistanceMetric::GreatCircle;
const MIN_DISPLAY_WEIGHT_DEFAULT: u32 = 10;

// Valid minimums/left bounds of parameters
const MAX_CITIES_MINIMUM: usize = 1;
const EARTH_RADIUS_MINIMUM: f64 = 1.0;

/// Settings used when turning city records into a graph and when rendering it.
/// Use `CityMapConfig::default()` unless you need to change them.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMapConfig {
    pub(crate) max_cities: usize,
    pub(crate) earth_radius: f64,
    pub(crate) dist_metric: DistanceMetric,
    pub(crate) min_display_weight: u32,
}

/// Builder object to set custom city map settings.
#[derive(Debug, Clone, Default)]
pub struct CityMapConfigBuilder {
    max_cities: Option<usize>,
    earth_radius: Option<f64>,
    dist_metric: Option<DistanceMetric>,
    min_display_weight: Option<u32>,
}

impl CityMapConfig {
    /// Enters the builder pattern, allowing custom settings to be applied using the
    /// various setter methods.
    ///
    /// # Returns
    /// * the configuration builder
    pub fn builder() -> CityMapConfigBuilder {
        CityMapConfigBuilder::default()
    }

    pub fn max_cities(&self) -> usize {
        self.max_cities
    }

    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    pub fn dist_metric(&self) -> DistanceMetric {
        self.dist_metric
    }

    pub fn min_display_weight(&self) -> u32 {
        self.min_display_weight
    }
}

impl Default for CityMapConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CityMapConfigBuilder {
    /// Sets the maximum number of records read from the data source. Every line counts
    /// towards the limit, including ones skipped as malformed. Defaults to 50.
    ///
    /// # Parameters
    /// * max_cities - the record limit
    ///
    /// # Returns
    /// * the configuration builder
    pub fn max_cities(mut self, max_cities: usize) -> CityMapConfigBuilder {
        let valid_max_cities =
            validate_input_left_bound(max_cities, MAX_CITIES_MINIMUM, "max_cities");
        self.max_cities = Some(valid_max_cities);
        self
    }

    /// Sets the radius of the sphere distances are measured on. The unit of the radius is
    /// the unit of the edge weights. Defaults to 3963 (miles).
    ///
    /// # Parameters
    /// * earth_radius - the radius
    ///
    /// # Returns
    /// * the configuration builder
    pub fn earth_radius(mut self, earth_radius: f64) -> CityMapConfigBuilder {
        let valid_earth_radius = if earth_radius.is_finite() {
            validate_input_left_bound(earth_radius, EARTH_RADIUS_MINIMUM, "earth_radius")
        } else {
            eprintln!(
                "MST_WARNING: earth_radius ({earth_radius}) must be finite. \
                Set to {EARTH_RADIUS_DEFAULT}."
            );
            EARTH_RADIUS_DEFAULT
        };
        self.earth_radius = Some(valid_earth_radius);
        self
    }

    /// Sets the distance metric used to weight the edge between two cities.
    /// Defaults to GreatCircle.
    ///
    /// # Parameters
    /// * dist_metric - the distance metric
    ///
    /// # Returns
    /// * the configuration builder
    pub fn dist_metric(mut self, dist_metric: DistanceMetric) -> CityMapConfigBuilder {
        self.dist_metric = Some(dist_metric);
        self
    }

    /// Sets the lightest edge that is drawn when rendering the whole graph. Edges of the
    /// spanning tree are highlighted regardless. Defaults to 10.
    ///
    /// # Parameters
    /// * min_display_weight - the visibility threshold
    ///
    /// # Returns
    /// * the configuration builder
    pub fn min_display_weight(mut self, min_display_weight: u32) -> CityMapConfigBuilder {
        self.min_display_weight = Some(min_display_weight);
        self
    }

    /// Finishes building the configuration.
    ///
    /// # Returns
    /// * The completed city map configuration.
    pub fn build(self) -> CityMapConfig {
        CityMapConfig {
            max_cities: self.max_cities.unwrap_or(MAX_CITIES_DEFAULT),
            earth_radius: self.earth_radius.unwrap_or(EARTH_RADIUS_DEFAULT),
            dist_metric: self.dist_metric.unwrap_or(DISTANCE_METRIC_DEFAULT),
            min_display_weight: self.min_display_weight.unwrap_or(MIN_DISPLAY_WEIGHT_DEFAULT),
        }
    }
}

fn validate_input_left_bound<P>(input_param: P, left_bound: P, param: &str) -> P
where
    P: PartialOrd + std::fmt::Display,
{
    if input_param < left_bound {
        eprintln!(
            "MST_WARNING: {param} ({input_param}) cannot be lower \
            than {left_bound}. Set to {left_bound}."
        );
        left_bound
    } else {
        input_param
    }
}
