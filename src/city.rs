use std::fmt::{Display, Formatter};

/// A named location on the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        City {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The location as a `[latitude, longitude]` pair, the layout distance metrics expect.
    pub fn coords(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (lat. {:.6}, long. {:.6})",
            self.name, self.latitude, self.longitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let city = City::new("Boston", 42.3601, -71.0589);
        assert_eq!("Boston (lat. 42.360100, long. -71.058900)", city.to_string());
    }
}
