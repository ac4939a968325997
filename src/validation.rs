use crate::{City, CityMapError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CityValidator<'a> {
    city: &'a City,
}

impl<'a> CityValidator<'a> {
    pub(crate) fn new(city: &'a City) -> Self {
        Self { city }
    }

    pub(crate) fn validate(&self) -> Result<(), CityMapError> {
        if self.city.name().is_empty() {
            return Err(CityMapError::InvalidRecord(String::from(
                "City name should not be empty",
            )));
        }
        self.validate_geographical_coords()
    }

    fn validate_geographical_coords(&self) -> Result<(), CityMapError> {
        let (lat, lon) = (self.city.latitude(), self.city.longitude());
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CityMapError::InvalidRecord(format!(
                "{} has non-finite coordinate(s)",
                self.city.name()
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CityMapError::InvalidRecord(format!(
                "Latitude of {} should be in range -90 to 90, not {lat}",
                self.city.name()
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CityMapError::InvalidRecord(format!(
                "Longitude of {} should be in range -180 to 180, not {lon}",
                self.city.name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_city() {
        let city = City::new("Quito", -0.1807, -78.4678);
        assert!(CityValidator::new(&city).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let city = City::new("Nowhere", 91.0, 0.0);
        let result = CityValidator::new(&city).validate();
        assert!(matches!(result, Err(CityMapError::InvalidRecord(..))));

        let city = City::new("Nowhere", 0.0, -180.5);
        let result = CityValidator::new(&city).validate();
        assert!(matches!(result, Err(CityMapError::InvalidRecord(..))));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let city = City::new("Nowhere", f64::NAN, 0.0);
        let result = CityValidator::new(&city).validate();
        assert!(matches!(result, Err(CityMapError::InvalidRecord(..))));
    }

    #[test]
    fn rejects_empty_name() {
        let city = City::new("", 0.0, 0.0);
        let result = CityValidator::new(&city).validate();
        assert!(matches!(result, Err(CityMapError::InvalidRecord(..))));
    }
}
