use serde::Serialize;

/// Errors that can occur when validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A supplied parameter is outside its accepted range.
    #[error("invalid value for --{flag}: {value} is outside the accepted range {min}-{max}")]
    OutOfRange {
        /// The flag the value was supplied for.
        flag: &'static str,
        /// The supplied value.
        value: u32,
        /// The lower bound of the accepted range, inclusive.
        min: u32,
        /// The upper bound of the accepted range, inclusive.
        max: u32,
    },
}

/// Checks that `value` lies within the inclusive `min..=max` range for `flag`.
pub fn validate_range(
    flag: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            flag,
            value,
            min,
            max,
        });
    }

    Ok(())
}

/// The parameters of a simulation run.
///
/// Immutable once parsed. The engine itself accepts whatever it is handed;
/// range enforcement happens in [`SimulationConfig::validate`], which the
/// driver calls before constructing a simulation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationConfig {
    /// Percentage of grid cells occupied by trees.
    pub density: u32,
    /// Percentage of trees initially on fire.
    pub burning_fraction: u32,
    /// Percent chance that a qualifying tree ignites per cycle.
    pub catch_probability: u32,
    /// Minimum percentage of fire-exposed neighbors required for ignition.
    pub neighbor_threshold: u32,
    /// The grid is `size x size` cells.
    pub size: u32,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            density: 50,
            burning_fraction: 10,
            catch_probability: 30,
            neighbor_threshold: 25,
            size: 10,
        }
    }
}

impl SimulationConfig {
    /// Validates every parameter against its accepted range.
    ///
    /// Returns the first violation found, naming the offending flag and the
    /// accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range("density", self.density, 1, 100)?;
        validate_range("burning-fraction", self.burning_fraction, 1, 100)?;
        validate_range("catch-probability", self.catch_probability, 1, 100)?;
        validate_range("neighbor-threshold", self.neighbor_threshold, 0, 100)?;
        validate_range("size", self.size, 5, 40)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_validating_the_default_configuration_it_is_accepted() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn when_validating_an_out_of_range_density_it_is_rejected() {
        let config = SimulationConfig {
            density: 101,
            ..SimulationConfig::default()
        };

        let error = config.validate().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid value for --density: 101 is outside the accepted range 1-100"
        );
    }

    #[test]
    fn when_validating_a_zero_burning_fraction_it_is_rejected() {
        let config = SimulationConfig {
            burning_fraction: 0,
            ..SimulationConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn when_validating_a_zero_catch_probability_it_is_rejected() {
        let config = SimulationConfig {
            catch_probability: 0,
            ..SimulationConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn when_validating_a_zero_neighbor_threshold_it_is_accepted() {
        let config = SimulationConfig {
            neighbor_threshold: 0,
            ..SimulationConfig::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn when_validating_a_grid_size_outside_its_range_it_is_rejected() {
        for size in [4, 41] {
            let config = SimulationConfig {
                size,
                ..SimulationConfig::default()
            };

            let error = config.validate().unwrap_err();
            assert_eq!(
                error.to_string(),
                format!("invalid value for --size: {} is outside the accepted range 5-40", size)
            );
        }
    }

    #[test]
    fn when_validating_a_range_the_bounds_are_inclusive() {
        assert!(validate_range("density", 1, 1, 100).is_ok());
        assert!(validate_range("density", 100, 1, 100).is_ok());
        assert!(validate_range("density", 0, 1, 100).is_err());
        assert!(validate_range("density", 101, 1, 100).is_err());
    }
}
