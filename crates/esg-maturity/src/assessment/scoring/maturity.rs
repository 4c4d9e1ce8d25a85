use serde::{Deserialize, Serialize};

use super::super::error::ConfigurationError;

/// Ordered classification of overall ESG preparedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityLevel {
    Foundation,
    Developing,
    Established,
    Advanced,
    Leading,
}

impl MaturityLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Foundation,
            Self::Developing,
            Self::Established,
            Self::Advanced,
            Self::Leading,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Advanced => "Advanced",
            Self::Leading => "Leading",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Foundation => "Early stage ESG",
            Self::Developing => "Building capabilities",
            Self::Established => "Systematic approach",
            Self::Advanced => "Integrated strategy",
            Self::Leading => "Industry benchmark",
        }
    }
}

/// Lowest overall score that still maps to `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturityBand {
    pub floor: u8,
    pub level: MaturityLevel,
}

/// Inclusive score range of one level, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityRange {
    pub level: MaturityLevel,
    pub min_score: u8,
    pub max_score: u8,
    pub description: &'static str,
}

/// Boundary table mapping an overall score onto a maturity level. Every band is half-open
/// `[floor, next floor)` except the last, which runs through 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaturityScale {
    bands: Vec<MaturityBand>,
}

impl MaturityScale {
    pub fn standard() -> Self {
        Self {
            bands: vec![
                MaturityBand {
                    floor: 0,
                    level: MaturityLevel::Foundation,
                },
                MaturityBand {
                    floor: 35,
                    level: MaturityLevel::Developing,
                },
                MaturityBand {
                    floor: 50,
                    level: MaturityLevel::Established,
                },
                MaturityBand {
                    floor: 65,
                    level: MaturityLevel::Advanced,
                },
                MaturityBand {
                    floor: 80,
                    level: MaturityLevel::Leading,
                },
            ],
        }
    }

    pub fn new(bands: Vec<MaturityBand>) -> Result<Self, ConfigurationError> {
        let scale = Self { bands };
        scale.validate()?;
        Ok(scale)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let first = self
            .bands
            .first()
            .ok_or(ConfigurationError::EmptyMaturityScale)?;
        if first.floor != 0 {
            return Err(ConfigurationError::MaturityScaleStart { floor: first.floor });
        }

        for pair in self.bands.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            if current.floor <= previous.floor || current.floor > 100 {
                return Err(ConfigurationError::MaturityFloorOrder {
                    level: current.level,
                    floor: current.floor,
                });
            }
            if current.level <= previous.level {
                return Err(ConfigurationError::MaturityLevelOrder {
                    level: current.level,
                });
            }
        }

        for level in MaturityLevel::ordered() {
            if !self.bands.iter().any(|band| band.level == level) {
                return Err(ConfigurationError::MissingMaturityLevel { level });
            }
        }

        Ok(())
    }

    pub fn classify(&self, overall: u8) -> MaturityLevel {
        self.bands
            .iter()
            .take_while(|band| band.floor <= overall)
            .last()
            .map(|band| band.level)
            .unwrap_or(MaturityLevel::Foundation)
    }

    pub fn bands(&self) -> &[MaturityBand] {
        &self.bands
    }

    pub fn ranges(&self) -> Vec<MaturityRange> {
        self.bands
            .iter()
            .enumerate()
            .map(|(index, band)| {
                let max_score = self
                    .bands
                    .get(index + 1)
                    .map(|next| next.floor - 1)
                    .unwrap_or(100);
                MaturityRange {
                    level: band.level,
                    min_score: band.floor,
                    max_score,
                    description: band.level.description(),
                }
            })
            .collect()
    }
}

impl Default for MaturityScale {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scale_boundaries_are_exact() {
        let scale = MaturityScale::standard();
        let expectations = [
            (0, MaturityLevel::Foundation),
            (34, MaturityLevel::Foundation),
            (35, MaturityLevel::Developing),
            (49, MaturityLevel::Developing),
            (50, MaturityLevel::Established),
            (64, MaturityLevel::Established),
            (65, MaturityLevel::Advanced),
            (79, MaturityLevel::Advanced),
            (80, MaturityLevel::Leading),
            (100, MaturityLevel::Leading),
        ];

        for (overall, level) in expectations {
            assert_eq!(scale.classify(overall), level, "overall {overall}");
        }
    }

    #[test]
    fn standard_scale_is_valid() {
        assert!(MaturityScale::standard().validate().is_ok());
    }

    #[test]
    fn ranges_close_the_final_band_at_100() {
        let ranges = MaturityScale::standard().ranges();
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges[0].min_score, 0);
        assert_eq!(ranges[0].max_score, 34);
        assert_eq!(ranges[4].min_score, 80);
        assert_eq!(ranges[4].max_score, 100);
        assert_eq!(ranges[1].description, "Building capabilities");
    }

    #[test]
    fn rejects_scale_not_starting_at_zero() {
        let mut bands = MaturityScale::standard().bands().to_vec();
        bands[0].floor = 5;

        match MaturityScale::new(bands) {
            Err(ConfigurationError::MaturityScaleStart { floor: 5 }) => {}
            other => panic!("expected start violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_overlapping_floors() {
        let mut bands = MaturityScale::standard().bands().to_vec();
        bands[2].floor = 35;

        match MaturityScale::new(bands) {
            Err(ConfigurationError::MaturityFloorOrder { level, floor }) => {
                assert_eq!(level, MaturityLevel::Established);
                assert_eq!(floor, 35);
            }
            other => panic!("expected floor order violation, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_level() {
        let mut bands = MaturityScale::standard().bands().to_vec();
        bands.pop();

        match MaturityScale::new(bands) {
            Err(ConfigurationError::MissingMaturityLevel { level }) => {
                assert_eq!(level, MaturityLevel::Leading)
            }
            other => panic!("expected missing level, got {other:?}"),
        }
    }
}
