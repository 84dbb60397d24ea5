use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

use crate::model::{
    Forecast, Observation, ObservationForecastHours, ObservationOneMin, Pollen, RiseSet,
};

/// The upstream feeds this client knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Forecast,
    Observation,
    ObservationOneMin,
    ObservationForecastHours,
    Pollen,
    RiseSet,
}

impl Resource {
    /// Short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Forecast => "forecast",
            Resource::Observation => "observation",
            Resource::ObservationOneMin => "one-min",
            Resource::ObservationForecastHours => "hourly",
            Resource::Pollen => "pollen",
            Resource::RiseSet => "rise-set",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Resource::Forecast => "localForecast",
            Resource::Observation => "localObs_",
            Resource::ObservationOneMin => "oneMinObs_",
            Resource::ObservationForecastHours => "hourlyObsAndForecast_",
            Resource::Pollen => "pollen_town_",
            Resource::RiseSet => "riseSet_",
        }
    }

    /// Path below the base URL. The location is appended verbatim, so it
    /// must already match MetService's capitalization, e.g. `Dunedin`.
    pub fn path(&self, location: &str) -> String {
        format!("{}{location}", self.prefix())
    }

    pub const fn all() -> &'static [Resource] {
        &[
            Resource::Forecast,
            Resource::Observation,
            Resource::ObservationOneMin,
            Resource::ObservationForecastHours,
            Resource::Pollen,
            Resource::RiseSet,
        ]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Resource {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        Resource::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| {
                let names: Vec<_> = Resource::all().iter().map(Resource::as_str).collect();
                anyhow::anyhow!(
                    "Unknown resource '{value}'. Supported resources: {}.",
                    names.join(", ")
                )
            })
    }
}

/// A top-level record decoded from one resource's response body.
pub trait Entity: DeserializeOwned + Serialize + Default + Send + 'static {
    const RESOURCE: Resource;
}

impl Entity for Forecast {
    const RESOURCE: Resource = Resource::Forecast;
}

impl Entity for Observation {
    const RESOURCE: Resource = Resource::Observation;
}

impl Entity for ObservationOneMin {
    const RESOURCE: Resource = Resource::ObservationOneMin;
}

impl Entity for ObservationForecastHours {
    const RESOURCE: Resource = Resource::ObservationForecastHours;
}

impl Entity for Pollen {
    const RESOURCE: Resource = Resource::Pollen;
}

impl Entity for RiseSet {
    const RESOURCE: Resource = Resource::RiseSet;
}
