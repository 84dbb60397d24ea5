use serde::{Deserialize, Serialize};

use super::forecast::ForecastHour;
use crate::{codec, timestamp::Timestamp};

/// Latest station observation, served by `localObs_<Location>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        rename = "locationId",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub location_id: Option<i64>,
    #[serde(rename = "threeHour", skip_serializing_if = "Option::is_none")]
    pub three_hour: Option<ObservationThreeHour>,
    #[serde(rename = "twentyFourHour", skip_serializing_if = "Option::is_none")]
    pub twenty_four_hour: Option<ObservationTwentyFourHour>,
}

/// Observation block refreshed every three hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationThreeHour {
    #[serde(
        rename = "clothingLayers",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub clothing_layers: Option<i64>,
    #[serde(rename = "dateTimeISO", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub rainfall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub temp: Option<i64>,
    #[serde(
        rename = "windChill",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub wind_chill: Option<i64>,
    #[serde(rename = "windDirection", skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,
    #[serde(
        rename = "windProofLayers",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub wind_proof_layers: Option<i64>,
    #[serde(
        rename = "windSpeed",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub wind_speed: Option<i64>,
}

/// Daily summary block. `date_pretty` is display text such as
/// `"Friday 16 Jul"`, not an instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationTwentyFourHour {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_pretty: Option<String>,
    #[serde(
        rename = "maxTemp",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub max: Option<i64>,
    #[serde(
        rename = "minTemp",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub rainfall: Option<f64>,
}

/// Minute-resolution snapshot, served by `oneMinObs_<Location>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationOneMin {
    #[serde(
        rename = "clothingLayers",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub clothing_layers: Option<i64>,
    #[serde(
        rename = "isObservationCurrent",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub rainfall: Option<f64>,
    #[serde(
        rename = "relativeHumidity",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub relative_humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "timeISO", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(
        rename = "windProofLayers",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub wind_proof_layers: Option<i64>,
}

/// Hourly observations followed by hourly forecasts, usually about 48
/// points in total. Served by `hourlyObsAndForecast_<Location>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationForecastHours {
    #[serde(
        rename = "actualData",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "codec::seq::deserialize"
    )]
    pub observations: Vec<ObservationHour>,
    #[serde(
        rename = "forecastData",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "codec::seq::deserialize"
    )]
    pub forecasts: Vec<ForecastHour>,
    #[serde(
        rename = "dataPointCount",
        skip_serializing_if = "Option::is_none",
        with = "codec::native"
    )]
    pub count: Option<i64>,
    #[serde(
        rename = "latestObsWindSpeed",
        skip_serializing_if = "Option::is_none",
        with = "codec::native"
    )]
    pub wind_speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "locationName", skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(
        rename = "rainfallTotalForecast",
        skip_serializing_if = "Option::is_none",
        with = "codec::native"
    )]
    pub rainfall_total_forecast: Option<f64>,
    #[serde(
        rename = "rainfallTotalObserved",
        skip_serializing_if = "Option::is_none",
        with = "codec::native"
    )]
    pub rainfall_total_observed: Option<f64>,
}

/// Hourly observation point of an [`ObservationForecastHours`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationHour {
    #[serde(rename = "dateISO", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::native")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub rainfall: Option<f64>,
    #[serde(
        rename = "temperature",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub temp: Option<f64>,
    #[serde(rename = "windDirection", skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,
    #[serde(
        rename = "windSpeed",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub wind_speed: Option<i64>,
}
