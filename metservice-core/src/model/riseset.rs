use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// Sun and moon rise/set times for one day.
///
/// The same shape is served on its own by `riseSet_<Location>` and nested
/// in every [`ForecastDay`](super::ForecastDay).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRiseSet")]
pub struct RiseSet {
    #[serde(rename = "dayISO", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(rename = "firstLightISO", skip_serializing_if = "Option::is_none")]
    pub first_light: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "lastLightISO", skip_serializing_if = "Option::is_none")]
    pub last_light: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "moonRiseISO", skip_serializing_if = "Option::is_none")]
    pub moon_rise: Option<Timestamp>,
    #[serde(rename = "moonSetISO", skip_serializing_if = "Option::is_none")]
    pub moon_set: Option<Timestamp>,
    #[serde(rename = "sunRiseISO", skip_serializing_if = "Option::is_none")]
    pub sun_rise: Option<Timestamp>,
    #[serde(rename = "sunSetISO", skip_serializing_if = "Option::is_none")]
    pub sun_set: Option<Timestamp>,
}

/// Rise/set data scoped to a single forecast day.
pub type DayRiseSet = RiseSet;

/// Decoding side of [`RiseSet`]. The live feed uses `id` and `moonRiseISO`,
/// older payloads use `ID` and `MoonRiseISO`. If a body carries both
/// spellings, the lowercase one wins.
#[derive(Default, Deserialize)]
#[serde(default)]
struct WireRiseSet {
    #[serde(rename = "dayISO")]
    date: Option<Timestamp>,
    #[serde(rename = "firstLightISO")]
    first_light: Option<Timestamp>,
    id: Option<String>,
    #[serde(rename = "ID")]
    id_upper: Option<String>,
    #[serde(rename = "lastLightISO")]
    last_light: Option<Timestamp>,
    location: Option<String>,
    #[serde(rename = "moonRiseISO")]
    moon_rise: Option<Timestamp>,
    #[serde(rename = "MoonRiseISO")]
    moon_rise_upper: Option<Timestamp>,
    #[serde(rename = "moonSetISO")]
    moon_set: Option<Timestamp>,
    #[serde(rename = "MoonSetISO")]
    moon_set_upper: Option<Timestamp>,
    #[serde(rename = "sunRiseISO")]
    sun_rise: Option<Timestamp>,
    #[serde(rename = "SunRiseISO")]
    sun_rise_upper: Option<Timestamp>,
    #[serde(rename = "sunSetISO")]
    sun_set: Option<Timestamp>,
    #[serde(rename = "SunSetISO")]
    sun_set_upper: Option<Timestamp>,
}

impl From<WireRiseSet> for RiseSet {
    fn from(wire: WireRiseSet) -> Self {
        RiseSet {
            date: wire.date,
            first_light: wire.first_light,
            id: wire.id.or(wire.id_upper),
            last_light: wire.last_light,
            location: wire.location,
            moon_rise: wire.moon_rise.or(wire.moon_rise_upper),
            moon_set: wire.moon_set.or(wire.moon_set_upper),
            sun_rise: wire.sun_rise.or(wire.sun_rise_upper),
            sun_set: wire.sun_set.or(wire.sun_set_upper),
        }
    }
}
