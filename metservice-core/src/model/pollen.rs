use serde::{Deserialize, Serialize};

use crate::{codec, timestamp::Timestamp};

/// Pollen outlook for the next few days, served by `pollen_town_<Location>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pollen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        rename = "pollen",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "codec::seq::deserialize"
    )]
    pub days: Vec<PollenDay>,
    #[serde(
        rename = "pollenEnabled",
        skip_serializing_if = "Option::is_none",
        with = "codec::native"
    )]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollenDay {
    #[serde(rename = "dayDescriptor", skip_serializing_if = "Option::is_none")]
    pub day_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "validFromISO", skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<Timestamp>,
    #[serde(rename = "validToISO", skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<Timestamp>,
}
