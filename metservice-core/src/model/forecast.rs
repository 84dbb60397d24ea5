use serde::{Deserialize, Serialize};

use super::riseset::DayRiseSet;
use crate::{codec, timestamp::Timestamp};

/// A multi-day town forecast, served by `localForecast<Location>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "codec::seq::deserialize"
    )]
    pub days: Vec<ForecastDay>,
    #[serde(
        rename = "locationGFS",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub location_gfs: Option<i64>,
    #[serde(rename = "locationIPS", skip_serializing_if = "Option::is_none")]
    pub location_ips: Option<String>,
    #[serde(rename = "locationWASP", skip_serializing_if = "Option::is_none")]
    pub location_wasp: Option<String>,
    #[serde(
        rename = "saturdayForecastWord",
        skip_serializing_if = "Option::is_none"
    )]
    pub saturday_forecast_word: Option<String>,
    #[serde(rename = "sundayForecastWord", skip_serializing_if = "Option::is_none")]
    pub sunday_forecast_word: Option<String>,
}

/// One day of a [`Forecast`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastDay {
    #[serde(rename = "dateISO", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<String>,
    #[serde(rename = "forecastWord", skip_serializing_if = "Option::is_none")]
    pub forecast_word: Option<String>,
    #[serde(rename = "issuedAtISO", skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub min: Option<i64>,
    #[serde(rename = "partDayData", skip_serializing_if = "Option::is_none")]
    pub part: Option<DayPart>,
    #[serde(rename = "riseSet", skip_serializing_if = "Option::is_none")]
    pub rise_set: Option<DayRiseSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "sourceTemps", skip_serializing_if = "Option::is_none")]
    pub source_temps: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afternoon: Option<DayPartTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening: Option<DayPartTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning: Option<DayPartTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overnight: Option<DayPartTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPartTime {
    #[serde(rename = "forecastWord", skip_serializing_if = "Option::is_none")]
    pub forecast_word: Option<String>,
    #[serde(rename = "iconType", skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
}

/// Hourly forecast point of an
/// [`ObservationForecastHours`](super::ObservationForecastHours).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastHour {
    #[serde(rename = "dateISO", skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::native")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", with = "codec::text")]
    pub rainfall: Option<f64>,
    #[serde(
        rename = "temperature",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub temp: Option<i64>,
    #[serde(rename = "windDirection", skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,
    #[serde(
        rename = "windSpeed",
        skip_serializing_if = "Option::is_none",
        with = "codec::text"
    )]
    pub wind_speed: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, decode, model::RiseSet};
    use serde_json::json;

    const REFERENCE: &str = "2021-07-16T12:00:00+12:00";

    fn reference() -> Option<Timestamp> {
        Some(Timestamp::parse(REFERENCE).unwrap())
    }

    fn part_time() -> Option<DayPartTime> {
        Some(DayPartTime {
            forecast_word: Some("aaa".into()),
            icon_type: Some("bbb".into()),
        })
    }

    fn full() -> Forecast {
        Forecast {
            days: vec![ForecastDay {
                date: reference(),
                forecast: Some("aa".into()),
                forecast_word: Some("bb".into()),
                issued_at: reference(),
                max: Some(2),
                min: Some(1),
                part: Some(DayPart {
                    afternoon: part_time(),
                    evening: part_time(),
                    morning: part_time(),
                    overnight: part_time(),
                }),
                rise_set: Some(RiseSet {
                    date: reference(),
                    first_light: reference(),
                    id: Some("aaa".into()),
                    last_light: reference(),
                    location: Some("bbb".into()),
                    moon_rise: reference(),
                    moon_set: reference(),
                    sun_rise: reference(),
                    sun_set: reference(),
                }),
                source: Some("cc".into()),
                source_temps: Some("dd".into()),
            }],
            location_gfs: Some(123),
            location_ips: Some("a".into()),
            location_wasp: Some("b".into()),
            saturday_forecast_word: Some("c".into()),
            sunday_forecast_word: Some("d".into()),
        }
    }

    #[test]
    fn empty_object_is_all_absent() {
        let forecast: Forecast = decode(b"{}").unwrap();
        assert_eq!(forecast, Forecast::default());
        assert_eq!(serde_json::to_value(&forecast).unwrap(), json!({}));
    }

    #[test]
    fn encodes_numbers_as_strings() {
        let part = json!({"forecastWord": "aaa", "iconType": "bbb"});
        let want = json!({
            "days": [{
                "dateISO": REFERENCE,
                "forecast": "aa",
                "forecastWord": "bb",
                "issuedAtISO": REFERENCE,
                "max": "2",
                "min": "1",
                "partDayData": {
                    "afternoon": part,
                    "evening": part,
                    "morning": part,
                    "overnight": part,
                },
                "riseSet": {
                    "dayISO": REFERENCE,
                    "firstLightISO": REFERENCE,
                    "id": "aaa",
                    "lastLightISO": REFERENCE,
                    "location": "bbb",
                    "moonRiseISO": REFERENCE,
                    "moonSetISO": REFERENCE,
                    "sunRiseISO": REFERENCE,
                    "sunSetISO": REFERENCE,
                },
                "source": "cc",
                "sourceTemps": "dd",
            }],
            "locationGFS": "123",
            "locationIPS": "a",
            "locationWASP": "b",
            "saturdayForecastWord": "c",
            "sundayForecastWord": "d",
        });

        assert_eq!(serde_json::to_value(full()).unwrap(), want);
    }

    #[test]
    fn round_trips() {
        let body = serde_json::to_vec(&full()).unwrap();
        assert_eq!(decode::<Forecast>(&body).unwrap(), full());
    }

    #[test]
    fn max_and_min_accept_either_encoding() {
        let body = br#"{"days":[{"max":"13","min":7},{"max":11,"min":"8"}]}"#;
        let forecast: Forecast = decode(body).unwrap();

        let temps: Vec<_> = forecast.days.iter().map(|d| (d.max, d.min)).collect();
        assert_eq!(temps, vec![(Some(13), Some(7)), (Some(11), Some(8))]);
    }

    #[test]
    fn non_numeric_max_names_the_field() {
        let body = br#"{"days":[{"max":"13"},{"max":"warm"}]}"#;
        let err = decode::<Forecast>(body).unwrap_err();
        match err {
            Error::SchemaMismatch { field, .. } => assert_eq!(field, "days[1].max"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_days_is_empty() {
        let forecast: Forecast = decode(br#"{"days":null,"locationIPS":"DUNEDIN"}"#).unwrap();
        assert!(forecast.days.is_empty());
        assert_eq!(forecast.location_ips.as_deref(), Some("DUNEDIN"));
    }

    #[test]
    fn missing_nested_parts_stay_absent() {
        let body = br#"{"days":[{"partDayData":{"morning":{"iconType":"DAY"}}}]}"#;
        let forecast: Forecast = decode(body).unwrap();
        let part = forecast.days[0].part.as_ref().unwrap();
        let morning = part.morning.as_ref().unwrap();

        assert_eq!(morning.icon_type.as_deref(), Some("DAY"));
        assert_eq!(morning.forecast_word, None);
        assert_eq!(part.evening, None);
        assert_eq!(forecast.days[0].rise_set, None);
    }

    #[test]
    fn forecast_hour_round_trips() {
        let hour = ForecastHour {
            date: reference(),
            humidity: Some(80),
            offset: Some(3),
            rainfall: Some(0.4),
            temp: Some(9),
            wind_direction: Some("NE".into()),
            wind_speed: Some(20),
        };

        let value = serde_json::to_value(&hour).unwrap();
        assert_eq!(value["offset"], json!(3));
        assert_eq!(value["rainfall"], json!("0.4"));
        assert_eq!(value["temperature"], json!("9"));

        let back: ForecastHour = serde_json::from_value(value).unwrap();
        assert_eq!(back, hour);
    }
}
