use anyhow::Context;
use metservice_core::{
    Forecast, MetServiceApi, Observation, ObservationForecastHours, ObservationOneMin, Pollen,
    Resource, RiseSet, Timestamp,
};
use serde::Serialize;
use std::fmt::{self, Display, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Writes the text form of one record.
type Render<T> = fn(&mut String, &T) -> fmt::Result;

/// Fetch one resource and format it for the terminal.
pub async fn show(
    api: &dyn MetServiceApi,
    resource: Resource,
    location: &str,
    format: Format,
) -> anyhow::Result<String> {
    let ctx = || format!("Failed to fetch {resource} for '{location}'");

    match resource {
        Resource::Forecast => {
            let value = api.forecast(location).await.with_context(ctx)?;
            output(&value, format, forecast)
        }
        Resource::Observation => {
            let value = api.observation(location).await.with_context(ctx)?;
            output(&value, format, observation)
        }
        Resource::ObservationOneMin => {
            let value = api.observation_one_min(location).await.with_context(ctx)?;
            output(&value, format, one_min)
        }
        Resource::ObservationForecastHours => {
            let value = api
                .observation_forecast_hours(location)
                .await
                .with_context(ctx)?;
            output(&value, format, hourly)
        }
        Resource::Pollen => {
            let value = api.pollen(location).await.with_context(ctx)?;
            output(&value, format, pollen)
        }
        Resource::RiseSet => {
            let value = api.rise_set(location).await.with_context(ctx)?;
            output(&value, format, rise_set)
        }
    }
}

fn output<T: Serialize>(value: &T, format: Format, text: Render<T>) -> anyhow::Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(value).context("Failed to encode response as JSON")
        }
        Format::Text => {
            let mut out = String::new();
            text(&mut out, value).context("Failed to format response")?;
            Ok(out.trim_end().to_string())
        }
    }
}

fn or_dash<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map_or_else(|| "-".to_string(), T::to_string)
}

fn when(value: &Option<Timestamp>) -> String {
    match value {
        Some(ts) => ts.as_datetime().format("%a %d %b %H:%M").to_string(),
        None => "-".to_string(),
    }
}

fn wind(direction: &Option<String>, speed: &Option<i64>) -> String {
    format!("{} {}km/h", or_dash(direction), or_dash(speed))
}

fn forecast(out: &mut String, f: &Forecast) -> fmt::Result {
    writeln!(out, "{}", or_dash(&f.location_ips))?;
    for day in &f.days {
        writeln!(out)?;
        writeln!(out, "{}", when(&day.date))?;
        writeln!(out, "forecast: {}", or_dash(&day.forecast_word))?;
        writeln!(out, "max: {}C", or_dash(&day.max))?;
        writeln!(out, "min: {}C", or_dash(&day.min))?;
        if let Some(text) = &day.forecast {
            writeln!(out, "{text}")?;
        }
    }
    Ok(())
}

fn observation(out: &mut String, o: &Observation) -> fmt::Result {
    writeln!(out, "{}", or_dash(&o.location))?;
    if let Some(three) = &o.three_hour {
        let (temp, chill) = (or_dash(&three.temp), or_dash(&three.wind_chill));
        let wind_text = wind(&three.wind_direction, &three.wind_speed);
        writeln!(out, "observed: {}", when(&three.date))?;
        writeln!(out, "temperature: {temp}C (feels like {chill}C)")?;
        writeln!(out, "wind: {wind_text}")?;
        writeln!(out, "humidity: {}%", or_dash(&three.humidity))?;
        writeln!(out, "pressure: {}", or_dash(&three.pressure))?;
        writeln!(out, "rainfall: {}mm", or_dash(&three.rainfall))?;
    }
    if let Some(day) = &o.twenty_four_hour {
        writeln!(
            out,
            "{}: max {}C, min {}C, rainfall {}mm",
            or_dash(&day.date_pretty),
            or_dash(&day.max),
            or_dash(&day.min),
            or_dash(&day.rainfall)
        )?;
    }
    Ok(())
}

fn one_min(out: &mut String, o: &ObservationOneMin) -> fmt::Result {
    let current = match o.current {
        Some(true) => "current",
        Some(false) => "stale",
        None => "-",
    };
    writeln!(out, "observed: {} ({current})", when(&o.date))?;
    writeln!(out, "status: {}", or_dash(&o.status))?;
    writeln!(out, "humidity: {}%", or_dash(&o.relative_humidity))?;
    writeln!(out, "rainfall: {}mm", or_dash(&o.rainfall))?;
    writeln!(out, "clothing layers: {}", or_dash(&o.clothing_layers))?;
    if let Some(past) = &o.past {
        writeln!(out, "{past}")?;
    }
    Ok(())
}

fn hourly(out: &mut String, h: &ObservationForecastHours) -> fmt::Result {
    let (name, count) = (or_dash(&h.location_name), or_dash(&h.count));
    writeln!(out, "{name} ({count} data points)")?;
    writeln!(
        out,
        "rainfall observed {}mm, forecast {}mm",
        or_dash(&h.rainfall_total_observed),
        or_dash(&h.rainfall_total_forecast)
    )?;

    for hour in &h.observations {
        writeln!(
            out,
            "obs  {:>4} {}  {}C  {}mm  {}",
            or_dash(&hour.offset),
            when(&hour.date),
            or_dash(&hour.temp),
            or_dash(&hour.rainfall),
            wind(&hour.wind_direction, &hour.wind_speed)
        )?;
    }
    for hour in &h.forecasts {
        writeln!(
            out,
            "fcst {:>4} {}  {}C  {}mm  {}",
            or_dash(&hour.offset),
            when(&hour.date),
            or_dash(&hour.temp),
            or_dash(&hour.rainfall),
            wind(&hour.wind_direction, &hour.wind_speed)
        )?;
    }
    Ok(())
}

fn pollen(out: &mut String, p: &Pollen) -> fmt::Result {
    writeln!(out, "{}", or_dash(&p.location))?;
    if p.enabled == Some(false) {
        writeln!(out, "pollen forecasts are disabled for this location")?;
    }
    for day in &p.days {
        writeln!(
            out,
            "{}: {} {} (until {})",
            or_dash(&day.day_descriptor),
            or_dash(&day.kind),
            or_dash(&day.level),
            when(&day.valid_to)
        )?;
    }
    Ok(())
}

fn rise_set(out: &mut String, r: &RiseSet) -> fmt::Result {
    writeln!(out, "{}", or_dash(&r.location))?;
    writeln!(out, "first light: {}", when(&r.first_light))?;
    writeln!(out, "sunrise at {}", when(&r.sun_rise))?;
    writeln!(out, "sunset at {}", when(&r.sun_set))?;
    writeln!(out, "last light: {}", when(&r.last_light))?;
    writeln!(out, "moonrise at {}", when(&r.moon_rise))?;
    writeln!(out, "moonset at {}", when(&r.moon_set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use metservice_core::{Error, ForecastDay, ForecastHour, ObservationHour, Result};

    #[derive(Debug, Default)]
    struct Fake {
        forecast: Forecast,
        hourly: ObservationForecastHours,
        rise_set: RiseSet,
    }

    #[async_trait]
    impl MetServiceApi for Fake {
        async fn forecast(&self, _location: &str) -> Result<Forecast> {
            Ok(self.forecast.clone())
        }

        async fn observation(&self, _location: &str) -> Result<Observation> {
            Err(Error::UpstreamStatus { code: 404 })
        }

        async fn observation_one_min(&self, _location: &str) -> Result<ObservationOneMin> {
            Ok(ObservationOneMin::default())
        }

        async fn observation_forecast_hours(
            &self,
            _location: &str,
        ) -> Result<ObservationForecastHours> {
            Ok(self.hourly.clone())
        }

        async fn pollen(&self, location: &str) -> Result<Pollen> {
            Ok(Pollen {
                location: Some(location.to_string()),
                enabled: Some(false),
                ..Default::default()
            })
        }

        async fn rise_set(&self, _location: &str) -> Result<RiseSet> {
            Ok(self.rise_set.clone())
        }
    }

    fn dunedin() -> Fake {
        Fake {
            forecast: Forecast {
                location_ips: Some("DUNEDIN".into()),
                days: vec![ForecastDay {
                    date: Some(Timestamp::parse("2021-07-16T12:00:00+12:00").unwrap()),
                    forecast_word: Some("Partly cloudy".into()),
                    max: Some(13),
                    min: Some(7),
                    ..Default::default()
                }],
                ..Default::default()
            },
            hourly: ObservationForecastHours {
                observations: vec![ObservationHour {
                    date: Some(Timestamp::parse("2021-07-16T11:00:00+12:00").unwrap()),
                    offset: Some(-1),
                    rainfall: Some(0.0),
                    temp: Some(8.5),
                    wind_direction: Some("SW".into()),
                    wind_speed: Some(15),
                }],
                forecasts: vec![ForecastHour {
                    date: Some(Timestamp::parse("2021-07-16T13:00:00+12:00").unwrap()),
                    offset: Some(1),
                    temp: Some(9),
                    ..Default::default()
                }],
                count: Some(2),
                location_name: Some("Dunedin".into()),
                ..Default::default()
            },
            rise_set: RiseSet {
                id: Some("TEST".into()),
                sun_rise: Some(Timestamp::parse("2021-07-16T08:12:00+12:00").unwrap()),
                ..Default::default()
            },
        }
    }

    async fn text(resource: Resource) -> String {
        show(&dunedin(), resource, "Dunedin", Format::Text)
            .await
            .unwrap()
    }

    async fn json(resource: Resource) -> serde_json::Value {
        let out = show(&dunedin(), resource, "Dunedin", Format::Json)
            .await
            .unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[tokio::test]
    async fn forecast_text_lists_days() {
        let out = text(Resource::Forecast).await;

        assert_eq!(
            out,
            "DUNEDIN\n\nFri 16 Jul 12:00\nforecast: Partly cloudy\nmax: 13C\nmin: 7C"
        );
    }

    #[tokio::test]
    async fn json_output_uses_wire_encoding() {
        let value = json(Resource::RiseSet).await;

        assert_eq!(
            value,
            serde_json::json!({"id": "TEST", "sunRiseISO": "2021-07-16T08:12:00+12:00"})
        );
    }

    #[tokio::test]
    async fn forecast_json_writes_temperatures_as_strings() {
        let value = json(Resource::Forecast).await;

        assert_eq!(value["days"][0]["max"], "13");
    }

    #[tokio::test]
    async fn absent_fields_print_as_dash() {
        let out = text(Resource::RiseSet).await;

        assert!(out.contains("sunrise at Fri 16 Jul 08:12"), "{out}");
        assert!(out.contains("moonset at -"), "{out}");
    }

    #[tokio::test]
    async fn disabled_pollen_is_reported() {
        let out = text(Resource::Pollen).await;

        assert_eq!(
            out,
            "Dunedin\npollen forecasts are disabled for this location"
        );
    }

    #[tokio::test]
    async fn hourly_text_lists_observations_then_forecasts() {
        let out = text(Resource::ObservationForecastHours).await;

        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            [
                "Dunedin (2 data points)",
                "rainfall observed -mm, forecast -mm",
                "obs    -1 Fri 16 Jul 11:00  8.5C  0mm  SW 15km/h",
                "fcst    1 Fri 16 Jul 13:00  9C  -mm  - -km/h",
            ]
        );
    }

    #[tokio::test]
    async fn fetch_errors_carry_context() {
        let err = show(&dunedin(), Resource::Observation, "Dunedin", Format::Text)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to fetch observation for 'Dunedin'"
        );
        assert_eq!(
            err.root_cause().to_string(),
            "bad response status code: 404"
        );
    }
}
