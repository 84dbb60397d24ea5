//! Typed records for each upstream response shape.
//!
//! Every field is optional: a missing or `null` key decodes to `None`, and
//! `None` is omitted again on encode. Keys the client does not model are
//! ignored.

pub mod forecast;
pub mod observation;
pub mod pollen;
pub mod riseset;

pub use forecast::{DayPart, DayPartTime, Forecast, ForecastDay, ForecastHour};
pub use observation::{
    Observation, ObservationForecastHours, ObservationHour, ObservationOneMin, ObservationThreeHour,
    ObservationTwentyFourHour,
};
pub use pollen::{Pollen, PollenDay};
pub use riseset::{DayRiseSet, RiseSet};
