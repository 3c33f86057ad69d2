use serde::{Deserialize, Deserializer, Serialize};

/// A single time-ordered weather station reading
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    #[serde(default)]
    pub race_id: String,
    pub time_utc_seconds: i64,
    #[serde(default)]
    pub time_utc_str: Option<String>,
    /// Degrees Celsius
    pub air_temp: Option<f64>,
    /// Degrees Celsius
    pub track_temp: Option<f64>,
    /// Relative humidity, percent
    pub humidity: Option<f64>,
    /// hPa
    pub pressure: Option<f64>,
    /// kph
    pub wind_speed: Option<f64>,
    /// Bearing in degrees
    pub wind_direction: Option<f64>,
    /// 1 when the station reported rain. Blank cells are stored as null
    /// and read as no rain.
    #[serde(default, deserialize_with = "null_as_no_rain")]
    pub rain: u8,
}

fn null_as_no_rain<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u8>::deserialize(deserializer)?.unwrap_or_default())
}

impl WeatherSample {
    pub fn is_raining(&self) -> bool {
        self.rain > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_null_or_missing_is_dry() {
        let null_rain: WeatherSample =
            serde_json::from_str(r#"{"time_utc_seconds":60,"air_temp":24.0,"rain":null}"#).unwrap();
        let missing_rain: WeatherSample =
            serde_json::from_str(r#"{"time_utc_seconds":60,"air_temp":24.0}"#).unwrap();
        let wet: WeatherSample = serde_json::from_str(r#"{"time_utc_seconds":60,"rain":1}"#).unwrap();

        assert!(!null_rain.is_raining());
        assert!(!missing_rain.is_raining());
        assert!(wet.is_raining());
    }
}
