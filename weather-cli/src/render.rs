use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use weather_core::{ErrorResult, ViewState, WeatherSnapshot};

const COMPASS: [&str; 8] = ["북", "북동", "동", "남동", "남", "남서", "서", "북서"];

/// Eight-point Korean compass label for a wind bearing.
pub fn wind_direction(degrees: f64) -> &'static str {
    let sector = (degrees / 45.0).round() as i64;
    COMPASS[sector.rem_euclid(8) as usize]
}

/// Meters to kilometers with one decimal.
pub fn format_visibility(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

/// Whole degrees, rounding halves toward positive infinity.
pub fn format_degrees(celsius: f64) -> String {
    // `+ 0.0` turns -0.0 into 0.0
    let whole = (celsius + 0.5).floor() + 0.0;
    format!("{whole:.0}°C")
}

pub fn format_clock<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match DateTime::from_timestamp(timestamp, 0) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

pub fn render_snapshot(snapshot: &WeatherSnapshot) -> String {
    render_snapshot_in(snapshot, &Local)
}

fn render_snapshot_in<Tz: TimeZone>(snapshot: &WeatherSnapshot, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let loc = &snapshot.location;
    let cur = &snapshot.current;

    let original = loc
        .original_query
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != loc.name)
        .map(|o| format!(" ({o})"))
        .unwrap_or_default();

    format!(
        "📍 {name}, {country}{original}
   {temp}  {description} [{main}]
   체감온도 {feels_like}

   풍속      {wind_speed} m/s ({wind_dir})
   습도      {humidity}%
   기압      {pressure} hPa
   가시거리  {visibility}
   일출      {sunrise}
   일몰      {sunset}
   {icon}",
        name = loc.name,
        country = loc.country,
        temp = format_degrees(cur.temp),
        description = cur.weather.description,
        main = cur.weather.main,
        feels_like = format_degrees(cur.feels_like),
        wind_speed = cur.wind_speed,
        wind_dir = wind_direction(cur.wind_deg),
        humidity = cur.humidity,
        pressure = cur.pressure,
        visibility = format_visibility(cur.visibility),
        sunrise = format_clock(cur.sunrise, tz),
        sunset = format_clock(cur.sunset, tz),
        icon = snapshot.icon_url(),
    )
}

pub fn render_error(err: &ErrorResult) -> String {
    format!("⚠️  {}", err.message)
}

/// Text for the current state of an interactive session.
pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Idle => "한국어로 도시를 검색해보세요 (예: 서울, 부산, 도쿄, 뉴욕, 런던, 파리)".into(),
        ViewState::Loading => "날씨 정보를 불러오는 중...".into(),
        ViewState::Success(snapshot) => render_snapshot(snapshot),
        ViewState::Failure(err) => render_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use weather_core::{CurrentConditions, Location, WeatherCategory};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                name: "Seoul".into(),
                country: "KR".into(),
                original_query: Some("서울".into()),
            },
            current: CurrentConditions {
                temp: 22.35,
                feels_like: 21.6,
                humidity: 40.0,
                pressure: 1013.0,
                visibility: 9500.0,
                wind_speed: 3.6,
                wind_deg: 225.0,
                weather: WeatherCategory {
                    main: "Clear".into(),
                    description: "맑음".into(),
                    icon: "01d".into(),
                },
                // 2023-11-14 22:13:20 UTC
                sunrise: 1_700_000_000,
                sunset: 1_700_040_000,
            },
        }
    }

    #[test]
    fn compass_sectors() {
        assert_eq!(wind_direction(0.0), "북");
        assert_eq!(wind_direction(22.4), "북");
        assert_eq!(wind_direction(22.5), "북동");
        assert_eq!(wind_direction(90.0), "동");
        assert_eq!(wind_direction(200.0), "남");
        assert_eq!(wind_direction(225.0), "남서");
        assert_eq!(wind_direction(350.0), "북");
    }

    #[test]
    fn visibility_in_km() {
        assert_eq!(format_visibility(10000.0), "10.0 km");
        assert_eq!(format_visibility(9500.0), "9.5 km");
    }

    #[test]
    fn degrees_round_like_the_web_client() {
        assert_eq!(format_degrees(22.35), "22°C");
        assert_eq!(format_degrees(21.5), "22°C");
        assert_eq!(format_degrees(-0.4), "0°C");
        assert_eq!(format_degrees(-0.5), "0°C");
        assert_eq!(format_degrees(-2.5), "-2°C");
        assert_eq!(format_degrees(-2.6), "-3°C");
    }

    #[test]
    fn sub_zero_snapshot_has_no_negative_zero() {
        let mut snap = snapshot();
        snap.current.temp = -0.4;
        snap.current.feels_like = -2.5;
        let utc = FixedOffset::east_opt(0).unwrap();
        let text = render_snapshot_in(&snap, &utc);

        assert!(text.contains("   0°C  맑음"));
        assert!(!text.contains("-0°C"));
        assert!(text.contains("체감온도 -2°C"));
    }

    #[test]
    fn clock_uses_given_timezone() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_clock(1_700_000_000, &kst), "07:13");
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_clock(1_700_000_000, &utc), "22:13");
    }

    #[test]
    fn snapshot_rendering() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let text = render_snapshot_in(&snapshot(), &kst);

        assert!(text.starts_with("📍 Seoul, KR (서울)"));
        assert!(text.contains("22°C  맑음 [Clear]"));
        assert!(text.contains("체감온도 22°C"));
        assert!(text.contains("3.6 m/s (남서)"));
        assert!(text.contains("습도      40%"));
        assert!(text.contains("기압      1013 hPa"));
        assert!(text.contains("9.5 km"));
        assert!(text.contains("일출      07:13"));
        assert!(text.contains("https://openweathermap.org/img/wn/01d@2x.png"));
    }

    #[test]
    fn original_query_hidden_when_same_as_name() {
        let mut snap = snapshot();
        snap.location.original_query = Some("Seoul".into());
        let utc = FixedOffset::east_opt(0).unwrap();
        assert!(render_snapshot_in(&snap, &utc).starts_with("📍 Seoul, KR\n"));
    }

    #[test]
    fn error_and_loading_states() {
        let err = ErrorResult::not_found("Nonexistentville");
        assert!(render_state(&ViewState::Failure(err)).contains("Nonexistentville"));
        assert!(render_state(&ViewState::Loading).contains("불러오는 중"));
    }
}
