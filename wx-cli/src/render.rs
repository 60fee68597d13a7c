use wx_core::{ForecastResult, Location, Period};

/// Python-style title case: a letter is uppercased when it follows a non-letter.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

pub fn render_forecast(result: &ForecastResult, detailed: bool) -> String {
    let mut lines = Vec::new();
    for (location, periods) in result {
        lines.push(format!("NWS Forecast for {}", title_case(location)));
        for period in periods {
            let details = if detailed { period_details(period) } else { String::new() };
            lines.push(format!("  - {}{details}: {}", period.name, period.detailed_forecast));
        }
    }
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Bracketed time window, temperature and wind, or empty if none are known.
fn period_details(period: &Period) -> String {
    let mut parts = Vec::new();

    match (period.start_time, period.end_time) {
        (Some(start), Some(end)) => {
            parts.push(format!("{} to {}", start.format("%a %H:%M"), end.format("%a %H:%M")))
        }
        (Some(start), None) => parts.push(format!("from {}", start.format("%a %H:%M"))),
        _ => {}
    }

    if let Some(temp) = period.temperature {
        let unit = period.temperature_unit.as_deref().unwrap_or("");
        parts.push(format!("{temp}°{unit}"));
    }

    match (&period.wind_speed, &period.wind_direction) {
        (Some(speed), Some(dir)) => parts.push(format!("wind {speed} {dir}")),
        (Some(speed), None) => parts.push(format!("wind {speed}")),
        _ => {}
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" [{}]", parts.join(", "))
    }
}

pub fn print_forecast(result: &ForecastResult, detailed: bool) {
    print!("{}", render_forecast(result, detailed));
}

pub fn render_locations(locations: &[Location]) -> String {
    locations
        .iter()
        .map(|loc| {
            format!(
                "{:<16} {:>9.5}, {:>10.5}  {:>5} ft\n",
                title_case(loc.name),
                loc.coordinates.latitude,
                loc.coordinates.longitude,
                loc.elevation,
            )
        })
        .collect()
}
