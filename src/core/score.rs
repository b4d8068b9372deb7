use crate::domain::model::{ChaosLevel, ScoreBreakdown, TrafficFlow, WeatherObservation};

/// Congestion sub-score in [0, 10]: how far the current speed has fallen
/// below free flow, scaled and rounded to the nearest integer. Missing flow
/// data or a non-positive free-flow speed scores 0.
pub fn traffic_sub_score(flow: Option<&TrafficFlow>) -> f64 {
    let Some(flow) = flow else {
        return 0.0;
    };
    if flow.free_flow_speed <= 0.0 {
        tracing::warn!(
            "Traffic flow has non-positive free-flow speed ({}), scoring 0",
            flow.free_flow_speed
        );
        return 0.0;
    }
    let ratio = 1.0 - flow.current_speed / flow.free_flow_speed;
    (ratio.clamp(0.0, 1.0) * 10.0).round()
}

/// Rain sub-score in [0, 10], derived by an ordered ladder. Each step can
/// only raise the score reached so far:
///   1. base from measured precipitation: min(round(mm * 2), 10)
///   2. if that gave 0, a base from the condition category plus
///      description keywords (heavy/intense before light/shower)
///   3. humidity raise
///   4. alert-severity raise (extreme/severe forces 10)
pub fn rain_sub_score(obs: &WeatherObservation) -> f64 {
    let mut score = (obs.precipitation_mm * 2.0).round().min(10.0).max(0.0);

    if score == 0.0 {
        if matches!(
            obs.condition.as_deref(),
            Some("Rain") | Some("Thunderstorm") | Some("Drizzle")
        ) {
            score = 5.0;
        }

        let description = obs.description.to_lowercase();
        if description.contains("heavy") || description.contains("intense") {
            score = score.max(8.0);
        } else if description.contains("light") || description.contains("shower") {
            score = score.max(3.0);
        }
    }

    if obs.humidity > 90.0 {
        score = score.max(4.0);
    } else if obs.humidity > 80.0 {
        score = score.max(2.0);
    }

    if let Some(alert) = obs.alerts.first() {
        let severity = alert
            .severity
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        if severity.contains("extreme") || severity.contains("severe") {
            score = 10.0;
        } else if severity.contains("warning") {
            score = score.max(7.0);
        } else {
            score = score.max(5.0);
        }
    }

    score.clamp(0.0, 10.0)
}

/// Temperature sub-score in [0, 10], first match wins. Temperatures in the
/// comfortable 15–33 °C band (both boundaries included) score 2.
pub fn temp_sub_score(temp_c: f64) -> f64 {
    if temp_c > 38.0 {
        10.0
    } else if temp_c > 33.0 {
        8.0
    } else if temp_c < 10.0 {
        9.0
    } else if temp_c < 15.0 {
        7.0
    } else {
        2.0
    }
}

/// 1 during the morning (8–11) and evening (18–21) rush windows, else 0.
pub fn peak_bonus(hour: u32) -> u8 {
    if (8..=11).contains(&hour) || (18..=21).contains(&hour) {
        1
    } else {
        0
    }
}

/// Weighted combination of the sub-scores plus the peak bonus, rounded to
/// one decimal place and capped at 10.
pub fn aggregate(breakdown: &ScoreBreakdown) -> f64 {
    let raw = breakdown.traffic * 0.5
        + breakdown.rain * 0.25
        + breakdown.temp * 0.25
        + breakdown.news
        + f64::from(breakdown.peak);
    (round1(raw)).min(10.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn classify(score: f64) -> ChaosLevel {
    if score >= 9.0 {
        ChaosLevel::Extreme
    } else if score >= 7.0 {
        ChaosLevel::High
    } else if score >= 5.0 {
        ChaosLevel::Moderate
    } else {
        ChaosLevel::Low
    }
}
