//! Countdown to the next game. The host owns the one-second timer and asks
//! for a tick each interval; an `Expired` tick means stop the timer.

use serde::{Deserialize, Serialize};

pub const EXPIRED_TEXT: &str = "EXPIRED";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub target_ms: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum CountdownTick {
    Running { parts: CountdownParts },
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownDisplay {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Countdown {
    pub fn new(target_ms: i64) -> Self { Self { target_ms } }

    pub fn tick(&self, now_ms: i64) -> CountdownTick {
        let distance = self.target_ms.saturating_sub(now_ms);
        if distance < 0 {
            CountdownTick::Expired
        } else {
            CountdownTick::Running { parts: CountdownParts::from_distance_ms(distance) }
        }
    }
}

impl CountdownParts {
    pub fn from_distance_ms(distance: i64) -> Self {
        Self {
            days: distance.div_euclid(MS_PER_DAY),
            hours: distance.rem_euclid(MS_PER_DAY) / MS_PER_HOUR,
            minutes: distance.rem_euclid(MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: distance.rem_euclid(MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn display(&self, include_units: bool) -> CountdownDisplay {
        CountdownDisplay {
            days: with_unit(self.days, "day", include_units),
            hours: with_unit(self.hours, "hour", include_units),
            minutes: with_unit(self.minutes, "minute", include_units),
            seconds: with_unit(self.seconds, "second", include_units),
        }
    }
}

fn with_unit(value: i64, unit: &str, include_units: bool) -> String {
    match (include_units, value) {
        (false, _) => value.to_string(),
        (true, 1) => format!("1 {unit}"),
        (true, _) => format!("{value} {unit}s"),
    }
}
