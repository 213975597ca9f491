use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One of the five daily prayers, with the hour used when no timetable is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerSlot {
    pub id: &'static str,
    pub label: &'static str,
    pub fallback_hour: u32,
}

pub const PRAYER_SLOTS: [PrayerSlot; 5] = [
    PrayerSlot { id: "sabah", label: "Sabah", fallback_hour: 5 },
    PrayerSlot { id: "ogle", label: "Öğle", fallback_hour: 13 },
    PrayerSlot { id: "ikindi", label: "İkindi", fallback_hour: 16 },
    PrayerSlot { id: "aksam", label: "Akşam", fallback_hour: 19 },
    PrayerSlot { id: "yatsi", label: "Yatsı", fallback_hour: 21 },
];

pub fn is_known_prayer(id: &str) -> bool {
    PRAYER_SLOTS.iter().any(|slot| slot.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTime {
    pub id: String,
    pub label: String,
    /// `HH:mm` as published by the timetable.
    pub time: String,
    pub hour: u32,
    pub minute: u32,
}

impl PrayerTime {
    fn starts_at(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    /// The prayer time has not arrived yet.
    Locked,
    /// Between this prayer and the next one.
    Current,
    /// Already passed today; still loggable.
    Past,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesResponse {
    pub city: String,
    pub country: String,
    pub times: Vec<PrayerTimeStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimeStatus {
    #[serde(flatten)]
    pub time: PrayerTime,
    pub status: WindowStatus,
}

/// Parses an `HH:mm` timetable entry. Trailing annotations such as `" (+03)"` are ignored.
pub fn parse_clock(raw: &str) -> Option<(u32, u32)> {
    let clock = raw.split_whitespace().next()?;
    let (h, m) = clock.split_once(':')?;
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Classifies prayer `id` against the ordered day timetable at wall-clock `now`.
///
/// The last prayer of the day has no successor, so once it starts it reports `Past`
/// until midnight.
pub fn window_status(times: &[PrayerTime], id: &str, now: NaiveTime) -> Option<WindowStatus> {
    let idx = times.iter().position(|t| t.id == id)?;
    let start = times[idx].starts_at()?;
    let now = now.with_nanosecond(0).unwrap_or(now);

    if now < start {
        return Some(WindowStatus::Locked);
    }

    let next = times.get(idx + 1).and_then(PrayerTime::starts_at);
    match next {
        Some(next) if now < next => Some(WindowStatus::Current),
        _ => Some(WindowStatus::Past),
    }
}
