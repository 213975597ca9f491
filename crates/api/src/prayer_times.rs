//! Daily prayer timetable for the configured city.
//!
//! The timetable comes from an Aladhan-compatible `timingsByCity` endpoint. Nothing is
//! cached; a failed fetch only fails the request that asked for it.

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use kasif_core::{
    errors::{KasifError, KasifResult},
    models::prayer::{
        parse_clock, window_status, PrayerTime, PrayerTimeStatus, PrayerTimesResponse,
        PRAYER_SLOTS,
    },
};
use serde::Deserialize;

use crate::config::PrayerApiConfig;

#[derive(Debug, Deserialize)]
struct TimingsEnvelope {
    data: TimingsData,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: Timings,
    meta: Meta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Timings {
    fajr: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

#[derive(Debug, Deserialize)]
struct Meta {
    timezone: String,
}

/// One day of prayer times in the city's own timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTimetable {
    pub times: Vec<PrayerTime>,
    pub timezone: Tz,
}

impl DayTimetable {
    /// Window status of every prayer at `now`, judged on the city's wall clock.
    pub fn statuses(&self, now: DateTime<Utc>) -> Vec<PrayerTimeStatus> {
        let local = now.with_timezone(&self.timezone).time();
        self.times
            .iter()
            .filter_map(|time| {
                window_status(&self.times, &time.id, local).map(|status| PrayerTimeStatus {
                    time: time.clone(),
                    status,
                })
            })
            .collect()
    }
}

/// Parses a `timingsByCity` response body.
pub fn parse_timetable(body: &str) -> KasifResult<DayTimetable> {
    let envelope: TimingsEnvelope = serde_json::from_str(body)
        .map_err(|e| KasifError::Upstream(format!("Unexpected timetable payload: {}", e)))?;
    let TimingsData { timings, meta } = envelope.data;

    let raw = [
        timings.fajr,
        timings.dhuhr,
        timings.asr,
        timings.maghrib,
        timings.isha,
    ];

    let times = PRAYER_SLOTS
        .iter()
        .zip(raw)
        .map(|(slot, value)| {
            let (hour, minute) = parse_clock(&value).ok_or_else(|| {
                KasifError::Upstream(format!("Unreadable time {:?} for {}", value, slot.id))
            })?;
            Ok(PrayerTime {
                id: slot.id.to_string(),
                label: slot.label.to_string(),
                time: format!("{:02}:{:02}", hour, minute),
                hour,
                minute,
            })
        })
        .collect::<KasifResult<Vec<_>>>()?;

    let timezone = meta.timezone.parse::<Tz>().unwrap_or_else(|_| {
        tracing::warn!("Unknown timetable timezone {}, falling back to UTC", meta.timezone);
        Tz::UTC
    });

    Ok(DayTimetable { times, timezone })
}

pub struct PrayerTimesClient {
    http: reqwest::Client,
    config: PrayerApiConfig,
}

impl PrayerTimesClient {
    pub fn new(config: PrayerApiConfig, timeout: Duration) -> eyre::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &PrayerApiConfig {
        &self.config
    }

    pub async fn fetch(&self) -> KasifResult<DayTimetable> {
        let url = format!("{}/timingsByCity", self.config.base_url.trim_end_matches('/'));
        let method = self.config.method.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("city", self.config.city.as_str()),
                ("country", self.config.country.as_str()),
                ("method", method.as_str()),
            ])
            .send()
            .await
            .map_err(|e| upstream("Timetable request failed", e))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Timetable service answered {}", status);
            return Err(KasifError::Upstream(format!(
                "Timetable service answered {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| upstream("Timetable body could not be read", e))?;
        parse_timetable(&body)
    }

    /// Fetches today's timetable and classifies it at `now`.
    pub async fn today(&self, now: DateTime<Utc>) -> KasifResult<PrayerTimesResponse> {
        let timetable = self.fetch().await?;
        Ok(PrayerTimesResponse {
            city: self.config.city.clone(),
            country: self.config.country.clone(),
            times: timetable.statuses(now),
        })
    }
}

fn upstream(context: &str, err: reqwest::Error) -> KasifError {
    tracing::warn!("{}: {}", context, err);
    KasifError::Upstream(format!("{}: {}", context, err))
}
