use serde::{Deserialize, Serialize};
use std::fmt;

/// The two point currencies a student holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// General points, earned from tasks, badges and games.
    #[serde(rename = "GP")]
    Gp,
    /// Namaz points, earned from prayer logging and prayer-linked tasks.
    #[serde(rename = "NP")]
    Np,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Gp => f.write_str("GP"),
            Currency::Np => f.write_str("NP"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketItem {
    pub id: String,
    pub title: String,
    pub price: i64,
    pub currency: Currency,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTask {
    pub id: i64,
    pub title: String,
    pub reward: i64,
    pub currency: Currency,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub color: String,
    pub value: i64,
}

/// A surah students memorize; its id keys the memorization map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub id: &'static str,
    pub title: &'static str,
    pub audio_url: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMarketItemRequest {
    pub title: String,
    pub price: i64,
    pub currency: Currency,
    #[serde(default = "default_item_icon")]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeeklyTaskRequest {
    pub title: String,
    pub reward: i64,
    pub currency: Currency,
    #[serde(default = "default_task_target")]
    pub target: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBadgeRequest {
    pub title: String,
    #[serde(default = "default_badge_icon")]
    pub icon: String,
    pub value: i64,
    #[serde(default = "default_badge_color")]
    pub color: String,
    #[serde(default)]
    pub description: String,
}

fn default_item_icon() -> String {
    "🎁".to_string()
}

fn default_badge_icon() -> String {
    "🏅".to_string()
}

fn default_badge_color() -> String {
    "bg-blue-500".to_string()
}

fn default_task_target() -> u32 {
    1
}
