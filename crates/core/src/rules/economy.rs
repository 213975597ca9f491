//! GP/NP crediting and spending.
//!
//! Balances only move by rule-defined amounts: badge values, task rewards, prayer bonuses and
//! quiz scores credit; market purchases debit after a balance check.

use chrono::NaiveDate;

use crate::{
    errors::{KasifError, KasifResult},
    models::{
        catalog::{Badge, Currency, MarketItem, WeeklyTask},
        prayer::is_known_prayer,
        student::{PrayerKind, PrayerStatus, Student},
    },
};

use super::Outcome;

/// Highest score a single quiz round can report.
pub const MAX_QUIZ_SCORE: i64 = 1000;

/// Adds `amount` to a balance, refusing sums that do not fit.
fn credit(balance: &mut i64, amount: i64) -> KasifResult<()> {
    *balance = balance
        .checked_add(amount)
        .ok_or_else(|| KasifError::Validation("Balance limit exceeded".to_string()))?;
    Ok(())
}

/// Key of a prayer log entry: `YYYY-MM-DD-prayerId`.
pub fn prayer_key(date: NaiveDate, prayer_id: &str) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), prayer_id)
}

/// Buys `item`, debiting exactly its price from the matching currency.
///
/// A balance below the price rejects the purchase and leaves the student untouched.
pub fn purchase(student: &mut Student, item: &MarketItem) -> KasifResult<()> {
    let balance = student.balance(item.currency);
    if balance < item.price {
        return Err(KasifError::InsufficientBalance {
            currency: item.currency,
            balance,
            price: item.price,
        });
    }
    *student.balance_mut(item.currency) -= item.price;
    student.inventory.push(item.id.clone());
    Ok(())
}

/// Grants a badge once. The badge value is credited as GP.
pub fn award_badge(student: &mut Student, badge: &Badge) -> KasifResult<Outcome> {
    if student.badges.iter().any(|b| b == &badge.id) {
        return Ok(Outcome::Unchanged);
    }
    credit(&mut student.points, badge.value)?;
    student.badges.push(badge.id.clone());
    Ok(Outcome::Applied)
}

/// Marks a weekly task complete and credits its reward in the task's currency.
pub fn complete_task(student: &mut Student, task: &WeeklyTask) -> KasifResult<Outcome> {
    if student.completed_tasks.contains(&task.id) {
        return Ok(Outcome::Unchanged);
    }
    credit(student.balance_mut(task.currency), task.reward)?;
    student.completed_tasks.push(task.id);
    Ok(Outcome::Applied)
}

/// Logs a prayer for `date`. The first entry for a day and prayer wins; later entries of
/// either kind are ignored and credit nothing.
pub fn record_prayer(
    student: &mut Student,
    date: NaiveDate,
    prayer_id: &str,
    kind: PrayerKind,
    now_ms: i64,
) -> KasifResult<Outcome> {
    if !is_known_prayer(prayer_id) {
        return Err(KasifError::Validation(format!("Unknown prayer: {}", prayer_id)));
    }

    let key = prayer_key(date, prayer_id);
    if student.prayers.contains_key(&key) {
        return Ok(Outcome::Unchanged);
    }

    credit(&mut student.namaz_points, kind.bonus())?;
    student.prayers.insert(key, PrayerStatus { kind, timestamp: now_ms });
    Ok(Outcome::Applied)
}

/// Credits a finished quiz. Zero or negative scores credit nothing; scores above
/// [`MAX_QUIZ_SCORE`] are rejected.
pub fn credit_quiz_score(student: &mut Student, score: i64) -> KasifResult<Outcome> {
    if score <= 0 {
        return Ok(Outcome::Unchanged);
    }
    if score > MAX_QUIZ_SCORE {
        return Err(KasifError::Validation(format!(
            "Quiz score must be at most {}",
            MAX_QUIZ_SCORE
        )));
    }
    credit(student.balance_mut(Currency::Gp), score)?;
    Ok(Outcome::Applied)
}
