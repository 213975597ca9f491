//! Global market, weekly-task and badge catalogues.

use kasif_core::{
    errors::{KasifError, KasifResult},
    ids,
    models::catalog::{
        Badge, CreateBadgeRequest, CreateMarketItemRequest, CreateWeeklyTaskRequest, MarketItem,
        WeeklyTask,
    },
};

use crate::{schema::Collection, Database};

fn require_title(title: &str) -> KasifResult<()> {
    if title.trim().is_empty() {
        return Err(KasifError::Validation("Title cannot be empty".to_string()));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> KasifResult<()> {
    if value < 0 {
        return Err(KasifError::Validation(format!("{} cannot be negative", field)));
    }
    Ok(())
}

pub async fn market_items(db: &Database) -> Vec<MarketItem> {
    db.read().await.market_items.clone()
}

pub async fn tasks(db: &Database) -> Vec<WeeklyTask> {
    db.read().await.tasks.clone()
}

pub async fn badges(db: &Database) -> Vec<Badge> {
    db.read().await.badges.clone()
}

pub async fn add_market_item(db: &Database, req: &CreateMarketItemRequest) -> KasifResult<MarketItem> {
    require_title(&req.title)?;
    require_non_negative("Price", req.price)?;

    let item = MarketItem {
        id: ids::next_id().to_string(),
        title: req.title.trim().to_string(),
        price: req.price,
        currency: req.currency,
        icon: req.icon.clone(),
        description: req.description.clone(),
    };

    db.mutate(&[Collection::MarketItems], |state| {
        state.market_items.push(item.clone());
        Ok(item)
    })
    .await
}

pub async fn delete_market_item(db: &Database, id: &str) -> KasifResult<()> {
    db.mutate(&[Collection::MarketItems], |state| {
        let before = state.market_items.len();
        state.market_items.retain(|i| i.id != id);
        if state.market_items.len() == before {
            return Err(KasifError::NotFound(format!("Market item {} not found", id)));
        }
        Ok(())
    })
    .await
}

pub async fn add_task(db: &Database, req: &CreateWeeklyTaskRequest) -> KasifResult<WeeklyTask> {
    require_title(&req.title)?;
    require_non_negative("Reward", req.reward)?;

    let task = WeeklyTask {
        id: ids::next_id(),
        title: req.title.trim().to_string(),
        reward: req.reward,
        currency: req.currency,
        target: req.target.max(1),
    };

    db.mutate(&[Collection::Tasks], |state| {
        state.tasks.push(task.clone());
        Ok(task)
    })
    .await
}

pub async fn delete_task(db: &Database, id: i64) -> KasifResult<()> {
    db.mutate(&[Collection::Tasks], |state| {
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(KasifError::NotFound(format!("Task {} not found", id)));
        }
        Ok(())
    })
    .await
}

pub async fn add_badge(db: &Database, req: &CreateBadgeRequest) -> KasifResult<Badge> {
    require_title(&req.title)?;
    require_non_negative("Value", req.value)?;

    let badge = Badge {
        id: ids::next_id().to_string(),
        title: req.title.trim().to_string(),
        icon: req.icon.clone(),
        description: req.description.clone(),
        color: req.color.clone(),
        value: req.value,
    };

    db.mutate(&[Collection::Badges], |state| {
        state.badges.push(badge.clone());
        Ok(badge)
    })
    .await
}

/// Removes a badge from the catalogue. Students who already hold it keep the id.
pub async fn delete_badge(db: &Database, id: &str) -> KasifResult<()> {
    db.mutate(&[Collection::Badges], |state| {
        let before = state.badges.len();
        state.badges.retain(|b| b.id != id);
        if state.badges.len() == before {
            return Err(KasifError::NotFound(format!("Badge {} not found", id)));
        }
        Ok(())
    })
    .await
}
