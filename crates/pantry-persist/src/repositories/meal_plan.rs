use std::sync::Arc;

use chrono::NaiveDate;
use pantry_types::{date_key, week_of, MealPlan, RecipeSummary, WeekStart};

use super::{absorb, read_or_default, write_record};
use crate::error::Result;
use crate::store::{KeyValueStore, MEAL_PLAN_KEY};

/// Recipes planned per calendar day
///
/// The same recipe may be planned on several days, or more than once on the
/// same day. Days whose last recipe is removed are dropped from the record.
#[derive(Clone)]
pub struct MealPlanRepository {
    store: Arc<dyn KeyValueStore>,
    week_start: WeekStart,
}

impl MealPlanRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            week_start: WeekStart::default(),
        }
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Whole plan, empty if none is stored or the record is unreadable
    pub fn plan(&self) -> MealPlan {
        read_or_default(self.store.as_ref(), MEAL_PLAN_KEY)
    }

    /// Recipes planned on `date`, in the order they were added
    pub fn get(&self, date: NaiveDate) -> Vec<RecipeSummary> {
        self.plan().remove(&date).unwrap_or_default()
    }

    pub fn add_recipe(&self, recipe: RecipeSummary, date: NaiveDate) {
        absorb(MEAL_PLAN_KEY, "add_recipe", self.try_add_recipe(recipe, date));
    }

    pub fn try_add_recipe(&self, recipe: RecipeSummary, date: NaiveDate) -> Result<()> {
        let mut plan = self.plan();
        tracing::debug!(id = %recipe.id, date = %date_key(date), "planning recipe");
        plan.entry(date).or_default().push(recipe);
        write_record(self.store.as_ref(), MEAL_PLAN_KEY, &plan)
    }

    pub fn remove_recipe(&self, id: &str, date: NaiveDate) {
        absorb(MEAL_PLAN_KEY, "remove_recipe", self.try_remove_recipe(id, date));
    }

    /// Remove every entry with `id` from `date`, reporting whether anything
    /// was removed
    pub fn try_remove_recipe(&self, id: &str, date: NaiveDate) -> Result<bool> {
        let mut plan = self.plan();
        let Some(recipes) = plan.get_mut(&date) else {
            return Ok(false);
        };

        let before = recipes.len();
        recipes.retain(|recipe| recipe.id != id);
        let removed = recipes.len() != before;
        let now_empty = recipes.is_empty();

        if !removed && !now_empty {
            return Ok(false);
        }
        if now_empty {
            plan.remove(&date);
        }
        write_record(self.store.as_ref(), MEAL_PLAN_KEY, &plan)?;
        Ok(removed)
    }

    /// The seven days of the planner week containing `anchor`
    pub fn week_of(&self, anchor: NaiveDate) -> Vec<NaiveDate> {
        week_of(anchor, self.week_start)
    }

    /// Each day of the week containing `anchor` with its planned recipes
    pub fn week(&self, anchor: NaiveDate) -> Vec<(NaiveDate, Vec<RecipeSummary>)> {
        let mut plan = self.plan();
        self.week_of(anchor)
            .into_iter()
            .map(|day| {
                let recipes = plan.remove(&day).unwrap_or_default();
                (day, recipes)
            })
            .collect()
    }
}
