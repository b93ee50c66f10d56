//! Meal commands

use crate::context::Context;
use anyhow::{bail, Result};
use clap::{Subcommand, ValueEnum};
use jowafrique_cli::output::{format_count, format_rating, print_json, render_marks, Status};
use jowafrique_cli::progress;
use jowafrique_core::models::{DayOfWeek, Meal, MealPatch, MealSlot};
use jowafrique_search::SearchSession;
use jowafrique_store::{AppState, CurrentMealStore, MealActions, MealsStore};
use jowafrique_telemetry::Timer;
use owo_colors::OwoColorize;
use serde_json::json;

/// Lunch or dinner
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Slot {
    Lunch,
    Dinner,
}

impl From<Slot> for MealSlot {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Lunch => Self::Lunch,
            Slot::Dinner => Self::Dinner,
        }
    }
}

#[derive(Subcommand)]
pub enum MealsCommand {
    /// List the meals of a plan
    List {
        /// Plan id (defaults to the selected plan)
        #[arg(long)]
        plan: Option<i64>,
    },

    /// Show the meal scheduled for now
    Current,

    /// Add a meal to a plan
    Add {
        /// Plan id
        #[arg(long)]
        plan: i64,

        /// Meal name
        name: String,

        /// Day of the week (Lundi … Dimanche)
        #[arg(long)]
        day: Option<DayOfWeek>,

        /// Lunch or dinner
        #[arg(long, value_enum)]
        slot: Option<Slot>,

        /// Main ingredient
        #[arg(long)]
        ingredient: Option<String>,

        /// Cuisine
        #[arg(long)]
        cuisine: Option<String>,
    },

    /// Rate a meal from 1 to 5
    Rate {
        /// Meal id
        id: i64,

        /// Rating
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },

    /// Attach notes to a meal
    Notes {
        /// Meal id
        id: i64,

        /// Notes text
        text: String,
    },

    /// Delete a meal
    Delete {
        /// Meal id
        id: i64,
    },

    /// Search the meals of a plan
    Search {
        /// Plan id (defaults to the selected plan)
        #[arg(long)]
        plan: Option<i64>,

        /// Search text
        query: String,
    },
}

pub async fn run(ctx: &Context, command: MealsCommand) -> Result<()> {
    match command {
        MealsCommand::List { plan } => list(ctx, plan).await,
        MealsCommand::Current => current(ctx).await,
        MealsCommand::Add {
            plan,
            name,
            day,
            slot,
            ingredient,
            cuisine,
        } => {
            let mut patch = MealPatch::default().with_name(name);
            if let Some(day) = day {
                patch = patch.with_day(day.as_str());
            }
            if let Some(slot) = slot {
                patch = patch.with_slot(slot.into());
            }
            if let Some(ingredient) = ingredient {
                patch = patch.with_ingredient(ingredient);
            }
            if let Some(cuisine) = cuisine {
                patch = patch.with_cuisine(cuisine);
            }
            add(ctx, plan, &patch).await
        }
        MealsCommand::Rate { id, rating } => {
            let actions = MealActions::new(ctx.api.clone());
            act(ctx, "Notation...", actions.rate(id, rating)).await?;
            done(ctx, id, &format!("Repas #{id} noté {}", format_rating(Some(rating))))
        }
        MealsCommand::Notes { id, text } => {
            let actions = MealActions::new(ctx.api.clone());
            act(ctx, "Ajout des notes...", actions.add_notes(id, text)).await?;
            done(ctx, id, &format!("Notes ajoutées au repas #{id}"))
        }
        MealsCommand::Delete { id } => {
            let store = MealsStore::new(ctx.api.clone(), None);
            act(ctx, "Suppression du repas...", store.remove(id)).await?;
            done(ctx, id, &format!("Repas #{id} supprimé"))
        }
        MealsCommand::Search { plan, query } => search_meals(ctx, plan, &query).await,
    }
}

/// Plan to use when none is given on the command line
fn plan_or_selected(plan: Option<i64>) -> Result<i64> {
    match plan.or_else(|| AppState::new().selected_plan_id()) {
        Some(id) => Ok(id),
        None => bail!("Aucun plan sélectionné"),
    }
}

async fn act<F>(ctx: &Context, message: &str, action: F) -> Result<()>
where
    F: std::future::Future<Output = jowafrique_store::StoreResult<()>>,
{
    let pb = ctx.spinner(message);
    let result = action.await;
    progress::finish_clear(&pb);
    Ok(result?)
}

fn done(ctx: &Context, id: i64, message: &str) -> Result<()> {
    if ctx.is_json() {
        print_json(&json!({ "success": true, "id": id }))?;
    } else {
        Status::success(message);
    }
    Ok(())
}

async fn fetch(ctx: &Context, plan: i64) -> Result<Vec<Meal>> {
    let store = MealsStore::new(ctx.api.clone(), Some(plan));
    let pb = ctx.spinner("Chargement des repas...");
    let timer = Timer::start("meals.fetch");
    let result = store.fetch().await;
    timer.stop();
    progress::finish_clear(&pb);
    result?;
    Ok(store.meals())
}

async fn list(ctx: &Context, plan: Option<i64>) -> Result<()> {
    let plan = plan_or_selected(plan)?;
    let meals = fetch(ctx, plan).await?;

    if ctx.is_json() {
        print_json(&meals)?;
        return Ok(());
    }

    Status::header(&format!(
        "Plan #{plan}: {}",
        format_count(meals.len(), "repas", "repas")
    ));
    for meal in &meals {
        print_meal(meal);
    }
    Ok(())
}

async fn current(ctx: &Context) -> Result<()> {
    let store = CurrentMealStore::new(ctx.api.clone());
    let pb = ctx.spinner("Recherche du repas actuel...");
    let result = store.fetch().await;
    progress::finish_clear(&pb);
    result?;

    let meal = store.meal();
    if ctx.is_json() {
        print_json(&meal)?;
        return Ok(());
    }

    match meal {
        Some(meal) => {
            Status::header("Repas actuel");
            print_meal(&meal);
            if let Some(total) = meal.total_time() {
                Status::field("Temps total", format!("{total} min"));
            }
            if let Some(url) = &meal.url {
                Status::field("Recette", url);
            }
        }
        None => Status::info("Aucun repas actuel"),
    }
    Ok(())
}

async fn add(ctx: &Context, plan: i64, patch: &MealPatch) -> Result<()> {
    let store = MealsStore::new(ctx.api.clone(), Some(plan));
    let pb = ctx.spinner("Ajout du repas...");
    let result = store.add(patch).await;
    progress::finish_clear(&pb);
    let meal = result?;

    if ctx.is_json() {
        print_json(&meal)?;
    } else {
        Status::success(&format!("Repas ajouté au plan #{plan} (#{})", meal.id));
    }
    Ok(())
}

async fn search_meals(ctx: &Context, plan: Option<i64>, query: &str) -> Result<()> {
    let options = ctx.meal_search_options()?;
    let plan = plan_or_selected(plan)?;
    let session = SearchSession::with_debounce(fetch(ctx, plan).await?, options, ctx.debounce());
    session.set_query(query);
    session.flush();
    let results = session.results();

    if ctx.is_json() {
        print_json(&results)?;
        return Ok(());
    }

    Status::header(&format!(
        "« {query} »: {}",
        format_count(results.len(), "repas", "repas")
    ));
    for result in &results {
        println!(
            "  {:>4}  {}  {}",
            format!("#{}", result.item.id).dimmed(),
            result.item.name.bold(),
            format!("{:.0}%", result.score * 100.0).dimmed()
        );
        for highlight in &result.highlights {
            println!("        {}", render_marks(highlight));
        }
    }
    Ok(())
}

fn print_meal(meal: &Meal) {
    let day = meal.day_of_week.as_deref().unwrap_or("-");
    let favorite = if meal.is_favorite() { "♥" } else { " " };
    println!(
        "  {:>4}  {:<9} {:<9} {} {}  {}",
        format!("#{}", meal.id).dimmed(),
        day,
        meal.slot.to_string(),
        favorite.red(),
        meal.name.bold(),
        format_rating(meal.rating).yellow()
    );
}
