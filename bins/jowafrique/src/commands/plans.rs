//! Weekly plan commands

use crate::context::Context;
use anyhow::Result;
use clap::Subcommand;
use jowafrique_cli::output::{format_count, print_json, render_marks, Status};
use jowafrique_cli::progress;
use jowafrique_core::models::{BudgetLevel, NewPlanRequest, UserPreferences, WeeklyPlan};
use jowafrique_search::SearchSession;
use jowafrique_store::{AiFeatures, PlansStore};
use jowafrique_telemetry::Timer;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Subcommand)]
pub enum PlansCommand {
    /// List all plans
    List,

    /// Create a plan
    Create {
        /// Plan name
        name: String,

        /// First day of the week (YYYY-MM-DD)
        week_start: String,

        /// Preferred cuisines (repeatable)
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,

        /// Budget level: économique, modéré or cher
        #[arg(long, default_value = "modéré")]
        budget: BudgetLevel,

        /// Prefer light meals
        #[arg(long)]
        light: bool,

        /// Vegetarian meals only
        #[arg(long)]
        vegetarian: bool,

        /// Let the AI fill the plan
        #[arg(long)]
        ai: bool,
    },

    /// Delete a plan
    Delete {
        /// Plan id
        id: i64,
    },

    /// Search plans by name
    Search {
        /// Search text
        query: String,
    },
}

pub async fn run(ctx: &Context, command: PlansCommand) -> Result<()> {
    match command {
        PlansCommand::List => list(ctx).await,
        PlansCommand::Create {
            name,
            week_start,
            cuisines,
            budget,
            light,
            vegetarian,
            ai,
        } => {
            let mut preferences = UserPreferences::default()
                .with_budget(budget)
                .light(light)
                .vegetarian(vegetarian);
            if !cuisines.is_empty() {
                preferences = preferences.with_cuisines(cuisines);
            }
            let request = NewPlanRequest::new(name, week_start).with_preferences(preferences);
            create(ctx, &request, ai).await
        }
        PlansCommand::Delete { id } => delete(ctx, id).await,
        PlansCommand::Search { query } => search_plans(ctx, &query).await,
    }
}

async fn fetch(ctx: &Context) -> Result<PlansStore> {
    let store = PlansStore::new(ctx.api.clone());
    let pb = ctx.spinner("Chargement des plans...");
    let timer = Timer::start("plans.fetch");
    let result = store.fetch().await;
    timer.stop();
    progress::finish_clear(&pb);
    result?;
    Ok(store)
}

async fn list(ctx: &Context) -> Result<()> {
    let plans = fetch(ctx).await?.plans();

    if ctx.is_json() {
        print_json(&plans)?;
        return Ok(());
    }

    Status::header(&format!("Plans ({})", plans.len()));
    if plans.is_empty() {
        Status::info("Aucun plan pour le moment");
    }
    for plan in &plans {
        print_plan(plan);
    }
    Ok(())
}

async fn create(ctx: &Context, request: &NewPlanRequest, ai: bool) -> Result<()> {
    let pb = ctx.spinner("Création du plan...");
    let result = if ai {
        AiFeatures::new(ctx.api.clone()).generate_plan(request).await
    } else {
        PlansStore::new(ctx.api.clone()).create(request).await
    };
    progress::finish_clear(&pb);
    let plan = result?;

    if ctx.is_json() {
        print_json(&plan)?;
    } else {
        Status::success(&format!("Plan créé: {} (#{})", plan.plan_name, plan.id));
    }
    Ok(())
}

async fn delete(ctx: &Context, id: i64) -> Result<()> {
    let pb = ctx.spinner("Suppression du plan...");
    let result = PlansStore::new(ctx.api.clone()).remove(id).await;
    progress::finish_clear(&pb);
    result?;

    if ctx.is_json() {
        print_json(&json!({ "success": true, "id": id }))?;
    } else {
        Status::success(&format!("Plan #{id} supprimé"));
    }
    Ok(())
}

async fn search_plans(ctx: &Context, query: &str) -> Result<()> {
    let options = ctx.plan_search_options()?;
    let session = SearchSession::with_debounce(fetch(ctx).await?.plans(), options, ctx.debounce());
    session.set_query(query);
    session.flush();
    let results = session.results();

    if ctx.is_json() {
        print_json(&results)?;
        return Ok(());
    }

    Status::header(&format!(
        "« {query} »: {}",
        format_count(results.len(), "plan", "plans")
    ));
    for result in &results {
        let label = result
            .highlights
            .first()
            .map_or_else(|| result.item.plan_name.clone(), |h| render_marks(h));
        println!(
            "  {:>4}  {}  {}",
            format!("#{}", result.item.id).dimmed(),
            label,
            format!("{:.0}%", result.score * 100.0).dimmed()
        );
    }
    Ok(())
}

fn print_plan(plan: &WeeklyPlan) {
    let ai = if plan.generated_by_ai { " IA" } else { "" };
    println!(
        "  {:>4}  {}  {}{}",
        format!("#{}", plan.id).dimmed(),
        plan.plan_name.bold(),
        plan.week_start_date.dimmed(),
        ai.cyan()
    );
}
