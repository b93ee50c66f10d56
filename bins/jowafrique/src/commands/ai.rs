//! AI helper commands

use crate::context::Context;
use anyhow::Result;
use clap::Subcommand;
use jowafrique_cli::output::{print_json, Status};
use jowafrique_cli::progress;
use jowafrique_core::models::{DayOfWeek, NutrientRating};
use jowafrique_store::AiFeatures;
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum AiCommand {
    /// Suggest variations of a meal
    Variations {
        /// Meal id
        meal_id: i64,
    },

    /// Analyse the nutrition of a plan
    Nutrition {
        /// Plan id
        plan_id: i64,
    },

    /// Replace the meals of one day
    RegenerateDay {
        /// Plan id
        plan_id: i64,

        /// Day of the week (Lundi … Dimanche)
        day: DayOfWeek,
    },
}

pub async fn run(ctx: &Context, command: AiCommand) -> Result<()> {
    let ai = AiFeatures::new(ctx.api.clone());
    let pb = ctx.spinner("L'IA réfléchit...");

    match command {
        AiCommand::Variations { meal_id } => {
            let result = ai.variations(meal_id).await;
            progress::finish_clear(&pb);
            let variations = result?;

            if ctx.is_json() {
                print_json(&variations)?;
                return Ok(());
            }

            Status::header(&format!("Variations du repas #{meal_id}"));
            for variation in &variations {
                let name = variation.name.as_deref().unwrap_or("Sans nom");
                println!("  • {}", name.bold());
                if let Some(description) = &variation.description {
                    println!("    {}", description.dimmed());
                }
                let times = [variation.prep_time, variation.cook_time];
                if let [Some(prep), Some(cook)] = times {
                    println!("    {} {prep} + {cook} min", "temps:".dimmed());
                }
            }
            Ok(())
        }
        AiCommand::Nutrition { plan_id } => {
            let result = ai.nutrition_analysis(plan_id).await;
            progress::finish_clear(&pb);
            let analysis = result?;

            if ctx.is_json() {
                print_json(&analysis)?;
                return Ok(());
            }

            Status::header(&format!("Nutrition du plan #{plan_id}"));
            if let Some(score) = analysis.overall_score {
                Status::field("Score global", format!("{score:.1}/10"));
            }
            print_ratings("Macronutriments", &analysis.macronutrients);
            print_ratings("Micronutriments", &analysis.micronutrients);
            for recommendation in &analysis.recommendations {
                Status::info(recommendation);
            }
            for benefit in &analysis.health_benefits {
                println!("  {} {benefit}", "+".green());
            }
            Ok(())
        }
        AiCommand::RegenerateDay { plan_id, day } => {
            let result = ai.regenerate_day(plan_id, day).await;
            progress::finish_clear(&pb);
            let regeneration = result?;

            if ctx.is_json() {
                print_json(&regeneration)?;
                return Ok(());
            }

            let added = regeneration.meals_added.unwrap_or(0);
            Status::success(&format!(
                "{day} régénéré: {added} repas ajouté(s) au plan #{plan_id}"
            ));
            Ok(())
        }
    }
}

fn print_ratings(title: &str, ratings: &[NutrientRating]) {
    if ratings.is_empty() {
        return;
    }
    Status::header(title);
    for rating in ratings {
        Status::field(&rating.name, &rating.value);
    }
}
