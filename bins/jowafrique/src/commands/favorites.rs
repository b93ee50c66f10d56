//! Favorite meal commands

use crate::context::Context;
use anyhow::Result;
use clap::Subcommand;
use jowafrique_cli::output::{format_count, format_rating, print_json, Status};
use jowafrique_cli::progress;
use jowafrique_store::FavoritesStore;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// List favorite meals
    List,

    /// Mark a meal as favorite
    Add {
        /// Meal id
        meal_id: i64,
    },

    /// Remove a meal from the favorites
    Remove {
        /// Meal id
        meal_id: i64,
    },
}

pub async fn run(ctx: &Context, command: FavoritesCommand) -> Result<()> {
    let store = FavoritesStore::new(ctx.api.clone());

    match command {
        FavoritesCommand::List => {
            let pb = ctx.spinner("Chargement des favoris...");
            let result = store.fetch().await;
            progress::finish_clear(&pb);
            result?;

            let favorites = store.favorites();
            if ctx.is_json() {
                print_json(&favorites)?;
                return Ok(());
            }

            Status::header(&format_count(favorites.len(), "favori", "favoris"));
            for meal in &favorites {
                println!(
                    "  {:>4}  {}  {}",
                    format!("#{}", meal.id).dimmed(),
                    meal.name.bold(),
                    format_rating(meal.rating).yellow()
                );
            }
            Ok(())
        }
        FavoritesCommand::Add { meal_id } => {
            let pb = ctx.spinner("Ajout aux favoris...");
            let result = store.add(meal_id).await;
            progress::finish_clear(&pb);
            result?;
            report(ctx, meal_id, &format!("Repas #{meal_id} ajouté aux favoris"))
        }
        FavoritesCommand::Remove { meal_id } => {
            let pb = ctx.spinner("Retrait des favoris...");
            let result = store.remove(meal_id).await;
            progress::finish_clear(&pb);
            result?;
            report(ctx, meal_id, &format!("Repas #{meal_id} retiré des favoris"))
        }
    }
}

fn report(ctx: &Context, meal_id: i64, message: &str) -> Result<()> {
    if ctx.is_json() {
        print_json(&json!({ "success": true, "mealId": meal_id }))?;
    } else {
        Status::success(message);
    }
    Ok(())
}
