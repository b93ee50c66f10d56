//! Statistics command

use crate::context::Context;
use anyhow::Result;
use jowafrique_cli::output::{print_json, Status};
use jowafrique_cli::progress;
use jowafrique_store::StatisticsStore;
use owo_colors::OwoColorize;

pub async fn run(ctx: &Context) -> Result<()> {
    let store = StatisticsStore::new(ctx.api.clone());
    let pb = ctx.spinner("Calcul des statistiques...");
    let result = store.fetch().await;
    progress::finish_clear(&pb);
    result?;

    let stats = store.statistics().unwrap_or_default();
    if ctx.is_json() {
        print_json(&stats)?;
        return Ok(());
    }

    Status::header("Statistiques");
    Status::field("Plans", stats.total_plans);
    Status::field("Recettes", stats.total_recipes);
    Status::field(
        "Favoris",
        format!(
            "{} ({:.0}%)",
            stats.favorite_recipes,
            stats.favorite_ratio() * 100.0
        ),
    );
    Status::field("Note moyenne", format!("{:.1}/5", stats.avg_rating));

    if !stats.top_ingredients.is_empty() {
        Status::header("Ingrédients les plus utilisés");
        for (ingredient, count) in &stats.top_ingredients {
            println!("  {:<24} {}", ingredient, count.to_string().dimmed());
        }
    }
    Ok(())
}
