//! Shopping list command

use crate::context::Context;
use anyhow::Result;
use jowafrique_cli::output::{format_count, print_json, Status};
use jowafrique_cli::progress;
use jowafrique_core::models::ShoppingOptimization;
use jowafrique_store::{AiFeatures, ShoppingListStore};
use owo_colors::OwoColorize;
use serde_json::json;

pub async fn run(ctx: &Context, plan_id: i64, optimize: bool, budget: Option<f64>) -> Result<()> {
    let store = ShoppingListStore::new(ctx.api.clone());
    let pb = ctx.spinner("Génération de la liste de courses...");
    let result = store.generate(plan_id).await;
    progress::finish_clear(&pb);
    result?;
    let ingredients = store.ingredients();

    let optimization = if optimize {
        let pb = ctx.spinner("Optimisation par l'IA...");
        let result = AiFeatures::new(ctx.api.clone())
            .optimize_shopping(plan_id, budget)
            .await;
        progress::finish_clear(&pb);
        Some(result?)
    } else {
        None
    };

    if ctx.is_json() {
        print_json(&json!({
            "planId": plan_id,
            "ingredients": ingredients,
            "optimization": optimization,
        }))?;
        return Ok(());
    }

    Status::header(&format!(
        "Courses du plan #{plan_id}: {}",
        format_count(ingredients.len(), "ingrédient", "ingrédients")
    ));
    for ingredient in &ingredients {
        println!("  • {ingredient}");
    }

    if let Some(optimization) = &optimization {
        print_optimization(optimization);
    }
    Ok(())
}

fn print_optimization(optimization: &ShoppingOptimization) {
    Status::header("Liste optimisée");
    for item in &optimization.optimized_items {
        let quantity = item.quantity.as_deref().unwrap_or("");
        let cost = item
            .estimated_cost
            .map(|c| format!("{c:.2} €"))
            .unwrap_or_default();
        println!("  • {} {} {}", item.ingredient, quantity.dimmed(), cost.green());
        if let Some(alternative) = &item.alternative {
            println!("      {} {}", "alternative:".dimmed(), alternative);
        }
    }
    if let Some(total) = optimization.total_estimated_cost {
        Status::field("Coût estimé", format!("{total:.2} €"));
    }
    for tip in &optimization.savings_tips {
        Status::info(tip);
    }
    if !optimization.recommended_stores.is_empty() {
        Status::field("Magasins", optimization.recommended_stores.join(", "));
    }
}
