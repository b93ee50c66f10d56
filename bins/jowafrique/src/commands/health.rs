//! Health check command

use crate::context::Context;
use anyhow::{anyhow, Result};
use jowafrique_cli::output::{format_duration, print_json, Status};
use jowafrique_cli::progress;
use owo_colors::OwoColorize;

/// Check the backend health endpoint
pub async fn run(ctx: &Context) -> Result<()> {
    let pb = ctx.spinner("Vérification du serveur...");
    let result = ctx.client.health().check_timed().await.into_result();
    progress::finish_clear(&pb);

    let (health, elapsed) = result.map_err(|e| anyhow!(e))?;

    if ctx.is_json() {
        print_json(&serde_json::json!({
            "baseUrl": ctx.client.base_url(),
            "status": health.status,
            "version": health.version,
            "timestamp": health.timestamp,
            "elapsedMs": elapsed.as_millis(),
        }))?;
    } else {
        Status::header("Serveur");
        Status::field("URL", ctx.client.base_url());
        if health.is_healthy() {
            Status::field("Statut", "✓ OK".green());
        } else {
            Status::field("Statut", format!("✗ {}", health.status).red());
        }
        if !health.version.is_empty() {
            Status::field("Version", &health.version);
        }
        Status::field("Temps de réponse", format_duration(elapsed).dimmed());
    }

    if health.is_healthy() {
        Ok(())
    } else {
        Err(anyhow!("Serveur en mauvaise santé: {}", health.status))
    }
}
