//! Command implementations, one module per command family.

pub mod account;
pub mod context;
pub mod posts;
pub mod resource;
pub mod shop;

use anyhow::Result;
use openshop_api::Client;
use serde::Serialize;

use crate::config::{ClientConfig, Context};

/// Resolve a context and build a client for it.
///
/// `--context` picks a context by name for this invocation; otherwise the
/// config's current context is used.
pub fn connect(
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<(ClientConfig, Context, Client)> {
    let config = ClientConfig::load(config_path)?;
    let ctx = match context_override {
        Some(name) => config.contexts.iter().find(|c| c.name == name).ok_or_else(|| {
            anyhow::anyhow!(
                "Context \"{}\" not found. Run `openshop context list` to see available contexts.",
                name
            )
        })?,
        None => config.current().ok_or_else(|| {
            anyhow::anyhow!(
                "No current context. Run `openshop context create <name> --server <url>`."
            )
        })?,
    }
    .clone();

    if ctx.server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `openshop context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }

    let mut client = Client::new(ctx.server.clone())?;
    if !ctx.token.is_empty() {
        client = client.with_token(ctx.token.clone());
    }
    Ok((config, ctx, client))
}

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
