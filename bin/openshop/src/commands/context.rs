//! Context management commands.

use anyhow::Result;

use crate::config::{ClientConfig, Context};

/// Create a new context and register it in the client config.
pub fn create(
    name: &str,
    server: Option<&str>,
    client_config_path: &std::path::Path,
) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;
    config.upsert_context(Context {
        name: name.to_string(),
        server: server.unwrap_or_default().to_string(),
        token: String::new(),
        refresh_token: String::new(),
    });
    if config.current_context.is_empty() {
        config.current_context = name.to_string();
    }
    config.save(client_config_path)?;

    println!("Context \"{}\" created.", name);
    if server.is_none() {
        println!("Run `openshop context set {} --server <url>` to point it at a server.", name);
    }
    Ok(())
}

/// List all contexts.
pub fn list(client_config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(client_config_path)?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("Run: openshop context create <name> --server <url>");
        return Ok(());
    }

    println!("{:2} {:20} {:40} {:5}", "", "NAME", "SERVER", "AUTH");
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context {
            "*"
        } else {
            " "
        };
        let server = if ctx.server.is_empty() { "-" } else { &ctx.server };
        let auth = if ctx.token.is_empty() { "-" } else { "yes" };
        println!("{:2} {:20} {:40} {:5}", marker, ctx.name, server, auth);
    }

    Ok(())
}

/// Switch current context.
pub fn use_context(name: &str, client_config_path: &std::path::Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if !config.contexts.iter().any(|c| c.name == name) {
        anyhow::bail!(
            "Context \"{}\" not found. Run `openshop context list` to see available contexts.",
            name
        );
    }

    config.current_context = name.to_string();
    config.save(client_config_path)?;
    println!("Switched to context \"{}\".", name);
    Ok(())
}

/// Set properties on a context.
pub fn set(
    name: &str,
    server: Option<&str>,
    token: Option<&str>,
    refresh_token: Option<&str>,
    client_config_path: &std::path::Path,
) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    let ctx = config
        .get_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Context \"{}\" not found.", name))?;

    if let Some(s) = server {
        ctx.server = s.to_string();
    }
    if let Some(t) = token {
        ctx.token = t.to_string();
    }
    if let Some(r) = refresh_token {
        ctx.refresh_token = r.to_string();
    }

    config.save(client_config_path)?;
    println!("Context \"{}\" updated.", name);
    Ok(())
}

/// Delete a context.
pub fn delete(name: &str, client_config_path: &std::path::Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if !config.remove_context(name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }

    config.save(client_config_path)?;
    println!("Context \"{}\" deleted.", name);
    Ok(())
}
