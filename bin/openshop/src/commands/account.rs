//! Account commands: profile, registration, token refresh, logout.

use anyhow::Result;
use openshop_api::{
    AccountsApi, ListQuery, PatchedUserProfile, TokenRefreshWritable, UserCreate,
};

use super::{connect, print_json};
use crate::config::ClientConfig;

/// Show the authenticated user's profile.
pub fn show(config_path: &std::path::Path, context_override: Option<&str>) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let profile = AccountsApi::new(client).profile_retrieve()?;
    print_json(&profile)
}

/// Patch the authenticated user's profile from a JSON body.
pub fn update(
    json_body: &str,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let patch: PatchedUserProfile =
        serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;
    let (_, _, client) = connect(config_path, context_override)?;
    let profile = AccountsApi::new(client).profile_partial_update(&patch)?;
    println!("Profile updated.");
    print_json(&profile)
}

/// Browse the user directory.
pub fn users(
    query: &ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let page = AccountsApi::new(client).users_list(query)?;
    print_json(&page)
}

/// Register a new account. The password arrives already prompted and
/// confirmed by the caller.
pub fn register(
    username: &str,
    email: Option<&str>,
    password: &str,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;

    let body = UserCreate {
        email: email.map(str::to_string),
        ..UserCreate::new(username, password, password)
    };
    let profile = AccountsApi::new(client).register(&body)?;

    println!("Account \"{}\" registered.", username);
    print_json(&profile)
}

/// Exchange a refresh token for a fresh access token and store both in the
/// current context.
pub fn refresh(
    refresh_token: Option<&str>,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (mut config, ctx, client) = connect(config_path, context_override)?;

    let refresh = match refresh_token {
        Some(t) => t.to_string(),
        None if !ctx.refresh_token.is_empty() => ctx.refresh_token.clone(),
        None => anyhow::bail!(
            "No refresh token. Pass --refresh <token> or set one with \
             `openshop context set {} --refresh-token <token>`.",
            ctx.name
        ),
    };

    let pair = AccountsApi::new(client).token_refresh(&TokenRefreshWritable { refresh })?;

    let ctx_mut = config
        .get_mut(&ctx.name)
        .ok_or_else(|| anyhow::anyhow!("Context disappeared"))?;
    ctx_mut.token = pair.access;
    ctx_mut.refresh_token = pair.refresh;
    config.save(config_path)?;

    println!("Token refreshed for context \"{}\".", ctx.name);
    Ok(())
}

/// Logout — clear tokens from the current context.
pub fn logout(config_path: &std::path::Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    let current_name = config.current_context.clone();
    if current_name.is_empty() {
        anyhow::bail!("No current context.");
    }

    let ctx = config
        .get_mut(&current_name)
        .ok_or_else(|| anyhow::anyhow!("Current context not found."))?;

    ctx.token = String::new();
    ctx.refresh_token = String::new();
    config.save(config_path)?;
    println!("Logged out from context \"{}\".", current_name);
    Ok(())
}
