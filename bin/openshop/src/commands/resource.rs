//! Generic resource CRUD commands.
//!
//! `openshop get products`, `openshop create categories --json '...'`, etc.
//! Translates resource names to API paths; bodies and responses stay
//! untyped JSON so every field the server knows about is visible.

use anyhow::Result;
use openshop_api::ListQuery;

use super::{connect, print_json};

/// Map a singular/plural resource name to (singular, collection path).
fn resource_path(resource: &str) -> Result<(&'static str, &'static str)> {
    match resource.to_lowercase().as_str() {
        "post" | "posts" => Ok(("post", "/api/public_api/posts/")),
        "category" | "categories" => Ok(("category", "/api/private_api/categories/")),
        "product" | "products" => Ok(("product", "/api/private_api/products/")),
        "order" | "orders" => Ok(("order", "/api/private_api/orders/")),
        _ => Err(anyhow::anyhow!(
            "Unknown resource type: {}. Known: posts, categories, products, orders.",
            resource
        )),
    }
}

/// GET a resource (list or get by ID).
pub fn get(
    resource: &str,
    id: Option<i64>,
    query: &ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let (_, api_path) = resource_path(resource)?;

    let value: serde_json::Value = match id {
        Some(id) => client.get(&format!("{api_path}{id}/"), None::<&()>)?,
        None => client.get(api_path, Some(query))?,
    };
    print_json(&value)
}

/// CREATE a resource from a JSON body.
pub fn create(
    resource: &str,
    json_body: &str,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let (singular, api_path) = resource_path(resource)?;

    let body: serde_json::Value =
        serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;
    let created: serde_json::Value = client.post(api_path, &body)?;

    println!("{} created.", singular);
    print_json(&created)
}

/// UPDATE a resource (PATCH) from a JSON body.
pub fn update(
    resource: &str,
    id: i64,
    json_body: &str,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let (singular, api_path) = resource_path(resource)?;

    let body: serde_json::Value =
        serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {}", e))?;
    let updated: serde_json::Value = client.patch(&format!("{api_path}{id}/"), &body)?;

    println!("{} {} updated.", singular, id);
    print_json(&updated)
}

/// DELETE a resource.
pub fn delete(
    resource: &str,
    id: i64,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let (singular, api_path) = resource_path(resource)?;

    client.delete(&format!("{api_path}{id}/"))?;
    println!("{} {} deleted.", singular, id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_names_map_to_module_paths() {
        assert_eq!(
            resource_path("posts").unwrap(),
            ("post", "/api/public_api/posts/")
        );
        assert_eq!(
            resource_path("CATEGORY").unwrap(),
            ("category", "/api/private_api/categories/")
        );
        assert_eq!(
            resource_path("orders").unwrap().1,
            "/api/private_api/orders/"
        );
        assert!(resource_path("widgets").is_err());
    }
}
