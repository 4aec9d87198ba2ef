//! Commerce filter and workflow commands that go beyond generic CRUD.

use anyhow::Result;
use openshop_api::{ListQuery, PrivateApi, StatusEnum};

use super::{connect, print_json};

fn parse_status(s: &str) -> Result<StatusEnum> {
    let status = match s.to_lowercase().as_str() {
        "pending" => StatusEnum::Pending,
        "processing" => StatusEnum::Processing,
        "shipped" => StatusEnum::Shipped,
        "delivered" => StatusEnum::Delivered,
        "cancelled" => StatusEnum::Cancelled,
        _ => anyhow::bail!(
            "Unknown status \"{}\". Known: pending, processing, shipped, delivered, cancelled.",
            s
        ),
    };
    Ok(status)
}

/// List active categories.
pub fn categories_active(
    query: &ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let page = PrivateApi::new(client).categories_active(query)?;
    print_json(&page)
}

/// List products in one category.
pub fn products_by_category(
    category_id: i64,
    query: &ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let page = PrivateApi::new(client).products_by_category(category_id, query)?;
    print_json(&page)
}

/// List products running low on stock.
pub fn products_low_stock(
    query: &ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let page = PrivateApi::new(client).products_low_stock(query)?;
    print_json(&page)
}

/// Cancel an order.
pub fn orders_cancel(
    id: i64,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let order = PrivateApi::new(client).orders_cancel(id)?;
    println!("order {} cancelled.", id);
    print_json(&order)
}

/// List orders, optionally filtered to one status.
pub fn orders_by_status(
    status: Option<&str>,
    query: &ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let status = status.map(parse_status).transpose()?;
    let (_, _, client) = connect(config_path, context_override)?;
    let page = PrivateApi::new(client).orders_by_status(status, query)?;
    print_json(&page)
}

/// List the line items of an order.
pub fn order_items(
    order_id: i64,
    query: &ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let page = PrivateApi::new(client).order_items_list(order_id, query)?;
    print_json(&page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_accepts_wire_values() {
        assert_eq!(parse_status("shipped").unwrap(), StatusEnum::Shipped);
        assert_eq!(parse_status("PENDING").unwrap(), StatusEnum::Pending);
        assert!(parse_status("returned").is_err());
    }
}
