//! `openshop` — the OpenShop CLI client.
//!
//! Manages contexts, account tokens, and shop resources.
//! Think of it as `kubectl` for an OpenShop deployment.

mod commands;
mod config;

use clap::{Args, Parser, Subcommand};
use openshop_api::ListQuery;

/// OpenShop CLI tool.
#[derive(Parser, Debug)]
#[command(name = "openshop", about = "OpenShop CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.openshop/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Context to use for this invocation (default: the current one).
    #[arg(long = "context", global = true)]
    context: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Common list-endpoint parameters.
#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Sort field; prefix with `-` for descending (e.g. -created_at).
    #[arg(long)]
    ordering: Option<String>,

    /// Page number.
    #[arg(long)]
    page: Option<u32>,

    /// Search term.
    #[arg(long)]
    search: Option<String>,
}

impl From<ListArgs> for ListQuery {
    fn from(args: ListArgs) -> Self {
        ListQuery {
            ordering: args.ordering,
            page: args.page,
            search: args.search,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Context management.
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// Get resource(s).
    Get {
        /// Resource type (posts, categories, products, orders).
        resource: String,
        /// Optional resource ID for single get.
        id: Option<i64>,
        #[command(flatten)]
        list: ListArgs,
    },

    /// Create a resource.
    Create {
        /// Resource type.
        resource: String,
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },

    /// Update a resource (PATCH).
    Update {
        /// Resource type.
        resource: String,
        /// Resource ID.
        id: i64,
        /// JSON body.
        #[arg(long = "json")]
        json_body: String,
    },

    /// Delete a resource.
    Delete {
        /// Resource type.
        resource: String,
        /// Resource ID.
        id: i64,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Post workflows (publish, unpublish, filtered listings).
    Posts {
        #[command(subcommand)]
        action: PostsAction,
    },

    /// Commerce filters and workflows.
    Shop {
        #[command(subcommand)]
        action: ShopAction,
    },

    /// Account and session management.
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Create a new context.
    Create {
        /// Context name.
        name: String,
        /// Server URL (e.g. https://shop.example.com).
        #[arg(long)]
        server: Option<String>,
    },
    /// List all contexts.
    List,
    /// Set properties on a context.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        token: Option<String>,
        #[arg(long = "refresh-token")]
        refresh_token: Option<String>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[derive(Subcommand, Debug)]
enum PostsAction {
    /// Publish a post.
    Publish { id: i64 },
    /// Unpublish a post.
    Unpublish { id: i64 },
    /// List published posts only.
    Published {
        #[command(flatten)]
        list: ListArgs,
    },
    /// List posts by one author.
    ByAuthor {
        /// Author's user ID.
        #[arg(long = "author")]
        author_id: i64,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ShopAction {
    /// Category helpers.
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
    /// Product helpers.
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Order helpers.
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand, Debug)]
enum CategoriesAction {
    /// List active categories.
    Active {
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
enum ProductsAction {
    /// List products in one category.
    ByCategory {
        /// Category ID.
        category_id: i64,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List products running low on stock.
    LowStock {
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
enum OrdersAction {
    /// Cancel an order.
    Cancel { id: i64 },
    /// List orders, optionally filtered to one status.
    ByStatus {
        /// Order status (pending, processing, shipped, delivered, cancelled).
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List the line items of an order.
    Items {
        /// Order ID.
        order_id: i64,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand, Debug)]
enum AccountAction {
    /// Show your profile.
    Show,
    /// Patch your profile with a JSON body.
    Update {
        /// JSON body (writable profile fields).
        #[arg(long = "json")]
        json_body: String,
    },
    /// Browse the user directory.
    Users {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Register a new account (prompts for the password).
    Register {
        /// Username.
        username: String,
        /// Email address.
        #[arg(long)]
        email: Option<String>,
        /// Password (not recommended — use the interactive prompt).
        #[arg(long)]
        password: Option<String>,
    },
    /// Exchange the refresh token for a fresh access token.
    Refresh {
        /// Refresh token (default: the one stored in the context).
        #[arg(long = "refresh")]
        refresh: Option<String>,
    },
    /// Clear tokens from the current context.
    Logout,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let ctx = cli.context.as_deref();

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Create { name, server } => {
                commands::context::create(&name, server.as_deref(), &config_path)?;
            }
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set {
                name,
                server,
                token,
                refresh_token,
            } => {
                commands::context::set(
                    &name,
                    server.as_deref(),
                    token.as_deref(),
                    refresh_token.as_deref(),
                    &config_path,
                )?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Get { resource, id, list } => {
            commands::resource::get(&resource, id, &list.into(), &config_path, ctx)?;
        }

        Commands::Create {
            resource,
            json_body,
            file,
        } => {
            let body = if let Some(path) = file {
                std::fs::read_to_string(&path)?
            } else if let Some(json) = json_body {
                json
            } else {
                anyhow::bail!("Provide --json or -f <file>.");
            };
            commands::resource::create(&resource, &body, &config_path, ctx)?;
        }

        Commands::Update {
            resource,
            id,
            json_body,
        } => {
            commands::resource::update(&resource, id, &json_body, &config_path, ctx)?;
        }

        Commands::Delete { resource, id, yes } => {
            if !yes {
                eprint!("Are you sure? [y/N]: ");
                let mut s = String::new();
                std::io::stdin().read_line(&mut s)?;
                if !s.trim().eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            commands::resource::delete(&resource, id, &config_path, ctx)?;
        }

        Commands::Posts { action } => match action {
            PostsAction::Publish { id } => {
                commands::posts::publish(id, &config_path, ctx)?;
            }
            PostsAction::Unpublish { id } => {
                commands::posts::unpublish(id, &config_path, ctx)?;
            }
            PostsAction::Published { list } => {
                commands::posts::published(list.into(), &config_path, ctx)?;
            }
            PostsAction::ByAuthor { author_id, list } => {
                commands::posts::by_author(author_id, list.into(), &config_path, ctx)?;
            }
        },

        Commands::Shop { action } => match action {
            ShopAction::Categories { action } => match action {
                CategoriesAction::Active { list } => {
                    commands::shop::categories_active(&list.into(), &config_path, ctx)?;
                }
            },
            ShopAction::Products { action } => match action {
                ProductsAction::ByCategory { category_id, list } => {
                    commands::shop::products_by_category(
                        category_id,
                        &list.into(),
                        &config_path,
                        ctx,
                    )?;
                }
                ProductsAction::LowStock { list } => {
                    commands::shop::products_low_stock(&list.into(), &config_path, ctx)?;
                }
            },
            ShopAction::Orders { action } => match action {
                OrdersAction::Cancel { id } => {
                    commands::shop::orders_cancel(id, &config_path, ctx)?;
                }
                OrdersAction::ByStatus { status, list } => {
                    commands::shop::orders_by_status(
                        status.as_deref(),
                        &list.into(),
                        &config_path,
                        ctx,
                    )?;
                }
                OrdersAction::Items { order_id, list } => {
                    commands::shop::order_items(order_id, &list.into(), &config_path, ctx)?;
                }
            },
        },

        Commands::Account { action } => match action {
            AccountAction::Show => {
                commands::account::show(&config_path, ctx)?;
            }
            AccountAction::Update { json_body } => {
                commands::account::update(&json_body, &config_path, ctx)?;
            }
            AccountAction::Users { list } => {
                commands::account::users(&list.into(), &config_path, ctx)?;
            }
            AccountAction::Register {
                username,
                email,
                password,
            } => {
                let password = if let Some(p) = password {
                    // Non-interactive mode (CI/automation).
                    if p.is_empty() {
                        anyhow::bail!("Password cannot be empty.");
                    }
                    p
                } else {
                    // Interactive mode.
                    let pw = rpassword::prompt_password("Enter password: ")?;
                    let confirm = rpassword::prompt_password("Confirm password: ")?;
                    if pw != confirm {
                        anyhow::bail!("Passwords do not match.");
                    }
                    if pw.is_empty() {
                        anyhow::bail!("Password cannot be empty.");
                    }
                    pw
                };
                commands::account::register(
                    &username,
                    email.as_deref(),
                    &password,
                    &config_path,
                    ctx,
                )?;
            }
            AccountAction::Refresh { refresh } => {
                commands::account::refresh(refresh.as_deref(), &config_path, ctx)?;
            }
            AccountAction::Logout => {
                commands::account::logout(&config_path)?;
            }
        },

        Commands::Version => {
            println!("openshop cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
