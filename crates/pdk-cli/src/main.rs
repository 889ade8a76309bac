use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{accounts, notifications, orders, stores, zones};

#[derive(Parser)]
#[command(name = "pdk")]
#[command(about = "ParcelDesk admin CLI", long_about = None)]
struct Cli {
    /// Layered config paths in merge order (base -> env -> local)
    #[arg(long = "config", global = true, default_value = "config/base.yaml")]
    config_paths: Vec<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify credentials and print the admin profile
    Login,

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Delivery orders
    Orders {
        #[command(subcommand)]
        cmd: OrdersCmd,
    },

    /// Delivery-pricing zones
    Zones {
        #[command(subcommand)]
        cmd: ZonesCmd,
    },

    /// Seller stores
    Stores {
        #[command(subcommand)]
        cmd: StoresCmd,
    },

    /// Payment notifications
    Notifications {
        #[command(subcommand)]
        cmd: NotificationsCmd,
    },

    /// Consumer accounts
    Consumers {
        #[command(subcommand)]
        cmd: ConsumersCmd,
    },

    /// User accounts
    Users {
        #[command(subcommand)]
        cmd: UsersCmd,
    },
}

#[derive(Subcommand)]
enum OrdersCmd {
    /// List orders, optionally filtered by status and date range
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        limit: u32,

        /// Filter: PENDING | CONFIRMED | READY_FOR_PICKUP | PICKED_UP |
        /// IN_TRANSIT | DELIVERED | CANCELLED | FAILED_DELIVERY
        #[arg(long)]
        status: Option<String>,

        /// Inclusive start date (YYYY-MM-DD)
        #[arg(long = "start-date")]
        start_date: Option<String>,

        /// Inclusive end date (YYYY-MM-DD)
        #[arg(long = "end-date")]
        end_date: Option<String>,
    },

    /// Aggregate order counters and revenue
    Stats,

    /// Full receipts view of one order
    Details {
        #[arg(long = "id")]
        order_id: String,
    },

    /// Advance an order one step along its lifecycle. The target status is
    /// computed from the current status; terminal orders are refused.
    Advance {
        #[arg(long = "id")]
        order_id: String,

        /// Optional note passed to the backend alongside the transition
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
enum ZonesCmd {
    /// List all zones
    List,

    /// List active zones only
    Active,

    /// Create a zone (deliveryPrice must be strictly positive)
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        price: f64,

        /// Create the zone in the inactive state
        #[arg(long, default_value_t = false)]
        inactive: bool,
    },

    /// Update zone fields; absent flags leave the field untouched
    Update {
        #[arg(long = "id")]
        zone_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        description: Option<String>,

        /// true | false
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a zone. Guardrail: refuses without --yes.
    Delete {
        #[arg(long = "id")]
        zone_id: String,

        /// Acknowledge the deletion is permanent
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum StoresCmd {
    /// List stores with optional filters
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        limit: u32,

        /// Filter: ACTIVE | PENDING | SUSPENDED
        #[arg(long)]
        status: Option<String>,

        /// Filter: FASHION | ELECTRONICS | OTHER
        #[arg(long)]
        category: Option<String>,

        #[arg(long = "min-revenue")]
        min_revenue: Option<f64>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Set a store's status (ACTIVE | SUSPENDED)
    SetStatus {
        #[arg(long = "id")]
        store_id: String,

        #[arg(long)]
        status: String,
    },

    /// Banking and contact details for payouts
    PaymentDetails {
        #[arg(long = "id")]
        store_id: String,
    },

    /// The unauthenticated storefront listing
    PublicList,

    /// Update one store's listing position and featured metadata
    SetOrder {
        #[arg(long = "id")]
        store_id: String,

        /// Sort key, ascending (lower = earlier)
        #[arg(long = "display-order")]
        display_order: u32,

        #[arg(long, default_value_t = false)]
        featured: bool,

        /// RFC 3339 timestamp after which the featured flag lapses
        #[arg(long = "featured-until")]
        featured_until: Option<String>,

        #[arg(long = "notes")]
        admin_notes: Option<String>,
    },

    /// Rewrite listing positions in bulk; entries as storeId=displayOrder
    BulkOrder {
        #[arg(required = true, value_name = "STORE_ID=DISPLAY_ORDER")]
        entries: Vec<String>,
    },
}

#[derive(Subcommand)]
enum NotificationsCmd {
    /// List payment notifications
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Mark a notification read (one-directional; marking twice is a no-op
    /// server-side)
    MarkRead {
        #[arg(long = "id")]
        notification_id: String,
    },
}

#[derive(Subcommand)]
enum ConsumersCmd {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        limit: u32,

        /// Filter: active | inactive
        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Consumer signup/activity counters
    Stats,
}

#[derive(Subcommand)]
enum UsersCmd {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// One user plus their order history
    Details {
        #[arg(long = "id")]
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Dev-time .env.local bootstrap; absence is fine.
    let _ = dotenvy::from_filename(".env.local");

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_paths = cli.config_paths;

    match cli.cmd {
        Commands::Login => {
            let (_, session) = commands::connect(&config_paths).await?;
            println!("logged_in=true");
            println!("admin_id={}", session.admin.id);
            println!("admin_email={}", session.admin.email);
            println!("admin_name={}", session.admin.name);
            println!("admin_role={}", session.admin.role);
            println!("token_hint={}", session.token_hint());
        }

        Commands::ConfigHash { paths } => {
            let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = pdk_config::load_layered_yaml(&path_refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }

        Commands::Orders { cmd } => match cmd {
            OrdersCmd::List {
                page,
                limit,
                status,
                start_date,
                end_date,
            } => orders::list(&config_paths, page, limit, status, start_date, end_date).await?,
            OrdersCmd::Stats => orders::stats(&config_paths).await?,
            OrdersCmd::Details { order_id } => orders::details(&config_paths, &order_id).await?,
            OrdersCmd::Advance { order_id, notes } => {
                orders::advance(&config_paths, &order_id, notes.as_deref()).await?
            }
        },

        Commands::Zones { cmd } => match cmd {
            ZonesCmd::List => zones::list(&config_paths, false).await?,
            ZonesCmd::Active => zones::list(&config_paths, true).await?,
            ZonesCmd::Create {
                name,
                price,
                inactive,
            } => zones::create(&config_paths, name, price, !inactive).await?,
            ZonesCmd::Update {
                zone_id,
                name,
                price,
                description,
                active,
            } => zones::update(&config_paths, &zone_id, name, price, description, active).await?,
            ZonesCmd::Delete { zone_id, yes } => {
                if !yes {
                    anyhow::bail!(
                        "REFUSING DELETE: zone deletion is permanent. Re-run with: `pdk zones delete --id {} --yes`",
                        zone_id
                    );
                }
                zones::delete(&config_paths, &zone_id).await?
            }
        },

        Commands::Stores { cmd } => match cmd {
            StoresCmd::List {
                page,
                limit,
                status,
                category,
                min_revenue,
                search,
            } => {
                stores::list(&config_paths, page, limit, status, category, min_revenue, search)
                    .await?
            }
            StoresCmd::SetStatus { store_id, status } => {
                stores::set_status(&config_paths, &store_id, &status).await?
            }
            StoresCmd::PaymentDetails { store_id } => {
                stores::payment_details(&config_paths, &store_id).await?
            }
            StoresCmd::PublicList => stores::public_list(&config_paths).await?,
            StoresCmd::SetOrder {
                store_id,
                display_order,
                featured,
                featured_until,
                admin_notes,
            } => {
                stores::set_order(
                    &config_paths,
                    &store_id,
                    display_order,
                    featured,
                    featured_until,
                    admin_notes,
                )
                .await?
            }
            StoresCmd::BulkOrder { entries } => {
                stores::bulk_order(&config_paths, &entries).await?
            }
        },

        Commands::Notifications { cmd } => match cmd {
            NotificationsCmd::List { page, limit } => {
                notifications::list(&config_paths, page, limit).await?
            }
            NotificationsCmd::MarkRead { notification_id } => {
                notifications::mark_read(&config_paths, &notification_id).await?
            }
        },

        Commands::Consumers { cmd } => match cmd {
            ConsumersCmd::List {
                page,
                limit,
                status,
                search,
            } => accounts::consumers(&config_paths, page, limit, status, search).await?,
            ConsumersCmd::Stats => accounts::consumer_stats(&config_paths).await?,
        },

        Commands::Users { cmd } => match cmd {
            UsersCmd::List { page, limit } => accounts::users(&config_paths, page, limit).await?,
            UsersCmd::Details { user_id } => {
                accounts::user_details(&config_paths, &user_id).await?
            }
        },
    }

    Ok(())
}
