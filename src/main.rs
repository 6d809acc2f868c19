use std::process::ExitCode;

use alumni_client::config::Config;
use alumni_client::logging::init_tracing;
use alumni_client::pagination::{page_window, ListQuery};
use alumni_client::presentation::Affordance;
use alumni_client::resource::{Entity, OpKind, Outcome, ResourceSlice};
use alumni_client::store::AppStore;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

/// Inspect alumni platform resources through the client state layer.
#[derive(Debug, Parser)]
#[command(name = "alumni-client", version)]
struct Cli {
    /// Override the API base URL (same as ALUMNI_API_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch one page of a resource.
    List {
        resource: Resource,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size; defaults to lists.page_size from the config.
        #[arg(long)]
        limit: Option<u32>,
        /// Filter as name=value; repeatable.
        #[arg(long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// Fetch a single entity.
    Get { resource: Resource, id: String },
    /// Delete an entity.
    Delete { resource: Resource, id: String },
    /// Invoke an entity action such as `register` or `purchase`.
    Action {
        resource: Resource,
        id: String,
        name: String,
        /// JSON body to send with the action.
        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Resource {
    Alumni,
    Events,
    AdminEvents,
    News,
    AdminNews,
    Gallery,
    AdminGallery,
    Donations,
    AdminDonations,
    MembershipPlans,
    AdminMembershipPlans,
    Memberships,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the operation was fulfilled.
async fn run(cli: Cli) -> Result<bool> {
    let config = Config::load_with_base_url(cli.base_url).context("loading configuration")?;

    let store = AppStore::from_config(&config).context("building API client")?;

    match cli.command {
        Command::List {
            resource,
            page,
            limit,
            filters,
        } => {
            let mut query = ListQuery::new(limit.unwrap_or(store.page_size())).with_page(page);
            for (name, value) in filters {
                query = query.with_filter(name, value);
            }
            let op = Op::List(query);
            dispatch(&store, resource, &op).await
        }
        Command::Get { resource, id } => dispatch(&store, resource, &Op::Get(id)).await,
        Command::Delete { resource, id } => dispatch(&store, resource, &Op::Delete(id)).await,
        Command::Action {
            resource,
            id,
            name,
            body,
        } => {
            let body: Option<serde_json::Value> = body
                .map(|raw| serde_json::from_str(&raw))
                .transpose()
                .context("parsing --body as JSON")?;
            dispatch(&store, resource, &Op::Action { id, name, body }).await
        }
    }
}

enum Op {
    List(ListQuery),
    Get(String),
    Delete(String),
    Action {
        id: String,
        name: String,
        body: Option<serde_json::Value>,
    },
}

async fn dispatch(store: &AppStore, resource: Resource, op: &Op) -> Result<bool> {
    match resource {
        Resource::Alumni => execute(&store.alumni, op).await,
        Resource::Events => execute(&store.events, op).await,
        Resource::AdminEvents => execute(&store.admin_events, op).await,
        Resource::News => execute(&store.news, op).await,
        Resource::AdminNews => execute(&store.admin_news, op).await,
        Resource::Gallery => execute(&store.gallery, op).await,
        Resource::AdminGallery => execute(&store.admin_gallery, op).await,
        Resource::Donations => execute(&store.donations, op).await,
        Resource::AdminDonations => execute(&store.admin_donations, op).await,
        Resource::MembershipPlans => execute(&store.membership_plans, op).await,
        Resource::AdminMembershipPlans => execute(&store.admin_membership_plans, op).await,
        Resource::Memberships => execute(&store.memberships, op).await,
    }
}

async fn execute<E: Entity>(slice: &ResourceSlice<E>, op: &Op) -> Result<bool> {
    let (kind, outcome) = match op {
        Op::List(query) => (OpKind::FetchList, slice.fetch_list(query).await),
        Op::Get(id) => (OpKind::FetchOne, slice.fetch_one(id).await),
        Op::Delete(id) => (OpKind::Mutate, slice.delete(id).await),
        Op::Action { id, name, body } => (
            OpKind::Mutate,
            slice.action(id, name, body.clone()).await,
        ),
    };

    let state = slice.snapshot();
    let resource = slice.descriptor().name;
    let output = match kind {
        OpKind::FetchList => json!({
            "resource": resource,
            "items": state.items,
            "pagination": state.pagination,
            "filters": state.filters,
            "pages": page_window(state.pagination.page, state.pagination.total_pages),
        }),
        OpKind::FetchOne => json!({ "resource": resource, "selected": state.selected }),
        OpKind::Mutate => json!({
            "resource": resource,
            "items": state.items,
            "selected": state.selected,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    match outcome {
        Outcome::Fulfilled => Ok(true),
        Outcome::Rejected(_) => {
            let affordance = Affordance::for_operation(&state, kind);
            if let Some(message) = affordance.error_banner {
                eprintln!("{}", message);
            }
            Ok(false)
        }
        Outcome::Discarded => bail!("response superseded by a newer request"),
    }
}
