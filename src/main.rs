//! Library Client - command-line front-end
//!
//! Every subcommand maps onto one client operation and prints the result
//! as JSON on stdout. Logs go to stderr.

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_client::{
    config::{ClientConfig, LoggingConfig},
    filters::{LendingFilter, LendingStatusFilter, UserFilter, UserStatusFilter},
    models::{Category, Lending, LendingStatus, NewBook, NewLending, NewUser, Role},
    ApiClient, BookSearch,
};

/// Command-line client for the library service
#[derive(Parser, Debug)]
#[command(name = "library-client", version, about, long_about = None)]
struct Cli {
    /// Service base URL (overrides configuration)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Book catalog
    #[command(subcommand)]
    Books(BookCommand),
    /// User accounts
    #[command(subcommand)]
    Users(UserCommand),
    /// Lendings
    #[command(subcommand)]
    Lendings(LendingCommand),
    /// Statistics
    #[command(subcommand)]
    Stats(StatsCommand),
    /// Book counters and user count
    Dashboard,
}

#[derive(Subcommand, Debug)]
enum BookCommand {
    List,
    Get { id: i64 },
    /// Search by title or author. A blank term lists every book.
    Search {
        #[arg(long, conflicts_with = "author")]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    /// Books in a category (label or slug, e.g. `programming`)
    Category { category: Category },
    Available,
    Create(CreateBookArgs),
    Delete { id: i64 },
    Stats,
}

#[derive(Args, Debug)]
struct CreateBookArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    author: String,
    #[arg(long)]
    category: Category,
    #[arg(long, default_value_t = 1)]
    copies: i32,
    #[arg(long)]
    isbn: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    List {
        #[arg(long, default_value = "all")]
        status: UserStatusFilter,
        #[arg(long, default_value = "")]
        search: String,
    },
    Get { id: i64 },
    Create(CreateUserArgs),
    Activate { id: i64 },
    Deactivate { id: i64 },
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct CreateUserArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "LIBRARY_NEW_USER_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long, default_value = "USER")]
    role: Role,
}

#[derive(Subcommand, Debug)]
enum LendingCommand {
    List {
        #[arg(long, default_value = "all")]
        status: LendingStatusFilter,
        #[arg(long, default_value = "")]
        search: String,
    },
    Get { id: i64 },
    Create {
        #[arg(long)]
        book: i64,
        #[arg(long)]
        user: i64,
        /// Due date (YYYY-MM-DD), due at the end of that day. Defaults to
        /// two weeks from today.
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    Return { id: i64 },
    Extend { id: i64 },
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
enum StatsCommand {
    Overview,
    Monthly,
    Popular,
    Categories,
    Departments,
    Growth,
    /// All six statistics at once
    Report,
}

/// Lending plus the display-only derivations
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LendingView<'a> {
    #[serde(flatten)]
    lending: &'a Lending,
    display_status: LendingStatus,
    days_until_due: i64,
}

impl<'a> LendingView<'a> {
    fn new(lending: &'a Lending, now: NaiveDateTime) -> Self {
        Self {
            lending,
            display_status: lending.display_status(now),
            days_until_due: lending.days_until_due(now),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::load().context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }

    init_tracing(&config.logging);
    tracing::debug!(
        base_url = %config.api.base_url,
        "Starting Library Client v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = ApiClient::new(&config.api).context("Failed to build API client")?;

    if let Err(e) = run(&client, cli.command).await {
        tracing::error!(error = %e, "command failed");
        return Err(e);
    }
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_client={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(client: &ApiClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Books(cmd) => run_books(client, cmd).await,
        Command::Users(cmd) => run_users(client, cmd).await,
        Command::Lendings(cmd) => run_lendings(client, cmd).await,
        Command::Stats(cmd) => run_stats(client, cmd).await,
        Command::Dashboard => print_json(&client.dashboard().await?),
    }
}

async fn run_books(client: &ApiClient, cmd: BookCommand) -> anyhow::Result<()> {
    match cmd {
        BookCommand::List => print_json(&client.list_books().await?),
        BookCommand::Get { id } => print_json(&client.get_book(id).await?),
        BookCommand::Search { title, author } => {
            let (by, term) = match (title, author) {
                (_, Some(author)) => (BookSearch::Author, author),
                (title, None) => (BookSearch::Title, title.unwrap_or_default()),
            };
            print_json(&client.search_books(by, &term).await?)
        }
        BookCommand::Category { category } => {
            print_json(&client.list_books_by_category(category).await?)
        }
        BookCommand::Available => print_json(&client.list_available_books().await?),
        BookCommand::Create(args) => {
            let mut book = NewBook::new(args.title, args.author, args.category, args.copies);
            if let Some(isbn) = args.isbn {
                book = book.with_isbn(isbn);
            }
            if let Some(description) = args.description {
                book = book.with_description(description);
            }
            print_json(&client.create_book(&book).await?)
        }
        BookCommand::Delete { id } => {
            client.delete_book(id).await?;
            Ok(())
        }
        BookCommand::Stats => print_json(&client.book_stats().await?),
    }
}

async fn run_users(client: &ApiClient, cmd: UserCommand) -> anyhow::Result<()> {
    match cmd {
        UserCommand::List { status, search } => {
            let users = client.list_users().await?;
            let filter = UserFilter { search, status };
            print_json(&filter.apply(&users))
        }
        UserCommand::Get { id } => print_json(&client.get_user(id).await?),
        UserCommand::Create(args) => {
            let mut user = NewUser::new(args.username, args.name, args.email, args.password)
                .with_role(args.role);
            if let Some(phone) = args.phone {
                user = user.with_phone(phone);
            }
            print_json(&client.create_user(&user).await?)
        }
        UserCommand::Activate { id } => print_json(&client.activate_user(id).await?),
        UserCommand::Deactivate { id } => print_json(&client.deactivate_user(id).await?),
        UserCommand::Delete { id } => {
            client.delete_user(id).await?;
            Ok(())
        }
    }
}

async fn run_lendings(client: &ApiClient, cmd: LendingCommand) -> anyhow::Result<()> {
    let now = Local::now().naive_local();
    match cmd {
        LendingCommand::List { status, search } => {
            let lendings = client.list_lendings().await?;
            let filter = LendingFilter { search, status };
            let views: Vec<LendingView<'_>> = filter
                .apply(&lendings)
                .into_iter()
                .map(|l| LendingView::new(l, now))
                .collect();
            print_json(&views)
        }
        LendingCommand::Get { id } => {
            let lending = client.get_lending(id).await?;
            print_json(&LendingView::new(&lending, now))
        }
        LendingCommand::Create { book, user, due } => {
            let lending = match due {
                Some(due) => NewLending::new(book, user, due),
                None => NewLending::with_default_due(book, user, now.date()),
            };
            print_json(&client.create_lending(&lending).await?)
        }
        LendingCommand::Return { id } => print_json(&client.return_lending(id).await?),
        LendingCommand::Extend { id } => print_json(&client.extend_lending(id).await?),
        LendingCommand::Delete { id } => {
            client.delete_lending(id).await?;
            Ok(())
        }
    }
}

async fn run_stats(client: &ApiClient, cmd: StatsCommand) -> anyhow::Result<()> {
    match cmd {
        StatsCommand::Overview => print_json(&client.overview_stats().await?),
        StatsCommand::Monthly => print_json(&client.monthly_stats().await?),
        StatsCommand::Popular => print_json(&client.popular_books().await?),
        StatsCommand::Categories => print_json(&client.category_stats().await?),
        StatsCommand::Departments => print_json(&client.department_stats().await?),
        StatsCommand::Growth => print_json(&client.growth_stats().await?),
        StatsCommand::Report => print_json(&client.statistics_report().await?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
