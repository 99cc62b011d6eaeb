//! These structs provide the CLI interface for the outlay CLI.

use crate::model::{Amount, Category, ReimbursementStatus};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// outlay: A command-line tool for tracking project expenses.
///
/// Register projects (a full name, a short code and a contract amount), record dated expenses
/// against them, and view a spending report. Everything is stored in two flat CSV files inside
/// the outlay home directory, so the data stays greppable and easy to edit by hand.
///
/// This is a single-user tool with no locking: if two processes write at the same time, the last
/// writer wins and rows can be lost.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration file.
    ///
    /// This is the first command you should run. By default the data directory is $HOME/outlay;
    /// pass --outlay-home or set OUTLAY_HOME to put it somewhere else.
    Init,
    /// Register projects and list the project table.
    Project(ProjectArgs),
    /// Record expenses against a project and list the expense table.
    Expense(ExpenseArgs),
    /// Show total spend per project and the unreimbursed total.
    Report,
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where outlay data and configuration is held. Defaults to ~/outlay
    #[arg(long, env = "OUTLAY_HOME", default_value_t = default_outlay_home())]
    outlay_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, outlay_home: PathBuf) -> Self {
        Self {
            log_level,
            outlay_home: outlay_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn outlay_home(&self) -> &DisplayPath {
        &self.outlay_home
    }
}

/// Args for the `outlay project` command.
#[derive(Debug, Parser, Clone)]
pub struct ProjectArgs {
    #[command(subcommand)]
    action: ProjectAction,
}

impl ProjectArgs {
    pub fn action(&self) -> &ProjectAction {
        &self.action
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ProjectAction {
    /// Register a new project.
    Add(AddProjectArgs),
    /// List all registered projects in insertion order.
    List,
}

/// Args for the `outlay project add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddProjectArgs {
    /// The project's full title.
    #[arg(long)]
    name: String,

    /// The short code expenses will reference. Uniqueness is not enforced.
    #[arg(long)]
    code: String,

    /// The contract amount, a non-negative decimal. Defaults to 0.
    #[arg(long, default_value_t = Amount::default())]
    contract: Amount,
}

impl AddProjectArgs {
    pub fn new(name: impl Into<String>, code: impl Into<String>, contract: Amount) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            contract,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn contract(&self) -> Amount {
        self.contract
    }
}

/// Args for the `outlay expense` command.
#[derive(Debug, Parser, Clone)]
pub struct ExpenseArgs {
    #[command(subcommand)]
    action: ExpenseAction,
}

impl ExpenseArgs {
    pub fn action(&self) -> &ExpenseAction {
        &self.action
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ExpenseAction {
    /// Record a new expense against a registered project.
    Add(AddExpenseArgs),
    /// List all recorded expenses in insertion order.
    List,
}

/// Args for the `outlay expense add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddExpenseArgs {
    /// The date of the expenditure as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// The short code of the project this expense belongs to. Must be a registered code.
    #[arg(long)]
    project: String,

    /// The amount spent, a non-negative decimal.
    #[arg(long)]
    amount: Amount,

    /// The expense category.
    #[arg(long, value_enum, default_value_t = Category::Travel)]
    category: Category,

    /// The reimbursement status.
    #[arg(long, value_enum, default_value_t = ReimbursementStatus::Unsubmitted)]
    status: ReimbursementStatus,

    /// A free-text note about what the money was spent on.
    #[arg(long)]
    note: Option<String>,
}

impl AddExpenseArgs {
    pub fn new(
        date: Option<NaiveDate>,
        project: impl Into<String>,
        amount: Amount,
        category: Category,
        status: ReimbursementStatus,
        note: Option<String>,
    ) -> Self {
        Self {
            date,
            project: project.into(),
            amount,
            category,
            status,
            note,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> ReimbursementStatus {
        self.status
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

fn default_outlay_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("outlay"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --outlay-home or OUTLAY_HOME instead of relying on the default \
                outlay home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("outlay")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
