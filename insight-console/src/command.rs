//! Console command parsing

use insight_client::shared::{
    CustomerId, Filter, MembershipFilter, MembershipTier, PageSize, RiskFilter, RiskLevel,
};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Next,
    Prev,
    Page(u32),
    Limit(PageSize),
    Membership(MembershipFilter),
    Risk(RiskFilter),
    /// Choose the CSV file for the next import
    File(PathBuf),
    /// Import the chosen file, or choose this one first
    Import(Option<PathBuf>),
    Demo,
    Suggest(CustomerId),
    Close,
    Show,
    Health,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("")]
    Empty,
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },
}

fn invalid(what: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        what,
        value: value.to_string(),
    }
}

fn parse_membership(value: &str) -> Result<MembershipFilter, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "all" => Ok(Filter::All),
        "vip" | "standard" | "basic" => Ok(Filter::Only(MembershipTier::from(value))),
        _ => Err(invalid("membership", value)),
    }
}

fn parse_risk(value: &str) -> Result<RiskFilter, CommandError> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(Filter::All);
    }
    RiskLevel::from_str(value)
        .map(Filter::Only)
        .map_err(|_| invalid("risk level", value))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let arg = parts.next();

        match head.to_ascii_lowercase().as_str() {
            "r" | "refresh" => Ok(Self::Refresh),
            "n" | "next" => Ok(Self::Next),
            "p" | "prev" => Ok(Self::Prev),
            "page" => {
                let value = arg.ok_or(CommandError::MissingArgument("page number"))?;
                value
                    .parse()
                    .map(Self::Page)
                    .map_err(|_| invalid("page number", value))
            }
            "limit" => {
                let value = arg.ok_or(CommandError::MissingArgument("page size"))?;
                value
                    .parse::<u32>()
                    .ok()
                    .and_then(|v| PageSize::try_from(v).ok())
                    .map(Self::Limit)
                    .ok_or_else(|| invalid("page size (50, 100, 200)", value))
            }
            "filter" => {
                let dimension = arg.ok_or(CommandError::MissingArgument("membership|risk"))?;
                let value = parts
                    .next()
                    .ok_or(CommandError::MissingArgument("filter value"))?;
                match dimension.to_ascii_lowercase().as_str() {
                    "membership" | "m" => parse_membership(value).map(Self::Membership),
                    "risk" | "k" => parse_risk(value).map(Self::Risk),
                    _ => Err(invalid("filter dimension", dimension)),
                }
            }
            "file" => arg
                .map(|p| Self::File(PathBuf::from(p)))
                .ok_or(CommandError::MissingArgument("path")),
            "import" => Ok(Self::Import(arg.map(PathBuf::from))),
            "demo" => Ok(Self::Demo),
            "s" | "suggest" => {
                let value = arg.ok_or(CommandError::MissingArgument("customer id"))?;
                value
                    .parse::<i64>()
                    .map(|id| Self::Suggest(CustomerId(id)))
                    .map_err(|_| invalid("customer id", value))
            }
            "close" => Ok(Self::Close),
            "show" | "ls" => Ok(Self::Show),
            "health" => Ok(Self::Health),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  refresh | r                    reload the current page
  next | n, prev | p             page forward / back
  page <n>                       jump to page n
  limit <50|100|200>             change page size
  filter membership <all|vip|standard|basic>
  filter risk <all|low|medium|high>
  file <path>                    choose a CSV file
  import [path]                  import the chosen (or given) CSV file
  demo                           replace all data with demo customers
  suggest | s <id>               AI follow-up suggestion for a customer
  close                          close the suggestion view
  show                           print the current page again
  health                         check the backend
  help, quit";
