//! Console command grammar.
//!
//! Each input line is tokenized (double quotes group words) and parsed with
//! clap, so `help` and per-command `--help` come for free.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::EntityId;
use crate::validation::EntityForm;

#[derive(Debug, Parser)]
#[command(
    name = "staffdesk",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in
    Login { username: String, password: String },
    /// Create an account and sign in
    Register(RegisterArgs),
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the current page
    #[command(visible_alias = "ls")]
    List,
    /// Reload entities from the service
    Reload,
    /// Show one entity
    Show { id: EntityId },
    /// Add an employee
    Add(EntityArgs),
    /// Edit fields of an employee
    Edit {
        id: EntityId,
        #[command(flatten)]
        fields: EntityArgs,
    },
    /// Delete one employee
    #[command(visible_alias = "rm")]
    Delete { id: EntityId },
    /// Delete every selected employee
    DeleteSelected,
    /// Search names, emails and ids; no term clears the search
    Search { term: Vec<String> },
    /// Set or clear (no value) a range filter
    Filter {
        #[arg(value_enum)]
        field: FilterField,
        value: Option<String>,
    },
    /// Remove every filter
    ClearFilters,
    /// Sort by a column; repeating flips the direction
    Sort { column: String },
    /// Go to a page (1-based)
    Page { page: usize },
    /// Rows per page
    PageSize { size: usize },
    /// Show exactly these columns, or list them when none are given
    Columns { columns: Vec<String> },
    /// Show or hide one column
    ToggleColumn { column: String },
    /// Toggle selection of rows
    Select {
        #[arg(required = true)]
        ids: Vec<EntityId>,
    },
    /// Select every row of the current page
    SelectPage,
    /// Clear the selection
    Unselect,
    /// Set the theme, or toggle it when none is given
    Theme { theme: Option<String> },
    /// Dismiss the error banner
    Dismiss,
    /// Leave the console
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterField {
    MinAge,
    MaxAge,
    From,
    To,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub first_name: String,
    #[arg(long)]
    pub last_name: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct EntityArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub hire_date: Option<String>,
}

impl From<EntityArgs> for EntityForm {
    fn from(args: EntityArgs) -> Self {
        EntityForm {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            age: args.age,
            hire_date: args.hire_date,
        }
    }
}

/// Split on whitespace; `"..."` keeps spaces together.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        tokens.push(current);
    }
    tokens
}

/// Parse one console line. `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, clap::Error> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok(None);
    }
    Line::try_parse_from(tokens).map(|l| Some(l.command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_respects_quotes() {
        assert_eq!(
            tokenize(r#"search "jane smith"  now"#),
            vec!["search", "jane smith", "now"]
        );
        assert_eq!(tokenize(r#"search """#), vec!["search", ""]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn parses_add_with_flags() {
        let command = parse("add --first-name Nora --email nora@company.com --age 30")
            .unwrap()
            .unwrap();
        let Command::Add(args) = command else {
            panic!("expected add");
        };
        assert_eq!(args.first_name.as_deref(), Some("Nora"));
        assert_eq!(args.age.as_deref(), Some("30"));
        assert!(args.hire_date.is_none());
    }

    #[test]
    fn parses_filter_and_aliases() {
        assert!(matches!(
            parse("filter min-age 30").unwrap(),
            Some(Command::Filter {
                field: FilterField::MinAge,
                value: Some(_)
            })
        ));
        assert!(matches!(
            parse("filter to").unwrap(),
            Some(Command::Filter {
                field: FilterField::To,
                value: None
            })
        ));
        assert!(matches!(parse("ls").unwrap(), Some(Command::List)));
        assert!(matches!(parse("rm 3").unwrap(), Some(Command::Delete { id: 3 })));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(parse("frobnicate").is_err());
        assert!(parse("delete abc").is_err());
        assert!(parse("select").is_err());
        assert!(parse("").unwrap().is_none());
    }
}
