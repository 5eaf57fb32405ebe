//! Interactive console: reads intents, dispatches them through the action
//! creators and prints the derived table.

mod command;
mod render;

pub use command::{parse, tokenize, Command, EntityArgs, FilterField, Line, RegisterArgs};

use std::io::{self, Write};

use chrono::{Local, NaiveDate};

use crate::actions::Actions;
use crate::error::{ServiceError, Surface};
use crate::model::{EntityId, Theme};
use crate::state::table::{TableSignal, PAGE_SIZE_OPTIONS};
use crate::validation::{EntityForm, LoginForm, RegistrationForm, ValidationReport};
use crate::view::{Column, FilterChange, MemoizedView};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<W: Write> {
    actions: Actions,
    view: MemoizedView,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(actions: Actions, out: W) -> Self {
        Self {
            actions,
            view: MemoizedView::new(),
            out,
        }
    }

    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Restore theme and session, then load the table if signed in.
    pub async fn start(&mut self) -> io::Result<()> {
        self.actions.initialize_theme();
        match self.actions.restore_session() {
            Some(user) => {
                writeln!(self.out, "Welcome back, {}.", user.display_name())?;
                let _ = self.actions.fetch_entities().await;
                self.render()
            }
            None => writeln!(self.out, "Sign in with: login <username> <password>"),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let state = self.actions.store().snapshot();
        let view = self.view.get(&state);
        render::table(&mut self.out, view, &state)
    }

    fn signed_in(&mut self) -> io::Result<bool> {
        let authenticated = self.actions.store().with(|s| s.user.is_authenticated);
        if !authenticated {
            writeln!(self.out, "Please sign in first.")?;
        }
        Ok(authenticated)
    }

    fn form_errors(&mut self, report: &ValidationReport) -> io::Result<()> {
        writeln!(self.out, "Please fix the following:")?;
        render::report(&mut self.out, report)
    }

    /// Print a failed call. Global failures already show in the banner.
    fn failure(&mut self, error: &ServiceError) -> io::Result<()> {
        match error.surface() {
            Surface::Inline => match error.field() {
                Some(field) => writeln!(self.out, "  {}: {}", field, error),
                None => writeln!(self.out, "error: {}", error),
            },
            Surface::Global => self.render(),
        }
    }

    pub async fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let command = match parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                write!(self.out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        self.execute(command).await
    }

    async fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Login { username, password } => self.login(username, password).await?,
            Command::Register(args) => self.register(args).await?,
            Command::Logout => {
                self.actions.logout().await;
                writeln!(self.out, "Signed out.")?;
            }
            Command::Whoami => {
                let user = self.actions.store().with(|s| s.user.current_user.clone());
                match user {
                    Some(u) => writeln!(self.out, "{} <{}> ({})", u.display_name(), u.email, u.username)?,
                    None => writeln!(self.out, "Not signed in.")?,
                }
            }
            Command::Theme { theme } => self.theme(theme)?,
            command => {
                if self.signed_in()? {
                    self.entity_command(command).await?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    async fn login(&mut self, username: String, password: String) -> io::Result<()> {
        let form = LoginForm { username, password };
        if let Err(report) = form.validate() {
            return self.form_errors(&report);
        }
        match self.actions.login(&form.username, &form.password).await {
            Ok(user) => {
                writeln!(self.out, "Welcome, {}.", user.display_name())?;
                let _ = self.actions.fetch_entities().await;
                self.render()
            }
            Err(e) => self.failure(&e),
        }
    }

    async fn register(&mut self, args: RegisterArgs) -> io::Result<()> {
        let form = RegistrationForm {
            username: args.username,
            password: args.password,
            confirm_password: args.confirm_password,
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name.unwrap_or_default(),
        };
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(report) => return self.form_errors(&report),
        };
        match self.actions.register(registration).await {
            Ok(user) => {
                writeln!(self.out, "Account created. Welcome, {}.", user.display_name())?;
                let _ = self.actions.fetch_entities().await;
                self.render()
            }
            Err(e) => self.failure(&e),
        }
    }

    fn theme(&mut self, theme: Option<String>) -> io::Result<()> {
        let theme = match theme {
            None => self.actions.toggle_theme(),
            Some(raw) => match Theme::parse(&raw) {
                Some(theme) => {
                    self.actions.set_theme(theme);
                    theme
                }
                None => return writeln!(self.out, "Unknown theme '{}' (light or dark).", raw),
            },
        };
        writeln!(self.out, "Theme: {}", theme.as_str())
    }

    async fn entity_command(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::List => {}
            Command::Reload => {
                let _ = self.actions.fetch_entities().await;
            }
            Command::Show { id } => {
                let found = self.actions.store().with(|s| s.entities.find(id).cloned());
                return match found {
                    Some(entity) => render::entity(&mut self.out, &entity),
                    None => writeln!(self.out, "No entity with id {}.", id),
                };
            }
            Command::Add(args) => {
                let new_entity = match EntityForm::from(args).validate_new(today()) {
                    Ok(new_entity) => new_entity,
                    Err(report) => return self.form_errors(&report),
                };
                match self.actions.add_entity(new_entity).await {
                    Ok(entity) => writeln!(self.out, "Added #{} {}.", entity.id, entity.full_name())?,
                    Err(e) => return self.failure(&e),
                }
            }
            Command::Edit { id, fields } => {
                let patch = match EntityForm::from(fields).validate_patch(today()) {
                    Ok(patch) if patch.is_empty() => {
                        return writeln!(self.out, "Nothing to change.");
                    }
                    Ok(patch) => patch,
                    Err(report) => return self.form_errors(&report),
                };
                match self.actions.update_entity(id, patch).await {
                    Ok(entity) => writeln!(self.out, "Updated #{}.", entity.id)?,
                    Err(e) => return self.failure(&e),
                }
            }
            Command::Delete { id } => {
                if let Err(e) = self.actions.delete_entity(id).await {
                    return self.failure(&e);
                }
                writeln!(self.out, "Deleted #{}.", id)?;
            }
            Command::DeleteSelected => match self.actions.delete_selected().await {
                Ok(confirmation) if confirmation.removed.is_empty() => {
                    writeln!(self.out, "Nothing deleted.")?;
                }
                Ok(confirmation) => writeln!(self.out, "Deleted {} entities.", confirmation.removed.len())?,
                Err(e) => return self.failure(&e),
            },
            Command::Search { term } => self.actions.set_search_term(term.join(" ")),
            Command::Filter { field, value } => match filter_change(field, value.as_deref()) {
                Ok(change) => self.actions.table(TableSignal::SetFilter(change)),
                Err(message) => return writeln!(self.out, "{}", message),
            },
            Command::ClearFilters => self.actions.table(TableSignal::ClearFilters),
            Command::Sort { column } => match Column::parse(&column) {
                Some(column) => self.actions.table(TableSignal::RequestSort(column)),
                None => return writeln!(self.out, "Unknown column '{}'.", column),
            },
            Command::Page { page } => {
                let page_count = self.view.get(&self.actions.store().snapshot()).page_count;
                if page == 0 || page > page_count {
                    return writeln!(self.out, "Page must be between 1 and {}.", page_count);
                }
                self.actions.table(TableSignal::SetPage(page - 1));
            }
            Command::PageSize { size } => {
                if !PAGE_SIZE_OPTIONS.contains(&size) {
                    return writeln!(self.out, "Page size must be one of 5, 10, 25 or 50.");
                }
                self.actions.table(TableSignal::SetPageSize(size));
            }
            Command::Columns { columns } => {
                if columns.is_empty() {
                    return self.list_columns();
                }
                let mut parsed: Vec<Column> = Vec::new();
                for raw in &columns {
                    match Column::parse(raw) {
                        Some(column) => parsed.push(column),
                        None => return writeln!(self.out, "Unknown column '{}'.", raw),
                    }
                }
                self.actions.table(TableSignal::SetVisibleColumns(parsed));
            }
            Command::ToggleColumn { column } => match Column::parse(&column) {
                Some(column) => self.actions.table(TableSignal::ToggleColumn(column)),
                None => return writeln!(self.out, "Unknown column '{}'.", column),
            },
            Command::Select { ids } => {
                for id in ids {
                    self.actions.table(TableSignal::ToggleSelected(id));
                }
            }
            Command::SelectPage => {
                let ids: Vec<EntityId> = self
                    .view
                    .get(&self.actions.store().snapshot())
                    .rows
                    .iter()
                    .map(|e| e.id)
                    .collect();
                self.actions.table(TableSignal::SelectAll(ids));
            }
            Command::Unselect => self.actions.table(TableSignal::ClearSelection),
            Command::Dismiss => self.actions.clear_error(),
            Command::Quit
            | Command::Login { .. }
            | Command::Register(_)
            | Command::Logout
            | Command::Whoami
            | Command::Theme { .. } => return Ok(()),
        }
        self.render()
    }

    fn list_columns(&mut self) -> io::Result<()> {
        let table = self.actions.store().with(|s| s.table.clone());
        for column in Column::ALL {
            let mark = if table.is_visible(column) { 'x' } else { ' ' };
            writeln!(self.out, "[{}] {} ({})", mark, column.label(), column.id())?;
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn filter_change(field: FilterField, value: Option<&str>) -> Result<FilterChange, String> {
    let age = |raw: Option<&str>| -> Result<Option<u32>, String> {
        raw.map(|v| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a valid age.", v))
        })
        .transpose()
    };
    let date = |raw: Option<&str>| -> Result<Option<NaiveDate>, String> {
        raw.map(|v| {
            NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                .map_err(|_| format!("'{}' is not a date (YYYY-MM-DD).", v))
        })
        .transpose()
    };

    Ok(match field {
        FilterField::MinAge => FilterChange::MinAge(age(value)?),
        FilterField::MaxAge => FilterChange::MaxAge(age(value)?),
        FilterField::From => FilterChange::HireDateFrom(date(value)?),
        FilterField::To => FilterChange::HireDateTo(date(value)?),
    })
}
