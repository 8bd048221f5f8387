// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{Arg, ArgMatches, Command, arg};
use ticklist_core::{Coordinator, TodoService, validate_title};

use crate::parser::{ArgOutputFormat, arg_id, get_id, resolve_id};
use crate::todo_formatter::TodoFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdTodoList {
    pub output_format: ArgOutputFormat,
}

impl CmdTodoList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List todos, newest first")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<S: TodoService>(
        self,
        coordinator: &Coordinator<S>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing todos...");
        render(coordinator, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoAdd {
    pub title: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new todo")
            .arg(arg_title())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let title = matches
            .get_one::<String>("title")
            .expect("title is required");

        Ok(Self {
            title: validate_title(title)?.to_string(),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run<S: TodoService>(
        self,
        coordinator: &Coordinator<S>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(title = %self.title, "adding todo...");
        if coordinator.error().is_none() {
            coordinator.request_add(&self.title).await;
        }
        render(coordinator, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoToggle {
    pub id: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoToggle {
    pub const NAME: &str = "toggle";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("done")
            .about("Flip a todo between done and not done")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<S: TodoService>(
        self,
        coordinator: &Coordinator<S>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "toggling todo...");
        if coordinator.error().is_none() {
            let items = coordinator.items();
            let id = resolve_id(&items, &self.id)?;
            if !items.iter().any(|item| item.id == id) {
                return Err(format!("Todo not found: {}", self.id).into());
            }
            coordinator.request_toggle(&id).await;
        }
        render(coordinator, self.output_format)
    }
}

#[derive(Debug, Clone)]
pub struct CmdTodoDelete {
    pub id: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTodoDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete a todo")
            .arg(arg_id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run<S: TodoService>(
        self,
        coordinator: &Coordinator<S>,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "deleting todo...");
        if coordinator.error().is_none() {
            let id = resolve_id(&coordinator.items(), &self.id)?;
            coordinator.request_delete(&id).await;
        }
        render(coordinator, self.output_format)
    }
}

fn arg_title() -> Arg {
    arg!(title: <TITLE> "Title of the todo; surrounding whitespace is trimmed")
}

fn render<S: TodoService>(
    coordinator: &Coordinator<S>,
    output_format: ArgOutputFormat,
) -> Result<(), Box<dyn Error>> {
    let formatter = TodoFormatter::new().with_output_format(output_format);
    formatter.write(&mut io::stdout().lock(), &coordinator.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list() {
        let cmd = Command::new("test").subcommand(CmdTodoList::command());
        let matches = cmd
            .try_get_matches_from(["test", "ls", "--output-format", "json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("list").unwrap();
        let parsed = CmdTodoList::from(sub_matches);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }

    #[test]
    fn parse_add_trims_title() {
        let cmd = Command::new("test").subcommand(CmdTodoAdd::command());
        let matches = cmd
            .try_get_matches_from(["test", "add", "  Buy milk  "])
            .unwrap();
        let sub_matches = matches.subcommand_matches("add").unwrap();
        let parsed = CmdTodoAdd::from(sub_matches).unwrap();
        assert_eq!(parsed.title, "Buy milk");
        assert_eq!(parsed.output_format, ArgOutputFormat::Table);
    }

    #[test]
    fn parse_add_rejects_blank_title() {
        let cmd = Command::new("test").subcommand(CmdTodoAdd::command());
        let matches = cmd.try_get_matches_from(["test", "new", "   "]).unwrap();
        let sub_matches = matches.subcommand_matches("add").unwrap();
        assert!(CmdTodoAdd::from(sub_matches).is_err());
    }

    #[test]
    fn parse_add_requires_title() {
        let cmd = Command::new("test").subcommand(CmdTodoAdd::command());
        assert!(cmd.try_get_matches_from(["test", "add"]).is_err());
    }

    #[test]
    fn parse_toggle_alias() {
        let cmd = Command::new("test").subcommand(CmdTodoToggle::command());
        let matches = cmd.try_get_matches_from(["test", "done", "3f2a"]).unwrap();
        let sub_matches = matches.subcommand_matches("toggle").unwrap();
        let parsed = CmdTodoToggle::from(sub_matches);
        assert_eq!(parsed.id, "3f2a");
    }

    #[test]
    fn parse_delete_alias() {
        let cmd = Command::new("test").subcommand(CmdTodoDelete::command());
        let matches = cmd.try_get_matches_from(["test", "rm", "17"]).unwrap();
        let sub_matches = matches.subcommand_matches("delete").unwrap();
        let parsed = CmdTodoDelete::from(sub_matches);
        assert_eq!(parsed.id, "17");
    }
}
