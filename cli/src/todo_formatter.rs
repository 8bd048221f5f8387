// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use colored::Colorize;
use serde::Serialize;
use ticklist_core::{Failure, Item, ViewState};

use crate::parser::ArgOutputFormat;
use crate::table::{Column, PaddingDirection, Table};

const EMPTY_MESSAGE: &str = "No todos yet. Add one above to get started!";
const LOADING_MESSAGE: &str = "Loading todos...";

/// Number of id characters shown in the table.
const SHORT_ID_LEN: usize = 8;

#[derive(Debug)]
pub struct TodoFormatter {
    columns: Vec<TodoColumn>,
    format: ArgOutputFormat,
}

impl TodoFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![TodoColumn::Status, TodoColumn::Id, TodoColumn::Title],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn write(&self, w: &mut impl io::Write, state: &ViewState) -> Result<(), Box<dyn Error>> {
        match self.format {
            ArgOutputFormat::Json => self.write_json(w, state),
            ArgOutputFormat::Table => self.write_table(w, state),
        }
    }

    fn write_json(&self, w: &mut impl io::Write, state: &ViewState) -> Result<(), Box<dyn Error>> {
        let view = JsonView {
            items: &state.items,
            loading: state.loading,
            error: state.error.as_ref().map(JsonFailure::from),
        };
        serde_json::to_writer_pretty(&mut *w, &view)?;
        writeln!(w)?;
        Ok(())
    }

    fn write_table(&self, w: &mut impl io::Write, state: &ViewState) -> Result<(), Box<dyn Error>> {
        if let Some(failure) = &state.error {
            writeln!(w, "{} {}", "Error:".red().bold(), failure.message().red())?;
        }

        if state.loading {
            writeln!(w, "{}", LOADING_MESSAGE.dimmed())?;
        } else if state.items.is_empty() {
            writeln!(w, "{}", EMPTY_MESSAGE.italic())?;
        } else {
            Table::new(&self.columns, &state.items).write_to(w)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum TodoColumn {
    Status,
    Id,
    Title,
}

impl Column<Item> for TodoColumn {
    fn format(&self, data: &Item) -> String {
        match self {
            TodoColumn::Status if data.completed => "[x]".to_string(),
            TodoColumn::Status => "[ ]".to_string(),
            TodoColumn::Id => data.id.chars().take(SHORT_ID_LEN).collect(),
            TodoColumn::Title => data.title.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn stylize(&self, data: &Item, cell: String) -> String {
        match self {
            TodoColumn::Status if data.completed => cell.green().to_string(),
            TodoColumn::Id => cell.cyan().to_string(),
            TodoColumn::Title if data.completed => cell.dimmed().strikethrough().to_string(),
            _ => cell,
        }
    }
}

#[derive(Serialize)]
struct JsonView<'a> {
    items: &'a [Item],
    loading: bool,
    error: Option<JsonFailure<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    message: &'static str,
    cause: &'a str,
}

impl<'a> From<&'a Failure> for JsonFailure<'a> {
    fn from(failure: &'a Failure) -> Self {
        Self {
            message: failure.message(),
            cause: &failure.cause,
        }
    }
}
