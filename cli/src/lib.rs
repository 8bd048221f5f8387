// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line presentation for ticklist.

mod cli;
mod cmd_generate_completion;
mod cmd_todo;
mod config;
mod parser;
mod table;
mod todo_formatter;

pub use crate::cli::{Cli, Commands, run};
