// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use ticklist_core::{Item, ItemId};

pub fn arg_id() -> Arg {
    arg!(id: <ID> "The id of the todo, or a unique prefix of it")
}

pub fn get_id(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("id")
        .expect("id is required")
        .clone()
}

/// Resolves user input to the id of a cached item.
///
/// An exact match wins, then a unique prefix. Input matching nothing is passed
/// through unchanged.
pub fn resolve_id(items: &[Item], input: &str) -> Result<ItemId, String> {
    if let Some(item) = items.iter().find(|item| item.id.as_str() == input) {
        return Ok(item.id.clone());
    }

    let mut candidates = items.iter().filter(|item| item.id.starts_with(input));
    match (candidates.next(), candidates.next()) {
        (Some(item), None) => Ok(item.id.clone()),
        (Some(_), Some(_)) => Err(format!("Id prefix `{input}` matches more than one todo")),
        (None, _) => {
            tracing::debug!(input, "id matches no cached todo");
            Ok(ItemId::from(input))
        }
    }
}

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item {
            id: ItemId::from(id),
            title: id.to_uppercase(),
            completed: false,
            created_at: None,
        }
    }

    #[test]
    fn resolve_exact_match_beats_prefix() {
        let items = [item("ab"), item("abc")];
        assert_eq!(resolve_id(&items, "ab").unwrap(), ItemId::from("ab"));
    }

    #[test]
    fn resolve_unique_prefix() {
        let items = [item("3f2a9c"), item("77b0e1")];
        assert_eq!(resolve_id(&items, "3f").unwrap(), ItemId::from("3f2a9c"));
    }

    #[test]
    fn resolve_ambiguous_prefix_fails() {
        let items = [item("3f2a9c"), item("3f77e1")];
        let err = resolve_id(&items, "3f").unwrap_err();
        assert!(err.contains("more than one"));
    }

    #[test]
    fn resolve_unknown_passes_through() {
        let items = [item("3f2a9c")];
        assert_eq!(resolve_id(&items, "zz").unwrap(), ItemId::from("zz"));
        assert_eq!(resolve_id(&[], "zz").unwrap(), ItemId::from("zz"));
    }

    #[test]
    fn output_format_defaults_to_table() {
        let cmd = clap::Command::new("test").arg(ArgOutputFormat::arg());
        let matches = cmd.clone().try_get_matches_from(["test"]).unwrap();
        assert_eq!(ArgOutputFormat::from(&matches), ArgOutputFormat::Table);

        let matches = cmd
            .try_get_matches_from(["test", "--output-format", "json"])
            .unwrap();
        assert_eq!(ArgOutputFormat::from(&matches), ArgOutputFormat::Json);
    }
}
