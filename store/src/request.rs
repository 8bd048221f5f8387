// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Query string builder for table operations.

use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Row selection for a table request: projected columns, ordering and equality filters.
///
/// ```
/// use ticklist_store::{Order, Query};
///
/// let query = Query::new().select("*").order("created_at", Order::Desc);
/// assert_eq!(
///     query.to_pairs(),
///     vec![
///         ("select".to_string(), "*".to_string()),
///         ("order".to_string(), "created_at.desc".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    select: Option<String>,
    order: Vec<(String, Order)>,
    filters: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query matching every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the projected columns.
    #[must_use]
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = Some(columns.into());
        self
    }

    /// Appends a sort key.
    #[must_use]
    pub fn order(mut self, column: impl Into<String>, order: Order) -> Self {
        self.order.push((column.into(), order));
        self
    }

    /// Restricts rows to those where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl fmt::Display) -> Self {
        self.filters.push((column.into(), format!("eq.{value}")));
        self
    }

    /// Whether the query narrows the row set at all.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Renders the query as URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 2);
        if let Some(select) = &self.select {
            pairs.push(("select".to_string(), select.clone()));
        }
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, order)| format!("{column}.{order}"))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_string(), order));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}
