// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, marker::PhantomData};

use unicode_width::UnicodeWidthStr;

pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: &'a str,
    pub padding: bool,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            separator: " ",
            padding: true,
            data,
        }
    }

    pub fn write_to(&self, w: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let columns = self.compute_columns(&table);
        for (cells, row) in table.into_iter().zip(self.data) {
            let last = columns.len().saturating_sub(1);
            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                write!(w, "{}", col.stylize_cell(row, cell))?;
                if j < last {
                    write!(w, "{}", self.separator)?;
                }
            }
            writeln!(w)?;
        }

        Ok(())
    }

    fn compute_columns(&self, table: &[Vec<String>]) -> Vec<ColumnStylizer<'_, T, C>> {
        let max_widths = self.padding.then(|| get_column_max_width(table));
        let last = self.columns.len().saturating_sub(1);

        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let direction = col.padding_direction();
                let padding = match &max_widths {
                    // trailing left-aligned column needs no padding
                    Some(_) if i == last && direction == PaddingDirection::Left => None,
                    Some(widths) => Some((widths[i], direction)),
                    None => None,
                };
                ColumnStylizer {
                    config: col,
                    padding,
                    _marker: PhantomData,
                }
            })
            .collect()
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    /// Applies color or text effects to an already padded cell.
    fn stylize(&self, _data: &T, cell: String) -> String {
        cell
    }
}

struct ColumnStylizer<'a, T, C: Column<T>> {
    config: &'a C,
    /// padding width and direction
    padding: Option<(usize, PaddingDirection)>,
    _marker: PhantomData<T>,
}

impl<T, C: Column<T>> ColumnStylizer<'_, T, C> {
    fn stylize_cell(&self, data: &T, cell: String) -> String {
        let cell = match self.padding {
            Some((width, direction)) => pad(cell, width, direction),
            None => cell,
        };
        self.config.stylize(data, cell)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: String, width: usize, direction: PaddingDirection) -> String {
    // `format!` pads by char count, which is wrong for wide glyphs
    let fill = width.saturating_sub(cell.width());
    if fill == 0 {
        return cell;
    }
    match direction {
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}

fn get_column_max_width(table: &[Vec<String>]) -> Vec<usize> {
    let Some(first) = table.first() else {
        return Vec::new();
    };

    let mut max_width = vec![0; first.len()];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            max_width[i] = max_width[i].max(cell.width());
        }
    }
    max_width
}
