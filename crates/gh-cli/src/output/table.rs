use std::io::{self, Write};

use comfy_table::{Cell, ContentArrangement, Table, presets};

/// Right padding of every column except the last one
const COLUMN_GAP: u16 = 2;

/// Row/field printer: aligned columns on a terminal, tab-separated otherwise
pub struct TablePrinter<'a> {
    out: &'a mut dyn Write,
    is_tty: bool,
    rows: Vec<Vec<String>>,
    current: Vec<String>,
}

impl<'a> TablePrinter<'a> {
    pub fn new(out: &'a mut dyn Write, is_tty: bool) -> Self {
        Self {
            out,
            is_tty,
            rows: Vec::new(),
            current: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.current.push(field.into());
        self
    }

    pub fn end_row(&mut self) -> &mut Self {
        let row = std::mem::take(&mut self.current);
        self.rows.push(row);
        self
    }

    /// Flush all rows. A trailing unterminated row is included.
    pub fn render(&mut self) -> io::Result<()> {
        if !self.current.is_empty() {
            self.end_row();
        }
        let rows = std::mem::take(&mut self.rows);

        if !self.is_tty {
            for row in &rows {
                writeln!(self.out, "{}", row.join("\t"))?;
            }
            return Ok(());
        }

        let mut table = aligned_table(&rows);
        for line in table.lines() {
            writeln!(self.out, "{}", line.trim_end())?;
        }
        self.out.flush()
    }
}

fn aligned_table(rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .force_no_tty();
    for row in rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_GAP));
    }
    table
}
