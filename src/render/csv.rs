use crate::error::ConvertError;

/// A row type with a declared, fixed column order.
pub trait TableRow {
    const COLUMNS: &'static [&'static str];

    /// Cell values in `COLUMNS` order.
    fn values(&self) -> Vec<String>;
}

impl<T: TableRow> TableRow for &T {
    const COLUMNS: &'static [&'static str] = T::COLUMNS;

    fn values(&self) -> Vec<String> {
        (**self).values()
    }
}

/// Render rows as CSV text.
///
/// The header row lists the column names unquoted; every data value is
/// wrapped in double quotes without escaping. Rows end in `\n`.
///
/// Example:
/// technique,time,allocation_count,allocation_size
/// "malloc","12.5","4194304","64"
///
/// `table` only names the row set in the error for an empty one.
pub fn render_csv<R: TableRow>(table: &str, rows: &[R]) -> Result<String, ConvertError> {
    if rows.is_empty() {
        return Err(ConvertError::EmptyRowSet {
            table: table.to_string(),
        });
    }

    let mut out = R::COLUMNS.join(",");
    out.push('\n');
    for row in rows {
        let cells: Vec<String> = row.values().iter().map(|v| format!("\"{}\"", v)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    Ok(out)
}
