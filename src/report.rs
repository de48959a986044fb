use crate::table::Table;
use std::io::{self, Write};

/// Write the check result to `out`. With no duplicates this is a single
/// fixed line; otherwise a header line followed by every flagged row,
/// all columns, in original file order.
pub fn write_report<W: Write>(
    out: &mut W,
    table: &Table,
    key_column: &str,
    dupes: &[usize],
) -> io::Result<()> {
    if dupes.is_empty() {
        writeln!(out, "No duplicate IDs found.")?;
        return Ok(());
    }

    writeln!(out, "Duplicate {} values found:", key_column)?;

    // Column widths sized to the header and the flagged rows only.
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();
    for &idx in dupes {
        for (col, cell) in table.rows[idx].iter().enumerate() {
            widths[col] = widths[col].max(cell.len());
        }
    }

    write_row(out, &table.headers, &widths)?;
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    writeln!(out, "{:-<total$}", "")?;
    for &idx in dupes {
        write_row(out, &table.rows[idx], &widths)?;
    }

    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S], widths: &[usize]) -> io::Result<()> {
    let last = cells.len() - 1;
    for (col, cell) in cells.iter().enumerate() {
        if col == last {
            // no trailing padding on the final column
            writeln!(out, "{}", cell.as_ref())?;
        } else {
            write!(out, "{: <w$}  ", cell.as_ref(), w = widths[col])?;
        }
    }
    Ok(())
}
