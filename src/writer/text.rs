//! Plain-text report for the terminal.

use crate::model::{CatalogReport, CategoryReport, Necessity};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Leave out prerequisites and locations.
    pub hide_spoilers: bool,
}

pub fn emit(report: &CatalogReport, out: &mut impl Write, opts: TextOptions) -> io::Result<()> {
    for category in &report.categories {
        category_block(category, out, opts)?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "Estimated completion: {}% (of {}%)",
        report.total_score, report.max_total_score
    )?;
    if let Some(actual) = report.reported_completion {
        writeln!(out, "Save file reports:    {actual}%")?;
    }
    Ok(())
}

fn category_block(category: &CategoryReport, out: &mut impl Write, opts: TextOptions) -> io::Result<()> {
    let suffix = match category.necessity {
        Necessity::Primary => format!("[{}/{}%]", category.unlocked_score, category.max_score),
        Necessity::Supporting => format!("[{}/{}]", category.unlocked_score, category.max_score),
    };
    let done = if category.completed { " (complete)" } else { "" };
    writeln!(out, "{} {suffix}{done}", category.name)?;
    if !category.tooltip.is_empty() {
        writeln!(out, "  {}", category.tooltip)?;
    }

    for item in &category.items {
        let mark = if item.unlocked { "[x]" } else { "[ ]" };
        write!(out, "  {mark} {:<24} act {}", item.name, item.act)?;
        if !opts.hide_spoilers {
            if !item.prerequisites.is_empty() {
                write!(out, "  needs {}", item.prerequisites.join(", "))?;
            }
            if !item.location.is_empty() {
                write!(out, "  @ {}", item.location)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
