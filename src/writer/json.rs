//! Machine-readable report.

use crate::model::CatalogReport;
use std::io::{self, Write};

pub fn emit(report: &CatalogReport, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
