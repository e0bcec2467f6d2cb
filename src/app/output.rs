use crate::app::browse::SectionPage;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::io::Write;

pub fn write_json<W: Write>(out: &mut W, page: &SectionPage) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, page)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(out: W, page: &SectionPage) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &page.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_table<W: Write>(out: &mut W, page: &SectionPage) -> Result<()> {
    writeln!(
        out,
        "{}: page {}/{} ({} matches)",
        page.section, page.page, page.total_pages, page.total_count
    )?;

    if page.rows.is_empty() {
        writeln!(out, "  (no results)")?;
        return Ok(());
    }

    let id_width = page.rows.iter().map(|r| r.id.len()).max().unwrap_or(2).max(2);
    for row in &page.rows {
        let date = row
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".repeat(10));
        let star = if row.featured { "★" } else { " " };
        writeln!(out, "  {} {:<id_width$}  {}  {}", star, row.id, date, row.title)?;
    }
    Ok(())
}

pub fn write_facets<W: Write>(
    out: &mut W,
    group: &str,
    counts: &BTreeMap<String, usize>,
) -> Result<()> {
    writeln!(out, "{}:", group)?;
    for (value, count) in counts {
        writeln!(out, "  {:<24} {}", value, count)?;
    }
    Ok(())
}
