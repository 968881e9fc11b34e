use colored::Colorize;
use serde::Serialize;
use stockzapp::commands::{CmdMessage, MessageLevel};
use stockzapp::error::{Result, StockzError};
use stockzapp::model::Item;
use stockzapp::stats::InventoryReport;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SHORT_ID_LEN: usize = 8;
const MAX_TEXT_WIDTH: usize = 24;
const GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(StockzError::Serialization)?;
    println!("{}", text);
    Ok(())
}

pub(super) fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((pos, _)) => &id[..pos],
        None => id,
    }
}

pub(super) fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }
    print!("{}", render_table(items));
}

/// Column title and whether it is right-aligned.
const COLUMNS: [(&str, bool); 8] = [
    ("ID", false),
    ("Name", false),
    ("Code", false),
    ("Qty", true),
    ("Price", true),
    ("Value", true),
    ("Location", false),
    ("Category", false),
];

fn row_cells(item: &Item) -> [String; 8] {
    [
        short_id(&item.id).to_string(),
        item.name.clone(),
        item.code.clone(),
        item.quantity.clone(),
        item.price.clone(),
        format_number(item.value()),
        item.location.clone(),
        item.category.clone(),
    ]
}

/// Plain-text table, one line per item plus a header. Trailing blanks are trimmed.
pub(super) fn render_table(items: &[Item]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            row_cells(item)
                .iter()
                .map(|cell| truncate_to_width(cell, MAX_TEXT_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, (title, _))| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(title.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|((title, right), &width)| pad(title, width, *right))
        .collect();

    let mut out = String::new();
    let header = header.join(GAP);
    out.push_str(&format!("{}\n", header.trim_end().bold()));
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(COLUMNS.iter().zip(&widths))
            .map(|(cell, ((_, right), &width))| pad(cell, width, *right))
            .collect();
        let line = cells.join(GAP);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub(super) fn print_item(item: &Item) {
    let rows = [
        ("ID", item.id.clone()),
        ("Name", item.name.clone()),
        ("Code", item.code.clone()),
        ("Quantity", item.quantity.clone()),
        ("Price", item.price.clone()),
        ("Value", format_number(item.value())),
        ("Location", item.location.clone()),
        ("Category", item.category.clone()),
        ("Description", item.description.clone()),
    ];
    let label_width = rows
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        println!("{} {}", pad(label, label_width, false).dimmed(), value);
    }
}

pub(super) fn print_report(report: &InventoryReport) {
    print!("{}", render_report(report));
}

pub(super) fn render_report(report: &InventoryReport) -> String {
    let stats = &report.stats;
    let mut out = format!(
        "Items: {}  Quantity: {}  Locations: {}  Value: {}\n",
        stats.total_items,
        format_number(stats.total_quantity),
        stats.location_count,
        format_number(stats.total_value)
    );

    if !report.categories.is_empty() {
        let name_width = report
            .categories
            .iter()
            .map(|c| c.category.width())
            .max()
            .unwrap_or(0);
        out.push_str("\nBy category:\n");
        for summary in &report.categories {
            out.push_str(&format!(
                "  {}  qty {}  value {}\n",
                pad(&summary.category, name_width, false),
                format_number(summary.total_qty),
                format_number(summary.total_value)
            ));
        }
    }

    if let Some(max) = &report.max_value_item {
        out.push_str(&format!(
            "\nHighest value: {} ({}) {}\n",
            max.name,
            max.code,
            format_number(max.value)
        ));
    }
    out
}

/// Thousands separators, at most two decimals, trailing zeros dropped.
pub(super) fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn pad(s: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(s.width()));
    if right {
        format!("{}{}", fill, s)
    } else {
        format!("{}{}", s, fill)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let s: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .collect();
    if s.width() <= max_width {
        return s;
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
