//! Plain-text rendering of the catalog table and the selection panel.

use std::fmt::Write;

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use artworks_lib::model::Record;
use artworks_lib::selection::PageCheckState;
use artworks_lib::view::SelectionSummary;
use artworks_lib::view::TableProps;

const ELLIPSIS: char = '…';

/// A table column: header text, display width and how to read the cell.
struct Column {
    header: &'static str,
    width: usize,
    value: fn(&Record) -> String,
}

const COLUMNS: &[Column] = &[
    Column {
        header: "Title",
        width: 32,
        value: |record| record.title.clone(),
    },
    Column {
        header: "Origin",
        width: 16,
        value: |record| record.place_of_origin.clone(),
    },
    Column {
        header: "Artist",
        width: 28,
        value: |record| record.artist_display.clone(),
    },
    Column {
        header: "Inscriptions",
        width: 24,
        value: |record| record.inscriptions.clone(),
    },
    Column {
        header: "Start Year",
        width: 10,
        value: |record| year(record.date_start),
    },
    Column {
        header: "End Year",
        width: 8,
        value: |record| year(record.date_end),
    },
];

fn year(value: Option<i32>) -> String {
    value.map(|year| year.to_string()).unwrap_or_default()
}

fn checkbox(state: PageCheckState) -> &'static str {
    match state {
        PageCheckState::Unchecked => "[ ]",
        PageCheckState::Partial => "[-]",
        PageCheckState::Checked => "[x]",
    }
}

/// Fits `text` into exactly `width` terminal columns.
///
/// Line breaks become spaces. Text that is too wide is cut and ends in an ellipsis.
pub fn fit(text: &str, width: usize) -> String {
    let text = text.replace(['\r', '\n'], " ");
    let text = text.trim();

    let mut out = String::with_capacity(width);
    let mut used = 0;

    if text.width() <= width {
        out.push_str(text);
        used = text.width();
    } else if width > 0 {
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push(ELLIPSIS);
        used += 1;
    }

    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Renders the status line, the header row and one line per record.
pub fn table(props: &TableProps<'_>) -> String {
    let mut out = String::new();

    let pages = props
        .total_pages
        .map(|pages| pages.to_string())
        .unwrap_or_else(|| "?".to_string());
    let _ = write!(
        out,
        "Page {} of {} ({} artworks, {} per page)",
        props.page_index, pages, props.total_count, props.page_size
    );
    if props.loading {
        out.push_str("  loading...");
    }
    out.push('\n');

    if let Some(message) = props.error_message() {
        let _ = writeln!(out, "! {}", message);
    }

    let _ = write!(out, "  # {} ", checkbox(props.header));
    for column in COLUMNS {
        let _ = write!(out, " {}", fit(column.header, column.width));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    if props.records.is_empty() {
        out.push_str("  (no artworks)\n");
        return out;
    }

    for (position, record) in props.records.iter().enumerate() {
        let mark = if props.is_selected(record.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let _ = write!(out, "{:>3} {} ", position + 1, mark);
        for column in COLUMNS {
            let _ = write!(out, " {}", fit(&(column.value)(record), column.width));
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}

/// Renders the selection panel, or nothing while the selection is empty.
pub fn summary(summary: &SelectionSummary<'_>) -> String {
    if !summary.is_visible() {
        return String::new();
    }

    let mut out = summary.message();
    if !summary.expanded {
        out.push_str(" (v to list)\n");
        return out;
    }

    out.push('\n');
    for record in &summary.records {
        let _ = writeln!(out, "  {:>8}  {}", record.id.get(), fit(&record.title, 60).trim_end());
    }
    out
}
