//! Output layer - renders one page of records to a writer.
//!
//! Text mode prints each record of the page as compact JSON, then the
//! caption, the page-number controls and the page-size selector. JSON mode
//! prints a single [`PageReport`] object.

pub mod render;

use crate::model::error::AppError;
use crate::model::Record;
use crate::source::InputSource;
use crate::state::{ListPage, ListView};
use crate::view_state::types::PageSize;
use crate::view_state::window::page_window;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Options for rendering a page, resolved from config and CLI flags.
///
/// # Examples
///
/// ```
/// use pagewin::view::CliArgs;
/// use pagewin::view_state::PageSize;
///
/// let args = CliArgs::new(PageSize::new(20).unwrap(), 5, vec![10, 20, 50]);
/// assert_eq!(args.page, 1);
/// assert!(!args.json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Requested page (1-based; out-of-range values are clamped).
    pub page: i64,

    /// Validated items per page.
    pub page_size: PageSize,

    /// Number of page-number controls.
    pub window_size: usize,

    /// Sizes offered by the page-size selector.
    pub page_size_options: Vec<usize>,

    /// Free-text search applied before paging.
    pub search: Option<String>,

    /// Exact-match `(field, value)` filters applied before paging.
    pub filters: Vec<(String, String)>,

    /// Emit a JSON report instead of text.
    pub json: bool,
}

impl CliArgs {
    /// Create args on page 1 with no filters, text output.
    pub fn new(page_size: PageSize, window_size: usize, page_size_options: Vec<usize>) -> Self {
        Self {
            page: 1,
            page_size,
            window_size,
            page_size_options,
            search: None,
            filters: Vec::new(),
            json: false,
        }
    }
}

/// Machine-readable page, emitted with `--json`.
#[derive(Debug, Serialize)]
pub struct PageReport<'a> {
    /// Effective page after clamping.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Records that passed the filters.
    pub total_items: usize,
    /// Pages the filtered records span.
    pub total_pages: usize,
    /// 1-based ordinal of the first record shown (0 when empty).
    pub start_index: usize,
    /// 1-based ordinal of the last record shown (0 when empty).
    pub end_index: usize,
    /// Page numbers to render as controls.
    pub window: Vec<usize>,
    /// Records on this page.
    pub items: &'a [&'a Record],
}

/// Parse a `KEY=VALUE` filter argument.
///
/// # Errors
///
/// Returns a message when `=` is missing or the key is empty.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got {:?}", raw)),
    }
}

/// Read every record from `input_source` and print the requested page to stdout.
///
/// Logging must be initialized by caller before calling this function.
///
/// # Errors
///
/// Returns `AppError::InputRead` for unreadable or malformed input, and
/// `AppError::Output` if stdout is closed.
pub fn run_with_source(input_source: InputSource, args: CliArgs) -> Result<(), AppError> {
    let records = input_source.read_records()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_records(&records, &args, &mut out)
}

/// Filter and paginate `records`, writing the page to `out`.
///
/// # Errors
///
/// Returns `AppError::Output` when writing fails.
pub fn run_with_records<W: Write>(
    records: &[Record],
    args: &CliArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let mut view = ListView::with_page_size(args.page_size);
    if let Some(query) = &args.search {
        view.set_query(query);
    }
    for (field, value) in &args.filters {
        view.set_field(field.clone(), value);
    }
    // Filters reset the page, so navigate last
    view.go_to_page(args.page);

    let page = view.visible(records);
    info!(
        page = page.page,
        total_pages = page.total_pages,
        matched = page.total_items(),
        "rendering page"
    );

    if args.json {
        write_json(&page, args, out)
    } else {
        write_text(&page, args, out)
    }
}

fn write_json<W: Write>(
    page: &ListPage<'_, Record>,
    args: &CliArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let report = PageReport {
        page: page.page,
        per_page: args.page_size.get(),
        total_items: page.total_items(),
        total_pages: page.total_pages,
        start_index: page.start_index,
        end_index: page.end_index,
        window: page_window(page.total_pages, page.page, args.window_size),
        items: page.items(),
    };
    serde_json::to_writer(&mut *out, &report).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

fn write_text<W: Write>(
    page: &ListPage<'_, Record>,
    args: &CliArgs,
    out: &mut W,
) -> Result<(), AppError> {
    for record in page.items() {
        writeln!(out, "{}", record.to_compact_json())?;
    }
    writeln!(
        out,
        "{}",
        render::filtered_caption(
            page.start_index,
            page.end_index,
            page.total_items(),
            page.unfiltered_total,
        )
    )?;
    let controls = render::controls(page.total_pages, page.page, args.window_size);
    if !controls.is_empty() {
        writeln!(out, "{}", controls)?;
    }
    writeln!(
        out,
        "{}",
        render::page_size_selector(&args.page_size_options, args.page_size.get())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_records;

    fn sample_records() -> Vec<Record> {
        let content: String = (1..=23)
            .map(|id| {
                let role = if id % 2 == 0 { "business" } else { "individual" };
                format!("{{\"id\":{},\"role\":\"{}\"}}\n", id, role)
            })
            .collect();
        parse_records(&content).unwrap()
    }

    fn args(per_page: usize) -> CliArgs {
        CliArgs::new(PageSize::new(per_page).unwrap(), 5, vec![5, 10, 20])
    }

    fn render(records: &[Record], args: &CliArgs) -> String {
        let mut out = Vec::new();
        run_with_records(records, args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_filter_splits_on_first_equals() {
        assert_eq!(
            parse_filter("role=business"),
            Ok(("role".to_string(), "business".to_string()))
        );
        assert_eq!(
            parse_filter("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
        assert!(parse_filter("role").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn text_output_last_partial_page() {
        let records = sample_records();
        let mut args = args(10);
        args.page = 3;

        insta::assert_snapshot!(render(&records, &args), @r#"
        {"id":21,"role":"individual"}
        {"id":22,"role":"business"}
        {"id":23,"role":"individual"}
        Showing 21 to 23 of 23
        < 1 2 [3]
        Per page: 5 [10] 20
        "#);
    }

    #[test]
    fn text_output_clamps_far_page() {
        let records = sample_records();
        let mut far = args(10);
        far.page = 9999;
        let mut last = args(10);
        last.page = 3;

        assert_eq!(render(&records, &far), render(&records, &last));
    }

    #[test]
    fn text_output_with_filter_reports_unfiltered_total() {
        let records = sample_records();
        let mut args = args(5);
        args.filters = vec![("role".to_string(), "business".to_string())];
        args.page = 2;

        insta::assert_snapshot!(render(&records, &args), @r#"
        {"id":12,"role":"business"}
        {"id":14,"role":"business"}
        {"id":16,"role":"business"}
        {"id":18,"role":"business"}
        {"id":20,"role":"business"}
        Showing 6 to 10 of 11 (filtered from 23)
        < 1 [2] 3 >
        Per page: [5] 10 20
        "#);
    }

    #[test]
    fn text_output_for_no_matches() {
        let records = sample_records();
        let mut args = args(10);
        args.search = Some("nothing".to_string());

        insta::assert_snapshot!(render(&records, &args), @r#"
        No results (filtered from 23)
        Per page: 5 [10] 20
        "#);
    }

    #[test]
    fn json_output_reports_page_metadata() {
        let records = sample_records();
        let mut args = args(10);
        args.page = 2;
        args.json = true;

        let output = render(&records, &args);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["page"], 2);
        assert_eq!(value["per_page"], 10);
        assert_eq!(value["total_items"], 23);
        assert_eq!(value["total_pages"], 3);
        assert_eq!(value["start_index"], 11);
        assert_eq!(value["end_index"], 20);
        assert_eq!(value["window"], serde_json::json!([1, 2, 3]));
        assert_eq!(value["items"].as_array().map(Vec::len), Some(10));
        assert_eq!(value["items"][0]["id"], 11);
    }

    #[test]
    fn json_output_for_empty_collection() {
        let mut args = args(10);
        args.json = true;

        let output = render(&[], &args);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total_items"], 0);
        assert_eq!(value["total_pages"], 0);
        assert_eq!(value["start_index"], 0);
        assert_eq!(value["end_index"], 0);
        assert_eq!(value["window"], serde_json::json!([]));
    }
}
