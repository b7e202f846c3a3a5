use crate::domain::model::{AnnotatedItem, SalesReport, SalespersonTotal};
use crate::utils::error::{EtlError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SEPARATOR: &str = "----------------------------------------";

pub fn render_listing(title: &str, items: &[AnnotatedItem]) -> String {
    let mut lines = vec![SEPARATOR.to_string(), format!("{}: ", title)];
    lines.extend(items.iter().map(|item| item.to_string()));
    lines.join("\n")
}

/// Console form: the annotated input followed by the filtered view.
pub fn render_report(report: &SalesReport) -> String {
    format!(
        "{}\n{}\n",
        render_listing("Original List", &report.original),
        render_listing("Filtered and Sorted List", &report.filtered)
    )
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    name: &'a str,
    serial_number: &'a str,
    cost: i64,
    sales_price: i64,
    sales_person: &'a str,
    sales_person_profit: i64,
}

pub fn to_csv(items: &[AnnotatedItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for annotated in items {
        writer.serialize(CsvRow {
            id: annotated.item.id,
            name: &annotated.item.name,
            serial_number: &annotated.item.serial_number,
            cost: annotated.item.cost,
            sales_price: annotated.item.sales_price,
            sales_person: &annotated.item.sales_person,
            sales_person_profit: annotated.sales_person_profit,
        })?;
    }

    // csv only writes the header with the first record
    if items.is_empty() {
        writer.write_record([
            "id",
            "name",
            "serial_number",
            "cost",
            "sales_price",
            "sales_person",
            "sales_person_profit",
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    salesperson_totals: &'a [SalespersonTotal],
    original: &'a [AnnotatedItem],
    filtered: &'a [AnnotatedItem],
}

pub fn to_json(report: &SalesReport) -> Result<String> {
    let json = JsonReport {
        generated_at: Utc::now(),
        salesperson_totals: &report.totals,
        original: &report.original,
        filtered: &report.filtered,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
