//! The sold-item filtering pipeline.
//!
//! Stages run in a fixed order: salesperson profits are annotated over the
//! full input, then unprofitable sales, repeated serial numbers and badly
//! formatted serial numbers are dropped, survivors are sorted by profit and
//! finally grouped by their salesperson's total profit.

use crate::domain::model::{AnnotatedItem, SalesReport, SalespersonTotal, SoldItem};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Total profit per salesperson, in first-seen order.
pub fn salesperson_profits(items: &[SoldItem]) -> Vec<SalespersonTotal> {
    let mut totals: Vec<SalespersonTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        match index.get(item.sales_person.as_str()) {
            Some(&slot) => totals[slot].profit = totals[slot].profit.wrapping_add(item.profit()),
            None => {
                index.insert(item.sales_person.as_str(), totals.len());
                totals.push(SalespersonTotal {
                    sales_person: item.sales_person.clone(),
                    profit: item.profit(),
                });
            }
        }
    }

    totals
}

/// Pairs every item with its salesperson's total profit over `items`.
///
/// Must see the unfiltered batch: the total counts losing sales too.
pub fn annotate_profits(items: Vec<SoldItem>) -> Vec<AnnotatedItem> {
    let totals: HashMap<String, i64> = salesperson_profits(&items)
        .into_iter()
        .map(|total| (total.sales_person, total.profit))
        .collect();

    items
        .into_iter()
        .map(|item| {
            let sales_person_profit = totals.get(&item.sales_person).copied().unwrap_or_default();
            AnnotatedItem {
                item,
                sales_person_profit,
            }
        })
        .collect()
}

/// A sale is profitable only when the price strictly exceeds the cost.
pub fn is_profitable(item: &SoldItem) -> bool {
    item.sales_price > item.cost
}

/// Serial numbers occurring more than once in `items`.
pub fn find_duplicate_serials(items: &[AnnotatedItem]) -> HashSet<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates = HashSet::new();

    for annotated in items {
        let serial = annotated.item.serial_number.as_str();
        if !seen.insert(serial) {
            duplicates.insert(serial.to_string());
        }
    }

    duplicates
}

/// Drops every occurrence of a repeated serial number, not just the repeats.
pub fn remove_duplicate_serials(items: Vec<AnnotatedItem>) -> Vec<AnnotatedItem> {
    let duplicates = find_duplicate_serials(&items);
    if !duplicates.is_empty() {
        tracing::debug!("Duplicate serial numbers: {:?}", duplicates);
    }

    items
        .into_iter()
        .filter(|annotated| !duplicates.contains(&annotated.item.serial_number))
        .collect()
}

/// Uppercase ASCII letters of the name followed by the id.
pub fn derived_token(item: &SoldItem) -> String {
    let mut token: String = item.name.chars().filter(|c| c.is_ascii_uppercase()).collect();
    token.push_str(&item.id.to_string());
    token
}

/// Strips `-` and upper-cases.
pub fn normalize_serial(serial: &str) -> String {
    serial.replace('-', "").to_uppercase()
}

/// The normalized serial number must contain the derived token somewhere.
pub fn matches_format(item: &SoldItem) -> bool {
    normalize_serial(&item.serial_number).contains(&derived_token(item))
}

/// Profit descending, then serial number descending.
pub fn compare_by_profit(a: &AnnotatedItem, b: &AnnotatedItem) -> Ordering {
    b.profit()
        .cmp(&a.profit())
        .then_with(|| b.item.serial_number.cmp(&a.item.serial_number))
}

pub fn sort_by_profit(items: &mut [AnnotatedItem]) {
    // stable: exact ties keep input order
    items.sort_by(compare_by_profit);
}

/// Regroups a sorted list by salesperson profit.
///
/// Groups appear in the order their profit value is first met, and items
/// keep their sorted order inside a group. This can place a less profitable
/// item ahead of a more profitable one from another group.
pub fn group_by_salesperson_profit(sorted: Vec<AnnotatedItem>) -> Vec<AnnotatedItem> {
    let mut groups: Vec<Vec<AnnotatedItem>> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for annotated in sorted {
        let slot = *index.entry(annotated.sales_person_profit).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(annotated);
    }

    groups.into_iter().flatten().collect()
}

/// Filtering, sorting and grouping over an already annotated batch.
pub fn filter_and_sort(items: Vec<AnnotatedItem>) -> Vec<AnnotatedItem> {
    let total = items.len();

    let profitable: Vec<AnnotatedItem> = items
        .into_iter()
        .filter(|annotated| is_profitable(&annotated.item))
        .collect();
    tracing::debug!("Profitability filter kept {} of {} items", profitable.len(), total);

    let sold_once = remove_duplicate_serials(profitable);
    tracing::debug!("Duplicate serial filter kept {} items", sold_once.len());

    let mut formatted: Vec<AnnotatedItem> = sold_once
        .into_iter()
        .filter(|annotated| {
            let keep = matches_format(&annotated.item);
            if !keep {
                tracing::debug!(
                    "Dropping item {}: serial {} does not contain {}",
                    annotated.item.id,
                    annotated.item.serial_number,
                    derived_token(&annotated.item)
                );
            }
            keep
        })
        .collect();
    tracing::debug!("Serial format filter kept {} items", formatted.len());

    sort_by_profit(&mut formatted);
    group_by_salesperson_profit(formatted)
}

/// Runs every stage over a raw batch.
pub fn run(items: Vec<SoldItem>) -> SalesReport {
    let totals = salesperson_profits(&items);
    let original = annotate_profits(items);
    let filtered = filter_and_sort(original.clone());

    tracing::info!(
        "Sales pipeline kept {} of {} items across {} salespeople",
        filtered.len(),
        original.len(),
        totals.len()
    );

    SalesReport {
        original,
        filtered,
        totals,
    }
}
