//! # Result View Derivation
//!
//! Pure functions that turn the server result list into what the table shows:
//! price filter, sort, page slice. Nothing here touches the server list itself.

use std::cmp::Ordering;

use shared::dto::screener::StockResult;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Symbol,
    Volume,
    Atr,
    Price,
    Date,
}

impl SortField {
    /// All columns in table order
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Symbol,
            SortField::Volume,
            SortField::Atr,
            SortField::Price,
            SortField::Date,
        ]
    }

    /// Column key as used by header clicks (`symbol`, `volume`, `atr`, `price`, `date`)
    pub fn from_column(name: &str) -> Option<SortField> {
        match name {
            "symbol" => Some(SortField::Symbol),
            "volume" => Some(SortField::Volume),
            "atr" => Some(SortField::Atr),
            "price" => Some(SortField::Price),
            "date" => Some(SortField::Date),
            _ => None,
        }
    }

    /// Header text
    pub fn title(&self) -> &'static str {
        match self {
            SortField::Symbol => "Symbol",
            SortField::Volume => "Avg. Volume",
            SortField::Atr => "ATR Ratio",
            SortField::Price => "Last Price",
            SortField::Date => "Last Update",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active header
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Page navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

/// Client-side last price bounds, both inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 999_999.0,
        }
    }
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Compare two rows on `field`, ascending.
///
/// Symbols compare case-insensitively first so `aapl` sits next to `AAPL`.
/// Rows whose date cannot be parsed sort before all dated rows.
pub fn compare_rows(a: &StockResult, b: &StockResult, field: Option<SortField>) -> Ordering {
    match field {
        Some(SortField::Symbol) => a
            .symbol
            .to_lowercase()
            .cmp(&b.symbol.to_lowercase())
            .then_with(|| a.symbol.cmp(&b.symbol)),
        Some(SortField::Volume) => a.avg_1yr_volume.cmp(&b.avg_1yr_volume),
        Some(SortField::Atr) => a.atr_ratio.partial_cmp(&b.atr_ratio).unwrap_or(Ordering::Equal),
        Some(SortField::Price) => a.last_price.partial_cmp(&b.last_price).unwrap_or(Ordering::Equal),
        Some(SortField::Date) => a.updated_at().cmp(&b.updated_at()),
        None => Ordering::Equal,
    }
}

/// Rows whose last price falls inside `range`, in server order.
pub fn filter_by_price(rows: &[StockResult], range: PriceRange) -> Vec<StockResult> {
    rows.iter()
        .filter(|row| range.contains(row.last_price))
        .cloned()
        .collect()
}

/// Stable sort in place.
pub fn sort_rows(rows: &mut [StockResult], field: Option<SortField>, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let cmp = compare_rows(a, b, field);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// `sort(filter(rows, range))`
pub fn derive_rows(
    rows: &[StockResult],
    range: PriceRange,
    field: Option<SortField>,
    direction: SortDirection,
) -> Vec<StockResult> {
    let mut visible = filter_by_price(rows, range);
    sort_rows(&mut visible, field, direction);
    visible
}

/// `ceil(count / PAGE_SIZE)`; zero for an empty list
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Move one page in `direction`, clamped to `[1, total_pages]`.
pub fn step_page(current: usize, direction: PageDirection, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    let next = match direction {
        PageDirection::Previous => current.saturating_sub(1),
        PageDirection::Next => current.saturating_add(1),
    };
    next.clamp(1, last)
}

/// Rows on 1-based `page`
pub fn page_slice(rows: &[StockResult], page: usize) -> &[StockResult] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(rows.len());
    let end = start.saturating_add(PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn stock(symbol: &str, volume: u64, atr: f64, price: f64, date: &str) -> StockResult {
        StockResult {
            symbol: symbol.to_string(),
            avg_1yr_volume: volume,
            atr_ratio: atr,
            last_price: price,
            last_update: date.to_string(),
        }
    }

    pub(crate) fn numbered(count: usize) -> Vec<StockResult> {
        (1..=count)
            .map(|i| stock(&format!("S{:02}", i), i as u64 * 1000, i as f64, i as f64, "2024-01-01"))
            .collect()
    }

    fn symbols(rows: &[StockResult]) -> Vec<&str> {
        rows.iter().map(|r| r.symbol.as_str()).collect()
    }

    fn sample() -> Vec<StockResult> {
        vec![
            stock("MSFT", 20_000_000, 1.5, 410.0, "2024-03-01"),
            stock("aapl", 50_000_000, 2.1, 227.5, "2024-01-15"),
            stock("AMZN", 35_000_000, 2.8, 185.0, "2024-02-10"),
            stock("TSLA", 90_000_000, 4.9, 250.0, "2023-12-29"),
        ]
    }

    #[test]
    fn test_sort_by_symbol_case_insensitive() {
        let mut rows = sample();
        sort_rows(&mut rows, Some(SortField::Symbol), SortDirection::Ascending);
        assert_eq!(symbols(&rows), vec!["aapl", "AMZN", "MSFT", "TSLA"]);
    }

    #[test]
    fn test_sort_numeric_fields() {
        let mut rows = sample();
        sort_rows(&mut rows, Some(SortField::Volume), SortDirection::Ascending);
        assert_eq!(symbols(&rows), vec!["MSFT", "AMZN", "aapl", "TSLA"]);

        sort_rows(&mut rows, Some(SortField::Atr), SortDirection::Descending);
        assert_eq!(symbols(&rows), vec!["TSLA", "AMZN", "aapl", "MSFT"]);

        sort_rows(&mut rows, Some(SortField::Price), SortDirection::Ascending);
        assert_eq!(symbols(&rows), vec!["AMZN", "aapl", "TSLA", "MSFT"]);
    }

    #[test]
    fn test_sort_by_date() {
        let mut rows = sample();
        sort_rows(&mut rows, Some(SortField::Date), SortDirection::Ascending);
        assert_eq!(symbols(&rows), vec!["TSLA", "aapl", "AMZN", "MSFT"]);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        assert_eq!(SortField::from_column("sector"), None);
        let mut rows = sample();
        sort_rows(&mut rows, None, SortDirection::Descending);
        assert_eq!(symbols(&rows), symbols(&sample()));
    }

    #[test]
    fn test_toggle_twice_reverses_then_restores() {
        let mut asc = sample();
        sort_rows(&mut asc, Some(SortField::Price), SortDirection::Ascending);

        let mut desc = asc.clone();
        sort_rows(&mut desc, Some(SortField::Price), SortDirection::Ascending.toggled());
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);

        let mut back = desc.clone();
        sort_rows(&mut back, Some(SortField::Price), SortDirection::Ascending.toggled().toggled());
        assert_eq!(back, asc);
    }

    #[test]
    fn test_price_filter_inclusive_bounds() {
        let rows = sample();
        let range = PriceRange { min: 185.0, max: 250.0 };
        let visible = filter_by_price(&rows, range);
        assert_eq!(symbols(&visible), vec!["aapl", "AMZN", "TSLA"]);
        for row in &rows {
            let included = visible.iter().any(|v| v.symbol == row.symbol);
            assert_eq!(included, range.min <= row.last_price && row.last_price <= range.max);
        }
        assert_eq!(rows, sample());
    }

    #[test]
    fn test_empty_price_range() {
        let range = PriceRange { min: 500.0, max: 100.0 };
        assert!(filter_by_price(&sample(), range).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_step_page_stays_in_bounds() {
        for count in 1..=35 {
            let pages = total_pages(count);
            let mut page = 1;
            for _ in 0..(pages + 2) {
                page = step_page(page, PageDirection::Next, pages);
                assert!((1..=pages).contains(&page));
            }
            assert_eq!(page, pages);
            for _ in 0..(pages + 2) {
                page = step_page(page, PageDirection::Previous, pages);
                assert!((1..=pages).contains(&page));
            }
            assert_eq!(page, 1);
        }
        assert_eq!(step_page(1, PageDirection::Next, 0), 1);
    }

    #[test]
    fn test_page_slice_last_partial_page() {
        let rows = numbered(25);
        let third = page_slice(&rows, 3);
        assert_eq!(third.len(), 5);
        assert_eq!(third[0].symbol, "S21");
        assert_eq!(third[4].symbol, "S25");
        assert!(page_slice(&rows, 4).is_empty());
        assert_eq!(page_slice(&rows, 1).len(), PAGE_SIZE);
    }
}
