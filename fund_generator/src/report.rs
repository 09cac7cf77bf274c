//! Spreadsheet output of the recommended trades.
//!
//! The workbook has one sheet with four fixed columns (see [`ReportColumn`]).
//! Colors, border, number formats, and column width come from a
//! [`ReportStyle`] so the allocation code never sees formatting details.
use std::path::Path;

use fund_common::{AllocationRow, FundError, Result};
use log::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Report columns, in sheet order. `Display` gives the header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ReportColumn {
    #[strum(serialize = "Ticker")]
    Ticker,
    #[strum(serialize = "Stock Price")]
    StockPrice,
    #[strum(serialize = "Market Capitalization")]
    MarketCap,
    #[strum(serialize = "Number of Shares to Buy")]
    SharesToBuy,
}

/// Kind of cell a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Text,
    Currency,
    Integer,
}

impl ReportColumn {
    fn kind(self) -> CellKind {
        match self {
            ReportColumn::Ticker => CellKind::Text,
            ReportColumn::StockPrice | ReportColumn::MarketCap => CellKind::Currency,
            ReportColumn::SharesToBuy => CellKind::Integer,
        }
    }

    fn index(self) -> u16 {
        self as u16
    }
}

/// Visual configuration of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStyle {
    /// Worksheet name.
    pub sheet_name: String,
    /// Cell background, as `0xRRGGBB`.
    pub background: u32,
    /// Font color, as `0xRRGGBB`.
    pub font_color: u32,
    /// Width of every column, in character units.
    pub column_width: f64,
    /// Number format of price and market cap cells.
    pub currency_format: String,
    /// Number format of share count cells.
    pub integer_format: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            sheet_name: "Recommended Trades".to_string(),
            background: 0xD1FFBD,
            font_color: 0x000000,
            column_width: 18.0,
            currency_format: "$0.00".to_string(),
            integer_format: "0".to_string(),
        }
    }
}

impl ReportStyle {
    fn base_format(&self) -> Format {
        Format::new()
            .set_font_color(Color::RGB(self.font_color))
            .set_background_color(Color::RGB(self.background))
            .set_border(FormatBorder::Thin)
    }

    fn format_for(&self, kind: CellKind) -> Format {
        match kind {
            CellKind::Text => self.base_format(),
            CellKind::Currency => self.base_format().set_num_format(&self.currency_format),
            CellKind::Integer => self.base_format().set_num_format(&self.integer_format),
        }
    }
}

/// Writes allocation rows into a formatted workbook.
pub struct ReportWriter {
    style: ReportStyle,
}

impl ReportWriter {
    /// Create a writer using `style`.
    pub fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// Render `rows` into a new in-memory workbook.
    pub fn render(&self, rows: &[AllocationRow]) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.fill_sheet(worksheet, rows).map_err(report_error)?;
        Ok(workbook)
    }

    /// Render `rows` and save the workbook to `path`.
    pub fn write(&self, rows: &[AllocationRow], path: &Path) -> Result<()> {
        let mut workbook = self.render(rows)?;
        workbook.save(path).map_err(report_error)?;
        info!("Report with {} rows saved to {}", rows.len(), path.display());
        Ok(())
    }

    fn fill_sheet(&self, sheet: &mut Worksheet, rows: &[AllocationRow]) -> Result<(), XlsxError> {
        sheet.set_name(&self.style.sheet_name)?;

        for column in ReportColumn::iter() {
            let format = self.style.format_for(column.kind());
            let col = column.index();
            sheet.set_column_width(col, self.style.column_width)?;
            sheet.set_column_format(col, &format)?;
            sheet.write_string_with_format(0, col, column.to_string(), &format)?;
        }

        let text = self.style.format_for(CellKind::Text);
        let currency = self.style.format_for(CellKind::Currency);
        let integer = self.style.format_for(CellKind::Integer);

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            let symbol = row.symbol.as_str();
            sheet.write_string_with_format(r, ReportColumn::Ticker.index(), symbol, &text)?;
            sheet.write_number_with_format(r, ReportColumn::StockPrice.index(), row.price, &currency)?;
            sheet.write_number_with_format(
                r,
                ReportColumn::MarketCap.index(),
                row.market_cap,
                &currency,
            )?;
            sheet.write_number_with_format(
                r,
                ReportColumn::SharesToBuy.index(),
                row.shares_to_buy as f64,
                &integer,
            )?;
        }
        Ok(())
    }
}

fn report_error(e: XlsxError) -> FundError {
    FundError::Report(e.to_string())
}
