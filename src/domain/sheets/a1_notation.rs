use std::fmt::Formatter;

use super::column::Column;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Quotes a sheet title for use in A1 notation. Single quotes inside the title are doubled.
pub fn quote_sheet_title(sheet_title: &str) -> String {
    format!("'{}'", sheet_title.replace('\'', "''"))
}

impl A1Notation {
    /// The whole worksheet, e.g. `'Sheet1'`.
    pub fn whole_sheet(sheet_title: &str) -> Self {
        A1Notation(quote_sheet_title(sheet_title))
    }

    /// The top-left cell of the worksheet, e.g. `'Sheet1'!A1`.
    pub fn first_cell(sheet_title: &str) -> Self {
        A1Notation(format!("{}!A1", quote_sheet_title(sheet_title)))
    }

    /// A `row_count` x `column_count` block anchored at A1, e.g. `'Sheet1'!A1:D4`.
    /// Empty dimensions collapse to the first cell.
    pub fn block_from_origin(sheet_title: &str, row_count: u32, column_count: u32) -> Self {
        if row_count == 0 || column_count == 0 {
            return Self::first_cell(sheet_title);
        }

        let last_column = Column::from_number(column_count);
        A1Notation(format!(
            "{}!A1:{}{}",
            quote_sheet_title(sheet_title),
            last_column,
            row_count
        ))
    }
}
