use strum::Display;

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Style attributes of a cell. Only the attributes that are `Some` are assigned when a
/// style is applied, the rest of the cell's style is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub bold: Option<bool>,
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

impl CellStyle {
    /// Whether any attribute that lives inside the text format (color, weight) is set.
    pub fn touches_text_format(&self) -> bool {
        self.foreground.is_some() || self.bold.is_some()
    }

    /// Assigns the attributes set in `other` on top of `self`.
    pub fn assign(&mut self, other: &CellStyle) {
        if other.background.is_some() {
            self.background = other.background;
        }
        if other.touches_text_format() {
            // The text format is replaced as a whole, like a field mask on `textFormat`.
            self.foreground = other.foreground;
            self.bold = other.bold;
        }
        if other.horizontal_alignment.is_some() {
            self.horizontal_alignment = other.horizontal_alignment;
        }
    }
}

/// A rectangular, zero-based, half-open span of a worksheet. `None` ends reach the edge
/// of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridSpan {
    pub start_row: u32,
    pub end_row: Option<u32>,
    pub start_column: u32,
    pub end_column: Option<u32>,
}

impl GridSpan {
    /// Every row from `start_row` down, across all columns.
    pub fn rows_from(start_row: u32) -> Self {
        Self {
            start_row,
            ..Default::default()
        }
    }

    pub fn single_cell(row: u32, column: u32) -> Self {
        Self {
            start_row: row,
            end_row: Some(row + 1),
            start_column: column,
            end_column: Some(column + 1),
        }
    }

    pub fn contains(&self, row: u32, column: u32) -> bool {
        row >= self.start_row
            && self.end_row.map_or(true, |end| row < end)
            && column >= self.start_column
            && self.end_column.map_or(true, |end| column < end)
    }
}

/// A declarative style assignment over a span of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRequest {
    pub span: GridSpan,
    pub style: CellStyle,
}
