use google_sheets4::{
    api::{
        CellData, CellFormat, Color as SheetsColor, GridProperties, GridRange, RepeatCellRequest,
        Request, SheetProperties, TextFormat, UpdateCellsRequest, UpdateSheetPropertiesRequest,
    },
    FieldMask,
};

use crate::domain::sheets::format::{CellStyle, Color, FormatRequest, GridSpan};

fn to_index(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn color(color: Color) -> SheetsColor {
    SheetsColor {
        red: Some(color.red),
        green: Some(color.green),
        blue: Some(color.blue),
        alpha: None,
    }
}

fn grid_range(sheet_id: i32, span: &GridSpan) -> GridRange {
    GridRange {
        sheet_id: Some(sheet_id),
        start_row_index: Some(to_index(span.start_row)),
        end_row_index: span.end_row.map(to_index),
        start_column_index: Some(to_index(span.start_column)),
        end_column_index: span.end_column.map(to_index),
    }
}

fn cell_format(style: &CellStyle) -> CellFormat {
    let text_format = style.touches_text_format().then(|| TextFormat {
        foreground_color: style.foreground.map(color),
        bold: style.bold,
        ..Default::default()
    });

    CellFormat {
        background_color: style.background.map(color),
        text_format,
        horizontal_alignment: style
            .horizontal_alignment
            .map(|alignment| alignment.to_string()),
        ..Default::default()
    }
}

/// Field mask naming exactly the attributes `style` sets.
fn field_mask(style: &CellStyle) -> FieldMask {
    let mut fields = Vec::new();
    if style.background.is_some() {
        fields.push("userEnteredFormat.backgroundColor");
    }
    if style.touches_text_format() {
        fields.push("userEnteredFormat.textFormat");
    }
    if style.horizontal_alignment.is_some() {
        fields.push("userEnteredFormat.horizontalAlignment");
    }
    FieldMask::new(&fields)
}

pub fn repeat_cell_request(sheet_id: i32, request: &FormatRequest) -> Request {
    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(grid_range(sheet_id, &request.span)),
            cell: Some(CellData {
                user_entered_format: Some(cell_format(&request.style)),
                ..Default::default()
            }),
            fields: Some(field_mask(&request.style)),
        }),
        ..Default::default()
    }
}

/// Wipes every user-entered format on the sheet.
pub fn clear_formatting_request(sheet_id: i32) -> Request {
    Request {
        update_cells: Some(UpdateCellsRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["userEnteredFormat"])),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn resize_request(sheet_id: i32, row_count: u32, column_count: u32) -> Request {
    Request {
        update_sheet_properties: Some(UpdateSheetPropertiesRequest {
            properties: Some(SheetProperties {
                sheet_id: Some(sheet_id),
                grid_properties: Some(GridProperties {
                    row_count: Some(to_index(row_count)),
                    column_count: Some(to_index(column_count)),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&[
                "gridProperties.rowCount",
                "gridProperties.columnCount",
            ])),
        }),
        ..Default::default()
    }
}
