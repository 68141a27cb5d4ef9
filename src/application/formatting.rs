use crate::domain::sheets::format::{
    CellStyle, Color, FormatRequest, GridSpan, HorizontalAlignment,
};

/// Header cells of these columns get the highlight style, in this order.
pub const HIGHLIGHTED_HEADERS: [&str; 2] = ["Plan_PR", "Value"];

pub fn data_style() -> CellStyle {
    CellStyle {
        foreground: Some(Color::BLACK),
        ..Default::default()
    }
}

pub fn header_highlight_style() -> CellStyle {
    CellStyle {
        background: Some(Color::from_rgb8(59, 113, 104)),
        foreground: Some(Color::WHITE),
        bold: Some(true),
        horizontal_alignment: Some(HorizontalAlignment::Center),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattingPlan {
    pub requests: Vec<FormatRequest>,
    pub highlighted: Vec<String>,
}

/// Plain black text below the header, then one highlight per highlighted header present
/// in `header`.
pub fn plan_formats(header: &[String]) -> FormattingPlan {
    let mut requests = vec![FormatRequest {
        span: GridSpan::rows_from(1),
        style: data_style(),
    }];
    let mut highlighted = Vec::new();

    for name in HIGHLIGHTED_HEADERS {
        if let Some(index) = header.iter().position(|column| column == name) {
            requests.push(FormatRequest {
                span: GridSpan::single_cell(0, index as u32),
                style: header_highlight_style(),
            });
            highlighted.push(name.to_owned());
        }
    }

    FormattingPlan {
        requests,
        highlighted,
    }
}
