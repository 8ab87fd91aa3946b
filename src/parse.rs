use crate::error::{Result, ToolError};

/// A single lot replacement extracted from an adjustment cell: put
/// `quantity` units into `target_lot`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAdjustment {
    pub target_lot: String,
    pub quantity: f64,
}

/// Interprets the raw text of one adjustment cell.
///
/// The cell encodes one of three shapes:
/// - `"LOT99 (5), LOT88 (3)"`: comma-separated multi-lot entries, each a lot
///   token followed by a quantity token;
/// - `"LOT99 (5)"`: a single lot with an explicit quantity;
/// - `"LOT99"`: a bare lot, in which case the row's original quantity
///   (`fallback_qty`) is carried over.
///
/// Quantity tokens may be wrapped in parentheses; the brackets are stripped
/// before parsing. Malformed entries and non-numeric quantities are explicit
/// errors, never silently defaulted.
pub fn parse_adjustment(text: &str, fallback_qty: f64) -> Result<Vec<ParsedAdjustment>> {
    let segments: Vec<&str> = text.split(',').collect();

    if segments.len() > 1 {
        return segments.iter().map(|segment| parse_entry(segment)).collect();
    }

    let tokens: Vec<&str> = text.trim().split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err(ToolError::MalformedAdjustment {
            entry: text.to_string(),
            reason: "expected a lot token".to_string(),
        }),
        [lot] => Ok(vec![ParsedAdjustment {
            target_lot: (*lot).to_string(),
            quantity: fallback_qty,
        }]),
        [lot, qty, ..] => Ok(vec![ParsedAdjustment {
            target_lot: (*lot).to_string(),
            quantity: parse_quantity(qty)?,
        }]),
    }
}

/// Parses one comma-separated entry: exactly a lot token and a quantity token.
fn parse_entry(segment: &str) -> Result<ParsedAdjustment> {
    let tokens: Vec<&str> = segment.trim().split_whitespace().collect();
    match tokens.as_slice() {
        [lot, qty] => Ok(ParsedAdjustment {
            target_lot: (*lot).to_string(),
            quantity: parse_quantity(qty)?,
        }),
        _ => Err(ToolError::MalformedAdjustment {
            entry: segment.trim().to_string(),
            reason: "expected a lot token followed by a quantity token".to_string(),
        }),
    }
}

/// Strips parentheses from a quantity token and parses it as a number.
fn parse_quantity(token: &str) -> Result<f64> {
    let stripped: String = token.chars().filter(|ch| !matches!(ch, '(' | ')')).collect();
    stripped
        .trim()
        .parse::<f64>()
        .map_err(|_| ToolError::InvalidQuantity {
            value: token.to_string(),
        })
}
