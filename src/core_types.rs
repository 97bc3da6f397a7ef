use serde::{Deserialize, Serialize};

/// A single raw cell as produced by a spreadsheet reader.
///
/// Readers hand numbers over as numbers (dates included, as day serials)
/// and everything else as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

/// One sheet, row-major.
pub type Grid = Vec<Vec<Cell>>;

impl Cell {
    /// Infers a cell from raw CSV text the way spreadsheet readers do:
    /// numeric-looking text becomes a number, blank becomes empty.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(raw.to_string()),
        }
    }

    /// Text form used for header matching and string fields.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Cell::Text(s) => s.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// Builds a grid from raw CSV text using the `csv` reader.
/// Rows keep their ragged lengths; cells are inferred with [`Cell::from_raw`].
pub fn grid_from_csv(text: &str) -> Result<Grid, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .trim(csv::Trim::None)
        .from_reader(text.as_bytes());

    let mut grid = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        grid.push(rec.iter().map(Cell::from_raw).collect());
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_numbers_and_blanks() {
        assert_eq!(Cell::from_raw(" 12.5 "), Cell::Number(12.5));
        assert_eq!(Cell::from_raw("   "), Cell::Empty);
        assert_eq!(Cell::from_raw("7 Iron"), Cell::Text("7 Iron".into()));
    }

    #[test]
    fn integer_numbers_render_without_fraction() {
        assert_eq!(Cell::Number(7.0).as_text(), "7");
        assert_eq!(Cell::Number(7.25).as_text(), "7.25");
    }
}
