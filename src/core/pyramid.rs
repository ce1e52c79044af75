//! Right-aligned `#` pyramid rendering

pub const MIN_HEIGHT: u8 = 1;
pub const MAX_HEIGHT: u8 = 8;

/// Pyramid height, guaranteed to lie within `MIN_HEIGHT..=MAX_HEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Height(u8);

impl Height {
    pub fn new(value: i64) -> Result<Self, String> {
        if (i64::from(MIN_HEIGHT)..=i64::from(MAX_HEIGHT)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(format!(
                "Height must be between {MIN_HEIGHT} and {MAX_HEIGHT} (got {value})"
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Height {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Renders 1-based `row`: `height - row` spaces followed by `row` hashes.
///
/// `row` is clamped to the pyramid, so every rendered row is exactly
/// `height` characters wide.
pub fn render_row(height: Height, row: u8) -> String {
    let width = usize::from(height.get());
    let bricks = usize::from(row.clamp(1, height.get()));

    let mut line = String::with_capacity(width);
    line.push_str(&" ".repeat(width - bricks));
    line.push_str(&"#".repeat(bricks));
    line
}

/// Rows of the pyramid from the apex down to the full-width base
pub fn rows(height: Height) -> impl Iterator<Item = String> {
    (1..=height.get()).map(move |row| render_row(height, row))
}

/// The whole pyramid, one newline-terminated line per row
pub fn render(height: Height) -> String {
    rows(height).fold(String::new(), |mut out, row| {
        out.push_str(&row);
        out.push('\n');
        out
    })
}
