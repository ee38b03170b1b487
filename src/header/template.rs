//! The canonical header every project-owned file carries.

use super::pattern::DEFAULT_DELIMITER;

const DIVIDER_WIDTH: usize = 78;

/// Product and ownership data rendered into each file's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    pub product: String,
    pub year: u16,
    pub holder: String,
    pub delimiter: char,
    pub divider_width: usize,
}

impl HeaderTemplate {
    pub fn new(product: impl Into<String>, year: u16, holder: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            year,
            holder: holder.into(),
            delimiter: DEFAULT_DELIMITER,
            divider_width: DIVIDER_WIDTH,
        }
    }

    pub fn sound_studio() -> Self {
        Self::new("The Sound Studio", 2026, "Ziv Elovitch")
    }

    /// The ownership line; the validator searches file heads for exactly this text.
    pub fn copyright_line(&self) -> String {
        format!(
            "Copyright (c) {} {}. All rights reserved.",
            self.year, self.holder
        )
    }

    /// Render the header for a file with the given basename.
    ///
    /// The result ends with the closing `*/` and no trailing newline.
    pub fn render(&self, file_name: &str) -> String {
        let divider = self.delimiter.to_string().repeat(self.divider_width);
        format!(
            "/*\n  {divider}\n\n    {file_name}\n\n    Part of: {product}\n    {copyright}\n\n  {divider}\n*/",
            product = self.product,
            copyright = self.copyright_line(),
        )
    }
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self::sound_studio()
    }
}
