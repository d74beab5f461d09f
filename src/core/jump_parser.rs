//! Parsing of the "jump to #" input.
//!
//! The user types a 1-based grammar point number. [`JumpParser`] turns that
//! text into a 0-based index, or `None` when the text is not a plain integer
//! within `1..=total`. There is no error type here: invalid input is simply
//! not a jump.
//!
//! # Accepted Input
//! - **Plain integers**: `1`, `42`
//! - **Surrounding whitespace**: ` 7 ` (trimmed)
//! - **Explicit plus sign**: `+3`
//!
//! Anything else (`0`, `-2`, `3.5`, `3abc`, empty text, values above the
//! collection size) is rejected.

pub struct JumpParser;

impl JumpParser {
    /// Parse a 1-based number, without range checks
    pub fn parse(input: &str) -> Option<i64> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<i64>().ok()
    }

    /// Parse and validate against the collection size, returning a 0-based index
    pub fn resolve(input: &str, total: usize) -> Option<usize> {
        let number = Self::parse(input)?;
        let number = usize::try_from(number).ok()?;

        if number == 0 || number > total {
            return None;
        }

        Some(number - 1)
    }
}
