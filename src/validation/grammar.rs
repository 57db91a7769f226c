// ============================================================================
// Number Grammar
// Single-pass scanner for signed decimal literals
// ============================================================================
//
// number         ::= [sign] integer-part [ ('.' | ',') fraction-part ]
// sign           ::= '+' | '-'
// integer-part   ::= one-or-more ASCII digits
// fraction-part  ::= one-or-more ASCII digits
//
// The whole input must match; nothing is trimmed.

/// Explicit sign written in front of the integer part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    #[inline]
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Sign::Plus),
            b'-' => Some(Sign::Minus),
            _ => None,
        }
    }
}

/// Character separating the integer and fractional parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Dot,
    Comma,
}

impl Separator {
    #[inline]
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'.' => Some(Separator::Dot),
            b',' => Some(Separator::Comma),
            _ => None,
        }
    }
}

/// Structural decomposition of a string that matches the number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberShape {
    /// Explicit sign, if any
    pub sign: Option<Sign>,
    /// Separator, present only together with a fractional part
    pub separator: Option<Separator>,
    /// Digits before the separator (leading zeros included)
    pub integer_digits: usize,
    /// Digits after the separator, 0 without a fractional part
    pub fraction_digits: usize,
}

impl NumberShape {
    /// Scan `input` against the number grammar.
    ///
    /// Returns `None` unless the entire string matches.
    pub fn scan(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();

        let sign = bytes.first().copied().and_then(Sign::from_byte);
        let mut pos = usize::from(sign.is_some());

        let integer_digits = leading_digits(&bytes[pos..]);
        if integer_digits == 0 {
            return None;
        }
        pos += integer_digits;

        let Some(&next) = bytes.get(pos) else {
            return Some(Self {
                sign,
                separator: None,
                integer_digits,
                fraction_digits: 0,
            });
        };

        let separator = Separator::from_byte(next)?;
        pos += 1;

        let fraction_digits = leading_digits(&bytes[pos..]);
        if fraction_digits == 0 || pos + fraction_digits != bytes.len() {
            return None;
        }

        Some(Self {
            sign,
            separator: Some(separator),
            integer_digits,
            fraction_digits,
        })
    }

    /// Total digit characters, integer and fraction
    #[inline]
    pub const fn digit_count(&self) -> usize {
        self.integer_digits + self.fraction_digits
    }

    /// Positions taken from the precision budget: every digit plus an explicit sign
    #[inline]
    pub const fn width(&self) -> usize {
        let sign_width = if self.sign.is_some() { 1 } else { 0 };
        sign_width + self.digit_count()
    }

    /// Whether the literal is written with a leading minus sign.
    ///
    /// Purely syntactic: `-0` is negative here.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }
}

#[inline]
fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
