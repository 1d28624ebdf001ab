//! Character classes shared by the stages.

#[inline(always)]
pub fn is_fullwidth(c: char) -> bool {
    let cp = c as u32;
    (0xFF01..=0xFF5E).contains(&cp) || cp == 0x3000
}

#[inline(always)]
pub fn fullwidth_to_halfwidth(c: char) -> char {
    let cp = c as u32;
    if (0xFF01..=0xFF5E).contains(&cp) {
        char::from_u32(cp - 0xFEE0).unwrap_or(c)
    } else if cp == 0x3000 {
        ' '
    } else {
        c
    }
}

/// Formatting characters users put between digit groups.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    matches!(c, '(' | ')' | '-') || c.is_whitespace()
}
