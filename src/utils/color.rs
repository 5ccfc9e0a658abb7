use ratatui::style::Color;

/// Convert a `#rgb` / `#rrggbb` swatch to a terminal color.
///
/// Anything that does not parse renders as gray.
#[must_use]
pub fn swatch_to_color(swatch: &str) -> Color {
    parse_hex(swatch).map_or(Color::Gray, |(r, g, b)| Color::Rgb(r, g, b))
}

fn parse_hex(swatch: &str) -> Option<(u8, u8, u8)> {
    let hex = swatch.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
