//! Exchange brand colors

use crate::error::{Error, Result};

/// 8-bit RGB triple
pub type Rgb = [u8; 3];

/// Background for exchanges missing from the palette (`#CCCCCC`)
pub const DEFAULT_BACKGROUND: Rgb = [0xCC, 0xCC, 0xCC];

pub const EXCHANGE_COLORS: &[(&str, &str)] = &[
    ("binance", "#F3BA2F"),
    ("coinbase", "#0052FF"),
    ("kraken", "#5741D9"),
    ("kucoin", "#24AE8F"),
    ("bybit", "#F7A600"),
    ("okx", "#000000"),
    ("huobi", "#2E7EFF"),
    ("gate", "#64B5F6"),
];

pub const WHITE: Rgb = [0xFF, 0xFF, 0xFF];
pub const BLACK: Rgb = [0x00, 0x00, 0x00];
pub const GRAY: Rgb = [0x80, 0x80, 0x80];
pub const PANEL_BORDER: Rgb = [0xDD, 0xDD, 0xDD];
pub const CHART_LINE: Rgb = [0x00, 0xFF, 0x00];

/// Parses `#RRGGBB` or `#RGB`
pub fn parse_hex_color(value: &str) -> Result<Rgb> {
    let hex = value.trim().trim_start_matches('#');
    let invalid = || Error::InvalidColor(value.to_string());

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match hex.len() {
        6 => {
            let mut rgb = [0u8; 3];
            for (i, channel) in rgb.iter_mut().enumerate() {
                *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
            }
            Ok(rgb)
        }
        3 => {
            let mut rgb = [0u8; 3];
            for (i, channel) in rgb.iter_mut().enumerate() {
                let nibble = u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid())?;
                *channel = nibble * 0x11;
            }
            Ok(rgb)
        }
        _ => Err(invalid()),
    }
}

/// Brand color of a known exchange
pub fn exchange_color(exchange: &str) -> Result<Rgb> {
    let key = exchange.to_lowercase();
    EXCHANGE_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .ok_or_else(|| Error::UnknownExchange(exchange.to_string()))
        .and_then(|(_, hex)| parse_hex_color(hex))
}

/// Brand color, or the default gray for unknown exchanges
pub fn background_for(exchange: &str) -> Rgb {
    exchange_color(exchange).unwrap_or(DEFAULT_BACKGROUND)
}
