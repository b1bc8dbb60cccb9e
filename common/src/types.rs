//! Static domain tables
//!
//! - REQUIRED_COLUMNS: header names the platform import expects
//! - SCREENSHOTS: the placeholder screenshots to render

/// Column names the platform import needs on the first sheet
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "competitorName",
    "featureName",
    "category",
    "hasFeature",
    "quality",
    "implementationQuality",
    "notes",
];

/// Exchange name column
pub const COMPETITOR_COLUMN: &str = "competitorName";
/// Feature name column
pub const FEATURE_COLUMN: &str = "featureName";
/// Category column
pub const CATEGORY_COLUMN: &str = "category";

/// One placeholder screenshot to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotSpec {
    pub exchange: &'static str,
    pub feature: &'static str,
    pub caption: &'static str,
}

/// Mockup content drawn below the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Order book, price chart and open orders panels
    Trading,
    /// P2P listing panel
    P2p,
    /// Header and footer only
    Plain,
}

impl VariantKind {
    pub fn from_feature(feature: &str) -> Self {
        if feature.contains("spot") || feature.contains("futures") {
            VariantKind::Trading
        } else if feature.contains("p2p") {
            VariantKind::P2p
        } else {
            VariantKind::Plain
        }
    }
}

impl ScreenshotSpec {
    pub const fn new(exchange: &'static str, feature: &'static str, caption: &'static str) -> Self {
        Self { exchange, feature, caption }
    }

    /// `<exchange>-<feature>.png`
    pub fn file_name(&self) -> String {
        format!("{}-{}.png", self.exchange, self.feature)
    }

    pub fn variant(&self) -> VariantKind {
        VariantKind::from_feature(self.feature)
    }

    /// Footer line, e.g. `Sample Screenshot - Binance Spot-Orders`
    pub fn footer(&self) -> String {
        format!(
            "Sample Screenshot - {} {}",
            title_case(self.exchange),
            title_case(self.feature)
        )
    }
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

pub const SCREENSHOTS: [ScreenshotSpec; 13] = [
    // Binance
    ScreenshotSpec::new("binance", "spot", "Binance Spot Trading Ana Arayüzü"),
    ScreenshotSpec::new("binance", "spot-orders", "Binance Gelişmiş Order Tipleri"),
    ScreenshotSpec::new("binance", "spot-chart", "Binance Trading Chart ve Analiz"),
    ScreenshotSpec::new("binance", "futures", "Binance Futures Trading Paneli"),
    ScreenshotSpec::new("binance", "p2p", "Binance P2P Trading Arayüzü"),
    // Coinbase
    ScreenshotSpec::new("coinbase", "spot", "Coinbase Basit Trading Arayüzü"),
    ScreenshotSpec::new("coinbase", "spot-pro", "Coinbase Pro Gelişmiş Trading"),
    // Kraken
    ScreenshotSpec::new("kraken", "spot", "Kraken Trading Terminali"),
    // KuCoin
    ScreenshotSpec::new("kucoin", "spot", "KuCoin Spot Trading Arayüzü"),
    // OKX
    ScreenshotSpec::new("okx", "spot", "OKX Trading Arayüzü"),
    // Bybit
    ScreenshotSpec::new("bybit", "futures", "Bybit Futures Trading"),
    // Huobi
    ScreenshotSpec::new("huobi", "spot", "Huobi Spot Trading"),
    // Gate.io
    ScreenshotSpec::new("gate", "spot", "Gate.io Spot Trading"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_required_columns_unique() {
        let set: HashSet<_> = REQUIRED_COLUMNS.iter().collect();
        assert_eq!(set.len(), REQUIRED_COLUMNS.len());
    }

    #[test]
    fn test_file_names_unique() {
        let names: HashSet<_> = SCREENSHOTS.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), 13);
        assert!(names.contains("binance-spot-orders.png"));
        assert!(names.contains("gate-spot.png"));
    }

    #[test]
    fn test_variant_kind() {
        assert_eq!(VariantKind::from_feature("spot"), VariantKind::Trading);
        assert_eq!(VariantKind::from_feature("spot-pro"), VariantKind::Trading);
        assert_eq!(VariantKind::from_feature("futures"), VariantKind::Trading);
        assert_eq!(VariantKind::from_feature("p2p"), VariantKind::P2p);
        assert_eq!(VariantKind::from_feature("earn"), VariantKind::Plain);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("binance"), "Binance");
        assert_eq!(title_case("spot-orders"), "Spot-Orders");
        assert_eq!(title_case("p2p"), "P2P");
        assert_eq!(title_case("OKX"), "Okx");
    }

    #[test]
    fn test_footer() {
        let spec = ScreenshotSpec::new("coinbase", "spot-pro", "x");
        assert_eq!(spec.footer(), "Sample Screenshot - Coinbase Spot-Pro");
    }
}
