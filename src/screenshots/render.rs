//! Placeholder screenshot rendering

use super::font::Typeface;
use competitor_lens_common::layout::{
    CanvasLayout, PanelRect, HEADER_FONT_SIZE, P2P_ROWS, PANEL_BORDER_WIDTH, TEXT_FONT_SIZE,
};
use competitor_lens_common::palette::{self, BLACK, CHART_LINE, GRAY, PANEL_BORDER, WHITE};
use competitor_lens_common::{ScreenshotSpec, VariantKind};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use rand::Rng;

const FOOTER_NOTE: &str = "Generated for CompetitorLens Platform";

fn fill_rect(canvas: &mut RgbImage, panel: PanelRect, color: Rgb<u8>) {
    let rect = Rect::at(panel.left, panel.top).of_size(panel.width(), panel.height());
    draw_filled_rect_mut(canvas, rect, color);
}

/// Border drawn inward, `width` pixels thick
fn outline_rect(canvas: &mut RgbImage, panel: PanelRect, color: Rgb<u8>, width: i32) {
    for inset in 0..width {
        let inner = PanelRect::new(
            panel.left + inset,
            panel.top + inset,
            panel.right - inset,
            panel.bottom - inset,
        );
        if inner.width() == 0 || inner.height() == 0 {
            break;
        }
        let rect = Rect::at(inner.left, inner.top).of_size(inner.width(), inner.height());
        draw_hollow_rect_mut(canvas, rect, color);
    }
}

fn titled_panel(canvas: &mut RgbImage, typeface: &Typeface, panel: PanelRect, title: &str) {
    outline_rect(canvas, panel, Rgb(PANEL_BORDER), PANEL_BORDER_WIDTH);
    typeface.draw(canvas, panel.title_origin(), HEADER_FONT_SIZE, Rgb(BLACK), title);
}

/// Random zig-zag inside the chart panel
pub fn chart_points<R: Rng>(layout: &CanvasLayout, rng: &mut R) -> Vec<(i32, i32)> {
    layout
        .chart_xs()
        .map(|x| (x, rng.random_range(layout.chart_y_range())))
        .collect()
}

/// Listing row text of the i-th P2P seller
pub fn p2p_listing(index: u32) -> String {
    format!(
        "Seller {} - Rate: 4.{} - Price: ${}",
        index + 1,
        9 - index,
        45000 + index * 100
    )
}

fn draw_trading<R: Rng>(canvas: &mut RgbImage, layout: &CanvasLayout, typeface: &Typeface, rng: &mut R) {
    titled_panel(canvas, typeface, layout.order_book, "Order Book");
    titled_panel(canvas, typeface, layout.chart, "Price Chart");

    let points = chart_points(layout, rng);
    let line = Rgb(CHART_LINE);
    for pair in points.windows(2) {
        let (x0, y0) = (pair[0].0 as f32, pair[0].1 as f32);
        let (x1, y1) = (pair[1].0 as f32, pair[1].1 as f32);
        // 2px stroke
        draw_line_segment_mut(canvas, (x0, y0), (x1, y1), line);
        draw_line_segment_mut(canvas, (x0, y0 + 1.0), (x1, y1 + 1.0), line);
    }

    titled_panel(canvas, typeface, layout.open_orders, "Open Orders");
}

fn draw_p2p(canvas: &mut RgbImage, layout: &CanvasLayout, typeface: &Typeface) {
    titled_panel(canvas, typeface, layout.p2p, "P2P Marketplace");

    for i in 0..P2P_ROWS {
        typeface.draw(canvas, layout.p2p_row_origin(i), TEXT_FONT_SIZE, Rgb(BLACK), &p2p_listing(i));
    }
}

/// Renders one mockup at the standard canvas size
pub fn render_screenshot<R: Rng>(spec: &ScreenshotSpec, typeface: &Typeface, rng: &mut R) -> RgbImage {
    let layout = CanvasLayout::standard();
    let background = Rgb(palette::background_for(spec.exchange));

    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, background);

    // header strip + logo placeholder
    fill_rect(&mut canvas, layout.header, Rgb(WHITE));
    fill_rect(&mut canvas, layout.logo, background);

    typeface.draw(
        &mut canvas,
        layout.name_origin,
        HEADER_FONT_SIZE,
        Rgb(BLACK),
        &spec.exchange.to_uppercase(),
    );
    typeface.draw(&mut canvas, layout.caption_origin, TEXT_FONT_SIZE, Rgb(GRAY), spec.caption);

    match spec.variant() {
        VariantKind::Trading => draw_trading(&mut canvas, &layout, typeface, rng),
        VariantKind::P2p => draw_p2p(&mut canvas, &layout, typeface),
        VariantKind::Plain => {}
    }

    let [footer, note] = layout.footer_origins;
    typeface.draw(&mut canvas, footer, TEXT_FONT_SIZE, Rgb(WHITE), &spec.footer());
    typeface.draw(&mut canvas, note, TEXT_FONT_SIZE, Rgb(WHITE), FOOTER_NOTE);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use competitor_lens_common::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render(exchange: &'static str, feature: &'static str) -> RgbImage {
        let spec = ScreenshotSpec::new(exchange, feature, "Caption");
        let mut rng = StdRng::seed_from_u64(7);
        render_screenshot(&spec, &Typeface::Builtin, &mut rng)
    }

    #[test]
    fn test_canvas_size() {
        for feature in ["spot", "p2p", "earn"] {
            let img = render("binance", feature);
            assert_eq!(img.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        }
    }

    #[test]
    fn test_background_and_header() {
        let img = render("kraken", "spot");
        assert_eq!(*img.get_pixel(10, 600), Rgb([0x57, 0x41, 0xD9]));
        assert_eq!(*img.get_pixel(1190, 5), Rgb(WHITE));
        // logo block keeps the brand color
        assert_eq!(*img.get_pixel(70, 40), Rgb([0x57, 0x41, 0xD9]));
    }

    #[test]
    fn test_unknown_exchange_default_background() {
        let img = render("bitstamp", "spot");
        assert_eq!(*img.get_pixel(10, 600), Rgb([0xCC, 0xCC, 0xCC]));
    }

    #[test]
    fn test_trading_panels_bordered() {
        let img = render("okx", "futures");
        let border = Rgb(PANEL_BORDER);
        // order book, chart and open orders left edges
        assert_eq!(*img.get_pixel(20, 300), border);
        assert_eq!(*img.get_pixel(321, 300), border);
        assert_eq!(*img.get_pixel(900, 300), border);
        // panel interior is not filled
        assert_eq!(*img.get_pixel(1000, 450), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_chart_line_drawn() {
        let img = render("okx", "spot");
        let green = Rgb(CHART_LINE);
        let found = (330..=860).any(|x| (200..=451).any(|y| *img.get_pixel(x, y) == green));
        assert!(found);
    }

    #[test]
    fn test_p2p_has_no_chart() {
        let img = render("binance", "p2p");
        let green = Rgb(CHART_LINE);
        assert!(!img.pixels().any(|p| *p == green));
        assert_eq!(*img.get_pixel(1180, 200), Rgb(PANEL_BORDER));
    }

    #[test]
    fn test_plain_variant_has_no_panels() {
        let img = render("binance", "earn");
        assert!(!img.pixels().any(|p| *p == Rgb(PANEL_BORDER)));
    }

    #[test]
    fn test_chart_points_in_range() {
        let layout = CanvasLayout::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let points = chart_points(&layout, &mut rng);
        assert_eq!(points.len(), 54);
        assert!(points.iter().all(|(_, y)| layout.chart_y_range().contains(y)));
    }

    #[test]
    fn test_chart_points_seeded_repeatable() {
        let layout = CanvasLayout::standard();
        let a = chart_points(&layout, &mut StdRng::seed_from_u64(1));
        let b = chart_points(&layout, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_p2p_listing() {
        assert_eq!(p2p_listing(0), "Seller 1 - Rate: 4.9 - Price: $45000");
        assert_eq!(p2p_listing(4), "Seller 5 - Rate: 4.5 - Price: $45400");
    }
}
