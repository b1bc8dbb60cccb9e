//! Canvas layout
//!
//! Pixel geometry of the placeholder screenshots. Rectangles use inclusive
//! corner coordinates, so `[0, 0, 1200, 80]` covers 1201×81 pixels before
//! clipping to the canvas.

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 800;

pub const HEADER_HEIGHT: i32 = 80;
pub const CONTENT_Y: i32 = 100;

/// Trading panels height
pub const TRADING_PANEL_HEIGHT: i32 = 400;
/// P2P panel height
pub const P2P_PANEL_HEIGHT: i32 = 200;

/// Chart point spacing (px)
pub const CHART_STEP: i32 = 10;
/// Horizontal chart span (px)
pub const CHART_SPAN: i32 = 540;
/// Random offset range added below `CONTENT_Y + 50`
pub const CHART_JITTER_MIN: i32 = 50;
pub const CHART_JITTER_MAX: i32 = 300;

pub const P2P_ROWS: u32 = 5;
pub const P2P_ROW_HEIGHT: i32 = 30;

pub const PANEL_BORDER_WIDTH: i32 = 2;

/// Font sizes (px)
pub const HEADER_FONT_SIZE: f32 = 18.0;
pub const TEXT_FONT_SIZE: f32 = 14.0;

/// Rectangle with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PanelRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1).max(0) as u32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Title anchor inside the panel
    pub fn title_origin(&self) -> (i32, i32) {
        (self.left + 10, self.top + 10)
    }
}

/// Layout of one rendered screenshot
#[derive(Debug, Clone)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    pub header: PanelRect,
    pub logo: PanelRect,
    /// Exchange name anchor
    pub name_origin: (i32, i32),
    /// Caption anchor
    pub caption_origin: (i32, i32),
    pub order_book: PanelRect,
    pub chart: PanelRect,
    pub open_orders: PanelRect,
    pub p2p: PanelRect,
    /// Two footer lines
    pub footer_origins: [(i32, i32); 2],
}

impl CanvasLayout {
    pub fn standard() -> Self {
        let w = CANVAS_WIDTH as i32;
        let h = CANVAS_HEIGHT as i32;
        let trading_bottom = CONTENT_Y + TRADING_PANEL_HEIGHT;

        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            header: PanelRect::new(0, 0, w, HEADER_HEIGHT),
            logo: PanelRect::new(20, 20, 120, 60),
            name_origin: (140, 25),
            caption_origin: (140, 45),
            order_book: PanelRect::new(20, CONTENT_Y, 300, trading_bottom),
            chart: PanelRect::new(320, CONTENT_Y, 880, trading_bottom),
            open_orders: PanelRect::new(900, CONTENT_Y, 1180, trading_bottom),
            p2p: PanelRect::new(20, CONTENT_Y, 1180, CONTENT_Y + P2P_PANEL_HEIGHT),
            footer_origins: [(20, h - 40), (20, h - 20)],
        }
    }

    /// X positions of the chart points
    pub fn chart_xs(&self) -> impl Iterator<Item = i32> + '_ {
        (0..CHART_SPAN)
            .step_by(CHART_STEP as usize)
            .map(move |i| self.chart.left + 10 + i)
    }

    /// Allowed y range of a chart point
    pub fn chart_y_range(&self) -> std::ops::RangeInclusive<i32> {
        let base = CONTENT_Y + 50;
        (base + CHART_JITTER_MIN)..=(base + CHART_JITTER_MAX)
    }

    /// Anchor of the i-th P2P listing row
    pub fn p2p_row_origin(&self, index: u32) -> (i32, i32) {
        (self.p2p.left + 10, CONTENT_Y + 50 + index as i32 * P2P_ROW_HEIGHT)
    }
}
