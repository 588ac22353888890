#[derive(Clone, Debug)]
pub struct AppConfig {
    pub carousel_autoplay_ms: u64,
    pub scroll_step_px: f64,
    pub scroll_edge_threshold_px: f64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            carousel_autoplay_ms: std::env::var("CAROUSEL_AUTOPLAY_MS")
                .unwrap_or_else(|_| "15000".to_string())
                .parse()
                .unwrap_or(15000),
            scroll_step_px: std::env::var("SCROLL_STEP_PX")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300.0),
            scroll_edge_threshold_px: std::env::var("SCROLL_EDGE_THRESHOLD_PX")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10.0),
        }
    }
}
