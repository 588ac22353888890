pub mod banner;
pub mod carousel;
pub mod game;
pub mod scroll_viewport;
