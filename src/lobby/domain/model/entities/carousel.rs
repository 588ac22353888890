use crate::lobby::domain::model::enums::lobby_domain_error::LobbyDomainError;

/// Owned state of the looping promotional carousel. The autoplay timer and
/// pointer events stay with the caller; this struct only tracks the selected
/// slide and whether autoplay is paused.
#[derive(Clone, Debug)]
pub struct Carousel {
    slide_count: usize,
    selected_index: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(slide_count: usize) -> Result<Self, LobbyDomainError> {
        if slide_count == 0 {
            return Err(LobbyDomainError::EmptyCarousel);
        }
        Ok(Self {
            slide_count,
            selected_index: 0,
            paused: false,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn scroll_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.slide_count;
    }

    pub fn scroll_prev(&mut self) {
        self.selected_index = (self.selected_index + self.slide_count - 1) % self.slide_count;
    }

    /// Pagination dots jump directly to a slide.
    pub fn scroll_to(&mut self, index: usize) -> Result<(), LobbyDomainError> {
        if index >= self.slide_count {
            return Err(LobbyDomainError::SlideOutOfBounds(index));
        }
        self.selected_index = index;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Autoplay callback. A paused carousel ignores the tick; returns whether
    /// the slide advanced.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.scroll_next();
        true
    }
}
