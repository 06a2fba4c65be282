use std::time::Duration;

/// How often the featured carousel moves on by itself.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Index over a fixed number of slides. Moving past either end wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            direction: Direction::Forward,
        }
    }

    /// Starts at `index`, falling back to the first slide when out of range.
    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.select(index);
        carousel.direction = Direction::Forward;
        carousel
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Also the timer tick.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn select(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.direction = if index >= self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
    }

    pub fn next_index(&self) -> usize {
        let mut peek = *self;
        peek.next();
        peek.index
    }

    pub fn prev_index(&self) -> usize {
        let mut peek = *self;
        peek.prev();
        peek.index
    }
}
