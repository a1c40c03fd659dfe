/// Position in a filtered card list, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
    len: usize,
}

impl CardCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Start on the card whose id matches, or on the first card
    pub fn starting_at<'a, I>(ids: I, id: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = None;
        let mut len = 0;
        for (i, candidate) in ids.into_iter().enumerate() {
            if index.is_none() && candidate == id {
                index = Some(i);
            }
            len += 1;
        }
        Self {
            index: index.unwrap_or(0),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move by `delta` cards, wrapping around
    pub fn step(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index).or_else(|| items.first())
    }
}
