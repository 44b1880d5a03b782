use crate::point::BorderPoint;

/// Fixed-capacity ring of the most recent border points.
///
/// Accessors are relative to the current window: `oldest` is the point that
/// will be overwritten by the next push, `newest` the last one pushed.
#[derive(Debug, Clone)]
pub struct Backlog {
    slots: Vec<BorderPoint>,
    capacity: usize,
    // Slot holding the newest point.
    head: usize,
}

impl Backlog {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, first: BorderPoint) -> Self {
        assert!(capacity > 0, "backlog capacity must be nonzero");
        let mut slots = Vec::with_capacity(capacity);
        slots.push(first);
        Self {
            slots,
            capacity,
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    pub fn push(&mut self, p: BorderPoint) {
        if self.slots.len() < self.capacity {
            self.slots.push(p);
            self.head = self.slots.len() - 1;
        } else {
            self.head = (self.head + 1) % self.capacity;
            self.slots[self.head] = p;
        }
    }

    /// Point `offset` places after the oldest one, wrapping.
    pub fn from_oldest(&self, offset: usize) -> BorderPoint {
        let len = self.slots.len();
        let oldest = (self.head + 1) % len;
        self.slots[(oldest + offset) % len]
    }

    pub fn oldest(&self) -> BorderPoint {
        self.from_oldest(0)
    }

    pub fn second_oldest(&self) -> BorderPoint {
        self.from_oldest(1)
    }

    pub fn second_newest(&self) -> BorderPoint {
        self.from_oldest(self.slots.len().saturating_sub(2))
    }

    pub fn newest(&self) -> BorderPoint {
        self.slots[self.head]
    }

    /// The point `capacity / 2` slots after the newest one, i.e. lagging the
    /// newest by `capacity / 2` steps once the ring is full.
    pub fn center(&self) -> BorderPoint {
        self.slots[(self.head + self.capacity / 2) % self.slots.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = BorderPoint> + '_ {
        (0..self.slots.len()).map(|i| self.from_oldest(i))
    }
}
