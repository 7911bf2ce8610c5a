/// Linear probe sequence over a table of `capacity` slots.
///
/// Yields `(start + i) % capacity` for `i in 0..capacity`, so every slot is
/// visited exactly once and the sequence wraps around the end of the array.
#[derive(Debug, Clone)]
pub struct ProbeSeq {
    index: usize,
    remaining: usize,
    capacity: usize,
}

impl ProbeSeq {
    pub fn new(hash: u32, capacity: usize) -> Self {
        let index = if capacity == 0 {
            0
        } else {
            hash as usize % capacity
        };
        Self {
            index,
            remaining: capacity,
            capacity,
        }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.index;
        self.remaining -= 1;
        self.index += 1;
        if self.index == self.capacity {
            self.index = 0;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSeq {}
