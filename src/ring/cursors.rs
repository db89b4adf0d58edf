/// Read and write positions into a ring of `num_slots` slots.
///
/// One slot is always left free, so `front == back` only ever means empty and
/// the usable capacity is `num_slots - 1`. Occupancy is derived from the two
/// cursors; no count is stored alongside them.
#[derive(Clone, Debug, Default)]
pub(crate) struct RingCursors {
    front: usize,
    back: usize,
}

impl RingCursors {
    #[cfg(test)]
    pub const fn new(front: usize, back: usize) -> Self {
        Self { front, back }
    }

    #[inline(always)]
    pub const fn front(&self) -> usize {
        self.front
    }

    #[inline(always)]
    pub const fn back(&self) -> usize {
        self.back
    }

    #[inline(always)]
    pub const fn len(&self, num_slots: usize) -> usize {
        if self.front <= self.back {
            self.back - self.front
        } else {
            // wrapping case
            num_slots - self.front + self.back
        }
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.front == self.back
    }

    #[inline(always)]
    pub const fn is_full(&self, num_slots: usize) -> bool {
        self.len(num_slots) == num_slots - 1
    }

    #[inline(always)]
    const fn wrap(val: usize, num_slots: usize) -> usize {
        (val + 1) % num_slots
    }

    #[inline(always)]
    pub fn front_forward(&mut self, num_slots: usize) {
        self.front = Self::wrap(self.front, num_slots);
    }

    #[inline(always)]
    pub fn back_forward(&mut self, num_slots: usize) {
        self.back = Self::wrap(self.back, num_slots);
    }

    /// Slot indices of the occupied region, oldest first.
    pub fn occupied(&self, num_slots: usize) -> impl Iterator<Item = usize> {
        let front = self.front;
        (0..self.len(num_slots)).map(move |offset| (front + offset) % num_slots)
    }
}

#[cfg(test)]
mod tests {
    use super::RingCursors;

    #[test]
    fn empty_at_start() {
        let cursors = RingCursors::default();

        assert!(cursors.is_empty());
        assert!(!cursors.is_full(4));
        assert_eq!(cursors.len(4), 0);
    }

    #[test]
    fn single_slot_ring_is_always_full() {
        let cursors = RingCursors::default();

        assert!(cursors.is_empty());
        assert!(cursors.is_full(1));
        assert_eq!(cursors.len(1), 0);
    }

    #[test]
    fn len_standard_case() {
        // [x, x, n, n]
        let cursors = RingCursors::new(0, 2);
        assert_eq!(cursors.len(4), 2);
        assert!(!cursors.is_full(4));

        // [x, x, x, n]
        let cursors = RingCursors::new(0, 3);
        assert_eq!(cursors.len(4), 3);
        assert!(cursors.is_full(4));
    }

    #[test]
    fn len_wrapping_case() {
        // [x, n, n, x]
        let cursors = RingCursors::new(3, 1);
        assert_eq!(cursors.len(4), 2);

        // [x, x, n, x]
        let cursors = RingCursors::new(3, 2);
        assert_eq!(cursors.len(4), 3);
        assert!(cursors.is_full(4));
    }

    #[test]
    fn forward_wraps_to_zero() {
        let mut cursors = RingCursors::new(3, 3);

        cursors.back_forward(4);
        assert_eq!(cursors.back(), 0);
        assert_eq!(cursors.len(4), 1);

        cursors.front_forward(4);
        assert_eq!(cursors.front(), 0);
        assert!(cursors.is_empty());
    }

    #[test]
    fn occupied_follows_ring_order() {
        // [x, x, n, x]
        let cursors = RingCursors::new(3, 2);
        assert_eq!(cursors.occupied(4).collect::<Vec<_>>(), vec![3, 0, 1]);

        let cursors = RingCursors::new(1, 1);
        assert_eq!(cursors.occupied(4).count(), 0);
    }
}
