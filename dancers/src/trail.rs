use glam::Vec3;

/// A fixed length history of positions, newest first.
///
/// Pushing a sample moves every older sample one slot towards the tail and drops the oldest one.
/// Internally this is a ring buffer with a rotating head, so a push costs the same no matter how
/// long the trail is.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    samples: Vec<Vec3>,
    head: usize,
}

impl Trail {
    /// A trail of `capacity` samples, all at the origin.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "A trail needs room for at least one sample");
        Self {
            samples: vec![Vec3::ZERO; capacity],
            head: 0,
        }
    }

    /// Number of samples. Never changes after creation.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a trail holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Insert a new head sample, discarding the oldest
    pub fn push(&mut self, sample: Vec3) {
        let len = self.samples.len();
        self.head = (self.head + len - 1) % len;
        self.samples[self.head] = sample;
    }

    /// The newest sample
    pub fn head(&self) -> Vec3 {
        self.samples[self.head]
    }

    /// The sample `age` pushes old, if the trail is that long
    pub fn get(&self, age: usize) -> Option<Vec3> {
        (age < self.samples.len()).then(|| self.samples[(self.head + age) % self.samples.len()])
    }

    /// Every sample, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Vec3> + '_ {
        let (older, newer) = self.samples.split_at(self.head);
        newer.iter().chain(older.iter())
    }

    /// Copy of every sample, newest first. Handy for uploading to a vertex buffer.
    pub fn to_vec(&self) -> Vec<Vec3> {
        self.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_new_trail_is_at_origin() {
        let trail = Trail::new(3);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.to_vec(), vec![Vec3::ZERO; 3]);
    }

    #[test]
    pub fn test_push_shifts_towards_tail() {
        let mut trail = Trail::new(3);
        trail.push(Vec3::X);
        assert_eq!(trail.to_vec(), vec![Vec3::X, Vec3::ZERO, Vec3::ZERO]);

        trail.push(Vec3::Y);
        trail.push(Vec3::Z);
        assert_eq!(trail.to_vec(), vec![Vec3::Z, Vec3::Y, Vec3::X]);

        // The oldest sample falls off the end
        trail.push(Vec3::ONE);
        assert_eq!(trail.to_vec(), vec![Vec3::ONE, Vec3::Z, Vec3::Y]);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.head(), Vec3::ONE);
        assert_eq!(trail.get(2), Some(Vec3::Y));
        assert_eq!(trail.get(3), None);
    }

    #[test]
    pub fn test_matches_literal_shift() {
        let mut trail = Trail::new(5);
        let mut shifted = vec![Vec3::ZERO; 5];

        for i in 0..23 {
            let sample = Vec3::new(i as f32, (i * i) as f32, -(i as f32));
            for slot in (1..shifted.len()).rev() {
                shifted[slot] = shifted[slot - 1];
            }
            shifted[0] = sample;
            trail.push(sample);

            assert_eq!(trail.to_vec(), shifted);
        }
    }

    #[test]
    pub fn test_single_sample_trail() {
        let mut trail = Trail::new(1);
        trail.push(Vec3::X);
        trail.push(Vec3::Y);
        assert_eq!(trail.to_vec(), vec![Vec3::Y]);
    }

    #[test]
    #[should_panic]
    pub fn test_empty_trail_panics() {
        Trail::new(0);
    }
}
