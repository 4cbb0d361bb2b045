use rand::Rng;

use crate::core::Light;
use crate::error::TrainError;

/// The only view of a train a discovery strategy is given
///
/// Positions are unbounded integers that wrap around the train. The length
/// is not exposed.
pub trait CarAccess {
    /// Current light of the car at `position`
    fn light(&self, position: i64) -> Light;

    /// Toggle the light of the car at `position`
    fn flip(&mut self, position: i64);
}

/// A circular train of cars, each with a light that is on or off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    cars: Vec<Light>,
}

impl Train {
    /// Build a train of `length` cars with lights drawn uniformly from `rng`
    pub fn new<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, TrainError> {
        if length == 0 {
            return Err(TrainError::EmptyTrain);
        }

        let cars = (0..length).map(|_| Light::from(rng.random::<bool>())).collect();
        Ok(Self { cars })
    }

    /// Build a train with a fixed pattern of lights
    pub fn from_lights(lights: Vec<Light>) -> Result<Self, TrainError> {
        if lights.is_empty() {
            return Err(TrainError::EmptyTrain);
        }
        Ok(Self { cars: lights })
    }

    /// Map any position onto a car index in `0..len`
    pub fn circular_index(&self, position: i64) -> usize {
        // len fits in i64 for any train that fits in memory
        position.rem_euclid(self.cars.len() as i64) as usize
    }

    pub fn get(&self, position: i64) -> Light {
        self.cars[self.circular_index(position)]
    }

    pub fn flip(&mut self, position: i64) {
        let index = self.circular_index(position);
        self.cars[index] = self.cars[index].flipped();
    }

    /// True number of cars. For the harness only, never for strategies.
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Always false; a train has at least one car
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn lights(&self) -> &[Light] {
        &self.cars
    }
}

impl CarAccess for Train {
    fn light(&self, position: i64) -> Light {
        self.get(position)
    }

    fn flip(&mut self, position: i64) {
        Train::flip(self, position);
    }
}

impl std::fmt::Display for Train {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, light) in self.cars.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            write!(f, "Position: {position}, Light: {light}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::core::Light::{Off, On};

    fn sample_train() -> Train {
        Train::from_lights(vec![On, Off, Off, On, Off]).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            Train::new(0, &mut rng),
            Err(TrainError::EmptyTrain)
        ));
        assert!(matches!(
            Train::from_lights(vec![]),
            Err(TrainError::EmptyTrain)
        ));
    }

    #[test]
    fn test_new_has_requested_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let train = Train::new(37, &mut rng).unwrap();
        assert_eq!(train.len(), 37);
        assert!(!train.is_empty());
    }

    #[test]
    fn test_same_seed_same_lights() {
        let a = Train::new(64, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        let b = Train::new(64, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_lights_are_roughly_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let train = Train::new(10_000, &mut rng).unwrap();
        let on = train.lights().iter().filter(|l| **l == On).count();
        assert!((4_500..=5_500).contains(&on), "{on} lights on out of 10000");
    }

    #[test]
    fn test_circular_index_wraps_both_directions() {
        let train = sample_train();
        assert_eq!(train.circular_index(0), 0);
        assert_eq!(train.circular_index(4), 4);
        assert_eq!(train.circular_index(5), 0);
        assert_eq!(train.circular_index(13), 3);
        assert_eq!(train.circular_index(-1), 4);
        assert_eq!(train.circular_index(-5), 0);
        assert_eq!(train.circular_index(-6), 4);
        assert_eq!(train.circular_index(i64::MAX), (i64::MAX % 5) as usize);
        assert_eq!(train.circular_index(i64::MIN), i64::MIN.rem_euclid(5) as usize);
    }

    #[test]
    fn test_get_is_idempotent() {
        let train = sample_train();
        for position in -12..12 {
            assert_eq!(train.get(position), train.get(position));
        }
    }

    #[test]
    fn test_flip_toggles_light() {
        let mut train = sample_train();
        let before = train.get(3);
        train.flip(3);
        assert_eq!(train.get(3), before.flipped());
        train.flip(3);
        assert_eq!(train.get(3), before);
    }

    #[test]
    fn test_flip_at_congruent_positions_hits_same_car() {
        let mut train = sample_train();
        let before = train.get(2);

        train.flip(7);
        assert_eq!(train.get(2), before.flipped());
        assert_eq!(train.get(-3), before.flipped());

        train.flip(-8);
        assert_eq!(train.get(2), before);
        assert_eq!(train.get(102), before);
    }

    #[test]
    fn test_flip_leaves_other_cars_alone() {
        let mut train = sample_train();
        train.flip(1);
        assert_eq!(train.lights(), &[On, On, Off, On, Off]);
    }

    #[test]
    fn test_single_car_train_wraps_everywhere() {
        let mut train = Train::from_lights(vec![Off]).unwrap();
        train.flip(41);
        assert_eq!(train.get(0), On);
        assert_eq!(train.get(-17), On);
    }

    #[test]
    fn test_car_access_matches_inherent_methods() {
        let mut train = sample_train();
        let access: &mut dyn CarAccess = &mut train;
        assert_eq!(access.light(8), On);
        access.flip(8);
        assert_eq!(train.get(3), Off);
    }

    #[test]
    fn test_display_lists_positions() {
        let train = Train::from_lights(vec![On, Off]).unwrap();
        assert_eq!(
            train.to_string(),
            "Position: 0, Light: on\nPosition: 1, Light: off"
        );
    }
}
