//! `VehicleSet` — the live vehicle population.

use rr_core::road::even_spacing;
use rr_core::{SimRng, VehicleId};

use crate::{Vehicle, VehicleError, VehicleResult};

/// All vehicles of one run in ascending id order (`vehicles[i].id ==
/// VehicleId(i)`).
///
/// The population is fixed: vehicles are created once and never removed.
/// Only [`move_all`][crate::move_all] mutates it, and only `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSet {
    pub(crate) vehicles: Vec<Vehicle>,
    road_length:         u32,
}

impl VehicleSet {
    /// Validate and wrap hand-built vehicles.
    pub fn new(vehicles: Vec<Vehicle>, road_length: u32) -> VehicleResult<Self> {
        for (index, v) in vehicles.iter().enumerate() {
            if v.id.index() != index {
                return Err(VehicleError::IdMismatch { index, got: v.id });
            }
            if v.position >= road_length {
                return Err(VehicleError::OutOfRoad {
                    vehicle: v.id,
                    position: v.position,
                    road_length,
                });
            }
            if v.step == 0 {
                return Err(VehicleError::ZeroStep(v.id));
            }
        }
        Ok(Self { vehicles, road_length })
    }

    /// Default population: `count` vehicles spread evenly around the road,
    /// each nudged forward by a random jitter smaller than the spacing, with
    /// a step size of 1 or 2.
    ///
    /// Draws from `rng` in id order (jitter, then step, per vehicle), so the
    /// same seed always yields the same population.
    pub fn generate(count: usize, road_length: u32, rng: &mut SimRng) -> VehicleResult<Self> {
        if road_length == 0 && count > 0 {
            return Err(VehicleError::EmptyRoad(count));
        }

        let spacing = even_spacing(count, road_length);
        let road = road_length as u64;

        let vehicles = (0..count)
            .map(|i| {
                let id = VehicleId::try_from(i).map_err(|_| VehicleError::TooMany(count))?;
                let jitter = if spacing > 1 { rng.gen_range(0..spacing) } else { 0 };
                let position = ((i as u64 * spacing + jitter) % road) as u32;
                let step = rng.gen_range(1..=2u32);
                Ok(Vehicle::new(id, position, step))
            })
            .collect::<VehicleResult<Vec<_>>>()?;

        Self::new(vehicles, road_length)
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    #[inline]
    pub fn road_length(&self) -> u32 {
        self.road_length
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
