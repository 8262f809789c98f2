//! Final per-vehicle assignment sequences and their output format.

use std::io::{self, Write};

use bevy_ecs::prelude::World;

use crate::ecs::{Fleet, ServedRides};
use crate::ride::RideId;

/// The ordered ride ids one vehicle served over the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehiclePlan {
    pub rides: Vec<RideId>,
}

/// Reads the final plan out of the world, in fleet order.
pub fn extract_plan(world: &World) -> Vec<VehiclePlan> {
    let Some(fleet) = world.get_resource::<Fleet>() else {
        return Vec::new();
    };
    fleet
        .0
        .iter()
        .map(|&entity| {
            let rides = world
                .get::<ServedRides>(entity)
                .map(|served| served.ids().to_vec())
                .unwrap_or_default();
            VehiclePlan { rides }
        })
        .collect()
}

/// Writes one line per vehicle: the served-ride count followed by the ride
/// ids in assignment order.
pub fn write_plan<W: Write>(writer: &mut W, plans: &[VehiclePlan]) -> io::Result<()> {
    for plan in plans {
        write!(writer, "{}", plan.rides.len())?;
        for id in &plan.rides {
            write!(writer, " {id}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    use crate::ecs::{Position, Vehicle};
    use crate::spatial::GridPoint;

    #[test]
    fn extraction_follows_fleet_order() {
        let mut world = World::new();
        let mut fleet = Fleet::default();
        for ids in [vec![2, 0], vec![], vec![1]] {
            let mut served = ServedRides::default();
            for id in ids {
                served.push(id);
            }
            let entity = world
                .spawn((Vehicle::default(), Position(GridPoint::ORIGIN), served))
                .id();
            fleet.0.push(entity);
        }
        world.insert_resource(fleet);

        let plans = extract_plan(&world);
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].rides, vec![2, 0]);
        assert_eq!(plans[1].rides, Vec::<RideId>::new());
        assert_eq!(plans[2].rides, vec![1]);
    }

    #[test]
    fn world_without_a_fleet_yields_no_plans() {
        let world = World::new();
        assert!(extract_plan(&world).is_empty());
    }

    #[test]
    fn writes_count_then_ids_per_line() {
        let plans = vec![
            VehiclePlan { rides: vec![0, 2] },
            VehiclePlan { rides: vec![] },
            VehiclePlan { rides: vec![1] },
        ];
        let mut buffer = Vec::new();
        write_plan(&mut buffer, &plans).expect("write to memory");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "2 0 2\n0\n1 1\n");
    }
}
