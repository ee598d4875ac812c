use bevy::prelude::*;
use kepler_trajectory::{AnomalySolver, Num, Simulation};

use crate::planet::Planet;
use crate::{plane_to_world, Epoch, OrbitReport, State};

/// Reruns the simulation with the current settings
#[derive(Event, Debug, Clone, Copy)]
pub struct Recalculate;

pub fn recalculate(
    mut events: EventReader<Recalculate>,
    state: Res<State>,
    mut report: ResMut<OrbitReport>,
    mut epoch: ResMut<Epoch>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    match Simulation::run(&state.config) {
        Ok(new_report) => {
            if let Some(lines) = new_report.fit_summary() {
                for line in lines {
                    println!("{line}");
                }
            }

            report.0 = Some(new_report);
            epoch.0 = 0.0;
        }
        Err(err) => {
            error!(%err, "Recalculation failed, keeping the previous orbit");
        }
    }
}

pub fn epoch(
    time: Res<Time>,
    mut epoch: ResMut<Epoch>,
    state: Res<State>,
    report: Res<OrbitReport>,
) {
    if !state.update_epoch {
        return;
    }

    epoch.0 += (state.epoch_scale * time.delta_seconds()) as Num;

    if let Some(report) = &report.0 {
        epoch.0 %= report.orbit().period();
    }
}

pub fn planet(
    mut planets: Query<(&mut Planet, &mut Transform)>,
    state: Res<State>,
    epoch: Res<Epoch>,
    report: Res<OrbitReport>,
) {
    let Some(report) = &report.0 else {
        return;
    };

    let orbit = report.orbit();
    let solver = AnomalySolver::new(orbit, report.trajectory.strategy());
    let to_au = kepler_trajectory::LengthUnit::AstronomicalUnit.from_meters(1.0);

    for (mut planet, mut transform) in planets.iter_mut() {
        if let Err(err) = planet.advance(orbit, &solver, epoch.0) {
            warn!(%err, "Planet position not updated");
            continue;
        }

        let position = planet.sample.scaled(to_au).to_array();
        transform.translation = plane_to_world(position, state.distance_scaling);
    }
}
