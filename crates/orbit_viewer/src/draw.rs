use bevy::prelude::*;

use crate::arrows::Arrows;
use crate::planet::{Planet, Star};
use crate::{plane_to_world, OrbitReport, State};

const ORBIT_COLOR: Color = Color::ALICE_BLUE;
const SPOKE_COLOR: Color = Color::GREEN;
const RADIUS_COLOR: Color = Color::YELLOW;

pub fn orbit(mut lines: Gizmos, report: Res<OrbitReport>, state: Res<State>) {
    if !state.draw_orbit {
        return;
    }

    let Some(report) = &report.0 else {
        return;
    };

    let points = report.orbit_series();

    lines.linestrip(
        points
            .iter()
            .chain(points.first())
            .map(|&p| plane_to_world(p, state.distance_scaling)),
        ORBIT_COLOR,
    );
}

pub fn spokes(mut lines: Gizmos, report: Res<OrbitReport>, state: Res<State>) {
    if !state.draw_spokes {
        return;
    }

    let Some(report) = &report.0 else {
        return;
    };

    for [star, planet] in report.spoke_series(state.spoke_step) {
        lines.line(
            plane_to_world(star, state.distance_scaling),
            plane_to_world(planet, state.distance_scaling),
            SPOKE_COLOR,
        );
    }
}

pub fn radius(
    mut lines: Gizmos,
    state: Res<State>,
    star: Query<&Transform, With<Star>>,
    planets: Query<&Transform, With<Planet>>,
    camera: Query<&GlobalTransform, With<Camera>>,
) {
    if !state.show_radius {
        return;
    }

    let (Ok(star), Ok(camera)) = (star.get_single(), camera.get_single()) else {
        return;
    };

    let mut arrows = Arrows::new(&mut lines, camera.translation());

    for planet in planets.iter() {
        arrows.draw(star.translation, planet.translation, RADIUS_COLOR);
    }
}

pub fn axis(mut lines: Gizmos, state: Res<State>) {
    if !state.draw_axis {
        return;
    }

    const ORIGIN: Vec3 = Vec3::ZERO;

    lines.line(ORIGIN, ORIGIN + state.axis_scale * Vec3::X, Color::RED);
    lines.line(ORIGIN, ORIGIN + state.axis_scale * Vec3::Y, Color::GREEN);
    lines.line(ORIGIN, ORIGIN + state.axis_scale * Vec3::Z, Color::BLUE);
}
