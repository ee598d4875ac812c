use bevy::core_pipeline::bloom::BloomSettings;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use kepler_trajectory::{Locale, Num, SimulationConfig, SimulationReport};
use smooth_bevy_cameras::controllers::orbit::{
    OrbitCameraBundle, OrbitCameraController, OrbitCameraPlugin,
};
use smooth_bevy_cameras::LookTransformPlugin;

mod arrows;
mod charts;
mod draw;
mod planet;
mod ui;
mod update;

use planet::{Planet, Star};

const LOCALE_VAR: &str = "ORBIT_VIEWER_LOCALE";
const FONT_VAR: &str = "ORBIT_VIEWER_FONT";

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit viewer".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(LookTransformPlugin)
        .add_plugins(OrbitCameraPlugin::new(false))
        .add_plugins(EguiPlugin)
        .add_event::<update::Recalculate>()
        .init_resource::<Epoch>()
        .init_resource::<OrbitReport>()
        .init_resource::<ui::UiState>()
        .init_resource::<charts::ChartsState>()
        .add_systems(Startup, (setup, ui::setup_fonts))
        .add_systems(Update, ui::render)
        .add_systems(Update, charts::render)
        .add_systems(Update, update::recalculate)
        .add_systems(Update, update::epoch)
        .add_systems(Update, update::planet.after(update::epoch))
        .add_systems(Update, draw::orbit)
        .add_systems(Update, draw::spokes)
        .add_systems(Update, draw::radius)
        .add_systems(Update, draw::axis)
        .run();
}

#[derive(Resource)]
pub struct State {
    pub config: SimulationConfig,

    pub update_epoch: bool,
    /// Simulated seconds per real second
    pub epoch_scale: f32,

    pub draw_orbit: bool,
    pub draw_spokes: bool,
    pub spoke_step: usize,
    pub show_radius: bool,

    pub draw_axis: bool,
    pub axis_scale: f32,

    /// Render units per AU
    pub distance_scaling: f32,
}

/// Seconds since periapsis passage
#[derive(Resource, Default)]
pub struct Epoch(pub Num);

/// Result of the latest successful recalculation
#[derive(Resource, Default)]
pub struct OrbitReport(pub Option<SimulationReport>);

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut recalculate: EventWriter<update::Recalculate>,
) {
    commands.insert_resource(ClearColor(Color::BLACK));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.01,
    });

    commands.insert_resource(State {
        config: SimulationConfig::default().with_locale(locale_from_env()),
        update_epoch: true,
        epoch_scale: 86_400.0 * 10.0,
        draw_orbit: true,
        draw_spokes: true,
        spoke_step: 100,
        show_radius: true,
        draw_axis: false,
        axis_scale: 2.0,
        distance_scaling: 5.0,
    });

    let sphere = meshes.add(Mesh::from(shape::UVSphere {
        radius: 1.0,
        sectors: 32,
        stacks: 16,
    }));

    let star_material = materials.add(StandardMaterial {
        emissive: Color::YELLOW * 100.0,
        ..Default::default()
    });

    let planet_material = materials.add(StandardMaterial {
        base_color: Color::BLUE,
        emissive: Color::BLUE,
        perceptual_roughness: 1.0,
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 100000.0,
            range: 100000.0,
            shadows_enabled: true,
            ..default()
        },
        ..default()
    });

    commands
        .spawn(PbrBundle {
            mesh: sphere.clone(),
            material: star_material,
            transform: Transform::from_scale(Vec3::ONE * 0.3),
            ..Default::default()
        })
        .insert(NotShadowCaster)
        .insert(Star)
        .insert(Name::new("Star"));

    commands
        .spawn(PbrBundle {
            mesh: sphere,
            material: planet_material,
            transform: Transform::from_scale(Vec3::ONE * 0.1),
            ..Default::default()
        })
        .insert(Planet::default())
        .insert(Name::new("Planet"));

    commands
        .spawn(Camera3dBundle::default())
        .insert(BloomSettings::OLD_SCHOOL)
        .insert(OrbitCameraBundle::new(
            {
                let mut controller = OrbitCameraController::default();

                controller.mouse_rotate_sensitivity = Vec2::ONE * 1.0;
                controller.mouse_translate_sensitivity = Vec2::ONE * 10.0;

                controller
            },
            Vec3::new(-2.0, 8.0, 8.0),
            Vec3::ZERO,
            Vec3::Y,
        ));

    recalculate.send(update::Recalculate);
}

fn locale_from_env() -> Locale {
    match std::env::var(LOCALE_VAR) {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            warn!(%err, "Falling back to English labels");
            Locale::default()
        }),
        Err(_) => Locale::default(),
    }
}

/// Maps the orbital plane onto bevy's horizontal plane
pub fn plane_to_world(p: [Num; 2], scale: f32) -> Vec3 {
    Vec3::new(p[0] as f32, 0.0, -(p[1] as f32)) * scale
}
