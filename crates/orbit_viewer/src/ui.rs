use bevy::prelude::*;
use bevy_egui::egui::{ComboBox, DragValue, FontData, FontDefinitions, FontFamily, Ui};
use bevy_egui::{egui, EguiContexts};
use kepler_trajectory::{FitOptions, LengthUnit, Locale, Num, SolveStrategy, TimeUnit};
use smooth_bevy_cameras::controllers::orbit::OrbitCameraController;

use crate::charts::ChartsState;
use crate::update::Recalculate;
use crate::{Epoch, OrbitReport, State, FONT_VAR};

const MAX_SAMPLES: usize = 100_000;
const DISTANCE_UNIT: LengthUnit = LengthUnit::AstronomicalUnit;
const TIME_UNIT: TimeUnit = TimeUnit::Day;

#[derive(Resource, Debug, Clone, Default)]
pub struct UiState {
    settings_visible: bool,
    about_visible: bool,
}

/// Loads the font named by the environment so Hangul labels render.
pub fn setup_fonts(mut egui_context: EguiContexts) {
    let Ok(path) = std::env::var(FONT_VAR) else {
        return;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(%err, path = %path, "Could not read font");
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("custom".to_owned(), FontData::from_owned(bytes));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "custom".to_owned());
    }

    egui_context.ctx_mut().set_fonts(fonts);
    info!(path = %path, "Loaded font");
}

pub fn render(
    mut ui_state: ResMut<UiState>,
    mut charts: ResMut<ChartsState>,
    mut egui_context: EguiContexts,
    mut state: ResMut<State>,
    mut epoch: ResMut<Epoch>,
    report: Res<OrbitReport>,
    mut camera: Query<&mut OrbitCameraController>,
    mut recalculate: EventWriter<Recalculate>,
) {
    let ctx = egui_context.ctx_mut();

    egui::TopBottomPanel::top("Top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Settings").clicked() {
                ui_state.settings_visible = !ui_state.settings_visible;
            }

            if ui.button("About").clicked() {
                ui_state.about_visible = !ui_state.about_visible;
            }

            ui.separator();

            ui.toggle_value(&mut charts.orbit_visible, "Orbit");
            ui.toggle_value(&mut charts.distance_time_visible, "Distance over time");
            ui.toggle_value(&mut charts.distance_angle_visible, "Distance over angle");
            ui.toggle_value(&mut charts.fit_visible, "Sinusoidal fit");
        });
    });

    egui::TopBottomPanel::bottom("Bottom").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Time since periapsis: {:.1} {}",
                TIME_UNIT.from_seconds(epoch.0),
                TIME_UNIT.symbol()
            ));

            if let Some(report) = &report.0 {
                if let Some(sample) = report.trajectory.sample_at(epoch.0) {
                    ui.label(format!("Distance: {}", distance(sample.radius)));
                }
            }
        });
    });

    egui::SidePanel::left("Left").show(ctx, |ui| {
        let Some(report) = &report.0 else {
            ui.label("No orbit computed");
            return;
        };

        let orbit = report.orbit();

        ui.heading("Orbit");
        ui.label(format!("a = {}", distance(orbit.semi_major_axis())));
        ui.label(format!("b = {}", distance(orbit.semi_minor_axis())));
        ui.label(format!("e = {:.4}", orbit.eccentricity()));
        ui.label(format!(
            "T = {:.2} {}",
            TIME_UNIT.from_seconds(orbit.period()),
            TIME_UNIT.symbol()
        ));
        ui.label(format!("Periapsis: {}", distance(orbit.periapsis())));
        ui.label(format!("Apoapsis: {}", distance(orbit.apoapsis())));
        ui.label(format!("Samples: {}", report.trajectory.len()));

        ui.separator();

        ui.heading("Fit");
        match (&report.fit, report.fit_summary()) {
            (Some(fit), Some(lines)) => {
                for line in lines {
                    ui.label(line);
                }
                ui.label(format!("RMS residual: {:.3e} km", fit.rms_residual));
                ui.label(format!("Iterations: {}", fit.iterations));
            }
            _ => {
                ui.label("Disabled");
            }
        }
    });

    egui::Window::new("Settings")
        .open(&mut ui_state.settings_visible)
        .show(ctx, |ui| {
            ui.heading("Orbit");
            orbit_settings(ui, &mut state);

            if ui.button("Recalculate").clicked() {
                recalculate.send(Recalculate);
            }

            ui.heading("Animation");
            value_slider(ui, "Epoch (s)", &mut epoch.0, 0.0, Num::MAX, 3600.0);
            ui.checkbox(&mut state.update_epoch, "Update Epoch");
            value_slider(ui, "Epoch scale", &mut state.epoch_scale, 0.0, f32::MAX, 3600.0);

            ui.heading("Scene");
            ui.checkbox(&mut state.draw_orbit, "Draw orbit");
            ui.checkbox(&mut state.draw_spokes, "Draw spokes");
            if state.draw_spokes {
                ui.horizontal(|ui| {
                    ui.label("Spoke step");
                    ui.add(DragValue::new(&mut state.spoke_step).clamp_range(1..=MAX_SAMPLES));
                });
            }
            ui.checkbox(&mut state.show_radius, "Show radius");

            ui.checkbox(&mut state.draw_axis, "Draw axis");
            if state.draw_axis {
                value_slider(ui, "Axis scale", &mut state.axis_scale, 0.0, f32::MAX, 0.1);
            }

            value_slider(ui, "Distance scaling", &mut state.distance_scaling, 0.01, 1000.0, 0.05);

            if let Ok(mut camera) = camera.get_single_mut() {
                ui.heading("Camera");

                ui.label("Mouse rotate sensitivity");
                ui.horizontal(|ui| {
                    ui.label("x");
                    ui.add(DragValue::new(&mut camera.mouse_rotate_sensitivity.x).speed(0.01));
                    ui.label("y");
                    ui.add(DragValue::new(&mut camera.mouse_rotate_sensitivity.y).speed(0.01));
                });
            }
        });

    egui::Window::new("About").open(&mut ui_state.about_visible).show(ctx, |ui| {
        ui.heading("Hello!");

        ui.label("A planet sampled over one orbital period around its star, with the star-planet distance fitted by a sinusoid.");
        ui.label("Edit the orbit in the settings window and press Recalculate. The fitted equation is also printed to the console.");

        ui.heading("Controls");
        ui.label("Scroll to zoom in & out");
        ui.label("Hold Ctrl and drag the mouse to rotate the viewport");
    });
}

fn orbit_settings(ui: &mut Ui, state: &mut State) {
    let config = &mut state.config;

    let mut a = DISTANCE_UNIT.from_meters(config.semi_major_axis);
    let label = format!("Semi-major axis ({})", DISTANCE_UNIT.symbol());
    value_slider(ui, &label, &mut a, 0.01, 1000.0, 0.01);
    config.semi_major_axis = DISTANCE_UNIT.to_meters(a);

    value_slider(ui, "Eccentricity", &mut config.eccentricity, 0.0, 0.99, 0.001);

    let mut period = TIME_UNIT.from_seconds(config.period);
    let label = format!("Period ({})", TIME_UNIT.symbol());
    value_slider(ui, &label, &mut period, 1.0, 1e6, 1.0);
    config.period = period * TIME_UNIT.seconds();

    ui.horizontal(|ui| {
        ui.label("Samples");
        ui.add(DragValue::new(&mut config.sample_count).clamp_range(2..=MAX_SAMPLES));
    });

    ComboBox::from_label("Strategy")
        .selected_text(strategy_name(config.strategy))
        .show_ui(ui, |ui| {
            for strategy in [
                SolveStrategy::UniformAngle,
                SolveStrategy::default(),
                SolveStrategy::newton(),
            ] {
                let selected = strategy_name(config.strategy) == strategy_name(strategy);
                if ui.selectable_label(selected, strategy_name(strategy)).clicked() {
                    config.strategy = strategy;
                }
            }
        });

    match &mut config.strategy {
        SolveStrategy::UniformAngle => {}
        SolveStrategy::FixedPoint { iterations } => {
            ui.horizontal(|ui| {
                ui.label("Iterations");
                ui.add(DragValue::new(iterations).clamp_range(1..=1000));
            });
        }
        SolveStrategy::Newton {
            tolerance,
            max_iterations,
        } => {
            value_slider(ui, "Tolerance", tolerance, Num::EPSILON, 1.0, 1e-12);
            ui.horizontal(|ui| {
                ui.label("Max iterations");
                ui.add(DragValue::new(max_iterations).clamp_range(1..=1000));
            });
        }
    }

    ComboBox::from_label("Language")
        .selected_text(config.locale.name())
        .show_ui(ui, |ui| {
            for locale in Locale::ALL {
                ui.selectable_value(&mut config.locale, locale, locale.name());
            }
        });

    let mut fit_enabled = config.fit.is_some();
    ui.checkbox(&mut fit_enabled, "Sinusoidal fit");
    config.fit = match (fit_enabled, config.fit) {
        (true, None) => Some(FitOptions::default()),
        (false, _) => None,
        (true, options) => options,
    };
}

fn distance(meters: Num) -> String {
    format!("{:.4} {}", DISTANCE_UNIT.from_meters(meters), DISTANCE_UNIT.symbol())
}

fn strategy_name(strategy: SolveStrategy) -> &'static str {
    match strategy {
        SolveStrategy::UniformAngle => "Uniform angle",
        SolveStrategy::FixedPoint { .. } => "Fixed point",
        SolveStrategy::Newton { .. } => "Newton",
    }
}

fn value_slider<N: egui::emath::Numeric>(
    ui: &mut Ui,
    name: &str,
    value: &mut N,
    min: N,
    max: N,
    speed: f64,
) {
    ui.horizontal(|ui| {
        ui.label(name);
        ui.add(DragValue::new(value).speed(speed).clamp_range(min..=max));
    });
}
