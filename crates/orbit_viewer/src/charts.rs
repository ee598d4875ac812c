//! 2D chart windows drawn from the latest [`SimulationReport`].

use bevy::prelude::*;
use bevy_egui::egui::{self, Color32};
use bevy_egui::EguiContexts;
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotUi, Points};
use kepler_trajectory::SimulationReport;

use crate::State;

const CHART_SIZE: [f32; 2] = [520.0, 360.0];
const STAR_COLOR: Color32 = Color32::YELLOW;
const SPOKE_COLOR: Color32 = Color32::GREEN;
const FITTED_COLOR: Color32 = Color32::LIGHT_RED;

#[derive(Resource, Debug, Clone)]
pub struct ChartsState {
    pub orbit_visible: bool,
    pub distance_time_visible: bool,
    pub distance_angle_visible: bool,
    pub fit_visible: bool,
}

impl Default for ChartsState {
    fn default() -> Self {
        Self {
            orbit_visible: true,
            distance_time_visible: true,
            distance_angle_visible: false,
            fit_visible: true,
        }
    }
}

pub fn render(
    mut egui_context: EguiContexts,
    mut charts: ResMut<ChartsState>,
    report: Res<crate::OrbitReport>,
    state: Res<State>,
) {
    let Some(report) = &report.0 else {
        return;
    };

    let ctx = egui_context.ctx_mut();
    let labels = report.labels();

    egui::Window::new(labels.orbit_title)
        .id(egui::Id::new("orbit_chart"))
        .open(&mut charts.orbit_visible)
        .default_size(CHART_SIZE)
        .show(ctx, |ui| {
            Plot::new("orbit")
                .legend(Legend::default())
                .data_aspect(1.0)
                .x_axis_label(labels.x_position_au)
                .y_axis_label(labels.y_position_au)
                .show(ui, |plot_ui| orbit(plot_ui, report, state.spoke_step));
        });

    egui::Window::new(labels.distance_time_title)
        .id(egui::Id::new("distance_time_chart"))
        .open(&mut charts.distance_time_visible)
        .default_size(CHART_SIZE)
        .show(ctx, |ui| {
            Plot::new("distance_time")
                .legend(Legend::default())
                .x_axis_label(labels.time_days)
                .y_axis_label(labels.distance_gm)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(report.distance_series()).name(labels.planet));
                });
        });

    egui::Window::new(labels.distance_angle_title)
        .id(egui::Id::new("distance_angle_chart"))
        .open(&mut charts.distance_angle_visible)
        .default_size(CHART_SIZE)
        .show(ctx, |ui| {
            Plot::new("distance_angle")
                .legend(Legend::default())
                .x_axis_label(labels.angle_rad)
                .y_axis_label(labels.distance_km)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(report.distance_angle_series()).name(labels.planet));
                });
        });

    let Some(fitted) = report.fitted_series() else {
        return;
    };

    egui::Window::new(labels.fit_title)
        .id(egui::Id::new("fit_chart"))
        .open(&mut charts.fit_visible)
        .default_size(CHART_SIZE)
        .show(ctx, |ui| {
            Plot::new("fit")
                .legend(Legend::default())
                .x_axis_label(labels.time_days)
                .y_axis_label(labels.distance_gm)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(report.distance_series()).name(labels.distance_actual));
                    plot_ui.line(
                        Line::new(fitted)
                            .name(labels.distance_fitted)
                            .color(FITTED_COLOR)
                            .style(LineStyle::dashed_loose()),
                    );
                });
        });
}

fn orbit(plot_ui: &mut PlotUi, report: &SimulationReport, spoke_step: usize) {
    let labels = report.labels();

    plot_ui.line(Line::new(report.orbit_series()).name(labels.planet));

    for spoke in report.spoke_series(spoke_step) {
        plot_ui.line(
            Line::new(spoke.to_vec())
                .color(SPOKE_COLOR)
                .width(0.5)
                .style(LineStyle::dashed_dense()),
        );
    }

    plot_ui.points(
        Points::new(vec![[0.0, 0.0]])
            .name(labels.star)
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(6.0)
            .color(STAR_COLOR),
    );
}
