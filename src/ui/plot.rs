use std::f32::consts::TAU;

use eframe::egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::data::aggregate::GroupKey;
use crate::data::filter::SiteSelection;
use crate::data::model::Outcome;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – pie chart above the payload scatter chart
// ---------------------------------------------------------------------------

/// Render both charts in the central panel.
pub fn charts(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a launch-records CSV to begin  (File → Open…)");
        });
        return;
    }

    let pie_height = ui.available_height() * 0.45;

    ui.allocate_ui(Vec2::new(ui.available_width(), pie_height), |ui: &mut Ui| {
        pie_chart(ui, state);
    });
    ui.separator();
    scatter_chart(ui, state);
}

// ---------------------------------------------------------------------------
// Pie chart (painter-drawn)
// ---------------------------------------------------------------------------

fn pie_title(state: &AppState) -> String {
    match &state.site {
        SiteSelection::All => "Total successful launches by site".to_string(),
        SiteSelection::Site(s) => format!("Success vs failure for {s}"),
    }
}

fn slice_color(key: &GroupKey, palette: &[Color32], idx: usize) -> Color32 {
    match key {
        // Outcome slices keep semantic colours whichever order they appear in.
        GroupKey::Outcome(Outcome::Success) => Color32::from_rgb(0x2e, 0xa0, 0x4e),
        GroupKey::Outcome(Outcome::Failure) => Color32::from_rgb(0xc8, 0x3a, 0x3a),
        GroupKey::Site(_) => palette.get(idx).copied().unwrap_or(Color32::GRAY),
    }
}

fn pie_chart(ui: &mut Ui, state: &AppState) {
    ui.strong(pie_title(state));

    let counts = &state.pie_counts;
    let total: u64 = counts.iter().map(|(_, n)| n).sum();

    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    let palette = generate_palette(counts.len());

    ui.horizontal(|ui: &mut Ui| {
        // ---- The pie itself ----
        let side = ui.available_height().min(ui.available_width() * 0.6);
        let (rect, _) =
            ui.allocate_exact_size(Vec2::splat(side.max(80.0)), Sense::hover());
        let painter = ui.painter_at(rect);

        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.45;

        // Start at 12 o'clock, run clockwise.
        let mut angle = -TAU / 4.0;
        for (idx, (key, n)) in counts.iter().enumerate() {
            if *n == 0 {
                continue;
            }
            let sweep = (*n as f32 / total as f32) * TAU;
            let color = slice_color(key, &palette, idx);

            // Triangle fan: slices over 180° are not convex polygons.
            let segments = ((sweep / TAU) * 64.0).ceil().max(1.0) as usize;
            let step = sweep / segments as f32;
            for seg in 0..segments {
                let a0 = angle + step * seg as f32;
                let a1 = a0 + step;
                painter.add(Shape::convex_polygon(
                    vec![center, arc_point(center, radius, a0), arc_point(center, radius, a1)],
                    color,
                    Stroke::NONE,
                ));
            }
            angle += sweep;
        }

        // ---- Legend ----
        ui.vertical(|ui: &mut Ui| {
            for (idx, (key, n)) in counts.iter().enumerate() {
                let color = slice_color(key, &palette, idx);
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter_at(swatch).rect_filled(swatch, 2.0, color);
                    let pct = 100.0 * *n as f64 / total as f64;
                    ui.label(format!("{key}: {n} ({pct:.1}%)"));
                });
            }
        });
    });
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + radius * Vec2::new(angle.cos(), angle.sin())
}

// ---------------------------------------------------------------------------
// Payload / outcome scatter chart
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let title = match &state.site {
        SiteSelection::All => "Payload vs outcome, all sites".to_string(),
        SiteSelection::Site(s) => format!("Payload vs outcome for {s}"),
    };
    ui.strong(title);

    // One series per booster category so the legend doubles as the
    // colour key. Iterating the dataset's booster order keeps legend
    // entries stable while selections change.
    let mut series: Vec<(&str, Vec<[f64; 2]>)> = dataset
        .boosters()
        .iter()
        .map(|b| (b.as_str(), Vec::new()))
        .collect();

    for &idx in &state.visible_indices {
        let rec = dataset.record(idx);
        if let Some((_, points)) = series.iter_mut().find(|(b, _)| *b == rec.booster) {
            points.push([rec.payload_kg, rec.outcome.as_f64()]);
        }
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Outcome (0 = failure, 1 = success)")
        .include_y(-0.2)
        .include_y(1.2)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (booster, points) in series {
                if points.is_empty() {
                    continue;
                }
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(booster))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let points: PlotPoints = points.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(booster)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(4.0),
                );
            }
        });
}
