use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left selection panel: site dropdown and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Selection");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what the widgets read so we can mutate state below.
    let sites = dataset.sites().to_vec();
    let (min_payload, max_payload) = (dataset.min_payload(), dataset.max_payload());

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Site dropdown ----
            ui.strong("Launch site");
            egui::ComboBox::from_id_salt("site_select")
                .selected_text(state.site.label().to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(state.site == SiteSelection::All, "All Sites")
                        .clicked()
                    {
                        state.site = SiteSelection::All;
                        changed = true;
                    }
                    for site in &sites {
                        let selected = state.site == SiteSelection::Site(site.clone());
                        if ui.selectable_label(selected, site).clicked() {
                            state.site = SiteSelection::Site(site.clone());
                            changed = true;
                        }
                    }
                });
            ui.separator();

            // ---- Payload range ----
            ui.strong("Payload range (kg)");
            let mut lo = state.payload_range.lo;
            let mut hi = state.payload_range.hi;

            let lo_resp = ui.add(
                egui::Slider::new(&mut lo, min_payload..=max_payload)
                    .text("min")
                    .fixed_decimals(0),
            );
            let hi_resp = ui.add(
                egui::Slider::new(&mut hi, min_payload..=max_payload)
                    .text("max")
                    .fixed_decimals(0),
            );

            if lo_resp.changed() || hi_resp.changed() {
                // Keep the interval well-formed while either end is dragged.
                if lo > hi {
                    if lo_resp.changed() {
                        hi = lo;
                    } else {
                        lo = hi;
                    }
                }
                state.payload_range.lo = lo;
                state.payload_range.hi = hi;
                changed = true;
            }

            if ui.small_button("Reset range").clicked() {
                state.payload_range.lo = min_payload;
                state.payload_range.hi = max_payload;
                changed = true;
            }
        });

    if changed {
        state.on_input_changed();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} in view",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches across {} sites",
                    dataset.len(),
                    dataset.sites().len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
