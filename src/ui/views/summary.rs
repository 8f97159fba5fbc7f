use crate::app::SurveyApp;
use crate::ui::layout::centered_panel;
use crate::view_models::CategoryRow;
use egui::{Context, Grid, ScrollArea};

pub fn ui_summary_view(app: &mut SurveyApp, ctx: &Context) {
    centered_panel(ctx, 500.0, 600.0, |ui| {
        ui.heading("Resumen de niveles");
        ui.add_space(10.0);
        ui.label(format!(
            "{} alternativas marcadas en {} preguntas",
            app.selection().len(),
            app.answers().len()
        ));
        ui.add_space(5.0);

        let rows: Vec<CategoryRow> = app.summary_rows();
        if rows.is_empty() {
            ui.label("No hay niveles definidos para esta encuesta.");
            return;
        }

        let feed = app.chart_feed();
        ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
            Grid::new("category_levels_grid")
                .striped(true)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Categoría");
                    ui.label(&feed.label);
                    ui.label("Nivel máximo");
                    ui.label("Estado");
                    ui.end_row();

                    for r in &rows {
                        ui.label(&r.category);
                        ui.label(r.level.to_string());
                        ui.label(r.max_level.to_string());
                        ui.label(r.label());
                        ui.end_row();
                    }
                });
        });
        ui.label(format!(
            "Escala del gráfico: {} a {}",
            feed.suggested_min, feed.suggested_max
        ));

        let issues = app.issues();
        if !issues.is_empty() {
            ui.add_space(10.0);
            ui.separator();
            ui.label(format!("⚠ {} avisos en el catálogo", issues.len()));
            for issue in issues {
                ui.label(issue.to_string());
            }
        }
    });
}
