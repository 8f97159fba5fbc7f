pub mod layout;
pub mod views;

use crate::app::SurveyApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for SurveyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        views::summary::ui_summary_view(self, ctx);
    }
}
