// src/app/ui/mod.rs
use eframe::egui as eg;

use crate::app::nav::Route;
use crate::app::{App, PageState};

pub mod detail;
pub mod grid;
pub mod header;
pub mod hero;

impl App {
    pub(crate) fn ui_render_content(&mut self, ctx: &eg::Context) {
        if matches!(self.route, Route::Genre { .. })
            && matches!(self.page, PageState::Listing { .. })
        {
            self.ui_render_genre_sidebar(ctx);
        }

        eg::CentralPanel::default().show(ctx, |ui| {
            eg::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &self.page {
                    PageState::Blocked { message } => blocked_panel(ui, message),
                    PageState::Detail(_) => self.ui_render_detail(ui),
                    PageState::Listing { .. } => self.ui_render_listing(ui),
                });
        });
    }
}

fn blocked_panel(ui: &mut eg::Ui, message: &str) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.heading("Nothing to show");
        ui.add_space(8.0);
        ui.label(eg::RichText::new(message).weak());
    });
}
