// src/app/ui/detail.rs — single-movie page: poster, facts, cast, pictures.
use chrono::{Datelike, NaiveDate};
use eframe::egui as eg;

use crate::app::nav::Route;
use crate::app::types::CardArt;
use crate::app::{App, DetailPhase, DetailView, PageState};

const POSTER_SIZE: eg::Vec2 = eg::Vec2::new(220.0, 330.0);
const PROFILE_SIZE: eg::Vec2 = eg::Vec2::new(90.0, 135.0);
const PICTURE_SIZE: eg::Vec2 = eg::Vec2::new(300.0, 169.0);

impl App {
    pub(crate) fn ui_render_detail(&mut self, ui: &mut eg::Ui) {
        let mut nav: Option<Route> = None;

        match &self.page {
            PageState::Detail(DetailPhase::Loading) => {
                ui.add_space(64.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.add_space(8.0);
                    ui.weak("Loading…");
                });
            }
            PageState::Detail(DetailPhase::Failed(msg)) => {
                ui.add_space(64.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(eg::Color32::LIGHT_RED, msg);
                    ui.add_space(12.0);
                    if ui.button("◀ Back to browse").clicked() {
                        nav = Some(Route::Home { page: 1 });
                    }
                });
            }
            PageState::Detail(DetailPhase::Ready(view)) => {
                render_detail(ui, view, &mut nav);
            }
            _ => {}
        }

        if nav.is_some() {
            self.pending_nav = nav;
        }
    }
}

fn render_detail(ui: &mut eg::Ui, view: &DetailView, nav: &mut Option<Route>) {
    ui.add_space(8.0);
    if ui.link("◀ Back to browse").clicked() {
        *nav = Some(Route::Home { page: 1 });
    }
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.heading(eg::RichText::new(&view.movie.title).size(28.0));
        if let Some(year) = release_year(view.movie.release_date.as_deref()) {
            ui.label(eg::RichText::new(format!("({year})")).size(20.0).weak());
        }
    });
    ui.horizontal(|ui| {
        ui.label(
            eg::RichText::new(format!("★ {:.1}", view.movie.vote_average))
                .color(eg::Color32::GOLD),
        );
        ui.weak(format!("{} votes", view.movie.vote_count));
    });
    ui.add_space(12.0);

    ui.horizontal_top(|ui| {
        art_or_placeholder(ui, &view.poster, POSTER_SIZE);
        ui.add_space(16.0);
        ui.vertical(|ui| {
            ui.set_max_width(ui.available_width() - 8.0);
            if !view.genre_names.is_empty() {
                ui.label(eg::RichText::new(view.genre_names.join(" · ")).strong());
                ui.add_space(6.0);
            }
            ui.label(format!("Director: {}", view.director));
            ui.add_space(10.0);
            if view.movie.overview.is_empty() {
                ui.weak("No overview available.");
            } else {
                ui.label(&view.movie.overview);
            }
        });
    });

    if !view.cast.is_empty() {
        ui.add_space(20.0);
        ui.heading("Cast");
        ui.add_space(8.0);
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = 14.0;
            for (member, art) in &view.cast {
                ui.vertical(|ui| {
                    ui.set_width(PROFILE_SIZE.x);
                    art_or_placeholder(ui, art, PROFILE_SIZE);
                    ui.label(eg::RichText::new(&member.name).small().strong());
                    if !member.character.is_empty() {
                        ui.label(eg::RichText::new(&member.character).small().weak());
                    }
                });
            }
        });
    }

    if !view.pictures.is_empty() {
        ui.add_space(20.0);
        ui.heading("Pictures");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = eg::vec2(12.0, 12.0);
            for art in &view.pictures {
                art_or_placeholder(ui, art, PICTURE_SIZE);
            }
        });
    }
    ui.add_space(24.0);
}

fn art_or_placeholder(ui: &mut eg::Ui, art: &CardArt, size: eg::Vec2) {
    match &art.tex {
        Some(tex) => {
            ui.add(eg::Image::new(tex).fit_to_exact_size(size).rounding(4.0));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, eg::Sense::hover());
            ui.painter().rect_filled(rect, 4.0, eg::Color32::from_gray(45));
        }
    }
}

fn release_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::release_year;

    #[test]
    fn year_from_release_date() {
        assert_eq!(release_year(Some("1994-09-23")), Some(1994));
        assert_eq!(release_year(Some("not a date")), None);
        assert_eq!(release_year(None), None);
    }
}
