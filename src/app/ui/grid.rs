// src/app/ui/grid.rs — listing pages: hero, card grid, pagination, genre sidebar.
use eframe::egui as eg;

use crate::app::genres::GenreMap;
use crate::app::nav::Route;
use crate::app::pagination;
use crate::app::types::MovieCard;
use crate::app::ui::hero::render_hero;
use crate::app::{App, LoadPhase, PageState, CARD_GENRE_CAP};

const CARD_WIDTH: f32 = 150.0;
const POSTER_SIZE: eg::Vec2 = eg::Vec2::new(150.0, 225.0);

impl App {
    pub(crate) fn ui_render_listing(&mut self, ui: &mut eg::Ui) {
        let route = self.route.clone();
        let mut nav: Option<Route> = None;
        let mut hero_pick: Option<usize> = None;

        let PageState::Listing {
            phase,
            cards,
            hero,
            total_pages,
        } = &self.page
        else {
            return;
        };

        match phase {
            LoadPhase::Loading => {
                ui.add_space(64.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.add_space(8.0);
                    ui.weak("Loading…");
                });
            }
            LoadPhase::Failed(msg) => {
                ui.add_space(64.0);
                ui.vertical_centered(|ui| {
                    ui.colored_label(eg::Color32::LIGHT_RED, msg);
                });
            }
            LoadPhase::Ready => {
                match &route {
                    Route::Search { query, .. } => {
                        ui.add_space(8.0);
                        ui.heading(format!("Results for \"{query}\""));
                        ui.add_space(8.0);
                    }
                    Route::Genre { id, .. } => {
                        ui.add_space(8.0);
                        let name = self
                            .session
                            .genres
                            .name_of(*id)
                            .unwrap_or("Genre")
                            .to_string();
                        ui.heading(name);
                        ui.add_space(8.0);
                    }
                    _ => {}
                }

                if let Some(h) = hero {
                    render_hero(ui, h, cards, &self.session.genres, &mut nav, &mut hero_pick);
                }

                if cards.is_empty() {
                    ui.add_space(32.0);
                    ui.vertical_centered(|ui| ui.weak("No movies found."));
                } else {
                    let show_extra = matches!(route, Route::Genre { .. });
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = eg::vec2(14.0, 18.0);
                        for card in cards {
                            if movie_card(ui, card, &self.session.genres, show_extra) {
                                nav = Some(Route::Detail { id: card.movie.id });
                            }
                        }
                    });
                }

                if route.is_paginated() {
                    pagination_strip(ui, &route, *total_pages, &mut nav);
                }
            }
        }

        if let Some(i) = hero_pick {
            self.hero_select(i);
        }
        if nav.is_some() {
            self.pending_nav = nav;
        }
    }

    pub(crate) fn ui_render_genre_sidebar(&mut self, ctx: &eg::Context) {
        let mut nav: Option<Route> = None;
        let active = match self.route {
            Route::Genre { id, .. } => Some(id),
            _ => None,
        };

        eg::SidePanel::left("genre_sidebar")
            .resizable(false)
            .default_width(170.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Genres");
                ui.separator();
                eg::ScrollArea::vertical().show(ui, |ui| {
                    for (id, name) in self.session.genres.entries_sorted() {
                        if ui.selectable_label(Some(id) == active, name).clicked() {
                            nav = Some(Route::Genre { id, page: 1 });
                        }
                    }
                });
            });

        if nav.is_some() {
            self.pending_nav = nav;
        }
    }
}

/// One poster card. Returns true when the card was clicked.
fn movie_card(ui: &mut eg::Ui, card: &MovieCard, genres: &GenreMap, show_extra: bool) -> bool {
    let mut clicked = false;
    ui.allocate_ui(eg::vec2(CARD_WIDTH, 0.0), |ui| {
        let resp = ui
            .vertical(|ui| {
                ui.set_width(CARD_WIDTH);
                poster_or_placeholder(ui, card);
                ui.add_space(4.0);
                ui.label(eg::RichText::new(&card.movie.title).strong());
                ui.label(
                    eg::RichText::new(genres.label_for(&card.movie.genre_ids, CARD_GENRE_CAP))
                        .small()
                        .weak(),
                );
                ui.label(
                    eg::RichText::new(format!("★ {:.1}", card.movie.vote_average))
                        .small()
                        .color(eg::Color32::GOLD),
                );
                if show_extra {
                    if let Some(extra) = &card.extra {
                        if let Some(director) = &extra.director {
                            ui.label(eg::RichText::new(format!("Dir. {director}")).small());
                        }
                        if !extra.top_cast.is_empty() {
                            ui.label(eg::RichText::new(extra.top_cast.join(", ")).small().weak());
                        }
                    }
                }
            })
            .response
            .interact(eg::Sense::click())
            .on_hover_cursor(eg::CursorIcon::PointingHand);
        if resp.clicked() {
            clicked = true;
        }
    });
    clicked
}

fn poster_or_placeholder(ui: &mut eg::Ui, card: &MovieCard) {
    match &card.art.tex {
        Some(tex) => {
            ui.add(eg::Image::new(tex).fit_to_exact_size(POSTER_SIZE).rounding(4.0));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(POSTER_SIZE, eg::Sense::hover());
            ui.painter().rect_filled(rect, 4.0, eg::Color32::from_gray(45));
        }
    }
}

fn pagination_strip(
    ui: &mut eg::Ui,
    route: &Route,
    total_pages: Option<u32>,
    nav: &mut Option<Route>,
) {
    let current = route.page();
    ui.add_space(20.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination::prev_enabled(current), eg::Button::new("◀ Prev"))
            .clicked()
        {
            *nav = Some(route.with_page(current - 1));
        }
        for p in pagination::page_window(current) {
            if ui.selectable_label(p == current, p.to_string()).clicked() && p != current {
                *nav = Some(route.with_page(p));
            }
        }
        if ui.button("Next ▶").clicked() {
            *nav = Some(route.with_page(current.saturating_add(1)));
        }
        if let Some(total) = total_pages {
            ui.weak(format!("{total} pages"));
        }
    });
    ui.add_space(12.0);
}
