// src/app/ui/header.rs — top bar: brand, search with suggestion popup, genre menu.
use std::time::Instant;

use eframe::egui as eg;

use crate::app::nav::Route;
use crate::app::types::PosterState;
use crate::app::App;

const SEARCH_WIDTH: f32 = 260.0;
const THUMB_SIZE: eg::Vec2 = eg::Vec2::new(28.0, 42.0);

impl App {
    pub(crate) fn ui_render_header(&mut self, ctx: &eg::Context) {
        let mut nav: Option<Route> = None;
        let mut dismiss = false;
        let mut search_rect = eg::Rect::NOTHING;

        eg::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                let brand = ui.add(
                    eg::Label::new(eg::RichText::new("🎬 Reelgrid").heading().strong())
                        .sense(eg::Sense::click()),
                );
                if brand.clicked() {
                    nav = Some(Route::Home { page: 1 });
                }

                ui.menu_button("Genres", |ui| {
                    ui.set_min_width(160.0);
                    if !self.session.genres_loaded() {
                        ui.weak("Loading…");
                    }
                    for (id, name) in self.session.genres.entries_sorted() {
                        if ui.button(name).clicked() {
                            nav = Some(Route::Genre { id, page: 1 });
                            ui.close_menu();
                        }
                    }
                });

                ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                    let go = ui.button("🔍").clicked();
                    let resp = ui.add(
                        eg::TextEdit::singleline(&mut self.search_text)
                            .hint_text("Search movies…")
                            .desired_width(SEARCH_WIDTH),
                    );
                    search_rect = resp.rect;
                    if resp.changed() {
                        let text = self.search_text.clone();
                        self.autocomplete.on_input(&text, Instant::now());
                    }
                    let submitted = go
                        || (resp.lost_focus()
                            && ui.input(|i| i.key_pressed(eg::Key::Enter)));
                    if submitted {
                        let query = self.search_text.trim().to_string();
                        if !query.is_empty() {
                            nav = Some(Route::Search { query, page: 1 });
                        }
                    }
                });
            });
            ui.add_space(6.0);
        });

        // Suggestion popup floats below the search box.
        let mut popup_rect = eg::Rect::NOTHING;
        if self.autocomplete.is_open() {
            let area = eg::Area::new(eg::Id::new("suggest_popup"))
                .order(eg::Order::Foreground)
                .fixed_pos(search_rect.left_bottom() + eg::vec2(0.0, 4.0));
            let area_resp = area.show(ctx, |ui| {
                eg::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(search_rect.width());
                    for (idx, movie) in self.autocomplete.suggestions().iter().enumerate() {
                        let row = ui
                            .horizontal(|ui| {
                                suggestion_thumb(ui, self, idx);
                                ui.vertical(|ui| {
                                    ui.label(eg::RichText::new(&movie.title).strong());
                                    let label = self.session.genres.label_all(&movie.genre_ids);
                                    ui.label(eg::RichText::new(label).small().weak());
                                });
                            })
                            .response
                            .interact(eg::Sense::click());
                        if row.clicked() {
                            nav = Some(Route::Detail { id: movie.id });
                        }
                        if idx + 1 < self.autocomplete.suggestions().len() {
                            ui.separator();
                        }
                    }
                });
            });
            popup_rect = area_resp.response.rect;

            // Click-away or Escape hides the popup without navigating.
            let pressed_outside = ctx.input(|i| {
                i.pointer.any_pressed()
                    && i.pointer.interact_pos().is_some_and(|p| {
                        !search_rect.expand(4.0).contains(p) && !popup_rect.contains(p)
                    })
            });
            if pressed_outside || ctx.input(|i| i.key_pressed(eg::Key::Escape)) {
                dismiss = true;
            }
        }

        if dismiss {
            self.autocomplete.dismiss();
            self.suggest_art.clear();
        }
        if nav.is_some() {
            self.pending_nav = nav;
        }
    }
}

fn suggestion_thumb(ui: &mut eg::Ui, app: &App, idx: usize) {
    let tex = app
        .suggest_art
        .get(idx)
        .filter(|a| a.state == PosterState::Ready)
        .and_then(|a| a.tex.as_ref());
    match tex {
        Some(tex) => {
            ui.add(eg::Image::new(tex).fit_to_exact_size(THUMB_SIZE));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(THUMB_SIZE, eg::Sense::hover());
            ui.painter()
                .rect_filled(rect, 2.0, eg::Color32::from_gray(60));
        }
    }
}
