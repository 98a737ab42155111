// src/app/ui/hero.rs — homepage backdrop slider.
use eframe::egui as eg;

use crate::app::genres::GenreMap;
use crate::app::nav::Route;
use crate::app::types::MovieCard;
use crate::app::{HeroState, CARD_GENRE_CAP};

const HERO_HEIGHT: f32 = 320.0;
const DOT_SPACING: f32 = 18.0;

pub(super) fn render_hero(
    ui: &mut eg::Ui,
    hero: &HeroState,
    cards: &[MovieCard],
    genres: &GenreMap,
    nav: &mut Option<Route>,
    pick: &mut Option<usize>,
) {
    if hero.art.is_empty() {
        return;
    }
    let current = hero.current.min(hero.art.len() - 1);

    let width = ui.available_width();
    let (rect, resp) =
        ui.allocate_exact_size(eg::vec2(width, HERO_HEIGHT), eg::Sense::click());
    let painter = ui.painter_at(rect);

    match &hero.art[current].tex {
        Some(tex) => {
            painter.image(
                tex.id(),
                rect,
                eg::Rect::from_min_max(eg::pos2(0.0, 0.0), eg::pos2(1.0, 1.0)),
                eg::Color32::WHITE,
            );
        }
        None => {
            painter.rect_filled(rect, 0.0, eg::Color32::from_gray(35));
        }
    }
    // Darken so the overlay text stays readable on bright backdrops.
    painter.rect_filled(rect, 0.0, eg::Color32::from_black_alpha(110));

    if let Some(card) = cards.get(current) {
        let anchor = rect.left_bottom() + eg::vec2(24.0, -44.0);
        painter.text(
            anchor + eg::vec2(0.0, -52.0),
            eg::Align2::LEFT_BOTTOM,
            &card.movie.title,
            eg::FontId::proportional(30.0),
            eg::Color32::WHITE,
        );
        painter.text(
            anchor + eg::vec2(0.0, -28.0),
            eg::Align2::LEFT_BOTTOM,
            genres.label_for(&card.movie.genre_ids, CARD_GENRE_CAP),
            eg::FontId::proportional(15.0),
            eg::Color32::from_gray(220),
        );
        painter.text(
            anchor,
            eg::Align2::LEFT_BOTTOM,
            format!("★ {:.1}", card.movie.vote_average),
            eg::FontId::proportional(15.0),
            eg::Color32::GOLD,
        );
    }

    // Slide dots; a dot click wins over the full-surface click.
    let n = hero.art.len();
    let mut dot_clicked = false;
    for i in 0..n {
        let center = eg::pos2(
            rect.center().x + (i as f32 - (n as f32 - 1.0) / 2.0) * DOT_SPACING,
            rect.bottom() - 16.0,
        );
        let dot_rect = eg::Rect::from_center_size(center, eg::vec2(12.0, 12.0));
        let dot_resp = ui.interact(dot_rect, ui.id().with(("hero_dot", i)), eg::Sense::click());
        let (radius, color) = if i == current {
            (5.0, eg::Color32::WHITE)
        } else {
            (4.0, eg::Color32::from_gray(150))
        };
        painter.circle_filled(center, radius, color);
        if dot_resp.clicked() {
            *pick = Some(i);
            dot_clicked = true;
        }
    }

    if resp.clicked() && !dot_clicked {
        if let Some(card) = cards.get(current) {
            *nav = Some(Route::Detail { id: card.movie.id });
        }
    }

    ui.add_space(12.0);
}
