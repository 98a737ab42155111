// src/app/mod.rs — app state, navigation, and the fetch/poster plumbing.
//
// All network work happens on worker threads; results come back over mpsc
// channels and are drained once per frame. Responses carry the navigation
// sequence number they were issued under, so anything from a superseded page
// load is dropped instead of rendering over newer state.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use eframe::egui::{self as eg, ColorImage, TextureHandle};
use tracing::{debug, warn};

pub mod api;
pub mod autocomplete;
pub mod cache;
pub mod genres;
pub mod images;
pub mod nav;
pub mod pagination;
pub mod session;
pub mod types;
pub mod ui;

use crate::app::api::{ApiError, CatalogClient};
use crate::app::autocomplete::AutocompleteController;
use crate::app::cache::{find_any_by_key, load_rgba_image};
use crate::app::images::{ImageUrlCache, QualityTier};
use crate::app::nav::Route;
use crate::app::session::PageSession;
use crate::app::types::{
    ArtSlot, CardArt, CardExtra, CastMember, Credits, DetailBundle, FetchMsg, MovieCard,
    MovieDetail, MovieListing, PosterDone, PosterJob, PosterState,
};
use crate::config::{load_config, AppConfig};

// ---- Tunables ----
const POSTER_WORKER_COUNT: usize = 8;
const MAX_UPLOADS_PER_FRAME: usize = 4;
const MAX_MSGS_PER_FRAME: usize = 32;
const HERO_SLIDE_COUNT: usize = 5;
const HERO_ADVANCE_SECS: u64 = 5;
pub(crate) const CARD_GENRE_CAP: usize = 4;
const DETAIL_GENRE_CAP: usize = 6;
const DETAIL_CAST_CAP: usize = 5;
const DETAIL_PICTURE_CAP: usize = 3;
const CARD_CAST_CAP: usize = 3;

pub struct HeroState {
    pub art: Vec<CardArt>,
    pub current: usize,
    pub last_advance: Instant,
}

pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

pub struct DetailView {
    pub movie: MovieDetail,
    pub director: String,
    pub genre_names: Vec<String>,
    pub poster: CardArt,
    pub cast: Vec<(CastMember, CardArt)>,
    pub pictures: Vec<CardArt>,
}

pub enum DetailPhase {
    Loading,
    Ready(Box<DetailView>),
    Failed(String),
}

pub enum PageState {
    Listing {
        phase: LoadPhase,
        cards: Vec<MovieCard>,
        hero: Option<HeroState>,
        total_pages: Option<u32>,
    },
    Detail(DetailPhase),
    Blocked {
        message: String,
    },
}

pub struct App {
    cfg: AppConfig,
    client: Option<Arc<CatalogClient>>,

    pub(crate) route: Route,
    nav_seq: u64,
    pub(crate) session: PageSession,
    pub(crate) page: PageState,

    // header
    pub(crate) search_text: String,
    pub(crate) autocomplete: AutocompleteController,
    pub(crate) suggest_art: Vec<CardArt>,

    pub(crate) pending_nav: Option<Route>,

    fetch_tx: Sender<FetchMsg>,
    fetch_rx: Receiver<FetchMsg>,
    poster_tx: Option<Sender<PosterJob>>,
    poster_rx: Option<Receiver<PosterDone>>,

    did_init: bool,
    start_route: Option<Route>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_start_route(None)
    }
}

impl App {
    pub fn with_start_route(start_route: Option<Route>) -> Self {
        let cfg = load_config();
        let client = match cfg.api_key.clone() {
            Some(key) => match CatalogClient::new(key, &cfg) {
                Ok(c) => Some(Arc::new(c)),
                Err(e) => {
                    warn!("catalog client build failed: {e}");
                    None
                }
            },
            None => None,
        };

        let (fetch_tx, fetch_rx) = mpsc::channel::<FetchMsg>();
        let (poster_tx, poster_rx) = Self::start_poster_workers(&cfg);

        let autocomplete = AutocompleteController::new(
            cfg.min_query_len,
            Duration::from_millis(cfg.debounce_ms),
            cfg.max_suggestions,
        );

        let session = PageSession::new(&cfg.image_base);

        Self {
            cfg,
            client,
            route: Route::default(),
            nav_seq: 0,
            session,
            page: PageState::Blocked {
                message: "Starting…".into(),
            },
            search_text: String::new(),
            autocomplete,
            suggest_art: Vec::new(),
            pending_nav: None,
            fetch_tx,
            fetch_rx,
            poster_tx,
            poster_rx,
            did_init: false,
            start_route,
        }
    }

    // ----- poster worker pool -----

    /// One shared blocking client, a handful of download threads, results
    /// polled from the UI loop.
    fn start_poster_workers(
        cfg: &AppConfig,
    ) -> (Option<Sender<PosterJob>>, Option<Receiver<PosterDone>>) {
        let client = match reqwest::blocking::Client::builder()
            .user_agent("reelgrid/posters")
            .timeout(Duration::from_secs(cfg.request_timeout_secs.max(15)))
            .pool_max_idle_per_host(POSTER_WORKER_COUNT)
            .build()
        {
            Ok(c) => Arc::new(c),
            Err(e) => {
                warn!("poster http client build failed: {e}");
                return (None, None);
            }
        };

        let (work_tx, work_rx) = mpsc::channel::<PosterJob>();
        let (done_tx, done_rx) = mpsc::channel::<PosterDone>();
        let work_rx = Arc::new(Mutex::new(work_rx));

        for _ in 0..POSTER_WORKER_COUNT {
            let work_rx = Arc::clone(&work_rx);
            let done_tx = done_tx.clone();
            let client = Arc::clone(&client);

            thread::spawn(move || loop {
                let job = {
                    let rx = match work_rx.lock() {
                        Ok(rx) => rx,
                        Err(_) => break,
                    };
                    rx.recv()
                };
                let job = match job {
                    Ok(j) => j,
                    Err(_) => break,
                };

                let PosterJob {
                    nav_seq,
                    slot,
                    key,
                    url,
                    cached_path,
                } = job;
                let result = if let Some(path) = cached_path {
                    Ok(path)
                } else {
                    cache::download_and_store(&client, &url, &key)
                };

                let _ = done_tx.send(PosterDone {
                    nav_seq,
                    slot,
                    key,
                    result,
                });
            });
        }

        (Some(work_tx), Some(done_rx))
    }

    // ----- navigation -----

    pub(crate) fn navigate(&mut self, route: Route) {
        self.nav_seq += 1;
        self.autocomplete.dismiss();
        self.suggest_art.clear();
        self.session = PageSession::new(&self.cfg.image_base);
        self.route = route;
        debug!("navigate → {}", self.route);

        if let Route::Blocked { message } = &self.route {
            // unroutable entry: visible message, zero fetches
            self.page = PageState::Blocked {
                message: message.clone(),
            };
            return;
        }

        let Some(client) = self.client.clone() else {
            self.page = PageState::Blocked {
                message: "No TMDB API key configured. Set TMDB_API_KEY or `api_key` in config.json."
                    .into(),
            };
            return;
        };

        // Header genres and primary content load concurrently; neither blocks
        // the other.
        self.start_genre_fetch(client.clone());

        match self.route.clone() {
            Route::Home { page } | Route::Search { page, .. } | Route::Genre { page, .. } => {
                self.page = PageState::Listing {
                    phase: LoadPhase::Loading,
                    cards: Vec::new(),
                    hero: None,
                    total_pages: None,
                };
                self.start_listing_fetch(client, self.route.clone(), page);
            }
            Route::Detail { id } => {
                self.page = PageState::Detail(DetailPhase::Loading);
                self.start_detail_fetch(client, id);
            }
            Route::Blocked { .. } => unreachable!("handled above"),
        }
    }

    // ----- fetch spawns -----

    fn start_genre_fetch(&self, client: Arc<CatalogClient>) {
        let tx = self.fetch_tx.clone();
        let nav_seq = self.nav_seq;
        thread::spawn(move || {
            let result = client.genre_list();
            let _ = tx.send(FetchMsg::Genres { nav_seq, result });
        });
    }

    fn start_listing_fetch(&self, client: Arc<CatalogClient>, route: Route, page: u32) {
        let tx = self.fetch_tx.clone();
        let nav_seq = self.nav_seq;
        thread::spawn(move || {
            let result = match &route {
                Route::Home { .. } => client.top_rated(page),
                Route::Search { query, .. } => client.search_movies(query, page),
                Route::Genre { id, .. } => client.movies_by_genre(*id, page),
                _ => return,
            };
            let _ = tx.send(FetchMsg::Listing { nav_seq, result });
        });
    }

    /// The detail page's four fetches run concurrently and are joined; any
    /// failure fails the whole bundle so the page never partially renders.
    fn start_detail_fetch(&self, client: Arc<CatalogClient>, id: u64) {
        let tx = self.fetch_tx.clone();
        let nav_seq = self.nav_seq;
        thread::spawn(move || {
            let credits_h = {
                let client = Arc::clone(&client);
                thread::spawn(move || client.movie_credits(id))
            };
            let images_h = {
                let client = Arc::clone(&client);
                thread::spawn(move || client.movie_images(id))
            };
            let genres_h = {
                let client = Arc::clone(&client);
                thread::spawn(move || client.genre_list())
            };

            let movie = client.movie_by_id(id);
            let credits = credits_h.join().unwrap_or(Err(ApiError::Aborted));
            let images = images_h.join().unwrap_or(Err(ApiError::Aborted));
            let genres = genres_h.join().unwrap_or(Err(ApiError::Aborted));

            let result = movie.and_then(|movie| {
                Ok(DetailBundle {
                    movie,
                    credits: credits?,
                    images: images?,
                    genres: genres?,
                })
            });
            let _ = tx.send(FetchMsg::Detail {
                nav_seq,
                result: Box::new(result),
            });
        });
    }

    /// Director/top-cast lines for genre-page cards: secondary data, fetched
    /// after the listing, degrades silently per card.
    fn start_card_credits_fetch(&self, client: Arc<CatalogClient>, ids: Vec<(usize, u64)>) {
        let tx = self.fetch_tx.clone();
        let nav_seq = self.nav_seq;
        thread::spawn(move || {
            for (row_idx, movie_id) in ids {
                let result = client.movie_credits(movie_id);
                if tx
                    .send(FetchMsg::CardCredits {
                        nav_seq,
                        row_idx,
                        result,
                    })
                    .is_err()
                {
                    break;
                }
            }
        });
    }

    pub(crate) fn start_suggestion_fetch(&self, seq: u64, query: String) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let tx = self.fetch_tx.clone();
        thread::spawn(move || {
            let result = client.search_movies(&query, 1).map(|l| l.results);
            let _ = tx.send(FetchMsg::Suggestions { seq, result });
        });
    }

    // ----- message polling -----

    fn poll_fetch_msgs(&mut self) {
        for _ in 0..MAX_MSGS_PER_FRAME {
            let msg = match self.fetch_rx.try_recv() {
                Ok(m) => m,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            };
            match msg {
                FetchMsg::Genres { nav_seq, result } => {
                    if nav_seq == self.nav_seq {
                        self.session.install_genres(result);
                    }
                }
                FetchMsg::Listing { nav_seq, result } => {
                    if nav_seq == self.nav_seq {
                        self.apply_listing(result);
                    }
                }
                FetchMsg::Detail { nav_seq, result } => {
                    if nav_seq == self.nav_seq {
                        self.apply_detail(*result);
                    }
                }
                FetchMsg::CardCredits {
                    nav_seq,
                    row_idx,
                    result,
                } => {
                    if nav_seq == self.nav_seq {
                        self.apply_card_credits(row_idx, result);
                    }
                }
                FetchMsg::Suggestions { seq, result } => {
                    self.install_suggestions(seq, result);
                }
            }
        }
    }

    fn apply_listing(&mut self, result: Result<MovieListing, ApiError>) {
        let listing = match result {
            Ok(l) => l,
            Err(e) => {
                warn!("listing fetch failed: {e}");
                if let PageState::Listing { phase, .. } = &mut self.page {
                    *phase =
                        LoadPhase::Failed("Could not load movies. Please try again later.".into());
                }
                return;
            }
        };

        let mut cards: Vec<MovieCard> = Vec::with_capacity(listing.results.len());
        for movie in listing.results {
            let url = self
                .session
                .images
                .resolve_opt(movie.any_poster_path(), QualityTier::Low);
            cards.push(MovieCard {
                movie,
                art: CardArt::from_url(url),
                extra: None,
            });
        }

        // Hero slider only on the homepage's first page.
        let hero = if matches!(self.route, Route::Home { page: 1 }) {
            let art = cards
                .iter()
                .take(HERO_SLIDE_COUNT)
                .map(|c| {
                    let url = self
                        .session
                        .images
                        .resolve_opt(c.movie.any_backdrop_path(), QualityTier::Original);
                    CardArt::from_url(url)
                })
                .collect();
            Some(HeroState {
                art,
                current: 0,
                last_advance: Instant::now(),
            })
        } else {
            None
        };

        let total_pages = (listing.total_pages > 0).then_some(listing.total_pages);
        self.page = PageState::Listing {
            phase: LoadPhase::Ready,
            cards,
            hero,
            total_pages,
        };

        // Queue poster downloads now that the slots exist.
        self.queue_page_art();

        if let Route::Genre { .. } = self.route {
            if let (Some(client), PageState::Listing { cards, .. }) =
                (self.client.clone(), &self.page)
            {
                let ids = cards
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (i, c.movie.id))
                    .collect();
                self.start_card_credits_fetch(client, ids);
            }
        }
    }

    fn apply_detail(&mut self, result: Result<DetailBundle, ApiError>) {
        let bundle = match result {
            Ok(b) => b,
            Err(e) => {
                warn!("detail fetch failed: {e}");
                self.page = PageState::Detail(DetailPhase::Failed(
                    "Failed to load movie details. Please try again later.".into(),
                ));
                return;
            }
        };

        let view = build_detail_view(bundle, &mut self.session.images);
        self.page = PageState::Detail(DetailPhase::Ready(Box::new(view)));
        self.queue_page_art();
    }

    fn apply_card_credits(&mut self, row_idx: usize, result: Result<Credits, ApiError>) {
        let PageState::Listing { cards, .. } = &mut self.page else {
            return;
        };
        let Some(card) = cards.get_mut(row_idx) else {
            return;
        };
        match result {
            Ok(credits) => {
                let director = credits
                    .crew
                    .iter()
                    .find(|c| c.job.eq_ignore_ascii_case("director"))
                    .map(|c| c.name.clone());
                let top_cast = credits
                    .cast
                    .into_iter()
                    .take(CARD_CAST_CAP)
                    .map(|c| c.name)
                    .collect();
                card.extra = Some(CardExtra { director, top_cast });
            }
            Err(e) => {
                debug!("card credits fetch failed for row {row_idx}: {e}");
            }
        }
    }

    /// A discarded stale response must not touch the popup's art either;
    /// rebuilding on it would reset already-uploaded textures.
    fn install_suggestions(
        &mut self,
        seq: u64,
        result: Result<Vec<types::MovieSummary>, ApiError>,
    ) {
        if self.autocomplete.on_results(seq, result) {
            self.rebuild_suggestion_art();
        }
    }

    fn rebuild_suggestion_art(&mut self) {
        self.suggest_art.clear();
        if !self.autocomplete.is_open() {
            return;
        }
        let mut arts = Vec::with_capacity(self.autocomplete.suggestions().len());
        for movie in self.autocomplete.suggestions() {
            let url = self
                .session
                .images
                .resolve_opt(movie.poster_path.as_deref(), QualityTier::Low);
            arts.push(CardArt::from_url(url));
        }
        self.suggest_art = arts;
        for idx in 0..self.suggest_art.len() {
            self.queue_art_at(ArtSlot::Suggest(idx));
        }
    }

    // ----- poster queueing / completion -----

    fn queue_page_art(&mut self) {
        let slots: Vec<ArtSlot> = match &self.page {
            PageState::Listing { cards, hero, .. } => {
                let mut slots: Vec<ArtSlot> = Vec::new();
                if let Some(h) = hero {
                    slots.extend((0..h.art.len()).map(ArtSlot::Hero));
                }
                slots.extend((0..cards.len()).map(ArtSlot::Card));
                slots
            }
            PageState::Detail(DetailPhase::Ready(view)) => {
                let mut slots = vec![ArtSlot::DetailPoster];
                slots.extend((0..view.cast.len()).map(ArtSlot::Cast));
                slots.extend((0..view.pictures.len()).map(ArtSlot::Picture));
                slots
            }
            _ => Vec::new(),
        };
        for slot in slots {
            self.queue_art_at(slot);
        }
    }

    fn queue_art_at(&mut self, slot: ArtSlot) {
        let nav_seq = self.nav_seq;
        let has_workers = self.poster_tx.is_some();
        let Some(art) = self.art_slot_mut(slot) else {
            return;
        };
        if art.state != PosterState::Pending {
            return;
        }
        let Some(url) = art.url.clone() else {
            art.state = PosterState::Failed;
            return;
        };
        if let Some(path) = find_any_by_key(&art.key) {
            art.path = Some(path);
            art.state = PosterState::Cached;
            return;
        }
        if !has_workers {
            art.state = PosterState::Failed;
            return;
        }
        let key = art.key.clone();
        if let Some(tx) = &self.poster_tx {
            let _ = tx.send(PosterJob {
                nav_seq,
                slot,
                key,
                url,
                cached_path: None,
            });
        }
    }

    fn poll_poster_done(&mut self) {
        let Some(rx) = &self.poster_rx else {
            return;
        };
        let mut done: Vec<PosterDone> = Vec::new();
        for _ in 0..MAX_MSGS_PER_FRAME {
            match rx.try_recv() {
                Ok(msg) => done.push(msg),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        for msg in done {
            self.apply_poster_done(msg);
        }
    }

    fn apply_poster_done(&mut self, msg: PosterDone) {
        if msg.nav_seq != self.nav_seq {
            return; // superseded page load
        }
        let Some(art) = self.art_slot_mut(msg.slot) else {
            return;
        };
        if art.key != msg.key {
            // the slot holds different art than the job was queued for
            return;
        }
        match msg.result {
            Ok(path) => {
                art.path = Some(path);
                art.state = PosterState::Cached;
            }
            Err(e) => {
                debug!("poster download failed: {e}");
                art.state = PosterState::Failed;
            }
        }
    }

    fn art_slot_mut(&mut self, slot: ArtSlot) -> Option<&mut CardArt> {
        match slot {
            ArtSlot::Suggest(i) => self.suggest_art.get_mut(i),
            ArtSlot::Card(i) => match &mut self.page {
                PageState::Listing { cards, .. } => cards.get_mut(i).map(|c| &mut c.art),
                _ => None,
            },
            ArtSlot::Hero(i) => match &mut self.page {
                PageState::Listing { hero: Some(h), .. } => h.art.get_mut(i),
                _ => None,
            },
            ArtSlot::DetailPoster => match &mut self.page {
                PageState::Detail(DetailPhase::Ready(v)) => Some(&mut v.poster),
                _ => None,
            },
            ArtSlot::Cast(i) => match &mut self.page {
                PageState::Detail(DetailPhase::Ready(v)) => v.cast.get_mut(i).map(|(_, a)| a),
                _ => None,
            },
            ArtSlot::Picture(i) => match &mut self.page {
                PageState::Detail(DetailPhase::Ready(v)) => v.pictures.get_mut(i),
                _ => None,
            },
        }
    }

    // ----- texture upload (UI thread only) -----

    fn upload_textures(&mut self, ctx: &eg::Context) {
        let mut budget = MAX_UPLOADS_PER_FRAME;
        let slots: Vec<ArtSlot> = {
            let mut slots: Vec<ArtSlot> = Vec::new();
            match &self.page {
                PageState::Listing { cards, hero, .. } => {
                    if let Some(h) = hero {
                        slots.extend((0..h.art.len()).map(ArtSlot::Hero));
                    }
                    slots.extend((0..cards.len()).map(ArtSlot::Card));
                }
                PageState::Detail(DetailPhase::Ready(view)) => {
                    slots.push(ArtSlot::DetailPoster);
                    slots.extend((0..view.cast.len()).map(ArtSlot::Cast));
                    slots.extend((0..view.pictures.len()).map(ArtSlot::Picture));
                }
                _ => {}
            }
            slots.extend((0..self.suggest_art.len()).map(ArtSlot::Suggest));
            slots
        };

        for slot in slots {
            if budget == 0 {
                break;
            }
            let Some(art) = self.art_slot_mut(slot) else {
                continue;
            };
            if try_lazy_upload(ctx, art) {
                budget -= 1;
            }
        }
    }

    fn tick_hero(&mut self) {
        if let PageState::Listing {
            hero: Some(hero), ..
        } = &mut self.page
        {
            let n = hero.art.len();
            if n > 1 && hero.last_advance.elapsed() >= Duration::from_secs(HERO_ADVANCE_SECS) {
                hero.current = (hero.current + 1) % n;
                hero.last_advance = Instant::now();
            }
        }
    }

    pub(crate) fn hero_select(&mut self, idx: usize) {
        if let PageState::Listing {
            hero: Some(hero), ..
        } = &mut self.page
        {
            if idx < hero.art.len() {
                hero.current = idx;
                hero.last_advance = Instant::now();
            }
        }
    }
}

/// Map the joined detail fetches into the renderable view: genre names
/// resolved against the freshly fetched list (inline names as fallback),
/// deduplicated and capped; director is the first crew entry whose job is
/// "Director", else "Unknown"; cast and pictures are capped.
fn build_detail_view(bundle: DetailBundle, images: &mut ImageUrlCache) -> DetailView {
    let genre_map = genres::GenreMap::from_genres(bundle.genres);
    let mut genre_names: Vec<String> = Vec::new();
    for genre in &bundle.movie.genres {
        if genre_names.len() >= DETAIL_GENRE_CAP {
            break;
        }
        let name = genre_map
            .name_of(genre.id)
            .map(str::to_string)
            .unwrap_or_else(|| genre.name.clone());
        if !name.is_empty() && !genre_names.contains(&name) {
            genre_names.push(name);
        }
    }

    let director = bundle
        .credits
        .crew
        .iter()
        .find(|c| c.job.eq_ignore_ascii_case("director"))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown".into());

    let poster_url = images.resolve_opt(bundle.movie.any_poster_path(), QualityTier::Low);

    let cast: Vec<(CastMember, CardArt)> = bundle
        .credits
        .cast
        .into_iter()
        .take(DETAIL_CAST_CAP)
        .map(|member| {
            let url = images.resolve_opt(member.profile_path.as_deref(), QualityTier::Low);
            (member, CardArt::from_url(url))
        })
        .collect();

    let pictures: Vec<CardArt> = bundle
        .images
        .pictures()
        .iter()
        .take(DETAIL_PICTURE_CAP)
        .map(|pic| {
            let url = images.resolve_opt(Some(&pic.file_path), QualityTier::Original);
            CardArt::from_url(url)
        })
        .collect();

    DetailView {
        movie: bundle.movie,
        director,
        genre_names,
        poster: CardArt::from_url(poster_url),
        cast,
        pictures,
    }
}

/// Upload one texture from a cached file if available. Returns true when a
/// texture was uploaded this call.
fn try_lazy_upload(ctx: &eg::Context, art: &mut CardArt) -> bool {
    if art.tex.is_some() || matches!(art.state, PosterState::Failed) {
        return false;
    }
    if art.path.is_none() {
        if matches!(art.state, PosterState::Pending) {
            return false; // still downloading
        }
        art.path = find_any_by_key(&art.key);
    }
    let Some(path) = art.path.clone() else {
        return false;
    };
    match load_texture_from_path(ctx, &path, &art.key) {
        Ok(tex) => {
            art.tex = Some(tex);
            art.state = PosterState::Ready;
            true
        }
        Err(e) => {
            debug!("texture upload failed: {e}");
            art.state = PosterState::Failed;
            false
        }
    }
}

fn load_texture_from_path(
    ctx: &eg::Context,
    path: &std::path::Path,
    cache_name: &str,
) -> Result<TextureHandle, String> {
    let (w, h, bytes) = load_rgba_image(path)?;
    let img = ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &bytes);
    Ok(ctx.load_texture(cache_name.to_string(), img, eg::TextureOptions::LINEAR))
}

// ========== App impl ==========
impl eframe::App for App {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        // Keep frames moving; debounce timers and worker completions depend
        // on regular polling.
        ctx.request_repaint_after(Duration::from_millis(100));

        if !self.did_init {
            self.did_init = true;
            let route = self.start_route.take().unwrap_or_default();
            self.navigate(route);
        }

        self.poll_fetch_msgs();
        self.poll_poster_done();

        let now = Instant::now();
        if let Some(req) = self.autocomplete.poll(now) {
            self.start_suggestion_fetch(req.seq, req.query);
        }

        self.tick_hero();
        self.upload_textures(ctx);

        self.ui_render_header(ctx);
        self.ui_render_content(ctx);

        if let Some(route) = self.pending_nav.take() {
            self.navigate(route);
        }
    }
}
