// SPDX-License-Identifier: MPL-2.0
//! Gallery component: wires the sequencer, image loading, caches and scroll
//! tracking to the widgets of the gallery screen.

use super::{drawer, empty_state, filmstrip, sidebar, stage, year_filter};
use crate::app::config::Config;
use crate::content::image_url::{self, ImageParams};
use crate::domain::{Artwork, ArtworkId, Catalog};
use crate::error::Error;
use crate::gallery::filmstrip::{scroll_target, StripMetrics};
use crate::gallery::grouping::{self, YearFilter};
use crate::gallery::section_tracker::{SectionMetrics, SectionTracker};
use crate::gallery::swipe::{Swipe, SwipeTracker};
use crate::gallery::{self, Effect as Step, ImageLoad, Sequencer, Ticket, Timing, Trigger};
use crate::i18n::fluent::I18n;
use crate::media::{self, CacheConfig, ImageCache, ImageData};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ColorScheme;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Column, Container, Id, Row, Stack};
use iced::{touch, Element, Length, Task};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Identifier of the grouped artwork list in the sidebar.
pub const LIST_SCROLLABLE_ID: &str = "gallery-artwork-list";
/// Identifier of the thumbnail strip.
pub const FILMSTRIP_SCROLLABLE_ID: &str = "gallery-filmstrip";

/// Frame interval while a crossfade or fade-in runs.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Interval while only auto-advance or pause deadlines are pending.
pub const IDLE_TICK: Duration = Duration::from_millis(100);

const THUMBNAIL_CACHE_BYTES: usize = 32 * 1024 * 1024;
const THUMBNAIL_CACHE_IMAGES: usize = 128;
/// Stage images kept regardless of the cache budget (both crossfade layers).
const RESIDENT_STAGE_IMAGES: usize = 2;

/// Gallery behaviour derived from the settings file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub timing: Timing,
    pub auto_advance: bool,
    pub fade_in: Duration,
    pub display: ImageParams,
    pub thumbnail: ImageParams,
    pub cache: CacheConfig,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            timing: config.timing(),
            auto_advance: config.auto_advance(),
            fade_in: config.fade_in(),
            display: config.display_params(),
            thumbnail: config.thumbnail_params(),
            cache: config.cache_config(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    Next,
    Previous,
    StageClicked,
    Select(ArtworkId),
    FilterChanged(YearFilter),
    JumpToYear(YearFilter),
    ListScrolled {
        offset: f32,
        height: f32,
    },
    FilmstripScrolled {
        offset: f32,
        width: f32,
    },
    /// A display-size image finished loading (stage or prefetch).
    ImageLoaded {
        reference: String,
        result: Result<ImageData, Error>,
    },
    ThumbnailLoaded {
        reference: String,
        result: Result<ImageData, Error>,
    },
    Retry,
    ToggleAutoAdvance,
    ToggleDrawer,
    CloseDrawer,
    ToggleInfo,
    Inquire,
    WindowResized {
        width: f32,
    },
    Touch(touch::Event),
    Escape,
}

/// What the gallery asks of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open a purchase inquiry for this artwork.
    Inquire(ArtworkId),
    /// Show an info toast with this message key.
    Notify(&'static str),
}

/// Rendering context handed down from the application.
#[derive(Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

pub struct State {
    catalog: Catalog,
    settings: Settings,
    filter: YearFilter,
    sequencer: Sequencer,
    image_load: ImageLoad,
    /// Stage load waiting for its image: the ticket and the resolved reference.
    awaiting: Option<(Ticket, String)>,
    images: ImageCache,
    thumbnails: ImageCache,
    resident: Vec<(String, ImageData)>,
    in_flight: HashSet<String>,
    tracker: SectionTracker,
    strip_offset: f32,
    strip_width: Option<f32>,
    swipe: SwipeTracker,
    /// Visitor's auto-advance choice; the compact layout overrides it.
    auto_advance: bool,
    window_width: f32,
    compact: bool,
    drawer_open: bool,
    info_visible: bool,
    mounted: bool,
    now: Instant,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("artworks", &self.catalog.len())
            .field("filter", &self.filter)
            .field("current", &self.sequencer.current())
            .field("phase", &self.image_load.phase())
            .field("compact", &self.compact)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Mounts the gallery on `catalog` with the first artwork current.
    pub fn new(
        catalog: Catalog,
        settings: Settings,
        window_width: f32,
        now: Instant,
    ) -> (Self, Task<Message>) {
        let compact = gallery::is_compact(window_width);
        let mut state = Self {
            sequencer: Sequencer::new(&catalog, settings.timing, false, now),
            tracker: SectionTracker::new(Vec::new()),
            catalog,
            filter: YearFilter::All,
            image_load: ImageLoad::new(settings.fade_in),
            awaiting: None,
            images: ImageCache::new(settings.cache),
            thumbnails: ImageCache::new(CacheConfig::new(
                THUMBNAIL_CACHE_BYTES,
                THUMBNAIL_CACHE_IMAGES,
            )),
            resident: Vec::new(),
            in_flight: HashSet::new(),
            strip_offset: 0.0,
            strip_width: None,
            swipe: SwipeTracker::default(),
            auto_advance: settings.auto_advance,
            window_width,
            compact,
            drawer_open: false,
            info_visible: false,
            mounted: false,
            settings,
            now,
        };
        let task = state.mount(now);
        (state, task)
    }

    /// Re-mounts after [`State::teardown`]: filter back to all, first
    /// artwork current, caches kept.
    pub fn remount(&mut self, now: Instant) -> Task<Message> {
        self.mount(now)
    }

    /// Swaps in a refreshed catalog and re-mounts on it.
    pub fn replace_catalog(&mut self, catalog: Catalog, now: Instant) -> Task<Message> {
        self.sequencer.teardown();
        self.catalog = catalog;
        self.mount(now)
    }

    /// Stops every timer. Nothing fires until the next mount.
    pub fn teardown(&mut self) {
        self.sequencer.teardown();
        self.image_load.reset();
        self.awaiting = None;
        self.swipe.cancel();
        self.drawer_open = false;
        self.mounted = false;
        tracing::debug!("gallery torn down");
    }

    fn mount(&mut self, now: Instant) -> Task<Message> {
        self.now = now;
        self.filter = YearFilter::All;
        self.sequencer = Sequencer::new(
            &self.catalog,
            self.settings.timing,
            self.auto_advance_allowed(),
            now,
        );
        self.image_load.reset();
        self.awaiting = None;
        self.reset_tracker();
        self.swipe.cancel();
        self.drawer_open = false;
        self.strip_offset = 0.0;
        self.mounted = true;
        tracing::debug!(artworks = self.catalog.len(), "gallery mounted");

        let Some(current) = self.sequencer.current().cloned() else {
            return Task::none();
        };
        let ticket = self.image_load.begin(current);
        Task::batch([
            self.request_display(ticket),
            self.prefetch_neighbours(),
            self.load_thumbnails(),
            operation::snap_to(Id::new(FILMSTRIP_SCROLLABLE_ID), RelativeOffset::START),
            operation::snap_to(Id::new(LIST_SCROLLABLE_ID), RelativeOffset::START),
        ])
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        self.now = now;
        match message {
            Message::Tick(at) => {
                self.now = at;
                let steps = self.sequencer.tick(at);
                (Effect::None, self.apply(steps))
            }
            Message::Next | Message::StageClicked => {
                let steps = self.sequencer.next(Trigger::Manual, now);
                (Effect::None, self.apply(steps))
            }
            Message::Previous => {
                let steps = self.sequencer.previous(Trigger::Manual, now);
                (Effect::None, self.apply(steps))
            }
            Message::Select(id) => (Effect::None, self.select(id)),
            Message::FilterChanged(filter) => (Effect::None, self.change_filter(filter)),
            Message::JumpToYear(target) => {
                let y = self.tracker.jump(target, now);
                let task = operation::scroll_to(
                    Id::new(LIST_SCROLLABLE_ID),
                    AbsoluteOffset { x: 0.0, y },
                );
                (Effect::None, task)
            }
            Message::ListScrolled { offset, height } => {
                if let Some(active) = self.tracker.on_scroll(offset, height, now) {
                    tracing::trace!(?active, "section indicator moved");
                }
                (Effect::None, Task::none())
            }
            Message::FilmstripScrolled { offset, width } => {
                self.strip_offset = offset;
                self.strip_width = Some(width);
                (Effect::None, Task::none())
            }
            Message::ImageLoaded { reference, result } => {
                self.on_image_loaded(reference, result);
                (Effect::None, Task::none())
            }
            Message::ThumbnailLoaded { reference, result } => {
                self.in_flight.remove(&reference);
                match result {
                    Ok(image) => {
                        self.thumbnails.insert(reference, image);
                    }
                    Err(err) => tracing::debug!(%reference, %err, "thumbnail failed to load"),
                }
                (Effect::None, Task::none())
            }
            Message::Retry => {
                let task = match self.image_load.retry() {
                    Some(ticket) => self.request_display(ticket),
                    None => Task::none(),
                };
                (Effect::None, task)
            }
            Message::ToggleAutoAdvance => {
                if self.compact {
                    return (Effect::None, Task::none());
                }
                self.auto_advance = self.sequencer.toggle_auto_advance(now);
                let key = if self.auto_advance {
                    "notification-auto-advance-on"
                } else {
                    "notification-auto-advance-off"
                };
                (Effect::Notify(key), Task::none())
            }
            Message::ToggleDrawer => {
                self.drawer_open = self.compact && !self.drawer_open;
                if self.drawer_open {
                    // The drawer list opens scrolled to the top.
                    self.reset_tracker();
                }
                (Effect::None, Task::none())
            }
            Message::CloseDrawer | Message::Escape => {
                self.drawer_open = false;
                (Effect::None, Task::none())
            }
            Message::ToggleInfo => {
                self.info_visible = !self.info_visible;
                (Effect::None, Task::none())
            }
            Message::Inquire => {
                let effect = self
                    .current_artwork()
                    .filter(|artwork| artwork.price_status().is_available())
                    .map_or(Effect::None, |artwork| Effect::Inquire(artwork.id().clone()));
                (effect, Task::none())
            }
            Message::WindowResized { width } => {
                self.resize(width, now);
                (Effect::None, Task::none())
            }
            Message::Touch(event) => {
                let steps = match event {
                    touch::Event::FingerPressed { id, position } => {
                        self.swipe.press(id, position);
                        Vec::new()
                    }
                    touch::Event::FingerLifted { id, position } => {
                        match self.swipe.lift(id, position) {
                            Some(Swipe::Left) => self.sequencer.next(Trigger::Manual, now),
                            Some(Swipe::Right) => self.sequencer.previous(Trigger::Manual, now),
                            None => Vec::new(),
                        }
                    }
                    touch::Event::FingerLost { .. } => {
                        self.swipe.cancel();
                        Vec::new()
                    }
                    touch::Event::FingerMoved { .. } => Vec::new(),
                };
                (Effect::None, self.apply(steps))
            }
        }
    }

    fn select(&mut self, id: ArtworkId) -> Task<Message> {
        let Some(artwork) = self.catalog.get(&id) else {
            tracing::debug!(%id, "ignoring selection of unknown artwork");
            return Task::none();
        };
        // Picking an artwork hidden by the filter clears the filter first.
        if !self.filter.matches(artwork) {
            self.filter = YearFilter::All;
            self.sequencer
                .set_order(grouping::visible_ids(&self.catalog, self.filter), self.now);
        }
        self.drawer_open = false;
        let steps = self.sequencer.request_navigate(id, Trigger::Manual, self.now);
        self.apply(steps)
    }

    /// Row geometry of the grouped list on screen: the sidebar when wide,
    /// the drawer when compact.
    #[must_use]
    pub fn section_metrics(&self) -> SectionMetrics {
        if self.compact {
            SectionMetrics::drawer()
        } else {
            SectionMetrics::default()
        }
    }

    fn reset_tracker(&mut self) {
        self.tracker = SectionTracker::new(
            self.section_metrics()
                .offsets(&grouping::group_by_year(self.catalog.artworks())),
        );
    }

    fn change_filter(&mut self, filter: YearFilter) -> Task<Message> {
        if filter == self.filter {
            return Task::none();
        }
        self.filter = filter;
        self.sequencer
            .set_order(grouping::visible_ids(&self.catalog, filter), self.now);
        self.image_load.reset();
        self.awaiting = None;
        self.strip_offset = 0.0;

        let rewind = operation::snap_to(Id::new(FILMSTRIP_SCROLLABLE_ID), RelativeOffset::START);
        let Some(target) = grouping::first_visible(&self.catalog, filter).map(|a| a.id().clone())
        else {
            return rewind;
        };

        let steps = self.sequencer.jump_to(target.clone(), self.now);
        let shows = steps.iter().any(|step| matches!(step, Step::Show(_)));
        let mut tasks = vec![rewind, self.apply(steps)];
        if !shows {
            // Already current: the transition is skipped but loading restarts.
            let ticket = self.image_load.begin(target);
            tasks.push(self.request_display(ticket));
            tasks.push(self.prefetch_neighbours());
        }
        Task::batch(tasks)
    }

    fn resize(&mut self, width: f32, now: Instant) {
        self.window_width = width;
        let compact = gallery::is_compact(width);
        if compact == self.compact {
            return;
        }
        self.compact = compact;
        self.strip_width = None;
        self.reset_tracker();
        if compact {
            self.sequencer.set_auto_advance(false, now);
        } else {
            self.drawer_open = false;
            self.sequencer.set_auto_advance(self.auto_advance, now);
        }
        tracing::debug!(compact, width, "layout changed");
    }

    fn apply(&mut self, steps: Vec<Step>) -> Task<Message> {
        let mut tasks = Vec::new();
        for step in steps {
            match step {
                Step::Show(id) => {
                    let ticket = self.image_load.begin(id.clone());
                    tasks.push(self.request_display(ticket));
                    tasks.push(self.prefetch_neighbours());
                    tasks.push(self.follow_in_filmstrip(&id));
                }
                Step::Settled => {}
            }
        }
        Task::batch(tasks)
    }

    /// Points the stage at `ticket`'s artwork, from cache when possible.
    fn request_display(&mut self, ticket: Ticket) -> Task<Message> {
        let Some(reference) = self.display_reference(&ticket.artwork) else {
            self.image_load.fail(&ticket, "error-content");
            return Task::none();
        };
        if let Some(image) = self.images.get(&reference) {
            self.keep_resident(reference, image);
            self.image_load.succeed(&ticket, self.now);
            self.awaiting = None;
            return Task::none();
        }
        self.awaiting = Some((ticket, reference.clone()));
        self.fetch(reference)
    }

    fn on_image_loaded(&mut self, reference: String, result: Result<ImageData, Error>) {
        self.in_flight.remove(&reference);
        let outcome = match result {
            Ok(image) => {
                self.images.insert(reference.clone(), image.clone());
                let stats = self.images.stats();
                tracing::debug!(
                    %reference,
                    cached = self.images.len(),
                    bytes = self.images.memory_usage(),
                    hits = stats.hits,
                    misses = stats.misses,
                    evictions = stats.evictions,
                    "image cached"
                );
                Ok(image)
            }
            Err(err) => {
                tracing::warn!(%reference, %err, "image failed to load");
                Err(err.i18n_key())
            }
        };

        let Some((ticket, awaited)) = self.awaiting.take() else {
            return;
        };
        if awaited != reference {
            self.awaiting = Some((ticket, awaited));
            return;
        }
        match outcome {
            Ok(image) => {
                self.keep_resident(reference, image);
                self.image_load.succeed(&ticket, self.now);
            }
            Err(key) => {
                self.image_load.fail(&ticket, key);
            }
        }
    }

    fn keep_resident(&mut self, reference: String, image: ImageData) {
        self.resident.retain(|(r, _)| *r != reference);
        self.resident.insert(0, (reference, image));
        self.resident.truncate(RESIDENT_STAGE_IMAGES);
    }

    fn fetch(&mut self, reference: String) -> Task<Message> {
        if !self.in_flight.insert(reference.clone()) {
            return Task::none();
        }
        Task::perform(media::load(reference.clone()), move |result| {
            Message::ImageLoaded { reference, result }
        })
    }

    /// Warms the cache with the artworks either side of `current`.
    fn prefetch_neighbours(&mut self) -> Task<Message> {
        let order = self.sequencer.order();
        let Some(index) = self
            .sequencer
            .current()
            .and_then(|current| order.iter().position(|id| id == current))
        else {
            return Task::none();
        };
        let len = order.len();
        if len < 2 {
            return Task::none();
        }
        let neighbours = [order[(index + 1) % len].clone(), order[(index + len - 1) % len].clone()];

        let references: Vec<String> = neighbours
            .iter()
            .filter_map(|id| self.display_reference(id))
            .collect();
        let missing = self.images.missing(references.iter().map(String::as_str));
        Task::batch(missing.into_iter().map(|reference| self.fetch(reference)))
    }

    fn load_thumbnails(&mut self) -> Task<Message> {
        let references: Vec<String> = self
            .catalog
            .artworks()
            .iter()
            .map(|artwork| image_url::resolve(artwork.thumbnail(), self.settings.thumbnail))
            .collect();
        let missing = self.thumbnails.missing(references.iter().map(String::as_str));
        let tasks: Vec<Task<Message>> = missing
            .into_iter()
            .filter(|reference| self.in_flight.insert(reference.clone()))
            .map(|reference| {
                Task::perform(media::load(reference.clone()), move |result| {
                    Message::ThumbnailLoaded { reference, result }
                })
            })
            .collect();
        Task::batch(tasks)
    }

    fn follow_in_filmstrip(&mut self, id: &ArtworkId) -> Task<Message> {
        let order = self.sequencer.order();
        let Some(index) = order.iter().position(|candidate| candidate == id) else {
            return Task::none();
        };
        let viewport = self.strip_width.unwrap_or_else(|| self.estimated_strip_width());
        match scroll_target(
            &StripMetrics::default(),
            index,
            order.len(),
            self.strip_offset,
            viewport,
        ) {
            Some(x) => {
                self.strip_offset = x;
                operation::scroll_to(
                    Id::new(FILMSTRIP_SCROLLABLE_ID),
                    AbsoluteOffset { x, y: 0.0 },
                )
            }
            None => Task::none(),
        }
    }

    fn estimated_strip_width(&self) -> f32 {
        if self.compact {
            self.window_width
        } else {
            (self.window_width - sizing::SIDEBAR_WIDTH).max(0.0)
        }
    }

    fn auto_advance_allowed(&self) -> bool {
        self.auto_advance && !self.compact
    }

    /// Tick interval the gallery needs right now, if any.
    #[must_use]
    pub fn wake_interval(&self, now: Instant) -> Option<Duration> {
        if !self.mounted {
            return None;
        }
        let animating = self.sequencer.is_animating()
            || self.sequencer.crossfade().is_fading(now)
            || self.image_load.is_fading(now);
        if animating {
            Some(ANIMATION_TICK)
        } else if self.sequencer.next_deadline().is_some() {
            Some(IDLE_TICK)
        } else {
            None
        }
    }

    /// Resolved display-size reference of an artwork.
    #[must_use]
    pub fn display_reference(&self, id: &ArtworkId) -> Option<String> {
        self.catalog
            .get(id)
            .map(|artwork| image_url::resolve(artwork.image(), self.settings.display))
    }

    #[must_use]
    pub fn thumbnail_reference(&self, artwork: &Artwork) -> String {
        image_url::resolve(artwork.thumbnail(), self.settings.thumbnail)
    }

    /// Decoded display image for `id`, if loaded.
    #[must_use]
    pub fn display_image(&self, id: &ArtworkId) -> Option<&ImageData> {
        let reference = self.display_reference(id)?;
        self.images.peek(&reference).or_else(|| {
            self.resident
                .iter()
                .find(|(r, _)| *r == reference)
                .map(|(_, image)| image)
        })
    }

    #[must_use]
    pub fn thumbnail_image(&self, artwork: &Artwork) -> Option<&ImageData> {
        self.thumbnails.peek(&self.thumbnail_reference(artwork))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> YearFilter {
        self.filter
    }

    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    #[must_use]
    pub fn image_load(&self) -> &ImageLoad {
        &self.image_load
    }

    #[must_use]
    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    #[must_use]
    pub fn current_artwork(&self) -> Option<&Artwork> {
        self.sequencer
            .current()
            .and_then(|id| self.catalog.get(id))
    }

    /// One-based index of the current artwork within the visible list, and
    /// the list length.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        let order = self.sequencer.order();
        let current = self.sequencer.current()?;
        let index = order.iter().position(|id| id == current)?;
        Some((index + 1, order.len()))
    }

    /// Artworks passing the filter, in display order.
    pub fn visible_artworks(&self) -> impl Iterator<Item = &Artwork> {
        let filter = self.filter;
        self.catalog
            .artworks()
            .iter()
            .filter(move |artwork| filter.matches(artwork))
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn is_info_visible(&self) -> bool {
        self.info_visible
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        if self.catalog.is_empty() {
            return empty_state::view(env);
        }

        let filter_bar = year_filter::view(self, env);
        let strip = filmstrip::view(self, env);

        if self.compact {
            let body = Column::new()
                .push(stage::view(self, env))
                .push(filter_bar)
                .push(strip)
                .width(Length::Fill)
                .height(Length::Fill);
            if self.drawer_open {
                Stack::new().push(body).push(drawer::view(self, env)).into()
            } else {
                body.into()
            }
        } else {
            let main = Column::new()
                .push(stage::view(self, env))
                .push(filter_bar)
                .push(strip)
                .width(Length::Fill)
                .height(Length::Fill);
            Container::new(
                Row::new()
                    .push(sidebar::view(self, env))
                    .push(main)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        }
    }
}
