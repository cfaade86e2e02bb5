// SPDX-License-Identifier: MPL-2.0
//! Full-screen detail viewer.
//!
//! The component owns the pager, the gesture controller of the visible image
//! and the recognizer feeding it. It renders through [`canvas::DetailCanvas`]
//! and reports page changes and dismissal to the application as [`Effect`]s.
//!
//! Dismissal is a two-step handshake: the viewer emits [`Effect::Dismissed`],
//! the application answers with [`State::start_collapse`] targeting the
//! thumbnail, and [`Effect::Closed`] follows once the collapse has run.

pub mod canvas;
pub mod hero;
pub mod pager;
pub mod recognizer;

use crate::config::{PAGE_MS, SETTLE_MS};
use crate::domain::gesture::{GestureController, Outcome, Phase, ViewerVariant};
use crate::domain::transform::{Extent, Transform};
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::animation::{Easing, TransformTween, Tween};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use canvas::{DetailCanvas, Sprite};
use hero::{fitted_frame, transformed_frame, Direction, Hero};
use iced::widget::{Canvas, Container, Stack, Text};
use iced::{alignment, Color, Element, Length, Rectangle, Size, Task};
use pager::{Pager, Release};
use recognizer::{Gesture, Input, Recognizer, DOUBLE_TAP_WINDOW};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    Input(Input),
    /// Animation frame.
    Tick(Instant),
    Resized(Size),
    /// Escape key.
    Close,
    NextPage,
    PreviousPage,
    /// Delivered one update after a gesture decided to dismiss.
    Dismiss,
}

/// Events the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The visible page changed.
    PageChanged(usize),
    /// The viewer wants to close on `index`; start the collapse.
    Dismissed { index: usize },
    /// The collapse finished; return to the gallery on `index`.
    Closed { index: usize },
}

/// Which component receives the current one-finger drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PanOwner {
    #[default]
    None,
    Image,
    Pager,
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub images: &'a ImageStore,
}

#[derive(Debug, Clone)]
pub struct State {
    variant: ViewerVariant,
    pager: Pager,
    controller: GestureController,
    recognizer: Recognizer,
    pan_owner: PanOwner,
    container: Size,
    content: Option<Extent>,
    settle: Option<TransformTween>,
    strip: Option<Tween<f32>>,
    hero: Option<Hero>,
    transition: Duration,
    clock: Instant,
    chrome_visible: bool,
    /// Time of a single tap that may still turn into a double tap.
    pending_tap: Option<Instant>,
}

impl State {
    /// Opens the viewer on `index` of `len` images.
    ///
    /// `variant` is resolved against `len`; `content` is the natural size of
    /// the image at `index` when already known.
    #[must_use]
    pub fn new(
        variant: ViewerVariant,
        len: usize,
        index: usize,
        container: Size,
        content: Option<Extent>,
        transition: Duration,
        now: Instant,
    ) -> Self {
        let variant = variant.resolve(len);
        let mut state = Self {
            variant,
            pager: Pager::new(len, index),
            controller: GestureController::new(variant.profile()),
            recognizer: Recognizer::new(),
            pan_owner: PanOwner::None,
            container,
            content,
            settle: None,
            strip: None,
            hero: None,
            transition,
            clock: now,
            chrome_visible: true,
            pending_tap: None,
        };
        state.apply_geometry();
        log::debug!("Detail viewer opened on #{} as {:?}", state.pager.index(), variant);
        state
    }

    #[must_use]
    pub fn variant(&self) -> ViewerVariant {
        self.variant
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.pager.index()
    }

    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    #[must_use]
    pub fn controller(&self) -> &GestureController {
        &self.controller
    }

    /// Returns true while any tween still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
            || self.strip.is_some()
            || self.hero.is_some()
            || self.pending_tap.is_some()
    }

    /// Whether the page counter and hints are shown.
    #[must_use]
    pub fn chrome_visible(&self) -> bool {
        self.chrome_visible
    }

    #[must_use]
    pub fn is_collapsing(&self) -> bool {
        self.hero
            .as_ref()
            .is_some_and(|hero| hero.direction() == Direction::Collapse)
    }

    /// Records the natural size of image `index` once it is known.
    pub fn set_content(&mut self, index: usize, content: Extent) {
        if index != self.pager.index() || content.is_empty() {
            return;
        }
        if self.content != Some(content) {
            self.content = Some(content);
            self.apply_geometry();
            self.retarget_hero();
        }
    }

    /// Transform currently on screen, including a running settle animation.
    #[must_use]
    pub fn displayed_transform(&self) -> Transform {
        self.settle
            .map_or_else(|| self.controller.transform(), |tween| tween.sample(self.clock))
    }

    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        if let Some(hero) = &self.hero {
            return hero.backdrop(self.clock);
        }
        self.controller.profile().backdrop_opacity(
            self.displayed_transform(),
            self.controller.phase() == Phase::Pinching,
        )
    }

    /// Frame of the current image as drawn right now.
    #[must_use]
    pub fn displayed_frame(&self) -> Rectangle {
        if let Some(hero) = &self.hero {
            return hero.frame(self.clock);
        }
        transformed_frame(
            self.fitted_frame(),
            self.displayed_transform(),
            self.strip_offset(),
        )
    }

    /// Frame the current image occupies at identity.
    #[must_use]
    pub fn fitted_frame(&self) -> Rectangle {
        fitted_frame(self.container, self.content_or_container())
    }

    /// Starts the expand transition from a thumbnail frame.
    pub fn start_expand(&mut self, from: Rectangle, now: Instant) {
        self.clock = now;
        self.hero = Some(Hero::expand(from, self.fitted_frame(), self.transition, now));
    }

    /// Starts the collapse transition toward a thumbnail frame.
    pub fn start_collapse(&mut self, to: Rectangle, now: Instant) {
        self.clock = now;
        let from = self.displayed_frame();
        let opacity = self.backdrop_opacity();
        self.settle = None;
        self.strip = None;
        self.recognizer.reset();
        self.pending_tap = None;
        self.hero = Some(Hero::collapse(from, to, opacity, self.transition, now));
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        self.clock = now;
        match message {
            Message::Tick(_) => (self.advance_animations(now), Task::none()),
            Message::Input(input) => {
                if self.hero.is_some() {
                    return (Effect::None, Task::none());
                }
                self.flush_pending_tap(now);
                let gestures = self.recognizer.handle(input, now);
                let mut effect = Effect::None;
                let mut tasks = Vec::new();
                for gesture in gestures {
                    let (gesture_effect, task) = self.handle_gesture(gesture, now);
                    if gesture_effect != Effect::None {
                        effect = gesture_effect;
                    }
                    tasks.push(task);
                }
                (effect, Task::batch(tasks))
            }
            Message::Resized(size) => {
                self.container = size;
                self.apply_geometry();
                self.retarget_hero();
                let outcome = self.controller.settle();
                self.apply_outcome(outcome, now)
            }
            Message::Close => {
                if self.hero.is_some() {
                    return (Effect::None, Task::none());
                }
                let outcome = self.controller.dismiss();
                self.apply_outcome(outcome, now)
            }
            Message::NextPage => (self.step_page(true, now), Task::none()),
            Message::PreviousPage => (self.step_page(false, now), Task::none()),
            Message::Dismiss => {
                log::debug!("Dismissing detail viewer on #{}", self.pager.index());
                (
                    Effect::Dismissed {
                        index: self.pager.index(),
                    },
                    Task::none(),
                )
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let backdrop = Color {
            a: self.backdrop_opacity(),
            ..env.colors.backdrop
        };
        let surface = Canvas::new(DetailCanvas {
            backdrop,
            placeholder: palette::GRAY_800,
            sprites: self.sprites(env.images),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = Stack::new().push(surface);

        if self.chrome_visible && self.hero.is_none() {
            if self.variant == ViewerVariant::Paged && self.pager.len() > 1 {
                let counter = env
                    .i18n
                    .page_counter(self.pager.index() + 1, self.pager.len());
                layers = layers.push(chrome_label(counter, env.colors, alignment::Vertical::Top));
            }
            if env.images.is_failed(self.pager.index()) {
                layers = layers.push(chrome_label(
                    env.i18n.tr("detail-load-failed"),
                    env.colors,
                    alignment::Vertical::Center,
                ));
            } else if env.images.best(self.pager.index()).is_none() {
                layers = layers.push(chrome_label(
                    env.i18n.tr("detail-loading"),
                    env.colors,
                    alignment::Vertical::Center,
                ));
            } else if self.variant == ViewerVariant::Single {
                layers = layers.push(chrome_label(
                    env.i18n.tr("detail-close-hint"),
                    env.colors,
                    alignment::Vertical::Bottom,
                ));
            }
        }

        layers.width(Length::Fill).height(Length::Fill).into()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // GESTURES
    // ═══════════════════════════════════════════════════════════════════════

    fn handle_gesture(&mut self, gesture: Gesture, now: Instant) -> (Effect, Task<Message>) {
        match gesture {
            Gesture::PanStart => {
                self.finish_settle();
                self.pan_owner = if self.controller.begin_pan() {
                    PanOwner::Image
                } else if self.paging_allowed() {
                    self.strip = None;
                    PanOwner::Pager
                } else {
                    PanOwner::None
                };
                (Effect::None, Task::none())
            }
            Gesture::PanMove(translation) => {
                match self.pan_owner {
                    PanOwner::Image => self.controller.update_pan(translation),
                    PanOwner::Pager => self.pager.drag(translation.x),
                    PanOwner::None => {}
                }
                (Effect::None, Task::none())
            }
            Gesture::PanEnd {
                translation,
                elapsed,
            } => match std::mem::take(&mut self.pan_owner) {
                PanOwner::Image => {
                    let outcome = self.controller.end_pan();
                    self.apply_outcome(outcome, now)
                }
                PanOwner::Pager => {
                    let release = self
                        .pager
                        .release(translation.x, elapsed, self.container.width);
                    (self.apply_release(release, now), Task::none())
                }
                PanOwner::None => (Effect::None, Task::none()),
            },
            Gesture::PanCancel => match std::mem::take(&mut self.pan_owner) {
                PanOwner::Pager => {
                    let release = self.pager.cancel_drag();
                    (self.apply_release(release, now), Task::none())
                }
                PanOwner::Image | PanOwner::None => (Effect::None, Task::none()),
            },
            Gesture::PinchStart => {
                self.finish_settle();
                if !self.controller.begin_pinch() {
                    log::debug!("Pinch ignored in {:?}", self.controller.phase());
                }
                (Effect::None, Task::none())
            }
            Gesture::PinchMove(factor) => {
                self.controller.update_pinch(factor);
                (Effect::None, Task::none())
            }
            Gesture::PinchEnd => {
                let outcome = self.controller.end_pinch();
                self.apply_outcome(outcome, now)
            }
            Gesture::Tap(_) => {
                // Toggled once the tap can no longer become a double tap.
                self.pending_tap = Some(now);
                (Effect::None, Task::none())
            }
            Gesture::DoubleTap(_) => {
                self.pending_tap = None;
                let outcome = self.controller.double_tap();
                self.apply_outcome(outcome, now)
            }
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome, now: Instant) -> (Effect, Task<Message>) {
        match outcome {
            Outcome::None => (Effect::None, Task::none()),
            Outcome::Settle { from, to } => {
                self.settle = Some(Tween::new(
                    from,
                    to,
                    Duration::from_millis(SETTLE_MS),
                    Easing::EaseOut,
                    now,
                ));
                (Effect::None, Task::none())
            }
            Outcome::Dismiss => (Effect::None, Task::done(Message::Dismiss)),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PAGING
    // ═══════════════════════════════════════════════════════════════════════

    fn paging_allowed(&self) -> bool {
        self.variant == ViewerVariant::Paged
            && self.pager.len() > 1
            && !self.controller.is_zoomed()
            && self.controller.phase() == Phase::Idle
    }

    fn step_page(&mut self, forward: bool, now: Instant) -> Effect {
        if self.hero.is_some() || self.recognizer.is_tracking() || !self.paging_allowed() {
            return Effect::None;
        }
        match self.pager.step(forward, self.container.width) {
            Some(release) => self.apply_release(release, now),
            None => Effect::None,
        }
    }

    fn apply_release(&mut self, release: Release, now: Instant) -> Effect {
        let from_offset = release.from_offset();
        self.strip = (from_offset != 0.0).then(|| {
            Tween::new(
                from_offset,
                0.0,
                Duration::from_millis(PAGE_MS),
                Easing::EaseOut,
                now,
            )
        });

        match release {
            Release::Moved { index, .. } => {
                self.controller.reset();
                self.settle = None;
                self.content = None;
                self.apply_geometry();
                log::debug!("Paged to #{index}");
                Effect::PageChanged(index)
            }
            Release::Stay { .. } => Effect::None,
        }
    }

    fn strip_offset(&self) -> f32 {
        self.strip
            .map_or_else(|| self.pager.drag_offset(), |tween| tween.sample(self.clock))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ANIMATION
    // ═══════════════════════════════════════════════════════════════════════

    fn advance_animations(&mut self, now: Instant) -> Effect {
        self.flush_pending_tap(now);
        if self.settle.is_some_and(|tween| tween.is_complete(now)) {
            self.settle = None;
        }
        if self.strip.is_some_and(|tween| tween.is_complete(now)) {
            self.strip = None;
        }
        let finished = self
            .hero
            .as_ref()
            .filter(|hero| hero.is_complete(now))
            .map(Hero::direction);
        match finished {
            Some(Direction::Expand) => {
                self.hero = None;
                Effect::None
            }
            Some(Direction::Collapse) => {
                self.hero = None;
                Effect::Closed {
                    index: self.pager.index(),
                }
            }
            None => Effect::None,
        }
    }

    /// Applies a single tap's chrome toggle once the double-tap window closed.
    fn flush_pending_tap(&mut self, now: Instant) {
        let expired = self
            .pending_tap
            .is_some_and(|at| now.saturating_duration_since(at) > DOUBLE_TAP_WINDOW);
        if expired {
            self.pending_tap = None;
            self.chrome_visible = !self.chrome_visible;
        }
    }

    /// Points a running expand at the current fitted frame.
    fn retarget_hero(&mut self) {
        let fitted = self.fitted_frame();
        if let Some(hero) = self.hero.as_mut() {
            hero.retarget_expand(fitted);
        }
    }

    /// A new gesture takes over from a running settle at its target.
    fn finish_settle(&mut self) {
        self.settle = None;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LAYOUT
    // ═══════════════════════════════════════════════════════════════════════

    fn content_or_container(&self) -> Extent {
        self.content
            .unwrap_or_else(|| Extent::new(self.container.width, self.container.height))
    }

    fn apply_geometry(&mut self) {
        let container = Extent::new(self.container.width, self.container.height);
        let fitted = self.fitted_frame();
        self.controller
            .set_geometry(container, Extent::new(fitted.width, fitted.height));
    }

    fn sprites(&self, images: &ImageStore) -> Vec<Sprite> {
        let handle = |index: usize| images.best(index).map(|data| data.handle.clone());

        if let Some(hero) = &self.hero {
            return vec![Sprite {
                handle: handle(self.pager.index()),
                frame: hero.frame(self.clock),
            }];
        }

        let strip = self.strip_offset();
        let show_neighbours = self.variant == ViewerVariant::Paged && strip != 0.0;
        self.pager
            .visible_pages()
            .filter(|page| page.slot == 0 || show_neighbours)
            .map(|page| {
                let frame = if page.slot == 0 {
                    self.displayed_frame()
                } else {
                    let natural = images
                        .natural_size(page.index)
                        .unwrap_or_else(|| Extent::new(self.container.width, self.container.height));
                    transformed_frame(
                        fitted_frame(self.container, natural),
                        Transform::IDENTITY,
                        page.slot as f32 * self.container.width + strip,
                    )
                };
                Sprite {
                    handle: handle(page.index),
                    frame,
                }
            })
            .collect()
    }
}

fn chrome_label<'a>(
    label: String,
    colors: &ColorScheme,
    vertical: alignment::Vertical,
) -> Element<'a, Message> {
    let badge = Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(
            colors.overlay_background,
            colors.overlay_text,
        ));

    Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(vertical)
        .into()
}
