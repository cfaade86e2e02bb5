// SPDX-License-Identifier: MPL-2.0
//! End-to-end gesture scenarios driven through the public viewer API.

use iced::{Point, Rectangle, Size};
use iced_lightbox::domain::gesture::{
    GestureController, GestureProfile, Outcome, Phase, ViewerVariant,
};
use iced_lightbox::domain::transform::{Extent, Offset, Transform};
use iced_lightbox::ui::detail::pager::{Pager, Release};
use iced_lightbox::ui::detail::recognizer::{Gesture, Input, Recognizer};
use iced_lightbox::ui::detail::{self, Effect};
use std::time::{Duration, Instant};

const CONTAINER: Extent = Extent::new(800.0, 600.0);
const CONTENT: Extent = Extent::new(800.0, 533.0);

fn controller(profile: GestureProfile) -> GestureController {
    let mut controller = GestureController::new(profile);
    controller.set_geometry(CONTAINER, CONTENT);
    controller
}

fn viewer(variant: ViewerVariant, len: usize, index: usize) -> (detail::State, Instant) {
    let now = Instant::now();
    let state = detail::State::new(
        variant,
        len,
        index,
        Size::new(CONTAINER.width, CONTAINER.height),
        Some(Extent::new(1200.0, 800.0)),
        Duration::from_millis(300),
        now,
    );
    (state, now)
}

fn effects(state: &mut detail::State, inputs: &[Input], now: Instant) -> Vec<Effect> {
    inputs
        .iter()
        .map(|input| state.handle_message(detail::Message::Input(*input), now).0)
        .filter(|effect| *effect != Effect::None)
        .collect()
}

#[test]
fn zoom_pan_then_pinch_out_dismisses_paged_viewer() {
    let mut controller = controller(GestureProfile::paged());

    assert!(controller.begin_pinch());
    controller.update_pinch(2.0);
    assert!(matches!(controller.end_pinch(), Outcome::Settle { .. } | Outcome::None));
    assert!(controller.is_zoomed());

    assert!(controller.begin_pan());
    controller.update_pan(Offset::new(10_000.0, 0.0));
    let Outcome::Settle { to, .. } = controller.end_pan() else {
        panic!("overscrolled pan should settle back into bounds");
    };
    // At 2x an 800 wide image overflows by 400 on each side.
    assert!((to.offset.x - 400.0).abs() < 1e-3);

    assert!(controller.begin_pinch());
    controller.update_pinch(0.3);
    assert_eq!(controller.end_pinch(), Outcome::Dismiss);
    assert_eq!(controller.phase(), Phase::Dismissing);
    assert_eq!(controller.dismiss(), Outcome::None);
}

#[test]
fn single_viewer_fades_while_dragging_down() {
    let mut controller = controller(GestureProfile::single());

    assert!(controller.begin_pan());
    controller.update_pan(Offset::new(0.0, 125.0));
    assert!((controller.backdrop_opacity() - 0.5).abs() < 1e-3);

    controller.update_pan(Offset::new(0.0, 100.0));
    let outcome = controller.end_pan();
    assert_eq!(
        outcome,
        Outcome::Settle {
            from: Transform {
                offset: Offset::new(0.0, 100.0),
                ..Transform::IDENTITY
            },
            to: Transform::IDENTITY,
        }
    );
    assert!((controller.backdrop_opacity() - 1.0).abs() < 1e-6);
}

#[test]
fn recognizer_turns_mouse_drag_into_pan() {
    let mut recognizer = Recognizer::new();
    let now = Instant::now();

    assert!(recognizer.handle(Input::Press(Point::new(100.0, 100.0)), now).is_empty());
    let gestures = recognizer.handle(Input::Move(Point::new(100.0, 160.0)), now);
    assert_eq!(gestures.first(), Some(&Gesture::PanStart));

    let later = now + Duration::from_millis(400);
    let gestures = recognizer.handle(Input::Release(Point::new(100.0, 180.0)), later);
    assert_eq!(
        gestures,
        vec![Gesture::PanEnd {
            translation: Offset::new(0.0, 80.0),
            elapsed: Duration::from_millis(400),
        }]
    );
    assert!(!recognizer.is_tracking());
}

#[test]
fn pager_walks_to_the_last_page_and_resists_overscroll() {
    let mut pager = Pager::new(3, 0);
    let width = 800.0;

    assert!(matches!(pager.step(true, width), Some(Release::Moved { index: 1, .. })));
    pager.drag(-300.0);
    assert!(matches!(
        pager.release(-300.0, Duration::from_millis(700), width),
        Release::Moved { index: 2, .. }
    ));

    pager.drag(-300.0);
    assert!(pager.drag_offset() > -300.0);
    assert!(matches!(
        pager.release(-300.0, Duration::from_millis(700), width),
        Release::Stay { .. }
    ));
    assert_eq!(pager.index(), 2);
    assert_eq!(pager.step(true, width), None);
}

#[test]
fn swiping_the_viewer_changes_page() {
    let (mut state, now) = viewer(ViewerVariant::Auto, 5, 2);
    assert_eq!(state.variant(), ViewerVariant::Paged);

    let found = effects(
        &mut state,
        &[
            Input::Press(Point::new(600.0, 300.0)),
            Input::Move(Point::new(500.0, 300.0)),
            Input::Move(Point::new(300.0, 300.0)),
            Input::Release(Point::new(300.0, 300.0)),
        ],
        now,
    );
    assert_eq!(found, vec![Effect::PageChanged(3)]);
    assert_eq!(state.index(), 3);
}

#[test]
fn expand_then_escape_returns_to_the_tile() {
    let tile = Rectangle::new(Point::new(40.0, 200.0), Size::new(160.0, 107.0));
    let (mut state, now) = viewer(ViewerVariant::Single, 1, 0);

    state.start_expand(tile, now);
    assert!(state.is_animating());
    let settled = now + Duration::from_secs(1);
    state.handle_message(detail::Message::Tick(settled), settled);
    assert!(!state.is_animating());

    let (effect, _) = state.handle_message(detail::Message::Close, settled);
    assert_eq!(effect, Effect::None);
    let (effect, _) = state.handle_message(detail::Message::Dismiss, settled);
    assert_eq!(effect, Effect::Dismissed { index: 0 });

    state.start_collapse(tile, settled);
    assert!(state.is_collapsing());
    let done = settled + Duration::from_secs(1);
    let (effect, _) = state.handle_message(detail::Message::Tick(done), done);
    assert_eq!(effect, Effect::Closed { index: 0 });
}
