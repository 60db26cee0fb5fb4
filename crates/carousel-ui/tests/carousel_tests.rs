use std::cell::{Cell, RefCell};
use std::rc::Rc;

use carousel_testing::prelude::*;
use carousel_ui::{
    ActiveIndex, Carousel, CarouselConfig, CarouselError, GestureUpdate, PointerEvent,
    PointerEventKind, SnapDecision,
};
use web_time::Duration;

/// Unit sensitivity so pointer deltas equal release movement exactly.
fn linear_robot(count: usize) -> CarouselRobot {
    CarouselRobot::with_config(
        count,
        100.0,
        300.0,
        CarouselConfig::default().with_sensitivity(1.0),
    )
}

#[test]
fn initialises_on_first_item() {
    let robot = CarouselRobot::new(3, 100.0, 300.0);
    let carousel = robot.carousel();

    assert_eq!(carousel.len(), 3);
    assert_settled_on(carousel, robot.track(), 0);
    assert_eq!(carousel.active_index().prev, None);
    assert_eq!(carousel.active_index().next, Some(1));
    assert_eq!(robot.track().translation(), 100.0);
    assert_eq!(robot.track().transition(), Some(Duration::from_millis(300)));
}

#[test]
fn empty_track_is_a_configuration_error() {
    let result = Carousel::with_defaults(
        FakeTrack::with_items(Vec::new()),
        FakeViewport::new(300.0),
    );
    assert_eq!(result.err(), Some(CarouselError::EmptyTrack));
}

#[test]
fn invalid_config_is_rejected_before_touching_the_track() {
    let track = FakeTrack::uniform(3, 100.0);
    let result = Carousel::new(
        track.clone(),
        FakeViewport::new(300.0),
        CarouselConfig::default().with_sensitivity(-1.0),
    );
    assert!(matches!(result, Err(CarouselError::InvalidConfig(_))));
    assert!(track.snapshot().translations.is_empty());
}

#[test]
fn focus_item_centers_and_marks_exactly_one_item() {
    let robot = CarouselRobot::new(5, 100.0, 300.0);
    let carousel = robot.carousel();

    for index in [4, 0, 2, 3, 1] {
        carousel.focus_item(index);
        assert_settled_on(carousel, robot.track(), index);
    }
}

#[test]
fn focusing_the_active_item_twice_is_idempotent() {
    let robot = CarouselRobot::new(4, 100.0, 300.0);
    let carousel = robot.carousel();

    carousel.focus_item(2);
    let first = (carousel.active_index(), carousel.offset(), robot.track().active_items());
    carousel.focus_item(2);
    let second = (carousel.active_index(), carousel.offset(), robot.track().active_items());

    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "out of range")]
fn focusing_out_of_range_panics() {
    let robot = CarouselRobot::new(3, 100.0, 300.0);
    robot.carousel().focus_item(3);
}

#[test]
fn try_focus_item_reports_out_of_range() {
    let robot = CarouselRobot::new(3, 100.0, 300.0);
    assert_eq!(
        robot.carousel().try_focus_item(7),
        Err(CarouselError::IndexOutOfRange { index: 7, len: 3 })
    );
    assert_settled_on(robot.carousel(), robot.track(), 0);
}

#[test]
fn stepping_clamps_at_both_ends() {
    let robot = CarouselRobot::new(3, 100.0, 300.0);
    let carousel = robot.carousel();

    assert!(!carousel.step_previous());
    assert_settled_on(carousel, robot.track(), 0);

    assert!(carousel.step_next());
    assert!(carousel.step_next());
    assert!(!carousel.step_next());
    assert_settled_on(carousel, robot.track(), 2);

    assert!(carousel.step_previous());
    assert_settled_on(carousel, robot.track(), 1);
}

#[test]
fn drag_past_threshold_pages_forward() {
    let mut robot = linear_robot(3);
    robot.drag(200.0, 79.0);
    assert_settled_on(robot.carousel(), robot.track(), 1);
}

#[test]
fn drag_at_threshold_snaps_back() {
    let mut robot = linear_robot(3);
    robot.carousel().focus_item(1);
    robot.drag(200.0, 80.0);
    assert_settled_on(robot.carousel(), robot.track(), 1);
}

#[test]
fn drag_right_past_threshold_pages_back() {
    let mut robot = linear_robot(3);
    robot.carousel().focus_item(1);
    robot.drag(79.0, 200.0);
    assert_settled_on(robot.carousel(), robot.track(), 0);
}

#[test]
fn drag_past_threshold_on_last_item_restores() {
    let mut robot = linear_robot(3);
    robot.carousel().focus_item(2);

    let update = robot.drag(250.0, 0.0);

    assert!(matches!(update, GestureUpdate::Released(_)));
    assert_settled_on(robot.carousel(), robot.track(), 2);
}

#[test]
fn default_sensitivity_amplifies_short_drags() {
    // 80px of pointer travel scales to 128 > 120.
    let mut robot = CarouselRobot::new(3, 100.0, 300.0);
    robot.drag(200.0, 120.0);
    assert_settled_on(robot.carousel(), robot.track(), 1);
}

#[test]
fn live_drag_follows_pointer_without_transition() {
    let mut robot = linear_robot(3);
    robot.track().clear_history();

    robot.press(200.0);
    assert!(robot.carousel().is_dragging());
    assert!(robot.carousel().wants_moves());
    assert_eq!(robot.track().transition(), None);

    robot.move_to(150.0);
    assert_eq!(robot.carousel().offset(), 50.0);
    assert_eq!(robot.track().translation(), 50.0);
    // Settled position is untouched until release.
    assert_eq!(robot.carousel().final_position(), 100.0);

    robot.release(150.0);
    assert!(!robot.carousel().wants_moves());
    assert_eq!(robot.track().transition(), Some(Duration::from_millis(300)));
    assert_eq!(
        robot.track().snapshot().transitions,
        vec![None, Some(Duration::from_millis(300))]
    );
    assert_settled_on(robot.carousel(), robot.track(), 0);
}

#[test]
fn release_without_press_is_ignored() {
    let robot = CarouselRobot::new(3, 100.0, 300.0);
    let carousel = robot.carousel();
    carousel.focus_item(1);
    robot.track().clear_history();

    let up = PointerEvent::mouse(PointerEventKind::Up, 0.0);
    assert_eq!(carousel.handle_pointer(&up), GestureUpdate::Ignored);
    assert!(!up.is_consumed());
    assert_eq!(carousel.on_gesture_end(0), None);

    assert!(robot.track().snapshot().translations.is_empty());
    assert_settled_on(carousel, robot.track(), 1);
}

#[test]
fn moves_without_press_are_ignored() {
    let mut robot = linear_robot(3);
    assert_eq!(robot.move_to(-400.0), GestureUpdate::Ignored);
    assert_settled_on(robot.carousel(), robot.track(), 0);
}

#[test]
fn cancel_snaps_back_even_past_threshold() {
    let mut robot = linear_robot(3);
    robot.press(300.0);
    robot.move_to(0.0);
    assert_eq!(robot.carousel().offset(), -200.0);

    robot.cancel();

    assert_settled_on(robot.carousel(), robot.track(), 0);
    assert_eq!(robot.track().transition(), Some(Duration::from_millis(300)));
}

#[test]
fn repeated_press_restarts_from_new_origin() {
    let mut robot = linear_robot(3);
    robot.track().clear_history();

    robot.press(200.0);
    robot.move_to(0.0);
    assert_eq!(robot.carousel().offset(), -100.0);

    assert_eq!(robot.press(150.0), GestureUpdate::Started);
    assert!(robot.carousel().is_dragging());
    assert_eq!(robot.track().transition(), None);
    assert_eq!(robot.carousel().final_position(), 100.0);

    // Movement is measured from the second press only.
    robot.move_to(150.0);
    assert_eq!(robot.carousel().offset(), 100.0);
    assert_eq!(robot.track().transition(), None);

    robot.release(150.0);
    assert_eq!(
        robot.track().snapshot().transitions,
        vec![None, None, Some(Duration::from_millis(300))]
    );
    assert_settled_on(robot.carousel(), robot.track(), 0);
}

#[test]
fn compute_geometry_clamps_neighbours_to_new_items() {
    let mut robot = CarouselRobot::new(5, 100.0, 300.0);
    robot.carousel().focus_item(2);

    robot.track().set_items(uniform_row(3, 100.0));
    assert_eq!(robot.carousel().compute_geometry(), Ok(3));
    assert_eq!(robot.carousel().active_index(), ActiveIndex::new(2, 3));
    assert_eq!(robot.carousel().active_index().next, None);

    robot.drag(300.0, 100.0);
    assert_settled_on(robot.carousel(), robot.track(), 2);
    assert!(!robot.carousel().step_next());
}

#[test]
fn compute_geometry_clamps_active_item_past_the_end() {
    let robot = CarouselRobot::new(5, 100.0, 300.0);
    robot.carousel().focus_item(4);

    robot.track().set_items(uniform_row(2, 100.0));
    robot.carousel().compute_geometry().unwrap();

    assert_eq!(robot.carousel().active_index(), ActiveIndex::new(1, 2));
    assert!(robot.carousel().step_previous());
    assert_settled_on(robot.carousel(), robot.track(), 0);
}

#[test]
fn second_touch_point_does_not_steer_the_gesture() {
    let robot = linear_robot(3);
    let carousel = robot.carousel();

    carousel.handle_pointer(&PointerEvent::touch(PointerEventKind::Down, 1, 200.0));
    let intruder = PointerEvent::touch(PointerEventKind::Down, 2, 0.0);
    assert_eq!(carousel.handle_pointer(&intruder), GestureUpdate::Ignored);
    carousel.handle_pointer(&PointerEvent::touch(PointerEventKind::Move, 2, -500.0));
    carousel.handle_pointer(&PointerEvent::touch(PointerEventKind::Up, 2, -500.0));
    assert!(carousel.is_dragging());

    carousel.handle_pointer(&PointerEvent::touch(PointerEventKind::Move, 1, 50.0));
    carousel.handle_pointer(&PointerEvent::touch(PointerEventKind::Up, 1, 50.0));
    assert_settled_on(carousel, robot.track(), 1);
}

#[test]
fn touch_drag_behaves_like_mouse_drag() {
    let mut robot = linear_robot(4);
    robot.touch_drag(7, 250.0, 100.0);
    robot.touch_drag(7, 250.0, 100.0);
    assert_settled_on(robot.carousel(), robot.track(), 2);
}

#[test]
fn explicit_gesture_callbacks_report_snap_decision() {
    let robot = linear_robot(3);
    let carousel = robot.carousel();

    assert!(carousel.on_gesture_start(0, Default::default(), 300.0));
    assert_eq!(carousel.on_gesture_move(0, 100.0), Some(-100.0));
    assert_eq!(carousel.on_gesture_end(0), Some(SnapDecision::Next(1)));
    assert_eq!(carousel.on_gesture_cancel(0), None);
}

#[test]
fn every_focus_notifies_listeners() {
    let mut robot = linear_robot(3);
    let hits = Rc::new(Cell::new(0));
    let _subscription = {
        let hits = Rc::clone(&hits);
        robot.carousel().subscribe(move || hits.set(hits.get() + 1))
    };

    robot.carousel().step_next();
    robot.carousel().step_next();
    robot.carousel().step_next(); // no-op at the end
    robot.drag(100.0, 90.0); // snap back still focuses

    assert_eq!(hits.get(), 3);
}

#[test]
fn listeners_observe_the_new_state() {
    let robot = CarouselRobot::new(3, 100.0, 300.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let seen = Rc::clone(&seen);
        let weak = robot.carousel().downgrade();
        robot.carousel().subscribe(move || {
            if let Some(carousel) = weak.upgrade() {
                seen.borrow_mut()
                    .push((carousel.active_index().active, carousel.offset()));
            }
        })
    };

    robot.carousel().focus_item(2);
    robot.carousel().focus_item(1);

    assert_eq!(*seen.borrow(), vec![(2, -100.0), (1, 0.0)]);
}

#[test]
fn dropped_subscription_stops_notifications() {
    let robot = CarouselRobot::new(3, 100.0, 300.0);
    let hits = Rc::new(Cell::new(0));
    let subscription = {
        let hits = Rc::clone(&hits);
        robot.carousel().subscribe(move || hits.set(hits.get() + 1))
    };
    assert_eq!(robot.carousel().listener_count(), 1);

    drop(subscription);
    robot.carousel().step_next();

    assert_eq!(hits.get(), 0);
    assert_eq!(robot.carousel().listener_count(), 0);
}

#[test]
fn builder_reports_missing_handles() {
    let missing_viewport = Carousel::builder()
        .track(FakeTrack::uniform(3, 100.0))
        .build();
    assert_eq!(
        missing_viewport.err(),
        Some(CarouselError::missing_handle("viewport"))
    );

    let missing_track = Carousel::builder()
        .viewport(FakeViewport::new(300.0))
        .build();
    assert_eq!(
        missing_track.err(),
        Some(CarouselError::missing_handle("track"))
    );
}

#[test]
fn builder_applies_config() {
    let track = FakeTrack::uniform(3, 100.0);
    let carousel = Carousel::builder()
        .track(track.clone())
        .viewport(FakeViewport::new(300.0))
        .config(CarouselConfig::default().with_transition(Duration::ZERO))
        .build()
        .unwrap();

    assert_settled_on(&carousel, &track, 0);
    assert_eq!(track.transition(), None);
}
