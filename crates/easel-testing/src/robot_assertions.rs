//! Assertion utilities for robot testing
//!
//! Helpers for checking captured frames and geometry in robot tests.

use easel_ui_graphics::{Color, Point, Rect};

use crate::headless::CapturedFrame;

/// Assert that a pixel of a captured frame has the expected color.
pub fn assert_pixel(frame: &CapturedFrame, x: i32, y: i32, expected: Color, msg: &str) {
    let actual = frame.pixel(x, y);
    assert_eq!(
        actual,
        Some(expected),
        "{}: pixel ({}, {}) expected {}, got {:?}",
        msg,
        x,
        y,
        expected,
        actual
    );
}

/// Assert that every pixel of `rect` has the expected color.
pub fn assert_rect_filled(frame: &CapturedFrame, rect: Rect, expected: Color, msg: &str) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            assert_pixel(frame, x, y, expected, msg);
        }
    }
}

/// Assert that a rectangle contains a point, edges included.
pub fn assert_rect_contains_point(rect: Rect, point: Point, msg: &str) {
    assert!(
        rect.contains(point),
        "{}: point ({}, {}) not in rect {:?}",
        msg,
        point.x,
        point.y,
        rect
    );
}

/// Assert that two frames are bit-identical.
pub fn assert_frames_identical(actual: &CapturedFrame, expected: &CapturedFrame, msg: &str) {
    assert_eq!(
        actual.size(),
        expected.size(),
        "{}: frame sizes differ",
        msg
    );
    let differing = actual
        .pixels
        .chunks_exact(4)
        .zip(expected.pixels.chunks_exact(4))
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(differing, 0, "{}: {} pixels differ", msg, differing);
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}
