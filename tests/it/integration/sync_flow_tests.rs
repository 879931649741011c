//! Sync round trips: reconciliation, failures and overlapping requests.

use crate::helpers::{derivative_json, EditorBuilder, DERIVATIVE_REF};
use derivative_editor::constants::FRAME_ID;
use derivative_editor::types::{Area, CropParams, Operation, Point, Ratio, ResizeParams, SizeTarget};
use derivative_editor::{RatioType, SizeType};

fn crop(area: Area, ratio: Ratio) -> Operation {
    Operation::Crop(CropParams::new(area, ratio))
}

#[tokio::test]
async fn test_scenario_e_server_state_wins() {
    let mut h = EditorBuilder::new().build();
    h.editor.set_ratio_type(RatioType::Fixed).unwrap();
    h.editor.set_size_type(SizeType::UserDefined).unwrap();

    let canonical = Area::new(5.0, 5.0, 200.0, 150.0);
    h.transport.reply(200, derivative_json(&[crop(canonical, Ratio::Free)]));
    h.transport.reply(200, derivative_json(&[crop(canonical, Ratio::Free)]));
    assert_eq!(h.editor.settle().await, 2);

    assert_eq!(h.editor.get_selection(), Ok(canonical));
    assert_eq!(h.editor.ratio(), Ok(Ratio::Free));
    assert_eq!(h.editor.size(), Ok(SizeTarget::Original));

    let previews = h.previews();
    assert_eq!(previews.len(), 1, "only the latest completion is applied");
    assert!(previews[0].starts_with(&format!("{DERIVATIVE_REF}/content?t=")));
    assert!(previews[0].ends_with("-2"));
}

#[tokio::test]
async fn test_resize_in_response_is_replayed() {
    let mut h = EditorBuilder::new().build();
    h.transport.reply(
        200,
        derivative_json(&[
            crop(Area::new(0.0, 0.0, 400.0, 300.0), Ratio::Fixed { width: 4.0, height: 3.0 }),
            Operation::Resize(ResizeParams { width: 100, height: 75 }),
        ]),
    );
    h.editor.notify_change();
    h.editor.settle().await;

    assert_eq!(h.editor.ratio(), Ok(Ratio::Fixed { width: 4.0, height: 3.0 }));
    assert_eq!(h.editor.size(), Ok(SizeTarget::UserDefined { width: 100, height: 75 }));
    assert_eq!(h.editor.get_selection(), Ok(Area::new(0.0, 0.0, 400.0, 300.0)));
}

#[tokio::test]
async fn test_scenario_f_server_error_replaces_document_only() {
    let mut h = EditorBuilder::new().build();
    h.editor.set_selection(Area::new(40.0, 30.0, 300.0, 200.0));
    h.editor.pointer_down_on(FRAME_ID, Point::new(0.0, 0.0)).unwrap();
    h.editor.pointer_move(Point::new(-5.0, 0.0));
    let committed = h.editor.get_selection().unwrap();
    assert_eq!(committed, Area::new(35.0, 30.0, 300.0, 200.0));

    h.transport.reply(500, "<h1>Internal Server Error</h1>");
    h.editor.pointer_up();
    h.editor.settle().await;

    assert_eq!(h.documents(), vec!["<h1>Internal Server Error</h1>".to_string()]);
    assert_eq!(h.editor.get_selection(), Ok(committed));
    assert!(h.previews().is_empty());
}

#[tokio::test]
async fn test_transport_failure_blanks_document() {
    let mut h = EditorBuilder::new().build();
    h.transport.fail("connection refused");
    h.editor.notify_change();
    h.editor.settle().await;
    assert_eq!(h.documents(), vec![String::new()]);
}

#[tokio::test]
async fn test_malformed_success_body_replaces_document() {
    let mut h = EditorBuilder::new().build();
    h.transport.reply(200, "<html>proxy login</html>");
    h.editor.notify_change();
    h.editor.settle().await;
    assert_eq!(h.documents(), vec!["<html>proxy login</html>".to_string()]);
    assert_eq!(h.editor.get_selection(), Ok(Area::new(0.0, 0.0, 800.0, 600.0)));
}

#[tokio::test]
async fn test_out_of_order_completion_is_discarded() {
    let mut h = EditorBuilder::new().build();
    let first = h.transport.gate();
    let second = h.transport.gate();

    assert_eq!(h.editor.notify_change(), Some(1));
    assert_eq!(h.editor.notify_change(), Some(2));
    assert_eq!(h.editor.sync_in_flight(), 2);

    let newer = Area::new(100.0, 100.0, 200.0, 200.0);
    let older = Area::new(0.0, 0.0, 50.0, 50.0);

    second.release(200, derivative_json(&[crop(newer, Ratio::Free)]));
    assert!(h.editor.settle_next().await);
    first.release(200, derivative_json(&[crop(older, Ratio::Free)]));
    assert!(h.editor.settle_next().await);
    assert!(!h.editor.settle_next().await);

    assert_eq!(h.editor.get_selection(), Ok(newer));
    assert_eq!(h.previews().len(), 1);
}

#[tokio::test]
async fn test_stale_completion_applies_when_guard_disabled() {
    let mut h = EditorBuilder::new().keep_stale_responses().build();
    let first = h.transport.gate();
    let second = h.transport.gate();
    h.editor.notify_change();
    h.editor.notify_change();

    let newer = Area::new(100.0, 100.0, 200.0, 200.0);
    let older = Area::new(0.0, 0.0, 50.0, 50.0);

    second.release(200, derivative_json(&[crop(newer, Ratio::Free)]));
    h.editor.settle_next().await;
    first.release(200, derivative_json(&[crop(older, Ratio::Free)]));
    h.editor.settle_next().await;

    // Completion order, not issue order
    assert_eq!(h.editor.get_selection(), Ok(older));
    assert_eq!(h.previews().len(), 2);
}

#[tokio::test]
async fn test_stale_failure_does_not_replace_document() {
    let mut h = EditorBuilder::new().build();
    let first = h.transport.gate();
    h.transport.reply(200, derivative_json(&[crop(Area::new(1.0, 1.0, 10.0, 10.0), Ratio::Free)]));

    h.editor.notify_change();
    h.editor.notify_change();
    assert!(h.editor.settle_next().await);
    first.release(502, "bad gateway");
    h.editor.settle().await;

    assert!(h.documents().is_empty());
    assert_eq!(h.editor.get_selection(), Ok(Area::new(1.0, 1.0, 10.0, 10.0)));
}

#[tokio::test]
async fn test_poll_sync_drains_without_waiting() {
    let mut h = EditorBuilder::new().build();
    assert_eq!(h.editor.poll_sync(), 0);

    h.transport.reply(200, derivative_json(&[crop(Area::new(2.0, 2.0, 20.0, 20.0), Ratio::Free)]));
    h.editor.notify_change();
    while h.editor.sync_in_flight() > 0 {
        tokio::task::yield_now().await;
        h.editor.poll_sync();
    }
    assert_eq!(h.editor.get_selection(), Ok(Area::new(2.0, 2.0, 20.0, 20.0)));
}

#[tokio::test]
async fn test_settle_with_nothing_in_flight_returns_immediately() {
    let mut h = EditorBuilder::new().build();
    assert_eq!(h.editor.settle().await, 0);
}
