use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    animation::tween::{Animator, TweenId},
    clock::wall::WallClock,
    dom::document::Document,
    foundation::core::Point,
    host::events::PointerEvent,
    text::{
        layout::{Monospace, flow_line},
        split::{mount_glyphs, split_text},
    },
};

#[derive(Default)]
struct Recorder {
    log: Rc<RefCell<Vec<TweenRequest>>>,
}

impl Animator for Recorder {
    fn to(&mut self, req: TweenRequest) -> TweenId {
        let mut log = self.log.borrow_mut();
        log.push(req);
        TweenId(log.len() as u64)
    }

    fn advance(&mut self, _doc: &mut Document, _dt: Millis) {}

    fn target_of(&self, target: ElementId) -> Option<f64> {
        self.log
            .borrow()
            .iter()
            .rev()
            .find(|r| r.target == target)
            .map(|r| r.weight)
    }

    fn active(&self) -> usize {
        self.log.borrow().len()
    }
}

const ADVANCE: f64 = 20.0;

/// Lays `text` out at `x0` with 20px glyphs and returns (container, glyphs).
fn block(page: &mut Page, text: &str, y: f64, weight: f64) -> (ElementId, Vec<ElementId>) {
    let doc = page.doc_mut();
    let body = doc.body();
    let p = doc.append_new(body, "p");
    let glyphs = mount_glyphs(doc, p, &split_text(text, None, weight));
    let metrics = Monospace {
        advance: ADVANCE,
        line_height: 10.0,
    };
    flow_line(doc, p, &glyphs, Point::new(100.0, y), &metrics);
    (p, glyphs)
}

fn recording_page() -> (Page, Rc<RefCell<Vec<TweenRequest>>>) {
    let recorder = Recorder::default();
    let log = Rc::clone(&recorder.log);
    (Page::with_animator(WallClock::System, Box::new(recorder)), log)
}

fn move_event(container: ElementId, x: f64) -> PointerEvent {
    PointerEvent {
        kind: EventKind::PointerMove,
        client: Point::new(x, 5.0),
        target: container,
    }
}

#[test]
fn missing_container_stays_detached() {
    let (mut page, _log) = recording_page();
    let mut session = HoverSession::new(HoverConfig::new(WeightRange::TITLE), None, vec![]);
    session.attach(&mut page);
    assert_eq!(session.state(), SessionState::Detached);
    assert_eq!(page.listener_count(), 0);
    assert!(attach_hover(&mut page, None, Rc::from(vec![]), HoverConfig::new(WeightRange::TITLE)).is_none());

    session.detach(&mut page);
    assert_eq!(session.state(), SessionState::Detached);
}

#[test]
fn attach_registers_two_listeners_and_detach_removes_them() {
    let (mut page, _log) = recording_page();
    let (p, glyphs) = block(&mut page, "abc", 0.0, 400.0);
    let mut session = HoverSession::new(HoverConfig::new(WeightRange::TITLE), Some(p), glyphs);

    session.attach(&mut page);
    session.attach(&mut page);
    assert_eq!(session.state(), SessionState::Attached);
    assert_eq!(page.listeners_on(p), 2);

    session.detach(&mut page);
    assert_eq!(session.state(), SessionState::Detached);
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn move_requests_one_decelerating_tween_per_glyph() {
    let (mut page, log) = recording_page();
    let (p, glyphs) = block(&mut page, "Portfolio", 0.0, 400.0);
    let mut session = HoverSession::new(HoverConfig::new(WeightRange::TITLE), Some(p), glyphs.clone());
    session.attach(&mut page);

    // Center of the 5th glyph: 100 + 4 * 20 + 10.
    page.dispatch(p, move_event(p, 190.0));

    let log = log.borrow();
    assert_eq!(log.len(), 9);
    assert!(log.iter().all(|r| r.duration == MOVE_DURATION && r.ease == Ease::DECELERATE));
    assert_eq!(log.iter().map(|r| r.target).collect::<Vec<_>>(), glyphs);
    assert_eq!(log[4].weight, 900.0);
    // Neighbours 20px away on either side get the same boost.
    assert_eq!(log[3].weight, log[5].weight);
    let expected = 400.0 + 500.0 * (-0.4f64).exp();
    assert!((log[3].weight - expected).abs() < 1e-9);
    assert!(log.iter().all(|r| WeightRange::TITLE.contains(r.weight)));
}

#[test]
fn leave_returns_every_glyph_to_default() {
    let (mut page, log) = recording_page();
    let (p, glyphs) = block(&mut page, "Hi, Welcome to my.", 0.0, 100.0);
    let mut session =
        HoverSession::new(HoverConfig::new(WeightRange::SUBTITLE), Some(p), glyphs.clone());
    session.attach(&mut page);

    page.dispatch(p, move_event(p, 150.0));
    log.borrow_mut().clear();
    page.dispatch(
        p,
        PointerEvent {
            kind: EventKind::PointerLeave,
            client: Point::new(0.0, 0.0),
            target: p,
        },
    );

    let log = log.borrow();
    assert_eq!(log.len(), 18);
    assert!(log.iter().all(|r| r.weight == 100.0 && r.duration == LEAVE_DURATION));
    for g in glyphs {
        assert_eq!(page.animator().target_of(g), Some(100.0));
    }
}

#[test]
fn detached_session_ignores_events() {
    let (mut page, log) = recording_page();
    let (p, glyphs) = block(&mut page, "abc", 0.0, 400.0);
    let mut session = HoverSession::new(HoverConfig::new(WeightRange::TITLE), Some(p), glyphs);
    session.attach(&mut page);
    session.detach(&mut page);
    page.dispatch(p, move_event(p, 120.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn sessions_do_not_cross_talk() {
    let (mut page, log) = recording_page();
    let (sub, sub_glyphs) = block(&mut page, "Hi", 0.0, 100.0);
    let (title, title_glyphs) = block(&mut page, "Port", 50.0, 400.0);
    let mut a = HoverSession::new(HoverConfig::new(WeightRange::SUBTITLE), Some(sub), sub_glyphs.clone());
    let mut b = HoverSession::new(HoverConfig::new(WeightRange::TITLE), Some(title), title_glyphs);
    a.attach(&mut page);
    b.attach(&mut page);

    page.pointer_move(Point::new(110.0, 5.0));
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert!(log.iter().all(|r| sub_glyphs.contains(&r.target)));
}

#[test]
fn geometry_is_read_live_on_each_move() {
    let (mut page, log) = recording_page();
    let (p, glyphs) = block(&mut page, "ab", 0.0, 400.0);
    let mut session = HoverSession::new(HoverConfig::new(WeightRange::TITLE), Some(p), glyphs.clone());
    session.attach(&mut page);

    // Shift the line to x=200; a pointer at 210 sits on the first glyph.
    let metrics = Monospace {
        advance: ADVANCE,
        line_height: 10.0,
    };
    flow_line(page.doc_mut(), p, &glyphs, Point::new(200.0, 0.0), &metrics);
    page.dispatch(p, move_event(p, 210.0));
    assert_eq!(log.borrow()[0].weight, 900.0);
}

#[test]
fn timeline_converges_on_hover_targets() {
    let mut page = Page::new(WallClock::System);
    let (p, glyphs) = block(&mut page, "abc", 0.0, 400.0);
    let mut session = HoverSession::new(HoverConfig::new(WeightRange::TITLE), Some(p), glyphs.clone());
    session.attach(&mut page);

    page.pointer_move(Point::new(130.0, 5.0));
    page.advance(Millis(100));
    let mid = page.doc().weight(glyphs[1]).unwrap();
    assert!(mid > 400.0 && mid < 900.0);
    page.advance(Millis(150));
    assert_eq!(page.doc().weight(glyphs[1]), Some(900.0));

    page.pointer_move(Point::new(0.0, 500.0));
    page.advance(LEAVE_DURATION);
    for g in glyphs {
        assert_eq!(page.doc().weight(g), Some(400.0));
    }
}
