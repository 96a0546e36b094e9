use super::*;
use crate::{
    clock::wall::WallClock,
    dom::markup::to_html,
    foundation::core::Millis,
    hover::session::SessionState,
    site::config::SiteConfig,
    text::split::NBSP,
};

fn welcome() -> Welcome {
    let cfg = SiteConfig::default();
    Welcome::new(cfg.subtitle, cfg.title, cfg.title_heading_class, cfg.title_gap)
}

#[test]
fn mounts_both_blocks_with_default_weights() {
    let mut page = Page::new(WallClock::System);
    let body = page.doc().body();
    let mut w = welcome();
    let root = w.mount(&mut page, body);
    let doc = page.doc();

    assert_eq!(doc.attr(root, "id"), Some("welcome"));
    assert_eq!(doc.find_all_by_tag(root, "span").len(), 27);

    let sub = w.block(BlockKind::Subtitle).unwrap();
    let title = w.block(BlockKind::Title).unwrap();
    assert_eq!(doc.tag(sub.container().unwrap()), Some("p"));
    assert_eq!(doc.tag(title.container().unwrap()), Some("h1"));
    assert_eq!(doc.class(title.container().unwrap()), Some("mt-7"));
    assert_eq!(sub.glyphs().len(), 18);
    assert_eq!(title.glyphs().len(), 9);

    assert!(sub.glyphs().iter().all(|&g| doc.weight(g) == Some(100.0)));
    assert!(title.glyphs().iter().all(|&g| doc.weight(g) == Some(400.0)));
    assert!(
        title
            .glyphs()
            .iter()
            .all(|&g| doc.class(g) == Some("text-9xl italic font-georama"))
    );
    let nbsp = NBSP.to_string();
    let spaces = sub
        .glyphs()
        .iter()
        .filter(|&&g| doc.text(g) == Some(nbsp.as_str()))
        .count();
    assert_eq!(spaces, 3);
}

#[test]
fn markup_starts_with_section_and_weighted_spans() {
    let mut page = Page::new(WallClock::System);
    let body = page.doc().body();
    let mut w = welcome();
    let root = w.mount(&mut page, body);
    let html = to_html(page.doc(), root);
    assert!(html.starts_with(
        "<section id=\"welcome\"><p><span class=\"text-3xl font-georama\" \
style=\"font-variation-settings: 'wght' 100\">H</span>"
    ));
    assert!(html.contains("<h1 class=\"mt-7\"><span class=\"text-9xl italic font-georama\""));
    assert!(html.ends_with("o</span></h1></section>"));
}

#[test]
fn lines_are_stacked_with_gap() {
    let mut page = Page::new(WallClock::System);
    let body = page.doc().body();
    let mut w = welcome().with_origin(Point::new(10.0, 40.0));
    let root = w.mount(&mut page, body);
    let doc = page.doc();
    let sub = doc.rect(w.block(BlockKind::Subtitle).unwrap().container().unwrap()).unwrap();
    let title = doc.rect(w.block(BlockKind::Title).unwrap().container().unwrap()).unwrap();

    assert_eq!(sub, Rect::new(10.0, 40.0, 10.0 + 18.0 * 18.0, 76.0));
    assert_eq!(title, Rect::new(10.0, 104.0, 10.0 + 9.0 * 76.0, 232.0));
    assert_eq!(doc.rect(root), Some(sub.union(title)));
}

#[test]
fn sessions_attach_on_mount_and_detach_on_unmount() {
    let mut page = Page::new(WallClock::System);
    let body = page.doc().body();
    let mut w = welcome();
    w.mount(&mut page, body);
    assert_eq!(page.listener_count(), 4);
    for kind in [BlockKind::Subtitle, BlockKind::Title] {
        let block = w.block(kind).unwrap();
        assert_eq!(block.kind(), kind);
        assert_eq!(block.session().state(), SessionState::Attached);
        assert_eq!(page.listeners_on(block.container().unwrap()), 2);
    }

    w.unmount(&mut page);
    assert!(w.block(BlockKind::Title).is_none());
    assert_eq!(page.listener_count(), 0);
    assert!(page.doc().find_by_id("welcome").is_none());
}

#[test]
fn repeated_cycles_leave_no_listeners() {
    let mut page = Page::new(WallClock::System);
    let body = page.doc().body();
    let mut w = welcome();
    for _ in 0..10 {
        w.mount(&mut page, body);
        w.mount(&mut page, body);
        assert_eq!(page.listener_count(), 4);
        w.unmount(&mut page);
    }
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn relayout_moves_hover_hotspot() {
    let mut page = Page::new(WallClock::System);
    let body = page.doc().body();
    let mut w = welcome();
    w.mount(&mut page, body);
    w.relayout(&mut page, Point::new(500.0, 0.0));

    let title = w.block(BlockKind::Title).unwrap();
    let first = title.glyphs()[0];
    let r = page.doc().rect(first).unwrap();
    assert_eq!(r.x0, 500.0);

    page.pointer_move(r.center());
    page.advance(Millis(250));
    assert_eq!(page.doc().weight(first), Some(900.0));
}

#[test]
fn rapid_moves_keep_weights_in_range() {
    let mut page = Page::new(WallClock::System);
    let body = page.doc().body();
    let mut w = welcome();
    w.mount(&mut page, body);
    let title = w.block(BlockKind::Title).unwrap();
    let line = page.doc().rect(title.container().unwrap()).unwrap();
    let glyphs = title.glyphs().to_vec();

    let mut x = line.x0;
    while x < line.x1 {
        page.pointer_move(Point::new(x, line.center().y));
        page.advance(Millis(7));
        for &g in &glyphs {
            let wt = page.doc().weight(g).unwrap();
            assert!((400.0..=900.0).contains(&wt), "{wt}");
        }
        x += 13.0;
    }
}
