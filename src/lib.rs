//! glyphfolio is a headless model of a single-page portfolio site.
//!
//! The page is a retained element tree driven by a single-threaded host
//! ([`Page`]): pointer listeners, interval timers and weight tweens all run
//! to completion one at a time against the same [`Document`].
//!
//! # Pieces
//!
//! 1. **Navbar**: brand, navigation lists and a `<time>` element refreshed
//!    every second by a [`ClockUpdater`].
//! 2. **Welcome**: a subtitle and a title, each split into one `<span>` per
//!    glyph. A [`HoverSession`] per line maps pointer proximity to a target
//!    font weight (`min + (max - min) * exp(-d² / 1000)`) and hands the
//!    result to the [`Animator`].
//! 3. **App**: `<main>` composing navbar, welcome and dock.
//!
//! Everything is deterministic given a [`WallClock::Fixed`] anchor, which
//! is how the tests and the CLI snapshot the page.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod clock;
mod dom;
mod foundation;
mod host;
mod hover;
mod site;
mod text;

pub use animation::ease::Ease;
pub use animation::tween::{Animator, Timeline, TweenId, TweenRequest};
pub use clock::format::{TIMESTAMP_FORMAT, format_timestamp, parse_instant};
pub use clock::updater::{ClockPhase, ClockUpdater, TICK};
pub use clock::wall::WallClock;
pub use dom::document::{Document, ElementId, Node};
pub use dom::markup::{to_html, weight_style};
pub use foundation::core::{Millis, Point, Rect, WeightRange};
pub use foundation::error::{FolioError, FolioResult};
pub use host::events::{EventKind, ListenerId, PointerEvent};
pub use host::page::Page;
pub use host::timers::TimerId;
pub use hover::intensity::{SMOOTHING, glyph_center, intensity, target_weight};
pub use hover::session::{
    Disposer, HoverConfig, HoverSession, LEAVE_DURATION, MOVE_DURATION, SessionState, attach_hover,
};
pub use site::app::{App, NAVBAR_HEIGHT};
pub use site::component::Component;
pub use site::config::{NavIcon, NavLink, SiteConfig, TextBlockConfig};
pub use site::dock::Dock;
pub use site::navbar::Navbar;
pub use site::welcome::{BlockKind, TextBlock, Welcome};
pub use text::layout::{GlyphMetrics, Monospace, flow_line};
pub use text::split::{GlyphSpan, NBSP, mount_glyphs, split_text};
