#![forbid(unsafe_code)]

//! Goal-parametrized traversal driver.
//!
//! Drawing, total-height measurement and mouse hit-testing all run the one
//! traversal a [`TextViewSource`] exposes. One shared loop guarantees no
//! goal ever sees a different filtered/split line sequence than another;
//! only what is done per line differs.
//!
//! Coordinates are pixel offsets from the origin of the newest line, which
//! is where a backward traversal starts. The embedding renderer maps them
//! into its own scrolled viewport.

use crate::source::{LineSpan, Presentation, TextViewSource};

/// Layout knobs supplied by the embedding renderer.
///
/// Real pixel layout (clipping, scrolling, DPI) stays external; the driver
/// only needs to know how tall one display line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextViewLayout {
    /// Height of one display line in pixels. Values below 1 are treated
    /// as 1.
    pub line_height: i32,
}

impl Default for TextViewLayout {
    fn default() -> Self {
        Self { line_height: 17 }
    }
}

enum Goal<'s> {
    Draw(&'s mut dyn FnMut(LineSpan<'_>, &Presentation, i32)),
    Measure,
    Pick(i32),
}

fn run<S: TextViewSource>(
    source: &mut S,
    layout: &TextViewLayout,
    mut goal: Goal<'_>,
) -> (i32, Option<S::Item>) {
    let line_height = layout.line_height.max(1);

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("textview_run", line_height).entered();

    let mut height = 0;
    let mut picked = None;
    if source.begin() {
        loop {
            match &mut goal {
                Goal::Draw(sink) => {
                    if let (Some(span), Some(data)) = (source.line(), source.line_data()) {
                        sink(span, &data, height);
                    }
                }
                Goal::Measure => {}
                Goal::Pick(target) => {
                    if *target >= height && *target < height + line_height {
                        picked = source.current();
                        break;
                    }
                }
            }
            height += line_height;
            if !source.step() {
                break;
            }
        }
    }
    source.end();

    #[cfg(feature = "tracing")]
    tracing::trace!(height, hit = picked.is_some(), "textview run finished");

    (height, picked)
}

/// Draw pass: feed every visible line to `sink` as
/// `(span, presentation, y)`. Returns the accumulated height.
pub fn textview_draw<S, F>(source: &mut S, layout: &TextViewLayout, mut sink: F) -> i32
where
    S: TextViewSource,
    F: FnMut(LineSpan<'_>, &Presentation, i32),
{
    run(source, layout, Goal::Draw(&mut sink)).0
}

/// Measure pass: total pixel height of the filtered, line-split sequence.
/// Zero for an empty or fully filtered list.
pub fn textview_height<S: TextViewSource>(source: &mut S, layout: &TextViewLayout) -> i32 {
    run(source, layout, Goal::Measure).0
}

/// Hit-test pass: the entry whose line range contains `y`, or `None` when
/// `y` falls outside every rendered line.
pub fn textview_pick<S: TextViewSource>(
    source: &mut S,
    layout: &TextViewLayout,
    y: i32,
) -> Option<S::Item> {
    if y < 0 {
        return None;
    }
    run(source, layout, Goal::Pick(y)).1
}
