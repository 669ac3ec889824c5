//! Windowing over the rendered choice lines.
//!
//! The paginator shows `page_size` contiguous lines and only scrolls when the
//! active line would leave the window, so the scroll position carries over
//! from one frame to the next. There is no wraparound inside the window: it
//! is clamped at both ends of the list.

/// Scroll state carried between frames by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Viewport {
    /// Index of the first visible line.
    pub offset: usize,
}

/// The visible part of a list of lines.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Page<L> {
    pub lines: Vec<L>,
    /// Whether some lines are hidden above or below the window.
    pub is_paginated: bool,
    pub viewport: Viewport,
}

/// Selects the window of `lines` to show so that `active` stays visible.
///
/// `viewport` is the window used for the previous frame. When every line fits
/// the full list is returned and the offset resets to 0.
#[must_use]
pub fn paginate<L: Clone>(
    lines: &[L],
    active: usize,
    page_size: usize,
    viewport: Viewport,
) -> Page<L> {
    let page_size = page_size.max(1);

    if lines.len() <= page_size {
        return Page {
            lines: lines.to_vec(),
            is_paginated: false,
            viewport: Viewport::default(),
        };
    }

    let active = active.min(lines.len() - 1);
    let max_offset = lines.len() - page_size;
    let mut offset = viewport.offset.min(max_offset);

    if active < offset {
        offset = active;
    } else if active >= offset + page_size {
        offset = active + 1 - page_size;
    }

    Page {
        lines: lines[offset..offset + page_size].to_vec(),
        is_paginated: true,
        viewport: Viewport { offset },
    }
}
