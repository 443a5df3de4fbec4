//! Page-number window computation with ellipsis compression.

/// One entry in the rendered page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Compute the visible page-number sequence.
///
/// Seven or fewer pages are shown in full. Otherwise page 1 is always
/// first, and the window around the current page is compressed with
/// ellipses: near the start `[1,2,3,4,…,last]`, near the end
/// `[1,…,last-3,last-2,last-1,last]`, in the middle
/// `[1,…,current-1,current,current+1,…,last]`.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }

    let mut items = vec![Page(1)];

    if current <= 3 {
        items.extend([Page(2), Page(3), Page(4), Ellipsis, Page(total)]);
    } else if current >= total - 2 {
        items.extend([
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]);
    } else {
        items.extend([
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]);
    }

    items
}
