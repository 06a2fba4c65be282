use std::ops::RangeInclusive;

/// Page number from a query string value; anything unusable becomes 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|r| r.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Pages through a list that is already in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current: usize,
    per_page: usize,
    total_pages: usize,
}

impl Paginator {
    pub fn new(total_items: usize, per_page: usize, requested: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page);
        let current = requested.clamp(1, total_pages.max(1));
        Self {
            current,
            per_page,
            total_pages,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1) * self.per_page;
        let end = (start + self.per_page).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn prev(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> usize {
        (self.current + 1).min(self.total_pages.max(1))
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Numbered links plus prev/next targets; `href` maps a page number to a URL.
    pub fn links<F>(&self, href: F) -> Vec<PageLink>
    where
        F: Fn(usize) -> String,
    {
        self.pages()
            .map(|number| PageLink {
                number,
                href: href(number),
                current: number == self.current,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

/// Position in an upstream list whose length is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
}

impl PageCursor {
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        self.page.saturating_add(1)
    }
}
