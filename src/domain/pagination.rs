// src/domain/pagination.rs

/// A slice of an in-memory list plus the numbers the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub pages: u32,
}

/// Pages are 1-based; page 0 is treated as page 1.
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1) as usize;
    let start = (page as usize - 1).saturating_mul(per_page);

    let slice = if start >= items.len() {
        Vec::new()
    } else {
        let end = (start + per_page).min(items.len());
        items[start..end].to_vec()
    };

    Page {
        items: slice,
        total: items.len(),
        pages: items.len().div_ceil(per_page) as u32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerButton {
    /// `target` is `None` when the button is disabled.
    Previous { target: Option<u32> },
    Number { page: u32, active: bool },
    Next { target: Option<u32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub pages: u32,
}

impl Pager {
    /// No pager at all for a single page of results.
    pub fn new(current: u32, pages: u32) -> Option<Self> {
        if pages <= 1 {
            return None;
        }
        Some(Self {
            current: current.max(1),
            pages,
        })
    }

    pub fn buttons(&self) -> Vec<PagerButton> {
        let mut buttons = Vec::with_capacity(self.pages as usize + 2);

        buttons.push(PagerButton::Previous {
            target: (self.current > 1).then(|| self.current - 1),
        });

        for page in 1..=self.pages {
            buttons.push(PagerButton::Number {
                page,
                active: page == self.current,
            });
        }

        buttons.push(PagerButton::Next {
            target: (self.current < self.pages).then(|| self.current + 1),
        });

        buttons
    }
}
