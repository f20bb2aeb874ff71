use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkItem {
    pub image: String,
    pub title: String,
    pub description: String,
}

impl WorkItem {
    fn new(image: &str, title: &str, description: &str) -> Self {
        Self {
            image: image.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[must_use]
pub fn default_work_items() -> Vec<WorkItem> {
    vec![
        WorkItem::new(
            "assets/img/work-victory.jpg",
            "Developmental Assessment",
            "Comprehensive evaluations to identify your child's strengths and areas for growth in development and daily living skills.",
        ),
        WorkItem::new(
            "assets/img/work-metiew-smith.jpg",
            "Sensory Integration Therapy",
            "Specialized treatment to help children process sensory information and improve their ability to participate in daily activities.",
        ),
        WorkItem::new(
            "assets/img/work-alex-nowak.jpg",
            "Mental Health Support",
            "Compassionate mental health services to support emotional regulation, coping strategies, and overall well-being.",
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Left,
    Center,
    Right,
}

impl SlidePosition {
    pub const ORDER: [Self; 3] = [Self::Left, Self::Center, Self::Right];
}

impl fmt::Display for SlidePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide<'a> {
    pub item: &'a WorkItem,
    pub position: SlidePosition,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<WorkItem>,
    current: usize,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(default_work_items())
    }
}

impl Carousel {
    #[must_use]
    pub const fn new(items: Vec<WorkItem>) -> Self {
        Self { items, current: 0 }
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.items.is_empty() {
            self.current = if self.current == 0 {
                self.items.len() - 1
            } else {
                self.current - 1
            };
        }
    }

    /// Three slides starting at the current item, tagged left/center/right.
    ///
    /// Lists shorter than three repeat items. The iterator borrows the list
    /// and can be cloned to walk the window again.
    #[must_use]
    pub fn visible_window(&self) -> Window<'_> {
        Window {
            items: &self.items,
            start: self.current,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Window<'a> {
    items: &'a [WorkItem],
    start: usize,
    offset: usize,
}

impl<'a> Iterator for Window<'a> {
    type Item = Slide<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.items.is_empty() {
            return None;
        }
        let position = *SlidePosition::ORDER.get(self.offset)?;
        let item = &self.items[(self.start + self.offset) % self.items.len()];
        self.offset += 1;
        Some(Slide { item, position })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.items.is_empty() {
            0
        } else {
            SlidePosition::ORDER.len() - self.offset
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for Window<'_> {}
