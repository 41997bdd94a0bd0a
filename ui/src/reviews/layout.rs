//! Responsive composition of the review columns.
//!
//! The assets are split round-robin into three groups, the third halved again.
//! Three columns are built from those groups so that:
//! - narrow viewports show everything in the first column,
//! - `md` viewports show two columns (the first and second absorb the halves
//!   of the third group),
//! - `lg` viewports show all three groups independently.
//!
//! The third column is only displayed from `lg`; the `md` grid has two tracks.
//!
//! Visibility per breakpoint is expressed as class modifiers derived from each
//! item's index in its column.

use crate::core::partition::{split_round_robin, PartitionError};

/// Marquee speed of the first and third columns.
pub const STANDARD_MS_PER_PIXEL: u32 = 10;
/// The middle column scrolls slower to break up the rhythm.
pub const SLOW_MS_PER_PIXEL: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Md,
    Lg,
}

impl Breakpoint {
    pub fn hidden_item_class(self) -> &'static str {
        match self {
            Breakpoint::Md => "reviews__item--hidden-md",
            Breakpoint::Lg => "reviews__item--hidden-lg",
        }
    }

    pub fn shown_column_class(self) -> &'static str {
        match self {
            Breakpoint::Md => "reviews__column--from-md",
            Breakpoint::Lg => "reviews__column--from-lg",
        }
    }
}

/// Per-item class computation for a column, keyed on the item's logical index.
///
/// Only breakpoint hiding is expressible: an item gets no class or one
/// `reviews__item--hidden-*` modifier. Extra classes for the whole column go
/// through [`ColumnSpec`]'s column class instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemClassRule {
    #[default]
    Plain,
    /// Items at index `>= md_from` hide from `md` up; items at index
    /// `>= lg_from` hide from `lg` up.
    HideFrom {
        md_from: Option<usize>,
        lg_from: Option<usize>,
    },
}

impl ItemClassRule {
    /// Smallest breakpoint from which the item is hidden.
    pub fn hidden_from(&self, index: usize) -> Option<Breakpoint> {
        let ItemClassRule::HideFrom { md_from, lg_from } = *self else {
            return None;
        };
        if md_from.is_some_and(|from| index >= from) {
            Some(Breakpoint::Md)
        } else if lg_from.is_some_and(|from| index >= from) {
            Some(Breakpoint::Lg)
        } else {
            None
        }
    }

    pub fn class_for(&self, index: usize) -> &'static str {
        self.hidden_from(index)
            .map(Breakpoint::hidden_item_class)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec<T = &'static str> {
    pub reviews: Vec<T>,
    /// Smallest breakpoint at which the column is displayed (`None` = always).
    pub shown_from: Option<Breakpoint>,
    pub item_class: ItemClassRule,
    pub ms_per_pixel: u32,
}

impl<T> ColumnSpec<T> {
    pub fn column_class(&self) -> &'static str {
        self.shown_from
            .map(Breakpoint::shown_column_class)
            .unwrap_or("")
    }

    /// Items visible at `breakpoint` (`None` = below `md`), in render order.
    pub fn visible_at(&self, breakpoint: Option<Breakpoint>) -> Vec<&T> {
        let column_shown = match (self.shown_from, breakpoint) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(from), Some(current)) => current >= from,
        };
        if !column_shown {
            return Vec::new();
        }
        self.reviews
            .iter()
            .enumerate()
            .filter(|(index, _)| match (self.item_class.hidden_from(*index), breakpoint) {
                (Some(hidden), Some(current)) => current < hidden,
                _ => true,
            })
            .map(|(_, item)| item)
            .collect()
    }
}

/// Build the three marquee columns from `assets`.
pub fn compose_columns<T: Clone>(assets: &[T]) -> Result<[ColumnSpec<T>; 3], PartitionError> {
    let mut groups = split_round_robin(assets, 3)?.into_iter();
    let first = groups.next().unwrap_or_default();
    let second = groups.next().unwrap_or_default();
    let third = groups.next().unwrap_or_default();

    let mut halves = split_round_robin(&third, 2)?.into_iter();
    let third_top = halves.next().unwrap_or_default();
    let third_bottom = halves.next().unwrap_or_default();
    let third_flat: Vec<T> = third_top.iter().chain(&third_bottom).cloned().collect();

    let everything = ColumnSpec {
        reviews: first
            .iter()
            .chain(&third_flat)
            .chain(&second)
            .cloned()
            .collect(),
        shown_from: None,
        item_class: ItemClassRule::HideFrom {
            md_from: Some(first.len() + third_top.len()),
            lg_from: Some(first.len()),
        },
        ms_per_pixel: STANDARD_MS_PER_PIXEL,
    };

    let middle = ColumnSpec {
        reviews: second.iter().chain(&third_bottom).cloned().collect(),
        shown_from: Some(Breakpoint::Md),
        item_class: ItemClassRule::HideFrom {
            md_from: None,
            lg_from: Some(second.len()),
        },
        ms_per_pixel: SLOW_MS_PER_PIXEL,
    };

    let last = ColumnSpec {
        reviews: third_flat,
        shown_from: Some(Breakpoint::Lg),
        item_class: ItemClassRule::Plain,
        ms_per_pixel: STANDARD_MS_PER_PIXEL,
    };

    Ok([everything, middle, last])
}
