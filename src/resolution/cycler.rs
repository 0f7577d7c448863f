use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

/// A display resolution, as listed in display config.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Ordered, runtime-immutable list of selectable resolutions.
#[derive(Resource, Debug, Clone)]
pub struct ResolutionList(pub Vec<Resolution>);

impl ResolutionList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Resolution> {
        self.0.get(index).copied()
    }
}

/// Linear cursor over the resolution list. No wraparound: moves past
/// either end are silent no-ops.
#[derive(Resource, Debug, Default)]
pub struct ResolutionCursor {
    pub index: usize,
}

impl ResolutionCursor {
    /// Steps to the next resolution and returns it, or `None` at the end
    /// of the list.
    pub fn next(&mut self, list: &ResolutionList) -> Option<Resolution> {
        if self.index + 1 < list.len() {
            self.index += 1;
            list.get(self.index)
        } else {
            None
        }
    }

    /// Steps to the previous resolution and returns it, or `None` at the
    /// start of the list.
    pub fn prev(&mut self, list: &ResolutionList) -> Option<Resolution> {
        if self.index > 0 {
            self.index -= 1;
            list.get(self.index)
        } else {
            None
        }
    }

    pub fn current(&self, list: &ResolutionList) -> Option<Resolution> {
        list.get(self.index)
    }

    /// The resolution the "previous" affordance advertises; `None` at the
    /// first index, which hides the affordance.
    pub fn prev_affordance(&self, list: &ResolutionList) -> Option<Resolution> {
        self.index.checked_sub(1).and_then(|i| list.get(i))
    }

    /// The resolution the "next" affordance advertises; `None` at the last
    /// index, which hides the affordance.
    pub fn next_affordance(&self, list: &ResolutionList) -> Option<Resolution> {
        list.get(self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> ResolutionList {
        ResolutionList(vec![
            Resolution {
                width: 1280,
                height: 720,
            },
            Resolution {
                width: 1920,
                height: 1080,
            },
            Resolution {
                width: 2560,
                height: 1440,
            },
        ])
    }

    #[test]
    fn prev_at_start_is_a_no_op_with_hidden_affordance() {
        let list = three();
        let mut cursor = ResolutionCursor::default();

        assert_eq!(cursor.prev(&list), None);
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.prev_affordance(&list), None);
        assert_eq!(cursor.next_affordance(&list), list.get(1));
    }

    #[test]
    fn next_twice_reaches_the_end_then_no_ops() {
        let list = three();
        let mut cursor = ResolutionCursor::default();

        assert_eq!(cursor.next(&list), list.get(1));
        assert_eq!(cursor.next(&list), list.get(2));
        assert_eq!(cursor.index, 2);
        assert_eq!(cursor.next_affordance(&list), None);

        assert_eq!(cursor.next(&list), None);
        assert_eq!(cursor.index, 2);
    }

    #[test]
    fn middle_index_shows_both_affordances() {
        let list = three();
        let cursor = ResolutionCursor { index: 1 };

        assert_eq!(cursor.prev_affordance(&list), list.get(0));
        assert_eq!(cursor.next_affordance(&list), list.get(2));
        assert_eq!(cursor.current(&list), list.get(1));
    }

    #[test]
    fn resolution_displays_as_width_x_height() {
        let res = Resolution {
            width: 1920,
            height: 1080,
        };
        assert_eq!(res.to_string(), "1920x1080");
    }
}
