use log::debug;

use super::models::{GroupsType, Lesson};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    #[default]
    Empty,
    Accumulating(u32),
}

/// Collects consecutive lessons with the same number into one slot.
///
/// Slots are told apart only by adjacency and the lesson number, so the
/// input must already be ordered by date and then by slot.
#[derive(Debug, Default)]
pub struct SlotMerger {
    state: SlotState,
    bucket: Vec<Lesson>,
    merged: Vec<Lesson>,
}

impl SlotMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lesson: Lesson) {
        if let SlotState::Accumulating(number) = self.state {
            if number != lesson.number {
                self.flush();
            }
        }
        self.state = SlotState::Accumulating(lesson.number);
        self.bucket.push(lesson);
    }

    /// Flushes the last slot and returns every lesson in input order.
    pub fn finish(mut self) -> Vec<Lesson> {
        if !self.bucket.is_empty() {
            self.flush();
        }
        self.merged
    }

    fn flush(&mut self) {
        normalize_slot(&mut self.bucket);
        debug!(
            "Slot {:?} closed with {} lesson(s)",
            self.state,
            self.bucket.len()
        );
        self.merged.append(&mut self.bucket);
        self.state = SlotState::Empty;
    }
}

/// When any lesson of a slot is taught to a subgroup, the whole slot is.
pub fn normalize_slot(slot: &mut [Lesson]) {
    if slot
        .iter()
        .any(|lesson| lesson.groups_type == GroupsType::SubGroup)
    {
        for lesson in slot.iter_mut() {
            lesson.groups_type = GroupsType::SubGroup;
        }
    }
}

/// Runs lessons, already in feed order, through a [`SlotMerger`].
pub fn merge_slots(lessons: impl IntoIterator<Item = Lesson>) -> Vec<Lesson> {
    let mut merger = SlotMerger::new();
    for lesson in lessons {
        merger.push(lesson);
    }
    merger.finish()
}
