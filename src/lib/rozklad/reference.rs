use std::collections::HashMap;

use log::debug;

use super::models::{
    reference_model::{Group, Room, Teacher},
    ViewMode,
};

/// Immutable snapshot of the export's object lists, keyed by lowercase name.
///
/// Lookups never fail: a name that is not in the table resolves to the
/// zero value of the entity, and the gap is only reported at `debug` level.
#[derive(Debug, Default, Clone)]
pub struct ReferenceTables {
    groups: HashMap<String, Group>,
    teachers: HashMap<String, Teacher>,
    rooms: HashMap<String, Room>,
}

impl ReferenceTables {
    /// Indexes groups by name, teachers by short name and rooms by `name/block`.
    /// A later duplicate replaces an earlier one.
    pub fn new(groups: Vec<Group>, teachers: Vec<Teacher>, rooms: Vec<Room>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|group| (group.name.to_lowercase(), group))
                .collect(),
            teachers: teachers
                .into_iter()
                .map(|teacher| (teacher.short_name.to_lowercase(), teacher))
                .collect(),
            rooms: rooms
                .into_iter()
                .map(|room| (room_key(&room), room))
                .collect(),
        }
    }

    pub fn group(&self, name: &str) -> Group {
        resolve(&self.groups, "group", name)
    }

    pub fn teacher(&self, short_name: &str) -> Teacher {
        resolve(&self.teachers, "teacher", short_name)
    }

    pub fn room(&self, full_name: &str) -> Room {
        resolve(&self.rooms, "room", full_name)
    }

    /// Id of the object a timetable can be requested for, if it is known.
    pub fn subject_id(&self, mode: ViewMode, name: &str) -> Option<u32> {
        let key = name.to_lowercase();
        match mode {
            ViewMode::Group => self.groups.get(&key).map(|group| group.id),
            ViewMode::Teacher => self.teachers.get(&key).map(|teacher| teacher.id),
            ViewMode::Room => self.rooms.get(&key).map(|room| room.id),
        }
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn teachers(&self) -> impl Iterator<Item = &Teacher> {
        self.teachers.values()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }
}

/// Lookup key of a room: `name/block`, lowercased.
pub fn room_key(room: &Room) -> String {
    format!("{}/{}", room.name, room.block).to_lowercase()
}

fn resolve<T: Clone + Default>(table: &HashMap<String, T>, kind: &str, key: &str) -> T {
    match table.get(&key.to_lowercase()) {
        Some(entity) => entity.clone(),
        None => {
            debug!("Unknown {} {:?}, leaving it empty", kind, key);
            T::default()
        }
    }
}
