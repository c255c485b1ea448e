//! Module with the wire model of the PS-Rozklad `timetable_export.cgi` JSON export
use serde::Deserialize;

/// Every export is wrapped into a single `psrozklad_export` object.
#[derive(Deserialize, Debug)]
pub struct PsRozkladExport<T> {
    #[serde(rename = "psrozklad_export")]
    pub export: T,
}

#[derive(Deserialize, Debug, Default)]
pub struct DepartmentList<O> {
    #[serde(default)]
    pub departments: Vec<Department<O>>,
    #[serde(default)]
    pub code: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct Department<O> {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<O>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GroupObject {
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct TeacherObject {
    pub name: String,
    #[serde(rename = "P", default)]
    pub last_name_part: String,
    #[serde(rename = "I", default)]
    pub first_name_part: String,
    #[serde(rename = "B", default)]
    pub middle_name_part: String,
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct BlockList {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub code: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct Block {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<RoomObject>,
}

#[derive(Deserialize, Debug, Default)]
pub struct RoomObject {
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct Timetable {
    #[serde(default)]
    pub roz_items: Vec<LessonRow>,
    #[serde(default)]
    pub code: String,
}

/// One raw `roz_items` entry. Fields the engine does not use
/// (`comment`, `half`, `reservation`, ...) are skipped.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LessonRow {
    pub object: String,
    pub date: String,
    pub lesson_time: String,
    pub teacher: String,
    pub lesson_number: String,
    pub room: String,
    pub group: String,
    pub title: String,
    pub replacement: String,
    #[serde(rename = "type")]
    pub lesson_type: String,
    pub online: String,
    pub link: String,
    pub comment4link: String,
}

pub type GroupsExport = PsRozkladExport<DepartmentList<GroupObject>>;
pub type TeachersExport = PsRozkladExport<DepartmentList<TeacherObject>>;
pub type RoomsExport = PsRozkladExport<BlockList>;
pub type LessonsExport = PsRozkladExport<Timetable>;
