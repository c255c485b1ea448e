//! Objects listed by the timetable export's `req_type=obj_list` requests.
use serde::{Deserialize, Serialize};

/// A student group (cohort).
/// The zero value is the placeholder for a group that could not be resolved.
#[derive(Deserialize, Debug, Serialize, Default, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub department: String,
    pub name: String,
    pub id: u32,
}

/// A teacher as listed in a department.
/// `short_name` follows the feed's `"Last F.M."` convention.
#[derive(Deserialize, Debug, Serialize, Default, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub short_name: String,
    pub first_name_part: String,
    pub middle_name_part: String,
    pub last_name_part: String,
    pub department: String,
    pub id: u32,
}

/// A room inside a building block.
/// `full_name` is the feed's `"<name>/<block>"` string.
#[derive(Deserialize, Debug, Serialize, Default, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub block: String,
    pub name: String,
    pub full_name: String,
    pub id: u32,
}
