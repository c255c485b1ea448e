use std::{fmt, path::PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod feed_model;
pub mod reference_model;

use reference_model::{Group, Room, Teacher};

/// Which kind of object a timetable was requested for.
/// It decides how the `object` field of every row is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Group,
    Teacher,
    Room,
}

impl ViewMode {
    /// Value of the export's `req_mode` query parameter.
    pub fn as_req_mode(self) -> &'static str {
        match self {
            ViewMode::Group => "group",
            ViewMode::Teacher => "teacher",
            ViewMode::Room => "room",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_req_mode())
    }
}

/// How the cohorts of a lesson are composed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GroupsType {
    /// One whole group.
    #[default]
    #[serde(rename = "")]
    Single,
    #[serde(rename = "підгр")]
    SubGroup,
    #[serde(rename = "Збірна група")]
    Combined,
    #[serde(rename = "Потік")]
    Stream,
}

impl GroupsType {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupsType::Single => "",
            GroupsType::SubGroup => "підгр",
            GroupsType::Combined => "Збірна група",
            GroupsType::Stream => "Потік",
        }
    }
}

/// Substitution announced for a lesson.
/// `title` and `lesson_type` stay empty when only the teacher was replaced.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementInfo {
    pub teacher: Teacher,
    pub title: String,
    #[serde(rename = "type")]
    pub lesson_type: String,
}

/// A normalized timetable entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    pub teacher: Teacher,
    #[serde(rename = "type")]
    pub lesson_type: String,
    /// Date exactly as the feed wrote it, e.g. `16.10.2023`.
    pub day: String,
    pub number: u32,
    pub room: Room,
    pub groups_type: GroupsType,
    pub groups: Vec<Group>,
    pub sub_group: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub online: bool,
    pub url: String,
    pub comment_for_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<ReplacementInfo>,
}

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the address of the timetable export.
/// 2. Path to the file the normalized lessons will be written to.
/// 3. Kind of object the timetable is requested for.
/// 4. Name of that object: group name, teacher short name (`Last F.M.`) or room `name/block`.
/// 5. First and last day of the requested period, as `D.M.YYYY`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE", default_value = "lessons.json")]
    pub output_json_path: PathBuf,
    #[arg(long, value_enum, default_value_t = ViewMode::Group)]
    pub mode: ViewMode,
    #[arg(long)]
    pub subject: String,
    #[arg(long, value_name = "D.M.YYYY", value_parser = parse_feed_date)]
    pub begin_date: NaiveDate,
    #[arg(long, value_name = "D.M.YYYY", value_parser = parse_feed_date)]
    pub end_date: NaiveDate,
}

fn parse_feed_date(date: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date, "%d.%m.%Y")
}

/// A model for describing configuration of the tool.
/// `base_uri` is the root of the dekanat site, e.g. `https://dekanat.zu.edu.ua/`;
/// the export endpoint is appended to it.
#[derive(Deserialize, Debug)]
pub struct Config {
    pub base_uri: String,
}
