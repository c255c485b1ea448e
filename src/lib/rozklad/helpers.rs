use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use chrono::{Datelike, NaiveDate};
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::rozklad::{
    errors::{RozkladError, RozkladResult},
    models::{
        feed_model::{GroupsExport, LessonRow, LessonsExport, RoomsExport, TeachersExport},
        reference_model::{Group, Room, Teacher},
        Args, Config, Lesson, ViewMode,
    },
};

const EXPORT_ENDPOINT: &str = "cgi-bin/timetable_export.cgi?&req_format=json&coding_mode=UTF8";

/// Reads config.json and lets `ROZKLAD_*` environment variables override it.
pub fn get_config(args: &Args) -> Result<Config, figment::Error> {
    Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("ROZKLAD_"))
        .extract()
}

/// Address of the JSON export on a dekanat site.
pub fn export_base_uri(base_uri: &str) -> String {
    format!("{base_uri}{EXPORT_ENDPOINT}")
}

/// Query listing every group, teacher or room together with its id.
pub fn object_list_url(export_uri: &str, mode: ViewMode) -> String {
    format!(
        "{}&req_type=obj_list&req_mode={}&show_ID=yes",
        export_uri,
        mode.as_req_mode()
    )
}

/// Query for the timetable of one object over a period.
pub fn lessons_url(
    export_uri: &str,
    subject_id: u32,
    mode: ViewMode,
    begin_date: NaiveDate,
    end_date: NaiveDate,
) -> String {
    format!(
        "{}&begin_date={}&end_date={}&OBJ_ID={}&ros_text=separated&req_mode={}",
        export_uri,
        format_feed_date(begin_date),
        format_feed_date(end_date),
        subject_id,
        mode.as_req_mode()
    )
}

/// The export wants dates as `D.M.YYYY`, without zero padding.
pub fn format_feed_date(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

fn parse_id(kind: &'static str, name: &str, id: &str) -> RozkladResult<u32> {
    id.parse().map_err(|_| RozkladError::InvalidId {
        kind,
        name: name.to_owned(),
        id: id.to_owned(),
    })
}

pub fn decode_groups(export: GroupsExport) -> RozkladResult<Vec<Group>> {
    let mut groups = Vec::new();
    for department in export.export.departments {
        for group in department.objects {
            groups.push(Group {
                department: department.name.clone(),
                id: parse_id("group", &group.name, &group.id)?,
                name: group.name,
            });
        }
    }
    Ok(groups)
}

pub fn decode_teachers(export: TeachersExport) -> RozkladResult<Vec<Teacher>> {
    let mut teachers = Vec::new();
    for department in export.export.departments {
        for teacher in department.objects {
            teachers.push(Teacher {
                id: parse_id("teacher", &teacher.name, &teacher.id)?,
                short_name: teacher.name,
                first_name_part: teacher.first_name_part,
                middle_name_part: teacher.middle_name_part,
                last_name_part: teacher.last_name_part,
                department: department.name.clone(),
            });
        }
    }
    Ok(teachers)
}

/// Room objects are named `<room>/<block>`; the room name is everything
/// before the first slash.
pub fn decode_rooms(export: RoomsExport) -> RozkladResult<Vec<Room>> {
    let mut rooms = Vec::new();
    for block in export.export.blocks {
        for room in block.objects {
            let name = room
                .name
                .split_once('/')
                .map_or(room.name.as_str(), |(name, _)| name)
                .to_owned();
            rooms.push(Room {
                block: block.name.clone(),
                name,
                id: parse_id("room", &room.name, &room.id)?,
                full_name: room.name,
            });
        }
    }
    Ok(rooms)
}

pub fn decode_lesson_rows(export: LessonsExport) -> Vec<LessonRow> {
    export.export.roz_items
}

/// Reads a saved export, e.g. one downloaded by hand from the dekanat site.
pub fn read_export<T: DeserializeOwned>(path: &Path) -> RozkladResult<T> {
    info!(
        "Reading export from {}",
        std::path::absolute(path)?.display()
    );
    let export_file = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(export_file)?)
}

pub fn log_all_lessons(lessons: &[Lesson]) {
    for lesson in lessons.iter() {
        debug!(
            "{} #{} {} ({}) for {:?} {}",
            lesson.day,
            lesson.number,
            lesson.title,
            lesson.lesson_type,
            lesson.groups_type.as_str(),
            lesson.sub_group
        );
    }
}

pub fn write_lessons(args: &Args, lessons: &[Lesson]) -> RozkladResult<()> {
    info!(
        "Writing {} lessons to {}",
        lessons.len(),
        std::path::absolute(&args.output_json_path)?.display()
    );
    let lessons_file = BufWriter::new(File::create(&args.output_json_path)?);
    Ok(serde_json::to_writer_pretty(lessons_file, lessons)?)
}

#[cfg(test)]
#[path = "tests/helpers_tests.rs"]
mod tests;
