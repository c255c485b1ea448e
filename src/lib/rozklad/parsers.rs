//! Parsers for the free-text fields of a `roz_items` row.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{
    errors::FormatError,
    models::{
        feed_model::LessonRow, reference_model::Group, GroupsType, ReplacementInfo, ViewMode,
    },
    reference::ReferenceTables,
};

/// Value of the `online` field for lessons held online ("yes").
pub const ONLINE_FLAG: &str = "Так";

/// Subgroup labels are written in parentheses, e.g. `(підгр. 1)`.
pub const SUBGROUP_OPENING: &str = "(";
pub const SUBGROUP_CLOSING: &str = ")";

const COMBINED_GROUP_MARKER: &str = "Збірна група";
const COMBINED_GROUP_PREFIX: &str = "Збірна група ";
const STREAM_MARKER: &str = "Потік";
const STREAM_PREFIX: &str = "Потік ";
const GROUP_LIST_SEPARATOR: &str = ", ";

const REPLACEMENT_PREFIX: &str = "Увага! Заміна! ";
const FULL_REPLACEMENT_MARKER: &str = "замість:";
const FULL_REPLACEMENT_SUFFIX: &str = " замість:";
const TEACHER_REPLACEMENT_SUFFIX: &str = " замість";
const TEACHER_REPLACEMENT_SEPARATOR: &str = ": ";

const NO_BREAK_SPACE: char = '\u{a0}';

/// Start and end of a lesson on the date of `date` (`D.M.YYYY`),
/// from a `H:MM-H:MM` range. Local wall-clock time, no timezone.
/// A range that ends before it starts is rejected.
pub fn parse_time_range(
    lesson_time: &str,
    date: &str,
) -> Result<(NaiveDateTime, NaiveDateTime), FormatError> {
    let day = parse_date(date).ok_or_else(|| FormatError::Date(date.to_owned()))?;
    let time_error = || FormatError::LessonTime(lesson_time.to_owned());
    let (start, end) = lesson_time.split_once('-').ok_or_else(time_error)?;
    let start = parse_clock(start).ok_or_else(time_error)?;
    let end = parse_clock(end).ok_or_else(time_error)?;
    if end < start {
        return Err(time_error());
    }
    Ok((day.and_time(start), day.and_time(end)))
}

/* day first: 16.10.2023 */
fn parse_date(date: &str) -> Option<NaiveDate> {
    let mut parts = date.split('.');
    let day = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let year = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_clock(clock: &str) -> Option<NaiveTime> {
    let (hour, minute) = clock.split_once(':')?;
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

/// Cohorts a lesson is taught to, as described by the `group` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupExpression {
    pub groups: Vec<Group>,
    pub groups_type: GroupsType,
    /// Human-readable label: the subgroup text or the listed group names.
    pub sub_group: String,
}

/// Interprets the `group` field of a row owned by `object`.
///
/// An empty field or a parenthesized subgroup refer to the owning group,
/// `Збірна група …` and `Потік …` list several groups, anything else names
/// a single group.
pub fn parse_group_expression(
    object: &str,
    group: &str,
    tables: &ReferenceTables,
) -> GroupExpression {
    if group.is_empty() {
        GroupExpression {
            groups: vec![tables.group(object)],
            groups_type: GroupsType::Single,
            sub_group: String::new(),
        }
    } else if group.starts_with(SUBGROUP_OPENING) {
        GroupExpression {
            groups: vec![tables.group(object)],
            groups_type: GroupsType::SubGroup,
            sub_group: group.to_owned(),
        }
    } else if group.starts_with(COMBINED_GROUP_MARKER) {
        group_list(strip_leading(group, COMBINED_GROUP_PREFIX), GroupsType::Combined, tables)
    } else if group.starts_with(STREAM_MARKER) {
        group_list(strip_leading(group, STREAM_PREFIX), GroupsType::Stream, tables)
    } else {
        GroupExpression {
            groups: vec![tables.group(group)],
            groups_type: GroupsType::Single,
            sub_group: String::new(),
        }
    }
}

fn group_list(names: &str, groups_type: GroupsType, tables: &ReferenceTables) -> GroupExpression {
    GroupExpression {
        groups: names
            .split(GROUP_LIST_SEPARATOR)
            .map(|name| tables.group(name))
            .collect(),
        groups_type,
        sub_group: names.to_owned(),
    }
}

/* drops as many bytes as the phrase has, whatever they are */
fn strip_leading<'a>(text: &'a str, phrase: &str) -> &'a str {
    text.get(phrase.len()..).unwrap_or_default()
}

fn strip_around<'a>(text: &'a str, leading: &str, trailing: &str) -> Option<&'a str> {
    let end = text.len().checked_sub(trailing.len())?;
    text.get(leading.len()..end)
}

/// Lookup keys of the teacher and the room of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectKeys {
    pub teacher: String,
    pub room: String,
}

/// Reads the teacher and room keys of a row according to the view it came from.
///
/// In the room view `object` is the room itself, in the teacher view it is
/// the teacher's full name. Otherwise the row's own fields are used.
pub fn parse_subject_identity(
    row: &LessonRow,
    mode: ViewMode,
) -> Result<SubjectKeys, FormatError> {
    match mode {
        ViewMode::Room => Ok(SubjectKeys {
            teacher: row.teacher.clone(),
            room: row.object.clone(),
        }),
        ViewMode::Teacher => Ok(SubjectKeys {
            teacher: short_teacher_name(&row.object)?,
            room: row.room.clone(),
        }),
        ViewMode::Group => Ok(SubjectKeys {
            teacher: row.teacher.clone(),
            room: row.room.clone(),
        }),
    }
}

/// `Яценко Олександр Сергійович` -> `Яценко О.С.`
pub fn short_teacher_name(full_name: &str) -> Result<String, FormatError> {
    let error = || FormatError::TeacherName(full_name.to_owned());
    let mut parts = full_name.split_whitespace();
    let (Some(last), Some(first), Some(middle)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(error());
    };
    let (Some(first), Some(middle)) = (first.chars().next(), middle.chars().next()) else {
        return Err(error());
    };
    Ok(format!("{last} {first}.{middle}."))
}

/// Reads a `Увага! Заміна! …` announcement.
///
/// The full form `Увага! Заміна! <teacher> <title…> <type> замість:` names
/// the substitute teacher, lesson title and type. The short form
/// `Увага! Заміна! <teacher> замість: <original teacher>` only names the
/// substitute teacher.
pub fn parse_replacement(
    announcement: &str,
    tables: &ReferenceTables,
) -> Result<ReplacementInfo, FormatError> {
    let malformed = || FormatError::Replacement(announcement.to_owned());

    if announcement.ends_with(FULL_REPLACEMENT_MARKER) {
        let body = strip_around(announcement, REPLACEMENT_PREFIX, FULL_REPLACEMENT_SUFFIX)
            .ok_or_else(malformed)?;
        let tokens: Vec<&str> = body.split(' ').collect();
        let [teacher, title @ .., lesson_type] = tokens.as_slice() else {
            return Err(malformed());
        };
        if title.is_empty() {
            return Err(malformed());
        }
        Ok(ReplacementInfo {
            teacher: tables.teacher(&teacher.replace(NO_BREAK_SPACE, " ")),
            title: title.join(" "),
            lesson_type: lesson_type.to_string(),
        })
    } else {
        let head = announcement
            .split(TEACHER_REPLACEMENT_SEPARATOR)
            .next()
            .unwrap_or_default();
        let teacher = strip_around(head, REPLACEMENT_PREFIX, TEACHER_REPLACEMENT_SUFFIX)
            .ok_or_else(malformed)?;
        Ok(ReplacementInfo {
            teacher: tables.teacher(&teacher.replace(NO_BREAK_SPACE, " ")),
            ..Default::default()
        })
    }
}

#[cfg(test)]
#[path = "tests/parsers_tests.rs"]
mod tests;
