use log::debug;

use super::{
    errors::FormatError,
    merger::merge_slots,
    models::{feed_model::LessonRow, Lesson, ViewMode},
    parsers::{
        parse_group_expression, parse_replacement, parse_subject_identity, parse_time_range,
        GroupExpression, ONLINE_FLAG, SUBGROUP_CLOSING,
    },
    reference::ReferenceTables,
};

/// Converts a whole batch of rows and merges lessons of the same slot.
///
/// The first malformed row fails the batch; no lessons are returned then.
pub fn convert_rows(
    rows: &[LessonRow],
    mode: ViewMode,
    tables: &ReferenceTables,
) -> Result<Vec<Lesson>, FormatError> {
    let lessons = rows
        .iter()
        .map(|row| convert_row(row, mode, tables))
        .collect::<Result<Vec<_>, _>>()?;
    let lessons = merge_slots(lessons);
    debug!("Converted {} row(s) in {} view", lessons.len(), mode);
    Ok(lessons)
}

/// Builds a lesson from one row, before slot merging.
pub fn convert_row(
    row: &LessonRow,
    mode: ViewMode,
    tables: &ReferenceTables,
) -> Result<Lesson, FormatError> {
    let keys = parse_subject_identity(row, mode)?;
    let (start_time, end_time) = parse_time_range(&row.lesson_time, &row.date)?;
    let GroupExpression {
        groups,
        groups_type,
        sub_group,
    } = row_groups(row, mode, tables)?;
    let number = parse_lesson_number(&row.lesson_number)?;

    let online = row.online == ONLINE_FLAG;
    let (url, comment_for_link) = if online {
        (row.link.clone(), row.comment4link.clone())
    } else {
        (String::new(), String::new())
    };

    let replacement = if row.replacement.is_empty() {
        None
    } else {
        Some(parse_replacement(&row.replacement, tables)?)
    };

    Ok(Lesson {
        title: row.title.clone(),
        teacher: tables.teacher(&keys.teacher),
        lesson_type: row.lesson_type.clone(),
        day: row.date.clone(),
        number,
        room: tables.room(&keys.room),
        groups_type,
        groups,
        sub_group,
        start_time,
        end_time,
        online,
        url,
        comment_for_link,
        replacement,
    })
}

/* teacher and room timetables write subgroups as "22Бд-СОмат (підгр. 1)" */
fn row_groups(
    row: &LessonRow,
    mode: ViewMode,
    tables: &ReferenceTables,
) -> Result<GroupExpression, FormatError> {
    if mode != ViewMode::Group && row.group.ends_with(SUBGROUP_CLOSING) {
        let (group, sub_group) = row
            .group
            .split_once(' ')
            .ok_or_else(|| FormatError::SubGroup(row.group.clone()))?;
        Ok(parse_group_expression(group, sub_group, tables))
    } else {
        Ok(parse_group_expression(&row.object, &row.group, tables))
    }
}

/// Lesson numbers count from 1.
pub fn parse_lesson_number(number: &str) -> Result<u32, FormatError> {
    match number.parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(FormatError::LessonNumber(number.to_owned())),
    }
}

#[cfg(test)]
#[path = "tests/converter_tests.rs"]
mod tests;
