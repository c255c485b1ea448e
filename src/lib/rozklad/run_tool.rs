use chrono::NaiveDate;
use futures::try_join;
use log::info;

use super::{
    converter::convert_rows,
    errors::{RozkladError, RozkladResult},
    helpers::{log_all_lessons, write_lessons},
    models::{Args, Lesson, ViewMode},
    reference::ReferenceTables,
    schedule_getter::ScheduleGetter,
};

/// Fetches the three object lists at once and indexes them.
pub async fn load_reference_tables<SG: ScheduleGetter>(
    schedule_getter: &SG,
) -> RozkladResult<ReferenceTables> {
    let (groups, teachers, rooms) = try_join!(
        schedule_getter.get_groups(),
        schedule_getter.get_teachers(),
        schedule_getter.get_rooms()
    )?;
    info!(
        "Collected {} groups, {} teachers and {} rooms",
        groups.len(),
        teachers.len(),
        rooms.len()
    );
    Ok(ReferenceTables::new(groups, teachers, rooms))
}

/// Fetches and normalizes the timetable of one object.
/// Must be called with tables that are already loaded.
pub async fn get_lessons<SG: ScheduleGetter>(
    schedule_getter: &SG,
    tables: &ReferenceTables,
    subject_id: u32,
    mode: ViewMode,
    begin_date: NaiveDate,
    end_date: NaiveDate,
) -> RozkladResult<Vec<Lesson>> {
    let rows = schedule_getter
        .get_lesson_rows(subject_id, mode, begin_date, end_date)
        .await?;
    info!("Collected {} timetable rows", rows.len());
    let lessons = convert_rows(&rows, mode, tables)?;
    log_all_lessons(&lessons);
    Ok(lessons)
}

/// Loads the object lists, then fetches the timetable of `args.subject`
/// and writes it to `args.output_json_path`. Nothing is written on error.
pub async fn run<SG: ScheduleGetter>(
    schedule_getter: &SG,
    args: &Args,
) -> RozkladResult<Vec<Lesson>> {
    let tables = load_reference_tables(schedule_getter).await?;
    let subject_id = tables
        .subject_id(args.mode, &args.subject)
        .ok_or_else(|| RozkladError::UnknownSubject {
            mode: args.mode,
            name: args.subject.clone(),
        })?;
    info!("Found {} {:?} with id {}", args.mode, args.subject, subject_id);

    let lessons = get_lessons(
        schedule_getter,
        &tables,
        subject_id,
        args.mode,
        args.begin_date,
        args.end_date,
    )
    .await?;
    write_lessons(args, &lessons)?;
    Ok(lessons)
}
