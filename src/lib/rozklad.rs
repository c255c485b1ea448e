//! Client and normalization engine for the PS-Rozklad timetable export.
//!
//! Raw `roz_items` rows are turned into [`models::Lesson`] records by
//! [`converter::convert_rows`], using a [`reference::ReferenceTables`]
//! snapshot of the known groups, teachers and rooms.
pub mod converter;
pub mod errors;
pub mod helpers;
pub mod merger;
pub mod models;
pub mod parsers;
pub mod reference;
pub mod run_tool;
pub mod schedule_getter;
