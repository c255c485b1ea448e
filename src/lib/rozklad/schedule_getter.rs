use chrono::NaiveDate;
use log::info;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{
    errors::RozkladResult,
    helpers::{
        decode_groups, decode_lesson_rows, decode_rooms, decode_teachers, export_base_uri,
        lessons_url, object_list_url,
    },
    models::{
        feed_model::{GroupsExport, LessonRow, LessonsExport, RoomsExport, TeachersExport},
        reference_model::{Group, Room, Teacher},
        ViewMode,
    },
};

/// A trait, necessary for every entity that will be used for getting the timetable export.
#[allow(async_fn_in_trait)]
pub trait ScheduleGetter {
    async fn get_groups(&self) -> RozkladResult<Vec<Group>>;
    async fn get_teachers(&self) -> RozkladResult<Vec<Teacher>>;
    async fn get_rooms(&self) -> RozkladResult<Vec<Room>>;
    async fn get_lesson_rows(
        &self,
        subject_id: u32,
        mode: ViewMode,
        begin_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RozkladResult<Vec<LessonRow>>;
}

/// Client of a dekanat site's `timetable_export.cgi`.
#[derive(Debug, Clone)]
pub struct Api {
    pub export_uri: String,
    pub http_client: Client,
}

impl Api {
    /// `base_uri` is the site root, ending with a slash.
    pub fn new(base_uri: &str, http_client: Client) -> Self {
        Self {
            export_uri: export_base_uri(base_uri),
            http_client,
        }
    }

    async fn get_export<T: DeserializeOwned>(&self, request_url: String) -> RozkladResult<T> {
        let response = self
            .http_client
            .get(request_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Allows to use Api for getting the timetable via requests to the export.
impl ScheduleGetter for Api {
    async fn get_groups(&self) -> RozkladResult<Vec<Group>> {
        info!("Getting group list");
        let export: GroupsExport = self
            .get_export(object_list_url(&self.export_uri, ViewMode::Group))
            .await?;
        decode_groups(export)
    }

    async fn get_teachers(&self) -> RozkladResult<Vec<Teacher>> {
        info!("Getting teacher list");
        let export: TeachersExport = self
            .get_export(object_list_url(&self.export_uri, ViewMode::Teacher))
            .await?;
        decode_teachers(export)
    }

    async fn get_rooms(&self) -> RozkladResult<Vec<Room>> {
        info!("Getting room list");
        let export: RoomsExport = self
            .get_export(object_list_url(&self.export_uri, ViewMode::Room))
            .await?;
        decode_rooms(export)
    }

    async fn get_lesson_rows(
        &self,
        subject_id: u32,
        mode: ViewMode,
        begin_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RozkladResult<Vec<LessonRow>> {
        info!(
            "Getting timetable of {} {} from {} to {}",
            mode, subject_id, begin_date, end_date
        );
        let export: LessonsExport = self
            .get_export(lessons_url(
                &self.export_uri,
                subject_id,
                mode,
                begin_date,
                end_date,
            ))
            .await?;
        Ok(decode_lesson_rows(export))
    }
}
