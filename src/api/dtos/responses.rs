use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{file::File, meetup::Meetup, user::User};

#[derive(Serialize)]
pub struct FileResponse {
    pub id: String,
    pub name: String,
    pub path: String,
    pub url: String,
}

impl FileResponse {
    pub fn from_model(file: &File, app_url: &str) -> Self {
        Self {
            id: file.id.clone(),
            name: file.name.clone(),
            path: file.path.clone(),
            url: file.url(app_url),
        }
    }
}

#[derive(Serialize)]
pub struct MeetupResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub address_complement: Option<String>,
    pub past: bool,
    pub banner: Option<FileResponse>,
}

impl MeetupResponse {
    pub fn from_model(meetup: &Meetup, banner: Option<FileResponse>) -> Self {
        Self {
            id: meetup.id.clone(),
            title: meetup.title.clone(),
            description: meetup.description.clone(),
            start_date: meetup.start_date,
            end_date: meetup.end_date,
            address: meetup.address.clone(),
            address_complement: meetup.address_complement.clone(),
            past: meetup.past(),
            banner,
        }
    }
}

#[derive(Serialize)]
pub struct OrganizerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<FileResponse>,
}

impl OrganizerResponse {
    pub fn from_model(user: &User, avatar: Option<FileResponse>) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            avatar,
        }
    }
}

#[derive(Serialize)]
pub struct AvailableMeetupResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub address_complement: Option<String>,
    pub past: bool,
    pub organizer: OrganizerResponse,
}

impl AvailableMeetupResponse {
    pub fn from_model(meetup: &Meetup, organizer: OrganizerResponse) -> Self {
        Self {
            id: meetup.id.clone(),
            title: meetup.title.clone(),
            description: meetup.description.clone(),
            start_date: meetup.start_date,
            end_date: meetup.end_date,
            address: meetup.address.clone(),
            address_complement: meetup.address_complement.clone(),
            past: meetup.past(),
            organizer,
        }
    }
}

#[derive(Serialize)]
pub struct SubscribedMeetupResponse {
    pub id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub banner: Option<FileResponse>,
}

impl SubscribedMeetupResponse {
    pub fn from_model(meetup: &Meetup, banner: Option<FileResponse>) -> Self {
        Self {
            id: meetup.id.clone(),
            title: meetup.title.clone(),
            start_date: meetup.start_date,
            end_date: meetup.end_date,
            banner,
        }
    }
}
