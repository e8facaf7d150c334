use crate::controller::Exhaust;
use application::transfer::{BlacklistDetailDto, BlacklistEntryDto};
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BlacklistResponse {
    id: Uuid,
    student_id: i64,
    book_id: String,
}

pub struct BlacklistPresenter;

impl Exhaust<Vec<BlacklistEntryDto>> for BlacklistPresenter {
    type To = Json<Vec<BlacklistResponse>>;
    fn emit(&self, input: Vec<BlacklistEntryDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(
                    |BlacklistEntryDto {
                         id,
                         student_id,
                         book_id,
                     }| BlacklistResponse {
                        id,
                        student_id,
                        book_id,
                    },
                )
                .collect(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct BlacklistDetailResponse {
    book_id: String,
    book_title: String,
    student_id: i64,
    student_name: String,
    due_date: Date,
    penalty: i64,
}

pub struct BlacklistDetailsPresenter;

impl Exhaust<Vec<BlacklistDetailDto>> for BlacklistDetailsPresenter {
    type To = Json<Vec<BlacklistDetailResponse>>;
    fn emit(&self, input: Vec<BlacklistDetailDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(
                    |BlacklistDetailDto {
                         book_id,
                         book_title,
                         student_id,
                         student_name,
                         due_date,
                         penalty,
                     }| BlacklistDetailResponse {
                        book_id,
                        book_title,
                        student_id,
                        student_name,
                        due_date,
                        penalty,
                    },
                )
                .collect(),
        )
    }
}

pub struct RemovePresenter;

impl Exhaust<()> for RemovePresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
