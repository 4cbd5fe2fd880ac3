//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tgle_entity::artist::CreateArtist;
use tgle_entity::concert::CreateConcert;
use tgle_service::{RegisterUser, UpdateUserInfo};

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
}

impl From<SignUpRequest> for RegisterUser {
    fn from(req: SignUpRequest) -> Self {
        Self {
            email: req.email,
            nickname: req.nickname,
            password: req.password,
            confirm_password: req.confirm_password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// `GET /users/signup?nickname=`
#[derive(Debug, Clone, Deserialize)]
pub struct NicknameQuery {
    pub nickname: Option<String>,
}

/// Query string of the Kakao redirect.
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoCallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Partial update of the current user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInfoRequest {
    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl From<UpdateUserInfoRequest> for UpdateUserInfo {
    fn from(req: UpdateUserInfoRequest) -> Self {
        Self {
            nickname: req.nickname,
            password: req.password,
            confirm_password: req.confirm_password,
        }
    }
}

/// Create concert request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConcertRequest {
    pub category_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "Concert name must be 1-255 characters"))]
    pub concert_name: String,
    #[validate(url)]
    pub concert_img: Option<String>,
    pub concert_info: Option<String>,
    pub concert_date: Option<String>,
    pub ticketing_date: Option<String>,
    #[validate(url)]
    pub ticketing_url: Option<String>,
    pub calender: Option<String>,
    pub play_time: Option<String>,
    pub location_name: Option<String>,
    pub ratings: Option<String>,
}

impl From<CreateConcertRequest> for CreateConcert {
    fn from(req: CreateConcertRequest) -> Self {
        Self {
            category_id: req.category_id,
            concert_name: req.concert_name,
            concert_img: req.concert_img,
            concert_info: req.concert_info,
            concert_date: req.concert_date,
            ticketing_date: req.ticketing_date,
            ticketing_url: req.ticketing_url,
            calender: req.calender,
            play_time: req.play_time,
            location_name: req.location_name,
            ratings: req.ratings,
        }
    }
}

/// Create artist request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArtistRequest {
    #[validate(length(min = 1, max = 255, message = "Artist name must be 1-255 characters"))]
    pub artist_name: String,
    #[validate(url)]
    pub artist_img: Option<String>,
    pub artist_info: Option<String>,
    pub category_id: Option<i64>,
}

impl From<CreateArtistRequest> for CreateArtist {
    fn from(req: CreateArtistRequest) -> Self {
        Self {
            artist_name: req.artist_name,
            artist_img: req.artist_img,
            artist_info: req.artist_info,
            category_id: req.category_id,
        }
    }
}
