use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{FixedOffset, TimeZone};
use serde_json::json;
use std::io::Cursor;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::matching::adapter::outgoing::sea_orm_entity::match_requests;

fn fixed_now() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 6, 10, 9, 0, 0)
        .unwrap()
}

/// A `users` row with an empty bio and no avatar.
pub fn user_model(id: Uuid, role: &str, name: &str, skills: &[&str]) -> users::Model {
    users::Model {
        id,
        email: format!("{}@example.com", name.to_lowercase()),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role: role.to_string(),
        name: name.to_string(),
        bio: String::new(),
        image_data: None,
        image_format: None,
        skills: json!(skills),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

pub fn match_request_model(mentor_id: Uuid, mentee_id: Uuid, status: &str) -> match_requests::Model {
    match_requests::Model {
        id: Uuid::new_v4(),
        mentor_id,
        mentee_id,
        message: "Could you help me with Rust?".to_string(),
        status: status.to_string(),
        created_at: fixed_now(),
        updated_at: fixed_now(),
    }
}

/// Encodes a blank `width` x `height` image.
pub fn image_bytes(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

pub fn encoded_image(width: u32, height: u32, format: image::ImageFormat) -> String {
    STANDARD.encode(image_bytes(width, height, format))
}
