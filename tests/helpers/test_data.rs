//! Request payload builders

use axum_test::multipart::{MultipartForm, Part};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use serde_json::{json, Value};

pub const EVENT_DATE_TIME: &str = "2030-05-04T09:00:00.000Z";

/// A complete event creation form
pub fn event_form(event_name: &str, max_spots: i32) -> MultipartForm {
    MultipartForm::new()
        .add_text("creatorName", "Grace Hopper")
        .add_text("eventName", event_name.to_string())
        .add_text("location", "North pier")
        .add_text("dateTime", EVENT_DATE_TIME)
        .add_text("maxSpots", max_spots.to_string())
        .add_text("contact", "grace@example.com")
}

/// An event form carrying a small PNG
pub fn event_form_with_image(event_name: &str, max_spots: i32) -> MultipartForm {
    event_form(event_name, max_spots).add_part("image", png_part("poster.png"))
}

pub fn png_part(file_name: &str) -> Part {
    Part::bytes(png_bytes())
        .file_name(file_name.to_string())
        .mime_type("image/png")
}

pub fn png_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]
}

pub fn registration(full_name: &str, email: &str, password: &str) -> Value {
    json!({ "fullName": full_name, "email": email, "password": password })
}

pub fn login(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}

pub fn signup(name: &str, email: &str) -> Value {
    json!({ "name": name, "email": email, "phone": "+1 555 0100" })
}

/// A sign-up body with generated contact details
pub fn fake_signup() -> Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let phone: String = PhoneNumber().fake();
    json!({ "name": name, "email": email, "phone": phone })
}
