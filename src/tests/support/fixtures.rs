//! Canned backend payloads shared by adapter and page tests.

use serde_json::{json, Value};

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::project::application::domain::entities::Project;

/// A saved profile as the backend serialises it (numeric ids, camelCase).
pub fn backend_profile_json() -> Value {
    json!({
        "id": 1,
        "name": "Jane Doe",
        "title": "Backend Engineer",
        "bio": "Writes services.",
        "email": "jane@example.com",
        "phone": null,
        "address": null,
        "image": "jane.png",
        "careers": [
            { "id": 10, "company": "Acme", "position": "Eng", "period": "2020-2023", "description": "Built things" }
        ],
        "educations": [
            { "id": 20, "institution": "State University", "degree": "BSc", "period": "2015-2019", "description": null }
        ],
        "skills": [
            { "id": 30, "name": "Rust", "level": 5, "category": "Backend" },
            { "id": 31, "name": "React", "level": 3, "category": "Frontend" }
        ],
        "socials": [
            { "id": 40, "platform": "GitHub", "url": "janedoe", "icon": "github" }
        ]
    })
}

pub fn saved_profile() -> Profile {
    serde_json::from_value(backend_profile_json()).expect("fixture profile decodes")
}

pub fn backend_project_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "",
        "title": "Portfolio Site",
        "summary": "Personal site",
        "description": "A site about me",
        "role": "Solo",
        "technologies": ["Rust", "React"],
        "thumbnail": "b.png",
        "images": ["a.png", "b.png", "c.png"],
        "github": "https://github.com/jane/site",
        "website": null,
        "startDate": "2024-01-01",
        "endDate": "2024-03-01",
        "troubleshooting": [
            { "id": 5, "title": "CORS", "description": "Fixed headers", "image": "cors.png" }
        ]
    })
}

pub fn saved_project(id: i64) -> Project {
    let mut project: Project =
        serde_json::from_value(backend_project_json(id)).expect("fixture project decodes");
    project.normalize_names();
    project
}
