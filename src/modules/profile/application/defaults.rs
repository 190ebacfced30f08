// src/modules/profile/application/defaults.rs

use super::domain::entities::{Career, Education, EntityId, Profile, Skill, Social};
use crate::modules::multimedia::application::image_url::DEFAULT_PROFILE_IMAGE;

/// Fallback aggregate shown when the backend has no profile yet. Every nested
/// row is unsaved, so it can be posted as-is during bootstrap.
pub fn default_profile() -> Profile {
    Profile {
        id: EntityId::Unsaved,
        name: "Jane Doe".to_string(),
        title: "Web Developer".to_string(),
        bio: Some(
            "Hello! I am a web developer building web applications with React, \
             TypeScript and Next.js."
                .to_string(),
        ),
        email: Some("example@email.com".to_string()),
        phone: None,
        address: None,
        image: Some(DEFAULT_PROFILE_IMAGE.to_string()),
        location: None,
        careers: vec![Career {
            id: EntityId::Unsaved,
            company: "ABC Technology".to_string(),
            position: "Frontend Developer".to_string(),
            period: "Mar 2021 - Present".to_string(),
            description: Some(
                "Web application development with React and TypeScript".to_string(),
            ),
        }],
        educations: vec![Education {
            id: EntityId::Unsaved,
            institution: "State University".to_string(),
            degree: Some("B.S. Computer Science".to_string()),
            period: "Mar 2015 - Feb 2019".to_string(),
            description: Some(
                "Majored in computer science, algorithms and software engineering.".to_string(),
            ),
        }],
        skills: vec![
            skill("React", 4, "Frontend"),
            skill("TypeScript", 4, "Frontend"),
            skill("Node.js", 3, "Backend"),
        ],
        socials: vec![
            social("GitHub", "https://github.com/", "github"),
            social("LinkedIn", "https://linkedin.com/", "linkedin"),
        ],
    }
}

/// What the home page shows before the first fetch completes.
pub fn loading_placeholder() -> Profile {
    Profile {
        id: EntityId::Unsaved,
        name: "Loading...".to_string(),
        title: "Loading...".to_string(),
        bio: Some("Loading profile data...".to_string()),
        email: Some("loading@example.com".to_string()),
        image: Some(DEFAULT_PROFILE_IMAGE.to_string()),
        ..Profile::default()
    }
}

fn skill(name: &str, level: u8, category: &str) -> Skill {
    Skill {
        id: EntityId::Unsaved,
        name: name.to_string(),
        level,
        category: Some(category.to_string()),
    }
}

fn social(platform: &str, url: &str, icon: &str) -> Social {
    Social {
        id: EntityId::Unsaved,
        platform: platform.to_string(),
        url: Some(url.to_string()),
        icon: Some(icon.to_string()),
    }
}
