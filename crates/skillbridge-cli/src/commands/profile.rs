use anyhow::Result;
use colored::Colorize;
use skillbridge_core::SkillBridgeError;
use skillbridge_core::session::UserUpdate;

use crate::app::App;

/// Profile flags as given on the command line.
pub struct ProfileFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
}

impl ProfileFields {
    fn into_update(self) -> UserUpdate {
        // `--bio ""` clears the field.
        fn optional(value: String) -> Option<String> {
            if value.trim().is_empty() { None } else { Some(value) }
        }

        UserUpdate {
            name: self.name,
            email: self.email,
            avatar: self.avatar.map(optional),
            bio: self.bio.map(optional),
            location: self.location.map(optional),
            company: self.company.map(optional),
            website: self.website.map(optional),
            ..UserUpdate::default()
        }
    }
}

pub fn set(app: &App, fields: ProfileFields) -> Result<()> {
    let update = fields.into_update();
    if update.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    app.session.update_user(update).map_err(login_hint)?;
    println!("{} Profile updated.", "✓".green());
    Ok(())
}

pub fn progress(app: &App, course_id: &str, percent: u32) -> Result<()> {
    if percent > 100 {
        println!(
            "{} {}% is above 100%; recording it anyway.",
            "!".yellow(),
            percent
        );
    }
    app.session
        .update_progress(course_id, percent)
        .map_err(login_hint)?;
    println!("{} {} at {}%", "✓".green(), course_id.bold(), percent);
    Ok(())
}

pub(crate) fn login_hint(e: SkillBridgeError) -> anyhow::Error {
    if e.requires_login() {
        println!(
            "{} Sign in first: skillbridge login --email <email> --password <password>",
            "✗".red()
        );
    }
    e.into()
}
