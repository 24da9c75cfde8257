use anyhow::Result;
use colored::Colorize;
use skillbridge_core::SkillBridgeError;

use crate::app::App;

pub async fn login(app: &App, email: &str, password: &str) -> Result<()> {
    match app.session.login(email, password).await {
        Ok(()) => {
            let name = app
                .session
                .user()
                .map(|user| user.name)
                .unwrap_or_default();
            println!("{} Welcome back, {}!", "✓".green(), name.bold());
            Ok(())
        }
        Err(SkillBridgeError::InvalidCredentials) => {
            println!("{} Invalid credentials, please try again.", "✗".red());
            Err(SkillBridgeError::InvalidCredentials.into())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn logout(app: &App) {
    let was_authenticated = app.session.is_authenticated();
    app.session.logout();
    if was_authenticated {
        println!("{} Signed out.", "✓".green());
    } else {
        println!("Not signed in.");
    }
}

pub fn status(app: &App) {
    let state = app.session.state();

    match &state.user {
        Some(user) => {
            println!("{} {} <{}>", "Signed in as".green(), user.name.bold(), user.email);
            println!("  id:       {}", user.id);
            for (label, value) in [
                ("bio", &user.bio),
                ("location", &user.location),
                ("company", &user.company),
                ("website", &user.website),
                ("avatar", &user.avatar),
                ("path", &user.current_path),
            ] {
                if let Some(value) = value {
                    println!("  {:<9} {}", format!("{}:", label), value);
                }
            }
            if !user.completed_courses.is_empty() {
                let courses: Vec<&str> =
                    user.completed_courses.iter().map(String::as_str).collect();
                println!("  completed: {}", courses.join(", "));
            }
            if !user.progress.is_empty() {
                println!("  {}", "progress:".bold());
                for (course, percent) in &user.progress {
                    println!("    {:<20} {:>3}%", course, percent);
                }
            }
        }
        None => println!("{}", "Not signed in.".yellow()),
    }

    println!(
        "  theme: {}, font: {}, language: {}",
        state.settings.appearance.theme,
        state.settings.appearance.font_size,
        state.settings.language
    );
    if let Ok(dir) = app.paths.data_dir() {
        println!(
            "  storage: {}",
            dir.join(format!("{}.json", app.config.storage.session_key))
                .display()
                .to_string()
                .dimmed()
        );
    }
}

pub fn reset(app: &App) -> Result<()> {
    app.session.reset()?;
    println!("{} Stored session and settings cleared.", "✓".green());
    Ok(())
}
