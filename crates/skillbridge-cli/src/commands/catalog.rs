use anyhow::{Result, anyhow};
use colored::Colorize;
use skillbridge_core::assessment::generate_learning_path;
use skillbridge_core::catalog::{find_path, find_skill, learning_paths, skill_categories};
use skillbridge_core::session::UserUpdate;

use super::profile::login_hint;
use crate::app::App;

pub fn skills() {
    for category in skill_categories() {
        println!("{} ({})", category.name.bold(), category.id);
        for skill in &category.skills {
            println!("  {:<22} {}", skill.id, skill.name);
        }
    }
}

pub fn paths() {
    for path in learning_paths() {
        println!(
            "{} {}",
            path.title.bold(),
            format!("[{}]", path.id).dimmed()
        );
        println!("  {}", path.description);
        println!(
            "  {} · {} · ★ {} · {} students",
            path.duration, path.level, path.rating, path.students
        );
    }
}

/// Ticks the given skills, then runs the generate-path flow.
pub fn assess(app: &App, skill_ids: &[String], path_id: Option<&str>) -> Result<()> {
    app.skills.subscribe_slice(
        |state| state.selected_skills.len(),
        |count| tracing::debug!(count, "Selection changed"),
    );

    for skill_id in skill_ids {
        let skill = find_skill(skill_id)
            .ok_or_else(|| anyhow!("Unknown skill '{}' (see `skillbridge skills`)", skill_id))?;
        app.skills.add_skill(skill.clone());
    }

    if let Some(path_id) = path_id {
        if find_path(path_id).is_none() {
            println!(
                "{} '{}' is not in the path catalog; saving it anyway.",
                "!".yellow(),
                path_id
            );
        }
    }

    let paths = generate_learning_path(&app.session, &app.skills, path_id)
        .map_err(login_hint)?;

    let selected = app.skills.selected_skills();
    let names: Vec<&str> = selected.iter().map(|skill| skill.name.as_str()).collect();
    println!("{} Assessment complete: {}", "✓".green(), names.join(", "));

    match app.skills.current_path() {
        Some(path_id) => {
            app.session
                .update_user(UserUpdate::new().current_path(Some(path_id.clone())))
                .map_err(login_hint)?;
            println!("Enrolled in {}", path_id.bold());
        }
        None => {
            println!("Recommended learning paths:");
            for path in paths {
                println!("  {:<24} {}", path.id, path.title);
            }
            println!("Pick one with --path <id>.");
        }
    }

    Ok(())
}
