use colored::Colorize;
use skillbridge_core::session::{FontSize, ProfileVisibility, Theme, UserSettings};

use crate::app::App;

/// Individual settings changes from the command line.
pub struct SettingsChanges {
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub marketing: Option<bool>,
    pub visibility: Option<ProfileVisibility>,
    pub show_activity: Option<bool>,
    pub theme: Option<Theme>,
    pub font_size: Option<FontSize>,
    pub language: Option<String>,
}

impl SettingsChanges {
    fn apply_to(self, settings: &mut UserSettings) {
        if let Some(value) = self.email_notifications {
            settings.notifications.email = value;
        }
        if let Some(value) = self.push_notifications {
            settings.notifications.push = value;
        }
        if let Some(value) = self.marketing {
            settings.notifications.marketing = value;
        }
        if let Some(value) = self.visibility {
            settings.privacy.profile_visibility = value;
        }
        if let Some(value) = self.show_activity {
            settings.privacy.show_activity = value;
        }
        if let Some(value) = self.theme {
            settings.appearance.theme = value;
        }
        if let Some(value) = self.font_size {
            settings.appearance.font_size = value;
        }
        if let Some(value) = self.language {
            settings.language = value;
        }
    }
}

pub fn show(app: &App) {
    print_settings(&app.session.settings());
}

/// Settings are replaced wholesale, so fetch, edit and write back the full
/// record.
pub fn set(app: &App, changes: SettingsChanges) {
    let mut settings = app.session.settings();
    changes.apply_to(&mut settings);
    app.session.update_settings(settings.clone());
    println!("{} Settings saved.", "✓".green());
    print_settings(&settings);
}

fn print_settings(settings: &UserSettings) {
    println!("{}", "Notifications".bold());
    println!("  email:      {}", settings.notifications.email);
    println!("  push:       {}", settings.notifications.push);
    println!("  marketing:  {}", settings.notifications.marketing);
    println!("{}", "Privacy".bold());
    println!("  visibility: {}", settings.privacy.profile_visibility);
    println!("  activity:   {}", settings.privacy.show_activity);
    println!("{}", "Appearance".bold());
    println!("  theme:      {}", settings.appearance.theme);
    println!("  font size:  {}", settings.appearance.font_size);
    println!("{}", "Language".bold());
    println!("  {}", settings.language);
}
