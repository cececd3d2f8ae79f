//! Profile commands.

use std::io;

use clap::{Args, Subcommand};
use storefront_app::{context::AppContext, domain::profiles::models::ProfileUpdate};

use crate::{commands::CommandError, render};

#[derive(Debug, Args)]
pub(crate) struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProfileSubcommand {
    /// Show your profile
    Show,

    /// Change your profile; omitted fields keep their value
    Update(ProfileChanges),
}

#[derive(Debug, Default, Args)]
struct ProfileChanges {
    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    date_of_birth: Option<String>,

    #[arg(long)]
    phone: Option<String>,
}

impl ProfileChanges {
    fn apply(self, update: &mut ProfileUpdate) {
        if let Some(first_name) = self.first_name {
            update.first_name = first_name;
        }

        if let Some(last_name) = self.last_name {
            update.last_name = last_name;
        }

        if let Some(date_of_birth) = self.date_of_birth {
            update.date_of_birth = Some(date_of_birth);
        }

        if let Some(phone) = self.phone {
            update.phone_number = Some(phone);
        }
    }
}

pub(crate) async fn run(
    command: ProfileCommand,
    context: &AppContext,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let identity = context.auth.require_identity()?;
    let editor = context.profile_editor(identity.user_type);

    let profile = editor.load(identity.user_id).await?;

    let profile = match command.command {
        ProfileSubcommand::Show => profile,
        ProfileSubcommand::Update(changes) => {
            let mut update = ProfileUpdate::from(&profile);

            changes.apply(&mut update);

            editor.update(identity.user_id, update).await?
        }
    };

    render::write_profile(out, &profile)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_keep_their_value() {
        let mut update = ProfileUpdate {
            first_name: "Ada".to_string(),
            last_name: "Buyer".to_string(),
            phone_number: Some("555-0100".to_string()),
            ..ProfileUpdate::default()
        };

        ProfileChanges {
            last_name: Some("Lovelace".to_string()),
            ..ProfileChanges::default()
        }
        .apply(&mut update);

        assert_eq!(update.first_name, "Ada");
        assert_eq!(update.last_name, "Lovelace");
        assert_eq!(update.phone_number.as_deref(), Some("555-0100"));
    }
}
