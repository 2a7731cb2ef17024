use clap::Args;
use colored::Colorize;
use tracing::instrument;
use user_search::{SearchClient, UserProfile};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "user_cmd_tests.rs"]
mod tests;

/// Arguments for the user command
#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    /// Login of the user to look up
    pub login: String,

    /// Print the profile as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Execute the user command
#[instrument(skip(args), fields(login = %args.login))]
pub async fn execute(args: &UserArgs) -> Result<(), Error> {
    let config = AppConfig::resolve(args.config.as_deref())?;
    let client = SearchClient::new(config.client)?;

    let profile = client.lookup_user(&args.login).await?;

    if args.json {
        let json = serde_json::to_string_pretty(&profile).map_err(|e| Error::Output(e.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", render_profile(&args.login, profile.as_ref()));
    }
    Ok(())
}

/// Renders a single profile, or a not-found notice.
pub fn render_profile(login: &str, profile: Option<&UserProfile>) -> String {
    let Some(profile) = profile else {
        return format!("{}\n", format!("No user named '{}' was found.", login.trim()).yellow());
    };

    let mut out = format!("{}\n", profile.login.green().bold());
    let fields = [
        ("Name", profile.name.as_deref()),
        ("Bio", profile.bio.as_deref()),
        ("Company", profile.company.as_deref()),
        ("Location", profile.location.as_deref()),
        ("Blog", profile.blog.as_deref().filter(|b| !b.is_empty())),
        ("Joined", profile.created_at.as_deref()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            out.push_str(&format!("  {label}: {value}\n"));
        }
    }
    out.push_str(&format!(
        "  Repositories: {}  Followers: {}  Following: {}\n",
        profile.public_repos, profile.followers, profile.following
    ));
    out.push_str(&format!("  Profile: {}\n", profile.html_url));
    out
}
