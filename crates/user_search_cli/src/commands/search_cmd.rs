use clap::Args;
use colored::Colorize;
use tracing::{instrument, warn};
use user_search::{SearchClient, SearchParams, SearchResult, UserRecord};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "search_cmd_tests.rs"]
mod tests;

/// Arguments for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Username or keyword to search for
    pub term: String,

    /// Only return users whose profile location matches
    #[arg(short, long)]
    pub location: Option<String>,

    /// Only return users with at least this many public repositories
    #[arg(short = 'r', long)]
    pub min_repos: Option<u32>,

    /// Result page to fetch, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Fetch full profile details for every result
    #[arg(short, long)]
    pub enrich: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

impl SearchArgs {
    /// Converts the arguments into validated search parameters.
    pub fn to_params(&self) -> Result<SearchParams, Error> {
        let mut params = SearchParams::new(&self.term)?
            .with_page(self.page)?
            .with_enrichment(self.enrich);
        if let Some(location) = &self.location {
            params = params.with_location(location.clone());
        }
        if let Some(min_repos) = self.min_repos {
            params = params.with_min_repos(min_repos);
        }
        Ok(params)
    }
}

/// Execute the search command
#[instrument(skip(args), fields(term = %args.term))]
pub async fn execute(args: &SearchArgs) -> Result<(), Error> {
    let params = args.to_params()?;
    let config = AppConfig::resolve(args.config.as_deref())?;
    let client = SearchClient::new(config.client)?;

    let result = client.search(&params).await?;

    if let Some(report) = &result.enrichment {
        if report.is_total_failure() {
            warn!("Could not load profile details for any result");
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| Error::Output(e.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", render_result(&result));
    }
    Ok(())
}

/// Renders a result page as human-readable text.
pub fn render_result(result: &SearchResult) -> String {
    if result.items.is_empty() {
        return format!("{}\n", "No users found.".yellow());
    }

    let mut out = format!(
        "{} users found, page {}\n\n",
        result.total_count.to_string().bold(),
        result.current_page
    );
    for user in &result.items {
        out.push_str(&render_user(user));
    }

    if let Some(report) = &result.enrichment {
        if report.is_total_failure() {
            out.push_str(&format!(
                "\n{}\n",
                "Profile details are unavailable right now.".yellow()
            ));
        } else if report.failed > 0 {
            out.push_str(&format!(
                "\nProfile details could not be loaded for {} of {} users.\n",
                report.failed,
                result.items.len()
            ));
        }
    }

    if result.has_more {
        out.push_str(&format!(
            "\nMore results available, use --page {}\n",
            result.current_page + 1
        ));
    }
    out
}

fn render_user(user: &UserRecord) -> String {
    let mut line = format!("  {}  {}", user.login.green().bold(), user.html_url);
    if let Some(name) = &user.name {
        line.push_str(&format!("  ({name})"));
    }
    if let Some(location) = &user.location {
        line.push_str(&format!("  [{location}]"));
    }
    if let (Some(repos), Some(followers)) = (user.public_repos, user.followers) {
        line.push_str(&format!("  repos: {repos}, followers: {followers}"));
    }
    line.push('\n');
    line
}
