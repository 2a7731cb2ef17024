use super::*;

fn profile() -> UserProfile {
    UserProfile {
        id: 583231,
        login: "octocat".to_string(),
        avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".to_string(),
        html_url: "https://github.com/octocat".to_string(),
        name: Some("The Octocat".to_string()),
        bio: None,
        location: Some("San Francisco".to_string()),
        company: Some("@github".to_string()),
        blog: Some(String::new()),
        public_repos: 8,
        followers: 9000,
        following: 9,
        created_at: Some("2011-01-25T18:44:36Z".to_string()),
    }
}

#[test]
fn test_render_profile() {
    let output = render_profile("octocat", Some(&profile()));

    assert!(output.contains("Name: The Octocat"));
    assert!(output.contains("Company: @github"));
    assert!(output.contains("Repositories: 8  Followers: 9000  Following: 9"));
    assert!(output.contains("Profile: https://github.com/octocat"));
    assert!(!output.contains("Bio:"));
    assert!(!output.contains("Blog:"));
}

#[test]
fn test_render_missing_profile() {
    let output = render_profile(" ghost ", None);

    assert!(output.contains("No user named 'ghost' was found."));
}
