//! Github repository payloads
use serde::{Deserialize, Serialize};

/// Github Repo, as returned by the API
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct RepoGithub {
    /// Owner and name
    pub full_name: String,

    /// Repository URL
    pub html_url: String,
}

/// Body of `POST /user/repos`
#[derive(Serialize, Debug, Clone)]
pub struct NewRepo {
    /// Repository name
    pub name: String,

    /// Repository description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Create a private repository
    pub private: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_api_repo() {
        let json = r#"{
            "id": 42,
            "name": "dashboard",
            "full_name": "alice/dashboard",
            "description": null,
            "private": false,
            "html_url": "https://github.com/alice/dashboard",
            "default_branch": "main",
            "fork": false
        }"#;
        let repo: RepoGithub = serde_json::from_str(json).unwrap();
        assert_eq!(repo.full_name, "alice/dashboard");
        assert_eq!(repo.html_url, "https://github.com/alice/dashboard");
    }

    #[test]
    fn new_repo_body_with_description() {
        let body = NewRepo {
            name: "dashboard".to_string(),
            description: Some("Company dashboard".to_string()),
            private: false,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "dashboard", "description": "Company dashboard", "private": false})
        );
    }

    #[test]
    fn new_repo_body() {
        let body = NewRepo {
            name: "dashboard".to_string(),
            description: None,
            private: true,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"name": "dashboard", "private": true}));
    }
}
