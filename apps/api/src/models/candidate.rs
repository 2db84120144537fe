use serde::{Deserialize, Serialize};

/// A row of `seeker_profiles` with the nested `user_skills -> skills` join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRow {
    #[serde(deserialize_with = "super::id_as_string")]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub user_skills: Option<Vec<UserSkillJoin>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSkillJoin {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillJoin>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillJoin {
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_numeric_id_and_null_joins() {
        let row: CandidateRow = serde_json::from_value(json!({
            "id": 42,
            "full_name": "سارة",
            "user_skills": null
        }))
        .unwrap();
        assert_eq!(row.id, "42");
        assert!(row.user_skills.is_none());
        assert!(row.email.is_none());
    }

    #[test]
    fn test_deserializes_nested_skill_join() {
        let row: CandidateRow = serde_json::from_value(json!({
            "id": "c1",
            "user_skills": [
                { "level": "expert", "skills": { "name": "Rust" } },
                { "level": null, "skills": null }
            ]
        }))
        .unwrap();
        let skills = row.user_skills.unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(
            skills[0].skills.as_ref().and_then(|s| s.name.as_deref()),
            Some("Rust")
        );
        assert!(skills[1].skills.is_none());
    }
}
