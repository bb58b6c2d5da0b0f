use serde::{Deserialize, Serialize};

/// A government benefit program in the static catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub documents: Vec<String>,
    pub apply_link: String,
    pub eligibility: Eligibility,
}

/// Per-attribute constraints a scheme imposes on a quiz submission.
/// A `None` field means the attribute is unconstrained and always passes.
/// Age bounds are inclusive; string attributes require exact membership in
/// the accepted-value set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Eligibility {
    pub age_min: Option<i32>,
    pub age_max: Option<i32>,
    pub gender: Option<Vec<String>>,
    pub occupation: Option<Vec<String>>,
    pub category: Option<Vec<String>>,
    pub income: Option<Vec<String>>,
    pub area: Option<Vec<String>>,
    pub has_land: Option<Vec<String>>,
    pub is_disabled: Option<Vec<String>>,
}

/// Scheme as returned to clients -- eligibility rules stripped, optional
/// display tag added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub documents: Vec<String>,
    pub apply_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_match: Option<String>,
}

impl Scheme {
    /// Client-facing view of the scheme.
    pub fn to_response(&self, tag: Option<&str>) -> SchemeResponse {
        SchemeResponse {
            id: self.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            benefits: self.benefits.clone(),
            documents: self.documents.clone(),
            apply_link: self.apply_link.clone(),
            eligibility_match: tag.map(|t| t.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_strips_eligibility_rules() {
        let scheme = Scheme {
            id: "scheme_x".to_string(),
            name: "Test Scheme".to_string(),
            category: "Education".to_string(),
            description: "A scheme".to_string(),
            benefits: vec!["benefit".to_string()],
            documents: vec!["doc".to_string()],
            apply_link: "https://example.com".to_string(),
            eligibility: Eligibility {
                age_min: Some(18),
                ..Default::default()
            },
        };

        let response = scheme.to_response(Some("Eligible"));
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("eligibility").is_none());
        assert_eq!(json["eligibility_match"], "Eligible");
    }

    #[test]
    fn test_response_without_tag_omits_match_field() {
        let scheme = Scheme {
            id: "scheme_x".to_string(),
            name: "Test Scheme".to_string(),
            category: "Health".to_string(),
            description: "A scheme".to_string(),
            benefits: vec![],
            documents: vec![],
            apply_link: "https://example.com".to_string(),
            eligibility: Eligibility::default(),
        };

        let json = serde_json::to_value(scheme.to_response(None)).unwrap();
        assert!(json.get("eligibility_match").is_none());
    }
}
