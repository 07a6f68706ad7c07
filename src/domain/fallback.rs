use crate::domain::model::{ContactInfo, ServiceItem, SiteContent, TeamMember};

fn service(id: i64, title: &str, description: &str, icon: &str) -> ServiceItem {
    ServiceItem {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

fn member(id: i64, name: &str, role: &str, bio: &str, initials: &str) -> TeamMember {
    TeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        bio: bio.to_string(),
        initials: initials.to_string(),
    }
}

pub fn fallback_services() -> Vec<ServiceItem> {
    vec![
        service(
            1,
            "AI Strategy Consulting",
            "Strategic roadmaps for AI adoption and digital transformation",
            "🎯",
        ),
        service(
            2,
            "Machine Learning Development",
            "Custom ML models and algorithms for your specific use cases",
            "🤖",
        ),
        service(
            3,
            "Process Automation",
            "Intelligent automation solutions to optimize your workflows",
            "⚡",
        ),
    ]
}

pub fn fallback_team() -> Vec<TeamMember> {
    vec![
        member(
            1,
            "Dr. Sarah Chen",
            "Chief AI Officer",
            "PhD in Machine Learning, 10+ years in enterprise AI solutions",
            "SC",
        ),
        member(
            2,
            "Michael Rodriguez",
            "Lead Data Scientist",
            "Expert in deep learning and computer vision applications",
            "MR",
        ),
        member(
            3,
            "Emily Johnson",
            "AI Solutions Architect",
            "Specializes in scalable AI infrastructure and deployment",
            "EJ",
        ),
    ]
}

pub fn fallback_contact() -> ContactInfo {
    ContactInfo {
        email: "contact@neuralink-ai.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
    }
}

impl SiteContent {
    /// Static content shown when the API cannot be reached.
    pub fn fallback() -> Self {
        Self {
            services: fallback_services(),
            team: fallback_team(),
            contact_info: fallback_contact(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_services_are_exact() {
        let services = fallback_services();
        assert_eq!(services.len(), 3);
        assert_eq!(
            services.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(services[0].title, "AI Strategy Consulting");
        assert_eq!(
            services[1].description,
            "Custom ML models and algorithms for your specific use cases"
        );
        assert_eq!(services[2].icon, "⚡");
    }

    #[test]
    fn test_fallback_team_is_exact() {
        let team = fallback_team();
        assert_eq!(team.len(), 3);
        assert_eq!(team[0].name, "Dr. Sarah Chen");
        assert_eq!(team[1].role, "Lead Data Scientist");
        assert_eq!(
            team[2].bio,
            "Specializes in scalable AI infrastructure and deployment"
        );
        assert_eq!(
            team.iter().map(|m| m.initials.as_str()).collect::<Vec<_>>(),
            vec!["SC", "MR", "EJ"]
        );
    }

    #[test]
    fn test_fallback_contact_is_exact() {
        assert_eq!(
            fallback_contact(),
            ContactInfo {
                email: "contact@neuralink-ai.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
            }
        );
    }

    #[test]
    fn test_fallback_serializes_like_api_payload() {
        let json = serde_json::to_value(SiteContent::fallback()).unwrap();
        assert_eq!(json["services"][0]["icon"], "🎯");
        assert_eq!(json["team"][2]["initials"], "EJ");
        assert_eq!(json["contact_info"]["phone"], "+1 (555) 123-4567");
    }
}
