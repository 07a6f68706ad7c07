use crate::core::{ContactInfo, ContentApi, ServiceItem, Signal, SiteContent, TeamMember};
use crate::utils::error::Result;

/// Where the published content came from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Live,
    Fallback,
}

/// Loads services, team and contact content, substituting the static
/// fallback dataset when any of the three reads fails.
///
/// Dropping the future returned by [`ContentLoader::initialize`] aborts the
/// in-flight requests and leaves the signals untouched.
pub struct ContentLoader<A: ContentApi> {
    api: A,
    services: Signal<Vec<ServiceItem>>,
    team: Signal<Vec<TeamMember>>,
    contact_info: Signal<ContactInfo>,
}

impl<A: ContentApi> ContentLoader<A> {
    /// Loader with empty content; call [`ContentLoader::initialize`] to populate it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            services: Signal::default(),
            team: Signal::default(),
            contact_info: Signal::default(),
        }
    }

    /// Observable service list.
    pub fn services(&self) -> &Signal<Vec<ServiceItem>> {
        &self.services
    }

    /// Observable team list.
    pub fn team(&self) -> &Signal<Vec<TeamMember>> {
        &self.team
    }

    /// Observable contact details.
    pub fn contact_info(&self) -> &Signal<ContactInfo> {
        &self.contact_info
    }

    /// Current value of all three signals.
    pub fn snapshot(&self) -> SiteContent {
        SiteContent {
            services: self.services.get(),
            team: self.team.get(),
            contact_info: self.contact_info.get(),
        }
    }

    /// Fetches all three payloads and publishes them. Never fails: on any
    /// error the fallback dataset is published for all three instead.
    pub async fn initialize(&self) -> ContentOrigin {
        match self.fetch_all().await {
            Ok(content) => {
                tracing::info!(
                    "Loaded {} services, {} team members from API",
                    content.services.len(),
                    content.team.len()
                );
                self.publish(content);
                ContentOrigin::Live
            }
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                tracing::warn!("Using fallback content");
                self.publish(SiteContent::fallback());
                ContentOrigin::Fallback
            }
        }
    }

    async fn fetch_all(&self) -> Result<SiteContent> {
        let (services, team, contact_info) = tokio::join!(
            self.api.fetch_services(),
            self.api.fetch_team(),
            self.api.fetch_contact()
        );

        for (endpoint, failure) in [
            ("services", services.as_ref().err()),
            ("team", team.as_ref().err()),
            ("contact", contact_info.as_ref().err()),
        ] {
            if let Some(e) = failure {
                tracing::debug!(
                    network = e.is_network_failure(),
                    "{} request failed: {}",
                    endpoint,
                    e
                );
            }
        }

        Ok(SiteContent {
            services: services?,
            team: team?,
            contact_info: contact_info?,
        })
    }

    fn publish(&self, content: SiteContent) {
        self.services.set(content.services);
        self.team.set(content.team);
        self.contact_info.set(content.contact_info);
    }
}
