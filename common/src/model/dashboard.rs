use serde::{Deserialize, Serialize};

use super::journalist::Journalist;
use super::null_as_default;
use super::press_release::PressReleaseSummary;
use super::published_link::{LinkStatus, PublishedLink};
use super::withdrawal::WithdrawalRequest;

/// `GET journalist/dashboard/` for the signed-in journalist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JournalistDashboard {
    pub journalist: Journalist,
    #[serde(default, deserialize_with = "null_as_default")]
    pub press_releases: Vec<PressReleaseSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_links: Vec<PublishedLink>,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub points_in_ksh: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub withdrawal_requests: Vec<WithdrawalRequest>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopJournalist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub points: i64,
}

/// `GET admins/dashboard/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminDashboard {
    #[serde(default)]
    pub pending_links: u64,
    #[serde(default)]
    pub pending_withdrawals: u64,
    #[serde(default)]
    pub total_points_awarded: i64,
    #[serde(default)]
    pub total_points_withdrawn: i64,
    #[serde(default)]
    pub total_ksh_processed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_journalists: Vec<TopJournalist>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsPressRelease {
    #[serde(flatten)]
    pub summary: PressReleaseSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_links: Vec<PublishedLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStatusCount {
    pub status: LinkStatus,
    pub count: u64,
}

/// `GET press-release/{id}/stats/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PressReleaseStats {
    pub press_release: StatsPressRelease,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links_stats: Vec<LinkStatusCount>,
    #[serde(default)]
    pub journalists_shared: u64,
    #[serde(default)]
    pub journalists_published: u64,
    /// Percentage, already computed by the server.
    #[serde(default)]
    pub engagement_rate: f64,
}

impl PressReleaseStats {
    /// Count for `status`, zero when the server omitted the bucket.
    pub fn links_with(&self, status: LinkStatus) -> u64 {
        self.links_stats
            .iter()
            .find(|bucket| bucket.status == status)
            .map_or(0, |bucket| bucket.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_flatten_release_and_fill_missing_buckets() {
        let json = r#"{
            "press_release": {
                "id": "pr1",
                "title": "Launch",
                "published_links": [{"id": "l1", "status": "approved"}]
            },
            "links_stats": [{"status": "approved", "count": 1}],
            "journalists_shared": 12,
            "journalists_published": 1,
            "engagement_rate": 8.33
        }"#;
        let stats: PressReleaseStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.press_release.summary.title, "Launch");
        assert_eq!(stats.press_release.published_links.len(), 1);
        assert_eq!(stats.links_with(LinkStatus::Approved), 1);
        assert_eq!(stats.links_with(LinkStatus::Pending), 0);
    }

    #[test]
    fn admin_dashboard_tolerates_missing_leaders() {
        let json = r#"{"pending_links": 3, "pending_withdrawals": 1, "top_journalists": null}"#;
        let dashboard: AdminDashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.pending_links, 3);
        assert!(dashboard.top_journalists.is_empty());
    }
}
