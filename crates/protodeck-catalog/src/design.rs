//! The fixed design catalog
//!
//! Eight seed records representing submitted team-builder designs. The rows are
//! intentionally static: every grouping the platform shows is derived from them
//! on demand, never stored.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Production status of a submitted design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignStatus {
    #[serde(rename = "Ready to Order")]
    ReadyToOrder,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    #[serde(rename = "Incomplete")]
    Incomplete,
}

impl DesignStatus {
    /// Display string as shown on catalog screens
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadyToOrder => "Ready to Order",
            Self::NeedsAttention => "Needs Attention",
            Self::Incomplete => "Incomplete",
        }
    }
}

/// A submitted design record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub design_id: &'static str,
    pub thumbnail: &'static str,
    pub status: DesignStatus,
    pub size: &'static str,
    pub service_type: &'static str,
    pub product_type: &'static str,
    pub source: &'static str,
    /// Submit date, ISO `YYYY-MM-DD` so lexicographic order is date order
    pub date_submitted: &'static str,
    pub is_team_builder: bool,
    pub job_name: Option<&'static str>,
    pub tb_parent_id: Option<&'static str>,
    pub roster_id: Option<&'static str>,
    pub roster_name: Option<&'static str>,
    pub player_name: Option<&'static str>,
    pub player_number: Option<&'static str>,
    pub is_archived: bool,
    /// Display price, `$`-prefixed
    pub price: Option<&'static str>,
}

impl Design {
    /// Numeric price parsed from the display string, 0.0 when absent or unparsable
    #[must_use]
    pub fn unit_price(&self) -> f64 {
        self.price
            .and_then(|p| p.trim_start_matches('$').parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

const THUMB: &str = "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400";
const DTF: &str = "UltraColor\u{ae} MAX DTF Transfers";
const SOURCE: &str = "Easy View LTE Team Builder";

/// Seed catalog rows
pub static DESIGNS: Lazy<Vec<Design>> = Lazy::new(|| {
    vec![
        Design {
            design_id: "D001",
            thumbnail: THUMB,
            status: DesignStatus::ReadyToOrder,
            size: "11\" x 11\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-28",
            is_team_builder: true,
            job_name: Some("Eagles - 2026"),
            tb_parent_id: Some("TB001"),
            roster_id: Some("R001"),
            roster_name: Some("Varsity Home 2026"),
            player_name: Some("John Smith"),
            player_number: Some("12"),
            is_archived: false,
            price: Some("$45.99"),
        },
        Design {
            design_id: "D002",
            thumbnail: THUMB,
            status: DesignStatus::ReadyToOrder,
            size: "11\" x 11\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-28",
            is_team_builder: true,
            job_name: Some("Eagles - 2026"),
            tb_parent_id: Some("TB001"),
            roster_id: Some("R001"),
            roster_name: Some("Varsity Home 2026"),
            player_name: Some("Sarah Johnson"),
            player_number: Some("8"),
            is_archived: false,
            price: Some("$45.99"),
        },
        Design {
            design_id: "D003",
            thumbnail: THUMB,
            status: DesignStatus::ReadyToOrder,
            size: "11\" x 11\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-27",
            is_team_builder: true,
            job_name: Some("Eagles - 2026"),
            tb_parent_id: Some("TB001"),
            roster_id: Some("R001"),
            roster_name: Some("Varsity Home 2026"),
            player_name: Some("Mike Davis"),
            player_number: Some("22"),
            is_archived: false,
            price: Some("$45.99"),
        },
        Design {
            design_id: "D004",
            thumbnail: THUMB,
            status: DesignStatus::NeedsAttention,
            size: "10\" x 10\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-25",
            is_team_builder: true,
            job_name: Some("Warriors - 2026"),
            tb_parent_id: Some("TB002"),
            roster_id: Some("R002"),
            roster_name: Some("JV Away 2026"),
            player_name: Some("Tom Wilson"),
            player_number: Some("5"),
            is_archived: false,
            price: Some("$42.99"),
        },
        Design {
            design_id: "D005",
            thumbnail: THUMB,
            status: DesignStatus::ReadyToOrder,
            size: "10\" x 10\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-25",
            is_team_builder: true,
            job_name: Some("Warriors - 2026"),
            tb_parent_id: Some("TB002"),
            roster_id: Some("R002"),
            roster_name: Some("JV Away 2026"),
            player_name: Some("Lisa Anderson"),
            player_number: Some("14"),
            is_archived: false,
            price: Some("$42.99"),
        },
        Design {
            design_id: "D006",
            thumbnail: THUMB,
            status: DesignStatus::ReadyToOrder,
            size: "12\" x 12\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-20",
            is_team_builder: true,
            job_name: Some("Hawks - 2025"),
            tb_parent_id: Some("TB003"),
            roster_id: Some("R003"),
            roster_name: Some("Varsity 2025"),
            player_name: Some("Alex Martinez"),
            player_number: Some("7"),
            is_archived: false,
            price: Some("$48.99"),
        },
        Design {
            design_id: "D007",
            thumbnail: THUMB,
            status: DesignStatus::ReadyToOrder,
            size: "12\" x 12\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-20",
            is_team_builder: true,
            job_name: Some("Hawks - 2025"),
            tb_parent_id: Some("TB003"),
            roster_id: Some("R003"),
            roster_name: Some("Varsity 2025"),
            player_name: Some("Jessica Lee"),
            player_number: Some("11"),
            is_archived: false,
            price: Some("$48.99"),
        },
        Design {
            design_id: "D008",
            thumbnail: THUMB,
            status: DesignStatus::ReadyToOrder,
            size: "11\" x 11\"",
            service_type: DTF,
            product_type: "Custom Transfer",
            source: SOURCE,
            date_submitted: "2025-11-27",
            is_team_builder: true,
            job_name: Some("Eagles - 2026"),
            tb_parent_id: Some("TB001"),
            roster_id: Some("R001"),
            roster_name: Some("Varsity Home 2026"),
            player_name: Some("Chris Brown"),
            player_number: Some("3"),
            is_archived: false,
            price: Some("$45.99"),
        },
    ]
});

/// Look up a design by its id
#[must_use]
pub fn design_by_id(design_id: &str) -> Option<&'static Design> {
    DESIGNS.iter().find(|d| d.design_id == design_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rows_present() {
        assert_eq!(DESIGNS.len(), 8);
        assert!(design_by_id("D001").is_some());
        assert!(design_by_id("D999").is_none());
    }

    #[test]
    fn design_row_serializes_with_display_status() {
        let d = design_by_id("D001").unwrap();
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["designId"], "D001");
        assert_eq!(json["status"], "Ready to Order");
    }

    #[test]
    fn unit_price_parses_display_string() {
        let d = design_by_id("D004").unwrap();
        assert!((d.unit_price() - 42.99).abs() < f64::EPSILON);
    }
}
