//! The closed set of page identifiers
//!
//! Every navigable screen in the platform has exactly one identifier. Flow
//! start pages are stored as raw strings and resolved against this set late,
//! so an unknown value degrades to the default page instead of failing a load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    /// Platform landing with the project list
    PlatformHome,
    /// Behind-the-scenes project management view
    ProjectAdmin,
    /// Share-mode landing for scripted demos
    DemoLanding,
    /// Per-project prototype entry screen
    PrototypeHome,
    /// Design library dashboard
    Dashboard,
    /// Single design detail view
    DesignDetails,
    /// Grouped job detail view with the roster table
    JobDetails,
    /// Shopping cart
    Cart,
    /// Order confirmation stub
    Checkout,
    /// External designer editor stub
    EasyviewDesigner,
    /// External designer editor stub (enhanced session view)
    EasyviewEnhanced,
    /// External roster editor stub
    EasyviewRoster,
    /// Past orders stub
    OrderHistory,
}

/// Unknown page identifier string
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown page identifier: {0}")]
pub struct PageIdError(pub String);

impl PageId {
    /// All page identifiers, in declaration order
    pub const ALL: [PageId; 13] = [
        PageId::PlatformHome,
        PageId::ProjectAdmin,
        PageId::DemoLanding,
        PageId::PrototypeHome,
        PageId::Dashboard,
        PageId::DesignDetails,
        PageId::JobDetails,
        PageId::Cart,
        PageId::Checkout,
        PageId::EasyviewDesigner,
        PageId::EasyviewEnhanced,
        PageId::EasyviewRoster,
        PageId::OrderHistory,
    ];

    /// Kebab-case identifier as persisted in flow records and deep links
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::PlatformHome => "platform-home",
            PageId::ProjectAdmin => "project-admin",
            PageId::DemoLanding => "demo-landing",
            PageId::PrototypeHome => "prototype-home",
            PageId::Dashboard => "dashboard",
            PageId::DesignDetails => "design-details",
            PageId::JobDetails => "job-details",
            PageId::Cart => "cart",
            PageId::Checkout => "checkout",
            PageId::EasyviewDesigner => "easyview-designer",
            PageId::EasyviewEnhanced => "easyview-enhanced",
            PageId::EasyviewRoster => "easyview-roster",
            PageId::OrderHistory => "order-history",
        }
    }

    /// Human-readable label for breadcrumbs and screen headers
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PageId::PlatformHome => "Platform Home",
            PageId::ProjectAdmin => "Project Admin",
            PageId::DemoLanding => "Demo Landing",
            PageId::PrototypeHome => "Prototype Home",
            PageId::Dashboard => "Dashboard",
            PageId::DesignDetails => "Design Details",
            PageId::JobDetails => "Job Details",
            PageId::Cart => "Shopping Cart",
            PageId::Checkout => "Checkout",
            PageId::EasyviewDesigner => "EasyView Designer",
            PageId::EasyviewEnhanced => "EasyView Enhanced",
            PageId::EasyviewRoster => "Roster Management",
            PageId::OrderHistory => "Order History",
        }
    }

    /// Pages that belong to the platform shell rather than the prototype
    ///
    /// The prototype chrome (breadcrumb, flow progress, hint banner) is
    /// suppressed on these.
    #[inline]
    #[must_use]
    pub fn is_platform_page(&self) -> bool {
        matches!(
            self,
            PageId::PlatformHome
                | PageId::ProjectAdmin
                | PageId::DemoLanding
                | PageId::PrototypeHome
        )
    }

    /// Pages that stand in for an external editor
    ///
    /// Navigating to one of these records a return context first.
    #[inline]
    #[must_use]
    pub fn is_external_editor(&self) -> bool {
        matches!(
            self,
            PageId::EasyviewDesigner | PageId::EasyviewEnhanced | PageId::EasyviewRoster
        )
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = PageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PageIdError(s.to_string()))
    }
}
