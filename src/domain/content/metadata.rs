use crate::domain::catalog::PageIdentity;

/// Title and meta description of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCopy {
    pub title: String,
    pub description: String,
}

pub fn hire_copy(identity: &PageIdentity, site_name: &str) -> PageCopy {
    match identity {
        PageIdentity::Technology { name, .. } => PageCopy {
            title: format!("Hire {name} Developers | {site_name}"),
            description: format!(
                "Hire pre-vetted remote {name} developers in days. Interview {name} talent matched to your stack, timezone and budget."
            ),
        },
        PageIdentity::Role { name, .. } => PageCopy {
            title: format!("Hire {name}s | {site_name}"),
            description: format!(
                "Find and hire a vetted remote {name}. Review matched candidates within 48 hours and start with a risk-free trial."
            ),
        },
        PageIdentity::Country { name, .. } => PageCopy {
            title: format!("Hire Developers in {name} | {site_name}"),
            description: format!(
                "Hire vetted software developers in {name}. Contracts and payouts are handled so you can focus on building."
            ),
        },
        PageIdentity::Combination {
            technology,
            country,
            ..
        } => PageCopy {
            title: format!("Hire {technology} Developers in {country} | {site_name}"),
            description: format!(
                "Hire pre-vetted {technology} developers in {country}. Get matched candidates within 48 hours who work in your timezone."
            ),
        },
    }
}

/// Copy for the `/apply/{slug}` pages aimed at candidates.
pub fn apply_copy(identity: &PageIdentity, site_name: &str) -> PageCopy {
    let audience = match identity {
        PageIdentity::Technology { name, .. } | PageIdentity::Combination { technology: name, .. } => {
            format!("{name} Developer")
        }
        PageIdentity::Role { name, .. } | PageIdentity::Country { name, .. } => name.to_string(),
    };
    PageCopy {
        title: format!("{audience} Jobs | Apply to {site_name}"),
        description: format!(
            "{audience} jobs at vetted companies. Apply to join {site_name} and get matched with remote roles."
        ),
    }
}
