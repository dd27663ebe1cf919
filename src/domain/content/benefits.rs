/// One marketing benefit shown on a landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

/// What a benefit list is written about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenefitSubject<'a> {
    Technology(&'a str),
    Role(&'a str),
    Country(&'a str),
    TechnologyInCountry { technology: &'a str, country: &'a str },
}

struct BenefitTemplate {
    title: &'static str,
    description: &'static str,
}

pub const BENEFITS_PER_PAGE: usize = 4;

const TECHNOLOGY_TEMPLATES: [BenefitTemplate; BENEFITS_PER_PAGE] = [
    BenefitTemplate {
        title: "Pre-vetted {name} talent",
        description: "Every {name} developer passes a multi-stage technical assessment before joining the network.",
    },
    BenefitTemplate {
        title: "Matched in 48 hours",
        description: "Get a shortlist of available {name} developers that fit your stack and budget within two days.",
    },
    BenefitTemplate {
        title: "Flexible engagements",
        description: "Scale your {name} team up or down with full-time or part-time contracts.",
    },
    BenefitTemplate {
        title: "Risk-free trial",
        description: "Work with your new {name} developer for two weeks before you commit.",
    },
];

const ROLE_TEMPLATES: [BenefitTemplate; BENEFITS_PER_PAGE] = [
    BenefitTemplate {
        title: "Experienced {name} candidates",
        description: "Every {name} in our network has shipped production work and passed a role-specific interview.",
    },
    BenefitTemplate {
        title: "Hire in days, not months",
        description: "Skip the sourcing pipeline and meet a matched {name} this week.",
    },
    BenefitTemplate {
        title: "Payroll and compliance handled",
        description: "Contracts, invoicing and payouts for your {name} are managed for you.",
    },
    BenefitTemplate {
        title: "Replacement guarantee",
        description: "If your {name} is not the right fit we find a replacement at no extra cost.",
    },
];

const COUNTRY_TEMPLATES: [BenefitTemplate; BENEFITS_PER_PAGE] = [
    BenefitTemplate {
        title: "Top engineers in {name}",
        description: "Access a curated pool of software developers based in {name}.",
    },
    BenefitTemplate {
        title: "Compliant local contracts",
        description: "Hire in {name} without opening a local entity; we handle contracts and payouts.",
    },
    BenefitTemplate {
        title: "Timezone overlap",
        description: "Developers in {name} work hours that overlap with your team.",
    },
    BenefitTemplate {
        title: "Competitive rates",
        description: "Senior talent from {name} at rates that stretch your hiring budget further.",
    },
];

const TECHNOLOGY_IN_COUNTRY_TEMPLATES: [BenefitTemplate; BENEFITS_PER_PAGE] = [
    BenefitTemplate {
        title: "{name} experts in {country}",
        description: "Hire {name} developers in {country} who passed our technical assessment.",
    },
    BenefitTemplate {
        title: "Local hiring made simple",
        description: "We handle contracts and payroll for your {name} developers in {country}.",
    },
    BenefitTemplate {
        title: "Work in your timezone",
        description: "{name} developers in {country} are matched on working-hour overlap with your team.",
    },
    BenefitTemplate {
        title: "Start within a week",
        description: "Interview shortlisted {name} developers from {country} in as little as 48 hours.",
    },
];

fn templates_for(subject: BenefitSubject<'_>) -> &'static [BenefitTemplate; BENEFITS_PER_PAGE] {
    match subject {
        BenefitSubject::Technology(_) => &TECHNOLOGY_TEMPLATES,
        BenefitSubject::Role(_) => &ROLE_TEMPLATES,
        BenefitSubject::Country(_) => &COUNTRY_TEMPLATES,
        BenefitSubject::TechnologyInCountry { .. } => &TECHNOLOGY_IN_COUNTRY_TEMPLATES,
    }
}

/// Fixed-size benefit list with the subject substituted into the templates.
pub fn benefits_for(subject: BenefitSubject<'_>) -> Vec<Benefit> {
    let (name, country) = match subject {
        BenefitSubject::Technology(name)
        | BenefitSubject::Role(name)
        | BenefitSubject::Country(name) => (name, ""),
        BenefitSubject::TechnologyInCountry {
            technology,
            country,
        } => (technology, country),
    };

    templates_for(subject)
        .iter()
        .map(|template| Benefit {
            title: fill(template.title, name, country),
            description: fill(template.description, name, country),
        })
        .collect()
}

fn fill(template: &str, name: &str, country: &str) -> String {
    template.replace("{name}", name).replace("{country}", country)
}
