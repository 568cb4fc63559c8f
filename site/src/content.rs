//! Literal page content.
//!
//! Everything the page says lives here as `&'static` records so components
//! stay pure layout and the CLI can dump the inventory as JSON.

use crate::components::{Glyph, IllustrationVariant, Placement, Tone};
use serde::Serialize;

/// Bold half of the header brand label
pub const BRAND_MARK: &str = "MCQUEEN";
/// Light half of the header brand label
pub const BRAND_SUFFIX: &str = "Solutions";
/// Company name used in copy, titles and the footer
pub const COMPANY_NAME: &str = "McQueen Solutions";
/// Default `<meta name="description">`
pub const SITE_DESCRIPTION: &str = "McQueen Solutions provides enhanced mission capabilities for Intelligence Community and DoD customers.";

pub const HERO_TITLE: &str = "Innovative Solutions for Data Science";
pub const HERO_LEAD: &str = "McQueen Solutions provides enhanced mission capabilities for Intelligence Community and DoD customers through our innovative IT solutions, engineering industry expertise, and commitment to delivering high-quality products and services.";

pub const JOIN_TEAM_TITLE: &str = "Join Our Team";
pub const JOIN_TEAM_ACTION: &str = "Apply";

pub const DOD_SUPPORT_TITLE: &str = "Proudly Supporting DoD and the IC";

pub const PARTNER_TITLE: &str = "Partner with McQueen Solutions";
pub const PARTNER_LEAD: &str = "We're always looking for new and innovative ways to collaborate and help our clients achieve their goals.";
pub const PARTNER_ACTION: &str = "Contact Us";

/// Footer navigation, left to right
pub const FOOTER_LINKS: [&str; 2] = ["Jobs", "Home"];

/// Hero feature card: icon, title, description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureEntry {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

/// One cell of the services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Partner/technology labels, in display order
    pub logos: &'static [&'static str],
}

/// One of the alternating text + illustration sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capability {
    /// Anchor id of the section
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub variant: IllustrationVariant,
    pub placement: Placement,
    pub tone: Tone,
}

pub const FEATURES: [FeatureEntry; 3] = [
    FeatureEntry {
        glyph: Glyph::Code,
        title: "Code",
        description: "We deliver quality software using Agile methodologies that prioritize collaboration, communication, and rapid iterations to ensure we are meeting our customers' needs and delivering products that are both efficient and effective.",
    },
    FeatureEntry {
        glyph: Glyph::Brain,
        title: "AI / ML",
        description: "Our team of experienced data scientists use advanced algorithms to analyze large amounts of data and identify patterns that would be impossible to detect manually. We provide insights and predictions that enable our clients to make data-driven decisions.",
    },
    FeatureEntry {
        glyph: Glyph::Cloud,
        title: "Cloud",
        description: "We work closely with our clients to understand their unique business needs and develop custom solutions that leverage the latest cloud technologies, including public, private, and hybrid clouds.",
    },
];

pub const SERVICES: [ServiceEntry; 4] = [
    ServiceEntry {
        title: "Data Analytics and Visualizations",
        description: "Using advanced data analytics and visualization techniques, we provide actionable intelligence to our clients. We use powerful tools like Elasticsearch, Solr, and Kibana to analyze large amounts of data and create compelling visualizations that enable our clients to make data-driven decisions.",
        logos: &["Solr", "Elastic"],
    },
    ServiceEntry {
        title: "Software Development",
        description: "Our experienced team of engineers uses languages like Go, Python, and Rust on the backend, and React and NextJS on the frontend to create robust, scalable, and secure software using modern techniques and rigorous testing.",
        logos: &["Go", "R"],
    },
    ServiceEntry {
        title: "Cloud Computing",
        description: "Leveraging the power of cloud computing and distributed processing, we deliver fast, scalable, and secure applications to our users. Our experienced engineers use platforms like OpenShift, Rancher, and RKE2 to build and deploy secure cluster solutions that harness the true cloud-native philosophy worldwide.",
        logos: &["OpenShift", "Rancher"],
    },
    ServiceEntry {
        title: "AI / ML Workflows",
        description: "We use advanced AI/ML workflows to help geospatial analysts detect anomalies and gain insights from large imagery datasets. By leveraging cutting edge techniques like object detection and predictive modeling, we help analysts quickly identify patterns and trends that might be missed using traditional methods.",
        logos: &["PyTorch", "TensorFlow"],
    },
];

pub const CLOUD_ENGINEERING: Capability = Capability {
    id: "cloud-engineering",
    title: "Cloud Engineering",
    body: "We understand that the cloud is the backbone of modern-day businesses, and our cloud engineering services are designed to help our clients take full advantage of its benefits. Our team of certified cloud engineers possesses a wealth of experience in developing, deploying, and managing cloud solutions on all major cloud platforms, including AWS, Azure, and Google Cloud and Kubernetes public / private clouds.",
    variant: IllustrationVariant::Cloud,
    placement: Placement::Right,
    tone: Tone::White,
};

pub const CYBER_SECURITY: Capability = Capability {
    id: "cyber-security",
    title: "Cyber Security",
    body: "Our team understands the critical role that security plays in safeguarding sensitive data and protecting against cyber threats. We incorporate security best practices into every stage of our software development lifecycle, from design to deployment. Our team of experts employs a wide range of security measures, including secure coding practices, encryption, access controls, network security, and more, to ensure that our clients' systems are protected against potential threats.",
    variant: IllustrationVariant::Security,
    placement: Placement::Left,
    tone: Tone::Muted,
};

pub const DEVSECOPS: Capability = Capability {
    id: "devsecops",
    title: "DevSecOps",
    body: "We specialize in building scalable architectures that are designed to meet the unique needs of our customers. We leverage cloud-based technologies and DevOps practices to create highly available and fault-tolerant systems that can scale to handle massive amounts of data and traffic. Our team of experienced engineers are experts in containerization, microservices, and distributed systems, ensuring that our architectures are not only scalable, but also highly efficient and easy to manage.",
    variant: IllustrationVariant::DevOps,
    placement: Placement::Right,
    tone: Tone::White,
};

pub const TACTICAL_EDGE: Capability = Capability {
    id: "tactical-edge",
    title: "Tactical Edge",
    body: "Delivering mission capabilities in real-time containerized environments is important to our mission partners. We leverage private cloud platforms, including Kubernetes, to create solutions that can operate at the tactical edge. Our team has a deep understanding of Kubernetes and how it can be used to deploy and manage containerized workloads in edge environments. By leveraging these technologies, we can provide our clients with reliable, scalable, and secure solutions that can operate in remote, disconnected, and low- bandwidth environments.",
    variant: IllustrationVariant::Tactical,
    placement: Placement::Left,
    tone: Tone::Muted,
};

/// Capability sections in page order
pub const CAPABILITIES: [Capability; 4] = [CLOUD_ENGINEERING, CYBER_SECURITY, DEVSECOPS, TACTICAL_EDGE];

/// Serializable snapshot of all page content.
#[derive(Debug, Clone, Serialize)]
pub struct ContentInventory {
    pub company: &'static str,
    pub features: &'static [FeatureEntry],
    pub capabilities: &'static [Capability],
    pub services: &'static [ServiceEntry],
}

impl ContentInventory {
    pub fn get() -> Self {
        Self {
            company: COMPANY_NAME,
            features: &FEATURES,
            capabilities: &CAPABILITIES,
            services: &SERVICES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_strings_are_non_empty() {
        for f in FEATURES {
            assert!(!f.title.is_empty() && !f.description.is_empty());
        }
        for s in SERVICES {
            assert!(!s.title.is_empty() && !s.description.is_empty());
            assert!(!s.logos.is_empty());
            assert!(s.logos.iter().all(|l| !l.is_empty()));
        }
        for c in CAPABILITIES {
            assert!(!c.id.is_empty() && !c.title.is_empty() && !c.body.is_empty());
        }
    }

    #[test]
    fn feature_titles_in_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Code", "AI / ML", "Cloud"]);
    }

    #[test]
    fn service_labels_in_order() {
        let labels: Vec<_> = SERVICES.iter().map(|s| (s.title, s.logos.to_vec())).collect();
        assert_eq!(
            labels,
            vec![
                ("Data Analytics and Visualizations", vec!["Solr", "Elastic"]),
                ("Software Development", vec!["Go", "R"]),
                ("Cloud Computing", vec!["OpenShift", "Rancher"]),
                ("AI / ML Workflows", vec!["PyTorch", "TensorFlow"]),
            ]
        );
    }

    #[test]
    fn capability_placement_alternates() {
        let placements: Vec<_> = CAPABILITIES.iter().map(|c| c.placement).collect();
        assert_eq!(
            placements,
            vec![Placement::Right, Placement::Left, Placement::Right, Placement::Left]
        );
        for pair in CAPABILITIES.windows(2) {
            assert_ne!(pair[0].tone, pair[1].tone);
        }
    }

    #[test]
    fn inventory_serializes_labels() {
        let json = serde_json::to_value(ContentInventory::get()).expect("serialize");

        assert_eq!(json["company"], "McQueen Solutions");
        assert_eq!(json["features"][1]["glyph"], "brain");
        assert_eq!(json["services"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["services"][3]["logos"][1], "TensorFlow");
        assert_eq!(json["capabilities"][2]["variant"], "devops");
        assert_eq!(json["capabilities"][1]["placement"], "left");
    }
}
