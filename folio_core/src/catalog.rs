// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The static project catalog.

/// Whether a project has a page to navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    /// Live, with a case-study route.
    Published {
        /// Site-relative route of the case study.
        link: &'static str,
    },
    /// Announced but not ready; cards open a detail panel instead.
    Upcoming,
}

/// One entry of the portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    /// Stable ordering key.
    pub id: u32,
    /// Card title.
    pub title: &'static str,
    /// One-paragraph teaser.
    pub description: &'static str,
    /// Text for the detail panel.
    pub long_description: &'static str,
    /// Card header image.
    pub image_url: &'static str,
    /// Technology tags, in display order.
    pub technologies: &'static [&'static str],
    /// Header accent color (CSS).
    pub color: &'static str,
    /// Feature bullet points, in display order.
    pub features: &'static [&'static str],
    /// Role badge.
    pub role: &'static str,
    /// Timeline badge.
    pub duration: &'static str,
    /// Publication state.
    pub status: ProjectStatus,
}

impl Project {
    /// The case-study route, if published.
    #[must_use]
    pub const fn link(&self) -> Option<&'static str> {
        match self.status {
            ProjectStatus::Published { link } => Some(link),
            ProjectStatus::Upcoming => None,
        }
    }

    /// Whether the project has a case study.
    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self.status, ProjectStatus::Published { .. })
    }

    /// The first `n` features, for the compact card body.
    #[must_use]
    pub fn highlight_features(&self, n: usize) -> &'static [&'static str] {
        &self.features[..n.min(self.features.len())]
    }
}

const COMING_SOON_IMAGE: &str = "/images/coming-soon.jpg";

/// Every project, in display order.
pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Nexcrow - Solana Escrow Platform",
        description: "A blockchain-based escrow platform ensuring secure, transparent, and reliable payments for freelancers and Web3 businesses on Solana.",
        long_description: "Nexcrow is a Solana-backed escrow platform designed to ensure secure, transparent, and reliable payments for freelancers and Web3 businesses. It allows freelancers and clients to engage in contracts with the security of escrow services, making sure that payments are locked upfront and only released when job milestones are met. The platform combines social platform integration, instant payments, and AI-driven dispute resolution to create a trusted ecosystem for Web3 freelancing.",
        image_url: "/Space Monk/Twitter header - 5.png",
        technologies: &["Solana", "React", "Next.js", "TypeScript", "Web3", "AI/ML"],
        color: "#2563eb",
        features: &[
            "Nexcrow Blinks (Blockchain Links) for social contract sharing",
            "Direct contract Linktree for freelancers",
            "AI-driven dispute resolution system",
            "Blockchain transparency & immutable records",
            "Instant, low-cost USDC transactions",
            "Social platform onboarding via Twitter",
        ],
        role: "Launched Project",
        duration: "March 2025",
        status: ProjectStatus::Published {
            link: "/case-studies/nexus-nexcrow",
        },
    },
    Project {
        id: 2,
        title: "Creation by Obsession",
        description: "A visual narrative exploring the journey of the Primordial Space Monk, a story of evolution, transformation, and surrender.",
        long_description: "Creation by Obsession is a visual journey following the Primordial Space Monk through phases of doubt, search, obsession, and becoming. This narrative explores themes of identity, surrender, and evolution through a series of captivating visuals and immersive storytelling. The project renders the monk's transformation not as a tale of victory, but as a profound meditation on the nature of existence itself.",
        image_url: "/Space Monk/WhatsApp Image 2025-04-05 at 14.58.40_6b0e1ab4.jpg",
        technologies: &[
            "Digital Art",
            "Visual Storytelling",
            "3D Rendering",
            "Narrative Design",
            "Conceptual Art",
        ],
        color: "#6b21a8",
        features: &[
            "Four-phase narrative exploration",
            "Immersive visual storytelling",
            "Philosophical meditation on existence",
            "Captivating space monk character design",
            "Evolution of form and consciousness",
            "Exploration of void and transformation",
        ],
        role: "Art Project",
        duration: "April 2025",
        status: ProjectStatus::Published {
            link: "/case-studies/creation-by-obsession",
        },
    },
    Project {
        id: 3,
        title: "Bone Shamans",
        description: "COMING SOON - An immersive NFT collection with unique lore and interactive experiences.",
        long_description: "Bone Shamans is an upcoming NFT collection that combines stunning artwork with rich lore and interactive experiences. Each NFT will have unique attributes and abilities that can be used in the accompanying digital experiences. Stay tuned for the official launch!",
        image_url: COMING_SOON_IMAGE,
        technologies: &["Ethereum", "NFTs", "Web3", "Interactive Art"],
        color: "#059669",
        features: &[
            "Unique collectible NFTs",
            "Rich lore and backstory",
            "Interactive experiences",
            "Community-driven development",
        ],
        role: "Coming Soon",
        duration: "In Development",
        status: ProjectStatus::Upcoming,
    },
    Project {
        id: 4,
        title: "BoneCLOB AI Powered NFT Marketplace",
        description: "CASE STUDY - An exploratory NFT marketplace powered by AI that reached testnet development.",
        long_description: "BoneCLOB was an exploratory case study for an AI-powered NFT marketplace designed to revolutionize digital asset discovery and trading. The platform implemented advanced AI algorithms to match collectors with creators and optimize trading strategies. The project reached testnet level development but never launched commercially, serving instead as a valuable technical proof of concept.",
        image_url: COMING_SOON_IMAGE,
        technologies: &["AI/ML", "Blockchain", "React", "Node.js"],
        color: "#9333ea",
        features: &[
            "AI-powered asset discovery",
            "Automated price recommendations",
            "Creator-collector matching",
            "Secure trading infrastructure",
        ],
        role: "Case Study",
        duration: "Completed",
        status: ProjectStatus::Upcoming,
    },
    Project {
        id: 5,
        title: "Zee, The Nexus AI Assistant",
        description: "COMING SOON - An intelligent AI assistant designed to help users navigate the Nexus ecosystem.",
        long_description: "Zee is an upcoming AI assistant specifically designed for the Nexus ecosystem. It will help users navigate the platform, provide insights on smart contracts, offer recommendations, and automate routine tasks. With natural language processing capabilities, Zee will make blockchain interactions more accessible to everyone. Stay tuned for the official launch!",
        image_url: COMING_SOON_IMAGE,
        technologies: &[
            "Natural Language Processing",
            "Machine Learning",
            "React",
            "Python",
        ],
        color: "#d97706",
        features: &[
            "Natural language interaction",
            "Smart contract analysis",
            "Personalized recommendations",
            "Automated task execution",
        ],
        role: "Coming Soon",
        duration: "In Development",
        status: ProjectStatus::Upcoming,
    },
    Project {
        id: 6,
        title: "Nexus Protocol",
        description: "COMING SOON - An all-in-one web3 HR tech solution leveraging AI and Blockchain to streamline operations for web3 businesses.",
        long_description: "Nexus Protocol is an all-in-one web3 HR tech solutions protocol, leveraging AI and Blockchain to solve HR insecurities and streamline managerial and financial daily activities of web3 businesses and service providers. The platform aims to transform how decentralized organizations manage their workforce, ensuring compliance, efficiency, and transparency.",
        image_url: COMING_SOON_IMAGE,
        technologies: &["AI", "Blockchain", "HR Tech", "Web3", "Financial Management"],
        color: "#4f46e5",
        features: &[
            "AI-powered HR management",
            "Secure payroll automation",
            "Decentralized identity verification",
            "Performance analytics dashboard",
        ],
        role: "Coming Soon",
        duration: "In Development",
        status: ProjectStatus::Upcoming,
    },
    Project {
        id: 7,
        title: "Mrble Labs",
        description: "COMING SOON - A team building innovative blockchain products and solutions with cutting-edge technology.",
        long_description: "Mrble Labs is a team building cool blockchain products and solutions. Their innovative approach combines technical expertise with creative design to create market-leading digital experiences. Mrble Labs focuses on developing products that make blockchain technology more accessible and user-friendly for both developers and end-users.",
        image_url: COMING_SOON_IMAGE,
        technologies: &["Blockchain Development", "Smart Contracts", "Web3", "DeFi"],
        color: "#059669",
        features: &[
            "Innovative blockchain solutions",
            "Cross-chain interoperability",
            "User-centric design",
            "Advanced security protocols",
        ],
        role: "Coming Soon",
        duration: "In Development",
        status: ProjectStatus::Upcoming,
    },
    Project {
        id: 8,
        title: "Mean Finance - Money Streaming Protocol",
        description: "COMING SOON - A decentralized finance protocol enabling continuous, real-time money streaming for payments, salaries, and subscriptions.",
        long_description: "Mean Finance is a Money Streaming Protocol that enables continuous, real-time payments on the blockchain. The platform allows for creating programmable payment streams where funds flow seamlessly from sender to recipient every second, ideal for salaries, subscriptions, and recurring payments. By automating financial flows, Mean Finance eliminates payment delays and enhances financial planning for both individuals and organizations.",
        image_url: COMING_SOON_IMAGE,
        technologies: &[
            "DeFi",
            "Money Streaming",
            "Smart Contracts",
            "Payment Infrastructure",
        ],
        color: "#2563eb",
        features: &[
            "Real-time money streaming",
            "Programmable payment flows",
            "Multi-chain compatibility",
            "Customizable streaming parameters",
        ],
        role: "Coming Soon",
        duration: "In Development",
        status: ProjectStatus::Upcoming,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        assert_eq!(PROJECTS.len(), 8);
        assert!(PROJECTS.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn exactly_two_published() {
        let published: alloc::vec::Vec<_> = PROJECTS.iter().filter_map(Project::link).collect();
        assert_eq!(
            published,
            ["/case-studies/nexus-nexcrow", "/case-studies/creation-by-obsession"]
        );
    }

    #[test]
    fn highlights_never_overrun() {
        let p = &PROJECTS[2];
        assert_eq!(p.id, 3);
        assert_eq!(p.highlight_features(2).len(), 2);
        assert_eq!(p.highlight_features(40).len(), p.features.len());
        assert!(!p.is_published());
        assert_eq!(p.link(), None);
    }
}
