use serde::{Deserialize, Serialize};

/// Portfolio/service category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Design,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Mobile => "mobile",
            Category::Design => "design",
        }
    }

    /// Parse a category name into a variant
    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "web" => Some(Category::Web),
            "mobile" => Some(Category::Mobile),
            "design" => Some(Category::Design),
            _ => None,
        }
    }
}

/// One entry in the fixed portfolio catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub image: &'static str,
}

/// One entry in the fixed services catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// Skill tags, in display order.
pub const SKILLS: [&str; 10] = [
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "CSS3",
    "HTML5",
    "MongoDB",
    "Express",
    "Git",
    "Figma",
];

/// Service cards, in display order.
pub const SERVICES: [Service; 4] = [
    Service {
        icon: "💻",
        title: "Web Development",
        description: "Custom websites and web applications built with modern technologies.",
        category: Category::Web,
    },
    Service {
        icon: "📱",
        title: "Mobile Development",
        description: "Native and cross-platform mobile applications for iOS and Android.",
        category: Category::Mobile,
    },
    Service {
        icon: "🎨",
        title: "UI/UX Design",
        description: "User-centered design solutions that enhance user experience.",
        category: Category::Design,
    },
    Service {
        icon: "🚀",
        title: "Performance Optimization",
        description: "Speed up your websites and improve search engine rankings.",
        category: Category::Web,
    },
];

/// The portfolio catalog. Fixed for the process lifetime; entries are never
/// added or removed at runtime.
pub const CATALOG: [PortfolioEntry; 6] = [
    PortfolioEntry {
        id: 1,
        title: "E-commerce Platform",
        description: "Full-stack e-commerce solution with payment integration.",
        category: Category::Web,
        image: "https://via.placeholder.com/400x300/6366f1/ffffff?text=E-commerce",
    },
    PortfolioEntry {
        id: 2,
        title: "Mobile Banking App",
        description: "Secure mobile banking application with biometric authentication.",
        category: Category::Mobile,
        image: "https://via.placeholder.com/400x300/8b5cf6/ffffff?text=Banking+App",
    },
    PortfolioEntry {
        id: 3,
        title: "Brand Identity Design",
        description: "Complete brand identity package for startup company.",
        category: Category::Design,
        image: "https://via.placeholder.com/400x300/f59e0b/ffffff?text=Brand+Design",
    },
    PortfolioEntry {
        id: 4,
        title: "Task Management App",
        description: "Collaborative project management tool with real-time updates.",
        category: Category::Web,
        image: "https://via.placeholder.com/400x300/10b981/ffffff?text=Task+Manager",
    },
    PortfolioEntry {
        id: 5,
        title: "Fitness Tracker",
        description: "Cross-platform fitness tracking application with social features.",
        category: Category::Mobile,
        image: "https://via.placeholder.com/400x300/ef4444/ffffff?text=Fitness+App",
    },
    PortfolioEntry {
        id: 6,
        title: "Dashboard UI Kit",
        description: "Comprehensive UI kit for admin dashboards and analytics.",
        category: Category::Design,
        image: "https://via.placeholder.com/400x300/3b82f6/ffffff?text=UI+Kit",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_round_trip() {
        for c in [Category::Web, Category::Mobile, Category::Design] {
            assert_eq!(Category::parse(c.name()), Some(c));
        }
        assert_eq!(Category::parse("unknown"), None);
        assert_eq!(Category::parse("Web"), None);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<u32> = CATALOG.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Design).unwrap(),
            "\"design\""
        );
    }
}
