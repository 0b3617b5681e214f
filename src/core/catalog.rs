//! Hardcoded page content.
//!
//! Everything here is `'static` and never mutated; the view layer renders it
//! in declaration order.

use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, rendered directly as the bar width.
    pub level: u8,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub gradient: &'static str,
}

/// Page identity: metadata for the document head plus the copy that
/// identifies the author across sections.
#[derive(Debug, Clone, Copy)]
pub struct SiteMeta {
    pub brand: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub generator: &'static str,
    pub tagline: &'static str,
    pub share_title: &'static str,
    pub locale: &'static str,
    pub email: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    brand: "ALEX.DEV",
    title: "Alex.Dev - Creative Web Developer | Futuristic Digital Experiences",
    description: "Creative full-stack developer specializing in cutting-edge web applications, \
                  AI-powered solutions, and immersive digital experiences. Pushing the \
                  boundaries of web development.",
    keywords: "creative web developer, futuristic web design, AI applications, \
               3D web experiences, glassmorphism, neon design",
    author: "Alex.Dev",
    generator: "v0.dev",
    tagline: "Crafting the future, one line of code at a time",
    share_title: "Alex.Dev - Creative Web Developer",
    locale: "en_US",
    email: "alex@creative.dev",
};

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "React & Next.js",
        level: 95,
        gradient: "from-cyan-400 to-blue-500",
    },
    Skill {
        name: "TypeScript",
        level: 90,
        gradient: "from-blue-400 to-purple-500",
    },
    Skill {
        name: "UI/UX Design",
        level: 85,
        gradient: "from-purple-400 to-pink-500",
    },
    Skill {
        name: "Node.js",
        level: 88,
        gradient: "from-green-400 to-teal-500",
    },
    Skill {
        name: "Python",
        level: 82,
        gradient: "from-yellow-400 to-orange-500",
    },
    Skill {
        name: "3D Graphics",
        level: 75,
        gradient: "from-pink-400 to-red-500",
    },
];

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=400";

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "NeuroAI Dashboard",
        description: "AI-powered analytics platform with real-time data visualization",
        tech: &["React", "D3.js", "Python", "TensorFlow"],
        image: PLACEHOLDER_IMAGE,
        gradient: "from-cyan-500 to-blue-600",
    },
    Project {
        title: "CryptoVerse",
        description: "Cryptocurrency trading platform with advanced charting",
        tech: &["Next.js", "WebSocket", "Chart.js", "Node.js"],
        image: PLACEHOLDER_IMAGE,
        gradient: "from-purple-500 to-pink-600",
    },
    Project {
        title: "MetaSpace",
        description: "Virtual reality social platform for remote collaboration",
        tech: &["Three.js", "WebRTC", "React", "Express"],
        image: PLACEHOLDER_IMAGE,
        gradient: "from-green-500 to-teal-600",
    },
    Project {
        title: "QuantumUI",
        description: "Component library with physics-based animations",
        tech: &["React", "Framer Motion", "Storybook", "TypeScript"],
        image: PLACEHOLDER_IMAGE,
        gradient: "from-orange-500 to-red-600",
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        value: "50+",
        label: "Projects",
        icon: Icon::Code2,
        accent: "text-cyan-400",
    },
    Stat {
        value: "6+",
        label: "Years",
        icon: Icon::Palette,
        accent: "text-purple-400",
    },
    Stat {
        value: "30+",
        label: "Clients",
        icon: Icon::Rocket,
        accent: "text-pink-400",
    },
    Stat {
        value: "99%",
        label: "Satisfaction",
        icon: Icon::Zap,
        accent: "text-yellow-400",
    },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Email",
        value: SITE.email,
        icon: Icon::Mail,
        gradient: "from-cyan-500 to-blue-500",
    },
    ContactDetail {
        label: "Phone",
        value: "+1 (555) 123-4567",
        icon: Icon::Phone,
        gradient: "from-purple-500 to-pink-500",
    },
    ContactDetail {
        label: "Location",
        value: "San Francisco, CA",
        icon: Icon::MapPin,
        gradient: "from-green-500 to-teal-500",
    },
];

/// Icon buttons shown under the about blurb and in the footer. They have no
/// destination wired up.
pub const ABOUT_SOCIALS: [Icon; 2] = [Icon::Github, Icon::Linkedin];
pub const FOOTER_SOCIALS: [Icon; 3] = [Icon::Github, Icon::Linkedin, Icon::Mail];
