//! Static copy and sample data for the landing page.
//!
//! Everything here is compile-time data; components only lay it out.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "SkillSwap";

/// An in-page navigation anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "Features", anchor: "features" },
    NavLink { label: "Feed", anchor: "feed" },
    NavLink { label: "Docs", anchor: "docs" },
    NavLink { label: "About", anchor: "about" },
];

/// Gradient accent used for avatars and icon badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Rose,
    Ocean,
    Emerald,
    Ember,
}

impl Accent {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Rose => "accent--rose",
            Self::Ocean => "accent--ocean",
            Self::Emerald => "accent--emerald",
            Self::Ember => "accent--ember",
        }
    }

    /// Solid fallback color, used by the SVG illustration.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Rose => "#ec4899",
            Self::Ocean => "#3b82f6",
            Self::Emerald => "#22c55e",
            Self::Ember => "#f97316",
        }
    }
}

/// Glyph shown inside an icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Users,
    Video,
    Book,
    Chat,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Users => "👥",
            Self::Video => "🎥",
            Self::Book => "📖",
            Self::Chat => "💬",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "People",
            Self::Video => "Video",
            Self::Book => "Lessons",
            Self::Chat => "Chat",
        }
    }
}

// ── Hero ────────────────────────────────────────────────────────

pub const HERO_HEADLINE: [&str; 2] = ["Dive Into Skill Swap And", "Connect Effortlessly With"];
pub const HERO_HIGHLIGHT: &str = "Peers!";
pub const HERO_LEDE: &str = "Excited to learn something new while teaching others what you love?";
pub const HERO_INVITE: &str = "Join Skill Swap today and start connecting with";
pub const HERO_INVITE_EMPHASIS: &str = "like-minded peers!";
pub const HERO_CTA: &str = "Get Started";

/// A row in the hero feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub caption: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const FEATURES: [Feature; 2] = [
    Feature { title: "Live Sessions", caption: "Connect in real-time", icon: Icon::Book, accent: Accent::Ember },
    Feature { title: "Chat & Share", caption: "Collaborate seamlessly", icon: Icon::Chat, accent: Accent::Ocean },
];

// ── Profiles ────────────────────────────────────────────────────

/// A sample member shown in the profile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub teaching: &'static str,
    pub learning: &'static str,
    pub accent: Accent,
}

impl Profile {
    /// Avatar monogram.
    #[must_use]
    pub fn initial(&self) -> String {
        initial(self.name)
    }
}

pub const PROFILES: [Profile; 4] = [
    Profile { name: "Anna M.", teaching: "Guitar", learning: "Spanish", accent: Accent::Rose },
    Profile { name: "Raj Patel", teaching: "Web Dev", learning: "Digital Art", accent: Accent::Ocean },
    Profile { name: "Sara Lee", teaching: "French", learning: "Photography", accent: Accent::Emerald },
    Profile { name: "Marco Rossi", teaching: "Cooking", learning: "Coding", accent: Accent::Ember },
];

/// First letter of `name`, uppercased; `?` when the name is blank.
#[must_use]
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

// ── Illustration ────────────────────────────────────────────────

/// Side length of the illustration's square `viewBox`.
pub const ILLUSTRATION_VIEWBOX: f64 = 400.0;

/// A person node in the static illustration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub accent: Accent,
}

/// Members arranged around a central hub; edges are skill exchanges.
pub const NODES: [Node; 7] = [
    Node { x: 200.0, y: 200.0, r: 34.0, accent: Accent::Ocean },
    Node { x: 90.0, y: 110.0, r: 20.0, accent: Accent::Rose },
    Node { x: 315.0, y: 95.0, r: 22.0, accent: Accent::Emerald },
    Node { x: 340.0, y: 250.0, r: 18.0, accent: Accent::Ember },
    Node { x: 250.0, y: 340.0, r: 20.0, accent: Accent::Rose },
    Node { x: 95.0, y: 300.0, r: 22.0, accent: Accent::Emerald },
    Node { x: 45.0, y: 205.0, r: 14.0, accent: Accent::Ember },
];

/// Index pairs into [`NODES`].
pub const EDGES: [(usize, usize); 9] = [(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 6), (5, 6), (2, 3), (3, 4)];
