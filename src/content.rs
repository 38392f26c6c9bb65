use rustc_hash::FxHashMap;
use std::sync::OnceLock;

pub type LocationId = u32;

/// One biography entry pinned to a place on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRecord {
    pub id: LocationId,
    pub label: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Shown verbatim, in order. Some lines are purely visual dividers.
    pub lines: &'static [&'static str],
}

impl LocationRecord {
    pub fn position(&self) -> walkers::Position {
        walkers::lat_lon(self.lat, self.lon)
    }
}

/// Divider line used between paragraphs of a location entry.
pub const DIVIDER: &str = "──────";

/// Camera flight target on first render.
pub const HOME_LOCATION_ID: LocationId = 1;

static LOCATIONS: &[LocationRecord] = &[
    LocationRecord {
        id: 1,
        label: "Pristina, Kosovo",
        lat: 42.6629,
        lon: 21.1655,
        lines: &[
            "Born and raised.",
            DIVIDER,
            "First computer at age nine; first paid website at sixteen.",
            "Trained at the Pristina boxing club through high school.",
        ],
    },
    LocationRecord {
        id: 2,
        label: "Vienna, Austria",
        lat: 48.2082,
        lon: 16.3738,
        lines: &[
            "BSc in Computer Science.",
            DIVIDER,
            "Thesis: detecting right-hemisphere brain damage from speech MFCCs.",
        ],
    },
    LocationRecord {
        id: 3,
        label: "Berlin, Germany",
        lat: 52.5200,
        lon: 13.4050,
        lines: &[
            "Software engineer, inventory systems.",
            DIVIDER,
            "Built SmartStockX and the ECIMS CI/CD pipeline.",
        ],
    },
    LocationRecord {
        id: 4,
        label: "New York, USA",
        lat: 40.7128,
        lon: -74.0060,
        lines: &[
            "Published my first book.",
            DIVIDER,
            "Still writing. Still boxing.",
        ],
    },
];

pub fn locations() -> &'static [LocationRecord] {
    LOCATIONS
}

/// Total lookup: unknown ids map to None, never an error.
pub fn find_location(id: LocationId) -> Option<&'static LocationRecord> {
    static INDEX: OnceLock<FxHashMap<LocationId, usize>> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        LOCATIONS.iter().enumerate().map(|(i, r)| (r.id, i)).collect()
    });
    index.get(&id).map(|&i| &LOCATIONS[i])
}

pub fn home() -> &'static LocationRecord {
    find_location(HOME_LOCATION_ID).expect("home location must be in the registry")
}

// --- Static page content ---

pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub kpi: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "RHD Classifier",
        desc: "Detecting brain damage via MFCCs.",
        kpi: "79 % accuracy",
    },
    Project {
        title: "SmartStockX",
        desc: "Inventory management with real-time updates.",
        kpi: "3 front-end pages",
    },
    Project {
        title: "Mental-Health Chatbot",
        desc: "AI-based emotion classifier.",
        kpi: "15k text samples",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency 0..=5
    pub level: f32,
    pub evidence: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "AI / ML", level: 5.0, evidence: "RHD Classifier" },
    Skill { name: "Data Analytics", level: 5.0, evidence: "RHD Classifier" },
    Skill { name: "Web Dev", level: 4.0, evidence: "ECIMS • SmartStockX" },
    Skill { name: "Programming", level: 4.0, evidence: "Mental-Health Chatbot" },
    Skill { name: "DevOps / Tools", level: 3.0, evidence: "ECIMS CI/CD Pipeline" },
    Skill { name: "Cybersecurity", level: 2.0, evidence: "Coursework & Self-Study" },
];

pub struct HeroStat {
    pub label: &'static str,
    pub value: f32,
    pub suffix: &'static str,
}

pub static HERO_NAME: &str = "Visar Rraci";
pub static HERO_TAGLINE: &str = "Published Author | Software Engineer | Boxer";

pub static HERO_STATS: &[HeroStat] = &[
    HeroStat { label: "Projects shipped", value: 12.0, suffix: "" },
    HeroStat { label: "Years of code", value: 6.0, suffix: "+" },
    HeroStat { label: "Books published", value: 1.0, suffix: "" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for rec in locations() {
            assert!(seen.insert(rec.id), "duplicate location id {}", rec.id);
        }
    }

    #[test]
    fn test_find_location_total() {
        for rec in locations() {
            assert_eq!(find_location(rec.id).map(|r| r.id), Some(rec.id));
        }
        assert!(find_location(999).is_none());
        assert!(find_location(0).is_none());
    }

    #[test]
    fn test_home_is_registered() {
        let h = home();
        assert_eq!(h.id, HOME_LOCATION_ID);
        assert!(locations().iter().any(|r| r.id == h.id));
    }

    #[test]
    fn test_coordinates_in_range() {
        for rec in locations() {
            assert!((-90.0..=90.0).contains(&rec.lat), "{}", rec.label);
            assert!((-180.0..=180.0).contains(&rec.lon), "{}", rec.label);
        }
    }

    #[test]
    fn test_divider_lines_preserved() {
        // Dividers are data, not markup: they stay in the line sequence.
        let rec = find_location(HOME_LOCATION_ID).unwrap();
        assert!(rec.lines.contains(&DIVIDER));
        assert!(!rec.lines.is_empty());
    }

    #[test]
    fn test_skill_levels_in_range() {
        for s in SKILLS {
            assert!((0.0..=5.0).contains(&s.level), "{}", s.name);
        }
    }
}
