use serde::Serialize;

/// A single search result, one per rendered card. Immutable after mapping.
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    pub name: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub address: Option<String>,
    pub price_level: Option<PriceLevel>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub maps_url: Option<String>,
    /// `places/{id}` resource for the details endpoint. Live results only.
    pub detail_resource: Option<String>,
}

/// Detail panel content, fetched per open and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFragment {
    pub display_name: String,
    pub formatted_address: Option<String>,
    pub phone: Option<String>,
    pub opening_hours: Vec<String>,
    pub website: Option<String>,
}

/// Which path produced the current result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Sample,
}

impl DataSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Sample => "sample",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "Places API (live)",
            Self::Sample => "sample dataset",
        }
    }
}

/// Price band on the 0-4 ordinal scale used by both the live API and the
/// sample documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
}

impl PriceLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Inexpensive => "inexpensive",
            Self::Moderate => "moderate",
            Self::Expensive => "expensive",
            Self::VeryExpensive => "very expensive",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Free),
            1 => Some(Self::Inexpensive),
            2 => Some(Self::Moderate),
            3 => Some(Self::Expensive),
            4 => Some(Self::VeryExpensive),
            _ => None,
        }
    }

    /// Parses the `PRICE_LEVEL_*` enum strings returned by the live API.
    /// `PRICE_LEVEL_UNSPECIFIED` maps to no price level at all.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "PRICE_LEVEL_FREE" => Some(Self::Free),
            "PRICE_LEVEL_INEXPENSIVE" => Some(Self::Inexpensive),
            "PRICE_LEVEL_MODERATE" => Some(Self::Moderate),
            "PRICE_LEVEL_EXPENSIVE" => Some(Self::Expensive),
            "PRICE_LEVEL_VERY_EXPENSIVE" => Some(Self::VeryExpensive),
            _ => None,
        }
    }

    /// Yen symbols for the card meta line. Minimum one symbol, maximum four.
    pub const fn symbols(self) -> &'static str {
        match self {
            Self::Free | Self::Inexpensive => "¥",
            Self::Moderate => "¥¥",
            Self::Expensive => "¥¥¥",
            Self::VeryExpensive => "¥¥¥¥",
        }
    }

    /// Reference price band shown at the bottom of a card.
    pub const fn reference_range(self) -> &'static str {
        match self {
            Self::Free => "¥0 - ¥999",
            Self::Inexpensive => "¥1,000 - ¥1,999",
            Self::Moderate => "¥2,000 - ¥3,999",
            Self::Expensive => "¥4,000 - ¥6,999",
            Self::VeryExpensive => "¥7,000+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_level_parses_api_enum_strings() {
        assert_eq!(
            PriceLevel::parse("PRICE_LEVEL_MODERATE"),
            Some(PriceLevel::Moderate)
        );
        assert_eq!(
            PriceLevel::parse("PRICE_LEVEL_VERY_EXPENSIVE"),
            Some(PriceLevel::VeryExpensive)
        );
        assert_eq!(PriceLevel::parse("PRICE_LEVEL_UNSPECIFIED"), None);
        assert_eq!(PriceLevel::parse("garbage"), None);
    }

    #[test]
    fn price_level_ordinals_cover_zero_to_four() {
        assert_eq!(PriceLevel::from_index(0), Some(PriceLevel::Free));
        assert_eq!(PriceLevel::from_index(4), Some(PriceLevel::VeryExpensive));
        assert_eq!(PriceLevel::from_index(5), None);
    }

    #[test]
    fn symbols_stay_between_one_and_four_yen_marks() {
        for index in 0..=4 {
            let level = PriceLevel::from_index(index).expect("index in range");
            let count = level.symbols().chars().count();
            assert!((1..=4).contains(&count));
        }
    }
}
