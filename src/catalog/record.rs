use std::fmt;

/// A single catalog entry. Immutable once fetched; `id` is the stable key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Type tags ordered by slot.
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
    pub abilities: Vec<Ability>,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
    pub effort: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

/// Image references. Either may be missing for a given record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprites {
    pub front: Option<String>,
    pub artwork: Option<String>,
}

impl Record {
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Official artwork when available, otherwise the front sprite.
    pub fn image_url(&self) -> Option<&str> {
        self.sprites
            .artwork
            .as_deref()
            .or(self.sprites.front.as_deref())
    }
}

/// Lookup key accepted by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Id(u32),
    Name(String),
}

impl RecordKey {
    /// Numeric keys parse to `Id`, anything else is treated as a name.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<u32>() {
            Ok(id) => Some(Self::Id(id)),
            Err(_) => Some(Self::Name(raw.to_lowercase())),
        }
    }

    pub fn id(&self) -> Option<u32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}
