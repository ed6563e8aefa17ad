/// The canonical expense categories offered by the entry form.
///
/// The storage layer treats categories as free text; this enum is the
/// closed set the UI presents, with the Indonesian labels records carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    FoodAndDrink,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Education,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Makanan & Minuman",
            Self::Transport => "Transportasi",
            Self::Shopping => "Belanja",
            Self::Bills => "Tagihan",
            Self::Entertainment => "Hiburan",
            Self::Health => "Kesehatan",
            Self::Education => "Pendidikan",
            Self::Other => "Lainnya",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "makanan & minuman" => Self::FoodAndDrink,
            "transportasi" => Self::Transport,
            "belanja" => Self::Shopping,
            "tagihan" => Self::Bills,
            "hiburan" => Self::Entertainment,
            "kesehatan" => Self::Health,
            "pendidikan" => Self::Education,
            _ => Self::Other,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::FoodAndDrink,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
            Self::Health,
            Self::Education,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
