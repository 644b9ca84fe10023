//! Recognized campaign field names.

use std::fmt;
use std::str::FromStr;

use crate::error::SeekerError;

/// A field of a campaign record that search and filter can address.
///
/// Field names are parsed case-insensitively. The dataset's original column
/// names (`agencia`, `medios`, `fecha_lanzamiento`, ...) are accepted as
/// aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Id,
    Name,
    Brand,
    Agency,
    Sector,
    Media,
    StrategyType,
    LaunchDate,
    Tone,
    Recognition,
    Description,
    LaunchYear,
}

impl Field {
    /// Every field, in dataset column order.
    pub const ALL: [Field; 12] = [
        Field::Id,
        Field::Name,
        Field::Brand,
        Field::Agency,
        Field::Sector,
        Field::Media,
        Field::StrategyType,
        Field::LaunchDate,
        Field::Tone,
        Field::Recognition,
        Field::Description,
        Field::LaunchYear,
    ];

    /// Returns the canonical name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Brand => "brand",
            Field::Agency => "agency",
            Field::Sector => "sector",
            Field::Media => "media",
            Field::StrategyType => "strategy_type",
            Field::LaunchDate => "launch_date",
            Field::Tone => "tone",
            Field::Recognition => "recognition",
            Field::Description => "description",
            Field::LaunchYear => "launch_year",
        }
    }

    /// Parses a field name, returning `None` when it is not recognized.
    pub fn parse(name: &str) -> Option<Field> {
        let key = name.trim().to_lowercase();
        let field = match key.as_str() {
            "id" => Field::Id,
            "name" | "nombre_campana" => Field::Name,
            "brand" | "marca" => Field::Brand,
            "agency" | "agencia" => Field::Agency,
            "sector" => Field::Sector,
            "media" | "medios" => Field::Media,
            "strategy_type" | "strategy" | "tipo_estrategia" => Field::StrategyType,
            "launch_date" | "fecha_lanzamiento" => Field::LaunchDate,
            "tone" | "tono_comunicacion" => Field::Tone,
            "recognition" | "reconocimientos" => Field::Recognition,
            "description" | "descripcion" => Field::Description,
            "launch_year" | "año_lanzamiento" => Field::LaunchYear,
            _ => return None,
        };
        Some(field)
    }

    /// Returns `true` for plain free-text attributes.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::Name
                | Field::Brand
                | Field::Agency
                | Field::Sector
                | Field::StrategyType
                | Field::Tone
                | Field::Recognition
                | Field::Description
        )
    }

    /// Returns `true` for the multi-valued media attribute.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Field::Media)
    }
}

impl FromStr for Field {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::parse(s).ok_or_else(|| SeekerError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
