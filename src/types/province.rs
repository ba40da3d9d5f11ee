//! The seven-province reference table behind the weather widget.
//!
//! Province metadata is fixed site content, not backend data: the widget
//! needs a representative city per province before any fetch happens, and the
//! highlights card renders even when the backend is down.

use std::fmt;

/// Costa Rican provinces selectable in the weather widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Province {
    SanJose,
    Alajuela,
    Cartago,
    Heredia,
    Guanacaste,
    Puntarenas,
    Limon,
}

/// Fixed descriptive metadata for one province.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvinceInfo {
    /// Representative city whose weather the widget shows.
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Whether the province holds the national capital.
    pub capital: bool,
    pub climate: &'static str,
    pub altitude: &'static str,
    pub population: &'static str,
}

/// The highlights card shown beside the weather grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvinceHighlights {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: [&'static str; 4],
}

impl Province {
    /// All provinces, in display order.
    pub const ALL: [Province; 7] = [
        Province::SanJose,
        Province::Alajuela,
        Province::Cartago,
        Province::Heredia,
        Province::Guanacaste,
        Province::Puntarenas,
        Province::Limon,
    ];

    /// Display name of the province.
    pub fn name(&self) -> &'static str {
        match self {
            Province::SanJose => "San José",
            Province::Alajuela => "Alajuela",
            Province::Cartago => "Cartago",
            Province::Heredia => "Heredia",
            Province::Guanacaste => "Guanacaste",
            Province::Puntarenas => "Puntarenas",
            Province::Limon => "Limón",
        }
    }

    /// Looks a province up by its display name.
    pub fn from_name(name: &str) -> Option<Province> {
        Province::ALL
            .iter()
            .copied()
            .find(|province| province.name() == name)
    }

    /// Fixed metadata for the province.
    pub fn info(&self) -> ProvinceInfo {
        match self {
            Province::SanJose => ProvinceInfo {
                city: "San José",
                latitude: 9.9281,
                longitude: -84.0907,
                capital: true,
                climate: "Templado tropical",
                altitude: "1170 m",
                population: "2.1 millones",
            },
            Province::Alajuela => ProvinceInfo {
                city: "Alajuela",
                latitude: 10.0162,
                longitude: -84.2118,
                capital: false,
                climate: "Tropical seco",
                altitude: "952 m",
                population: "1 millón",
            },
            Province::Cartago => ProvinceInfo {
                city: "Cartago",
                latitude: 9.8644,
                longitude: -83.9186,
                capital: false,
                climate: "Templado húmedo",
                altitude: "1435 m",
                population: "490,000",
            },
            Province::Heredia => ProvinceInfo {
                city: "Heredia",
                latitude: 9.9989,
                longitude: -84.1174,
                capital: false,
                climate: "Templado",
                altitude: "1150 m",
                population: "433,000",
            },
            Province::Guanacaste => ProvinceInfo {
                city: "Liberia",
                latitude: 10.6346,
                longitude: -85.4370,
                capital: false,
                climate: "Tropical seco",
                altitude: "144 m",
                population: "326,000",
            },
            Province::Puntarenas => ProvinceInfo {
                city: "Puntarenas",
                latitude: 9.9761,
                longitude: -84.8303,
                capital: false,
                climate: "Tropical húmedo",
                altitude: "3 m",
                population: "410,000",
            },
            Province::Limon => ProvinceInfo {
                city: "Puerto Limón",
                latitude: 10.0000,
                longitude: -83.0333,
                capital: false,
                climate: "Tropical húmedo",
                altitude: "5 m",
                population: "386,000",
            },
        }
    }

    /// The highlights card content for the province.
    pub fn highlights(&self) -> ProvinceHighlights {
        match self {
            Province::SanJose => ProvinceHighlights {
                icon: "🏛️",
                title: "San José (Central)",
                lines: [
                    "🌡️ Clima templado todo el año (18-26°C)",
                    "🏛️ Centro cultural y comercial del país",
                    "🚗 Fácil acceso a otras provincias",
                    "🏥 Mejores servicios médicos y educativos",
                ],
            },
            Province::Alajuela => ProvinceHighlights {
                icon: "✈️",
                title: "Alajuela",
                lines: [
                    "☀️ Clima cálido y soleado (20-30°C)",
                    "✈️ Cerca del Aeropuerto Internacional",
                    "🌋 Volcán Arenal y aguas termales",
                    "🍃 Rica biodiversidad y ecoturismo",
                ],
            },
            Province::Cartago => ProvinceHighlights {
                icon: "⛪",
                title: "Cartago",
                lines: [
                    "🌤️ Clima fresco de montaña (15-22°C)",
                    "⛪ Rica historia colonial y religiosa",
                    "🏔️ Volcán Irazú y paisajes montañosos",
                    "🌿 Agricultura de altura y café",
                ],
            },
            Province::Heredia => ProvinceHighlights {
                icon: "🎓",
                title: "Heredia",
                lines: [
                    "🌤️ Clima ideal para vivir (18-25°C)",
                    "🎓 Ciudad universitaria y educativa",
                    "🌲 Cerca de bosques nubosos",
                    "☕ Excelente café de montaña",
                ],
            },
            Province::Guanacaste => ProvinceHighlights {
                icon: "🏖️",
                title: "Liberia (Guanacaste)",
                lines: [
                    "☀️ Clima seco y soleado (25-35°C)",
                    "🏖️ Mejores playas del Pacífico",
                    "🐴 Cultura ganadera tradicional",
                    "🌅 Perfecto para turismo de sol y playa",
                ],
            },
            Province::Puntarenas => ProvinceHighlights {
                icon: "🌊",
                title: "Puntarenas",
                lines: [
                    "🌊 Clima tropical costero (24-32°C)",
                    "⛵ Puerto principal del Pacífico",
                    "🐋 Avistamiento de ballenas",
                    "🎣 Pesca deportiva de clase mundial",
                ],
            },
            Province::Limon => ProvinceHighlights {
                icon: "🌴",
                title: "Puerto Limón",
                lines: [
                    "🌴 Clima caribeño húmedo (22-30°C)",
                    "🏝️ Playas del Caribe costarricense",
                    "🦥 Parques nacionales únicos",
                    "🎵 Rica cultura afro-caribeña",
                ],
            },
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for province in Province::ALL {
            assert_eq!(Province::from_name(province.name()), Some(province));
        }
        assert_eq!(Province::from_name("Osa"), None);
    }

    #[test]
    fn only_san_jose_is_the_capital() {
        let capitals: Vec<Province> = Province::ALL
            .iter()
            .copied()
            .filter(|province| province.info().capital)
            .collect();
        assert_eq!(capitals, vec![Province::SanJose]);
    }

    #[test]
    fn coastal_provinces_use_a_different_weather_city() {
        assert_eq!(Province::Guanacaste.info().city, "Liberia");
        assert_eq!(Province::Limon.info().city, "Puerto Limón");
        assert_eq!(Province::Heredia.info().city, "Heredia");
    }
}
